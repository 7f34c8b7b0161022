// Copyright 2017-2019 Sean Gillespie.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.
use rand::seq::SliceRandom;
use rand::Rng;

use crate::game::GameState;
use crate::movegen;

/// Plays up to `plies` uniformly random moves, alternating sides, and returns how many were
/// played. Stops early if the side to move has nothing to play.
pub fn random_playout<R: Rng + ?Sized>(state: &mut GameState, plies: usize, rng: &mut R) -> usize {
    let mut played = 0;
    while played < plies {
        let moves = movegen::all_moves(state);
        let (from, to) = match moves.choose(rng) {
            Some(&mov) => mov,
            None => {
                debug!("{:?} has no moves after {} plies", state.turn(), played);
                break;
            }
        };

        if let Err(err) = state.apply_move(from, to) {
            warn!("playout stopped: {}", err);
            break;
        }

        played += 1;
    }

    played
}

// Copyright 2017-2019 Sean Gillespie.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.
use rayon::prelude::*;

use crate::game::GameState;
use crate::movegen;

/// Counts the leaves of the pseudo-legal move tree of the given depth. Since king safety is never
/// checked, counts only agree with the usual published perft numbers while no side can be in
/// check, which from the starting position holds through depth 3.
pub fn perft(state: &GameState, depth: u32) -> u64 {
    if depth == 0 {
        return 1;
    }

    let moves = movegen::all_moves(state);
    if depth == 1 {
        return moves.len() as u64;
    }

    moves
        .par_iter()
        .map(|&(from, to)| {
            let mut next = state.clone();
            match next.apply_move(from, to) {
                Ok(_) => perft(&next, depth - 1),
                Err(err) => {
                    warn!("generated move was rejected: {}", err);
                    0
                }
            }
        })
        .sum()
}

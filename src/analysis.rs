// Copyright 2017-2019 Sean Gillespie.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.
use std::fmt;

use crate::game::GameState;
use crate::movegen;
use crate::types::{Color, COLORS};

/// Per-side move and capture totals for a game.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Statistics {
    pub white_moves: u32,
    pub black_moves: u32,
    pub white_captures: u32,
    pub black_captures: u32,
}

impl Statistics {
    pub fn of(state: &GameState) -> Statistics {
        let mut stats = Statistics {
            white_captures: state.white_captures(),
            black_captures: state.black_captures(),
            ..Statistics::default()
        };

        // Moves are attributed by the color of the piece that moved.
        for record in state.history() {
            match record.color() {
                Color::White => stats.white_moves += 1,
                Color::Black => stats.black_moves += 1,
            }
        }

        stats
    }
}

impl fmt::Display for Statistics {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "white moves:    {}", self.white_moves)?;
        writeln!(f, "black moves:    {}", self.black_moves)?;
        writeln!(f, "white captures: {}", self.white_captures)?;
        writeln!(f, "black captures: {}", self.black_captures)
    }
}

/// Provider of simple queries over a static game state, for display alongside the board.
pub struct Analysis<'a> {
    state: &'a GameState,
}

impl<'a> Analysis<'a> {
    pub fn new(state: &'a GameState) -> Analysis<'a> {
        Analysis { state }
    }

    pub fn statistics(&self) -> Statistics {
        Statistics::of(self.state)
    }

    /// Number of pieces the given color has on the board.
    pub fn material(&self, color: Color) -> usize {
        self.state
            .board()
            .pieces()
            .filter(|&(_, piece)| piece.color() == Some(color))
            .count()
    }

    /// Number of pseudo-legal moves available to the given color, whether or not it is that
    /// color's turn.
    pub fn mobility(&self, color: Color) -> usize {
        let board = self.state.board();
        board
            .pieces()
            .filter(|&(_, piece)| piece.color() == Some(color))
            .map(|(sq, _)| movegen::destinations(board, sq).len())
            .sum()
    }

    /// Material for both sides, indexed White then Black.
    pub fn material_balance(&self) -> [usize; 2] {
        let mut balance = [0; 2];
        for (idx, &color) in COLORS.iter().enumerate() {
            balance[idx] = self.material(color);
        }

        balance
    }
}

#[cfg(test)]
mod tests {
    use super::{Analysis, Statistics};

    use crate::game::GameState;
    use crate::types::{Color, Square};

    fn sq(name: &str) -> Square {
        name.parse().unwrap()
    }

    #[test]
    fn statistics_split_by_color() {
        let mut state = GameState::new();
        state.apply_move(sq("e2"), sq("e4")).unwrap();
        state.apply_move(sq("d7"), sq("d5")).unwrap();
        state.apply_move(sq("e4"), sq("d5")).unwrap();

        let stats = Statistics::of(&state);
        assert_eq!(2, stats.white_moves);
        assert_eq!(1, stats.black_moves);
        assert_eq!(1, stats.white_captures);
        assert_eq!(0, stats.black_captures);
    }

    #[test]
    fn statistics_of_new_game() {
        assert_eq!(Statistics::default(), Statistics::of(&GameState::new()));
    }

    #[test]
    fn mobility_smoke() {
        let state = GameState::new();
        let analysis = Analysis::new(&state);
        assert_eq!(20, analysis.mobility(Color::White));
        assert_eq!(20, analysis.mobility(Color::Black));
    }

    #[test]
    fn material_after_capture() {
        let mut state = GameState::new();
        state.apply_move(sq("e2"), sq("e4")).unwrap();
        state.apply_move(sq("d7"), sq("d5")).unwrap();
        state.apply_move(sq("e4"), sq("d5")).unwrap();

        let analysis = Analysis::new(&state);
        assert_eq!([16, 15], analysis.material_balance());
    }
}

// Copyright 2017-2019 Sean Gillespie.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.
use std::fmt;

use crate::board::{Board, PlacementParseError};
use crate::error::EngineError;
use crate::movegen;
use crate::moves::MoveRecord;
use crate::types::{Color, Piece, PieceKind, Square, TableIndex};

/// One game in progress: the board, whose turn it is, what has been played so far, and how many
/// captures each side has made.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    board: Board,
    side_to_move: Color,
    history: Vec<MoveRecord>,
    captures: [u32; 2],
}

//
// Game state getters
//

impl GameState {
    pub fn new() -> GameState {
        GameState::from_board(Board::starting(), Color::White)
    }

    /// A game with an arbitrary arrangement, no history and no captures. Any number of kings,
    /// including none, is accepted.
    pub fn from_board(board: Board, side_to_move: Color) -> GameState {
        GameState {
            board,
            side_to_move,
            history: vec![],
            captures: [0; 2],
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn piece_at(&self, square: Square) -> Piece {
        self.board.piece_at(square)
    }

    /// Looks up a square by raw coordinates, failing if they are off the board.
    pub fn piece_at_coords(&self, row: usize, col: usize) -> Result<Piece, EngineError> {
        Square::new(row, col).map(|sq| self.piece_at(sq))
    }

    pub fn turn(&self) -> Color {
        self.side_to_move
    }

    pub fn captures(&self, color: Color) -> u32 {
        self.captures[color.as_index()]
    }

    pub fn white_captures(&self) -> u32 {
        self.captures(Color::White)
    }

    pub fn black_captures(&self) -> u32 {
        self.captures(Color::Black)
    }

    /// Every move applied since the game started or was last reset, oldest first.
    pub fn history(&self) -> &[MoveRecord] {
        &self.history
    }
}

//
// Move application and reset
//

impl GameState {
    /// Restores the starting position with White to move, forgetting all history and captures.
    pub fn reset(&mut self) {
        info!("resetting game after {} moves", self.history.len());
        *self = GameState::new();
    }

    /// Moves the piece on `from` to `to` and passes the turn.
    ///
    /// `to` must be one of `legal_moves(self, from)` and the piece on `from` must belong to the
    /// side to move. Anything else is rejected with `EngineError::InvalidMove` and the game is not
    /// modified.
    pub fn apply_move(&mut self, from: Square, to: Square) -> Result<MoveRecord, EngineError> {
        let (kind, color) = match self.piece_at(from) {
            Piece::Occupied(kind, color) if color == self.side_to_move => (kind, color),
            _ => {
                warn!("rejected {}->{}: no {:?} piece on {}", from, to, self.side_to_move, from);
                return Err(EngineError::InvalidMove { from, to });
            }
        };

        if !movegen::destinations(&self.board, from).contains(&to) {
            warn!("rejected {}->{}: not a destination of {}", from, to, self.piece_at(from));
            return Err(EngineError::InvalidMove { from, to });
        }

        // The side on move is credited with anything standing on the destination.
        let captured = self.board.piece_at(to);
        if !captured.is_empty() {
            self.captures[self.side_to_move.as_index()] += 1;
        }

        self.board.set(to, Piece::new(kind, color));
        self.board.set(from, Piece::Empty);

        let promotion_row = match color {
            Color::White => 0,
            Color::Black => 7,
        };
        let promoted = kind == PieceKind::Pawn && to.row() == promotion_row;
        if promoted {
            self.board.set(to, Piece::new(PieceKind::Queen, color));
        }

        // The record keeps the kind the piece had when it left `from`, so a promotion is logged
        // as a pawn move. This matches how games have always been recorded here, even though the
        // board now shows a queen.
        let record = MoveRecord::new(kind, color, from, to, captured, promoted);
        self.history.push(record);
        self.side_to_move = self.side_to_move.toggle();
        debug!("applied {} (captured {}, promoted {})", record, captured, promoted);
        Ok(record)
    }
}

//
// Placement notation
//

impl GameState {
    /// Builds a game from placement notation, optionally followed by a space and `w` or `b` for
    /// the side to move (White if omitted). Further FEN fields are ignored.
    pub fn from_placement<S: AsRef<str>>(placement: S) -> Result<GameState, PlacementParseError> {
        let mut fields = placement.as_ref().split_whitespace();
        let board = Board::from_placement(fields.next().unwrap_or(""))?;
        let side_to_move = match fields.next() {
            None | Some("w") => Color::White,
            Some("b") => Color::Black,
            Some(_) => return Err(PlacementParseError::InvalidSideToMove),
        };

        Ok(GameState::from_board(board, side_to_move))
    }

    pub fn as_placement(&self) -> String {
        format!("{} {}", self.board.as_placement(), self.side_to_move)
    }
}

impl fmt::Display for GameState {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.board)?;
        writeln!(f, "{:?} to move", self.side_to_move)
    }
}

impl Default for GameState {
    fn default() -> Self {
        GameState::new()
    }
}

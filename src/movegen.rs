// Copyright 2017-2019 Sean Gillespie.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Pseudo-legal move generation. Moves obey each piece's geometry and never pass through or land
//! on a friendly piece, but king safety is not considered: a pinned piece may still move, and a
//! king may step into check.
use std::ops::Deref;

use arrayvec::ArrayVec;

use crate::board::Board;
use crate::game::GameState;
use crate::types::{Color, Direction, Piece, PieceKind, Square};

const KNIGHT_OFFSETS: [(i8, i8); 8] = [
    (2, 1),
    (2, -1),
    (-2, 1),
    (-2, -1),
    (1, 2),
    (1, -2),
    (-1, 2),
    (-1, -2),
];

const KING_OFFSETS: [(i8, i8); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

const ROOK_DIRECTIONS: [Direction; 4] = [
    Direction::South,
    Direction::North,
    Direction::East,
    Direction::West,
];

const BISHOP_DIRECTIONS: [Direction; 4] = [
    Direction::SouthEast,
    Direction::SouthWest,
    Direction::NorthEast,
    Direction::NorthWest,
];

const QUEEN_DIRECTIONS: [Direction; 8] = [
    Direction::South,
    Direction::North,
    Direction::East,
    Direction::West,
    Direction::SouthEast,
    Direction::SouthWest,
    Direction::NorthEast,
    Direction::NorthWest,
];

/// The destinations reachable from a single square, in generation order. A queen in the middle of
/// an empty board has 27 destinations, which is the most any one piece can have.
#[derive(Clone, Debug, Default)]
pub struct MoveSet {
    squares: ArrayVec<[Square; 32]>,
}

impl MoveSet {
    fn push(&mut self, square: Square) {
        self.squares.push(square);
    }
}

impl Deref for MoveSet {
    type Target = [Square];

    fn deref(&self) -> &[Square] {
        &self.squares
    }
}

impl<'a> IntoIterator for &'a MoveSet {
    type Item = &'a Square;
    type IntoIter = std::slice::Iter<'a, Square>;

    fn into_iter(self) -> Self::IntoIter {
        self.squares.iter()
    }
}

/// Returns every square the piece on `origin` may move to. An empty origin yields an empty set.
///
/// The piece does not have to belong to the side to move; callers that only want moves for the
/// player on turn should check the piece's color first.
pub fn legal_moves(state: &GameState, origin: Square) -> MoveSet {
    destinations(state.board(), origin)
}

/// Every (origin, destination) pair available to the side to move, ordered by origin square in
/// row-major order.
pub fn all_moves(state: &GameState) -> Vec<(Square, Square)> {
    let to_move = state.turn();
    let mut moves = vec![];
    for (origin, piece) in state.board().pieces() {
        if piece.color() != Some(to_move) {
            continue;
        }

        for &dest in &destinations(state.board(), origin) {
            moves.push((origin, dest));
        }
    }

    moves
}

pub(crate) fn destinations(board: &Board, origin: Square) -> MoveSet {
    let mut moves = MoveSet::default();
    let (kind, color) = match board.piece_at(origin) {
        Piece::Occupied(kind, color) => (kind, color),
        Piece::Empty => return moves,
    };

    match kind {
        PieceKind::Pawn => add_pawn_moves(board, origin, color, &mut moves),
        kind if kind.is_sliding() => {
            add_slide_moves(board, origin, color, slide_directions(kind), &mut moves)
        }
        kind => add_step_moves(board, origin, color, step_offsets(kind), &mut moves),
    }

    trace!(
        "{} on {}: {} destinations",
        board.piece_at(origin),
        origin,
        moves.len()
    );
    moves
}

fn slide_directions(kind: PieceKind) -> &'static [Direction] {
    match kind {
        PieceKind::Bishop => &BISHOP_DIRECTIONS,
        PieceKind::Rook => &ROOK_DIRECTIONS,
        _ => &QUEEN_DIRECTIONS,
    }
}

fn step_offsets(kind: PieceKind) -> &'static [(i8, i8)] {
    match kind {
        PieceKind::King => &KING_OFFSETS,
        _ => &KNIGHT_OFFSETS,
    }
}

fn add_pawn_moves(board: &Board, pawn: Square, color: Color, moves: &mut MoveSet) {
    let (direction, home_row) = match color {
        Color::White => (Direction::North, 6),
        Color::Black => (Direction::South, 1),
    };

    // non-capturing moves
    if let Some(target) = pawn.towards(direction) {
        if board.piece_at(target).is_empty() {
            moves.push(target);

            // double pushes, only if both squares in front of the pawn are clear
            if pawn.row() == home_row {
                if let Some(two_push_target) = target.towards(direction) {
                    if board.piece_at(two_push_target).is_empty() {
                        moves.push(two_push_target);
                    }
                }
            }
        }
    }

    // captures, only onto enemy pieces
    let (dr, _) = direction.as_vector();
    for &dc in &[-1, 1] {
        if let Some(attack_sq) = pawn.offset(dr, dc) {
            if board.piece_at(attack_sq).is_enemy_of(color) {
                moves.push(attack_sq);
            }
        }
    }
}

fn add_step_moves(
    board: &Board,
    origin: Square,
    color: Color,
    offsets: &[(i8, i8)],
    moves: &mut MoveSet,
) {
    for &(dr, dc) in offsets {
        if let Some(target) = origin.offset(dr, dc) {
            if board.piece_at(target).color() != Some(color) {
                moves.push(target);
            }
        }
    }
}

fn add_slide_moves(
    board: &Board,
    origin: Square,
    color: Color,
    directions: &[Direction],
    moves: &mut MoveSet,
) {
    for &dir in directions {
        let mut cursor = origin.towards(dir);
        while let Some(target) = cursor {
            let occupant = board.piece_at(target);
            if occupant.is_empty() {
                moves.push(target);
                cursor = target.towards(dir);
                continue;
            }

            // the first occupied square ends the ray; it is a destination only if it can be
            // captured.
            if occupant.is_enemy_of(color) {
                moves.push(target);
            }
            break;
        }
    }
}

// Copyright 2017-2019 Sean Gillespie.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.
use std::fmt;

use crate::types::{Color, Piece, PieceKind, Square};

/// A log entry for one applied move. Records are produced by `GameState::apply_move` and are
/// never modified afterwards.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveRecord {
    kind: PieceKind,
    color: Color,
    from: Square,
    to: Square,
    captured: Piece,
    promoted: bool,
}

impl MoveRecord {
    pub fn new(
        kind: PieceKind,
        color: Color,
        from: Square,
        to: Square,
        captured: Piece,
        promoted: bool,
    ) -> MoveRecord {
        MoveRecord {
            kind,
            color,
            from,
            to,
            captured,
            promoted,
        }
    }

    /// The kind of the piece as it stood before the move. A pawn that promoted is still reported
    /// as a pawn here, even though the destination now holds a queen.
    pub fn kind(&self) -> PieceKind {
        self.kind
    }

    pub fn color(&self) -> Color {
        self.color
    }

    pub fn source(&self) -> Square {
        self.from
    }

    pub fn destination(&self) -> Square {
        self.to
    }

    /// The piece that stood on the destination square, `Piece::Empty` for quiet moves.
    pub fn captured(&self) -> Piece {
        self.captured
    }

    pub fn is_capture(&self) -> bool {
        !self.captured.is_empty()
    }

    pub fn is_promotion(&self) -> bool {
        self.promoted
    }
}

impl fmt::Display for MoveRecord {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} {}->{}", self.kind, self.from, self.to)
    }
}

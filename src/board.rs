// Copyright 2017-2019 Sean Gillespie.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! The 8x8 grid of pieces. A `Board` knows nothing about whose turn it is or what happened
//! before; that lives in `GameState`.
//!
//! Boards can be written and read in placement notation, the first field of a FEN string:
//! rows separated by `/`, starting from row 0 (rank 8), with digits standing for runs of empty
//! squares. A `.` is also accepted as a single empty square.
use std::convert::TryFrom;
use std::error::Error;
use std::fmt::{self, Write};

use crate::types::{Color, Piece, PieceKind, Rank, Square, TableIndex, FILES};

/// Possible errors that can arise when parsing placement notation into a `Board`.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum PlacementParseError {
    UnexpectedChar(char),
    UnexpectedEnd,
    InvalidDigit,
    RowDoesNotSumToEight,
    UnknownPiece(char),
    InvalidSideToMove,
    TooManyRows,
}

impl fmt::Display for PlacementParseError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            PlacementParseError::UnexpectedChar(c) => write!(f, "unexpected character '{}'", c),
            PlacementParseError::UnexpectedEnd => write!(f, "unexpected end of input"),
            PlacementParseError::InvalidDigit => write!(f, "empty runs must be 1 through 8"),
            PlacementParseError::RowDoesNotSumToEight => write!(f, "row does not sum to eight"),
            PlacementParseError::UnknownPiece(c) => write!(f, "unknown piece '{}'", c),
            PlacementParseError::InvalidSideToMove => write!(f, "side to move must be w or b"),
            PlacementParseError::TooManyRows => write!(f, "more than eight rows"),
        }
    }
}

impl Error for PlacementParseError {}

const BACK_RANK: [PieceKind; 8] = [
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Queen,
    PieceKind::King,
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::Rook,
];

lazy_static! {
    static ref START_BOARD: Board = {
        let mut board = Board::empty();
        for (col, &kind) in BACK_RANK.iter().enumerate() {
            board.squares[0][col] = Piece::new(kind, Color::Black);
            board.squares[1][col] = Piece::new(PieceKind::Pawn, Color::Black);
            board.squares[6][col] = Piece::new(PieceKind::Pawn, Color::White);
            board.squares[7][col] = Piece::new(kind, Color::White);
        }

        board
    };
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    squares: [[Piece; 8]; 8],
}

impl Board {
    pub const fn empty() -> Board {
        Board {
            squares: [[Piece::Empty; 8]; 8],
        }
    }

    /// The standard starting arrangement: Black on rows 0 and 1, White on rows 6 and 7.
    pub fn starting() -> Board {
        *START_BOARD
    }

    pub fn piece_at(&self, square: Square) -> Piece {
        self.squares[square.row()][square.col()]
    }

    pub fn set(&mut self, square: Square, piece: Piece) {
        self.squares[square.row()][square.col()] = piece;
    }

    /// Iterates over every occupied square in row-major order.
    pub fn pieces<'a>(&'a self) -> impl Iterator<Item = (Square, Piece)> + 'a {
        Square::all()
            .map(move |sq| (sq, self.piece_at(sq)))
            .filter(|&(_, piece)| !piece.is_empty())
    }

    /// Parses the piece-placement field of a FEN string.
    pub fn from_placement<S: AsRef<str>>(placement: S) -> Result<Board, PlacementParseError> {
        use std::iter::Peekable;
        use std::str::Chars;

        type Stream<'a> = Peekable<Chars<'a>>;

        // Anything that could still be part of a row, found after a full row, means the row was
        // too long.
        fn overflow_or_unexpected(c: char) -> PlacementParseError {
            if c.is_digit(10) || Piece::try_from(c).is_ok() {
                PlacementParseError::RowDoesNotSumToEight
            } else {
                PlacementParseError::UnexpectedChar(c)
            }
        }

        fn peek<'a>(iter: &mut Stream<'a>) -> Result<char, PlacementParseError> {
            if let Some(c) = iter.peek() {
                Ok(*c)
            } else {
                Err(PlacementParseError::UnexpectedEnd)
            }
        }

        let mut board = Board::empty();
        let iter = &mut placement.as_ref().chars().peekable();
        for row in 0..8 {
            let mut col = 0;
            while col < 8 {
                let c = peek(iter)?;
                // digits 1 through 8 indicate runs of empty squares.
                if let Some(value) = c.to_digit(10) {
                    if value < 1 || value > 8 {
                        return Err(PlacementParseError::InvalidDigit);
                    }

                    col += value as usize;
                    if col > 8 {
                        return Err(PlacementParseError::RowDoesNotSumToEight);
                    }

                    iter.next();
                    continue;
                }

                if c == '/' {
                    return Err(PlacementParseError::RowDoesNotSumToEight);
                }

                let piece = Piece::try_from(c).map_err(|_| PlacementParseError::UnknownPiece(c))?;
                board.squares[row][col] = piece;
                iter.next();
                col += 1;
            }

            if row != 7 {
                match iter.next() {
                    Some('/') => {}
                    Some(c) => return Err(overflow_or_unexpected(c)),
                    None => return Err(PlacementParseError::UnexpectedEnd),
                }
            }
        }

        match iter.next() {
            None => Ok(board),
            Some('/') => Err(PlacementParseError::TooManyRows),
            Some(c) => Err(overflow_or_unexpected(c)),
        }
    }

    pub fn as_placement(&self) -> String {
        let mut buf = String::new();
        for (row, cells) in self.squares.iter().enumerate() {
            let mut empty_squares = 0;
            for &piece in cells.iter() {
                if piece.is_empty() {
                    empty_squares += 1;
                    continue;
                }

                if empty_squares != 0 {
                    write!(&mut buf, "{}", empty_squares).unwrap();
                }
                write!(&mut buf, "{}", piece).unwrap();
                empty_squares = 0;
            }

            if empty_squares != 0 {
                write!(&mut buf, "{}", empty_squares).unwrap();
            }

            if row != 7 {
                buf.push('/');
            }
        }

        buf
    }
}

impl Default for Board {
    fn default() -> Self {
        Board::starting()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for (row, cells) in self.squares.iter().enumerate() {
            for piece in cells.iter() {
                write!(f, " {} ", piece)?;
            }

            writeln!(f, "| {}", Rank::from_index(7 - row))?;
        }

        for _ in &FILES {
            write!(f, "---")?;
        }

        writeln!(f)?;
        for &file in &FILES {
            write!(f, " {} ", file)?;
        }

        writeln!(f)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::{Board, PlacementParseError};
    use crate::types::{Color, Piece, PieceKind, Square};

    const START: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR";

    fn sq(name: &str) -> Square {
        name.parse().unwrap()
    }

    #[test]
    fn starting_board_layout() {
        let board = Board::starting();
        assert_eq!(32, board.pieces().count());
        assert_eq!(
            Piece::new(PieceKind::Rook, Color::Black),
            board.piece_at(sq("a8"))
        );
        assert_eq!(
            Piece::new(PieceKind::King, Color::Black),
            board.piece_at(sq("e8"))
        );
        assert_eq!(
            Piece::new(PieceKind::Queen, Color::White),
            board.piece_at(sq("d1"))
        );
        assert_eq!(
            Piece::new(PieceKind::Pawn, Color::White),
            board.piece_at(sq("h2"))
        );
        for row in 2..6 {
            for col in 0..8 {
                assert!(board.piece_at(Square::new(row, col).unwrap()).is_empty());
            }
        }
    }

    #[test]
    fn starting_placement() {
        assert_eq!(START, Board::starting().as_placement());
        assert_eq!(Board::starting(), Board::from_placement(START).unwrap());
    }

    #[test]
    fn dots_are_empty_squares() {
        let board = Board::from_placement("8/8/8/8/8/8/8/...K....").unwrap();
        assert_eq!(
            Piece::new(PieceKind::King, Color::White),
            board.piece_at(sq("d1"))
        );
        assert_eq!(1, board.pieces().count());
        assert_eq!("8/8/8/8/8/8/8/3K4", board.as_placement());
    }

    #[test]
    fn empty() {
        let err = Board::from_placement("").unwrap_err();
        assert_eq!(PlacementParseError::UnexpectedEnd, err);
    }

    #[test]
    fn unknown_piece() {
        let err = Board::from_placement("z7/8/8/8/8/8/8/8").unwrap_err();
        assert_eq!(PlacementParseError::UnknownPiece('z'), err);
    }

    #[test]
    fn invalid_digit() {
        let err = Board::from_placement("9/8/8/8/8/8/8/8").unwrap_err();
        assert_eq!(PlacementParseError::InvalidDigit, err);
    }

    #[test]
    fn not_sum_to_8() {
        let err = Board::from_placement("pppp5/8/8/8/8/8/8/8").unwrap_err();
        assert_eq!(PlacementParseError::RowDoesNotSumToEight, err);

        let err = Board::from_placement("ppp/8/8/8/8/8/8/8").unwrap_err();
        assert_eq!(PlacementParseError::RowDoesNotSumToEight, err);
    }

    #[test]
    fn too_many_pieces_in_a_row() {
        let err = Board::from_placement("ppppppppp/8/8/8/8/8/8/8").unwrap_err();
        assert_eq!(PlacementParseError::RowDoesNotSumToEight, err);

        let err = Board::from_placement("8/8/8/8/8/8/8/RNBQKBNRP").unwrap_err();
        assert_eq!(PlacementParseError::RowDoesNotSumToEight, err);

        let err = Board::from_placement("7p1/8/8/8/8/8/8/8").unwrap_err();
        assert_eq!(PlacementParseError::RowDoesNotSumToEight, err);
    }

    #[test]
    fn bad_row_separator() {
        let err = Board::from_placement("8|8/8/8/8/8/8/8").unwrap_err();
        assert_eq!(PlacementParseError::UnexpectedChar('|'), err);

        let err = Board::from_placement("8/8/8/8/8/8/8").unwrap_err();
        assert_eq!(PlacementParseError::UnexpectedEnd, err);
    }

    #[test]
    fn too_many_rows() {
        let err = Board::from_placement("8/8/8/8/8/8/8/8/8").unwrap_err();
        assert_eq!(PlacementParseError::TooManyRows, err);
    }

    #[test]
    fn display_has_rank_and_file_labels() {
        let rendered = Board::starting().to_string();
        let lines: Vec<_> = rendered.lines().collect();
        assert_eq!(10, lines.len());
        assert_eq!(" r  n  b  q  k  b  n  r | 8", lines[0]);
        assert_eq!(" .  .  .  .  .  .  .  . | 5", lines[3]);
        assert_eq!(" R  N  B  Q  K  B  N  R | 1", lines[7]);
        assert_eq!(" a  b  c  d  e  f  g  h ", lines[9]);
    }
}

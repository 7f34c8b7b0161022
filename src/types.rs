// Copyright 2017-2019 Sean Gillespie.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.
use num_traits::{FromPrimitive, ToPrimitive};
use std::convert::TryFrom;
use std::fmt::{self, Display, Write};
use std::str::FromStr;

use crate::error::{EngineError, SquareParseError};

// TableIndex is a trait for all types that can serve as an index into a table.
// It is common to use these types as indices into tables, so this trait allows
// any type implementing To and FromPrimitive to be used as table indices.
pub trait TableIndex {
    fn as_index(self) -> usize;
    fn from_index(idx: usize) -> Self;
}

impl<T> TableIndex for T
where
    T: FromPrimitive + ToPrimitive,
{
    fn as_index(self) -> usize {
        self.to_u32().unwrap() as usize
    }

    fn from_index(idx: usize) -> T {
        <T as FromPrimitive>::from_u64(idx as u64).unwrap()
    }
}

/// A square on the board, addressed by row and column. Row 0 is the far rank (Black's back rank,
/// rank 8) and row 7 is the near rank (White's back rank, rank 1). A `Square` is always on the
/// board; raw coordinates are validated by `Square::new`.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Square {
    row: u8,
    col: u8,
}

impl Square {
    pub fn new(row: usize, col: usize) -> Result<Square, EngineError> {
        if row >= 8 || col >= 8 {
            return Err(EngineError::OutOfRange { row, col });
        }

        Ok(Square {
            row: row as u8,
            col: col as u8,
        })
    }

    pub fn of(rank: Rank, file: File) -> Square {
        Square {
            row: 7 - rank.as_index() as u8,
            col: file.as_index() as u8,
        }
    }

    pub fn row(self) -> usize {
        self.row as usize
    }

    pub fn col(self) -> usize {
        self.col as usize
    }

    pub fn rank(self) -> Rank {
        Rank::from_index(7 - self.row as usize)
    }

    pub fn file(self) -> File {
        File::from_index(self.col as usize)
    }

    /// Returns the square `dr` rows and `dc` columns away from this one, or `None` if that square
    /// falls off the board.
    pub fn offset(self, dr: i8, dc: i8) -> Option<Square> {
        let row = self.row as i8 + dr;
        let col = self.col as i8 + dc;
        if row < 0 || row >= 8 || col < 0 || col >= 8 {
            return None;
        }

        Some(Square {
            row: row as u8,
            col: col as u8,
        })
    }

    pub fn towards(self, dir: Direction) -> Option<Square> {
        let (dr, dc) = dir.as_vector();
        self.offset(dr, dc)
    }

    /// All 64 squares in row-major order, starting from a8.
    pub fn all() -> impl Iterator<Item = Square> {
        (0..64u8).map(|idx| Square {
            row: idx / 8,
            col: idx % 8,
        })
    }
}

impl Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}{}", self.file(), self.rank())
    }
}

impl FromStr for Square {
    type Err = SquareParseError;

    fn from_str(s: &str) -> Result<Square, SquareParseError> {
        let chars: Vec<_> = s.chars().collect();
        if chars.len() != 2 {
            return Err(SquareParseError::WrongLength);
        }

        let file = File::try_from(chars[0]).map_err(|_| SquareParseError::InvalidFile(chars[0]))?;
        let rank = Rank::try_from(chars[1]).map_err(|_| SquareParseError::InvalidRank(chars[1]))?;
        Ok(Square::of(rank, file))
    }
}

impl TryFrom<String> for Square {
    type Error = SquareParseError;

    fn try_from(value: String) -> Result<Square, SquareParseError> {
        value.parse()
    }
}

impl From<Square> for String {
    fn from(square: Square) -> String {
        square.to_string()
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, FromPrimitive, ToPrimitive)]
pub enum Rank {
    One,
    Two,
    Three,
    Four,
    Five,
    Six,
    Seven,
    Eight,
}

impl Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let chr = match self {
            Rank::One => '1',
            Rank::Two => '2',
            Rank::Three => '3',
            Rank::Four => '4',
            Rank::Five => '5',
            Rank::Six => '6',
            Rank::Seven => '7',
            Rank::Eight => '8',
        };
        f.write_char(chr)
    }
}

impl TryFrom<char> for Rank {
    type Error = ();

    fn try_from(value: char) -> Result<Self, Self::Error> {
        let res = match value {
            '1' => Rank::One,
            '2' => Rank::Two,
            '3' => Rank::Three,
            '4' => Rank::Four,
            '5' => Rank::Five,
            '6' => Rank::Six,
            '7' => Rank::Seven,
            '8' => Rank::Eight,
            _ => return Err(()),
        };
        Ok(res)
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, FromPrimitive, ToPrimitive)]
pub enum File {
    A,
    B,
    C,
    D,
    E,
    F,
    G,
    H,
}

impl Display for File {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let chr = match self {
            File::A => 'a',
            File::B => 'b',
            File::C => 'c',
            File::D => 'd',
            File::E => 'e',
            File::F => 'f',
            File::G => 'g',
            File::H => 'h',
        };
        f.write_char(chr)
    }
}

impl TryFrom<char> for File {
    type Error = ();

    fn try_from(value: char) -> Result<Self, Self::Error> {
        let res = match value {
            'a' => File::A,
            'b' => File::B,
            'c' => File::C,
            'd' => File::D,
            'e' => File::E,
            'f' => File::F,
            'g' => File::G,
            'h' => File::H,
            _ => return Err(()),
        };
        Ok(res)
    }
}

pub static FILES: [File; 8] = [
    File::A,
    File::B,
    File::C,
    File::D,
    File::E,
    File::F,
    File::G,
    File::H,
];

#[derive(
    Copy, Clone, Debug, PartialEq, Eq, Hash, FromPrimitive, ToPrimitive, Serialize, Deserialize,
)]
pub enum Color {
    White,
    Black,
}

impl Color {
    pub fn toggle(self) -> Color {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }
}

impl Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let chr = match self {
            Color::White => 'w',
            Color::Black => 'b',
        };
        f.write_char(chr)
    }
}

pub static COLORS: [Color; 2] = [Color::White, Color::Black];

#[derive(
    Copy, Clone, Debug, PartialEq, Eq, Hash, FromPrimitive, ToPrimitive, Serialize, Deserialize,
)]
pub enum PieceKind {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

impl PieceKind {
    pub fn is_sliding(self) -> bool {
        match self {
            PieceKind::Pawn | PieceKind::Knight | PieceKind::King => false,
            _ => true,
        }
    }
}

/// Kinds render as their uppercase letter, independent of color, which is the form used in move
/// history.
impl Display for PieceKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let chr = match self {
            PieceKind::Pawn => 'P',
            PieceKind::Knight => 'N',
            PieceKind::Bishop => 'B',
            PieceKind::Rook => 'R',
            PieceKind::Queen => 'Q',
            PieceKind::King => 'K',
        };
        f.write_char(chr)
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, FromPrimitive, ToPrimitive)]
pub enum Direction {
    North,
    NorthEast,
    East,
    SouthEast,
    South,
    SouthWest,
    West,
    NorthWest,
}

impl Direction {
    /// (row, column) step. North points at row 0, which is Black's side of the board.
    pub fn as_vector(self) -> (i8, i8) {
        match self {
            Direction::North => (-1, 0),
            Direction::NorthEast => (-1, 1),
            Direction::East => (0, 1),
            Direction::SouthEast => (1, 1),
            Direction::South => (1, 0),
            Direction::SouthWest => (1, -1),
            Direction::West => (0, -1),
            Direction::NorthWest => (-1, -1),
        }
    }
}

/// The contents of a single square: either nothing, or a piece of some kind and color.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Piece {
    Empty,
    Occupied(PieceKind, Color),
}

impl Piece {
    pub const fn new(kind: PieceKind, color: Color) -> Piece {
        Piece::Occupied(kind, color)
    }

    pub fn is_empty(self) -> bool {
        self == Piece::Empty
    }

    pub fn color(self) -> Option<Color> {
        match self {
            Piece::Occupied(_, color) => Some(color),
            Piece::Empty => None,
        }
    }

    pub fn kind(self) -> Option<PieceKind> {
        match self {
            Piece::Occupied(kind, _) => Some(kind),
            Piece::Empty => None,
        }
    }

    /// True if this square holds a piece that `color` may capture.
    pub fn is_enemy_of(self, color: Color) -> bool {
        match self {
            Piece::Occupied(_, other) => other != color,
            Piece::Empty => false,
        }
    }
}

impl Default for Piece {
    fn default() -> Piece {
        Piece::Empty
    }
}

impl TryFrom<char> for Piece {
    type Error = ();

    fn try_from(c: char) -> Result<Self, Self::Error> {
        let res = match c {
            'P' => Piece::new(PieceKind::Pawn, Color::White),
            'N' => Piece::new(PieceKind::Knight, Color::White),
            'B' => Piece::new(PieceKind::Bishop, Color::White),
            'R' => Piece::new(PieceKind::Rook, Color::White),
            'Q' => Piece::new(PieceKind::Queen, Color::White),
            'K' => Piece::new(PieceKind::King, Color::White),
            'p' => Piece::new(PieceKind::Pawn, Color::Black),
            'n' => Piece::new(PieceKind::Knight, Color::Black),
            'b' => Piece::new(PieceKind::Bishop, Color::Black),
            'r' => Piece::new(PieceKind::Rook, Color::Black),
            'q' => Piece::new(PieceKind::Queen, Color::Black),
            'k' => Piece::new(PieceKind::King, Color::Black),
            '.' => Piece::Empty,
            _ => return Err(()),
        };
        Ok(res)
    }
}

impl Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            Piece::Empty => f.write_char('.'),
            Piece::Occupied(kind, Color::White) => write!(f, "{}", kind),
            Piece::Occupied(kind, Color::Black) => {
                let upper = kind.to_string();
                f.write_str(&upper.to_lowercase())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::convert::TryFrom;

    use super::{Color, Direction, File, Piece, PieceKind, Rank, Square};
    use crate::error::{EngineError, SquareParseError};

    #[test]
    fn square_coordinates_match_algebraic_names() {
        let e2 = Square::new(6, 4).unwrap();
        assert_eq!("e2", e2.to_string());
        assert_eq!(File::E, e2.file());
        assert_eq!(Rank::Two, e2.rank());

        let a8 = Square::new(0, 0).unwrap();
        assert_eq!("a8", a8.to_string());

        let h1 = Square::new(7, 7).unwrap();
        assert_eq!("h1", h1.to_string());
    }

    #[test]
    fn square_out_of_range() {
        assert_eq!(
            EngineError::OutOfRange { row: 8, col: 0 },
            Square::new(8, 0).unwrap_err()
        );
        assert_eq!(
            EngineError::OutOfRange { row: 3, col: 12 },
            Square::new(3, 12).unwrap_err()
        );
    }

    #[test]
    fn square_parse() {
        let sq: Square = "e4".parse().unwrap();
        assert_eq!(4, sq.row());
        assert_eq!(4, sq.col());

        assert_eq!(SquareParseError::WrongLength, "e".parse::<Square>().unwrap_err());
        assert_eq!(
            SquareParseError::InvalidFile('z'),
            "z4".parse::<Square>().unwrap_err()
        );
        assert_eq!(
            SquareParseError::InvalidRank('9'),
            "a9".parse::<Square>().unwrap_err()
        );
    }

    #[test]
    fn offsets_stop_at_the_edge() {
        let a8: Square = "a8".parse().unwrap();
        assert!(a8.towards(Direction::North).is_none());
        assert!(a8.towards(Direction::West).is_none());
        assert_eq!("a7", a8.towards(Direction::South).unwrap().to_string());
        assert_eq!("b8", a8.towards(Direction::East).unwrap().to_string());
        assert!(a8.offset(-1, 2).is_none());
    }

    #[test]
    fn all_squares_row_major() {
        let squares: Vec<_> = Square::all().collect();
        assert_eq!(64, squares.len());
        assert_eq!("a8", squares[0].to_string());
        assert_eq!("h8", squares[7].to_string());
        assert_eq!("a7", squares[8].to_string());
        assert_eq!("h1", squares[63].to_string());
    }

    #[test]
    fn piece_chars() {
        assert_eq!(
            Piece::new(PieceKind::Knight, Color::White),
            Piece::try_from('N').unwrap()
        );
        assert_eq!(
            Piece::new(PieceKind::Queen, Color::Black),
            Piece::try_from('q').unwrap()
        );
        assert_eq!(Piece::Empty, Piece::try_from('.').unwrap());
        assert!(Piece::try_from('x').is_err());

        assert_eq!("N", Piece::new(PieceKind::Knight, Color::White).to_string());
        assert_eq!("q", Piece::new(PieceKind::Queen, Color::Black).to_string());
        assert_eq!(".", Piece::Empty.to_string());
    }

    #[test]
    fn sliding_kinds() {
        assert!(PieceKind::Bishop.is_sliding());
        assert!(PieceKind::Rook.is_sliding());
        assert!(PieceKind::Queen.is_sliding());
        assert!(!PieceKind::Pawn.is_sliding());
        assert!(!PieceKind::Knight.is_sliding());
        assert!(!PieceKind::King.is_sliding());
    }

    #[test]
    fn empty_has_no_color() {
        assert_eq!(None, Piece::Empty.color());
        assert_eq!(
            Some(Color::Black),
            Piece::new(PieceKind::Pawn, Color::Black).color()
        );
        assert!(!Piece::Empty.is_enemy_of(Color::White));
        assert!(Piece::new(PieceKind::Pawn, Color::Black).is_enemy_of(Color::White));
        assert!(!Piece::new(PieceKind::Pawn, Color::White).is_enemy_of(Color::White));
    }
}

// Copyright 2017-2019 Sean Gillespie.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.
use std::error::Error;
use std::fmt;

use crate::types::Square;

/// Errors produced by the public board and move APIs.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum EngineError {
    /// Raw coordinates that do not name a square on the board.
    OutOfRange { row: usize, col: usize },

    /// A move whose origin is empty, belongs to the side not on move, or whose destination is not
    /// among the origin's generated destinations. The game is left untouched.
    InvalidMove { from: Square, to: Square },
}

impl fmt::Display for EngineError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            EngineError::OutOfRange { row, col } => {
                write!(f, "coordinates ({}, {}) are off the board", row, col)
            }
            EngineError::InvalidMove { from, to } => write!(f, "illegal move {}->{}", from, to),
        }
    }
}

impl Error for EngineError {}

/// Possible errors that can arise when parsing a square name such as `e4`.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum SquareParseError {
    WrongLength,
    InvalidFile(char),
    InvalidRank(char),
}

impl fmt::Display for SquareParseError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            SquareParseError::WrongLength => write!(f, "a square is a file and a rank, like e4"),
            SquareParseError::InvalidFile(c) => write!(f, "invalid file '{}'", c),
            SquareParseError::InvalidRank(c) => write!(f, "invalid rank '{}'", c),
        }
    }
}

impl Error for SquareParseError {}

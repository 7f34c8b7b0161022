// Copyright 2017-2019 Sean Gillespie.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! A two-player chess move engine: board state, pseudo-legal move generation, and move
//! application with capture and history bookkeeping.

#[macro_use]
extern crate num_derive;
#[macro_use]
extern crate lazy_static;
#[macro_use]
extern crate log;
#[macro_use]
extern crate serde_derive;

mod analysis;
mod board;
mod data;
mod error;
mod game;
mod movegen;
mod moves;
mod perft;
mod playout;
pub mod session;
mod types;

pub use analysis::{Analysis, Statistics};
pub use board::{Board, PlacementParseError};
pub use data::{load_game, save_game, write_history_csv, write_statistics_csv};
pub use error::{EngineError, SquareParseError};
pub use game::GameState;
pub use movegen::{all_moves, legal_moves, MoveSet};
pub use moves::MoveRecord;
pub use perft::perft;
pub use playout::random_playout;
pub use types::{Color, Direction, File, Piece, PieceKind, Rank, Square};

// Copyright 2017-2019 Sean Gillespie.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Export of finished or in-progress games: move history and statistics as CSV, whole games as
//! JSON.
use std::io::{Read, Write};

use csv::Writer;

use crate::analysis::Statistics;
use crate::game::GameState;
use crate::types::{Color, PieceKind, Square};

#[derive(Clone, Serialize)]
struct HistoryRow {
    ply: usize,
    color: Color,
    piece: PieceKind,
    from: Square,
    to: Square,
    captured: Option<PieceKind>,
    promoted: bool,
    text: String,
}

/// Writes one CSV row per applied move, with a header row.
pub fn write_history_csv<W: Write>(state: &GameState, writer: W) -> Result<(), csv::Error> {
    let mut writer = Writer::from_writer(writer);
    for (idx, record) in state.history().iter().enumerate() {
        writer.serialize(HistoryRow {
            ply: idx + 1,
            color: record.color(),
            piece: record.kind(),
            from: record.source(),
            to: record.destination(),
            captured: record.captured().kind(),
            promoted: record.is_promotion(),
            text: record.to_string(),
        })?;
    }

    writer.flush()?;
    Ok(())
}

/// Writes the statistics as a single CSV row, with a header row.
pub fn write_statistics_csv<W: Write>(stats: &Statistics, writer: W) -> Result<(), csv::Error> {
    let mut writer = Writer::from_writer(writer);
    writer.serialize(stats)?;
    writer.flush()?;
    Ok(())
}

pub fn save_game<W: Write>(state: &GameState, writer: W) -> serde_json::Result<()> {
    serde_json::to_writer_pretty(writer, state)
}

pub fn load_game<R: Read>(reader: R) -> serde_json::Result<GameState> {
    serde_json::from_reader(reader)
}

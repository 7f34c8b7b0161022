// Copyright 2017-2019 Sean Gillespie.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! A line-oriented front end for two people sharing one terminal. Each input line is one
//! command; responses are written back one or more lines at a time.
use std::io::{self, BufRead, Write};

use crate::analysis::Analysis;
use crate::game::GameState;
use crate::movegen;
use crate::types::{Color, Square};

const HELP: &str = "\
commands:
  e2e4          move the piece on e2 to e4
  move e2 e4    same as above
  moves e2      list where the piece on e2 can go
  board         show the board
  turn          show whose turn it is
  history       list the moves played so far
  stats         show move, capture, material and mobility counts
  reset         start a new game
  quit          leave";

pub struct Session {
    state: GameState,
}

impl Session {
    pub fn new(state: GameState) -> Session {
        Session { state }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn into_state(self) -> GameState {
        self.state
    }

    /// Processes commands until `quit` or the end of input.
    pub fn run<R, W>(&mut self, reader: R, mut writer: W) -> io::Result<()>
    where
        R: BufRead,
        W: Write,
    {
        for maybe_line in reader.lines() {
            let line = maybe_line?;
            let components: Vec<_> = line.split_whitespace().collect();
            match components.split_first().unwrap_or((&"", &[])) {
                (&"", []) => {}
                (&"quit", []) | (&"exit", []) => break,
                (&"help", []) => writeln!(&mut writer, "{}", HELP)?,
                (&"board", []) => write!(&mut writer, "{}", self.state)?,
                (&"turn", []) => writeln!(&mut writer, "{:?}", self.state.turn())?,
                (&"history", []) => self.handle_history(&mut writer)?,
                (&"stats", []) => self.handle_stats(&mut writer)?,
                (&"reset", []) => {
                    self.state.reset();
                    writeln!(&mut writer, "new game")?;
                }
                (&"moves", [square]) => self.handle_moves(&mut writer, square)?,
                (&"move", [from, to]) => self.handle_move(&mut writer, from, to)?,
                (&mov, []) if mov.len() == 4 && mov.is_ascii() => {
                    self.handle_move(&mut writer, &mov[..2], &mov[2..])?
                }
                _ => writeln!(&mut writer, "unrecognized command (try help)")?,
            }

            writer.flush()?;
        }

        Ok(())
    }

    fn handle_history<W: Write>(&self, w: &mut W) -> io::Result<()> {
        for (idx, record) in self.state.history().iter().enumerate() {
            writeln!(w, "{:>3}. {}", idx + 1, record)?;
        }

        Ok(())
    }

    fn handle_stats<W: Write>(&self, w: &mut W) -> io::Result<()> {
        let analysis = Analysis::new(&self.state);
        let [white_material, black_material] = analysis.material_balance();
        write!(w, "{}", analysis.statistics())?;
        writeln!(w, "material:       {} / {}", white_material, black_material)?;
        writeln!(
            w,
            "mobility:       {} / {}",
            analysis.mobility(Color::White),
            analysis.mobility(Color::Black)
        )
    }

    fn handle_moves<W: Write>(&self, w: &mut W, square: &str) -> io::Result<()> {
        let square: Square = match square.parse() {
            Ok(sq) => sq,
            Err(err) => return writeln!(w, "{}", err),
        };

        // only the side on turn may pick up a piece
        let turn = self.state.turn();
        if let Some(color) = self.state.piece_at(square).color() {
            if color != turn {
                return writeln!(w, "{} belongs to {:?}, {:?} to move", square, color, turn);
            }
        }

        let moves = movegen::legal_moves(&self.state, square);
        let names: Vec<_> = moves.iter().map(|sq| sq.to_string()).collect();
        writeln!(w, "{}", names.join(" "))
    }

    fn handle_move<W: Write>(&mut self, w: &mut W, from: &str, to: &str) -> io::Result<()> {
        let (from, to) = match (from.parse::<Square>(), to.parse::<Square>()) {
            (Ok(from), Ok(to)) => (from, to),
            (Err(err), _) | (_, Err(err)) => return writeln!(w, "{}", err),
        };

        match self.state.apply_move(from, to) {
            Ok(record) => writeln!(w, "{}", record),
            Err(err) => writeln!(w, "{}", err),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Session;
    use crate::game::GameState;
    use crate::types::Color;

    fn run(input: &str) -> (Session, String) {
        let mut session = Session::new(GameState::new());
        let mut out = vec![];
        session.run(input.as_bytes(), &mut out).unwrap();
        (session, String::from_utf8(out).unwrap())
    }

    #[test]
    fn plays_moves() {
        let (session, out) = run("e2e4\nmove e7 e5\n");
        assert_eq!("P e2->e4\nP e7->e5\n", out);
        assert_eq!(Color::White, session.state().turn());
        assert_eq!(2, session.state().history().len());
    }

    #[test]
    fn lists_destinations() {
        let (_, out) = run("moves g1\nmoves e4\n");
        assert_eq!("h3 f3\n\n", out);
    }

    #[test]
    fn destinations_only_for_side_on_turn() {
        let (_, out) = run("moves e7\ne2e4\nmoves e7\nmoves e4\n");
        let lines: Vec<_> = out.lines().collect();
        assert_eq!("e7 belongs to Black, White to move", lines[0]);
        assert_eq!("P e2->e4", lines[1]);
        assert_eq!("e6 e5", lines[2]);
        assert_eq!("e4 belongs to White, Black to move", lines[3]);
    }

    #[test]
    fn stats_include_material_and_mobility() {
        let (_, out) = run("stats\ne2e4\nd7d5\ne4d5\nstats\n");
        let lines: Vec<_> = out.lines().collect();
        assert_eq!(
            vec![
                "white moves:    0",
                "black moves:    0",
                "white captures: 0",
                "black captures: 0",
                "material:       16 / 16",
                "mobility:       20 / 20",
            ],
            &lines[..6]
        );
        assert_eq!("white moves:    2", lines[9]);
        assert_eq!("white captures: 1", lines[11]);
        assert_eq!("material:       16 / 15", lines[13]);
    }

    #[test]
    fn rejects_bad_input() {
        let (session, out) = run("e2e5\nz9a1\nfrobnicate\n");
        let lines: Vec<_> = out.lines().collect();
        assert_eq!("illegal move e2->e5", lines[0]);
        assert_eq!("invalid file 'z'", lines[1]);
        assert_eq!("unrecognized command (try help)", lines[2]);
        assert!(session.state().history().is_empty());
    }

    #[test]
    fn quit_stops_reading() {
        let (session, _) = run("e2e4\nquit\ne7e5\n");
        assert_eq!(1, session.state().history().len());
    }

    #[test]
    fn history_and_reset() {
        let (session, out) = run("e2e4\ne7e5\nhistory\nreset\n");
        assert!(out.contains("  1. P e2->e4\n  2. P e7->e5\n"));
        assert!(out.ends_with("new game\n"));
        assert_eq!(GameState::new(), session.into_state());
    }
}

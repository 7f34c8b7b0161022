// Copyright 2017-2019 Sean Gillespie.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

#[macro_use]
extern crate clap;
#[macro_use]
extern crate log;

use std::error::Error;
use std::fs::File;
use std::io;
use std::process;
use std::time::Instant;

use clap::{App, AppSettings, Arg, ArgMatches, SubCommand};
use rand::rngs::StdRng;
use rand::SeedableRng;

use hotseat::session::Session;
use hotseat::{
    load_game, perft, random_playout, save_game, write_history_csv, write_statistics_csv,
    GameState, Statistics,
};

fn main() {
    env_logger::init();
    let matches = App::new(crate_name!())
        .version(crate_version!())
        .author(crate_authors!())
        .about(crate_description!())
        .setting(AppSettings::SubcommandRequiredElseHelp)
        .subcommand(
            SubCommand::with_name("play")
                .about("Play a game on this terminal, reading commands from stdin")
                .arg(
                    Arg::with_name("load")
                        .help("Resume a game saved as JSON")
                        .value_name("FILE")
                        .long("--load")
                        .takes_value(true),
                )
                .arg(
                    Arg::with_name("save")
                        .help("Save the game as JSON on exit")
                        .value_name("FILE")
                        .long("--save")
                        .takes_value(true),
                )
                .arg(
                    Arg::with_name("history-csv")
                        .help("Write the move history as CSV on exit")
                        .value_name("FILE")
                        .long("--history-csv")
                        .takes_value(true),
                )
                .arg(
                    Arg::with_name("stats-csv")
                        .help("Write move and capture statistics as CSV on exit")
                        .value_name("FILE")
                        .long("--stats-csv")
                        .takes_value(true),
                ),
        )
        .subcommand(
            SubCommand::with_name("perft")
                .about("Count pseudo-legal move tree leaves from a position")
                .arg(
                    Arg::with_name("PLACEMENT")
                        .help("Board placement, optionally followed by w or b")
                        .required(true)
                        .index(1),
                )
                .arg(
                    Arg::with_name("depth")
                        .help("Depth of move tree to search")
                        .value_name("DEPTH")
                        .short("-d")
                        .long("--depth")
                        .default_value("3")
                        .takes_value(true),
                ),
        )
        .subcommand(
            SubCommand::with_name("playout")
                .about("Play random moves from the starting position")
                .arg(
                    Arg::with_name("plies")
                        .help("Number of moves to play")
                        .value_name("PLIES")
                        .short("-n")
                        .long("--plies")
                        .default_value("40")
                        .takes_value(true),
                )
                .arg(
                    Arg::with_name("seed")
                        .help("Seed for the random number generator")
                        .value_name("SEED")
                        .long("--seed")
                        .takes_value(true),
                ),
        )
        .get_matches();

    let result = match matches.subcommand() {
        ("play", Some(matches)) => run_play(matches),
        ("perft", Some(matches)) => run_perft(matches),
        ("playout", Some(matches)) => run_playout(matches),
        _ => unreachable!("a subcommand is required"),
    };

    if let Err(err) = result {
        eprintln!("error: {}", err);
        process::exit(1);
    }
}

fn run_play(matches: &ArgMatches) -> Result<(), Box<dyn Error>> {
    let state = match matches.value_of("load") {
        Some(path) => {
            info!("loading game from {}", path);
            load_game(File::open(path)?)?
        }
        None => GameState::new(),
    };

    println!("{}", state);
    let mut session = Session::new(state);
    let stdin = io::stdin();
    let stdout = io::stdout();
    session.run(stdin.lock(), stdout.lock())?;
    let state = session.into_state();

    if let Some(path) = matches.value_of("save") {
        info!("saving game to {}", path);
        save_game(&state, File::create(path)?)?;
    }

    if let Some(path) = matches.value_of("history-csv") {
        write_history_csv(&state, File::create(path)?)?;
    }

    if let Some(path) = matches.value_of("stats-csv") {
        write_statistics_csv(&Statistics::of(&state), File::create(path)?)?;
    }

    Ok(())
}

fn run_perft(matches: &ArgMatches) -> Result<(), Box<dyn Error>> {
    let placement = matches.value_of("PLACEMENT").unwrap();
    let depth = value_t_or_exit!(matches, "depth", u32);
    let state = GameState::from_placement(placement)?;

    println!("placement: {}", placement);
    println!("depth:     {}", depth);
    println!();
    println!("{}", state);
    for i in 1..depth + 1 {
        let start = Instant::now();
        let results = perft(&state, i);
        let duration = start.elapsed();
        println!("perft({}) = {} ({} ms)", i, results, duration.as_millis());
    }

    Ok(())
}

fn run_playout(matches: &ArgMatches) -> Result<(), Box<dyn Error>> {
    let plies = value_t_or_exit!(matches, "plies", usize);
    let mut rng = if matches.is_present("seed") {
        StdRng::seed_from_u64(value_t_or_exit!(matches, "seed", u64))
    } else {
        StdRng::from_entropy()
    };

    let mut state = GameState::new();
    let played = random_playout(&mut state, plies, &mut rng);
    println!("{}", state);
    for (idx, record) in state.history().iter().enumerate() {
        println!("{:>3}. {}", idx + 1, record);
    }

    println!();
    println!("played {} of {} plies", played, plies);
    print!("{}", Statistics::of(&state));
    Ok(())
}

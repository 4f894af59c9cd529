// Copyright 2017-2019 Sean Gillespie.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

#[macro_use]
extern crate clap;

use std::error::Error;
use std::fs::File;
use std::process;
use std::sync::Arc;
use std::time::{Duration, Instant};

use clap::{App, AppSettings, Arg, ArgMatches, SubCommand};

use isolate::agent::{Agent, AlphaBetaAgent};
use isolate::config::{AgentSpec, MatchConfig, DEFAULT_TIME_LIMIT_MS};
use isolate::eval::{Heuristic, HEURISTICS};
use isolate::game;
use isolate::search::{CsvDataRecorder, Cutoff, DataRecorder, MoveSlot, NullDataRecorder, DEFAULT_MAX_DEPTH};
use isolate::{perft, Board, ParseError, Position};

fn main() {
    env_logger::init();
    let heuristic_names: Vec<&str> = HEURISTICS.iter().map(|h| h.name()).collect();
    let matches = App::new(crate_name!())
        .version(crate_version!())
        .author(crate_authors!())
        .about(crate_description!())
        .setting(AppSettings::SubcommandRequiredElseHelp)
        .subcommand(
            SubCommand::with_name("perft")
                .about("Count the leaves of the game tree below a position")
                .arg(
                    Arg::with_name("POSITION")
                        .help("Position notation, or `empty` for the empty board")
                        .required(true)
                        .index(1),
                )
                .arg(
                    Arg::with_name("depth")
                        .help("Depth of move tree to search")
                        .value_name("DEPTH")
                        .short("d")
                        .long("depth")
                        .takes_value(true)
                        .required(true),
                )
                .arg(board_arg()),
        )
        .subcommand(
            SubCommand::with_name("search")
                .about("Search a position and report the move the agent would play")
                .arg(
                    Arg::with_name("position")
                        .help("Position notation")
                        .value_name("POSITION")
                        .short("p")
                        .long("position")
                        .takes_value(true)
                        .conflicts_with("moves"),
                )
                .arg(
                    Arg::with_name("moves")
                        .help("Space-separated moves played from the empty board")
                        .value_name("MOVES")
                        .short("m")
                        .long("moves")
                        .takes_value(true),
                )
                .arg(board_arg())
                .arg(
                    Arg::with_name("heuristic")
                        .help("Evaluation function used at the search frontier")
                        .value_name("HEURISTIC")
                        .long("heuristic")
                        .takes_value(true)
                        .possible_values(&heuristic_names),
                )
                .arg(
                    Arg::with_name("depth")
                        .help("Deepest iteration to search")
                        .value_name("DEPTH")
                        .short("d")
                        .long("depth")
                        .takes_value(true),
                )
                .arg(time_arg())
                .arg(
                    Arg::with_name("record")
                        .help("Write per-depth search statistics to a CSV file")
                        .value_name("FILE")
                        .long("record")
                        .takes_value(true),
                ),
        )
        .subcommand(
            SubCommand::with_name("play")
                .about("Play a match between two agents")
                .arg(
                    Arg::with_name("config")
                        .help("JSON match configuration")
                        .value_name("FILE")
                        .short("c")
                        .long("config")
                        .takes_value(true),
                )
                .arg(agent_arg("one", "First agent"))
                .arg(agent_arg("two", "Second agent"))
                .arg(
                    Arg::with_name("games")
                        .help("Number of games to play")
                        .value_name("GAMES")
                        .short("n")
                        .long("games")
                        .takes_value(true),
                )
                .arg(time_arg())
                .arg(board_arg()),
        )
        .get_matches();

    let result = match matches.subcommand() {
        ("perft", Some(matches)) => run_perft(matches),
        ("search", Some(matches)) => run_search(matches),
        ("play", Some(matches)) => run_play(matches),
        _ => unreachable!(),
    };

    if let Err(err) = result {
        eprintln!("error: {}", err);
        process::exit(1);
    }
}

fn board_arg<'a, 'b>() -> Arg<'a, 'b> {
    Arg::with_name("board")
        .help("Board size, e.g. 7x7")
        .value_name("WxH")
        .short("b")
        .long("board")
        .takes_value(true)
}

fn time_arg<'a, 'b>() -> Arg<'a, 'b> {
    Arg::with_name("time")
        .help("Time limit per move, in milliseconds")
        .value_name("MS")
        .short("t")
        .long("time-ms")
        .takes_value(true)
}

fn agent_arg<'a, 'b>(name: &'a str, help: &'a str) -> Arg<'a, 'b> {
    Arg::with_name(name)
        .help(help)
        .value_name("AGENT")
        .long(name)
        .takes_value(true)
}

fn board(matches: &ArgMatches) -> Result<Board, ParseError> {
    match matches.value_of("board") {
        Some(size) => size.parse(),
        None => Ok(Board::standard()),
    }
}

fn run_perft(matches: &ArgMatches) -> Result<(), Box<dyn Error>> {
    let notation = matches.value_of("POSITION").unwrap_or("empty");
    let depth = value_t_or_exit!(matches, "depth", u32);
    let pos = if notation == "empty" {
        Position::new(board(matches)?)
    } else {
        Position::from_notation(notation)?
    };

    println!("position: {}", pos.as_notation());
    println!("depth:    {}", depth);
    println!();
    println!("{}", pos);
    println!();
    for i in 1..=depth {
        let start = Instant::now();
        let results = perft(&pos, i);
        println!(
            "perft({}) = {} ({} ms)",
            i,
            results,
            start.elapsed().as_millis()
        );
    }

    Ok(())
}

fn run_search(matches: &ArgMatches) -> Result<(), Box<dyn Error>> {
    let pos = if let Some(notation) = matches.value_of("position") {
        Position::from_notation(notation)?
    } else {
        let moves: Vec<&str> = matches
            .value_of("moves")
            .unwrap_or("")
            .split_whitespace()
            .collect();
        Position::from_moves(board(matches)?, &moves)?
    };

    let heuristic = match matches.value_of("heuristic") {
        Some(name) => name.parse()?,
        None => Heuristic::default(),
    };
    let depth = if matches.is_present("depth") {
        value_t_or_exit!(matches, "depth", u32)
    } else {
        DEFAULT_MAX_DEPTH
    };
    if depth == 0 {
        return Err("search depth must be at least 1".into());
    }

    let time_ms = if matches.is_present("time") {
        value_t_or_exit!(matches, "time", u64)
    } else {
        DEFAULT_TIME_LIMIT_MS
    };

    let recorder: Arc<dyn DataRecorder + Send + Sync> = match matches.value_of("record") {
        Some(path) => Arc::new(CsvDataRecorder::new(File::create(path)?)),
        None => Arc::new(NullDataRecorder),
    };

    println!("{}", pos);
    println!();
    if pos.is_terminal() {
        println!("player {} has no legal moves", pos.side_to_move());
        return Ok(());
    }

    let agent = AlphaBetaAgent::new(heuristic, depth).with_recorder(recorder);
    let slot = MoveSlot::new();
    let cutoff = Cutoff::never().with_budget(Duration::from_millis(time_ms));
    let start = Instant::now();
    agent.choose_move(&pos, pos.side_to_move(), &slot, &cutoff);

    match slot.latest() {
        Some(decision) => {
            println!("    agent: {}", agent.name());
            println!("best move: {}", decision.best_move);
            println!("    depth: {}", decision.depth);
            println!("     time: {} ms", start.elapsed().as_millis());
        }
        None => println!("no move found"),
    }

    Ok(())
}

fn run_play(matches: &ArgMatches) -> Result<(), Box<dyn Error>> {
    let mut config = match matches.value_of("config") {
        Some(path) => MatchConfig::load(path)?,
        None => MatchConfig::default(),
    };

    if let Some(spec) = matches.value_of("one") {
        config.one = spec.parse::<AgentSpec>()?;
    }

    if let Some(spec) = matches.value_of("two") {
        config.two = spec.parse::<AgentSpec>()?;
    }

    if matches.is_present("games") {
        config.games = value_t_or_exit!(matches, "games", u32);
    }

    if matches.is_present("time") {
        config.time_limit_ms = value_t_or_exit!(matches, "time", u64);
    }

    if matches.is_present("board") {
        let board = board(matches)?;
        config.width = board.width();
        config.height = board.height();
    }

    println!(
        "{} vs {}, {} game(s) on {}x{}, {} ms per move",
        config.one, config.two, config.games, config.width, config.height, config.time_limit_ms
    );
    let stats = game::play_match(&config)?;
    println!();
    for (idx, spec) in [config.one, config.two].iter().enumerate() {
        println!(
            "{:>24}: {} wins ({:.1}%), {} forfeits",
            spec.to_string(),
            stats.wins[idx],
            100.0 * stats.win_rate(idx),
            stats.forfeits[idx]
        );
    }

    Ok(())
}

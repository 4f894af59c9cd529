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

use clap::{App, Arg};
use csv::Reader;

use isolate::search::Record;
use isolate::Position;

/// The records of one iterative search, shallowest depth first.
struct SearchRecords {
    position: String,
    records: Vec<Record>,
}

fn main() {
    env_logger::init();
    let matches = App::new("isolate-data")
        .version(crate_version!())
        .author(crate_authors!())
        .about("Summarizes search statistics recorded by `isolate search --record`")
        .arg(
            Arg::with_name("FILE")
                .help("CSV file to load for analysis")
                .required(true)
                .index(1),
        )
        .get_matches();

    let path = matches.value_of("FILE").unwrap_or_default();
    if let Err(err) = run(path) {
        eprintln!("error: {}", err);
        process::exit(1);
    }
}

fn run(path: &str) -> Result<(), Box<dyn Error>> {
    let file = File::open(path)?;
    for search in read_file(&file)? {
        let position = Position::from_notation(&search.position)?;
        println!("{}", position);
        println!("position: {}", search.position);
        print_records(&search);
        println!();
    }

    Ok(())
}

/// Splits the file into searches. A search starts over at depth one.
fn read_file(file: &File) -> Result<Vec<SearchRecords>, csv::Error> {
    let mut searches: Vec<SearchRecords> = vec![];
    let mut reader = Reader::from_reader(file);
    for result in reader.deserialize() {
        let record: Record = result?;
        match searches.last_mut() {
            Some(search) if record.depth > 1 && search.position == record.position => {
                search.records.push(record)
            }
            _ => searches.push(SearchRecords {
                position: record.position.clone(),
                records: vec![record],
            }),
        }
    }

    Ok(searches)
}

fn print_records(search: &SearchRecords) {
    let mut prev_nodes: u64 = 0;
    for record in &search.records {
        println!("-------------------------");
        println!("    depth: {}", record.depth);
        println!("    nodes: {}", record.nodes);
        if prev_nodes > 0 {
            println!(
                "effective branching factor: {:.2}",
                record.nodes as f64 / prev_nodes as f64
            );
        }

        println!("best move: {}", record.best_move);
        println!("    score: {}", record.score);
        println!("  elapsed: {} ms", record.elapsed_ms);
        prev_nodes = record.nodes;
    }
}

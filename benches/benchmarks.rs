// Copyright 2017-2019 Sean Gillespie.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

#[macro_use]
extern crate criterion;

use criterion::black_box;
use criterion::Criterion;
use isolate::attacks;
use isolate::eval::{Evaluator, Heuristic};
use isolate::search::{AlphaBetaSearcher, Searcher};
use isolate::{Board, Cell, MoveGenerator, MoveVec, Player, Position};

fn midgame() -> Position {
    Position::from_moves(Board::standard(), &["c3", "f5", "d5", "g7", "e7", "h5"]).unwrap()
}

fn criterion_benchmark(c: &mut Criterion) {
    c.bench_function("knight moves f5", |b| {
        b.iter(|| attacks::knight_moves(Board::standard(), black_box(Cell::new(5, 4))))
    });

    c.bench_function("knight moves f5 on 7x7", |b| {
        let board = Board::new(7, 7).unwrap();
        b.iter(|| attacks::knight_moves(board, black_box(Cell::new(3, 3))))
    });

    c.bench_function("position clone", |b| {
        let pos = midgame();
        b.iter(|| black_box(&pos).clone())
    });

    c.bench_function("generate moves midgame", |b| {
        let pos = midgame();
        b.iter(|| {
            let mut vec = MoveVec::default();
            let gen = MoveGenerator::new();
            gen.generate_moves(black_box(&pos), &mut vec);
        });
    });

    c.bench_function("threshold evaluation", |b| {
        let pos = midgame();
        b.iter(|| Heuristic::ThresholdMobility.score(black_box(&pos), Player::One))
    });

    c.bench_function("alpha-beta depth 5 midgame", |b| {
        let pos = midgame();
        b.iter(|| {
            let mut searcher = AlphaBetaSearcher::new(Heuristic::default());
            searcher.search(black_box(&pos), Player::One, 5)
        })
    });
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);

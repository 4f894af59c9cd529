// Copyright 2017-2019 Sean Gillespie.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.
use cancellation::CancellationTokenSource;

use isolate::eval::{Heuristic, Score, HEURISTICS};
use isolate::search::{
    AlphaBetaSearcher, Cutoff, IterativeDeepeningSearcher, MinimaxSearcher, MoveSlot,
    NullDataRecorder, Searcher, VecDataRecorder, DEFAULT_MAX_DEPTH,
};
use isolate::{Board, Player, Position};

fn placements(board: Board) -> Vec<Position> {
    let cells: Vec<String> = board.cells().map(|cell| cell.to_string()).collect();
    let mut positions = vec![];
    for one in &cells {
        for two in &cells {
            if one != two {
                positions.push(Position::from_moves(board, &[one, two]).unwrap());
            }
        }
    }

    positions
}

#[test]
fn alpha_beta_matches_minimax_on_4x4() {
    let positions = placements(Board::new(4, 4).unwrap());
    assert_eq!(240, positions.len());
    for &heuristic in HEURISTICS.iter() {
        for pos in &positions {
            for depth in 1..=4 {
                let mut alpha_beta = AlphaBetaSearcher::new(heuristic);
                let mut minimax = MinimaxSearcher::new(heuristic);
                let pruned = alpha_beta.search(pos, Player::One, depth);
                let full = minimax.search(pos, Player::One, depth);
                match (pruned, full) {
                    (Some(pruned), Some(full)) => {
                        let context =
                            format!("{} at depth {} with {}", pos.as_notation(), depth, heuristic);
                        assert_eq!(full.score, pruned.score, "{}", context);
                        assert_eq!(full.best_move, pruned.best_move, "{}", context);
                        assert!(pruned.nodes_searched <= full.nodes_searched, "{}", context);
                    }
                    (None, None) => assert!(pos.is_terminal()),
                    (pruned, full) => panic!("{:?} != {:?}", pruned, full),
                }
            }
        }
    }
}

#[test]
fn alpha_beta_matches_minimax_for_player_two() {
    let pos = Position::from_moves(Board::new(5, 5).unwrap(), &["a1", "e5", "b3"]).unwrap();
    for depth in 1..=5 {
        let mut alpha_beta = AlphaBetaSearcher::new(Heuristic::NormalizedCentrality);
        let mut minimax = MinimaxSearcher::new(Heuristic::NormalizedCentrality);
        let pruned = alpha_beta.search(&pos, Player::Two, depth).unwrap();
        let full = minimax.search(&pos, Player::Two, depth).unwrap();
        assert_eq!(full.score, pruned.score);
        assert_eq!(full.best_move, pruned.best_move);
    }
}

#[test]
fn iterative_deepening_stops_at_the_ceiling() {
    let pos = Position::from_moves(Board::new(5, 5).unwrap(), &["b2", "d4"]).unwrap();
    let mut searcher = IterativeDeepeningSearcher::new(Heuristic::default());
    let recorder = VecDataRecorder::new();
    let slot = MoveSlot::new();
    let result = searcher
        .search(&pos, Player::One, &slot, &Cutoff::never(), &recorder)
        .unwrap();

    let depths: Vec<u32> = recorder.records().iter().map(|r| r.depth).collect();
    assert_eq!((1..=DEFAULT_MAX_DEPTH).collect::<Vec<_>>(), depths);
    assert_eq!(DEFAULT_MAX_DEPTH, result.depth);
    assert_eq!(Some(DEFAULT_MAX_DEPTH), slot.latest().map(|d| d.depth));
}

#[test]
fn expired_cutoff_still_publishes_a_legal_move() {
    let cts = CancellationTokenSource::new();
    cts.cancel();
    let cutoff = Cutoff::new(cts.token().clone());

    for pos in placements(Board::new(4, 4).unwrap()).iter().step_by(7) {
        let mut searcher = IterativeDeepeningSearcher::new(Heuristic::default());
        let slot = MoveSlot::new();
        searcher.search(pos, pos.side_to_move(), &slot, &cutoff, &NullDataRecorder);

        let decision = slot.latest().unwrap();
        assert_eq!(1, decision.depth);
        assert!(pos.is_legal(decision.best_move));
    }
}

#[test]
fn trapped_player_loses_whatever_the_heuristic() {
    // Player one's only move is b3, after which player two's reply to a2
    // leaves player one with nowhere to go.
    let pos = Position::from_notation(".../..x/1.2 2").unwrap();
    for &heuristic in HEURISTICS.iter() {
        for depth in 2..=4 {
            let mut searcher = AlphaBetaSearcher::new(heuristic);
            let result = searcher.search(&pos, Player::One, depth).unwrap();
            assert_eq!("b3", result.best_move.to_string());
            assert_eq!(Score::Loss(2), result.score);
            assert_eq!(Some(-1), result.score.utility());
        }
    }

    let trapped = pos
        .successor("b3".parse().unwrap())
        .successor("a2".parse().unwrap());
    assert!(trapped.is_terminal());
    assert_eq!(Some(-1), trapped.utility(Player::One));
    assert_eq!(Some(1), trapped.utility(Player::Two));
}

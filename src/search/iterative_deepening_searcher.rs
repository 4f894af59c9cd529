// Copyright 2017-2019 Sean Gillespie.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.
use std::time::Instant;

use crate::eval::Evaluator;
use crate::position::Position;
use crate::search::{
    AlphaBetaSearcher, Cutoff, DataRecorder, Decision, MoveSlot, Record, SearchResult, Searcher,
};
use crate::types::Player;

/// The deepest iteration a searcher runs unless configured otherwise.
pub const DEFAULT_MAX_DEPTH: u32 = 9;

/// Runs alpha-beta searches of increasing depth, publishing the best move of
/// every completed depth as soon as it is known. Whoever is waiting on the
/// slot always has the result of the deepest search finished so far.
pub struct IterativeDeepeningSearcher<E> {
    searcher: AlphaBetaSearcher<E>,
    max_depth: u32,
}

impl<E: Evaluator> IterativeDeepeningSearcher<E> {
    pub fn new(evaluator: E) -> IterativeDeepeningSearcher<E> {
        IterativeDeepeningSearcher::with_max_depth(evaluator, DEFAULT_MAX_DEPTH)
    }

    /// Depth zero is not a search; it is treated as a depth of one.
    pub fn with_max_depth(evaluator: E, max_depth: u32) -> IterativeDeepeningSearcher<E> {
        IterativeDeepeningSearcher {
            searcher: AlphaBetaSearcher::new(evaluator),
            max_depth: max_depth.max(1),
        }
    }

    pub fn max_depth(&self) -> u32 {
        self.max_depth
    }

    pub fn evaluator(&self) -> &E {
        self.searcher.evaluator()
    }

    /// Searches `pos` on behalf of `player`. The first iteration always runs;
    /// every deeper one only starts if `cutoff` has not expired. Returns the
    /// result of the deepest completed iteration, or `None` if `pos` is
    /// already over.
    pub fn search(
        &mut self,
        pos: &Position,
        player: Player,
        out: &MoveSlot,
        cutoff: &Cutoff,
        recorder: &dyn DataRecorder,
    ) -> Option<SearchResult> {
        let start_time = Instant::now();
        let mut best: Option<SearchResult> = None;
        for depth in 1..=self.max_depth {
            if depth > 1 && cutoff.expired() {
                debug!("cutoff expired before depth {}", depth);
                break;
            }

            let result = match self.searcher.search(pos, player, depth) {
                Some(result) => result,
                None => {
                    debug!("no legal moves at {}", pos.as_notation());
                    break;
                }
            };

            out.publish(Decision {
                best_move: result.best_move,
                depth,
            });

            let elapsed = start_time.elapsed();
            info!(
                "depth {}: {} ({}), {} nodes, {}ms",
                depth,
                result.best_move,
                result.score,
                result.nodes_searched,
                elapsed.as_millis()
            );
            recorder.record(&Record {
                position: pos.as_notation(),
                depth,
                nodes: result.nodes_searched,
                best_move: result.best_move.to_string(),
                score: result.score.to_string(),
                elapsed_ms: elapsed.as_millis() as u64,
            });

            best = Some(result);
        }

        best
    }
}

// Copyright 2017-2019 Sean Gillespie.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.
use crate::eval::{Evaluator, Score};
use crate::moves::Move;
use crate::position::Position;
use crate::types::Player;

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct SearchResult {
    pub best_move: Move,
    pub score: Score,
    pub depth: u32,
    pub nodes_searched: u64,
}

/// A fixed-depth game tree search.
pub trait Searcher {
    /// Searches `pos` exactly `depth` plies deep on behalf of `player`,
    /// returning the best move found. Returns `None` when `pos` is already
    /// over and there is nothing to choose from.
    fn search(&mut self, pos: &Position, player: Player, depth: u32) -> Option<SearchResult>;
}

/// Minimax search with alpha-beta pruning. Moves are searched in the order
/// the move generator produces them.
pub struct AlphaBetaSearcher<E> {
    evaluator: E,
    player: Player,
    depth_limit: u32,
    nodes_searched: u64,
}

impl<E: Evaluator> AlphaBetaSearcher<E> {
    pub fn new(evaluator: E) -> AlphaBetaSearcher<E> {
        AlphaBetaSearcher {
            evaluator,
            player: Player::One,
            depth_limit: 0,
            nodes_searched: 0,
        }
    }

    pub fn evaluator(&self) -> &E {
        &self.evaluator
    }

    fn max_value(&mut self, pos: &Position, mut alpha: Score, beta: Score, depth: u32) -> Score {
        if let Some(score) = self.frontier_value(pos, depth) {
            return score;
        }

        let mut value = Score::MIN;
        for mov in pos.legal_moves() {
            let child = pos.successor(mov);
            value = value.max(self.min_value(&child, alpha, beta, depth - 1));
            if value >= beta {
                return value;
            }

            alpha = alpha.max(value);
        }

        value
    }

    fn min_value(&mut self, pos: &Position, alpha: Score, mut beta: Score, depth: u32) -> Score {
        if let Some(score) = self.frontier_value(pos, depth) {
            return score;
        }

        let mut value = Score::MAX;
        for mov in pos.legal_moves() {
            let child = pos.successor(mov);
            value = value.min(self.max_value(&child, alpha, beta, depth - 1));
            if value <= alpha {
                return value;
            }

            beta = beta.min(value);
        }

        value
    }

    /// Values a node without looking at its children, if possible: finished
    /// games get their utility and nodes at depth zero get a static
    /// evaluation. The terminal check comes first so that evaluators never
    /// see a finished game.
    fn frontier_value(&mut self, pos: &Position, depth: u32) -> Option<Score> {
        self.nodes_searched += 1;
        terminal_or_static(&self.evaluator, pos, self.player, self.depth_limit, depth)
    }
}

impl<E: Evaluator> Searcher for AlphaBetaSearcher<E> {
    fn search(&mut self, pos: &Position, player: Player, depth: u32) -> Option<SearchResult> {
        debug_assert!(depth > 0, "searching at depth zero");
        self.player = player;
        self.depth_limit = depth;
        self.nodes_searched = 0;

        // The root keeps raising alpha as it goes but never cuts off against
        // beta: every root move has to be looked at to pick one of them.
        let mut alpha = Score::MIN;
        let beta = Score::MAX;
        let mut best: Option<(Move, Score)> = None;
        for mov in pos.legal_moves() {
            let child = pos.successor(mov);
            let value = self.min_value(&child, alpha, beta, depth - 1);
            alpha = alpha.max(value);
            if best.map_or(true, |(_, best_value)| value > best_value) {
                best = Some((mov, value));
            }
        }

        best.map(|(best_move, score)| SearchResult {
            best_move,
            score,
            depth,
            nodes_searched: self.nodes_searched,
        })
    }
}

/// Plain minimax without pruning. It visits every node of the tree and is
/// only useful as a reference for `AlphaBetaSearcher`.
pub struct MinimaxSearcher<E> {
    evaluator: E,
    player: Player,
    depth_limit: u32,
    nodes_searched: u64,
}

impl<E: Evaluator> MinimaxSearcher<E> {
    pub fn new(evaluator: E) -> MinimaxSearcher<E> {
        MinimaxSearcher {
            evaluator,
            player: Player::One,
            depth_limit: 0,
            nodes_searched: 0,
        }
    }

    fn value(&mut self, pos: &Position, depth: u32) -> Score {
        self.nodes_searched += 1;
        if let Some(score) =
            terminal_or_static(&self.evaluator, pos, self.player, self.depth_limit, depth)
        {
            return score;
        }

        let children = pos
            .legal_moves()
            .into_iter()
            .map(|mov| self.value(&pos.successor(mov), depth - 1))
            .collect::<Vec<_>>()
            .into_iter();
        if pos.side_to_move() == self.player {
            children.max().unwrap_or(Score::MIN)
        } else {
            children.min().unwrap_or(Score::MAX)
        }
    }
}

impl<E: Evaluator> Searcher for MinimaxSearcher<E> {
    fn search(&mut self, pos: &Position, player: Player, depth: u32) -> Option<SearchResult> {
        debug_assert!(depth > 0, "searching at depth zero");
        self.player = player;
        self.depth_limit = depth;
        self.nodes_searched = 0;

        let mut best: Option<(Move, Score)> = None;
        for mov in pos.legal_moves() {
            let value = self.value(&pos.successor(mov), depth - 1);
            if best.map_or(true, |(_, best_value)| value > best_value) {
                best = Some((mov, value));
            }
        }

        best.map(|(best_move, score)| SearchResult {
            best_move,
            score,
            depth,
            nodes_searched: self.nodes_searched,
        })
    }
}

fn terminal_or_static<E: Evaluator>(
    evaluator: &E,
    pos: &Position,
    player: Player,
    depth_limit: u32,
    depth: u32,
) -> Option<Score> {
    if let Some(utility) = pos.utility(player) {
        return Some(Score::from_utility(utility, depth_limit - depth));
    }

    if depth == 0 {
        return Some(Score::Evaluated(evaluator.score(pos, player)));
    }

    None
}

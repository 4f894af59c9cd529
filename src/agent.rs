// Copyright 2017-2019 Sean Gillespie.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Agents are what the game harness talks to. An agent is handed a position
//! once per turn and publishes the move it wants to play to a `MoveSlot`,
//! possibly several times, until the harness stops listening.
use std::sync::Arc;

use rand::seq::SliceRandom;

use crate::eval::{Evaluator, Heuristic};
use crate::moves::Move;
use crate::position::Position;
use crate::search::{
    Cutoff, DataRecorder, Decision, IterativeDeepeningSearcher, MoveSlot, NullDataRecorder,
    DEFAULT_MAX_DEPTH,
};
use crate::types::Player;

pub trait Agent: Send + Sync {
    fn name(&self) -> String;

    /// Picks a move for `player` in `pos`, publishing it to `out`. An agent
    /// may publish more than once; the harness plays whatever the slot holds
    /// when time runs out. Nothing is published for a finished game.
    fn choose_move(&self, pos: &Position, player: Player, out: &MoveSlot, cutoff: &Cutoff);
}

/// Plays a uniformly random legal move.
pub struct RandomAgent;

impl Agent for RandomAgent {
    fn name(&self) -> String {
        "random".to_owned()
    }

    fn choose_move(&self, pos: &Position, _player: Player, out: &MoveSlot, _cutoff: &Cutoff) {
        publish_random_move(pos, out);
    }
}

/// Plays the move whose successor position scores best for it, without
/// looking any further ahead.
pub struct GreedyAgent {
    heuristic: Heuristic,
}

impl GreedyAgent {
    pub fn new(heuristic: Heuristic) -> GreedyAgent {
        GreedyAgent { heuristic }
    }
}

impl Agent for GreedyAgent {
    fn name(&self) -> String {
        format!("greedy:{}", self.heuristic)
    }

    fn choose_move(&self, pos: &Position, player: Player, out: &MoveSlot, _cutoff: &Cutoff) {
        let mut best: Option<(Move, f64)> = None;
        for mov in pos.legal_moves() {
            let child = pos.successor(mov);
            let value = match child.utility(player) {
                Some(utility) => f64::from(utility) * std::f64::INFINITY,
                None => self.heuristic.score(&child, player),
            };

            if best.map_or(true, |(_, best_value)| value > best_value) {
                best = Some((mov, value));
            }
        }

        if let Some((mov, _)) = best {
            out.publish(Decision {
                best_move: mov,
                depth: 1,
            });
        }
    }
}

/// The searching agent: iterative deepening alpha-beta with one of the
/// configured heuristics at the frontier. The first move of each player is
/// picked at random, since no search says anything useful about placements
/// on an empty board.
pub struct AlphaBetaAgent {
    heuristic: Heuristic,
    max_depth: u32,
    recorder: Arc<dyn DataRecorder + Send + Sync>,
}

impl AlphaBetaAgent {
    pub fn new(heuristic: Heuristic, max_depth: u32) -> AlphaBetaAgent {
        AlphaBetaAgent {
            heuristic,
            max_depth: max_depth.max(1),
            recorder: Arc::new(NullDataRecorder),
        }
    }

    pub fn with_recorder(mut self, recorder: Arc<dyn DataRecorder + Send + Sync>) -> AlphaBetaAgent {
        self.recorder = recorder;
        self
    }

    pub fn heuristic(&self) -> Heuristic {
        self.heuristic
    }

    pub fn max_depth(&self) -> u32 {
        self.max_depth
    }
}

impl Default for AlphaBetaAgent {
    fn default() -> AlphaBetaAgent {
        AlphaBetaAgent::new(Heuristic::default(), DEFAULT_MAX_DEPTH)
    }
}

impl Agent for AlphaBetaAgent {
    fn name(&self) -> String {
        format!("alphabeta:{}:{}", self.heuristic, self.max_depth)
    }

    fn choose_move(&self, pos: &Position, player: Player, out: &MoveSlot, cutoff: &Cutoff) {
        if pos.ply_count() < 2 {
            debug!("opening ply {}, playing a random placement", pos.ply_count());
            publish_random_move(pos, out);
            return;
        }

        let mut searcher = IterativeDeepeningSearcher::with_max_depth(self.heuristic, self.max_depth);
        if searcher
            .search(pos, player, out, cutoff, &*self.recorder)
            .is_none()
        {
            debug!("{} has no legal moves", player);
        }
    }
}

fn publish_random_move(pos: &Position, out: &MoveSlot) {
    let moves = pos.legal_moves();
    if let Some(&mov) = moves.choose(&mut rand::thread_rng()) {
        out.publish(Decision::unsearched(mov));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Board;
    use crate::search::VecDataRecorder;

    #[test]
    fn opening_moves_are_not_searched() {
        let recorder = Arc::new(VecDataRecorder::new());
        let agent = AlphaBetaAgent::default().with_recorder(recorder.clone());
        let openings: [&[&str]; 2] = [&[], &["f5"]];
        for moves in openings.iter() {
            let pos = Position::from_moves(Board::standard(), *moves).unwrap();
            let slot = MoveSlot::new();
            agent.choose_move(&pos, pos.side_to_move(), &slot, &Cutoff::never());

            let decision = slot.latest().unwrap();
            assert_eq!(0, decision.depth);
            assert!(pos.is_legal(decision.best_move));
        }

        assert!(recorder.records().is_empty());
    }

    #[test]
    fn searches_after_the_opening() {
        let pos = Position::from_moves(Board::new(5, 5).unwrap(), &["b2", "d4"]).unwrap();
        let agent = AlphaBetaAgent::new(Heuristic::Mobility, 3);
        let slot = MoveSlot::new();
        agent.choose_move(&pos, Player::One, &slot, &Cutoff::never());

        let decision = slot.latest().unwrap();
        assert_eq!(3, decision.depth);
        assert!(pos.is_legal(decision.best_move));
    }

    #[test]
    fn finished_game_publishes_nothing() {
        let pos = Position::from_notation(".x2/..x/1.. 2").unwrap();
        let agents: Vec<Box<dyn Agent>> = vec![
            Box::new(RandomAgent),
            Box::new(GreedyAgent::new(Heuristic::Mobility)),
            Box::new(AlphaBetaAgent::default()),
        ];

        for agent in agents {
            let slot = MoveSlot::new();
            agent.choose_move(&pos, Player::One, &slot, &Cutoff::never());
            assert_eq!(None, slot.latest(), "{}", agent.name());
        }
    }

    #[test]
    fn greedy_takes_the_win() {
        let pos = Position::from_notation(".../x../1.2 2").unwrap();
        let slot = MoveSlot::new();
        GreedyAgent::new(Heuristic::Mobility).choose_move(&pos, Player::One, &slot, &Cutoff::never());
        assert_eq!("b3", slot.latest_move().unwrap().to_string());
    }

    #[test]
    fn random_agent_plays_legal_moves() {
        let pos = Position::from_moves(Board::standard(), &["a1", "k9"]).unwrap();
        for _ in 0..20 {
            let slot = MoveSlot::new();
            RandomAgent.choose_move(&pos, Player::One, &slot, &Cutoff::never());
            assert!(pos.is_legal(slot.latest_move().unwrap()));
        }
    }

    #[test]
    fn agent_names() {
        assert_eq!("alphabeta:threshold:9", AlphaBetaAgent::default().name());
        assert_eq!("greedy:centrality", GreedyAgent::new(Heuristic::Centrality).name());
    }
}

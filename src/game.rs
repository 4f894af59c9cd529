// Copyright 2017-2019 Sean Gillespie.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! The game harness. Every turn runs on its own thread; the harness waits for
//! the agent until its time is up, cancels it, and plays whatever move the
//! agent published last. An agent that published nothing, or something
//! illegal, forfeits the game.
use std::fmt;
use std::sync::mpsc::{self, RecvTimeoutError};
use std::sync::Arc;
use std::thread::Builder;
use std::time::{Duration, Instant};

use cancellation::CancellationTokenSource;

use crate::agent::Agent;
use crate::board::Board;
use crate::config::{ConfigError, MatchConfig};
use crate::moves::Move;
use crate::position::Position;
use crate::search::{Cutoff, MoveSlot};
use crate::types::{Player, TableIndex};

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum GameEnd {
    /// The loser had no legal moves left.
    Isolated,
    /// The loser published no move before its time ran out.
    Timeout,
    /// The loser published a move that was not legal.
    IllegalMove(Move),
}

impl GameEnd {
    pub fn is_forfeit(self) -> bool {
        self != GameEnd::Isolated
    }
}

impl fmt::Display for GameEnd {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            GameEnd::Isolated => write!(f, "isolation"),
            GameEnd::Timeout => write!(f, "timeout"),
            GameEnd::IllegalMove(mov) => write!(f, "illegal move {}", mov),
        }
    }
}

#[derive(Clone, Debug)]
pub struct GameRecord {
    pub winner: Player,
    pub end: GameEnd,
    pub moves: Vec<Move>,
    pub final_position: Position,
}

/// Plays one game on `board`. `agents[0]` plays as player one.
pub fn play_game(board: Board, agents: &[Arc<dyn Agent>; 2], time_limit: Duration) -> GameRecord {
    let mut pos = Position::new(board);
    let mut moves = vec![];
    loop {
        let player = pos.side_to_move();
        let agent = &agents[player.as_index()];
        let end = if pos.is_terminal() {
            Some(GameEnd::Isolated)
        } else {
            match play_turn(agent, &pos, time_limit) {
                Some(mov) if pos.is_legal(mov) => {
                    pos.apply_move(mov);
                    moves.push(mov);
                    None
                }
                Some(mov) => {
                    warn!(
                        "player {} ({}) played illegal move {}, forfeiting",
                        player,
                        agent.name(),
                        mov
                    );
                    Some(GameEnd::IllegalMove(mov))
                }
                None => {
                    warn!(
                        "player {} ({}) did not move within {}ms, forfeiting",
                        player,
                        agent.name(),
                        time_limit.as_millis()
                    );
                    Some(GameEnd::Timeout)
                }
            }
        };

        if let Some(end) = end {
            return GameRecord {
                winner: player.toggle(),
                end,
                moves,
                final_position: pos,
            };
        }
    }
}

/// Runs a single turn for the side to move in `pos` and returns the last
/// move the agent published before its time ran out.
fn play_turn(agent: &Arc<dyn Agent>, pos: &Position, time_limit: Duration) -> Option<Move> {
    let player = pos.side_to_move();
    let slot = MoveSlot::new();
    let cts = CancellationTokenSource::new();
    let cutoff = Cutoff::new(cts.token().clone()).with_deadline(Instant::now() + time_limit);
    let (done_tx, done_rx) = mpsc::channel();

    let worker_agent = agent.clone();
    let worker_pos = pos.clone();
    let worker_slot = slot.clone();
    let spawned = Builder::new()
        .name(format!("agent-{}", player))
        .spawn(move || {
            worker_agent.choose_move(&worker_pos, player, &worker_slot, &cutoff);
            // the harness may have stopped listening already
            let _ = done_tx.send(());
        });

    if let Err(err) = spawned {
        warn!("failed to spawn thread for player {}: {}", player, err);
        return None;
    }

    match done_rx.recv_timeout(time_limit) {
        Ok(()) => {}
        Err(RecvTimeoutError::Timeout) => {
            debug!("player {} still searching at the deadline", player);
        }
        Err(RecvTimeoutError::Disconnected) => {
            warn!("agent thread for player {} died", player);
        }
    }

    // An agent still searching stops at its next iteration boundary; its
    // thread is left to finish on its own.
    cts.cancel();
    slot.latest_move()
}

/// Results of a match, per agent. Index 0 is the first configured agent.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct MatchStats {
    pub games: u32,
    pub wins: [u32; 2],
    pub forfeits: [u32; 2],
}

impl MatchStats {
    pub fn win_rate(&self, agent: usize) -> f64 {
        if self.games == 0 {
            0.0
        } else {
            f64::from(self.wins[agent]) / f64::from(self.games)
        }
    }
}

/// Plays the configured number of games. The agents alternate who moves
/// first so neither gets the first placement every game.
pub fn play_match(config: &MatchConfig) -> Result<MatchStats, ConfigError> {
    config.validate()?;
    let board = config.board()?;
    let agents: [Arc<dyn Agent>; 2] = [Arc::from(config.one.build()), Arc::from(config.two.build())];
    Ok(play_games(board, &agents, config.time_limit(), config.games))
}

pub fn play_games(
    board: Board,
    agents: &[Arc<dyn Agent>; 2],
    time_limit: Duration,
    games: u32,
) -> MatchStats {
    let mut stats = MatchStats::default();
    for game in 0..games {
        // seats[p] is the agent playing as player p
        let seats = if game % 2 == 0 { [0, 1] } else { [1, 0] };
        let seated = [agents[seats[0]].clone(), agents[seats[1]].clone()];
        let record = play_game(board, &seated, time_limit);

        let winner = seats[record.winner.as_index()];
        stats.games += 1;
        stats.wins[winner] += 1;
        if record.end.is_forfeit() {
            stats.forfeits[1 - winner] += 1;
        }

        info!(
            "game {}: {} beat {} by {} after {} plies",
            game + 1,
            agents[winner].name(),
            agents[1 - winner].name(),
            record.end,
            record.final_position.ply_count()
        );
    }

    for (idx, agent) in agents.iter().enumerate() {
        debug!(
            "{}: {} wins, {} forfeits",
            agent.name(),
            stats.wins[idx],
            stats.forfeits[idx]
        );
    }

    stats
}

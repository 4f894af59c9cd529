// Copyright 2017-2019 Sean Gillespie.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Agent and match configuration. Agents are described either on the
//! command line (`alphabeta:threshold:7`) or in a JSON match file:
//!
//! ```json
//! {
//!     "width": 7,
//!     "height": 7,
//!     "time_limit_ms": 150,
//!     "games": 10,
//!     "one": { "kind": "alphabeta", "heuristic": "threshold", "max_depth": 9 },
//!     "two": { "kind": "greedy", "heuristic": "mobility" }
//! }
//! ```
use std::error::Error;
use std::fmt;
use std::fs::File;
use std::io;
use std::path::Path;
use std::str::FromStr;
use std::time::Duration;

use crate::agent::{Agent, AlphaBetaAgent, GreedyAgent, RandomAgent};
use crate::board::{Board, STANDARD_HEIGHT, STANDARD_WIDTH};
use crate::eval::{Heuristic, UnknownHeuristic};
use crate::position::ParseError;
use crate::search::DEFAULT_MAX_DEPTH;

/// Time each agent gets per turn unless configured otherwise.
pub const DEFAULT_TIME_LIMIT_MS: u64 = 150;

#[derive(Debug)]
pub enum ConfigError {
    Io(io::Error),
    Json(serde_json::Error),
    Board(ParseError),
    Heuristic(UnknownHeuristic),
    InvalidAgent(String),
    InvalidDepth(String),
    NoGames,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ConfigError::Io(err) => write!(f, "failed to read config: {}", err),
            ConfigError::Json(err) => write!(f, "invalid config: {}", err),
            ConfigError::Board(err) => write!(f, "invalid board: {}", err),
            ConfigError::Heuristic(err) => write!(f, "{}", err),
            ConfigError::InvalidAgent(agent) => write!(
                f,
                "invalid agent `{}` (expected random, greedy[:heuristic] or alphabeta[:heuristic[:depth]])",
                agent
            ),
            ConfigError::InvalidDepth(depth) => {
                write!(f, "invalid search depth `{}` (must be at least 1)", depth)
            }
            ConfigError::NoGames => write!(f, "a match must have at least one game"),
        }
    }
}

impl Error for ConfigError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            ConfigError::Io(err) => Some(err),
            ConfigError::Json(err) => Some(err),
            ConfigError::Board(err) => Some(err),
            ConfigError::Heuristic(err) => Some(err),
            _ => None,
        }
    }
}

impl From<io::Error> for ConfigError {
    fn from(err: io::Error) -> ConfigError {
        ConfigError::Io(err)
    }
}

impl From<serde_json::Error> for ConfigError {
    fn from(err: serde_json::Error) -> ConfigError {
        ConfigError::Json(err)
    }
}

impl From<ParseError> for ConfigError {
    fn from(err: ParseError) -> ConfigError {
        ConfigError::Board(err)
    }
}

impl From<UnknownHeuristic> for ConfigError {
    fn from(err: UnknownHeuristic) -> ConfigError {
        ConfigError::Heuristic(err)
    }
}

fn default_max_depth() -> u32 {
    DEFAULT_MAX_DEPTH
}

/// Describes an agent to build.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum AgentSpec {
    Random,
    Greedy {
        #[serde(default)]
        heuristic: Heuristic,
    },
    AlphaBeta {
        #[serde(default)]
        heuristic: Heuristic,
        #[serde(default = "default_max_depth")]
        max_depth: u32,
    },
}

impl AgentSpec {
    pub fn build(self) -> Box<dyn Agent> {
        match self {
            AgentSpec::Random => Box::new(RandomAgent),
            AgentSpec::Greedy { heuristic } => Box::new(GreedyAgent::new(heuristic)),
            AgentSpec::AlphaBeta {
                heuristic,
                max_depth,
            } => Box::new(AlphaBetaAgent::new(heuristic, max_depth)),
        }
    }

    pub fn validate(self) -> Result<(), ConfigError> {
        match self {
            AgentSpec::AlphaBeta { max_depth: 0, .. } => {
                Err(ConfigError::InvalidDepth("0".to_owned()))
            }
            _ => Ok(()),
        }
    }
}

impl Default for AgentSpec {
    fn default() -> AgentSpec {
        AgentSpec::AlphaBeta {
            heuristic: Heuristic::default(),
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

impl fmt::Display for AgentSpec {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            AgentSpec::Random => write!(f, "random"),
            AgentSpec::Greedy { heuristic } => write!(f, "greedy:{}", heuristic),
            AgentSpec::AlphaBeta {
                heuristic,
                max_depth,
            } => write!(f, "alphabeta:{}:{}", heuristic, max_depth),
        }
    }
}

impl FromStr for AgentSpec {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<AgentSpec, ConfigError> {
        let parts: Vec<&str> = s.split(':').collect();
        let heuristic = || -> Result<Heuristic, ConfigError> {
            match parts.get(1) {
                Some(name) => Ok(name.parse()?),
                None => Ok(Heuristic::default()),
            }
        };

        let spec = match (parts[0], parts.len()) {
            ("random", 1) => AgentSpec::Random,
            ("greedy", 1..=2) => AgentSpec::Greedy {
                heuristic: heuristic()?,
            },
            ("alphabeta", 1..=3) => {
                let max_depth = match parts.get(2) {
                    Some(depth) => depth
                        .parse()
                        .map_err(|_| ConfigError::InvalidDepth((*depth).to_owned()))?,
                    None => DEFAULT_MAX_DEPTH,
                };

                AgentSpec::AlphaBeta {
                    heuristic: heuristic()?,
                    max_depth,
                }
            }
            _ => return Err(ConfigError::InvalidAgent(s.to_owned())),
        };

        spec.validate()?;
        Ok(spec)
    }
}

/// Everything needed to play a match between two agents.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MatchConfig {
    pub width: u32,
    pub height: u32,
    pub time_limit_ms: u64,
    pub games: u32,
    pub one: AgentSpec,
    pub two: AgentSpec,
}

impl Default for MatchConfig {
    fn default() -> MatchConfig {
        MatchConfig {
            width: STANDARD_WIDTH,
            height: STANDARD_HEIGHT,
            time_limit_ms: DEFAULT_TIME_LIMIT_MS,
            games: 1,
            one: AgentSpec::default(),
            two: AgentSpec::Random,
        }
    }
}

impl MatchConfig {
    pub fn load<P: AsRef<Path>>(path: P) -> Result<MatchConfig, ConfigError> {
        let file = File::open(path)?;
        let config: MatchConfig = serde_json::from_reader(file)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_json(json: &str) -> Result<MatchConfig, ConfigError> {
        let config: MatchConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        self.board()?;
        self.one.validate()?;
        self.two.validate()?;
        if self.games == 0 {
            return Err(ConfigError::NoGames);
        }

        Ok(())
    }

    pub fn board(&self) -> Result<Board, ConfigError> {
        Ok(Board::new(self.width, self.height)?)
    }

    pub fn time_limit(&self) -> Duration {
        Duration::from_millis(self.time_limit_ms)
    }
}

// Copyright 2017-2019 Sean Gillespie.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Static evaluation of positions the search could not finish looking
//! through. Every evaluator scores a non-terminal position from the point of
//! view of one player; higher is better for that player.
use std::fmt;
use std::str::FromStr;

use crate::position::Position;
use crate::types::Player;

mod centrality;
mod mobility;
mod score;

pub use centrality::{CentralityEvaluator, NormalizedCentralityEvaluator};
pub use mobility::{AsymmetricMobilityEvaluator, MobilityEvaluator, ThresholdMobilityEvaluator};
pub use score::Score;

pub trait Evaluator {
    /// Scores `pos` for `player`. Implementations must be pure functions of
    /// the position: the same position always gets the same score.
    fn score(&self, pos: &Position, player: Player) -> f64;
}

/// The evaluators an agent can be configured with.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Heuristic {
    #[serde(rename = "mobility")]
    Mobility,
    #[serde(rename = "centrality")]
    Centrality,
    #[serde(rename = "normalized")]
    NormalizedCentrality,
    #[serde(rename = "asymmetric")]
    AsymmetricMobility,
    #[serde(rename = "threshold")]
    ThresholdMobility,
}

pub static HEURISTICS: [Heuristic; 5] = [
    Heuristic::Mobility,
    Heuristic::Centrality,
    Heuristic::NormalizedCentrality,
    Heuristic::AsymmetricMobility,
    Heuristic::ThresholdMobility,
];

impl Heuristic {
    pub fn name(self) -> &'static str {
        match self {
            Heuristic::Mobility => "mobility",
            Heuristic::Centrality => "centrality",
            Heuristic::NormalizedCentrality => "normalized",
            Heuristic::AsymmetricMobility => "asymmetric",
            Heuristic::ThresholdMobility => "threshold",
        }
    }
}

impl Default for Heuristic {
    fn default() -> Heuristic {
        Heuristic::ThresholdMobility
    }
}

impl Evaluator for Heuristic {
    fn score(&self, pos: &Position, player: Player) -> f64 {
        match self {
            Heuristic::Mobility => MobilityEvaluator.score(pos, player),
            Heuristic::Centrality => CentralityEvaluator.score(pos, player),
            Heuristic::NormalizedCentrality => NormalizedCentralityEvaluator.score(pos, player),
            Heuristic::AsymmetricMobility => AsymmetricMobilityEvaluator.score(pos, player),
            Heuristic::ThresholdMobility => ThresholdMobilityEvaluator.score(pos, player),
        }
    }
}

impl fmt::Display for Heuristic {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UnknownHeuristic(pub String);

impl fmt::Display for UnknownHeuristic {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "unknown heuristic `{}` (expected one of", self.0)?;
        for heuristic in HEURISTICS.iter() {
            write!(f, " {}", heuristic)?;
        }

        write!(f, ")")
    }
}

impl std::error::Error for UnknownHeuristic {}

impl FromStr for Heuristic {
    type Err = UnknownHeuristic;

    fn from_str(s: &str) -> Result<Heuristic, UnknownHeuristic> {
        HEURISTICS
            .iter()
            .cloned()
            .find(|heuristic| heuristic.name() == s)
            .ok_or_else(|| UnknownHeuristic(s.to_owned()))
    }
}

/// Divides two counts, defining 0/0 as 0.
fn ratio(numerator: f64, denominator: f64) -> f64 {
    if denominator == 0.0 {
        0.0
    } else {
        numerator / denominator
    }
}

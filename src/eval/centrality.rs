// Copyright 2017-2019 Sean Gillespie.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.
use crate::analysis::Analysis;
use crate::eval::{ratio, Evaluator};
use crate::position::Position;
use crate::types::Player;

/// Mobility difference plus how much closer to the center we are than the
/// opponent. Central knights keep more of the board within reach.
#[derive(Copy, Clone, Debug, Default)]
pub struct CentralityEvaluator;

impl Evaluator for CentralityEvaluator {
    fn score(&self, pos: &Position, player: Player) -> f64 {
        let features = Features::new(pos, player);
        (features.ours - features.theirs) + (features.their_distance - features.our_distance)
    }
}

/// The two terms of `CentralityEvaluator`, each divided by the larger of its
/// two inputs so that both land in [-1, 1] whatever the board size. A term
/// whose inputs are both zero contributes zero.
#[derive(Copy, Clone, Debug, Default)]
pub struct NormalizedCentralityEvaluator;

impl Evaluator for NormalizedCentralityEvaluator {
    fn score(&self, pos: &Position, player: Player) -> f64 {
        let features = Features::new(pos, player);
        let mobility = ratio(
            features.ours - features.theirs,
            features.ours.max(features.theirs),
        );
        let centrality = ratio(
            features.their_distance - features.our_distance,
            features.their_distance.max(features.our_distance),
        );
        mobility + centrality
    }
}

struct Features {
    ours: f64,
    theirs: f64,
    our_distance: f64,
    their_distance: f64,
}

impl Features {
    fn new(pos: &Position, player: Player) -> Features {
        let analysis = Analysis::new(pos);
        let opponent = player.toggle();
        Features {
            ours: f64::from(analysis.mobility(player)),
            theirs: f64::from(analysis.mobility(opponent)),
            our_distance: f64::from(analysis.distance_to_center(player)),
            their_distance: f64::from(analysis.distance_to_center(opponent)),
        }
    }
}

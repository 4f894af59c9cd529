// Copyright 2017-2019 Sean Gillespie.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.
use crate::analysis::Analysis;
use crate::eval::Evaluator;
use crate::position::Position;
use crate::types::Player;

const PENALTY_WEIGHT: f64 = 2.0;

/// Our moves minus their moves.
#[derive(Copy, Clone, Debug, Default)]
pub struct MobilityEvaluator;

impl Evaluator for MobilityEvaluator {
    fn score(&self, pos: &Position, player: Player) -> f64 {
        let analysis = Analysis::new(pos);
        let ours = f64::from(analysis.mobility(player));
        let theirs = f64::from(analysis.mobility(player.toggle()));
        ours - theirs
    }
}

/// Mobility difference, with the side that is closer to the center getting
/// its own mobility counted twice. Being out-centered is treated as a risk
/// that compounds.
#[derive(Copy, Clone, Debug, Default)]
pub struct AsymmetricMobilityEvaluator;

impl Evaluator for AsymmetricMobilityEvaluator {
    fn score(&self, pos: &Position, player: Player) -> f64 {
        let analysis = Analysis::new(pos);
        let opponent = player.toggle();
        let ours = f64::from(analysis.mobility(player));
        let theirs = f64::from(analysis.mobility(opponent));
        let our_distance = analysis.distance_to_center(player);
        let their_distance = analysis.distance_to_center(opponent);
        if their_distance > our_distance {
            PENALTY_WEIGHT * ours - theirs
        } else if their_distance < our_distance {
            ours - PENALTY_WEIGHT * theirs
        } else {
            ours - theirs
        }
    }
}

/// Mobility difference, counting the opponent's mobility twice once our
/// knight has drifted at least half of the way from the center to the
/// furthest corner.
#[derive(Copy, Clone, Debug, Default)]
pub struct ThresholdMobilityEvaluator;

impl Evaluator for ThresholdMobilityEvaluator {
    fn score(&self, pos: &Position, player: Player) -> f64 {
        let analysis = Analysis::new(pos);
        let ours = f64::from(analysis.mobility(player));
        let theirs = f64::from(analysis.mobility(player.toggle()));
        let distance = f64::from(analysis.distance_to_center(player));
        let threshold = f64::from(analysis.max_distance()) / 2.0;
        if distance >= threshold {
            ours - PENALTY_WEIGHT * theirs
        } else {
            ours - theirs
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Board;

    #[test]
    fn mobility_is_antisymmetric() {
        let pos = Position::from_moves(Board::standard(), &["a1", "f5"]).unwrap();
        assert_eq!(-6.0, MobilityEvaluator.score(&pos, Player::One));
        assert_eq!(6.0, MobilityEvaluator.score(&pos, Player::Two));
    }

    #[test]
    fn asymmetric_rewards_the_central_player() {
        let pos = Position::from_moves(Board::standard(), &["a1", "f5"]).unwrap();
        // player two is on the center with 8 moves, player one in a corner with 2
        assert_eq!(2.0 - 16.0, AsymmetricMobilityEvaluator.score(&pos, Player::One));
        assert_eq!(16.0 - 2.0, AsymmetricMobilityEvaluator.score(&pos, Player::Two));
    }

    #[test]
    fn asymmetric_tie_is_plain_mobility() {
        let pos = Position::from_moves(Board::standard(), &["a1", "k9"]).unwrap();
        assert_eq!(0.0, AsymmetricMobilityEvaluator.score(&pos, Player::One));
    }

    #[test]
    fn threshold_penalizes_far_knights_only() {
        // max distance on 11x9 is 9, so the threshold is 4.5
        let pos = Position::from_moves(Board::standard(), &["a1", "f5"]).unwrap();
        assert_eq!(2.0 - 16.0, ThresholdMobilityEvaluator.score(&pos, Player::One));
        assert_eq!(8.0 - 2.0, ThresholdMobilityEvaluator.score(&pos, Player::Two));

        // e3 is distance 3 from f5: under the threshold
        let pos = Position::from_moves(Board::standard(), &["e3", "f5"]).unwrap();
        let ours = f64::from(pos.mobility(Player::One));
        let theirs = f64::from(pos.mobility(Player::Two));
        assert_eq!(ours - theirs, ThresholdMobilityEvaluator.score(&pos, Player::One));
    }

    #[test]
    fn threshold_boundary_is_inclusive() {
        // 5x5: max distance 4, threshold 2; b2 is exactly two from c3
        let pos = Position::from_moves(Board::new(5, 5).unwrap(), &["b2", "e5"]).unwrap();
        let ours = f64::from(pos.mobility(Player::One));
        let theirs = f64::from(pos.mobility(Player::Two));
        assert_eq!(
            ours - 2.0 * theirs,
            ThresholdMobilityEvaluator.score(&pos, Player::One)
        );
    }
}

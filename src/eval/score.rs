// Copyright 2017-2019 Sean Gillespie.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.
use std::cmp::Ordering;
use std::fmt;

/// Score is the value the search assigns to a position, always from the
/// point of view of the searching player. Finished games carry their
/// canonical utility (win or loss) together with the number of plies from
/// the search root at which the game ended; everything else is a heuristic
/// estimate.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum Score {
    /// The game ends in a win for the searching player after the given
    /// number of plies.
    Win(u32),

    /// The game ends in a loss for the searching player after the given
    /// number of plies.
    Loss(u32),

    /// The game is not over and an evaluator has assigned the given score to
    /// this position.
    Evaluated(f64),
}

impl Score {
    /// The greatest possible score. Real wins are at least one ply away from
    /// the root, so this is strictly better than any of them.
    pub const MAX: Score = Score::Win(0);

    /// The least possible score.
    pub const MIN: Score = Score::Loss(0);

    pub fn from_utility(utility: i32, ply: u32) -> Score {
        if utility > 0 {
            Score::Win(ply)
        } else {
            Score::Loss(ply)
        }
    }

    /// The canonical utility (+1 or -1) of a decided score.
    pub fn utility(self) -> Option<i32> {
        match self {
            Score::Win(_) => Some(1),
            Score::Loss(_) => Some(-1),
            Score::Evaluated(_) => None,
        }
    }

    pub fn is_decisive(self) -> bool {
        self.utility().is_some()
    }
}

impl fmt::Display for Score {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Score::Win(plies) => write!(f, "#{}", plies),
            Score::Loss(plies) => write!(f, "#-{}", plies),
            Score::Evaluated(score) => write!(f, "{}", score),
        }
    }
}

impl Eq for Score {}

impl PartialOrd for Score {
    fn partial_cmp(&self, other: &Score) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Score {
    fn cmp(&self, other: &Score) -> Ordering {
        // The Ord implementation totally orders scores based on "badness":
        //   1. A winning score is better than another winning score if it wins in less plies
        //      than the other.
        //   2. A losing score is better than another losing score if it it loses in more plies
        //      than the other.
        //   3. A winning score is better than all non-winning scores.
        //   4. A losing score is worse than all non-losing scores.
        //   5. Two evaluated scores are comparable like any other number.
        match (self, other) {
            // Rules 1 and 2
            (Score::Win(self_win), Score::Win(other_win)) => other_win.cmp(self_win),
            (Score::Loss(self_loss), Score::Loss(other_loss)) => self_loss.cmp(other_loss),

            // Rules 3 and 4
            (Score::Win(_), _) => Ordering::Greater,
            (_, Score::Win(_)) => Ordering::Less,
            (Score::Loss(_), _) => Ordering::Less,
            (_, Score::Loss(_)) => Ordering::Greater,

            // Rule 5
            (Score::Evaluated(self_score), Score::Evaluated(other_score)) => self_score
                .partial_cmp(other_score)
                .expect("NaN in score comparison"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Score;

    #[test]
    fn win_cmp() {
        assert!(Score::Win(2) > Score::Win(3));
        assert!(Score::Win(4) < Score::Win(3));
        assert!(Score::Win(3) == Score::Win(3));
        assert!(Score::Win(4) > Score::Evaluated(9999999f64));
        assert!(Score::Win(4) > Score::Loss(1));
    }

    #[test]
    fn loss_cmp() {
        assert!(Score::Loss(1) < Score::Loss(2));
        assert!(Score::Loss(2) == Score::Loss(2));
        assert!(Score::Loss(3) > Score::Loss(2));
        assert!(Score::Evaluated(-42f64) > Score::Loss(999));
        assert!(Score::Loss(99) < Score::Win(1));
    }

    #[test]
    fn eval_cmp() {
        assert!(Score::Evaluated(1f64) < Score::Evaluated(2f64));
        assert!(Score::Evaluated(3f64) > Score::Evaluated(2f64));
    }

    #[test]
    fn bounds() {
        assert!(Score::MAX > Score::Win(1));
        assert!(Score::MIN < Score::Loss(1));
        assert!(Score::MAX > Score::Evaluated(std::f64::MAX));
        assert!(Score::MIN < Score::Evaluated(std::f64::MIN));
    }

    #[test]
    fn utility() {
        assert_eq!(Score::Win(3), Score::from_utility(1, 3));
        assert_eq!(Score::Loss(1), Score::from_utility(-1, 1));
        assert_eq!(Some(1), Score::Win(7).utility());
        assert_eq!(Some(-1), Score::Loss(7).utility());
        assert_eq!(None, Score::Evaluated(1.0).utility());
    }

    #[test]
    fn display() {
        assert_eq!("#3", Score::Win(3).to_string());
        assert_eq!("#-2", Score::Loss(2).to_string());
        assert_eq!("-1.5", Score::Evaluated(-1.5).to_string());
    }
}

// Copyright 2017-2019 Sean Gillespie.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.
use std::sync::{Arc, RwLock};

use crate::moves::Move;

/// A move an agent is prepared to play, and the depth of the search that
/// produced it. Depth zero means the move was picked without searching.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Decision {
    pub best_move: Move,
    pub depth: u32,
}

impl Decision {
    pub fn unsearched(best_move: Move) -> Decision {
        Decision {
            best_move,
            depth: 0,
        }
    }
}

/// A single-slot channel between a searching agent and whoever is waiting
/// on its move. Publishing overwrites the previous decision, and reading
/// returns the latest one without waiting on the producer. Clones share the
/// same slot.
#[derive(Clone, Default)]
pub struct MoveSlot {
    latest: Arc<RwLock<Option<Decision>>>,
}

impl MoveSlot {
    pub fn new() -> MoveSlot {
        Default::default()
    }

    /// Publishes a decision, unless the slot already holds one from a
    /// deeper search. Returns whether the decision was stored.
    pub fn publish(&self, decision: Decision) -> bool {
        let mut latest = self.latest.write().expect("move slot lock was poisoned");
        match *latest {
            Some(current) if current.depth > decision.depth => false,
            _ => {
                *latest = Some(decision);
                true
            }
        }
    }

    pub fn latest(&self) -> Option<Decision> {
        *self.latest.read().expect("move slot lock was poisoned")
    }

    pub fn latest_move(&self) -> Option<Move> {
        self.latest().map(|decision| decision.best_move)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;

    fn decision(cell: &str, depth: u32) -> Decision {
        Decision {
            best_move: cell.parse().unwrap(),
            depth,
        }
    }

    #[test]
    fn empty_slot() {
        assert_eq!(None, MoveSlot::new().latest());
    }

    #[test]
    fn overwrites_with_deeper_results() {
        let slot = MoveSlot::new();
        assert!(slot.publish(Decision::unsearched("a1".parse().unwrap())));
        assert!(slot.publish(decision("b3", 1)));
        assert!(slot.publish(decision("c5", 2)));
        assert_eq!(Some(decision("c5", 2)), slot.latest());
    }

    #[test]
    fn keeps_deeper_result() {
        let slot = MoveSlot::new();
        slot.publish(decision("c5", 4));
        assert!(!slot.publish(decision("b3", 3)));
        assert_eq!("c5", slot.latest_move().unwrap().to_string());

        assert!(slot.publish(decision("d7", 4)));
        assert_eq!("d7", slot.latest_move().unwrap().to_string());
    }

    #[test]
    fn clones_share_the_slot() {
        let slot = MoveSlot::new();
        let producer = slot.clone();
        thread::spawn(move || {
            producer.publish(decision("e4", 1));
        })
        .join()
        .unwrap();

        assert_eq!(Some(decision("e4", 1)), slot.latest());
    }
}

// Copyright 2017-2019 Sean Gillespie.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.
use crate::position::Position;
use crate::types::Player;

/// Provider of common board analyses upon a static position. It is suitable for use in board
/// evaluators, which ask the same handful of questions (how many moves, how far from the
/// center) about both players of a single, immutable position.
pub struct Analysis<'a> {
    pos: &'a Position,
}

impl<'a> Analysis<'a> {
    pub fn new(pos: &'a Position) -> Analysis<'a> {
        Analysis { pos }
    }

    /// The number of cells the given player could move to next, whether or not it is their
    /// turn.
    pub fn mobility(&self, player: Player) -> u32 {
        self.pos.mobility(player)
    }

    /// Rectilinear distance from the given player's knight to the nearest center cell. A
    /// knight that has not been placed yet is free to land on the center, so its distance is
    /// zero.
    pub fn distance_to_center(&self, player: Player) -> u32 {
        self.pos
            .location(player)
            .map(|cell| self.pos.board().distance_to_center(cell))
            .unwrap_or(0)
    }

    /// The largest distance to center any cell of the board has.
    pub fn max_distance(&self) -> u32 {
        self.pos.board().max_distance()
    }
}

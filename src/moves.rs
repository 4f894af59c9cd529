// Copyright 2017-2019 Sean Gillespie.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.
use std::fmt;
use std::str::FromStr;

use crate::position::ParseError;
use crate::types::Cell;

/// A move in Isolation is fully described by the cell the moving player
/// lands on; the origin is always the player's current location (or nowhere,
/// for the placement moves of the first two plies).
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Move {
    destination: Cell,
}

impl Move {
    pub const fn new(destination: Cell) -> Move {
        Move { destination }
    }

    pub const fn destination(self) -> Cell {
        self.destination
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.destination)
    }
}

impl FromStr for Move {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Move, ParseError> {
        s.parse().map(Move::new)
    }
}

impl From<Cell> for Move {
    fn from(cell: Cell) -> Move {
        Move::new(cell)
    }
}

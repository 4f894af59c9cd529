// Copyright 2017-2019 Sean Gillespie.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.
use num_traits::{FromPrimitive, ToPrimitive};
use regex::Regex;
use std::fmt::{self, Display, Write};
use std::str::FromStr;

use crate::position::ParseError;

// TableIndex is a trait for all types that can serve as an index into a table.
// It is common to use these types as indices into tables, so this trait allows
// any type implementing To and FromPrimitive to be used as table indices.
pub trait TableIndex {
    fn as_index(self) -> usize;
    fn from_index(idx: usize) -> Self;
}

impl<T> TableIndex for T
where
    T: FromPrimitive + ToPrimitive,
{
    fn as_index(self) -> usize {
        self.to_u32().unwrap() as usize
    }

    fn from_index(idx: usize) -> T {
        <T as FromPrimitive>::from_u64(idx as u64).unwrap()
    }
}

/// One of the two players. `One` always moves on even plies, `Two` on odd
/// plies, so the player to move is a function of the ply count alone.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, FromPrimitive, ToPrimitive)]
pub enum Player {
    One,
    Two,
}

impl Player {
    pub fn toggle(self) -> Player {
        match self {
            Player::One => Player::Two,
            Player::Two => Player::One,
        }
    }

    pub fn for_ply(ply: u32) -> Player {
        Player::from_index((ply % 2) as usize)
    }
}

impl Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let chr = match self {
            Player::One => '1',
            Player::Two => '2',
        };
        f.write_char(chr)
    }
}

pub static PLAYERS: [Player; 2] = [Player::One, Player::Two];

/// A single cell of an Isolation board, addressed by column (`x`) and
/// row (`y`). Cells are written like chess squares: a file letter followed by
/// a one-based rank, so `a1` is the cell at `(0, 0)`.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Cell {
    x: u8,
    y: u8,
}

impl Cell {
    pub const fn new(x: u8, y: u8) -> Cell {
        Cell { x, y }
    }

    pub const fn x(self) -> u8 {
        self.x
    }

    pub const fn y(self) -> u8 {
        self.y
    }

    /// Rectilinear distance between two cells.
    pub fn manhattan(self, other: Cell) -> u32 {
        let dx = (i32::from(self.x) - i32::from(other.x)).abs();
        let dy = (i32::from(self.y) - i32::from(other.y)).abs();
        (dx + dy) as u32
    }

    pub fn offset(self, dx: i32, dy: i32) -> Option<Cell> {
        let x = i32::from(self.x) + dx;
        let y = i32::from(self.y) + dy;
        if x < 0 || y < 0 || x > i32::from(u8::max_value()) || y > i32::from(u8::max_value()) {
            return None;
        }

        Some(Cell::new(x as u8, y as u8))
    }
}

impl Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_char((b'a' + self.x) as char)?;
        write!(f, "{}", u32::from(self.y) + 1)
    }
}

impl FromStr for Cell {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Cell, ParseError> {
        lazy_static! {
            static ref CELL_REGEX: Regex = Regex::new(r"^([a-z])([1-9][0-9]?)$").unwrap();
        }

        let captures = CELL_REGEX
            .captures(s.trim())
            .ok_or_else(|| ParseError::InvalidCell(s.to_owned()))?;
        let file = captures[1].as_bytes()[0] - b'a';
        let rank: u8 = captures[2]
            .parse()
            .map_err(|_| ParseError::InvalidCell(s.to_owned()))?;
        Ok(Cell::new(file, rank - 1))
    }
}

// Copyright 2017-2019 Sean Gillespie.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Board geometry. A `Board` only knows its dimensions; everything that
//! depends on the cells a game has already used lives in `Position`.
use arrayvec::ArrayVec;
use regex::Regex;
use std::fmt;
use std::str::FromStr;

use crate::bitboard::{Bitboard, MAX_CELLS};
use crate::position::ParseError;
use crate::types::Cell;

pub const STANDARD_WIDTH: u32 = 11;
pub const STANDARD_HEIGHT: u32 = 9;

/// Widths are limited by the file letters used in cell notation.
const MAX_WIDTH: u32 = 26;
const MAX_HEIGHT: u32 = 99;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Board {
    width: u8,
    height: u8,
}

impl Board {
    /// The 11x9 board knight's Isolation is normally played on.
    pub const fn standard() -> Board {
        Board {
            width: STANDARD_WIDTH as u8,
            height: STANDARD_HEIGHT as u8,
        }
    }

    pub fn new(width: u32, height: u32) -> Result<Board, ParseError> {
        if width == 0
            || height == 0
            || width > MAX_WIDTH
            || height > MAX_HEIGHT
            || (width * height) as usize > MAX_CELLS
        {
            return Err(ParseError::InvalidBoardSize(width, height));
        }

        Ok(Board {
            width: width as u8,
            height: height as u8,
        })
    }

    pub fn width(self) -> u32 {
        u32::from(self.width)
    }

    pub fn height(self) -> u32 {
        u32::from(self.height)
    }

    pub fn cell_count(self) -> usize {
        self.width as usize * self.height as usize
    }

    pub fn contains(self, cell: Cell) -> bool {
        cell.x() < self.width && cell.y() < self.height
    }

    /// Index of a cell into bitboards built for this board. Rows are laid out
    /// one after the other, starting from `y = 0`.
    pub fn index(self, cell: Cell) -> usize {
        debug_assert!(self.contains(cell), "cell {} is not on {}", cell, self);
        cell.y() as usize * self.width as usize + cell.x() as usize
    }

    pub fn cell(self, index: usize) -> Cell {
        debug_assert!(index < self.cell_count());
        let width = self.width as usize;
        Cell::new((index % width) as u8, (index / width) as u8)
    }

    pub fn cells(self) -> impl Iterator<Item = Cell> {
        (0..self.cell_count()).map(move |idx| self.cell(idx))
    }

    /// Every cell of the board.
    pub fn all(self) -> Bitboard {
        Bitboard::first_n(self.cell_count())
    }

    /// The geometric center of the board. An axis of odd length has a single
    /// center coordinate, an axis of even length has two, so a board has one,
    /// two or four center cells.
    pub fn center_cells(self) -> ArrayVec<[Cell; 4]> {
        let mut centers = ArrayVec::new();
        for &x in axis_centers(self.width).iter() {
            for &y in axis_centers(self.height).iter() {
                centers.push(Cell::new(x, y));
            }
        }

        centers
    }

    /// Rectilinear distance from a cell to the nearest center cell.
    pub fn distance_to_center(self, cell: Cell) -> u32 {
        self.center_cells()
            .iter()
            .map(|&center| center.manhattan(cell))
            .min()
            .unwrap_or(0)
    }

    /// The distance to center of the corner furthest from the center.
    pub fn max_distance(self) -> u32 {
        let right = self.width - 1;
        let top = self.height - 1;
        [
            Cell::new(0, 0),
            Cell::new(right, 0),
            Cell::new(0, top),
            Cell::new(right, top),
        ]
        .iter()
        .map(|&corner| self.distance_to_center(corner))
        .max()
        .unwrap_or(0)
    }
}

fn axis_centers(length: u8) -> ArrayVec<[u8; 2]> {
    let mut centers = ArrayVec::new();
    centers.push(length / 2);
    if length % 2 == 0 {
        centers.push(length / 2 - 1);
    }

    centers
}

impl Default for Board {
    fn default() -> Board {
        Board::standard()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

impl FromStr for Board {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Board, ParseError> {
        lazy_static! {
            static ref SIZE_REGEX: Regex = Regex::new(r"^([0-9]{1,3})x([0-9]{1,3})$").unwrap();
        }

        let captures = SIZE_REGEX
            .captures(s.trim())
            .ok_or_else(|| ParseError::InvalidBoardNotation(s.to_owned()))?;
        let width = captures[1]
            .parse()
            .map_err(|_| ParseError::InvalidBoardNotation(s.to_owned()))?;
        let height = captures[2]
            .parse()
            .map_err(|_| ParseError::InvalidBoardNotation(s.to_owned()))?;
        Board::new(width, height)
    }
}

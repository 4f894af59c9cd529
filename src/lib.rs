// Copyright 2017-2019 Sean Gillespie.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! A game-playing agent for knight's Isolation, built around an iterative
//! deepening alpha-beta search that always has a move ready.

#[macro_use]
extern crate num_derive;
#[macro_use]
extern crate lazy_static;
#[macro_use]
extern crate log;
#[macro_use]
extern crate serde_derive;

pub mod agent;
mod analysis;
pub mod attacks;
mod bitboard;
mod board;
pub mod config;
pub mod eval;
pub mod game;
mod move_generator;
mod moves;
mod perft;
mod position;
pub mod search;
mod types;

pub use analysis::Analysis;
pub use bitboard::{Bitboard, BitboardIterator};
pub use board::Board;
pub use move_generator::{MoveGenerator, MoveVec};
pub use moves::Move;
pub use perft::perft;
pub use position::{ParseError, Position};
pub use types::{Cell, Player, TableIndex, PLAYERS};

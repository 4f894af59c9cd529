// Copyright 2017-2019 Sean Gillespie.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Definitions of the `Bitboard` type, which is conceptually a set of
//! cells on an Isolation board. Bitboards track the blocked cells of a
//! position and the destinations a knight can reach from a cell.
//!
//! A bitboard is a single 128-bit integer and it behaves like a set, using
//! bitwise operations for the normal set operations (union, intersection,
//! set difference, etc.). Bits are addressed by board index (see
//! `Board::index`), so a bitboard is only meaningful together with the board
//! that produced it.
use std::default::Default;
use std::fmt;
use std::iter::Iterator;
use std::ops;

/// The largest number of cells a board may have.
pub const MAX_CELLS: usize = 128;

#[derive(Copy, Clone, PartialEq, Eq, Hash)]
pub struct Bitboard {
    bits: u128,
}

impl Default for Bitboard {
    fn default() -> Bitboard {
        Bitboard::none()
    }
}

impl Bitboard {
    /// Constructs a new bitboard from the given bits.
    pub const fn from_bits(bits: u128) -> Bitboard {
        Bitboard { bits }
    }

    /// Constructs a new bitboard with the lowest `count` bits set.
    pub fn first_n(count: usize) -> Bitboard {
        debug_assert!(count <= MAX_CELLS);
        if count >= MAX_CELLS {
            Bitboard::from_bits(u128::max_value())
        } else {
            Bitboard::from_bits((1u128 << count) - 1)
        }
    }

    /// Constructs a new bitboard with all bits zeroed, representing
    /// the empty set.
    pub const fn none() -> Bitboard {
        Bitboard::from_bits(0)
    }

    /// Tests whether or not an index is a member of this bitboard.
    pub const fn test(self, index: usize) -> bool {
        (self.bits & (1u128 << index)) != 0
    }

    /// Sets an index to be a member of this bitboard.
    pub fn set(&mut self, index: usize) {
        self.bits |= 1u128 << index;
    }

    /// Removes an index from this bitboard.
    pub fn unset(&mut self, index: usize) {
        self.bits &= !(1u128 << index);
    }

    /// Takes the bitwise and of two bitboards producing the set intersection
    /// of their contents.
    pub const fn and(self, other: Bitboard) -> Bitboard {
        Bitboard::from_bits(self.bits & other.bits)
    }

    /// Takes the bitwise or of two bitboards producing the set union
    /// of their contents.
    pub const fn or(self, other: Bitboard) -> Bitboard {
        Bitboard::from_bits(self.bits | other.bits)
    }

    /// Produces the members of this bitboard that are not members of
    /// `other`.
    pub const fn without(self, other: Bitboard) -> Bitboard {
        Bitboard::from_bits(self.bits & !other.bits)
    }

    /// Produces an iterator over the indices contained in this bitboard.
    pub fn iter(self) -> BitboardIterator {
        BitboardIterator::new(self.bits)
    }

    pub const fn bits(self) -> u128 {
        self.bits
    }

    /// Retrieves the number of cells contained in the set represented
    /// by this bitboard.
    pub const fn count(self) -> u32 {
        self.bits.count_ones()
    }

    /// Retrieves whether or not the set represented by this bitboard is
    /// the empty set.
    pub const fn empty(self) -> bool {
        self.bits == 0
    }

    pub fn first(self) -> Option<usize> {
        self.into_iter().next()
    }
}

impl fmt::Debug for Bitboard {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_tuple("Bitboard").field(&self.bits).finish()
    }
}

impl ops::BitAnd for Bitboard {
    type Output = Bitboard;

    fn bitand(self, rhs: Bitboard) -> Bitboard {
        self.and(rhs)
    }
}

impl ops::BitAndAssign for Bitboard {
    fn bitand_assign(&mut self, rhs: Bitboard) {
        *self = self.and(rhs);
    }
}

impl ops::BitOr for Bitboard {
    type Output = Bitboard;

    fn bitor(self, rhs: Bitboard) -> Bitboard {
        self.or(rhs)
    }
}

impl ops::BitOrAssign for Bitboard {
    fn bitor_assign(&mut self, rhs: Bitboard) {
        *self = self.or(rhs);
    }
}

/// BitboardIterator is an iterator over indices that are set in a
/// given bitboard, lowest index first.
pub struct BitboardIterator {
    bits: u128,
}

impl BitboardIterator {
    fn new(bits: u128) -> BitboardIterator {
        BitboardIterator { bits }
    }
}

impl Iterator for BitboardIterator {
    type Item = usize;

    fn next(&mut self) -> Option<usize> {
        if self.bits == 0 {
            return None;
        }

        let next = self.bits.trailing_zeros();
        self.bits &= self.bits - 1;
        Some(next as usize)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let count = self.bits.count_ones() as usize;
        (count, Some(count))
    }
}

impl IntoIterator for Bitboard {
    type Item = usize;
    type IntoIter = BitboardIterator;

    fn into_iter(self) -> BitboardIterator {
        self.iter()
    }
}

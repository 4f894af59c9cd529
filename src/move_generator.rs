// Copyright 2017-2019 Sean Gillespie.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.
use arrayvec::ArrayVec;

use crate::moves::Move;
use crate::position::Position;

/// A move list large enough to hold every cell of the largest board, which
/// bounds the number of placement moves.
pub type MoveVec = ArrayVec<[Move; 128]>;

/// Generates the legal moves of the player to move. Moves are produced in
/// board index order (row by row from `a1`), which is the order the search
/// visits them in.
#[derive(Default)]
pub struct MoveGenerator;

impl MoveGenerator {
    pub fn new() -> MoveGenerator {
        MoveGenerator
    }

    pub fn generate_moves(&self, pos: &Position, moves: &mut MoveVec) {
        let board = pos.board();
        let side = pos.side_to_move();
        for idx in pos.liberties(pos.location(side)) {
            moves.push(Move::new(board.cell(idx)));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Board;

    #[test]
    fn placement_moves_cover_the_board() {
        let pos = Position::new(Board::new(4, 3).unwrap());
        let mut moves = MoveVec::default();
        MoveGenerator::new().generate_moves(&pos, &mut moves);
        assert_eq!(12, moves.len());
        assert_eq!("a1", moves[0].to_string());
        assert_eq!("d3", moves[11].to_string());
    }

    #[test]
    fn knight_moves_after_placement() {
        let pos = Position::from_moves(Board::standard(), &["a1", "k9"]).unwrap();
        let mut moves = MoveVec::default();
        MoveGenerator::new().generate_moves(&pos, &mut moves);
        let names: Vec<String> = moves.iter().map(|m| m.to_string()).collect();
        assert_eq!(vec!["c2", "b3"], names);
    }
}

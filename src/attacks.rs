// Copyright 2017-2019 Sean Gillespie.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.
use crate::bitboard::Bitboard;
use crate::board::Board;
use crate::types::Cell;

/// The eight (dx, dy) jumps of a knight, in the order destinations are
/// generated.
const KNIGHT_OFFSETS: [(i32, i32); 8] = [
    (-2, -1),
    (-2, 1),
    (-1, -2),
    (-1, 2),
    (1, -2),
    (1, 2),
    (2, -1),
    (2, 1),
];

struct KnightTable {
    board: Board,
    table: Vec<Bitboard>,
}

impl KnightTable {
    pub fn new(board: Board) -> KnightTable {
        let table = board
            .cells()
            .map(|cell| compute_knight_moves(board, cell))
            .collect();
        KnightTable { board, table }
    }

    pub fn moves(&self, cell: Cell) -> Bitboard {
        self.table[self.board.index(cell)]
    }
}

lazy_static! {
    static ref STANDARD_KNIGHT_TABLE: KnightTable = KnightTable::new(Board::standard());
}

fn compute_knight_moves(board: Board, cell: Cell) -> Bitboard {
    let mut moves = Bitboard::none();
    for &(dx, dy) in KNIGHT_OFFSETS.iter() {
        if let Some(dest) = cell.offset(dx, dy) {
            if board.contains(dest) {
                moves.set(board.index(dest));
            }
        }
    }

    moves
}

/// Every cell a knight standing on `cell` could jump to, ignoring whether
/// the destinations are still open. Lookups on the standard board are served
/// from a precomputed table.
pub fn knight_moves(board: Board, cell: Cell) -> Bitboard {
    if board == Board::standard() {
        STANDARD_KNIGHT_TABLE.moves(cell)
    } else {
        compute_knight_moves(board, cell)
    }
}

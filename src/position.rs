// Copyright 2017-2019 Sean Gillespie.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.
use std::error::Error;
use std::fmt::{self, Write};

use crate::attacks;
use crate::bitboard::Bitboard;
use crate::board::Board;
use crate::move_generator::{MoveGenerator, MoveVec};
use crate::moves::Move;
use crate::types::{Cell, Player, TableIndex, PLAYERS};

/// Possible errors that can arise when parsing boards, cells, moves and
/// positions, or when setting up a `Position` by hand.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ParseError {
    InvalidCell(String),
    InvalidBoardNotation(String),
    InvalidBoardSize(u32, u32),
    CellOffBoard(Cell),
    CellBlocked(Cell),
    UnexpectedChar(char),
    UnexpectedEnd,
    RaggedRows,
    DuplicatePlayer(Player),
    PlayerNotPlaced(Player),
    InvalidPlyCount(String),
    IllegalMove(Move),
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ParseError::InvalidCell(s) => write!(f, "invalid cell `{}`", s),
            ParseError::InvalidBoardNotation(s) => write!(f, "invalid board size `{}`", s),
            ParseError::InvalidBoardSize(w, h) => write!(
                f,
                "unsupported board size {}x{} (at most 26 columns and 128 cells)",
                w, h
            ),
            ParseError::CellOffBoard(cell) => write!(f, "cell {} is not on the board", cell),
            ParseError::CellBlocked(cell) => write!(f, "cell {} is already blocked", cell),
            ParseError::UnexpectedChar(c) => write!(f, "unexpected character `{}`", c),
            ParseError::UnexpectedEnd => write!(f, "unexpected end of input"),
            ParseError::RaggedRows => write!(f, "rows have different lengths"),
            ParseError::DuplicatePlayer(p) => write!(f, "player {} appears more than once", p),
            ParseError::PlayerNotPlaced(p) => write!(f, "player {} has not been placed", p),
            ParseError::InvalidPlyCount(s) => write!(f, "invalid ply count `{}`", s),
            ParseError::IllegalMove(mov) => write!(f, "illegal move {}", mov),
        }
    }
}

impl Error for ParseError {}

/// A knight's Isolation position. Each player owns a knight; on their turn a
/// player jumps their knight onto a cell that has never been occupied, and
/// that cell is blocked for the rest of the game. A player's first move
/// places their knight on any open cell. The player to move who has nowhere
/// to go loses.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Position {
    board: Board,
    blocked: Bitboard,
    locations: [Option<Cell>; 2],
    ply_count: u32,
}

//
// Board state getters
//

impl Position {
    /// An empty position on the given board: nothing blocked and neither
    /// knight placed.
    pub fn new(board: Board) -> Position {
        Position {
            board,
            blocked: Bitboard::none(),
            locations: [None, None],
            ply_count: 0,
        }
    }

    pub fn from_start_position() -> Position {
        Position::new(Board::standard())
    }

    pub fn board(&self) -> Board {
        self.board
    }

    pub fn ply_count(&self) -> u32 {
        self.ply_count
    }

    pub fn side_to_move(&self) -> Player {
        Player::for_ply(self.ply_count)
    }

    pub fn location(&self, player: Player) -> Option<Cell> {
        self.locations[player.as_index()]
    }

    pub fn blocked(&self) -> Bitboard {
        self.blocked
    }

    pub fn open_cells(&self) -> Bitboard {
        self.board.all().without(self.blocked)
    }

    pub fn is_open(&self, cell: Cell) -> bool {
        self.board.contains(cell) && !self.blocked.test(self.board.index(cell))
    }

    /// The cells a knight standing at `location` could move to. A knight that
    /// has not been placed yet may go to any open cell.
    pub fn liberties(&self, location: Option<Cell>) -> Bitboard {
        match location {
            Some(cell) => attacks::knight_moves(self.board, cell).without(self.blocked),
            None => self.open_cells(),
        }
    }

    /// Number of cells the given player could move to from where they stand,
    /// regardless of whose turn it is.
    pub fn mobility(&self, player: Player) -> u32 {
        self.liberties(self.location(player)).count()
    }
}

//
// Move application and terminal states
//

impl Position {
    pub fn legal_moves(&self) -> MoveVec {
        let mut moves = MoveVec::default();
        MoveGenerator::new().generate_moves(self, &mut moves);
        moves
    }

    pub fn is_legal(&self, mov: Move) -> bool {
        let dest = mov.destination();
        self.board.contains(dest)
            && self
                .liberties(self.location(self.side_to_move()))
                .test(self.board.index(dest))
    }

    /// Plays a move for the side to move. The move must be legal.
    pub fn apply_move(&mut self, mov: Move) {
        debug_assert!(self.is_legal(mov), "illegal move {} in\n{}", mov, self);
        let side = self.side_to_move();
        let dest = mov.destination();
        self.blocked.set(self.board.index(dest));
        self.locations[side.as_index()] = Some(dest);
        self.ply_count += 1;
    }

    /// The position reached by playing `mov`. The receiver is left untouched.
    pub fn successor(&self, mov: Move) -> Position {
        let mut next = self.clone();
        next.apply_move(mov);
        next
    }

    /// A position is over once the side to move has no legal moves.
    pub fn is_terminal(&self) -> bool {
        self.liberties(self.location(self.side_to_move())).empty()
    }

    pub fn winner(&self) -> Option<Player> {
        if self.is_terminal() {
            Some(self.side_to_move().toggle())
        } else {
            None
        }
    }

    /// Canonical utility of a finished game for `player`: +1 for a win and
    /// -1 for a loss. `None` while the game is still running.
    pub fn utility(&self, player: Player) -> Option<i32> {
        self.winner()
            .map(|winner| if winner == player { 1 } else { -1 })
    }
}

//
// Manual setup
//

impl Position {
    /// Marks a cell as blocked without moving anyone.
    pub fn block(&mut self, cell: Cell) -> Result<(), ParseError> {
        if !self.board.contains(cell) {
            return Err(ParseError::CellOffBoard(cell));
        }

        if self.blocked.test(self.board.index(cell)) {
            return Err(ParseError::CellBlocked(cell));
        }

        self.blocked.set(self.board.index(cell));
        Ok(())
    }

    /// Puts a player's knight on an open cell, blocking it. The player's
    /// previous cell, if any, stays blocked.
    pub fn place(&mut self, player: Player, cell: Cell) -> Result<(), ParseError> {
        self.block(cell)?;
        self.locations[player.as_index()] = Some(cell);
        Ok(())
    }

    pub fn set_ply_count(&mut self, ply_count: u32) {
        self.ply_count = ply_count;
    }
}

//
// Notation
//

impl Position {
    /// Replays a sequence of moves, written in cell notation, from the empty
    /// position on the given board.
    pub fn from_moves<S: AsRef<str>>(board: Board, moves: &[S]) -> Result<Position, ParseError> {
        let mut pos = Position::new(board);
        for mov in moves {
            let mov: Move = mov.as_ref().parse()?;
            if !pos.is_legal(mov) {
                return Err(ParseError::IllegalMove(mov));
            }

            pos.apply_move(mov);
        }

        Ok(pos)
    }

    /// Parses a position from its notation: the rows of the board from the
    /// top rank down, separated by `/`, followed by the ply count. Within a
    /// row `.` is an open cell, `x` a blocked cell and `1` or `2` the cell a
    /// player's knight stands on.
    ///
    /// ```
    /// use isolate::Position;
    ///
    /// let pos = Position::from_notation("..2/x../1.. 2").unwrap();
    /// assert_eq!(3, pos.board().width());
    /// assert_eq!(2, pos.ply_count());
    /// ```
    pub fn from_notation<S: AsRef<str>>(notation: S) -> Result<Position, ParseError> {
        let mut fields = notation.as_ref().split_whitespace();
        let grid = fields.next().ok_or(ParseError::UnexpectedEnd)?;
        let ply = fields.next().ok_or(ParseError::UnexpectedEnd)?;
        if let Some(extra) = fields.next() {
            let c = extra.chars().next().unwrap_or(' ');
            return Err(ParseError::UnexpectedChar(c));
        }

        let rows: Vec<&str> = grid.split('/').collect();
        let width = rows[0].chars().count();
        if rows.iter().any(|row| row.chars().count() != width) {
            return Err(ParseError::RaggedRows);
        }

        let board = Board::new(width as u32, rows.len() as u32)?;
        let mut pos = Position::new(board);
        for (row_idx, row) in rows.iter().enumerate() {
            let y = (rows.len() - 1 - row_idx) as u8;
            for (x, c) in row.chars().enumerate() {
                let cell = Cell::new(x as u8, y);
                let player = match c {
                    '.' => continue,
                    'x' => {
                        pos.block(cell)?;
                        continue;
                    }
                    '1' => Player::One,
                    '2' => Player::Two,
                    c => return Err(ParseError::UnexpectedChar(c)),
                };

                if pos.location(player).is_some() {
                    return Err(ParseError::DuplicatePlayer(player));
                }

                pos.place(player, cell)?;
            }
        }

        pos.ply_count = ply
            .parse()
            .map_err(|_| ParseError::InvalidPlyCount(ply.to_owned()))?;
        for &player in PLAYERS.iter() {
            // Player one moves first, so has made a move once a single ply
            // has been played; player two needs two.
            let has_moved = pos.ply_count > player.as_index() as u32;
            if has_moved && pos.location(player).is_none() {
                return Err(ParseError::PlayerNotPlaced(player));
            }
        }

        Ok(pos)
    }

    pub fn as_notation(&self) -> String {
        let mut buf = String::new();
        for y in (0..self.board.height()).rev() {
            for x in 0..self.board.width() {
                buf.push(self.cell_char(Cell::new(x as u8, y as u8)));
            }

            if y != 0 {
                buf.push('/');
            }
        }

        write!(&mut buf, " {}", self.ply_count).unwrap();
        buf
    }

    fn cell_char(&self, cell: Cell) -> char {
        if self.location(Player::One) == Some(cell) {
            '1'
        } else if self.location(Player::Two) == Some(cell) {
            '2'
        } else if self.blocked.test(self.board.index(cell)) {
            'x'
        } else {
            '.'
        }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for y in (0..self.board.height()).rev() {
            for x in 0..self.board.width() {
                write!(f, " {} ", self.cell_char(Cell::new(x as u8, y as u8)))?;
            }

            writeln!(f, "| {}", y + 1)?;
        }

        for _ in 0..self.board.width() {
            write!(f, "---")?;
        }

        writeln!(f)?;
        for x in 0..self.board.width() {
            write!(f, " {} ", (b'a' + x as u8) as char)?;
        }

        writeln!(f)?;
        writeln!(f, "ply {}, {} to move", self.ply_count, self.side_to_move())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_position() {
        let pos = Position::from_start_position();
        assert_eq!(0, pos.ply_count());
        assert_eq!(Player::One, pos.side_to_move());
        assert_eq!(None, pos.location(Player::One));
        assert_eq!(99, pos.legal_moves().len());
        assert!(!pos.is_terminal());
        assert_eq!(None, pos.utility(Player::One));
    }

    #[test]
    fn successor_leaves_original_untouched() {
        let pos = Position::from_start_position();
        let mov: Move = "f5".parse().unwrap();
        let next = pos.successor(mov);

        assert_eq!(Position::from_start_position(), pos);
        assert_eq!(1, next.ply_count());
        assert_eq!(Player::Two, next.side_to_move());
        assert_eq!(Some(mov.destination()), next.location(Player::One));
        assert!(!next.is_legal(mov));
        assert_eq!(98, next.legal_moves().len());
    }

    #[test]
    fn knights_jump_after_placement() {
        let pos = Position::from_moves(Board::standard(), &["a1", "k9"]).unwrap();
        assert_eq!(Player::One, pos.side_to_move());
        assert!(pos.is_legal("b3".parse().unwrap()));
        assert!(!pos.is_legal("b2".parse().unwrap()));
        assert_eq!(2, pos.mobility(Player::One));
        assert_eq!(2, pos.mobility(Player::Two));
    }

    #[test]
    fn visited_cells_stay_blocked() {
        let pos = Position::from_moves(Board::standard(), &["a1", "k9", "c2", "i8"]).unwrap();
        let a1 = "a1".parse().unwrap();
        assert!(!pos.is_open(a1));
        assert!(pos.blocked().test(pos.board().index(a1)));
        assert_eq!(4, pos.blocked().count());
    }

    #[test]
    fn from_moves_rejects_illegal_move() {
        let err = Position::from_moves(Board::standard(), &["a1", "k9", "b2"]).unwrap_err();
        assert_eq!(ParseError::IllegalMove("b2".parse().unwrap()), err);

        let err = Position::from_moves(Board::standard(), &["a1", "a1"]).unwrap_err();
        assert_eq!(ParseError::IllegalMove("a1".parse().unwrap()), err);
    }

    #[test]
    fn side_to_move_without_moves_loses() {
        // Player one sits in the corner of a 3x3 board with both jumps blocked.
        let pos = Position::from_notation(".x2/..x/1.. 2").unwrap();
        assert!(pos.is_terminal());
        assert_eq!(Some(Player::Two), pos.winner());
        assert_eq!(Some(-1), pos.utility(Player::One));
        assert_eq!(Some(1), pos.utility(Player::Two));
    }

    #[test]
    fn notation_round_trip() {
        let pos = Position::from_moves(Board::new(5, 4).unwrap(), &["a1", "e4", "c2"]).unwrap();
        let notation = pos.as_notation();
        assert_eq!("....2/...../..1../x.... 3", notation);
        assert_eq!(pos, Position::from_notation(&notation).unwrap());
    }

    #[test]
    fn notation_errors() {
        assert_eq!(
            Err(ParseError::RaggedRows),
            Position::from_notation("..../... 0")
        );
        assert_eq!(
            Err(ParseError::UnexpectedChar('q')),
            Position::from_notation("..q/... 0")
        );
        assert_eq!(
            Err(ParseError::DuplicatePlayer(Player::One)),
            Position::from_notation("1.1/... 1")
        );
        assert_eq!(
            Err(ParseError::PlayerNotPlaced(Player::Two)),
            Position::from_notation("1../... 2")
        );
        assert_eq!(
            Err(ParseError::UnexpectedEnd),
            Position::from_notation("1../...")
        );
        assert_eq!(
            Err(ParseError::InvalidPlyCount("two".to_owned())),
            Position::from_notation("1../..2 two")
        );
    }

    #[test]
    fn manual_setup() {
        let mut pos = Position::new(Board::new(5, 5).unwrap());
        let c3 = Cell::new(2, 2);
        pos.place(Player::Two, c3).unwrap();
        assert_eq!(Err(ParseError::CellBlocked(c3)), pos.block(c3));
        assert_eq!(
            Err(ParseError::CellOffBoard(Cell::new(5, 0))),
            pos.block(Cell::new(5, 0))
        );
        assert_eq!(8, pos.mobility(Player::Two));
    }
}

// Copyright 2017-2019 Sean Gillespie.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.
use rayon::prelude::*;

use crate::move_generator::{MoveGenerator, MoveVec};
use crate::position::Position;

/// Counts the leaves of the game tree rooted at `pos`, `depth` plies deep.
/// Games that end early contribute nothing below the point they ended.
pub fn perft(pos: &Position, depth: u32) -> u64 {
    if depth == 0 {
        return 1;
    }

    let mut moves = MoveVec::default();
    let movegen = MoveGenerator::new();
    movegen.generate_moves(pos, &mut moves);
    if depth == 1 {
        return moves.len() as u64;
    }

    moves
        .par_iter()
        .map(|&mov| perft(&pos.successor(mov), depth - 1))
        .sum()
}

#[cfg(test)]
mod tests {
    use super::perft;
    use crate::position::Position;

    fn perft_test(notation: &'static str, depth: u32, count: u64) {
        let pos = Position::from_notation(notation).unwrap();
        assert_eq!(count, perft(&pos, depth));
    }

    macro_rules! perft_tests {
        () => {};
        ($name:ident ($depth:expr): $pos:expr => $count:expr; $($tail:tt)*) => {
            #[test]
            fn $name() {
                perft_test($pos, $depth, $count)
            }

            perft_tests!($($tail)*);
        };
    }

    perft_tests! {
        empty_3x3_1 (1): ".../.../... 0" => 9;
        empty_3x3_2 (2): ".../.../... 0" => 72;
        empty_3x3_3 (3): ".../.../... 0" => 112;
        empty_3x3_4 (4): ".../.../... 0" => 160;

        empty_4x4_2 (2): "..../..../..../.... 0" => 240;
        empty_4x4_3 (3): "..../..../..../.... 0" => 672;

        empty_5x5_1 (1): "...../...../...../...../..... 0" => 25;
        empty_5x5_2 (2): "...../...../...../...../..... 0" => 600;
        empty_5x5_3 (3): "...../...../...../...../..... 0" => 2208;
        empty_5x5_4 (4): "...../...../...../...../..... 0" => 7712;

        corners_1 (1): "..........2/.........../.........../.........../.........../.........../.........../.........../1.......... 2" => 2;
        corners_2 (2): "..........2/.........../.........../.........../.........../.........../.........../.........../1.......... 2" => 4;
        corners_3 (3): "..........2/.........../.........../.........../.........../.........../.........../.........../1.......... 2" => 20;
        corners_4 (4): "..........2/.........../.........../.........../.........../.........../.........../.........../1.......... 2" => 100;

        finished_1 (1): ".x2/..x/1.. 2" => 0;
    }

    #[test]
    fn depth_zero_is_one_leaf() {
        let pos = Position::from_notation(".x2/..x/1.. 2").unwrap();
        assert_eq!(1, perft(&pos, 0));
    }
}

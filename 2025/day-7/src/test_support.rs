//! Board fixtures and slow reference simulations shared by the unit tests.

use std::collections::HashSet;

use proptest::prelude::*;

use crate::board::{Board, Cell, Position};

pub const EXAMPLE: &str = include_str!("../input1.txt");

pub const SINGLE_SPLITTER: &str = ".S.
.^.
...";

pub const CASCADE: &str = "..S..
..^..
.^.^.
.....";

pub const UNREACHABLE: &str = "..S..
.....
^....";

pub const LEFT_EDGE: &str = "S.
^.";

pub const RIGHT_EDGE: &str = ".S
.^";

/// Two splitters side by side, each deflecting into the other.
pub const ADJACENT: &str = "S.
^^
..";

/// A triangle of `levels` splitter rows where every deflection lands on the
/// next row of splitters, so `levels` splits happen on every timeline.
pub fn galton(levels: usize) -> Board {
    let width = 2 * levels + 1;
    let mut rows = vec![vec![Cell::Empty; width]; 2 * levels + 1];
    rows[0][levels] = Cell::Start;
    for level in 0..levels {
        for step in 0..=level {
            rows[2 * level + 1][levels - level + 2 * step] = Cell::Splitter;
        }
    }
    Board::new(rows).expect("galton board is well formed")
}

/// Follows every beam without remembering anything, collecting every struck
/// splitter. Only terminates on boards without side by side splitters.
pub fn brute_force_struck(board: &Board) -> HashSet<Position> {
    fn beam(board: &Board, row: usize, col: isize, struck: &mut HashSet<Position>) {
        let Some(c) = board.column(col) else {
            return;
        };
        for r in row..board.height() {
            if board.get(r, c).is_splitter() {
                struck.insert((r, c));
                beam(board, r, col - 1, struck);
                beam(board, r, col + 1, struck);
                return;
            }
        }
    }

    let mut struck = HashSet::new();
    let (row, col) = board.start();
    beam(board, row, col as isize, &mut struck);
    struck
}

/// Plain recursive timeline count with every subproblem recomputed.
pub fn naive_timelines(board: &Board, row: usize, col: isize) -> u128 {
    let Some(c) = board.column(col) else {
        return 1;
    };
    for r in row..board.height() {
        if board.get(r, c).is_splitter() {
            return naive_timelines(board, r, col - 1) + naive_timelines(board, r, col + 1);
        }
    }
    1
}

/// Random small boards with the start anywhere and no two splitters next to
/// each other in a row.
pub fn arb_board() -> impl Strategy<Value = Board> {
    (1usize..10, 1usize..12)
        .prop_flat_map(|(width, height)| {
            (
                0..height,
                0..width,
                prop::collection::vec(
                    prop::collection::vec(prop::bool::weighted(0.35), width),
                    height,
                ),
            )
        })
        .prop_map(|(start_row, start_col, layout)| {
            let rows = layout
                .into_iter()
                .enumerate()
                .map(|(r, row)| {
                    let mut previous = false;
                    row.into_iter()
                        .enumerate()
                        .map(|(c, splitter)| {
                            if (r, c) == (start_row, start_col) {
                                previous = false;
                                return Cell::Start;
                            }
                            let placed = splitter && !previous;
                            previous = placed;
                            if placed {
                                Cell::Splitter
                            } else {
                                Cell::Empty
                            }
                        })
                        .collect()
                })
                .collect();
            Board::new(rows).expect("generated board is well formed")
        })
}

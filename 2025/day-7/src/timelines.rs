use bitvec::prelude::*;
use tracing::debug;

use crate::board::{Board, Position};
use crate::error::TraversalError;
use crate::limits::TraversalLimits;

/// Remaining timeline count for a beam that starts falling at a position.
///
/// The count only depends on where the beam is, never on how it got there,
/// so an entry is valid for the whole run once written.
#[derive(Clone, Debug)]
pub struct Memo {
    width: usize,
    counts: Vec<Option<u128>>,
}

impl Memo {
    fn new(board: &Board) -> Self {
        Self {
            width: board.width(),
            counts: vec![None; board.len()],
        }
    }

    pub fn get(&self, (row, col): Position) -> Option<u128> {
        if col >= self.width {
            return None;
        }
        row.checked_mul(self.width)
            .and_then(|idx| idx.checked_add(col))
            .and_then(|idx| self.counts.get(idx).copied().flatten())
    }

    fn insert(&mut self, (row, col): Position, count: u128) {
        self.counts[row * self.width + col] = Some(count);
    }

    pub fn len(&self) -> usize {
        self.counts.iter().flatten().count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

enum Frame {
    /// Count the timelines of a beam falling from `row` in `col`.
    Resolve { row: usize, col: isize },
    /// Both deflections of `splitter` have left their counts on the value stack.
    Join {
        splitter: Position,
        origin: Position,
    },
}

/// Outcome of letting a beam fall down its column.
enum Fall {
    Known(u128),
    Split(Position),
}

/// Counts the distinct paths from the start to the bottom edge.
///
/// Evaluated with an explicit frame stack instead of recursion: a `Resolve`
/// frame either settles to a count right away or schedules both deflections
/// followed by a `Join` that adds them up.
pub struct PathCounter<'b> {
    board: &'b Board,
    memo: Memo,
    // Splitters whose `Join` is still pending
    in_flight: BitVec,
    limits: TraversalLimits,
}

impl<'b> PathCounter<'b> {
    pub fn new(board: &'b Board) -> Self {
        Self::with_limits(board, TraversalLimits::default())
    }

    pub fn with_limits(board: &'b Board, limits: TraversalLimits) -> Self {
        Self {
            board,
            memo: Memo::new(board),
            in_flight: BitVec::repeat(false, board.len()),
            limits,
        }
    }

    /// Number of timelines for a beam entering at `start`.
    #[tracing::instrument(skip(self))]
    pub fn count(self, start: Position) -> Result<u128, TraversalError> {
        self.count_with_memo(start).map(|(count, _)| count)
    }

    /// Like [`PathCounter::count`], also handing back the memo table.
    pub fn count_with_memo(mut self, start: Position) -> Result<(u128, Memo), TraversalError> {
        let (row, col) = start;
        self.board.cell_at(row as isize, col as isize)?;

        let mut frames = vec![Frame::Resolve {
            row,
            col: col as isize,
        }];
        let mut values: Vec<u128> = Vec::new();

        while let Some(frame) = frames.pop() {
            match frame {
                Frame::Resolve { row, col } => {
                    // Falling off a side edge is a single finished timeline
                    let Some(col) = self.board.column(col) else {
                        values.push(1);
                        continue;
                    };

                    match self.fall(row, col)? {
                        Fall::Known(count) => values.push(count),
                        Fall::Split(splitter) => {
                            let (split_row, split_col) = splitter;
                            self.in_flight
                                .set(self.board.index(split_row, split_col), true);

                            let split_col = split_col as isize;
                            frames.push(Frame::Join {
                                splitter,
                                origin: (row, col),
                            });
                            frames.push(Frame::Resolve {
                                row: split_row,
                                col: split_col + 1,
                            });
                            frames.push(Frame::Resolve {
                                row: split_row,
                                col: split_col - 1,
                            });
                            self.limits.check(frames.len())?;
                        }
                    }
                }
                Frame::Join { splitter, origin } => {
                    let (Some(right), Some(left)) = (values.pop(), values.pop()) else {
                        unreachable!("join scheduled without both deflections");
                    };
                    let (split_row, split_col) = splitter;
                    let total =
                        left.checked_add(right)
                            .ok_or(TraversalError::TimelineOverflow {
                                row: split_row,
                                col: split_col,
                            })?;

                    self.memo.insert(splitter, total);
                    self.memo.insert(origin, total);
                    self.in_flight
                        .set(self.board.index(split_row, split_col), false);
                    values.push(total);
                }
            }
        }

        let Some(count) = values.pop() else {
            unreachable!("start probe left no count");
        };
        debug!(count = %count, memoized = self.memo.len(), "timeline count finished");
        Ok((count, self.memo))
    }

    /// Scans down from `(row, col)` until a known count, a splitter or the bottom edge.
    fn fall(&mut self, row: usize, col: usize) -> Result<Fall, TraversalError> {
        for scan_row in row..self.board.height() {
            if let Some(count) = self.memo.get((scan_row, col)) {
                if scan_row != row {
                    self.memo.insert((row, col), count);
                }
                return Ok(Fall::Known(count));
            }
            if self.board.get(scan_row, col).is_splitter() {
                if self.in_flight[self.board.index(scan_row, col)] {
                    return Err(TraversalError::DeflectionCycle { row: scan_row, col });
                }
                return Ok(Fall::Split((scan_row, col)));
            }
        }

        self.memo.insert((row, col), 1);
        Ok(Fall::Known(1))
    }
}

/// Number of distinct timelines for a beam entering at `start`.
#[tracing::instrument(skip(board))]
pub fn timeline_count(board: &Board, start: Position) -> Result<u128, TraversalError> {
    PathCounter::new(board).count(start)
}

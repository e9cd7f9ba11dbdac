use bitvec::prelude::*;
use tracing::{debug, trace};

use crate::board::{Board, Position};
use crate::error::TraversalError;
use crate::limits::TraversalLimits;

/// Which splitters have been struck by at least one beam, one bit per cell.
#[derive(Clone, Debug)]
pub struct TriggerState {
    width: usize,
    triggered: BitVec,
}

impl TriggerState {
    fn new(board: &Board) -> Self {
        Self {
            width: board.width(),
            triggered: BitVec::repeat(false, board.len()),
        }
    }

    pub fn is_triggered(&self, (row, col): Position) -> bool {
        col < self.width
            && row
                .checked_mul(self.width)
                .and_then(|idx| idx.checked_add(col))
                .and_then(|idx| self.triggered.get(idx))
                .is_some_and(|bit| *bit)
    }

    /// Number of distinct splitters that were struck.
    pub fn count(&self) -> usize {
        self.triggered.count_ones()
    }

    pub fn positions(&self) -> impl Iterator<Item = Position> + '_ {
        let width = self.width;
        self.triggered.iter_ones().map(move |idx| (idx / width, idx % width))
    }
}

/// Marks every splitter reachable from the start.
///
/// A beam falls down its column until it leaves the board, reaches a splitter
/// that was already triggered (someone else traced past it), or strikes a new
/// splitter. A new splitter is marked and emits two beams that resume falling
/// from the splitter's own row, one column to each side.
pub struct ActivationTracer<'b> {
    board: &'b Board,
    state: TriggerState,
    limits: TraversalLimits,
}

impl<'b> ActivationTracer<'b> {
    pub fn new(board: &'b Board) -> Self {
        Self::with_limits(board, TraversalLimits::default())
    }

    pub fn with_limits(board: &'b Board, limits: TraversalLimits) -> Self {
        Self {
            board,
            state: TriggerState::new(board),
            limits,
        }
    }

    /// Runs the trace from `start`. Consumes the tracer, so the marks of one run
    /// never leak into another.
    #[tracing::instrument(skip(self))]
    pub fn trace(self, start: Position) -> Result<TriggerState, TraversalError> {
        let Self {
            board,
            mut state,
            limits,
        } = self;
        let (row, col) = start;
        board.cell_at(row as isize, col as isize)?;

        let mut pending: Vec<(usize, isize)> = vec![(row, col as isize)];

        while let Some((row, col)) = pending.pop() {
            let Some(col) = board.column(col) else {
                continue;
            };

            for scan_row in row..board.height() {
                let idx = board.index(scan_row, col);
                if state.triggered[idx] {
                    break;
                }
                if board.get(scan_row, col).is_splitter() {
                    state.triggered.set(idx, true);
                    trace!(row = scan_row, col, "splitter triggered");

                    // Right is pushed first so the left beam is traced first
                    let col = col as isize;
                    pending.push((scan_row, col + 1));
                    pending.push((scan_row, col - 1));
                    limits.check(pending.len())?;
                    break;
                }
            }
        }

        debug!(triggered = state.count(), "activation trace finished");
        Ok(state)
    }
}

/// Number of distinct splitters struck by a beam entering at `start`.
#[tracing::instrument(skip(board))]
pub fn triggered_splitter_count(board: &Board, start: Position) -> Result<usize, TraversalError> {
    Ok(ActivationTracer::new(board).trace(start)?.count())
}

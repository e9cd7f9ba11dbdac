//! Error taxonomy for board construction and the two traversals.

use miette::{Diagnostic, SourceSpan};
use thiserror::Error;

/// Problems with the board itself, detected before any beam is traced.
#[derive(Debug, Error, Diagnostic)]
pub enum BoardError {
    #[error("row {row} has {found} cells, expected {expected}")]
    #[diagnostic(
        code(manifold::board::ragged_row),
        help("every row of the manifold must have the same width")
    )]
    RaggedRow {
        row: usize,
        expected: usize,
        found: usize,
    },

    #[error("no start position 'S' found in grid")]
    #[diagnostic(code(manifold::board::missing_start))]
    MissingStart,

    #[error("found {count} start positions, expected exactly one")]
    #[diagnostic(
        code(manifold::board::multiple_starts),
        help("the beam enters the manifold at a single 'S' cell")
    )]
    MultipleStarts { count: usize },

    #[error("parse failed: {reason}")]
    #[diagnostic(
        code(manifold::board::parse),
        help("only '.', '^' and 'S' are valid manifold cells")
    )]
    Parse {
        reason: String,
        #[source_code]
        input: String,
        #[label("here")]
        span: SourceSpan,
    },

    #[error("({row}, {col}) is outside the {height}x{width} board")]
    #[diagnostic(code(manifold::board::out_of_bounds))]
    OutOfBounds {
        row: isize,
        col: isize,
        height: usize,
        width: usize,
    },
}

impl BoardError {
    /// True for the conditions that make a board unusable as input.
    pub fn is_malformed(&self) -> bool {
        matches!(
            self,
            Self::RaggedRow { .. }
                | Self::MissingStart
                | Self::MultipleStarts { .. }
                | Self::Parse { .. }
        )
    }
}

/// Failures while tracing beams or counting timelines.
#[derive(Debug, Error, Diagnostic)]
pub enum TraversalError {
    #[error("{pending} pending probes exceed the limit of {limit}")]
    #[diagnostic(
        code(manifold::traversal::resource_exhausted),
        help("the board is too large for the configured traversal limits")
    )]
    ResourceExhausted { pending: usize, limit: usize },

    #[error("splitter at ({row}, {col}) deflects back into itself")]
    #[diagnostic(
        code(manifold::traversal::deflection_cycle),
        help("side by side splitters feed each other, so the timeline count is unbounded")
    )]
    DeflectionCycle { row: usize, col: usize },

    #[error("timeline count overflowed 128 bits at ({row}, {col})")]
    #[diagnostic(code(manifold::traversal::timeline_overflow))]
    TimelineOverflow { row: usize, col: usize },

    #[error(transparent)]
    #[diagnostic(transparent)]
    Board(#[from] BoardError),
}

impl TraversalError {
    /// Errors caused by the size of the board rather than its contents.
    ///
    /// `DeflectionCycle` is left out: side by side splitters have no finite
    /// timeline count on any board size, so it is a property of the layout.
    pub fn is_resource_exhaustion(&self) -> bool {
        matches!(
            self,
            Self::ResourceExhausted { .. } | Self::TimelineOverflow { .. }
        )
    }
}

pub mod activation;
pub mod analysis;
pub mod board;
pub mod error;
pub mod limits;
pub mod part1;
pub mod part2;
pub mod timelines;

pub use activation::{triggered_splitter_count, ActivationTracer, TriggerState};
pub use analysis::{analyze, analyze_with, Analysis};
pub use board::{Board, Cell, Position};
pub use error::{BoardError, TraversalError};
pub use limits::TraversalLimits;
pub use timelines::{timeline_count, Memo, PathCounter};

#[cfg(test)]
mod test_support;

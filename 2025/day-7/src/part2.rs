use miette::*;

use crate::board::Board;
use crate::timelines::timeline_count;

#[tracing::instrument]
pub fn process(input: &str) -> Result<String> {
    let board: Board = input.parse()?;
    // A single particle takes every path at once, so each one is its own timeline
    let timelines = timeline_count(&board, board.start())?;

    Ok(timelines.to_string())
}

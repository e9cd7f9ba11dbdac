use miette::*;

use crate::activation::triggered_splitter_count;
use crate::board::Board;

#[tracing::instrument]
pub fn process(input: &str) -> Result<String> {
    let board: Board = input.parse()?;
    let triggered = triggered_splitter_count(&board, board.start())?;

    Ok(triggered.to_string())
}

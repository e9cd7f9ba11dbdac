use std::time::Instant;

use miette::*;

use aoc2025_day_7::{analyze, Board};

fn main() -> Result<()> {
    tracing_subscriber::fmt::init();
    let input = include_str!("../../input1.txt");

    let started = Instant::now();
    let board: Board = input.parse()?;
    let analysis = analyze(&board)?;
    tracing::info!(elapsed = ?started.elapsed(), "manifold analysed");

    println!("Triggered splitters: {}", analysis.triggered_splitters);
    println!("Timelines: {}", analysis.timelines);
    Ok(())
}

use chumsky::prelude::*;
use itertools::Itertools;

use crate::error::BoardError;

/// A `(row, col)` coordinate on the board.
pub type Position = (usize, usize);

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Cell {
    Empty,
    Splitter,
    /// Where the beam enters. Behaves like empty space for the physics.
    Start,
}

impl Cell {
    pub fn is_splitter(self) -> bool {
        self == Cell::Splitter
    }
}

/// Immutable row-major grid of cells with a single entry point.
#[derive(Clone, Debug)]
pub struct Board {
    width: usize,
    height: usize,
    cells: Vec<Cell>,
    start: Position,
}

impl Board {
    /// Builds a board from parsed rows, rejecting ragged rows and anything
    /// other than exactly one start cell.
    pub fn new(rows: Vec<Vec<Cell>>) -> Result<Self, BoardError> {
        let height = rows.len();
        let width = rows.first().map(|r| r.len()).unwrap_or(0);

        if let Some((row, found)) = rows
            .iter()
            .map(Vec::len)
            .enumerate()
            .find(|&(_, len)| len != width)
        {
            return Err(BoardError::RaggedRow {
                row,
                expected: width,
                found,
            });
        }

        let cells: Vec<Cell> = rows.into_iter().flatten().collect();

        let starts = cells.iter().positions(|&c| c == Cell::Start).collect_vec();
        let start = match starts.as_slice() {
            [] => return Err(BoardError::MissingStart),
            [idx] => (idx / width, idx % width),
            _ => {
                return Err(BoardError::MultipleStarts {
                    count: starts.len(),
                })
            }
        };

        Ok(Self {
            width,
            height,
            cells,
            start,
        })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn start(&self) -> Position {
        self.start
    }

    pub fn splitter_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_splitter()).count()
    }

    /// Returns the cell at `(row, col)`, failing for any coordinate off the board.
    pub fn cell_at(&self, row: isize, col: isize) -> Result<Cell, BoardError> {
        match (self.row_index(row), self.column(col)) {
            (Some(r), Some(c)) => Ok(self.cells[r * self.width + c]),
            _ => Err(BoardError::OutOfBounds {
                row,
                col,
                height: self.height,
                width: self.width,
            }),
        }
    }

    /// Maps a signed column probe onto the board. `None` means the beam left
    /// through one of the side edges.
    #[inline]
    pub fn column(&self, col: isize) -> Option<usize> {
        usize::try_from(col).ok().filter(|&c| c < self.width)
    }

    #[inline]
    fn row_index(&self, row: isize) -> Option<usize> {
        usize::try_from(row).ok().filter(|&r| r < self.height)
    }

    /// Unchecked-by-contract lookup for traversals that already bounded `col`
    /// with [`Board::column`] and iterate `row` below `height`.
    #[inline]
    pub(crate) fn get(&self, row: usize, col: usize) -> Cell {
        debug_assert!(row < self.height && col < self.width);
        self.cells[row * self.width + col]
    }

    #[inline]
    pub(crate) fn index(&self, row: usize, col: usize) -> usize {
        row * self.width + col
    }

    pub(crate) fn len(&self) -> usize {
        self.cells.len()
    }
}

/// Parses the manifold diagram into rows of cells.
fn parser<'a>() -> impl Parser<'a, &'a str, Vec<Vec<Cell>>, extra::Err<Rich<'a, char>>> {
    let cell = choice((
        just('.').to(Cell::Empty),
        just('^').to(Cell::Splitter),
        just('S').to(Cell::Start),
    ));

    cell.repeated()
        .collect::<Vec<_>>()
        .separated_by(text::newline())
        .allow_trailing()
        .collect::<Vec<_>>()
        .map(|mut rows: Vec<Vec<Cell>>| {
            // Only the trailing newlines at EOF may leave empty rows behind;
            // interior blank lines stay and fail the width check
            while rows.last().is_some_and(Vec::is_empty) {
                rows.pop();
            }
            rows
        })
}

impl std::str::FromStr for Board {
    type Err = BoardError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let rows = parser().parse(input).into_result().map_err(|errors| {
            let span = errors
                .first()
                .map(|e| e.span().start..e.span().end)
                .unwrap_or(0..0);
            BoardError::Parse {
                reason: errors.iter().map(ToString::to_string).join("; "),
                input: input.to_string(),
                span: span.into(),
            }
        })?;

        Board::new(rows)
    }
}

use tracing::debug;

use crate::activation::ActivationTracer;
use crate::board::Board;
use crate::error::TraversalError;
use crate::limits::TraversalLimits;
use crate::timelines::PathCounter;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Analysis {
    pub triggered_splitters: usize,
    pub timelines: u128,
}

#[tracing::instrument(skip(board))]
pub fn analyze(board: &Board) -> Result<Analysis, TraversalError> {
    analyze_with(board, TraversalLimits::default())
}

/// Runs both analyses from the board's start. They only share the board,
/// which neither of them mutates, so they run side by side.
#[tracing::instrument(skip(board))]
pub fn analyze_with(board: &Board, limits: TraversalLimits) -> Result<Analysis, TraversalError> {
    let start = board.start();
    let (triggered, timelines) = rayon::join(
        || {
            ActivationTracer::with_limits(board, limits)
                .trace(start)
                .map(|state| state.count())
        },
        || PathCounter::with_limits(board, limits).count(start),
    );

    let analysis = Analysis {
        triggered_splitters: triggered?,
        timelines: timelines?,
    };
    debug!(?analysis, "analysis finished");
    Ok(analysis)
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::test_support::*;
    use miette::Result;
    use rstest::rstest;

    #[rstest]
    #[case(SINGLE_SPLITTER, 1, 2)]
    #[case(CASCADE, 3, 4)]
    #[case(UNREACHABLE, 0, 1)]
    #[case(EXAMPLE, 21, 40)]
    fn reports_both_counts(
        #[case] input: &str,
        #[case] triggered_splitters: usize,
        #[case] timelines: u128,
    ) -> Result<()> {
        let board: Board = input.parse()?;
        assert_eq!(
            analyze(&board)?,
            Analysis {
                triggered_splitters,
                timelines
            }
        );
        Ok(())
    }

    #[test]
    fn surfaces_timeline_failures() -> Result<()> {
        let board: Board = ADJACENT.parse()?;
        assert!(matches!(
            analyze(&board),
            Err(TraversalError::DeflectionCycle { .. })
        ));
        Ok(())
    }
}

use std::str::FromStr;
use std::time::{Duration, Instant};

use crate::alpha_beta_searcher::{alpha_beta, minimax, Evaluator, SearchContext, SearchError};
use crate::board::IsolationBoard;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CountPositionsStrategy {
    Minimax,
    AlphaBeta,
}

impl FromStr for CountPositionsStrategy {
    type Err = &'static str;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "minimax" => Ok(CountPositionsStrategy::Minimax),
            "alpha-beta" => Ok(CountPositionsStrategy::AlphaBeta),
            _ => Err("invalid strategy; options are: minimax, alpha-beta"),
        }
    }
}

/// Nodes visited by one fixed-depth search.
#[derive(Debug, Clone, PartialEq)]
pub struct DepthCount {
    pub depth: u8,
    pub positions: usize,
    pub leaves: usize,
    pub cutoffs: usize,
    pub duration: Duration,
}

impl DepthCount {
    pub fn positions_per_second(&self) -> f64 {
        self.positions as f64 / self.duration.as_secs_f64()
    }
}

/// Runs a fresh, unlimited search at every depth in `1..=depth` and reports
/// how many positions each one visited.
pub fn count_positions<E>(
    position: &IsolationBoard,
    depth: u8,
    strategy: CountPositionsStrategy,
    evaluator: &E,
) -> Result<Vec<DepthCount>, SearchError>
where
    E: Evaluator<IsolationBoard> + ?Sized,
{
    (1..=depth)
        .map(|depth| -> Result<DepthCount, SearchError> {
            let mut context = SearchContext::unlimited();
            let start = Instant::now();
            match strategy {
                CountPositionsStrategy::Minimax => {
                    minimax(&mut context, position, depth, evaluator)?;
                }
                CountPositionsStrategy::AlphaBeta => {
                    alpha_beta(
                        &mut context,
                        position,
                        depth,
                        f64::NEG_INFINITY,
                        f64::INFINITY,
                        evaluator,
                    )?;
                }
            }
            Ok(DepthCount {
                depth,
                positions: context.searched_position_count(),
                leaves: context.leaf_evaluation_count(),
                cutoffs: context.cutoff_count(),
                duration: start.elapsed(),
            })
        })
        .collect()
}

/// Prints the per-depth counts of `count_positions` followed by a total.
pub fn run_count_positions<E>(
    position: &IsolationBoard,
    depth: u8,
    strategy: CountPositionsStrategy,
    evaluator: &E,
) -> Result<(), SearchError>
where
    E: Evaluator<IsolationBoard> + ?Sized,
{
    let counts = count_positions(position, depth, strategy, evaluator)?;

    let mut total_positions = 0;
    let mut total_duration = Duration::from_secs(0);

    for count in &counts {
        total_positions += count.positions;
        total_duration += count.duration;

        println!(
            "depth: {}, positions: {}, cutoffs: {}, positions per second: {}",
            count.depth,
            count.positions,
            count.cutoffs,
            count.positions_per_second()
        );
    }

    println!(
        "total positions: {}, total duration: {:?}, positions per second: {}",
        total_positions,
        total_duration,
        total_positions as f64 / total_duration.as_secs_f64()
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Move;
    use crate::evaluate::MobilityEvaluator;

    fn open_board() -> IsolationBoard {
        IsolationBoard::new(7, 7, Move::new(3, 2), Move::new(3, 4))
            .unwrap()
            .with_blocked(&[
                Move::new(1, 1),
                Move::new(4, 3),
                Move::new(5, 5),
                Move::new(6, 0),
            ])
            .unwrap()
    }

    #[test]
    fn test_strategy_parses() {
        assert_eq!(
            Ok(CountPositionsStrategy::Minimax),
            "minimax".parse::<CountPositionsStrategy>()
        );
        assert_eq!(
            Ok(CountPositionsStrategy::AlphaBeta),
            "alpha-beta".parse::<CountPositionsStrategy>()
        );
        assert!("all".parse::<CountPositionsStrategy>().is_err());
    }

    #[test]
    fn test_one_count_per_depth() {
        let counts = count_positions(
            &open_board(),
            3,
            CountPositionsStrategy::Minimax,
            &MobilityEvaluator::default(),
        )
        .unwrap();

        assert_eq!(vec![1, 2, 3], counts.iter().map(|c| c.depth).collect::<Vec<_>>());
        assert!(counts.iter().all(|c| c.cutoffs == 0));
        assert!(counts.windows(2).all(|w| w[0].positions < w[1].positions));
    }

    #[test]
    fn test_alpha_beta_never_visits_more_than_minimax() {
        let evaluator = MobilityEvaluator::default();
        let full = count_positions(
            &open_board(),
            3,
            CountPositionsStrategy::Minimax,
            &evaluator,
        )
        .unwrap();
        let pruned = count_positions(
            &open_board(),
            3,
            CountPositionsStrategy::AlphaBeta,
            &evaluator,
        )
        .unwrap();

        for (full, pruned) in full.iter().zip(&pruned) {
            assert!(pruned.positions <= full.positions);
            assert!(pruned.leaves <= full.leaves);
        }
        assert!(pruned[2].positions < full[2].positions);
        assert!(pruned[2].cutoffs > 0);
    }

    #[test]
    fn test_depth_zero_counts_nothing() {
        let counts = count_positions(
            &open_board(),
            0,
            CountPositionsStrategy::AlphaBeta,
            &MobilityEvaluator::default(),
        )
        .unwrap();
        assert!(counts.is_empty());
    }
}

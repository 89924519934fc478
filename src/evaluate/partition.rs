use log::trace;
use rustc_hash::FxHashSet;

use crate::alpha_beta_searcher::{BoardView, Evaluator, Score};
use crate::board::{Move, Player};

use super::{terminal_score, TempoEvaluator};

/// Blank cells reachable from `start` through any number of knight steps over
/// blank cells. `start` itself is only included if it is blank and can be
/// stepped back onto.
pub fn reachable_cells<B: BoardView>(position: &B, start: Move) -> FxHashSet<Move> {
    let (width, height) = (position.width(), position.height());
    let mut reached = FxHashSet::default();
    let mut worklist = vec![start];

    while let Some(cell) = worklist.pop() {
        for next in cell.knight_destinations(width, height) {
            if position.is_blank(next) && reached.insert(next) {
                worklist.push(next);
            }
        }
    }

    reached
}

/// Detects endgames where the players can no longer interfere with each
/// other.
///
/// Once fewer than half the cells are open, the cells each player can still
/// reach are flood-filled. Disjoint regions of different sizes decide the
/// game in favour of the larger one. Anything else is scored by the tempo
/// evaluator.
#[derive(Debug, Clone, Copy, Default)]
pub struct PartitionEvaluator {
    fallback: TempoEvaluator,
}

impl<B: BoardView> Evaluator<B> for PartitionEvaluator {
    fn score(&self, position: &B, player: Player) -> Score {
        if let Some(score) = terminal_score(position, player) {
            return score;
        }

        let open_cells = position.blank_cells().len();
        if 2 * open_cells < position.cell_count() {
            let own_region = reachable_cells(position, position.location(player));
            let opponent_region = reachable_cells(position, position.location(player.opponent()));

            if own_region.is_disjoint(&opponent_region) && own_region.len() != opponent_region.len()
            {
                trace!(
                    "partitioned: {} reaches {} cells, opponent reaches {}",
                    player,
                    own_region.len(),
                    opponent_region.len()
                );
                return if own_region.len() > opponent_region.len() {
                    f64::INFINITY
                } else {
                    f64::NEG_INFINITY
                };
            }
        }

        self.fallback.score(position, player)
    }
}

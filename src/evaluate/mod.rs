//! Reference scoring strategies for Isolation positions.
//!
//! Every strategy starts from the same terminal check, so a player who has
//! won (or lost, or can never move again) gets an infinite score no matter
//! which heuristic is configured.

use std::fmt;
use std::str::FromStr;

use crate::alpha_beta_searcher::{BoardView, Evaluator, Score};
use crate::board::Player;

mod mobility;
mod partition;
mod tempo;


pub use mobility::MobilityEvaluator;
pub use partition::{reachable_cells, PartitionEvaluator};
pub use tempo::{average_game_length, TempoEvaluator};

/// Forced result for `player`, if the game is already decided.
///
/// Vacated cells are never freed, so a player without legal moves can never
/// move again and has lost even if it is not their turn yet.
#[inline]
pub fn terminal_score<B: BoardView>(position: &B, player: Player) -> Option<Score> {
    if position.is_winner(player) {
        return Some(f64::INFINITY);
    }
    if position.is_loser(player) {
        return Some(f64::NEG_INFINITY);
    }
    if position.legal_moves(player).is_empty() {
        return Some(f64::NEG_INFINITY);
    }
    if position.legal_moves(player.opponent()).is_empty() {
        return Some(f64::INFINITY);
    }
    None
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EvaluatorKind {
    Mobility,
    #[default]
    Partition,
    Tempo,
}

impl EvaluatorKind {
    pub const ALL: [EvaluatorKind; 3] = [
        EvaluatorKind::Mobility,
        EvaluatorKind::Partition,
        EvaluatorKind::Tempo,
    ];

    /// Builds the evaluator. `seed` only affects the mobility evaluator's
    /// tie-breaking perturbation.
    pub fn build<B: BoardView + 'static>(self, seed: Option<u64>) -> Box<dyn Evaluator<B>> {
        match self {
            EvaluatorKind::Mobility => {
                let evaluator = MobilityEvaluator::default();
                Box::new(match seed {
                    Some(seed) => evaluator.with_seed(seed),
                    None => evaluator,
                })
            }
            EvaluatorKind::Partition => Box::new(PartitionEvaluator::default()),
            EvaluatorKind::Tempo => Box::new(TempoEvaluator),
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            EvaluatorKind::Mobility => "mobility",
            EvaluatorKind::Partition => "partition",
            EvaluatorKind::Tempo => "tempo",
        }
    }
}

impl FromStr for EvaluatorKind {
    type Err = &'static str;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "mobility" => Ok(EvaluatorKind::Mobility),
            "partition" => Ok(EvaluatorKind::Partition),
            "tempo" => Ok(EvaluatorKind::Tempo),
            _ => Err("invalid evaluator; options are: mobility, partition, tempo"),
        }
    }
}

impl fmt::Display for EvaluatorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

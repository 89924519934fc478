use crate::alpha_beta_searcher::{BoardView, Evaluator, Score};
use crate::board::Player;
use crate::symmetry::hash_encoding;

use super::terminal_score;

/// Own legal moves minus a weighted count of the opponent's.
///
/// With a seed, the opponent weight is scaled by `1 + j` where `j` in `[0, 1)`
/// is drawn from a generator seeded with the seed and the position hash. The
/// same position always gets the same `j` for a given seed, which breaks ties
/// between otherwise equal moves while keeping runs reproducible.
#[derive(Debug, Clone, Copy)]
pub struct MobilityEvaluator {
    opponent_weight: f64,
    seed: Option<u64>,
}

impl MobilityEvaluator {
    pub fn new(opponent_weight: f64) -> Self {
        Self {
            opponent_weight,
            seed: None,
        }
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn opponent_weight(&self) -> f64 {
        self.opponent_weight
    }

    pub fn seed(&self) -> Option<u64> {
        self.seed
    }

    fn jitter<B: BoardView>(&self, position: &B) -> f64 {
        match self.seed {
            Some(seed) => fastrand::Rng::with_seed(seed ^ hash_encoding(&position.encoding())).f64(),
            None => 0.0,
        }
    }
}

impl Default for MobilityEvaluator {
    fn default() -> Self {
        Self::new(1.0)
    }
}

impl<B: BoardView> Evaluator<B> for MobilityEvaluator {
    fn score(&self, position: &B, player: Player) -> Score {
        if let Some(score) = terminal_score(position, player) {
            return score;
        }

        let own_moves = position.legal_moves(player).len() as f64;
        let opponent_moves = position.legal_moves(player.opponent()).len() as f64;
        let weight = self.opponent_weight * (1.0 + self.jitter(position));

        own_moves - weight * opponent_moves
    }
}

use crate::alpha_beta_searcher::{BoardView, Evaluator, Score};
use crate::board::{Move, Player};

use super::terminal_score;

/// Observed average game length, in moves, for a board with `cell_count`
/// cells. Only the 7x7 board has been measured.
pub fn average_game_length(cell_count: usize) -> Option<f64> {
    match cell_count {
        49 => Some(35.5),
        _ => None,
    }
}

/// Mobility difference where moves onto the border count for less as the
/// game goes on.
///
/// The border discount is `0.5 + elapsed`, with `elapsed` the move count as a
/// fraction of the average game length. Boards without a measured average
/// use the move count itself, so `elapsed` is 1.
#[derive(Debug, Clone, Copy, Default)]
pub struct TempoEvaluator;

impl TempoEvaluator {
    pub fn border_discount<B: BoardView>(position: &B) -> f64 {
        let move_count = position.move_count() as f64;
        let average = average_game_length(position.cell_count()).unwrap_or(move_count);
        let elapsed = if average > 0.0 {
            move_count / average
        } else {
            1.0
        };
        0.5 + elapsed
    }
}

fn count_border_moves(moves: &[Move], width: u8, height: u8) -> f64 {
    moves
        .iter()
        .filter(|mv| mv.is_on_border(width, height))
        .count() as f64
}

impl<B: BoardView> Evaluator<B> for TempoEvaluator {
    fn score(&self, position: &B, player: Player) -> Score {
        if let Some(score) = terminal_score(position, player) {
            return score;
        }

        let (width, height) = (position.width(), position.height());
        let own_moves = position.legal_moves(player);
        let opponent_moves = position.legal_moves(player.opponent());
        let discount = Self::border_discount(position);

        own_moves.len() as f64 - discount * count_border_moves(&own_moves, width, height)
            - opponent_moves.len() as f64
            + discount * count_border_moves(&opponent_moves, width, height)
    }
}

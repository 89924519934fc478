//! Core traits for generic adversarial search over Isolation-style boards.

use crate::board::{BoardEncoding, BoardError, Move, MoveList, Player};

/// Scores are real-valued; `f64::INFINITY` / `f64::NEG_INFINITY` mark forced
/// wins and losses.
pub type Score = f64;

/// An immutable snapshot of a game position, as the search sees it.
///
/// Implementations own the rules: which moves are legal, what a move does,
/// and when the game is over. The search never mutates a position; it asks
/// for successors with `forecast_move`.
pub trait BoardView: Clone {
    fn width(&self) -> u8;

    fn height(&self) -> u8;

    fn active_player(&self) -> Player;

    /// Number of moves applied since the position was set up.
    fn move_count(&self) -> u32;

    fn location(&self, player: Player) -> Move;

    /// Legal moves for `player`, in a stable order. Empty if the player is stuck.
    fn legal_moves(&self, player: Player) -> MoveList;

    /// Returns the position after the active player plays `mv`. Fails if `mv`
    /// is not currently legal.
    fn forecast_move(&self, mv: Move) -> Result<Self, BoardError>;

    fn is_winner(&self, player: Player) -> bool;

    fn is_loser(&self, player: Player) -> bool;

    fn is_blank(&self, cell: Move) -> bool;

    fn blank_cells(&self) -> Vec<Move>;

    /// Stable raw encoding used for hashing and symmetry detection.
    fn encoding(&self) -> BoardEncoding;

    fn cell_count(&self) -> usize {
        self.width() as usize * self.height() as usize
    }
}

/// Scores a position from the point of view of `player`.
///
/// Must return a value above every finite score when `player` has already
/// won and below every finite score when `player` has already lost, so that
/// forced results propagate through the search regardless of depth.
pub trait Evaluator<B: BoardView> {
    fn score(&self, position: &B, player: Player) -> Score;
}

impl<B: BoardView, E: Evaluator<B> + ?Sized> Evaluator<B> for Box<E> {
    fn score(&self, position: &B, player: Player) -> Score {
        (**self).score(position, player)
    }
}

//! `BoardView` for `IsolationBoard`, plus a one-call search entry point.

use crate::alpha_beta_searcher::{choose_move_with_context, BoardView, SearchContext, SearchError};
use crate::board::{BoardEncoding, BoardError, IsolationBoard, Move, MoveList, Player};
use crate::evaluate::PartitionEvaluator;
#[cfg(feature = "instrumentation")]
use tracing::instrument;

impl BoardView for IsolationBoard {
    #[inline]
    fn width(&self) -> u8 {
        IsolationBoard::width(self)
    }

    #[inline]
    fn height(&self) -> u8 {
        IsolationBoard::height(self)
    }

    #[inline]
    fn active_player(&self) -> Player {
        IsolationBoard::active_player(self)
    }

    #[inline]
    fn move_count(&self) -> u32 {
        IsolationBoard::move_count(self)
    }

    #[inline]
    fn location(&self, player: Player) -> Move {
        IsolationBoard::location(self, player)
    }

    #[inline]
    fn legal_moves(&self, player: Player) -> MoveList {
        IsolationBoard::legal_moves(self, player)
    }

    #[inline]
    fn forecast_move(&self, mv: Move) -> Result<Self, BoardError> {
        IsolationBoard::forecast_move(self, mv)
    }

    #[inline]
    fn is_winner(&self, player: Player) -> bool {
        IsolationBoard::is_winner(self, player)
    }

    #[inline]
    fn is_loser(&self, player: Player) -> bool {
        IsolationBoard::is_loser(self, player)
    }

    #[inline]
    fn is_blank(&self, cell: Move) -> bool {
        IsolationBoard::is_blank(self, cell)
    }

    #[inline]
    fn blank_cells(&self) -> Vec<Move> {
        IsolationBoard::blank_cells(self)
    }

    #[inline]
    fn encoding(&self) -> BoardEncoding {
        IsolationBoard::encoding(self)
    }

    #[inline]
    fn cell_count(&self) -> usize {
        IsolationBoard::cell_count(self)
    }
}

/// Picks a move for the active player with the partition evaluator, spending
/// the budget held by `context`.
#[must_use = "search returns the best move found"]
#[cfg_attr(feature = "instrumentation", instrument(skip_all))]
pub fn search_best_move(
    context: &mut SearchContext,
    board: &IsolationBoard,
) -> Result<Option<Move>, SearchError> {
    let evaluator = PartitionEvaluator::default();
    choose_move_with_context(context, board, &evaluator)
}

use std::fmt;
use std::str::FromStr;
use std::time::Duration;

use log::{debug, info};
use thiserror::Error;

use crate::alpha_beta_searcher::{
    alpha_beta, choose_move_with_context, minimax, Evaluator, Score, SearchContext, SearchError,
    TimeBudget, DEFAULT_TIMER_THRESHOLD,
};
use crate::board::{BoardError, IsolationBoard, Move, MoveList, Player};
use crate::evaluate::EvaluatorKind;

/// How the engine turns its budget into a move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Strategy {
    /// Plain minimax at `search_depth`, ignoring the clock.
    Minimax,
    /// Alpha-beta at `search_depth`, ignoring the clock.
    AlphaBeta,
    /// Alpha-beta at increasing depths until the time limit is reached.
    #[default]
    IterativeDeepening,
}

impl FromStr for Strategy {
    type Err = &'static str;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "minimax" => Ok(Strategy::Minimax),
            "alpha-beta" => Ok(Strategy::AlphaBeta),
            "iterative-deepening" => Ok(Strategy::IterativeDeepening),
            _ => Err("invalid strategy; options are: minimax, alpha-beta, iterative-deepening"),
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Strategy::Minimax => "minimax",
            Strategy::AlphaBeta => "alpha-beta",
            Strategy::IterativeDeepening => "iterative-deepening",
        };
        write!(f, "{}", name)
    }
}

/// Engine configuration
#[derive(Clone, Debug, PartialEq)]
pub struct EngineConfig {
    pub strategy: Strategy,
    pub evaluator: EvaluatorKind,
    /// Wall-clock budget per move for iterative deepening.
    pub time_limit: Duration,
    /// Time kept in reserve before the deadline.
    pub timer_threshold: Duration,
    /// Depth for the fixed-depth strategies.
    pub search_depth: u8,
    pub dedupe_symmetric_root: bool,
    /// Seed for the mobility evaluator's perturbation.
    pub seed: Option<u64>,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            strategy: Strategy::default(),
            evaluator: EvaluatorKind::default(),
            time_limit: Duration::from_millis(150),
            timer_threshold: DEFAULT_TIMER_THRESHOLD,
            search_depth: 3,
            dedupe_symmetric_root: false,
            seed: None,
        }
    }
}

#[derive(Error, Debug)]
pub enum EngineError {
    #[error("Invalid move: {mv}")]
    InvalidMove { mv: Move },
    #[error("Board error: {error}")]
    BoardError { error: BoardError },
    #[error("Search error: {error}")]
    SearchError { error: SearchError },
}

/// Search performance statistics
#[derive(Debug, Clone, PartialEq)]
pub struct SearchStats {
    pub positions_searched: usize,
    pub cutoffs: usize,
    pub completed_depth: u8,
    pub last_score: Option<Score>,
    pub last_search_duration: Option<Duration>,
}

/// Plays one side (or both) of a game: keeps the current position and the
/// move history, and asks the search for moves.
pub struct Engine {
    config: EngineConfig,
    board: IsolationBoard,
    move_history: Vec<Move>,
    evaluator: Box<dyn Evaluator<IsolationBoard>>,
    search_context: SearchContext,
}

impl Engine {
    pub fn new(starting_position: IsolationBoard) -> Self {
        Self::with_config(EngineConfig::default(), starting_position)
    }

    pub fn with_config(config: EngineConfig, starting_position: IsolationBoard) -> Self {
        let evaluator = config.evaluator.build(config.seed);
        if let Some(seed) = config.seed {
            info!("{} evaluator seeded with {}", config.evaluator, seed);
        }
        Self {
            board: starting_position,
            move_history: Vec::new(),
            evaluator,
            search_context: SearchContext::unlimited(),
            config,
        }
    }

    pub fn board(&self) -> &IsolationBoard {
        &self.board
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn move_history(&self) -> &[Move] {
        &self.move_history
    }

    pub fn last_move(&self) -> Option<Move> {
        self.move_history.last().copied()
    }

    pub fn valid_moves(&self) -> MoveList {
        self.board.legal_moves(self.board.active_player())
    }

    pub fn is_game_over(&self) -> bool {
        self.valid_moves().is_empty()
    }

    /// The winner once the player to move is stuck.
    pub fn winner(&self) -> Option<Player> {
        Player::ALL
            .into_iter()
            .find(|&player| self.board.is_winner(player))
    }

    /// Scores the current position for `player` with the configured evaluator.
    pub fn score(&self, player: Player) -> Score {
        self.evaluator.score(&self.board, player)
    }

    /// Searches the current position. `None` means the player to move is
    /// stuck and has lost.
    pub fn get_best_move(&mut self) -> Result<Option<Move>, EngineError> {
        let budget = match self.config.strategy {
            Strategy::IterativeDeepening => {
                TimeBudget::new(self.config.time_limit).with_threshold(self.config.timer_threshold)
            }
            Strategy::Minimax | Strategy::AlphaBeta => TimeBudget::unlimited(),
        };
        self.search_context =
            SearchContext::new(budget).with_symmetric_root_dedupe(self.config.dedupe_symmetric_root);

        let evaluator = self.evaluator.as_ref();
        let result = match self.config.strategy {
            Strategy::IterativeDeepening => {
                choose_move_with_context(&mut self.search_context, &self.board, evaluator)
            }
            Strategy::Minimax => minimax(
                &mut self.search_context,
                &self.board,
                self.config.search_depth,
                evaluator,
            )
            .map(|result| result.best_move),
            Strategy::AlphaBeta => alpha_beta(
                &mut self.search_context,
                &self.board,
                self.config.search_depth,
                f64::NEG_INFINITY,
                f64::INFINITY,
                evaluator,
            )
            .map(|result| result.best_move),
        };

        let best_move = result.map_err(|error| EngineError::SearchError { error })?;
        debug!(
            "{} chose {:?} after {} positions",
            self.config.strategy,
            best_move,
            self.search_context.searched_position_count()
        );
        Ok(best_move)
    }

    /// Searches and plays the chosen move.
    pub fn make_best_move(&mut self) -> Result<Option<Move>, EngineError> {
        let best_move = self.get_best_move()?;
        if let Some(mv) = best_move {
            self.make_move(mv)?;
        }
        Ok(best_move)
    }

    /// Plays `mv` for the player to move.
    pub fn make_move(&mut self, mv: Move) -> Result<(), EngineError> {
        if !self.board.is_legal(mv) {
            return Err(EngineError::InvalidMove { mv });
        }
        self.board = self
            .board
            .forecast_move(mv)
            .map_err(|error| EngineError::BoardError { error })?;
        self.move_history.push(mv);
        Ok(())
    }

    pub fn get_search_stats(&self) -> SearchStats {
        SearchStats {
            positions_searched: self.search_context.searched_position_count(),
            cutoffs: self.search_context.cutoff_count(),
            completed_depth: self.search_context.completed_depth(),
            last_score: self.search_context.last_score(),
            last_search_duration: self.search_context.last_search_duration(),
        }
    }
}

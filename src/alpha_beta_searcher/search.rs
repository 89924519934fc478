//! Depth-limited adversarial search over a `BoardView`.
//!
//! # Core Algorithm
//!
//! Minimax alternates maximizing layers (the root player is to act) and
//! minimizing layers (the opponent is to act). Leaves at depth 0 are scored by
//! the `Evaluator`, always from the root player's point of view. Alpha-beta
//! pruning threads a window [alpha, beta] through the recursion and skips the
//! remaining siblings of a node once its best score falls outside the window.
//! For the same depth and move order it picks the same move and score as
//! minimax.
//!
//! # Tie-breaking
//!
//! Children are visited in `legal_moves` order and never reordered. The
//! incumbent is only replaced by a strictly better score, so the first child
//! achieving the best score wins. Every node starts with its first legal move
//! as the incumbent, which keeps a legal move in hand even when all children
//! are forced losses.
//!
//! # Cancellation
//!
//! The `TimeBudget` is checked at the top of every recursive call, before any
//! board work. An exhausted budget fails the call with `SearchError::Timeout`,
//! which `?` carries through every enclosing call. Only
//! `iterative_deepening` absorbs it, falling back to the answer of the last
//! fully completed depth.

use std::time::{Duration, Instant};

use log::{debug, trace, warn};
use thiserror::Error;
#[cfg(feature = "instrumentation")]
use tracing::instrument;

use super::time_budget::TimeBudget;
use super::{BoardView, Evaluator, Score};
use crate::board::{BoardError, Move, MoveList, Player};
use crate::symmetry;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum SearchError {
    #[error("search ran out of time")]
    Timeout,
    #[error("depth must be at least 1")]
    DepthTooLow,
    #[error("search chose {mv}, which is not a legal move in the current position")]
    IllegalMove { mv: Move },
    #[error("board error: {0}")]
    Board(#[from] BoardError),
}

/// Score and move chosen at a node. `best_move` is `None` only when the node
/// has no legal moves (or is a leaf).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SearchResult {
    pub score: Score,
    pub best_move: Option<Move>,
}

impl SearchResult {
    fn leaf(score: Score) -> Self {
        Self {
            score,
            best_move: None,
        }
    }

    fn initial(maximizing_player: bool, first_move: Option<Move>) -> Self {
        Self {
            score: if maximizing_player {
                f64::NEG_INFINITY
            } else {
                f64::INFINITY
            },
            best_move: first_move,
        }
    }
}

/// Statistics collected during search.
#[derive(Debug, Default)]
struct SearchStats {
    position_count: usize,
    leaf_evaluations: usize,
    cutoffs: usize,
    completed_depth: u8,
    depth_limit_reached: bool,
    last_score: Option<Score>,
    last_duration: Option<Duration>,
}

impl SearchStats {
    fn record_result(&mut self, score: Score, duration: Duration) {
        self.last_score = Some(score);
        self.last_duration = Some(duration);
    }
}

/// State for one move decision: the budget being spent and what the search
/// has done with it so far.
pub struct SearchContext {
    budget: TimeBudget,
    stats: SearchStats,
    dedupe_symmetric_root: bool,
}

impl SearchContext {
    pub fn new(budget: TimeBudget) -> Self {
        Self {
            budget,
            stats: SearchStats::default(),
            dedupe_symmetric_root: false,
        }
    }

    /// A context that never times out, for fixed-depth searches.
    pub fn unlimited() -> Self {
        Self::new(TimeBudget::unlimited())
    }

    /// When enabled, root moves leading to symmetric copies of an earlier
    /// root move's successor are skipped.
    pub fn with_symmetric_root_dedupe(mut self, enabled: bool) -> Self {
        self.dedupe_symmetric_root = enabled;
        self
    }

    pub fn dedupe_symmetric_root(&self) -> bool {
        self.dedupe_symmetric_root
    }

    pub fn budget(&self) -> &TimeBudget {
        &self.budget
    }

    pub fn reset_stats(&mut self) {
        self.stats = SearchStats::default();
    }

    pub fn searched_position_count(&self) -> usize {
        self.stats.position_count
    }

    pub fn leaf_evaluation_count(&self) -> usize {
        self.stats.leaf_evaluations
    }

    pub fn cutoff_count(&self) -> usize {
        self.stats.cutoffs
    }

    /// Deepest iterative-deepening depth that finished before the budget ran
    /// out. Zero if none did.
    pub fn completed_depth(&self) -> u8 {
        self.stats.completed_depth
    }

    pub fn last_score(&self) -> Option<Score> {
        self.stats.last_score
    }

    pub fn last_search_duration(&self) -> Option<Duration> {
        self.stats.last_duration
    }

    #[inline]
    fn check_time(&mut self) -> Result<(), SearchError> {
        self.budget.check()
    }
}

/// Updates best score and move if new score is better.
/// Returns true if the incumbent was replaced.
fn update_best(
    score: Score,
    candidate_move: Move,
    maximizing_player: bool,
    best: &mut SearchResult,
) -> bool {
    let is_better = if maximizing_player {
        score > best.score
    } else {
        score < best.score
    };

    if is_better {
        best.score = score;
        best.best_move = Some(candidate_move);
    }
    is_better
}

fn candidate_moves<B: BoardView>(
    context: &SearchContext,
    position: &B,
    ply: u8,
) -> Result<MoveList, SearchError> {
    let moves = position.legal_moves(position.active_player());
    if ply == 0 && context.dedupe_symmetric_root && moves.len() > 1 {
        let distinct = symmetry::distinct_successor_moves(position, &moves)?;
        debug!(
            "root has {} legal moves, {} up to symmetry",
            moves.len(),
            distinct.len()
        );
        return Ok(distinct);
    }
    Ok(moves)
}

fn evaluate_leaf<B, E>(
    context: &mut SearchContext,
    position: &B,
    evaluator: &E,
    root_player: Player,
) -> Score
where
    B: BoardView,
    E: Evaluator<B> + ?Sized,
{
    context.stats.leaf_evaluations += 1;
    context.stats.depth_limit_reached = true;
    let score = evaluator.score(position, root_player);
    trace!("leaf score for {}: {}", root_player, score);
    score
}

/// Depth-limited minimax from the active player's point of view.
///
/// # Returns
///
/// - `Ok(result)` - The best score and the move achieving it (`None` if the
///   active player has no legal moves)
/// - `Err(SearchError::DepthTooLow)` - If `depth` is < 1
/// - `Err(SearchError::Timeout)` - If the budget ran out mid-search
#[cfg_attr(feature = "instrumentation", instrument(skip_all))]
pub fn minimax<B, E>(
    context: &mut SearchContext,
    position: &B,
    depth: u8,
    evaluator: &E,
) -> Result<SearchResult, SearchError>
where
    B: BoardView,
    E: Evaluator<B> + ?Sized,
{
    if depth < 1 {
        return Err(SearchError::DepthTooLow);
    }

    debug!("minimax search depth: {}", depth);
    let start = Instant::now();
    let root_player = position.active_player();
    let result = minimax_value(context, position, evaluator, root_player, depth, 0, true)?;
    context.stats.record_result(result.score, start.elapsed());

    Ok(result)
}

#[allow(clippy::too_many_arguments)]
fn minimax_value<B, E>(
    context: &mut SearchContext,
    position: &B,
    evaluator: &E,
    root_player: Player,
    depth: u8,
    ply: u8,
    maximizing_player: bool,
) -> Result<SearchResult, SearchError>
where
    B: BoardView,
    E: Evaluator<B> + ?Sized,
{
    context.check_time()?;
    context.stats.position_count += 1;

    if depth == 0 {
        return Ok(SearchResult::leaf(evaluate_leaf(
            context,
            position,
            evaluator,
            root_player,
        )));
    }

    let candidates = candidate_moves(context, position, ply)?;
    let mut best = SearchResult::initial(maximizing_player, candidates.first().copied());

    for &candidate in candidates.iter() {
        let child = position.forecast_move(candidate)?;
        let score = minimax_value(
            context,
            &child,
            evaluator,
            root_player,
            depth - 1,
            ply + 1,
            !maximizing_player,
        )?
        .score;

        update_best(score, candidate, maximizing_player, &mut best);
    }

    Ok(best)
}

/// Minimax with alpha-beta pruning. Pass `f64::NEG_INFINITY` and
/// `f64::INFINITY` for a full-width search.
#[cfg_attr(feature = "instrumentation", instrument(skip_all))]
pub fn alpha_beta<B, E>(
    context: &mut SearchContext,
    position: &B,
    depth: u8,
    alpha: Score,
    beta: Score,
    evaluator: &E,
) -> Result<SearchResult, SearchError>
where
    B: BoardView,
    E: Evaluator<B> + ?Sized,
{
    if depth < 1 {
        return Err(SearchError::DepthTooLow);
    }

    debug!("alpha-beta search depth: {}", depth);
    let start = Instant::now();
    let root_player = position.active_player();
    let result = alpha_beta_value(
        context,
        position,
        evaluator,
        root_player,
        depth,
        0,
        alpha,
        beta,
        true,
    )?;
    context.stats.record_result(result.score, start.elapsed());

    Ok(result)
}

#[allow(clippy::too_many_arguments)]
fn alpha_beta_value<B, E>(
    context: &mut SearchContext,
    position: &B,
    evaluator: &E,
    root_player: Player,
    depth: u8,
    ply: u8,
    mut alpha: Score,
    mut beta: Score,
    maximizing_player: bool,
) -> Result<SearchResult, SearchError>
where
    B: BoardView,
    E: Evaluator<B> + ?Sized,
{
    context.check_time()?;
    context.stats.position_count += 1;

    if depth == 0 {
        return Ok(SearchResult::leaf(evaluate_leaf(
            context,
            position,
            evaluator,
            root_player,
        )));
    }

    let candidates = candidate_moves(context, position, ply)?;
    let mut best = SearchResult::initial(maximizing_player, candidates.first().copied());

    for &candidate in candidates.iter() {
        let child = position.forecast_move(candidate)?;
        let score = alpha_beta_value(
            context,
            &child,
            evaluator,
            root_player,
            depth - 1,
            ply + 1,
            alpha,
            beta,
            !maximizing_player,
        )?
        .score;

        update_best(score, candidate, maximizing_player, &mut best);

        if maximizing_player {
            if best.score >= beta {
                context.stats.cutoffs += 1;
                break;
            }
            alpha = alpha.max(best.score);
        } else {
            if best.score <= alpha {
                context.stats.cutoffs += 1;
                break;
            }
            beta = beta.min(best.score);
        }
    }

    Ok(best)
}

/// Runs alpha-beta at depth 1, 2, ... until the budget runs out and returns
/// the move of the deepest fully completed depth.
///
/// Depth is bounded by the number of cells on the board. The loop also stops
/// once a depth proves a forced result or explores the whole game tree
/// without reaching the depth limit.
///
/// # Returns
///
/// - `Ok(Some(mv))` - Move from the last completed depth
/// - `Ok(None)` - No depth completed, or the active player has no legal moves
/// - `Err(_)` - Any failure other than a timeout
#[cfg_attr(feature = "instrumentation", instrument(skip_all))]
pub fn iterative_deepening<B, E>(
    context: &mut SearchContext,
    position: &B,
    evaluator: &E,
) -> Result<Option<Move>, SearchError>
where
    B: BoardView,
    E: Evaluator<B> + ?Sized,
{
    let start = Instant::now();
    let max_depth = position.cell_count().min(u8::MAX as usize) as u8;
    let mut best_move = None;

    for depth in 1..=max_depth {
        context.stats.depth_limit_reached = false;

        match alpha_beta(
            context,
            position,
            depth,
            f64::NEG_INFINITY,
            f64::INFINITY,
            evaluator,
        ) {
            Ok(result) => {
                best_move = result.best_move;
                context.stats.completed_depth = depth;
                debug!(
                    "completed depth {}: score {}, move {:?}, {} positions searched",
                    depth,
                    result.score,
                    result.best_move,
                    context.searched_position_count()
                );

                if !context.stats.depth_limit_reached {
                    debug!("game tree exhausted at depth {}", depth);
                    break;
                }
                if result.score.is_infinite() {
                    debug!("forced result found at depth {}", depth);
                    break;
                }
            }
            Err(SearchError::Timeout) => {
                debug!(
                    "search timed out during depth {}, keeping the depth {} answer",
                    depth, context.stats.completed_depth
                );
                break;
            }
            Err(error) => return Err(error),
        }
    }

    context.stats.last_duration = Some(start.elapsed());
    Ok(best_move)
}

/// Picks a move for the active player within `budget`.
#[must_use = "search returns the chosen move"]
pub fn choose_move<B, E>(
    position: &B,
    budget: TimeBudget,
    evaluator: &E,
) -> Result<Option<Move>, SearchError>
where
    B: BoardView,
    E: Evaluator<B> + ?Sized,
{
    let mut context = SearchContext::new(budget);
    choose_move_with_context(&mut context, position, evaluator)
}

/// Like `choose_move`, but with a caller-provided context so the statistics
/// survive the call.
///
/// When the budget runs out before even depth 1 completes, the first legal
/// move is returned so that a legal move is always played when one exists.
/// A move produced by the search that is not legal is reported as
/// `SearchError::IllegalMove`.
#[cfg_attr(feature = "instrumentation", instrument(skip_all))]
pub fn choose_move_with_context<B, E>(
    context: &mut SearchContext,
    position: &B,
    evaluator: &E,
) -> Result<Option<Move>, SearchError>
where
    B: BoardView,
    E: Evaluator<B> + ?Sized,
{
    let legal_moves = position.legal_moves(position.active_player());
    let chosen = match iterative_deepening(context, position, evaluator)? {
        Some(mv) => Some(mv),
        None => {
            if let Some(&fallback) = legal_moves.first() {
                warn!(
                    "no search depth completed in time, falling back to {}",
                    fallback
                );
            }
            legal_moves.first().copied()
        }
    };

    if let Some(mv) = chosen {
        if !legal_moves.contains(&mv) {
            return Err(SearchError::IllegalMove { mv });
        }
    }

    Ok(chosen)
}

//! Generic adversarial search for two-player knight-move games.
//!
//! The search only talks to the position through `BoardView` and to the
//! scoring strategy through `Evaluator`, so any rules engine and heuristic
//! can be plugged in.

mod search;
pub mod time_budget;
mod traits;


pub use search::{
    alpha_beta, choose_move, choose_move_with_context, iterative_deepening, minimax,
    SearchContext, SearchError, SearchResult,
};
pub use time_budget::{TimeBudget, DEFAULT_TIMER_THRESHOLD};
pub use traits::{BoardView, Evaluator, Score};

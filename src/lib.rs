pub mod alpha_beta_searcher;
pub mod board;
pub mod evaluate;
pub mod game;
pub mod isolation_search;
pub mod symmetry;

#[cfg(feature = "instrumentation")]
pub mod instrumentation;

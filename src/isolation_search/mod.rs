//! Isolation-specific implementation of the search traits.

pub mod implementation;

#[cfg(test)]
mod tests;

pub use implementation::search_best_move;

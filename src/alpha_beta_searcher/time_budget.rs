//! Per-decision time budget polled by the search.

use std::time::{Duration, Instant};

use super::SearchError;

/// Time kept in reserve so the decision returns before the deadline itself.
pub const DEFAULT_TIMER_THRESHOLD: Duration = Duration::from_millis(10);

/// Wraps the deadline for a single move decision.
///
/// The search calls `check` at the top of every recursive call; once the
/// remaining time drops below the threshold, `check` fails with
/// `SearchError::Timeout`. A budget may also carry a poll limit, which
/// cancels the search after a fixed number of checks regardless of the clock.
#[derive(Debug, Clone)]
pub struct TimeBudget {
    deadline: Option<Instant>,
    threshold: Duration,
    poll_limit: Option<u64>,
    polls: u64,
}

impl TimeBudget {
    /// A budget expiring `time_left` from now.
    pub fn new(time_left: Duration) -> Self {
        Self {
            deadline: Some(Instant::now() + time_left),
            threshold: DEFAULT_TIMER_THRESHOLD,
            poll_limit: None,
            polls: 0,
        }
    }

    /// A budget that never runs out; useful for fixed-depth searches.
    pub fn unlimited() -> Self {
        Self {
            deadline: None,
            threshold: Duration::ZERO,
            poll_limit: None,
            polls: 0,
        }
    }

    pub fn with_threshold(mut self, threshold: Duration) -> Self {
        self.threshold = threshold;
        self
    }

    /// Cancels the search once `check` has been called `limit` times.
    pub fn with_poll_limit(mut self, limit: u64) -> Self {
        self.poll_limit = Some(limit);
        self
    }

    /// Time until the deadline, or `None` for an unlimited budget.
    pub fn time_left(&self) -> Option<Duration> {
        self.deadline
            .map(|deadline| deadline.saturating_duration_since(Instant::now()))
    }

    pub fn polls(&self) -> u64 {
        self.polls
    }

    pub fn is_exhausted(&self) -> bool {
        if let Some(limit) = self.poll_limit {
            if self.polls >= limit {
                return true;
            }
        }
        match self.time_left() {
            Some(time_left) => time_left <= self.threshold,
            None => false,
        }
    }

    /// Records a poll and fails with `SearchError::Timeout` when the budget is
    /// spent.
    #[inline]
    pub fn check(&mut self) -> Result<(), SearchError> {
        if self.is_exhausted() {
            return Err(SearchError::Timeout);
        }
        self.polls += 1;
        Ok(())
    }
}

impl Default for TimeBudget {
    fn default() -> Self {
        Self::unlimited()
    }
}

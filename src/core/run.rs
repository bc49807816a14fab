// Run state: one complete play-through from day 0 to max_days

use std::collections::HashSet;

use crate::types::{HistoryPoint, Sentiment};

/// Mutable state of a single play-through. Owned and mutated exclusively
/// by the engine; callers only read it.
#[derive(Debug, Clone)]
pub struct Run {
    pub day: u32,
    pub max_days: u32,
    pub initial_balance: f64,
    /// Current portfolio value. Never negative.
    pub balance: f64,
    pub sentiment: Sentiment,
    /// Accumulated penalty weight from risky choices. Only dampens final XP.
    pub ponzi_score: u32,
    /// Portfolio curve, one point per day. The in-progress day's value is
    /// overwritten when the day resolves.
    pub history: Vec<HistoryPoint>,
    /// Ids drawn this cycle, to avoid immediate repeats. Cleared once the
    /// catalog is exhausted.
    pub used_event_ids: HashSet<u32>,
    /// Streak counter of highly negative draws. Reset on any calmer event.
    pub consecutive_negative_events: u32,
}

impl Run {
    pub fn new(initial_balance: f64, max_days: u32) -> Self {
        Self {
            day: 0,
            max_days,
            initial_balance,
            balance: initial_balance,
            sentiment: Sentiment::Neutral,
            ponzi_score: 0,
            history: vec![HistoryPoint {
                day: 0,
                value: initial_balance,
            }],
            used_event_ids: HashSet::new(),
            consecutive_negative_events: 0,
        }
    }

    pub fn is_over(&self) -> bool {
        self.day >= self.max_days
    }

    /// Final balance over starting balance.
    pub fn performance_factor(&self) -> f64 {
        self.balance / self.initial_balance
    }

    /// Push the new day's point carrying the unresolved balance forward.
    pub(crate) fn open_day(&mut self, day: u32) {
        self.history.push(HistoryPoint {
            day,
            value: self.balance,
        });
    }

    /// Overwrite the in-progress day's value once the action resolves.
    pub(crate) fn close_day(&mut self, value: f64) {
        if let Some(point) = self.history.last_mut() {
            point.value = value;
        }
    }
}

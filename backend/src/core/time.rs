//! Time management for the simulation
//!
//! The simulation operates in discrete days over a fixed horizon.
//! Every ticket carries one remaining-effort slot per day of the horizon,
//! so burn-down on day `d` writes slot `d + 1`. The last day of the horizon
//! therefore has no successor slot and is never burned down.

use serde::{Deserialize, Serialize};

/// Tracks the current day within a fixed simulation horizon
///
/// # Example
/// ```
/// use wip_simulator_core::DayClock;
///
/// let mut clock = DayClock::new(3);
/// assert_eq!(clock.current_day(), 0);
/// assert!(clock.has_next_day());
///
/// clock.advance_day();
/// clock.advance_day();
/// assert_eq!(clock.current_day(), 2);
/// assert!(clock.is_last_day());
/// assert!(!clock.has_next_day());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayClock {
    /// Day currently being simulated (0-indexed)
    current_day: usize,
    /// Total number of simulated days
    total_days: usize,
}

impl DayClock {
    /// Create a new clock positioned on day 0
    ///
    /// # Panics
    /// Panics if `total_days` is zero. Configuration validation rejects
    /// that case before a clock is ever built.
    pub fn new(total_days: usize) -> Self {
        assert!(total_days > 0, "total_days must be positive");
        Self {
            current_day: 0,
            total_days,
        }
    }

    /// Move to the next day
    ///
    /// Advancing past the horizon is allowed; `is_finished` reports it.
    pub fn advance_day(&mut self) {
        self.current_day += 1;
    }

    /// Day currently being simulated
    pub fn current_day(&self) -> usize {
        self.current_day
    }

    /// Length of the horizon in days
    pub fn total_days(&self) -> usize {
        self.total_days
    }

    /// True when `day + 1` is still inside the horizon
    pub fn has_next_day(&self) -> bool {
        self.current_day + 1 < self.total_days
    }

    /// True on the final simulated day
    pub fn is_last_day(&self) -> bool {
        self.current_day + 1 == self.total_days
    }

    /// True once every day of the horizon has been simulated
    pub fn is_finished(&self) -> bool {
        self.current_day >= self.total_days
    }

    /// Days not yet simulated, including the current one
    pub fn remaining_days(&self) -> usize {
        self.total_days.saturating_sub(self.current_day)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    #[should_panic(expected = "total_days must be positive")]
    fn test_zero_days_panics() {
        DayClock::new(0);
    }

    #[test]
    fn test_single_day_horizon_has_no_next_day() {
        let clock = DayClock::new(1);
        assert!(clock.is_last_day());
        assert!(!clock.has_next_day());
    }
}

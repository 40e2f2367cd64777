//! Lead-time statistics
//!
//! Reduces a finished population into mean and population standard deviation
//! of ticket lead time, plus the `mean + stdev` bound used to compare
//! policies.

use crate::models::Ticket;
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Errors from the statistics aggregator
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum StatsError {
    #[error("Lead time undefined: no tickets")]
    NoData,
}

/// Lead-time summary of one population
///
/// # Example
/// ```
/// use wip_simulator_core::stats::LeadTimeStats;
///
/// let stats = LeadTimeStats::from_lead_times(&[1, 3]).unwrap();
/// assert_eq!(stats.mean, 2.0);
/// assert_eq!(stats.stdev, 1.0);
/// assert_eq!(stats.mean_plus_stdev, 3.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LeadTimeStats {
    /// Number of tickets summarised
    pub count: usize,
    pub mean: f64,
    /// Population (not sample) standard deviation
    pub stdev: f64,
    pub mean_plus_stdev: f64,
}

impl LeadTimeStats {
    /// Summarise raw lead times
    ///
    /// # Errors
    /// `StatsError::NoData` when `lead_times` is empty.
    pub fn from_lead_times(lead_times: &[usize]) -> Result<Self, StatsError> {
        if lead_times.is_empty() {
            return Err(StatsError::NoData);
        }

        let (sum, sum_sq) = lead_times.iter().fold((0.0, 0.0), |(sum, sum_sq), &l| {
            let l = l as f64;
            (sum + l, sum_sq + l * l)
        });

        let n = lead_times.len() as f64;
        let mean = sum / n;
        // Rounding can push the variance a hair below zero for constant data
        let variance = (sum_sq / n - mean * mean).max(0.0);
        let stdev = variance.sqrt();

        Ok(Self {
            count: lead_times.len(),
            mean,
            stdev,
            mean_plus_stdev: mean + stdev,
        })
    }
}

impl fmt::Display for LeadTimeStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Leadtime of tickets mean: {:.2} stdev: {:.2} mean+stdev: {:.2}",
            self.mean, self.stdev, self.mean_plus_stdev
        )
    }
}

/// Summarise the lead times of every ticket in a population
///
/// Tickets still open at the end of the run contribute their last recorded
/// lead time.
pub fn lead_time_stats<'a, I>(tickets: I) -> Result<LeadTimeStats, StatsError>
where
    I: IntoIterator<Item = &'a Ticket>,
{
    let lead_times: Vec<usize> = tickets.into_iter().map(Ticket::lead_time).collect();
    LeadTimeStats::from_lead_times(&lead_times)
}

/// Summarise only the tickets whose remaining effort reached zero
pub fn completed_lead_time_stats<'a, I>(tickets: I) -> Result<LeadTimeStats, StatsError>
where
    I: IntoIterator<Item = &'a Ticket>,
{
    let lead_times: Vec<usize> = tickets
        .into_iter()
        .filter(|t| t.is_complete())
        .map(Ticket::lead_time)
        .collect();
    LeadTimeStats::from_lead_times(&lead_times)
}

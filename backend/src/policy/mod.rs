//! Scheduling Policy Module
//!
//! This module defines how a fixed daily capacity is distributed across the
//! open tickets of one simulation.
//!
//! # Overview
//!
//! Every policy runs once per day, after that day's arrivals have been added,
//! and burns down tickets through the single primitive [`Ticket::burn`].
//! Policies differ only in the **order** in which tickets are offered
//! capacity and in **how many hours** each ticket is offered.
//!
//! Available policies:
//! 1. **EqualWorking**: Offer each ticket at most `wip_cap` hours in arrival
//!    order, then hand leftover capacity out uncapped in the same order
//! 2. **OldestFirst**: Arrival order, uncapped (FIFO)
//! 3. **ShortestFirst**: Ascending remaining effort, uncapped (SJF)
//! 4. **OldestShortestFirst**: Ascending arrival day, then remaining effort (OSJF)
//! 5. **AgeWeightedShortestFirst**: Ascending `remaining / age` with integer
//!    division (AWSJF)
//!
//! Ties in every sort key fall back to arrival order (ticket id), so results
//! never depend on sort-implementation details.
//!
//! # Example Usage
//!
//! ```rust
//! use wip_simulator_core::policy::{Policy, PolicyConfig};
//! use wip_simulator_core::{Ticket, TicketId};
//!
//! let mut tickets = vec![
//!     Ticket::new(TicketId(0), 0, 10, 3).unwrap(),
//!     Ticket::new(TicketId(1), 0, 5, 3).unwrap(),
//! ];
//!
//! let policy = Policy::from_config(PolicyConfig::ShortestFirst, 2);
//! let allocation = policy.allocate(0, &mut tickets, 8);
//!
//! assert_eq!(allocation.hours_for(TicketId(1)), 5);
//! assert_eq!(allocation.hours_for(TicketId(0)), 3);
//! ```

use crate::models::{Ticket, TicketId};
use serde::{Deserialize, Serialize};
use std::fmt;

mod age_weighted;
mod equal_working;
mod oldest_first;
mod oldest_shortest_first;
mod shortest_first;

/// Policy selection as it appears in configuration
///
/// Plain tags; parameters such as the per-ticket cap live in
/// `SimulationConfig` and are bound by [`Policy::from_config`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PolicyConfig {
    /// Cap per-ticket work each day, then spend leftovers
    EqualWorking,

    /// Work on tickets in order of arrival
    OldestFirst,

    /// Work on the ticket with the least remaining effort first
    ShortestFirst,

    /// Earlier arrival day first, shortest remaining effort within a day
    OldestShortestFirst,

    /// Smallest `remaining / age` first
    AgeWeightedShortestFirst,
}

impl PolicyConfig {
    /// All policies in canonical reporting order
    pub const ALL: [PolicyConfig; 5] = [
        PolicyConfig::EqualWorking,
        PolicyConfig::OldestFirst,
        PolicyConfig::ShortestFirst,
        PolicyConfig::OldestShortestFirst,
        PolicyConfig::AgeWeightedShortestFirst,
    ];

    /// Human-readable name used in reports
    pub fn name(self) -> &'static str {
        match self {
            PolicyConfig::EqualWorking => "Equal working",
            PolicyConfig::OldestFirst => "Oldest first",
            PolicyConfig::ShortestFirst => "Shortest first",
            PolicyConfig::OldestShortestFirst => "Oldest, shortest first",
            PolicyConfig::AgeWeightedShortestFirst => "Age weighted, shortest first",
        }
    }
}

impl fmt::Display for PolicyConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A scheduling policy with its parameters bound
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Policy {
    EqualWorking {
        /// Hours offered to each ticket in the first pass
        wip_cap: u32,
    },
    OldestFirst,
    ShortestFirst,
    OldestShortestFirst,
    AgeWeightedShortestFirst,
}

impl Policy {
    /// Bind a configured policy to its parameters
    pub fn from_config(config: PolicyConfig, wip_cap: u32) -> Self {
        match config {
            PolicyConfig::EqualWorking => Policy::EqualWorking { wip_cap },
            PolicyConfig::OldestFirst => Policy::OldestFirst,
            PolicyConfig::ShortestFirst => Policy::ShortestFirst,
            PolicyConfig::OldestShortestFirst => Policy::OldestShortestFirst,
            PolicyConfig::AgeWeightedShortestFirst => Policy::AgeWeightedShortestFirst,
        }
    }

    /// Configuration tag of this policy
    pub fn config(&self) -> PolicyConfig {
        match self {
            Policy::EqualWorking { .. } => PolicyConfig::EqualWorking,
            Policy::OldestFirst => PolicyConfig::OldestFirst,
            Policy::ShortestFirst => PolicyConfig::ShortestFirst,
            Policy::OldestShortestFirst => PolicyConfig::OldestShortestFirst,
            Policy::AgeWeightedShortestFirst => PolicyConfig::AgeWeightedShortestFirst,
        }
    }

    pub fn name(&self) -> &'static str {
        self.config().name()
    }

    /// Burn down `tickets` for `day` with `capacity` hours
    ///
    /// Every ticket that has arrived by `day` gets its carry-forward written,
    /// including tickets that receive no hours. The caller must not invoke
    /// this on the last day of the horizon.
    pub fn allocate(&self, day: usize, tickets: &mut [Ticket], capacity: u32) -> Allocation {
        match *self {
            Policy::EqualWorking { wip_cap } => {
                equal_working::burn_down(day, tickets, capacity, wip_cap)
            }
            Policy::OldestFirst => {
                let order = oldest_first::priority_order(day, tickets);
                greedy_burn_down(day, tickets, &order, capacity)
            }
            Policy::ShortestFirst => {
                let order = shortest_first::priority_order(day, tickets);
                greedy_burn_down(day, tickets, &order, capacity)
            }
            Policy::OldestShortestFirst => {
                let order = oldest_shortest_first::priority_order(day, tickets);
                greedy_burn_down(day, tickets, &order, capacity)
            }
            Policy::AgeWeightedShortestFirst => {
                let order = age_weighted::priority_order(day, tickets);
                greedy_burn_down(day, tickets, &order, capacity)
            }
        }
    }
}

impl fmt::Display for Policy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Hours spent per ticket on one day
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Allocation {
    day: usize,
    /// Indexed by ticket id
    hours: Vec<u32>,
}

impl Allocation {
    fn new(day: usize, num_tickets: usize) -> Self {
        Self {
            day,
            hours: vec![0; num_tickets],
        }
    }

    fn record(&mut self, index: usize, hours: u32) {
        self.hours[index] += hours;
    }

    pub fn day(&self) -> usize {
        self.day
    }

    /// Hours spent on `id` (zero for unknown ids)
    pub fn hours_for(&self, id: TicketId) -> u32 {
        self.hours.get(id.index()).copied().unwrap_or(0)
    }

    /// Total hours spent across all tickets
    pub fn total(&self) -> u32 {
        self.hours.iter().sum()
    }

    /// Tickets that received work, with their hours
    pub fn worked(&self) -> impl Iterator<Item = (TicketId, u32)> + '_ {
        self.hours
            .iter()
            .enumerate()
            .filter(|(_, h)| **h > 0)
            .map(|(i, h)| (TicketId(i), *h))
    }

    /// Number of tickets that received work
    pub fn tickets_worked(&self) -> usize {
        self.hours.iter().filter(|&&h| h > 0).count()
    }
}

/// Single uncapped pass in `order`: each ticket is offered all capacity left
fn greedy_burn_down(
    day: usize,
    tickets: &mut [Ticket],
    order: &[usize],
    capacity: u32,
) -> Allocation {
    let mut allocation = Allocation::new(day, tickets.len());
    let mut available = capacity;

    for &index in order {
        let before = available;
        available = tickets[index].burn(day, available, available);
        allocation.record(index, before - available);
    }

    allocation
}

/// Indices of the tickets that have arrived by `day`, in arrival order
fn arrived_indices(day: usize, tickets: &[Ticket]) -> Vec<usize> {
    tickets
        .iter()
        .enumerate()
        .filter(|(_, t)| t.start_day() <= day)
        .map(|(i, _)| i)
        .collect()
}

//! Ticket model
//!
//! Represents one unit of work entering the queue.
//! Each ticket has:
//! - Arrival day and total effort (immutable after creation)
//! - Remaining effort per simulated day (the burn-down trajectory)
//! - Last day worked and the lead time derived from it
//!
//! CRITICAL: `remaining_by_day` has one slot per day of the horizon.
//! Burning down day `d` always writes slot `d + 1`, whether or not work happened.

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Stable identifier of a ticket within a run
///
/// Ids are assigned in arrival order and are identical across every policy's
/// population, so `TicketId(n)` names the same arrival in all of them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct TicketId(pub usize);

impl TicketId {
    /// Position of the ticket in its population
    pub fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for TicketId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Errors that can occur when creating a ticket
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TicketError {
    #[error("Start day {start_day} is outside the {horizon}-day horizon")]
    StartDayOutsideHorizon { start_day: usize, horizon: usize },

    #[error("Ticket effort must be positive")]
    ZeroEffort,
}

/// A ticket and its per-day remaining-effort trajectory
///
/// # Example
/// ```
/// use wip_simulator_core::{Ticket, TicketId};
///
/// let mut ticket = Ticket::new(TicketId(0), 0, 5, 3).unwrap();
///
/// // 8 hours available, at most 8 offered: the ticket takes 5
/// let left = ticket.burn(0, 8, 8);
/// assert_eq!(left, 3);
/// assert_eq!(ticket.remaining_on(1), 0);
/// assert_eq!(ticket.lead_time(), 1);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ticket {
    id: TicketId,

    /// Day of arrival
    start_day: usize,

    /// Total hours of work required
    effort: u32,

    /// Remaining hours indexed by day; zero before `start_day`
    remaining_by_day: Vec<u32>,

    /// Last day on which the ticket received nonzero work
    end_day: Option<usize>,

    /// `end_day + 1 - start_day`, zero until first worked
    lead_time: usize,
}

impl Ticket {
    /// Create a ticket arriving on `start_day` within a `horizon`-day run
    ///
    /// # Errors
    /// - `StartDayOutsideHorizon` if `start_day >= horizon`
    /// - `ZeroEffort` if `effort == 0`
    pub fn new(
        id: TicketId,
        start_day: usize,
        effort: u32,
        horizon: usize,
    ) -> Result<Self, TicketError> {
        if start_day >= horizon {
            return Err(TicketError::StartDayOutsideHorizon { start_day, horizon });
        }
        if effort == 0 {
            return Err(TicketError::ZeroEffort);
        }

        let mut remaining_by_day = vec![0; horizon];
        remaining_by_day[start_day] = effort;

        Ok(Self {
            id,
            start_day,
            effort,
            remaining_by_day,
            end_day: None,
            lead_time: 0,
        })
    }

    /// Burn down this ticket on `day`
    ///
    /// Spends `min(remaining, hours_offered, hours_available)` hours and
    /// returns the capacity still unspent today. The remaining effort is
    /// carried forward into slot `day + 1` in every case.
    ///
    /// Calls for a day before arrival, or for the final day of the horizon
    /// (no `day + 1` slot), leave the ticket untouched and return
    /// `hours_available` unchanged.
    pub fn burn(&mut self, day: usize, hours_available: u32, hours_offered: u32) -> u32 {
        let next = day + 1;
        if day < self.start_day || next >= self.remaining_by_day.len() {
            return hours_available;
        }

        let mut remain = self.remaining_by_day[day];
        let mut available = hours_available;

        let hours = remain.min(hours_offered).min(available);
        if hours > 0 {
            remain -= hours;
            available -= hours;
            self.end_day = Some(day);
            self.lead_time = next - self.start_day;
        }

        self.remaining_by_day[next] = remain;
        available
    }

    // Getters

    pub fn id(&self) -> TicketId {
        self.id
    }

    pub fn start_day(&self) -> usize {
        self.start_day
    }

    pub fn effort(&self) -> u32 {
        self.effort
    }

    pub fn end_day(&self) -> Option<usize> {
        self.end_day
    }

    pub fn lead_time(&self) -> usize {
        self.lead_time
    }

    pub fn remaining_by_day(&self) -> &[u32] {
        &self.remaining_by_day
    }

    /// Remaining effort at the start of `day` (zero outside the horizon)
    pub fn remaining_on(&self, day: usize) -> u32 {
        self.remaining_by_day.get(day).copied().unwrap_or(0)
    }

    /// Length of the horizon this ticket was created for
    pub fn horizon(&self) -> usize {
        self.remaining_by_day.len()
    }

    /// Age on `day`, counting the arrival day as 1
    ///
    /// Always at least 1 for a ticket that has arrived.
    pub fn age_on(&self, day: usize) -> usize {
        (day + 1).saturating_sub(self.start_day).max(1)
    }

    /// True if the ticket has arrived and still has work on `day`
    pub fn is_open_on(&self, day: usize) -> bool {
        day >= self.start_day && self.remaining_on(day) > 0
    }

    /// Day on which the last hour of work was done, if the ticket is finished
    pub fn completion_day(&self) -> Option<usize> {
        self.end_day.filter(|&day| self.remaining_on(day + 1) == 0)
    }

    /// True once remaining effort has reached zero
    pub fn is_complete(&self) -> bool {
        self.completion_day().is_some()
    }
}

//! Ticket population
//!
//! Arena of tickets owned by a single policy's simulation.
//!
//! # Critical Invariants
//!
//! 1. **Arrival Order**: Tickets are stored in insertion order, which equals
//!    arrival order. `TicketId(n)` lives at index `n`. Policies that sort do so
//!    on a separate index list and never reorder the arena itself.
//! 2. **Exclusive Ownership**: Tickets are added by value; no ticket is ever
//!    shared with another population.
//! 3. **No Deletion**: Tickets stay for the whole run so final statistics see
//!    every arrival.

use crate::models::ticket::{Ticket, TicketId};
use thiserror::Error;

/// Errors raised when adding tickets to a population
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PopulationError {
    #[error("Ticket {got} added out of order, expected {expected}")]
    OutOfOrder { expected: TicketId, got: TicketId },

    #[error("Ticket {id} was created for a {got}-day horizon, population uses {expected}")]
    HorizonMismatch {
        id: TicketId,
        expected: usize,
        got: usize,
    },
}

/// All tickets seen by one simulation
///
/// # Example
///
/// ```rust
/// use wip_simulator_core::{Population, Ticket, TicketId};
///
/// let mut population = Population::new(5);
/// let arrivals = vec![Ticket::new(TicketId(0), 0, 4, 5).unwrap()];
/// population.add_tickets(&arrivals).unwrap();
///
/// assert_eq!(population.len(), 1);
/// assert_eq!(population.wip_on(0), 1);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Population {
    tickets: Vec<Ticket>,
    horizon: usize,
}

impl Population {
    /// Create an empty population for a `horizon`-day run
    pub fn new(horizon: usize) -> Self {
        Self {
            tickets: Vec::new(),
            horizon,
        }
    }

    /// Append independent copies of `arrivals`
    ///
    /// Ids must continue the sequence `0, 1, 2, ...` so that ids double as indices.
    pub fn add_tickets(&mut self, arrivals: &[Ticket]) -> Result<(), PopulationError> {
        for ticket in arrivals {
            let expected = TicketId(self.tickets.len());
            if ticket.id() != expected {
                return Err(PopulationError::OutOfOrder {
                    expected,
                    got: ticket.id(),
                });
            }
            if ticket.horizon() != self.horizon {
                return Err(PopulationError::HorizonMismatch {
                    id: ticket.id(),
                    expected: self.horizon,
                    got: ticket.horizon(),
                });
            }
            self.tickets.push(ticket.clone());
        }
        Ok(())
    }

    pub fn get(&self, id: TicketId) -> Option<&Ticket> {
        self.tickets.get(id.index())
    }

    pub fn tickets(&self) -> &[Ticket] {
        &self.tickets
    }

    /// Mutable view handed to a policy for one day's burn-down
    pub fn tickets_mut(&mut self) -> &mut [Ticket] {
        &mut self.tickets
    }

    pub fn iter(&self) -> impl Iterator<Item = &Ticket> {
        self.tickets.iter()
    }

    pub fn len(&self) -> usize {
        self.tickets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tickets.is_empty()
    }

    pub fn horizon(&self) -> usize {
        self.horizon
    }

    /// Work in progress: tickets with nonzero remaining effort on `day`
    pub fn wip_on(&self, day: usize) -> usize {
        self.tickets.iter().filter(|t| t.is_open_on(day)).count()
    }

    /// Sum of remaining effort across all tickets on `day`
    pub fn total_remaining_on(&self, day: usize) -> u64 {
        self.tickets
            .iter()
            .filter(|t| day >= t.start_day())
            .map(|t| t.remaining_on(day) as u64)
            .sum()
    }

    /// Number of tickets whose remaining effort reached zero
    pub fn completed_count(&self) -> usize {
        self.tickets.iter().filter(|t| t.is_complete()).count()
    }
}

//! Age-Weighted Shortest-First (AWSJF) Policy
//!
//! Divide remaining effort by the number of days a ticket has been open and
//! work on the ticket with the smallest weight first.
//!
//! # Behavior
//!
//! - Weight: `remaining / (day + 1 - start_day)` using integer division
//! - Age is at least 1, so the division is always defined
//! - Ties (frequent at small weights): arrival order

use super::arrived_indices;
use crate::models::Ticket;

/// Integer weight of a ticket on `day`
pub(super) fn weight(day: usize, ticket: &Ticket) -> usize {
    ticket.remaining_on(day) as usize / ticket.age_on(day)
}

pub(super) fn priority_order(day: usize, tickets: &[Ticket]) -> Vec<usize> {
    let mut order = arrived_indices(day, tickets);
    order.sort_by_key(|&i| (weight(day, &tickets[i]), i));
    order
}

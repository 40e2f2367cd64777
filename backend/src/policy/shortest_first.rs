//! Shortest-First (SJF) Policy
//!
//! Spend the day's capacity on the ticket with the least remaining effort first.
//!
//! # Behavior
//!
//! - Sort key: remaining effort on the current day, ascending
//! - Ties: arrival order
//! - Finished tickets sort first and absorb nothing

use super::arrived_indices;
use crate::models::Ticket;

pub(super) fn priority_order(day: usize, tickets: &[Ticket]) -> Vec<usize> {
    let mut order = arrived_indices(day, tickets);
    order.sort_by_key(|&i| (tickets[i].remaining_on(day), i));
    order
}

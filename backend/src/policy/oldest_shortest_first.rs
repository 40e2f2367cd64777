//! Oldest-Then-Shortest-First (OSJF) Policy
//!
//! Tickets from earlier days always come first; within one arrival day the
//! shortest remaining effort wins.
//!
//! # Behavior
//!
//! - Sort key: (arrival day, remaining effort), both ascending
//! - Ties: arrival order

use super::arrived_indices;
use crate::models::Ticket;

pub(super) fn priority_order(day: usize, tickets: &[Ticket]) -> Vec<usize> {
    let mut order = arrived_indices(day, tickets);
    order.sort_by_key(|&i| (tickets[i].start_day(), tickets[i].remaining_on(day), i));
    order
}

//! Equal-Working (WIP cap) Policy
//!
//! Spread the day's capacity thinly so every open ticket makes progress.
//!
//! # Behavior
//!
//! - First pass, arrival order: each ticket is offered at most `wip_cap` hours
//! - Second pass, same order: capacity left over is offered uncapped
//! - The second pass starts from what the first pass left, so a ticket never
//!   receives more than its remaining effort
//!
//! # Parameters
//!
//! - `wip_cap`: Hours per ticket in the first pass (default: 2)
//!
//! # Use Case
//!
//! - Bound starvation of new tickets at the cost of average lead time

use super::{arrived_indices, Allocation};
use crate::models::Ticket;

/// Plan both passes, then burn each ticket once with its planned hours
pub(super) fn burn_down(
    day: usize,
    tickets: &mut [Ticket],
    capacity: u32,
    wip_cap: u32,
) -> Allocation {
    let order = arrived_indices(day, tickets);
    let offers = plan_offers(day, tickets, &order, capacity, wip_cap);

    let mut allocation = Allocation::new(day, tickets.len());
    let mut available = capacity;
    for (&index, &offer) in order.iter().zip(offers.iter()) {
        let before = available;
        available = tickets[index].burn(day, available, offer);
        allocation.record(index, before - available);
    }

    allocation
}

/// Hours each ticket in `order` will be offered today
fn plan_offers(
    day: usize,
    tickets: &[Ticket],
    order: &[usize],
    capacity: u32,
    wip_cap: u32,
) -> Vec<u32> {
    let mut available = capacity;

    let mut offers: Vec<u32> = order
        .iter()
        .map(|&i| {
            let hours = tickets[i].remaining_on(day).min(wip_cap).min(available);
            available -= hours;
            hours
        })
        .collect();

    if available > 0 {
        for (offer, &i) in offers.iter_mut().zip(order) {
            let extra = (tickets[i].remaining_on(day) - *offer).min(available);
            *offer += extra;
            available -= extra;
        }
    }

    offers
}

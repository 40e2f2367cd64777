//! Oldest-First (FIFO) Policy
//!
//! Spend the day's capacity on tickets in order of arrival.
//!
//! # Behavior
//!
//! - Each ticket is offered all capacity still unspent
//! - A single pass suffices since every offer is the full remainder
//! - Relies on population insertion order being arrival order

use super::arrived_indices;
use crate::models::Ticket;

/// Arrival order: population order, no sorting
pub(super) fn priority_order(day: usize, tickets: &[Ticket]) -> Vec<usize> {
    arrived_indices(day, tickets)
}

#[cfg(test)]
mod tests {
    use super::super::Policy;
    use crate::models::{Ticket, TicketId};

    #[test]
    fn test_oldest_first_ignores_size() {
        let mut tickets = vec![
            Ticket::new(TicketId(0), 0, 10, 3).unwrap(),
            Ticket::new(TicketId(1), 0, 2, 3).unwrap(),
        ];

        let allocation = Policy::OldestFirst.allocate(0, &mut tickets, 8);

        assert_eq!(allocation.hours_for(TicketId(0)), 8);
        assert_eq!(allocation.hours_for(TicketId(1)), 0);
        assert_eq!(tickets[0].remaining_on(1), 2);
        assert_eq!(tickets[1].remaining_on(1), 2);
    }

    #[test]
    fn test_oldest_first_moves_on_after_completion() {
        let mut tickets = vec![
            Ticket::new(TicketId(0), 0, 3, 3).unwrap(),
            Ticket::new(TicketId(1), 0, 4, 3).unwrap(),
            Ticket::new(TicketId(2), 0, 4, 3).unwrap(),
        ];

        let allocation = Policy::OldestFirst.allocate(0, &mut tickets, 8);

        assert_eq!(allocation.hours_for(TicketId(0)), 3);
        assert_eq!(allocation.hours_for(TicketId(1)), 4);
        assert_eq!(allocation.hours_for(TicketId(2)), 1);
    }
}

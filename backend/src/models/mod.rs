//! Domain models for the WIP simulator

pub mod population;
pub mod ticket;

// Re-exports
pub use population::{Population, PopulationError};
pub use ticket::{Ticket, TicketError, TicketId};

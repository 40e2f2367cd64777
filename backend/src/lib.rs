//! WIP Simulator Core - Rust Engine
//!
//! Day-by-day queue simulation comparing how work-in-progress limits and
//! prioritisation policies affect ticket lead time.
//!
//! # Architecture
//!
//! - **core**: Day clock bounding the horizon
//! - **models**: Domain types (Ticket, Population)
//! - **policy**: The five burn-down strategies
//! - **orchestrator**: Per-policy simulations and the shared day loop
//! - **arrivals**: Random and scripted arrival sources
//! - **stats**: Lead-time aggregation
//! - **rng**: Deterministic random number generation
//!
//! # Critical Invariants
//!
//! 1. All efforts and capacities are whole hours (u32)
//! 2. All randomness is deterministic (seeded RNG, passed explicitly)
//! 3. Every policy sees the identical arrival sequence
//! 4. Tickets are never shared between policies

// Module declarations
pub mod arrivals;
pub mod core;
pub mod models;
pub mod orchestrator;
pub mod policy;
pub mod rng;
pub mod stats;

// Re-exports for convenience
pub use arrivals::{
    ArrivalConfig, ArrivalGenerator, ArrivalSource, DayArrivals, ScriptedArrivals, SeededArrivals,
};
pub use crate::core::time::DayClock;
pub use models::{
    population::{Population, PopulationError},
    ticket::{Ticket, TicketError, TicketId},
};
pub use orchestrator::{
    ConfigError, DayResult, PolicyReport, ReportError, RunReport, Simulation, SimulationConfig,
    SimulationError, SimulationSet, TicketSnapshot,
};
pub use policy::{Allocation, Policy, PolicyConfig};
pub use rng::RngManager;
pub use stats::{LeadTimeStats, StatsError};

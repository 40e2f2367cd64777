//! Orchestrator - main simulation loop
//!
//! Runs every configured policy day by day over one shared arrival sequence.
//!
//! See `engine.rs` for the day loop.

pub mod config;
pub mod engine;
pub mod report;
pub mod simulation;

// Re-export main types for convenience
pub use config::{ConfigError, SimulationConfig};
pub use engine::{DayResult, SimulationError, SimulationSet};
pub use report::{PolicyReport, ReportError, RunReport, TicketSnapshot};
pub use simulation::Simulation;

//! Run Report - Serializable Simulation Results
//!
//! Everything an external reporter needs after a run: the arrival sequence,
//! per-policy lead-time summaries and the full ticket trajectories.
//! Formatting is left to the consumer.
//!
//! # Critical Invariants
//!
//! - **Shared Arrivals**: Every policy report lists the same tickets (same
//!   ids, start days and efforts); only trajectories and lead times differ
//! - **Canonical Order**: Policy reports follow the configured policy order

use super::config::SimulationConfig;
use super::simulation::Simulation;
use crate::arrivals::DayArrivals;
use crate::models::{Ticket, TicketId};
use crate::policy::PolicyConfig;
use crate::stats::LeadTimeStats;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors raised while (de)serialising a report
#[derive(Debug, Error)]
pub enum ReportError {
    #[error("Report serialization failed: {0}")]
    Serialization(#[from] serde_json::Error),
}

// ============================================================================
// Snapshot Structures
// ============================================================================

/// Complete results of a (possibly partial) run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunReport {
    /// Configuration the run was started with
    pub config: SimulationConfig,

    /// Arrivals per simulated day
    pub arrivals: Vec<DayArrivals>,

    /// Mean ticket count per simulated day
    pub mean_arrivals_per_day: f64,

    /// Mean new effort (hours) per simulated day
    pub mean_effort_per_day: f64,

    /// One entry per policy, in configured order
    pub policies: Vec<PolicyReport>,
}

/// Results of one policy
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PolicyReport {
    pub policy: PolicyConfig,

    /// Display name of the policy
    pub name: String,

    /// `None` when the population is empty
    pub stats: Option<LeadTimeStats>,

    /// Tickets whose remaining effort reached zero
    pub completed: usize,

    /// Hours spent over the whole run
    pub total_hours: u64,

    pub tickets: Vec<TicketSnapshot>,
}

/// Ticket state at report time
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TicketSnapshot {
    pub id: TicketId,
    pub start_day: usize,
    pub lead_time: usize,
    pub end_day: Option<usize>,
    pub effort: u32,
    pub remaining_by_day: Vec<u32>,
}

impl From<&Ticket> for TicketSnapshot {
    fn from(ticket: &Ticket) -> Self {
        TicketSnapshot {
            id: ticket.id(),
            start_day: ticket.start_day(),
            lead_time: ticket.lead_time(),
            end_day: ticket.end_day(),
            effort: ticket.effort(),
            remaining_by_day: ticket.remaining_by_day().to_vec(),
        }
    }
}

impl From<&Simulation> for PolicyReport {
    fn from(simulation: &Simulation) -> Self {
        PolicyReport {
            policy: simulation.policy().config(),
            name: simulation.name().to_string(),
            stats: simulation.stats().ok(),
            completed: simulation.population().completed_count(),
            total_hours: simulation.total_hours_spent(),
            tickets: simulation.tickets().iter().map(TicketSnapshot::from).collect(),
        }
    }
}

// ============================================================================
// Serialization
// ============================================================================

impl RunReport {
    /// Serialize to pretty-printed JSON
    pub fn to_json(&self) -> Result<String, ReportError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Deserialize from JSON produced by [`RunReport::to_json`]
    pub fn from_json(json: &str) -> Result<Self, ReportError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Number of tickets that arrived during the run
    pub fn num_tickets(&self) -> usize {
        self.arrivals.iter().map(DayArrivals::count).sum()
    }

    /// Report for `policy`, if it was part of the run
    pub fn policy(&self, policy: PolicyConfig) -> Option<&PolicyReport> {
        self.policies.iter().find(|p| p.policy == policy)
    }

    /// Policy with the smallest `mean + stdev` lead time
    ///
    /// Ties keep the earlier policy. `None` when no policy has statistics.
    pub fn best_policy(&self) -> Option<&PolicyReport> {
        self.policies
            .iter()
            .filter_map(|p| p.stats.map(|s| (p, s.mean_plus_stdev)))
            .fold(None, |best: Option<(&PolicyReport, f64)>, (p, bound)| match best {
                Some((_, best_bound)) if best_bound <= bound => best,
                _ => Some((p, bound)),
            })
            .map(|(p, _)| p)
    }
}

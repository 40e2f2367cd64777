//! Simulation Set Engine
//!
//! Main day loop running every configured policy over one shared arrival
//! sequence:
//!
//! ```text
//! For each day d:
//! 1. Draw today's arrivals once (shared by all policies)
//! 2. Add an independent copy of each new ticket to every simulation
//! 3. If day d + 1 exists, run each simulation's policy for day d
//! 4. Advance the clock
//! ```
//!
//! The last day only receives arrivals: it has no successor slot to carry
//! remaining effort into, so lead times recorded up to then are final.
//!
//! # Example
//!
//! ```rust
//! use wip_simulator_core::orchestrator::{SimulationConfig, SimulationSet};
//!
//! let config = SimulationConfig::with_days(10);
//! let mut set = SimulationSet::new(config).unwrap();
//!
//! while !set.is_finished() {
//!     let result = set.tick().unwrap();
//!     assert!(result.hours_spent.iter().all(|&(_, h)| h <= 8));
//! }
//!
//! let report = set.report();
//! assert_eq!(report.policies.len(), 5);
//! ```

use super::config::{ConfigError, SimulationConfig};
use super::report::{PolicyReport, RunReport};
use super::simulation::Simulation;
use crate::arrivals::{ArrivalSource, DayArrivals, SeededArrivals};
use crate::core::time::DayClock;
use crate::models::{PopulationError, Ticket, TicketError, TicketId};
use crate::policy::PolicyConfig;
use crate::rng::RngManager;
use log::{debug, info, warn};
use thiserror::Error;

/// Simulation error types
#[derive(Debug, Error)]
pub enum SimulationError {
    #[error(transparent)]
    InvalidConfig(#[from] ConfigError),

    #[error("All {days} days have already been simulated")]
    HorizonExhausted { days: usize },

    #[error("Cannot burn down day {day}: no following day within the {horizon}-day horizon")]
    NoNextDay { day: usize, horizon: usize },

    #[error("Arrivals scripted for day {day}, outside the {horizon}-day horizon")]
    ArrivalOutsideHorizon { day: usize, horizon: usize },

    #[error("Ticket arriving on day {day} has effort {effort}, below the minimum of {min_effort}")]
    EffortBelowMinimum {
        day: usize,
        effort: u32,
        min_effort: u32,
    },

    #[error("Ticket creation failed: {0}")]
    Ticket(#[from] TicketError),

    #[error("Population error: {0}")]
    Population(#[from] PopulationError),
}

/// Outcome of simulating one day
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DayResult {
    pub day: usize,

    /// Number of tickets that arrived today
    pub num_arrivals: usize,

    /// Total effort of today's arrivals (hours)
    pub arrival_effort: u64,

    /// False on the last day, which is never burned down
    pub burned_down: bool,

    /// Hours spent today, per policy in configured order
    pub hours_spent: Vec<(PolicyConfig, u32)>,
}

/// All policies run side by side over identical arrivals
///
/// Owns one [`Simulation`] per configured policy. Simulations never share
/// tickets: each day's arrivals are created once and copied into every
/// population.
pub struct SimulationSet {
    config: SimulationConfig,

    clock: DayClock,

    simulations: Vec<Simulation>,

    arrivals: Box<dyn ArrivalSource>,

    /// Arrivals drawn so far, one entry per simulated day
    history: Vec<DayArrivals>,

    /// Today's arrivals when the day failed after they were drawn
    pending: Option<DayArrivals>,

    next_ticket_id: usize,
}

impl SimulationSet {
    /// Create a set drawing random arrivals seeded from `config.rng_seed`
    ///
    /// # Errors
    /// `InvalidConfig` if the configuration fails validation.
    pub fn new(config: SimulationConfig) -> Result<Self, SimulationError> {
        let arrivals = SeededArrivals::new(
            config.arrivals.clone(),
            RngManager::new(config.rng_seed),
        );
        Self::with_arrivals(config, arrivals)
    }

    /// Create a set driven by an arbitrary arrival source
    ///
    /// # Errors
    /// - `InvalidConfig` if the configuration fails validation
    /// - `ArrivalOutsideHorizon` if the source has arrivals past the last day
    pub fn with_arrivals<A>(config: SimulationConfig, arrivals: A) -> Result<Self, SimulationError>
    where
        A: ArrivalSource + 'static,
    {
        config.validate()?;
        if let Some(day) = arrivals.last_day().filter(|&day| day >= config.days) {
            return Err(SimulationError::ArrivalOutsideHorizon {
                day,
                horizon: config.days,
            });
        }

        let simulations = config
            .bound_policies()
            .into_iter()
            .map(|policy| Simulation::new(policy, config.days, config.daily_capacity_hours))
            .collect();

        Ok(Self {
            clock: DayClock::new(config.days),
            history: Vec::with_capacity(config.days),
            pending: None,
            config,
            simulations,
            arrivals: Box::new(arrivals),
            next_ticket_id: 0,
        })
    }

    /// Simulate the current day and advance the clock
    ///
    /// Each day's arrivals are drawn exactly once. If the day fails, the
    /// drawn arrivals are kept and a later `tick` replays them.
    ///
    /// # Errors
    /// - `HorizonExhausted` once every day has been simulated
    /// - `EffortBelowMinimum` if the arrival source yields a too-small effort
    pub fn tick(&mut self) -> Result<DayResult, SimulationError> {
        if self.clock.is_finished() {
            return Err(SimulationError::HorizonExhausted {
                days: self.clock.total_days(),
            });
        }
        let day = self.clock.current_day();

        // STEP 1: ARRIVALS
        let arrivals = match self.pending.take() {
            Some(pending) if pending.day == day => pending,
            _ => DayArrivals {
                day,
                efforts: self.arrivals.arrivals_for_day(day),
            },
        };
        let tickets = match self.create_tickets(day, &arrivals.efforts) {
            Ok(tickets) => tickets,
            Err(e) => {
                self.pending = Some(arrivals);
                return Err(e);
            }
        };

        // STEP 2: FAN OUT
        for simulation in &mut self.simulations {
            simulation.add_tickets(&tickets)?;
        }

        // STEP 3: BURN DOWN
        let burned_down = self.clock.has_next_day();
        let mut hours_spent = Vec::with_capacity(self.simulations.len());
        if burned_down {
            for simulation in &mut self.simulations {
                let allocation = simulation.burn_down(day)?;
                debug!(
                    "day {}: {} spent {}h on {} tickets, {}h left",
                    day,
                    simulation.name(),
                    allocation.total(),
                    allocation.tickets_worked(),
                    simulation.population().total_remaining_on(day + 1)
                );
                hours_spent.push((simulation.policy().config(), allocation.total()));
            }
        }

        debug!(
            "day {}: {} arrivals, {}h effort, {} days to go",
            day,
            arrivals.count(),
            arrivals.total_effort(),
            self.clock.remaining_days() - 1
        );

        let result = DayResult {
            day,
            num_arrivals: arrivals.count(),
            arrival_effort: arrivals.total_effort(),
            burned_down,
            hours_spent,
        };

        self.history.push(arrivals);
        self.clock.advance_day();

        if self.clock.is_finished() {
            self.log_summary();
        }

        Ok(result)
    }

    /// Simulate all remaining days and build the report
    pub fn run(&mut self) -> Result<RunReport, SimulationError> {
        while !self.clock.is_finished() {
            self.tick()?;
        }
        Ok(self.report())
    }

    /// Snapshot of the run so far
    pub fn report(&self) -> RunReport {
        RunReport {
            config: self.config.clone(),
            arrivals: self.history.clone(),
            mean_arrivals_per_day: self.mean_arrivals_per_day(),
            mean_effort_per_day: self.mean_effort_per_day(),
            policies: self.simulations.iter().map(PolicyReport::from).collect(),
        }
    }

    // Accessors

    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }

    pub fn current_day(&self) -> usize {
        self.clock.current_day()
    }

    pub fn is_finished(&self) -> bool {
        self.clock.is_finished()
    }

    pub fn simulations(&self) -> &[Simulation] {
        &self.simulations
    }

    pub fn simulation(&self, policy: PolicyConfig) -> Option<&Simulation> {
        self.simulations
            .iter()
            .find(|s| s.policy().config() == policy)
    }

    /// Arrivals drawn so far, indexed by day
    pub fn arrivals(&self) -> &[DayArrivals] {
        &self.history
    }

    /// Mean ticket count per simulated day
    pub fn mean_arrivals_per_day(&self) -> f64 {
        if self.history.is_empty() {
            return 0.0;
        }
        let total: usize = self.history.iter().map(DayArrivals::count).sum();
        total as f64 / self.history.len() as f64
    }

    /// Mean new effort (hours) per simulated day
    pub fn mean_effort_per_day(&self) -> f64 {
        if self.history.is_empty() {
            return 0.0;
        }
        let total: u64 = self.history.iter().map(DayArrivals::total_effort).sum();
        total as f64 / self.history.len() as f64
    }

    // Internals

    fn create_tickets(
        &mut self,
        day: usize,
        efforts: &[u32],
    ) -> Result<Vec<Ticket>, SimulationError> {
        let min_effort = self.config.arrivals.min_effort;
        if let Some(&effort) = efforts.iter().find(|&&e| e < min_effort) {
            return Err(SimulationError::EffortBelowMinimum {
                day,
                effort,
                min_effort,
            });
        }

        let mut tickets = Vec::with_capacity(efforts.len());
        for &effort in efforts {
            tickets.push(Ticket::new(
                TicketId(self.next_ticket_id),
                day,
                effort,
                self.config.days,
            )?);
            self.next_ticket_id += 1;
        }
        Ok(tickets)
    }

    fn log_summary(&self) {
        info!(
            "simulated {} days: {:.2} tickets/day, {:.2}h effort/day",
            self.history.len(),
            self.mean_arrivals_per_day(),
            self.mean_effort_per_day()
        );
        for simulation in &self.simulations {
            match simulation.stats() {
                Ok(stats) => info!("{}: {}", simulation.name(), stats),
                Err(e) => warn!("{}: {}", simulation.name(), e),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::arrivals::ScriptedArrivals;

    fn scripted(days: usize, pairs: &[(usize, u32)]) -> SimulationSet {
        SimulationSet::with_arrivals(
            SimulationConfig::with_days(days),
            ScriptedArrivals::new(pairs.iter().copied()),
        )
        .unwrap()
    }

    #[test]
    fn test_invalid_config_rejected() {
        let result = SimulationSet::new(SimulationConfig::with_days(0));
        assert!(matches!(
            result,
            Err(SimulationError::InvalidConfig(ConfigError::ZeroDays))
        ));
    }

    #[test]
    fn test_last_day_is_not_burned_down() {
        let mut set = scripted(2, &[(0, 3), (1, 4)]);

        let first = set.tick().unwrap();
        assert!(first.burned_down);
        assert_eq!(first.hours_spent.len(), 5);

        let last = set.tick().unwrap();
        assert!(!last.burned_down);
        assert!(last.hours_spent.is_empty());
        assert!(set.is_finished());
    }

    #[test]
    fn test_tick_after_horizon_fails() {
        let mut set = scripted(1, &[]);
        set.tick().unwrap();
        assert!(matches!(
            set.tick(),
            Err(SimulationError::HorizonExhausted { days: 1 })
        ));
    }

    #[test]
    fn test_effort_below_minimum_rejected() {
        let mut config = SimulationConfig::with_days(3);
        config.arrivals.min_effort = 2;
        let mut set =
            SimulationSet::with_arrivals(config, ScriptedArrivals::new([(0, 1)])).unwrap();

        assert!(matches!(
            set.tick(),
            Err(SimulationError::EffortBelowMinimum {
                day: 0,
                effort: 1,
                min_effort: 2
            })
        ));
    }

    #[test]
    fn test_ticket_ids_are_global_arrival_order() {
        let mut set = scripted(3, &[(0, 3), (0, 4), (1, 5)]);
        set.run().unwrap();

        for simulation in set.simulations() {
            let ids: Vec<_> = simulation.tickets().iter().map(|t| t.id()).collect();
            assert_eq!(ids, vec![TicketId(0), TicketId(1), TicketId(2)]);
        }
    }

    #[test]
    fn test_arrival_means() {
        let mut set = scripted(4, &[(0, 3), (0, 5), (2, 4)]);
        set.run().unwrap();

        assert_eq!(set.mean_arrivals_per_day(), 0.75);
        assert_eq!(set.mean_effort_per_day(), 3.0);
    }
}

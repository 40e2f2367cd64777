//! One policy's simulation
//!
//! Owns an independent population of tickets and runs its policy's
//! burn-down step once per day.

use super::engine::SimulationError;
use crate::models::{Population, PopulationError, Ticket};
use crate::policy::{Allocation, Policy};
use crate::stats::{lead_time_stats, LeadTimeStats, StatsError};

/// A policy together with the tickets it schedules
#[derive(Debug, Clone)]
pub struct Simulation {
    policy: Policy,

    population: Population,

    daily_capacity_hours: u32,

    /// Hours spent on each day that was burned down
    hours_by_day: Vec<u32>,
}

impl Simulation {
    pub fn new(policy: Policy, horizon: usize, daily_capacity_hours: u32) -> Self {
        Self {
            policy,
            population: Population::new(horizon),
            daily_capacity_hours,
            hours_by_day: vec![0; horizon],
        }
    }

    /// Add copies of today's new tickets
    pub fn add_tickets(&mut self, arrivals: &[Ticket]) -> Result<(), PopulationError> {
        self.population.add_tickets(arrivals)
    }

    /// Run the policy for `day`
    ///
    /// # Errors
    /// `NoNextDay` when `day` is the last day of the horizon (or beyond):
    /// there is no slot to carry remaining effort into.
    pub fn burn_down(&mut self, day: usize) -> Result<Allocation, SimulationError> {
        let horizon = self.population.horizon();
        if day + 1 >= horizon {
            return Err(SimulationError::NoNextDay { day, horizon });
        }

        let allocation = self.policy.allocate(
            day,
            self.population.tickets_mut(),
            self.daily_capacity_hours,
        );
        self.hours_by_day[day] = allocation.total();
        Ok(allocation)
    }

    /// Lead-time summary over every ticket
    pub fn stats(&self) -> Result<LeadTimeStats, StatsError> {
        lead_time_stats(self.population.iter())
    }

    pub fn policy(&self) -> Policy {
        self.policy
    }

    pub fn name(&self) -> &'static str {
        self.policy.name()
    }

    pub fn population(&self) -> &Population {
        &self.population
    }

    pub fn tickets(&self) -> &[Ticket] {
        self.population.tickets()
    }

    /// Hours spent on `day` (zero for days not burned down)
    pub fn hours_spent_on(&self, day: usize) -> u32 {
        self.hours_by_day.get(day).copied().unwrap_or(0)
    }

    pub fn hours_by_day(&self) -> &[u32] {
        &self.hours_by_day
    }

    pub fn total_hours_spent(&self) -> u64 {
        self.hours_by_day.iter().map(|&h| h as u64).sum()
    }

    /// Tickets with nonzero remaining effort on `day`
    pub fn wip_on(&self, day: usize) -> usize {
        self.population.wip_on(day)
    }
}

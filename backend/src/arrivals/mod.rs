//! Arrival generation module for deterministic ticket creation.
//!
//! Produces, for every simulated day, the efforts of the tickets arriving
//! that day. The simulation core consumes nothing but this sequence of
//! `(day, effort)` pairs, so any [`ArrivalSource`] can drive it.
//!
//! # Key Principles
//!
//! 1. **Determinism**: Same seed + same config → same arrivals
//! 2. **Explicit RNG**: The generator never owns hidden global state; the
//!    `RngManager` is passed in by the caller
//! 3. **Shared Sequence**: A day's arrivals are drawn once and replayed to
//!    every policy
//!
//! # Example
//!
//! ```
//! use wip_simulator_core::arrivals::{ArrivalConfig, ArrivalGenerator};
//! use wip_simulator_core::rng::RngManager;
//!
//! let generator = ArrivalGenerator::new(ArrivalConfig::default());
//! let mut rng = RngManager::new(42);
//!
//! let day0 = generator.generate_day(0, &mut rng);
//! assert!(day0.efforts.iter().all(|&e| e >= 1));
//! ```

use crate::rng::RngManager;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Distribution parameters for ticket arrivals
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ArrivalConfig {
    /// Mean number of new tickets per day
    pub mean_arrivals_per_day: f64,

    /// Standard deviation of new tickets per day
    pub stddev_arrivals_per_day: f64,

    /// Mean ticket effort in hours
    pub mean_effort: f64,

    /// Standard deviation of ticket effort in hours
    pub stddev_effort: f64,

    /// Lower bound applied to every sampled effort
    pub min_effort: u32,
}

impl Default for ArrivalConfig {
    fn default() -> Self {
        Self {
            mean_arrivals_per_day: 1.0,
            stddev_arrivals_per_day: 1.0,
            mean_effort: 6.0,
            stddev_effort: 4.0,
            min_effort: 1,
        }
    }
}

/// Tickets arriving on one day
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayArrivals {
    pub day: usize,

    /// Effort of each new ticket, in arrival order
    pub efforts: Vec<u32>,
}

impl DayArrivals {
    pub fn count(&self) -> usize {
        self.efforts.len()
    }

    pub fn total_effort(&self) -> u64 {
        self.efforts.iter().map(|&e| e as u64).sum()
    }
}

/// Anything that can supply the efforts of a day's new tickets
///
/// Called exactly once per day, in increasing day order.
pub trait ArrivalSource {
    fn arrivals_for_day(&mut self, day: usize) -> Vec<u32>;

    /// Last day this source has arrivals for, when known up front
    ///
    /// Unbounded sources return `None`.
    fn last_day(&self) -> Option<usize> {
        None
    }
}

/// Random arrivals from normal distributions
#[derive(Debug, Clone)]
pub struct ArrivalGenerator {
    config: ArrivalConfig,
}

impl ArrivalGenerator {
    pub fn new(config: ArrivalConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ArrivalConfig {
        &self.config
    }

    /// Draw one day's arrivals
    ///
    /// The count is sampled first (rounded, floored at 0), then one effort
    /// per ticket (rounded, floored at `min_effort`).
    pub fn generate_day(&self, day: usize, rng: &mut RngManager) -> DayArrivals {
        let count = rng.normal_int(
            self.config.mean_arrivals_per_day,
            self.config.stddev_arrivals_per_day,
            0,
        );

        let efforts = (0..count)
            .map(|_| {
                rng.normal_int(
                    self.config.mean_effort,
                    self.config.stddev_effort,
                    self.config.min_effort,
                )
            })
            .collect();

        DayArrivals { day, efforts }
    }
}

/// A generator paired with the RNG it draws from
#[derive(Debug, Clone)]
pub struct SeededArrivals {
    generator: ArrivalGenerator,
    rng: RngManager,
}

impl SeededArrivals {
    pub fn new(config: ArrivalConfig, rng: RngManager) -> Self {
        Self {
            generator: ArrivalGenerator::new(config),
            rng,
        }
    }

    pub fn rng(&self) -> &RngManager {
        &self.rng
    }
}

impl ArrivalSource for SeededArrivals {
    fn arrivals_for_day(&mut self, day: usize) -> Vec<u32> {
        self.generator.generate_day(day, &mut self.rng).efforts
    }
}

/// Fixed arrivals given as `(day, effort)` pairs
///
/// Pairs for the same day keep their given order. Days without pairs
/// have no arrivals.
///
/// # Example
///
/// ```
/// use wip_simulator_core::arrivals::{ArrivalSource, ScriptedArrivals};
///
/// let mut arrivals = ScriptedArrivals::new([(0, 5), (0, 10), (2, 3)]);
/// assert_eq!(arrivals.arrivals_for_day(0), vec![5, 10]);
/// assert!(arrivals.arrivals_for_day(1).is_empty());
/// assert_eq!(arrivals.arrivals_for_day(2), vec![3]);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScriptedArrivals {
    by_day: BTreeMap<usize, Vec<u32>>,
}

impl ScriptedArrivals {
    pub fn new<I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (usize, u32)>,
    {
        let mut by_day: BTreeMap<usize, Vec<u32>> = BTreeMap::new();
        for (day, effort) in pairs {
            by_day.entry(day).or_default().push(effort);
        }
        Self { by_day }
    }
}

impl ArrivalSource for ScriptedArrivals {
    fn arrivals_for_day(&mut self, day: usize) -> Vec<u32> {
        self.by_day.get(&day).cloned().unwrap_or_default()
    }

    fn last_day(&self) -> Option<usize> {
        self.by_day.keys().next_back().copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_matches_documented_values() {
        let config = ArrivalConfig::default();
        assert_eq!(config.mean_arrivals_per_day, 1.0);
        assert_eq!(config.stddev_arrivals_per_day, 1.0);
        assert_eq!(config.mean_effort, 6.0);
        assert_eq!(config.stddev_effort, 4.0);
        assert_eq!(config.min_effort, 1);
    }

    #[test]
    fn test_generate_day_deterministic() {
        let generator = ArrivalGenerator::new(ArrivalConfig::default());

        let mut rng1 = RngManager::new(42);
        let mut rng2 = RngManager::new(42);

        for day in 0..50 {
            assert_eq!(
                generator.generate_day(day, &mut rng1),
                generator.generate_day(day, &mut rng2)
            );
        }
    }

    #[test]
    fn test_efforts_respect_minimum() {
        let generator = ArrivalGenerator::new(ArrivalConfig {
            mean_arrivals_per_day: 5.0,
            stddev_arrivals_per_day: 2.0,
            mean_effort: 1.0,
            stddev_effort: 5.0,
            min_effort: 2,
        });
        let mut rng = RngManager::new(7);

        for day in 0..100 {
            let arrivals = generator.generate_day(day, &mut rng);
            assert!(arrivals.efforts.iter().all(|&e| e >= 2));
        }
    }

    #[test]
    fn test_zero_mean_zero_stddev_produces_no_arrivals() {
        let generator = ArrivalGenerator::new(ArrivalConfig {
            mean_arrivals_per_day: 0.0,
            stddev_arrivals_per_day: 0.0,
            ..ArrivalConfig::default()
        });
        let mut rng = RngManager::new(1);

        for day in 0..20 {
            assert_eq!(generator.generate_day(day, &mut rng).count(), 0);
        }
    }

    #[test]
    fn test_fixed_count_without_spread() {
        let generator = ArrivalGenerator::new(ArrivalConfig {
            mean_arrivals_per_day: 3.0,
            stddev_arrivals_per_day: 0.0,
            mean_effort: 4.0,
            stddev_effort: 0.0,
            min_effort: 1,
        });
        let mut rng = RngManager::new(1);

        let arrivals = generator.generate_day(0, &mut rng);
        assert_eq!(arrivals.efforts, vec![4, 4, 4]);
        assert_eq!(arrivals.total_effort(), 12);
    }

    #[test]
    fn test_seeded_arrivals_match_generator() {
        let config = ArrivalConfig::default();
        let generator = ArrivalGenerator::new(config.clone());
        let mut rng = RngManager::new(9);
        let mut source = SeededArrivals::new(config, RngManager::new(9));

        for day in 0..10 {
            assert_eq!(
                source.arrivals_for_day(day),
                generator.generate_day(day, &mut rng).efforts
            );
        }
        assert_eq!(source.rng(), &rng);
    }

    #[test]
    fn test_scripted_last_day() {
        assert_eq!(ScriptedArrivals::new([(3, 1), (1, 2)]).last_day(), Some(3));
        assert_eq!(ScriptedArrivals::default().last_day(), None);
    }

    #[test]
    fn test_seeded_arrivals_are_unbounded() {
        let source = SeededArrivals::new(ArrivalConfig::default(), RngManager::new(1));
        assert_eq!(source.last_day(), None);
    }
}

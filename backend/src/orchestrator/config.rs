//! Run configuration
//!
//! All parameters needed to initialise a simulation set, with the defaults
//! used for a detailed 20-day trace.

use crate::arrivals::ArrivalConfig;
use crate::policy::{Policy, PolicyConfig};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use thiserror::Error;

/// Configuration validation errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid config: days must be positive")]
    ZeroDays,

    #[error("Invalid config: daily_capacity_hours must be positive")]
    ZeroCapacity,

    #[error("Invalid config: wip_cap_hours_per_ticket must be positive")]
    ZeroWipCap,

    #[error("Invalid config: min_effort must be positive")]
    ZeroMinEffort,

    #[error("Invalid config: {field} must be finite and non-negative, got {value}")]
    InvalidDistribution { field: &'static str, value: f64 },

    #[error("Invalid config: at least one policy is required")]
    NoPolicies,

    #[error("Invalid config: policy '{0}' listed more than once")]
    DuplicatePolicy(PolicyConfig),

    #[error("Invalid config: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Complete simulation configuration
///
/// # Fields
///
/// * `days` - Simulation horizon; burn-down runs on every day but the last
/// * `rng_seed` - Seed for the arrival sequence
/// * `daily_capacity_hours` - Hours of work available per day
/// * `wip_cap_hours_per_ticket` - First-pass cap of the equal-working policy
/// * `arrivals` - Distribution parameters for new tickets
/// * `policies` - Policies to compare, in reporting order
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    pub days: usize,

    pub rng_seed: u64,

    pub daily_capacity_hours: u32,

    pub wip_cap_hours_per_ticket: u32,

    pub arrivals: ArrivalConfig,

    pub policies: Vec<PolicyConfig>,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            days: 20,
            rng_seed: 42,
            daily_capacity_hours: 8,
            wip_cap_hours_per_ticket: 2,
            arrivals: ArrivalConfig::default(),
            policies: PolicyConfig::ALL.to_vec(),
        }
    }
}

impl SimulationConfig {
    /// Default configuration with a different horizon
    pub fn with_days(days: usize) -> Self {
        Self {
            days,
            ..Self::default()
        }
    }

    /// Parse and validate a JSON configuration
    ///
    /// Missing fields take their default values.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Reject configurations that cannot be simulated
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.days == 0 {
            return Err(ConfigError::ZeroDays);
        }
        if self.daily_capacity_hours == 0 {
            return Err(ConfigError::ZeroCapacity);
        }
        if self.wip_cap_hours_per_ticket == 0 {
            return Err(ConfigError::ZeroWipCap);
        }
        if self.arrivals.min_effort == 0 {
            return Err(ConfigError::ZeroMinEffort);
        }

        let distribution = [
            ("mean_arrivals_per_day", self.arrivals.mean_arrivals_per_day),
            ("stddev_arrivals_per_day", self.arrivals.stddev_arrivals_per_day),
            ("mean_effort", self.arrivals.mean_effort),
            ("stddev_effort", self.arrivals.stddev_effort),
        ];
        for (field, value) in distribution {
            if !value.is_finite() || value < 0.0 {
                return Err(ConfigError::InvalidDistribution { field, value });
            }
        }

        if self.policies.is_empty() {
            return Err(ConfigError::NoPolicies);
        }
        let mut seen = HashSet::new();
        for &policy in &self.policies {
            if !seen.insert(policy) {
                return Err(ConfigError::DuplicatePolicy(policy));
            }
        }

        Ok(())
    }

    /// Configured policies with their parameters bound
    pub fn bound_policies(&self) -> Vec<Policy> {
        self.policies
            .iter()
            .map(|&p| Policy::from_config(p, self.wip_cap_hours_per_ticket))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        assert!(SimulationConfig::default().validate().is_ok());
    }

    #[test]
    fn test_default_binds_all_policies() {
        let policies = SimulationConfig::default().bound_policies();
        assert_eq!(policies.len(), 5);
        assert_eq!(policies[0], Policy::EqualWorking { wip_cap: 2 });
    }

    #[test]
    fn test_nan_distribution_rejected() {
        let mut config = SimulationConfig::default();
        config.arrivals.mean_effort = f64::NAN;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidDistribution {
                field: "mean_effort",
                ..
            })
        ));
    }
}

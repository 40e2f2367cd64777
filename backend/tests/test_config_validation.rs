//! Configuration parsing and validation

use wip_simulator_core::{
    ConfigError, PolicyConfig, SimulationConfig, SimulationError, SimulationSet,
};

#[test]
fn test_defaults() {
    let config = SimulationConfig::default();
    assert_eq!(config.days, 20);
    assert_eq!(config.rng_seed, 42);
    assert_eq!(config.daily_capacity_hours, 8);
    assert_eq!(config.wip_cap_hours_per_ticket, 2);
    assert_eq!(config.policies, PolicyConfig::ALL.to_vec());
}

#[test]
fn test_empty_json_yields_defaults() {
    let config = SimulationConfig::from_json("{}").unwrap();
    assert_eq!(config, SimulationConfig::default());
}

#[test]
fn test_partial_json_overrides_fields() {
    let json = r#"{
        "days": 100,
        "rng_seed": 7,
        "arrivals": { "mean_effort": 3.5 },
        "policies": ["shortest_first", "age_weighted_shortest_first"]
    }"#;
    let config = SimulationConfig::from_json(json).unwrap();

    assert_eq!(config.days, 100);
    assert_eq!(config.rng_seed, 7);
    assert_eq!(config.daily_capacity_hours, 8);
    assert_eq!(config.arrivals.mean_effort, 3.5);
    assert_eq!(config.arrivals.stddev_effort, 4.0);
    assert_eq!(
        config.policies,
        vec![
            PolicyConfig::ShortestFirst,
            PolicyConfig::AgeWeightedShortestFirst
        ]
    );
}

#[test]
fn test_malformed_json_rejected() {
    assert!(matches!(
        SimulationConfig::from_json("{ days: "),
        Err(ConfigError::Parse(_))
    ));
    assert!(matches!(
        SimulationConfig::from_json(r#"{ "policies": ["round_robin"] }"#),
        Err(ConfigError::Parse(_))
    ));
}

#[test]
fn test_zero_values_rejected() {
    assert!(matches!(
        SimulationConfig::with_days(0).validate(),
        Err(ConfigError::ZeroDays)
    ));

    let no_capacity = SimulationConfig {
        daily_capacity_hours: 0,
        ..SimulationConfig::default()
    };
    assert!(matches!(
        no_capacity.validate(),
        Err(ConfigError::ZeroCapacity)
    ));

    let no_cap = SimulationConfig {
        wip_cap_hours_per_ticket: 0,
        ..SimulationConfig::default()
    };
    assert!(matches!(no_cap.validate(), Err(ConfigError::ZeroWipCap)));

    let mut config = SimulationConfig::default();
    config.arrivals.min_effort = 0;
    assert!(matches!(config.validate(), Err(ConfigError::ZeroMinEffort)));
}

#[test]
fn test_negative_distribution_rejected() {
    let mut config = SimulationConfig::default();
    config.arrivals.stddev_arrivals_per_day = -1.0;

    assert!(matches!(
        config.validate(),
        Err(ConfigError::InvalidDistribution {
            field: "stddev_arrivals_per_day",
            ..
        })
    ));
}

#[test]
fn test_policy_list_rules() {
    let empty = SimulationConfig {
        policies: Vec::new(),
        ..SimulationConfig::default()
    };
    assert!(matches!(empty.validate(), Err(ConfigError::NoPolicies)));

    let duplicate = SimulationConfig {
        policies: vec![
            PolicyConfig::OldestFirst,
            PolicyConfig::ShortestFirst,
            PolicyConfig::OldestFirst,
        ],
        ..SimulationConfig::default()
    };
    assert!(matches!(
        duplicate.validate(),
        Err(ConfigError::DuplicatePolicy(PolicyConfig::OldestFirst))
    ));
}

#[test]
fn test_simulation_set_validates_config() {
    let config = SimulationConfig {
        daily_capacity_hours: 0,
        ..SimulationConfig::default()
    };
    let err = SimulationSet::new(config).err().unwrap();

    assert!(matches!(
        err,
        SimulationError::InvalidConfig(ConfigError::ZeroCapacity)
    ));
    assert_eq!(
        err.to_string(),
        "Invalid config: daily_capacity_hours must be positive"
    );
}

#[test]
fn test_config_roundtrips_through_json() {
    let config = SimulationConfig {
        days: 250,
        rng_seed: 99,
        ..SimulationConfig::default()
    };
    let json = serde_json::to_string(&config).unwrap();
    assert_eq!(SimulationConfig::from_json(&json).unwrap(), config);
}

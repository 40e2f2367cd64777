//! `wipsim` - compare WIP and prioritisation policies on ticket lead time

mod args;
mod format;

use args::Args;
use clap::Parser;
use format::TextReport;
use log::info;
use std::process::ExitCode;
use wip_simulator_core::{SimulationConfig, SimulationSet};

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"))
        .format_timestamp(None)
        .init();

    match run(Args::parse()) {
        Ok(output) => {
            print!("{}", output);
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(args: Args) -> Result<String, Box<dyn std::error::Error>> {
    let mut config = match &args.config {
        Some(path) => {
            info!("loading configuration from {}", path.display());
            SimulationConfig::from_json(&std::fs::read_to_string(path)?)?
        }
        None => SimulationConfig::default(),
    };
    if let Some(days) = args.days {
        config.days = days;
    }
    if let Some(seed) = args.seed {
        config.rng_seed = seed;
    }

    let mut set = SimulationSet::new(config)?;
    let report = set.run()?;

    if args.json {
        Ok(report.to_json()? + "\n")
    } else {
        Ok(TextReport(&report).to_string())
    }
}

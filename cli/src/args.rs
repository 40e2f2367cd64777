//! Command-line arguments

use clap::Parser;
use std::path::PathBuf;

/// Compare WIP and prioritisation policies on ticket lead time
#[derive(Parser, Debug, Default, PartialEq, Eq)]
#[command(name = "wipsim")]
#[command(about = "Simulate ticket arrivals and compare burn-down policies", long_about = None)]
pub struct Args {
    /// Number of days to simulate (overrides the configured horizon)
    pub days: Option<usize>,

    /// Seed for the arrival sequence (overrides the configured seed)
    #[arg(long)]
    pub seed: Option<u64>,

    /// JSON configuration file
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Emit the report as JSON instead of text
    #[arg(long)]
    pub json: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::error::ErrorKind;

    fn parse(args: &[&str]) -> Result<Args, clap::Error> {
        Args::try_parse_from(std::iter::once("wipsim").chain(args.iter().copied()))
    }

    #[test]
    fn test_no_arguments_uses_defaults() {
        assert_eq!(parse(&[]).unwrap(), Args::default());
    }

    #[test]
    fn test_days_and_flags() {
        let args = parse(&["100", "--seed", "7", "--json"]).unwrap();
        assert_eq!(args.days, Some(100));
        assert_eq!(args.seed, Some(7));
        assert!(args.json);
    }

    #[test]
    fn test_config_path() {
        let args = parse(&["--config", "run.json"]).unwrap();
        assert_eq!(args.config, Some(PathBuf::from("run.json")));
    }

    #[test]
    fn test_bad_days_rejected() {
        assert_eq!(parse(&["ten"]).unwrap_err().kind(), ErrorKind::ValueValidation);
        assert!(parse(&["-5"]).is_err());
    }

    #[test]
    fn test_second_positional_rejected() {
        assert_eq!(
            parse(&["10", "20"]).unwrap_err().kind(),
            ErrorKind::UnknownArgument
        );
    }

    #[test]
    fn test_missing_seed_value() {
        assert!(parse(&["--seed"]).is_err());
    }

    #[test]
    fn test_usage_errors_exit_with_code_two() {
        assert_eq!(parse(&["--bogus"]).unwrap_err().exit_code(), 2);
    }
}

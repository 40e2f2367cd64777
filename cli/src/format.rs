//! Text rendering of a run report
//!
//! Small runs are printed in full: every arrival and every ticket
//! trajectory. Larger runs only get the per-policy summary lines.

use std::fmt;
use wip_simulator_core::{PolicyReport, RunReport, TicketSnapshot};

/// Above this many days (or tickets) details are omitted
pub const MAX_DETAIL: usize = 20;

/// Text view of a finished run
pub struct TextReport<'a>(pub &'a RunReport);

impl fmt::Display for TextReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let report = self.0;
        let days = report.config.days;

        writeln!(f, "Simulating {} days", days)?;
        if days <= MAX_DETAIL {
            writeln!(f, "day, count, effort, ticket{{start effort}}")?;
            let mut next_id = 0;
            for arrivals in &report.arrivals {
                if arrivals.efforts.is_empty() {
                    writeln!(f, "{} 0", arrivals.day)?;
                }
                for &effort in &arrivals.efforts {
                    writeln!(
                        f,
                        "{} {} {} #{}{{{} {}}}",
                        arrivals.day,
                        arrivals.count(),
                        effort,
                        next_id,
                        arrivals.day,
                        effort
                    )?;
                    next_id += 1;
                }
            }
        }

        writeln!(f)?;
        writeln!(f, "mean ticket count per day: {}", report.mean_arrivals_per_day)?;
        writeln!(f, "mean ticket effort per day: {}", report.mean_effort_per_day)?;
        writeln!(f)?;

        for policy in &report.policies {
            write_policy(f, policy)?;
            writeln!(f)?;
        }

        Ok(())
    }
}

fn write_policy(f: &mut fmt::Formatter<'_>, policy: &PolicyReport) -> fmt::Result {
    writeln!(f, "{}", policy.name)?;
    match &policy.stats {
        Some(stats) => writeln!(f, "{}", stats)?,
        None => writeln!(f, "Leadtime of tickets undefined: no tickets")?,
    }
    writeln!(
        f,
        "completed {} of {} tickets, {}h worked",
        policy.completed,
        policy.tickets.len(),
        policy.total_hours
    )?;

    if !policy.tickets.is_empty() && policy.tickets.len() <= MAX_DETAIL {
        writeln!(f, "# start leadtime end effort [remaining per day]")?;
        for (i, ticket) in policy.tickets.iter().enumerate() {
            writeln!(f, "{} {}", i, TicketLine(ticket))?;
        }
    }
    Ok(())
}

struct TicketLine<'a>(&'a TicketSnapshot);

impl fmt::Display for TicketLine<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let ticket = self.0;
        write!(f, "{{{} {} ", ticket.start_day, ticket.lead_time)?;
        match ticket.end_day {
            Some(day) => write!(f, "{}", day)?,
            None => f.write_str("-")?,
        }
        write!(f, " {} [", ticket.effort)?;
        for (i, remaining) in ticket.remaining_by_day.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{}", remaining)?;
        }
        f.write_str("]}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wip_simulator_core::{ScriptedArrivals, SimulationConfig, SimulationSet};

    fn small_report() -> RunReport {
        let mut set = SimulationSet::with_arrivals(
            SimulationConfig::with_days(3),
            ScriptedArrivals::new([(0, 5), (0, 10)]),
        )
        .unwrap();
        set.run().unwrap()
    }

    #[test]
    fn test_small_report_includes_ticket_detail() {
        let text = TextReport(&small_report()).to_string();

        assert!(text.starts_with("Simulating 3 days\n"));
        assert!(text.contains("Shortest first\n"));
        assert!(text.contains("# start leadtime end effort [remaining per day]"));
        // SJF: ticket 0 done on day 0, ticket 1 on day 1
        assert!(text.contains("0 {0 1 0 5 [5 0 0]}"));
        assert!(text.contains("1 {0 2 1 10 [10 7 0]}"));
    }

    #[test]
    fn test_empty_policy_reports_no_data() {
        let mut set = SimulationSet::with_arrivals(
            SimulationConfig::with_days(2),
            ScriptedArrivals::default(),
        )
        .unwrap();
        let report = set.run().unwrap();
        let text = TextReport(&report).to_string();

        assert!(text.contains("Leadtime of tickets undefined: no tickets"));
        assert!(!text.contains("# start leadtime"));
    }

    #[test]
    fn test_unworked_ticket_shows_no_end_day() {
        let mut set = SimulationSet::with_arrivals(
            SimulationConfig::with_days(2),
            ScriptedArrivals::new([(1, 4)]),
        )
        .unwrap();
        let report = set.run().unwrap();
        let text = TextReport(&report).to_string();

        assert!(text.contains("0 {1 0 - 4 [0 4]}"));
    }
}

//! `summary` command

use std::collections::BTreeMap;
use std::path::Path;

use bullseye::{BullseyeConfig, CoarseBand, EngagementLevel, Roster};
use chrono::{DateTime, Utc};
use colored::{ColoredString, Colorize};
use serde::Serialize;

use super::{load_roster, SummaryFormat};

/// Counts reported by `summary --format json`
#[derive(Debug, Serialize)]
pub struct RosterSummary {
    pub classified_at: DateTime<Utc>,
    pub total: usize,
    pub levels: BTreeMap<EngagementLevel, usize>,
    pub bands: BTreeMap<CoarseBand, usize>,
}

impl RosterSummary {
    pub fn of(roster: &Roster) -> Self {
        Self {
            classified_at: roster.classified_at(),
            total: roster.len(),
            levels: roster.level_counts(),
            bands: roster.band_counts(),
        }
    }
}

fn band_colored(band: CoarseBand, text: &str) -> ColoredString {
    match band {
        CoarseBand::Outsider => text.dimmed(),
        CoarseBand::Newcomer => text.bright_blue(),
        CoarseBand::Explorer => text.blue(),
        CoarseBand::Practitioner => text.bright_magenta(),
    }
}

pub fn cmd_summary(
    config: &BullseyeConfig,
    input: Option<&Path>,
    format: SummaryFormat,
) -> anyhow::Result<()> {
    let roster = load_roster(config, input)?;
    let summary = RosterSummary::of(&roster);

    match format {
        SummaryFormat::Json => println!("{}", serde_json::to_string_pretty(&summary)?),
        SummaryFormat::Text => display_summary(&summary),
    }
    Ok(())
}

fn display_summary(summary: &RosterSummary) {
    println!("{}", "AI Engagement Summary".bright_cyan().bold());
    println!(
        "{} members, classified at {}",
        summary.total.to_string().bold(),
        summary.classified_at.format("%Y-%m-%d %H:%M UTC")
    );
    println!("{}", "─".repeat(44).dimmed());

    for band in CoarseBand::all() {
        let count = summary.bands.get(&band).copied().unwrap_or(0);
        println!(
            "{:<14} {:>5}  {}",
            band_colored(band, band.label()).bold(),
            count,
            percent(count, summary.total).dimmed()
        );
        for level in EngagementLevel::all()
            .into_iter()
            .filter(|l| l.coarse_band() == band)
        {
            let n = summary.levels.get(&level).copied().unwrap_or(0);
            println!("  {:<22} {:>5}", level.label(), n);
        }
    }
}

fn percent(count: usize, total: usize) -> String {
    if total == 0 {
        return "-".to_string();
    }
    format!("{:.1}%", count as f64 * 100.0 / total as f64)
}

#[cfg(test)]
mod tests {
    use super::*;
    use bullseye::RosterGenerator;
    use chrono::TimeZone;

    #[test]
    fn test_summary_totals_match() {
        let now = Utc.with_ymd_and_hms(2025, 6, 2, 12, 0, 0).unwrap();
        let roster = RosterGenerator::new(42, now).generate(100);
        let summary = RosterSummary::of(&roster);
        assert_eq!(summary.total, 100);
        assert_eq!(summary.bands.values().sum::<usize>(), 100);
        assert_eq!(summary.levels.values().sum::<usize>(), 100);
        let json = serde_json::to_string(&summary).unwrap();
        assert!(json.contains("\"practitioner\""));
    }

    #[test]
    fn test_percent() {
        assert_eq!(percent(1, 4), "25.0%");
        assert_eq!(percent(0, 0), "-");
    }
}

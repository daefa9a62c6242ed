//! CLI command implementations
//!
//! Shared helpers for loading rosters and writing output live here; each
//! command group has its own module.

pub mod generate;
pub mod layout;
pub mod summary;
pub mod transition;

use std::path::Path;

use anyhow::Context;
use bullseye::{BullseyeConfig, Roster, RosterGenerator};
use chrono::{DateTime, Utc};
use colored::Colorize;
use tracing::info;

/// Output format for `layout`
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum LayoutFormat {
    /// Render frame as JSON
    Json,
    /// Static SVG scene
    Svg,
}

/// Output format for `summary` and `transition`
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum SummaryFormat {
    Text,
    Json,
}

/// Parse an RFC 3339 instant, or take the current time
pub fn parse_now(now: Option<&str>) -> anyhow::Result<DateTime<Utc>> {
    match now {
        Some(s) => Ok(DateTime::parse_from_rfc3339(s)
            .with_context(|| format!("Invalid --now {:?}, expected RFC 3339", s))?
            .with_timezone(&Utc)),
        None => Ok(Utc::now()),
    }
}

/// Load a roster file, or generate one from the config when no file is given
pub fn load_roster(config: &BullseyeConfig, input: Option<&Path>) -> anyhow::Result<Roster> {
    match input {
        Some(path) => {
            let roster = Roster::load(path)
                .with_context(|| format!("Failed to load roster from {}", path.display()))?;
            info!("Loaded {} members from {}", roster.len(), path.display());
            Ok(roster)
        }
        None => {
            let mut generator = RosterGenerator::from_config(&config.generator, Utc::now());
            Ok(generator.generate(config.generator.count))
        }
    }
}

/// Write to `output` (creating parent directories) or print to stdout
pub fn write_output(content: &str, output: Option<&Path>) -> anyhow::Result<()> {
    match output {
        Some(path) => {
            if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                std::fs::create_dir_all(parent)?;
            }
            std::fs::write(path, content)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            eprintln!(
                "{} Wrote {}",
                "✓".bright_green(),
                path.display().to_string().cyan()
            );
        }
        None => println!("{}", content),
    }
    Ok(())
}

/// Write a default configuration file
pub fn cmd_init(output: &Path, force: bool) -> anyhow::Result<()> {
    if output.exists() && !force {
        anyhow::bail!(
            "{} already exists (use --force to overwrite)",
            output.display()
        );
    }
    BullseyeConfig::default().save(output)?;
    println!(
        "{} Wrote default configuration to {}",
        "✓".bright_green(),
        output.display().to_string().cyan()
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_now_rfc3339() {
        let now = parse_now(Some("2025-06-02T12:00:00Z")).unwrap();
        assert_eq!(now.to_rfc3339(), "2025-06-02T12:00:00+00:00");
        assert!(parse_now(Some("yesterday")).is_err());
        assert!(parse_now(None).is_ok());
    }

    #[test]
    fn test_write_output_creates_dirs() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested/out.txt");
        write_output("hello", Some(&path)).unwrap();
        assert_eq!(std::fs::read_to_string(path).unwrap(), "hello");
    }

    #[test]
    fn test_init_refuses_overwrite() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bullseye.toml");
        cmd_init(&path, false).unwrap();
        assert!(cmd_init(&path, false).is_err());
        cmd_init(&path, true).unwrap();
    }
}

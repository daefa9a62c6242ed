//! Synthetic Roster Generator
//!
//! Seeded, reproducible employee batches for demos, benchmarks and tests.
//! Each member gets a profile drawn from [`catalog`] and usage facts from
//! [`usage`], and is classified once against the generator's reference instant.

pub mod catalog;
pub mod usage;

use std::ops::RangeInclusive;

use chrono::{DateTime, Utc};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use tracing::{debug, info, warn};

use crate::classifier::EngagementClassifier;
use crate::config::GeneratorConfig;
use crate::roster::Roster;
use crate::types::{EmployeeProfile, EmployeeRecord};

pub use usage::UsageFactGenerator;

/// Upper bound on AI tools per member
const MAX_TOOLS: usize = 3;

/// Deterministic roster generator
#[derive(Debug)]
pub struct RosterGenerator {
    rng: StdRng,
    classifier: EngagementClassifier,
    usage: UsageFactGenerator,
}

impl RosterGenerator {
    pub fn new(seed: u64, now: DateTime<Utc>) -> Self {
        let classifier = EngagementClassifier::new(now);
        Self {
            rng: StdRng::seed_from_u64(seed),
            classifier,
            usage: UsageFactGenerator::new(classifier.horizons()),
        }
    }

    pub fn from_config(config: &GeneratorConfig, now: DateTime<Utc>) -> Self {
        Self::new(config.seed, now)
    }

    pub fn classifier(&self) -> &EngagementClassifier {
        &self.classifier
    }

    /// Generate `count` members with ids 1..=count
    pub fn generate(&mut self, count: usize) -> Roster {
        let employees: Vec<EmployeeRecord> = id_range(count)
            .map(|id| {
                let profile = self.profile(id);
                let facts = self.usage.generate(&mut self.rng);
                EmployeeRecord::new(profile, facts, &self.classifier)
            })
            .collect();

        info!("Generated {} employees", employees.len());
        let roster = Roster::new(employees, self.classifier.horizons().now);
        debug!("Band counts: {:?}", roster.band_counts());
        roster
    }

    fn profile(&mut self, id: u32) -> EmployeeProfile {
        let rng = &mut self.rng;
        let first = pick(rng, catalog::FIRST_NAMES);
        let last = pick(rng, catalog::LAST_NAMES);
        let title = pick(rng, catalog::TITLES);

        let (org_level_1, divisions) = catalog::ORG_TREE[rng.gen_range(0..catalog::ORG_TREE.len())];
        let org_level_2 = pick(rng, divisions);
        let org_level_3 = pick(rng, catalog::teams_of(org_level_2));
        let org_level_4 = pick(rng, catalog::SQUADS);
        let location = catalog::location_at(rng.gen_range(0..catalog::CITIES.len()));

        let tenure = ((rng.gen::<f64>() * 8.0 + 0.1) * 10.0).round() / 10.0;
        let tool_count = rng.gen_range(0..=MAX_TOOLS);
        let ai_tools_used = catalog::AI_TOOLS
            .choose_multiple(rng, tool_count)
            .map(|tool| tool.to_string())
            .collect();

        EmployeeProfile {
            id,
            name: format!("{first} {last}"),
            email: format!("{}.{}@company.com", first.to_lowercase(), last.to_lowercase()),
            title: title.to_string(),
            org_level_1: org_level_1.to_string(),
            org_level_2: org_level_2.to_string(),
            org_level_3: org_level_3.to_string(),
            org_level_4: org_level_4.to_string(),
            org_level_5: catalog::seniority_of(title).to_string(),
            location,
            tenure,
            ai_tools_used,
        }
    }
}

/// Member ids 1..=count; ids are `u32`, so larger counts are capped
fn id_range(count: usize) -> RangeInclusive<u32> {
    let last = u32::try_from(count).unwrap_or_else(|_| {
        warn!("Roster size {} exceeds {} members, capping", count, u32::MAX);
        u32::MAX
    });
    1..=last
}

fn pick<'a, R: Rng>(rng: &mut R, options: &[&'a str]) -> &'a str {
    options.choose(rng).copied().unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::EngagementLevel;
    use chrono::TimeZone;
    use std::collections::HashSet;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 6, 2, 12, 0, 0).unwrap()
    }

    #[test]
    fn test_ids_are_sequential() {
        let roster = RosterGenerator::new(42, now()).generate(25);
        let ids: Vec<u32> = roster.iter().map(|e| e.id()).collect();
        assert_eq!(ids, (1..=25).collect::<Vec<_>>());
        assert_eq!(roster.classified_at(), now());
    }

    #[test]
    fn test_id_range_caps_at_u32() {
        assert_eq!(id_range(3), 1..=3);
        assert!(id_range(0).is_empty());
        assert_eq!(id_range(u32::MAX as usize), 1..=u32::MAX);
        assert_eq!(id_range(usize::MAX), 1..=u32::MAX);
    }

    #[test]
    fn test_same_seed_same_roster() {
        let a = RosterGenerator::new(7, now()).generate(50);
        let b = RosterGenerator::new(7, now()).generate(50);
        assert_eq!(a, b);
    }

    #[test]
    fn test_different_seed_different_roster() {
        let a = RosterGenerator::new(1, now()).generate(50);
        let b = RosterGenerator::new(2, now()).generate(50);
        assert_ne!(a, b);
    }

    #[test]
    fn test_profiles_are_consistent() {
        let roster = RosterGenerator::new(42, now()).generate(200);
        for e in roster.iter() {
            let p = &e.profile;
            let (first, last) = p.name.split_once(' ').unwrap();
            assert_eq!(
                p.email,
                format!("{}.{}@company.com", first.to_lowercase(), last.to_lowercase())
            );
            assert!(catalog::divisions_of(&p.org_level_1).contains(&p.org_level_2.as_str()));
            assert!(catalog::teams_of(&p.org_level_2).contains(&p.org_level_3.as_str()));
            assert!(catalog::SQUADS.contains(&p.org_level_4.as_str()));
            assert_eq!(p.org_level_5, catalog::seniority_of(&p.title));
            assert!((0.1..=8.1).contains(&p.tenure), "tenure {}", p.tenure);
            assert!(p.ai_tools_used.len() <= MAX_TOOLS);
            let unique: HashSet<&String> = p.ai_tools_used.iter().collect();
            assert_eq!(unique.len(), p.ai_tools_used.len());
        }
    }

    #[test]
    fn test_levels_match_classifier() {
        let mut generator = RosterGenerator::new(42, now());
        let roster = generator.generate(100);
        for e in roster.iter() {
            assert_eq!(e.engagement_level(), generator.classifier().classify(&e.usage));
        }
    }

    #[test]
    fn test_large_batch_covers_every_band() {
        let roster = RosterGenerator::new(42, now()).generate(1000);
        let counts = roster.level_counts();
        assert!(counts.get(&EngagementLevel::Outsider).copied().unwrap_or(0) > 0);
        assert!(counts.get(&EngagementLevel::Explorer).copied().unwrap_or(0) > 0);
        assert!(counts.get(&EngagementLevel::Pro).copied().unwrap_or(0) > 0);
        assert!(roster.band_counts().values().all(|&n| n > 0));
    }

    #[test]
    fn test_generate_zero() {
        assert!(RosterGenerator::new(42, now()).generate(0).is_empty());
    }
}

//! Employee roster
//!
//! One generated batch of employee records, owned in one place. Queries read
//! it; only the active layout engine writes positions (`LayoutEngine::apply`).

use std::collections::BTreeMap;
use std::path::Path;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::classifier::EngagementClassifier;
use crate::error::{BullseyeError, Result};
use crate::types::{CoarseBand, EmployeeRecord, EngagementLevel, Position};

/// Org level 1 → level 2 → level 3 → member ids
pub type OrgHierarchy = BTreeMap<String, BTreeMap<String, BTreeMap<String, Vec<u32>>>>;

/// Ordered batch of employee records
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Roster {
    /// Reference instant the levels were classified against
    classified_at: DateTime<Utc>,
    employees: Vec<EmployeeRecord>,
}

impl Roster {
    pub fn new(employees: Vec<EmployeeRecord>, classified_at: DateTime<Utc>) -> Self {
        Self {
            classified_at,
            employees,
        }
    }

    pub fn classified_at(&self) -> DateTime<Utc> {
        self.classified_at
    }

    pub fn len(&self) -> usize {
        self.employees.len()
    }

    pub fn is_empty(&self) -> bool {
        self.employees.is_empty()
    }

    pub fn records(&self) -> &[EmployeeRecord] {
        &self.employees
    }

    pub(crate) fn records_mut(&mut self) -> &mut [EmployeeRecord] {
        &mut self.employees
    }

    pub fn iter(&self) -> impl Iterator<Item = &EmployeeRecord> {
        self.employees.iter()
    }

    /// Current positions, in roster order
    pub fn positions(&self) -> Vec<Position> {
        self.employees.iter().map(EmployeeRecord::position).collect()
    }

    // ========================================================================
    // Queries
    // ========================================================================

    pub fn get(&self, id: u32) -> Option<&EmployeeRecord> {
        self.employees.iter().find(|e| e.id() == id)
    }

    /// Members whose org level `level` (1..=5) equals `value`
    pub fn by_org_level(&self, level: u8, value: &str) -> Vec<&EmployeeRecord> {
        if !(1..=5).contains(&level) {
            warn!("Org level {} out of range 1..=5", level);
            return Vec::new();
        }
        self.employees
            .iter()
            .filter(|e| e.profile.org_level(level) == Some(value))
            .collect()
    }

    /// Members in `city`, optionally narrowed by state and country
    pub fn by_location(
        &self,
        city: &str,
        state: Option<&str>,
        country: Option<&str>,
    ) -> Vec<&EmployeeRecord> {
        self.employees
            .iter()
            .filter(|e| {
                let loc = &e.profile.location;
                loc.city == city
                    && state.map_or(true, |s| loc.state == s)
                    && country.map_or(true, |c| loc.country == c)
            })
            .collect()
    }

    pub fn by_engagement_level(&self, level: EngagementLevel) -> Vec<&EmployeeRecord> {
        self.employees
            .iter()
            .filter(|e| e.engagement_level() == level)
            .collect()
    }

    /// Case-insensitive search over name, e-mail, title and org levels 1-2
    pub fn search(&self, query: &str) -> Vec<&EmployeeRecord> {
        let query = query.to_lowercase();
        self.employees
            .iter()
            .filter(|e| {
                let p = &e.profile;
                [&p.name, &p.email, &p.title, &p.org_level_1, &p.org_level_2]
                    .iter()
                    .any(|field| field.to_lowercase().contains(&query))
            })
            .collect()
    }

    pub fn org_hierarchy(&self) -> OrgHierarchy {
        let mut hierarchy = OrgHierarchy::new();
        for e in &self.employees {
            hierarchy
                .entry(e.profile.org_level_1.clone())
                .or_default()
                .entry(e.profile.org_level_2.clone())
                .or_default()
                .entry(e.profile.org_level_3.clone())
                .or_default()
                .push(e.id());
        }
        hierarchy
    }

    /// Members per exact level
    pub fn level_counts(&self) -> BTreeMap<EngagementLevel, usize> {
        let mut counts = BTreeMap::new();
        for e in &self.employees {
            *counts.entry(e.engagement_level()).or_insert(0) += 1;
        }
        counts
    }

    /// Members per coarse band (edge levels count with the band they are in)
    pub fn band_counts(&self) -> BTreeMap<CoarseBand, usize> {
        let mut counts: BTreeMap<CoarseBand, usize> =
            CoarseBand::all().into_iter().map(|b| (b, 0)).collect();
        for e in &self.employees {
            *counts.entry(e.engagement_level().coarse_band()).or_insert(0) += 1;
        }
        counts
    }

    // ========================================================================
    // Persistence
    // ========================================================================

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Parse a roster and re-derive every level from its usage facts
    pub fn from_json(json: &str) -> Result<Self> {
        let mut roster: Self = serde_json::from_str(json)?;
        let classifier = EngagementClassifier::new(roster.classified_at);
        let mut stale = Vec::new();
        for e in &mut roster.employees {
            if e.reclassify(&classifier) {
                stale.push(e.id());
            }
        }
        if !stale.is_empty() {
            warn!(
                "{} stored engagement levels disagreed with usage facts, reclassified: {:?}",
                stale.len(),
                stale
            );
        }
        Ok(roster)
    }

    /// Load a roster from a JSON file
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| BullseyeError::io(path, e))?;
        let roster = Self::from_json(&content)?;
        debug!("Loaded {} members from {:?}", roster.len(), path);
        Ok(roster)
    }

    /// Save the roster as pretty JSON
    pub fn save(&self, path: &Path) -> Result<()> {
        std::fs::write(path, self.to_json()?).map_err(|e| BullseyeError::io(path, e))
    }
}

#[cfg(test)]
#[path = "roster_tests.rs"]
mod tests;

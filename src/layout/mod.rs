//! Layout Engines
//!
//! Map classified employees to screen positions.
//!
//! - `ring`: concentric bullseye, edge/core sub-bands, even angular slots
//! - `linear`: four horizontal sections with a centred stacking grid
//! - `partition`: one-pass grouping shared by both engines
//!
//! Both engines are deterministic: the same roster in the same order always
//! yields the same coordinates. Both use SVG screen coordinates (y down), so
//! "up" means smaller y in either view.

pub mod linear;
pub mod partition;
pub mod ring;

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::config::BullseyeConfig;
use crate::error::BullseyeError;
use crate::roster::Roster;
use crate::types::{EmployeeRecord, Position};

pub use linear::{grid_columns, GridSlot, LinearLayout};
pub use partition::{BandKey, Partition, SubBand};
pub use ring::{AngularSpan, BandRadii, RingGeometry, RingLayout};

/// Which layout engine is active
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "native", derive(clap::ValueEnum))]
#[serde(rename_all = "lowercase")]
pub enum ViewMode {
    #[default]
    Circular,
    Linear,
}

impl ViewMode {
    pub fn toggled(&self) -> Self {
        match self {
            Self::Circular => Self::Linear,
            Self::Linear => Self::Circular,
        }
    }
}

impl std::fmt::Display for ViewMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Circular => write!(f, "circular"),
            Self::Linear => write!(f, "linear"),
        }
    }
}

impl std::str::FromStr for ViewMode {
    type Err = BullseyeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "circular" | "circle" | "ring" | "bullseye" => Ok(Self::Circular),
            "linear" | "line" => Ok(Self::Linear),
            _ => Err(BullseyeError::UnknownView(s.to_string())),
        }
    }
}

/// Computed position of one employee
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Placement {
    pub id: u32,
    pub position: Position,
}

impl Placement {
    pub fn new(id: u32, position: Position) -> Self {
        Self { id, position }
    }
}

/// Layout engine selecting ring or linear placement by view mode
#[derive(Debug, Clone)]
pub struct LayoutEngine {
    ring: RingLayout,
    linear: LinearLayout,
}

impl LayoutEngine {
    pub fn new(config: &BullseyeConfig) -> Self {
        Self {
            ring: RingLayout::from_config(config),
            linear: LinearLayout::from_config(config),
        }
    }

    pub fn ring(&self) -> &RingLayout {
        &self.ring
    }

    pub fn linear(&self) -> &LinearLayout {
        &self.linear
    }

    /// Compute placements for the whole record set; order matches `records`
    pub fn compute(&self, records: &[EmployeeRecord], view: ViewMode) -> Vec<Placement> {
        match view {
            ViewMode::Circular => self.ring.place(records),
            ViewMode::Linear => self.linear.place(records),
        }
    }

    /// Recompute and write positions for every member of the roster
    pub fn apply(&self, roster: &mut Roster, view: ViewMode) {
        let placements = self.compute(roster.records(), view);
        info!("Laid out {} members in {} view", placements.len(), view);
        for (record, placement) in roster.records_mut().iter_mut().zip(placements) {
            record.set_position(placement.position);
        }
    }
}

#[cfg(test)]
pub(crate) mod fixtures {
    use chrono::{DateTime, TimeZone, Utc};

    use crate::classifier::{exemplar_facts, EngagementClassifier};
    use crate::roster::Roster;
    use crate::types::{EmployeeProfile, EmployeeRecord, EngagementLevel};

    pub fn fixture_now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 6, 2, 12, 0, 0).unwrap()
    }

    /// One record per level, ids 1.., in the given order
    pub fn roster_of(levels: &[EngagementLevel]) -> Vec<EmployeeRecord> {
        let classifier = EngagementClassifier::new(fixture_now());
        levels
            .iter()
            .enumerate()
            .map(|(i, &level)| {
                let profile = EmployeeProfile {
                    id: i as u32 + 1,
                    name: format!("Member {}", i + 1),
                    ..Default::default()
                };
                let facts = exemplar_facts(level, &classifier.horizons());
                EmployeeRecord::new(profile, facts, &classifier)
            })
            .collect()
    }

    pub fn roster(levels: &[EngagementLevel]) -> Roster {
        Roster::new(roster_of(levels), fixture_now())
    }
}

#[cfg(test)]
mod tests {
    use super::fixtures::roster;
    use super::*;
    use crate::types::EngagementLevel;
    use crate::types::EngagementLevel::*;

    #[test]
    fn test_view_mode_default_and_toggle() {
        assert_eq!(ViewMode::default(), ViewMode::Circular);
        assert_eq!(ViewMode::Circular.toggled(), ViewMode::Linear);
        assert_eq!(ViewMode::Linear.toggled(), ViewMode::Circular);
    }

    #[test]
    fn test_view_mode_parse() {
        assert_eq!("Linear".parse::<ViewMode>().unwrap(), ViewMode::Linear);
        assert_eq!("bullseye".parse::<ViewMode>().unwrap(), ViewMode::Circular);
        assert!("spiral".parse::<ViewMode>().is_err());
    }

    #[test]
    fn test_compute_dispatches_by_view() {
        let config = BullseyeConfig::default();
        let engine = LayoutEngine::new(&config);
        let r = roster(&[Outsider, Explorer, Practitioner]);

        let ring = engine.compute(r.records(), ViewMode::Circular);
        let linear = engine.compute(r.records(), ViewMode::Linear);
        assert_eq!(ring, engine.ring().place(r.records()));
        assert_eq!(linear, engine.linear().place(r.records()));
        assert_ne!(ring, linear);
    }

    #[test]
    fn test_apply_writes_every_position() {
        let config = BullseyeConfig::default();
        let engine = LayoutEngine::new(&config);
        let mut r = roster(&[Outsider, Newcomer, EdgeOfExplorer, Pro]);

        engine.apply(&mut r, ViewMode::Linear);
        let expected = engine.compute(r.records(), ViewMode::Linear);
        for (record, placement) in r.records().iter().zip(&expected) {
            assert_eq!(record.id(), placement.id);
            assert_eq!(record.position(), placement.position);
        }
    }

    #[test]
    fn test_layout_is_deterministic() {
        let config = BullseyeConfig::default();
        let engine = LayoutEngine::new(&config);
        let r = roster(&EngagementLevel::all());
        for view in [ViewMode::Circular, ViewMode::Linear] {
            assert_eq!(engine.compute(r.records(), view), engine.compute(r.records(), view));
        }
    }

    #[test]
    fn test_empty_roster_layout() {
        let config = BullseyeConfig::default();
        let engine = LayoutEngine::new(&config);
        let mut r = roster(&[]);
        engine.apply(&mut r, ViewMode::Circular);
        assert!(engine.compute(r.records(), ViewMode::Linear).is_empty());
    }
}

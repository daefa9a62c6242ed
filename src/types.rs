use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::error::BullseyeError;

/// Grey used for outsiders and for anything without a colour of its own
pub const DEFAULT_COLOR: &str = "#9CA3AF";

/// AI engagement level, ordered from least to most engaged
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum EngagementLevel {
    #[default]
    Outsider,
    EdgeOfNewcomer,
    Newcomer,
    EdgeOfExplorer,
    Explorer,
    EdgeOfPractitioner,
    Practitioner,
    EdgeOfPro,
    Pro,
}

impl EngagementLevel {
    /// All levels in ascending order
    pub fn all() -> Vec<Self> {
        vec![
            Self::Outsider,
            Self::EdgeOfNewcomer,
            Self::Newcomer,
            Self::EdgeOfExplorer,
            Self::Explorer,
            Self::EdgeOfPractitioner,
            Self::Practitioner,
            Self::EdgeOfPro,
            Self::Pro,
        ]
    }

    /// Wire name (`edge_of_newcomer`)
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Outsider => "outsider",
            Self::EdgeOfNewcomer => "edge_of_newcomer",
            Self::Newcomer => "newcomer",
            Self::EdgeOfExplorer => "edge_of_explorer",
            Self::Explorer => "explorer",
            Self::EdgeOfPractitioner => "edge_of_practitioner",
            Self::Practitioner => "practitioner",
            Self::EdgeOfPro => "edge_of_pro",
            Self::Pro => "pro",
        }
    }

    /// Human-readable name (`edge of newcomer`)
    pub fn label(&self) -> String {
        self.as_str().replace('_', " ")
    }

    /// Whether this level sits on the boundary of the next ring in
    pub fn is_edge(&self) -> bool {
        matches!(
            self,
            Self::EdgeOfNewcomer | Self::EdgeOfExplorer | Self::EdgeOfPractitioner | Self::EdgeOfPro
        )
    }

    /// Coarse band the level is drawn in.
    ///
    /// An `edge_of_X` level stays in the band it is transitioning out of.
    /// Everything at or beyond practitioner shares the innermost band.
    pub fn coarse_band(&self) -> CoarseBand {
        match self {
            Self::Outsider | Self::EdgeOfNewcomer => CoarseBand::Outsider,
            Self::Newcomer | Self::EdgeOfExplorer => CoarseBand::Newcomer,
            Self::Explorer | Self::EdgeOfPractitioner => CoarseBand::Explorer,
            Self::Practitioner | Self::EdgeOfPro | Self::Pro => CoarseBand::Practitioner,
        }
    }

    /// Display colour (colour of the ring the member is in or just outside of)
    pub fn color(&self) -> &'static str {
        self.coarse_band().color()
    }

    /// Parse a level name, falling back to `outsider` for anything unknown
    pub fn parse_lenient(s: &str) -> Self {
        s.parse().unwrap_or_else(|_| {
            warn!("Unknown engagement level {:?}, treating as outsider", s);
            Self::Outsider
        })
    }
}

/// Stored levels are advisory; unknown names degrade instead of failing the load
fn lenient_level<'de, D>(deserializer: D) -> Result<EngagementLevel, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    Ok(EngagementLevel::parse_lenient(&raw))
}

impl std::fmt::Display for EngagementLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for EngagementLevel {
    type Err = BullseyeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase().replace([' ', '-'], "_");
        Self::all()
            .into_iter()
            .find(|level| level.as_str() == normalized)
            .ok_or_else(|| BullseyeError::UnknownLevel(s.to_string()))
    }
}

/// One of the four top-level groupings before the edge/core split
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum CoarseBand {
    #[default]
    Outsider,
    Newcomer,
    Explorer,
    Practitioner,
}

impl CoarseBand {
    /// All bands, outermost ring (leftmost section) first
    pub fn all() -> [Self; 4] {
        [
            Self::Outsider,
            Self::Newcomer,
            Self::Explorer,
            Self::Practitioner,
        ]
    }

    /// Position in `all()`; also the linear section index
    pub fn index(&self) -> usize {
        match self {
            Self::Outsider => 0,
            Self::Newcomer => 1,
            Self::Explorer => 2,
            Self::Practitioner => 3,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Outsider => "Outsider",
            Self::Newcomer => "Newcomer",
            Self::Explorer => "Explorer",
            Self::Practitioner => "Practitioner",
        }
    }

    pub fn color(&self) -> &'static str {
        match self {
            Self::Outsider => DEFAULT_COLOR,
            Self::Newcomer => "#3B82F6",
            Self::Explorer => "#6366F1",
            Self::Practitioner => "#8B5CF6",
        }
    }
}

impl std::fmt::Display for CoarseBand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Raw usage and certification attributes consumed by the classifier
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct UsageFacts {
    pub last_usage_timestamp: Option<DateTime<Utc>>,
    /// 0..=4
    pub weeks_used_in_past_4: u8,
    /// 0..=7
    pub consecutive_weeks_used: u8,
    pub in_practitioner_program: bool,
    pub practitioner_certified: bool,
    pub in_pro_program: bool,
    pub pro_certified: bool,
}

/// Office location
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Location {
    pub city: String,
    pub state: String,
    pub country: String,
}

impl Location {
    pub fn new(city: impl Into<String>, state: impl Into<String>, country: impl Into<String>) -> Self {
        Self {
            city: city.into(),
            state: state.into(),
            country: country.into(),
        }
    }
}

/// 2D screen position (SVG convention: y grows downwards)
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

impl Position {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to another position
    pub fn distance(&self, other: &Self) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        (dx * dx + dy * dy).sqrt()
    }

    /// Linear interpolation towards `other`; `t` is clamped to [0, 1]
    pub fn lerp(&self, other: &Self, t: f64) -> Self {
        let t = t.clamp(0.0, 1.0);
        Self {
            x: self.x + (other.x - self.x) * t,
            y: self.y + (other.y - self.y) * t,
        }
    }
}

/// Generated identity and organisation attributes of an employee
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct EmployeeProfile {
    #[serde(rename = "employee_id")]
    pub id: u32,
    pub name: String,
    pub email: String,
    pub title: String,
    pub org_level_1: String,
    pub org_level_2: String,
    pub org_level_3: String,
    pub org_level_4: String,
    pub org_level_5: String,
    #[serde(flatten)]
    pub location: Location,
    /// Years, one decimal
    pub tenure: f64,
    pub ai_tools_used: Vec<String>,
}

impl EmployeeProfile {
    /// Org level by number (1..=5)
    pub fn org_level(&self, level: u8) -> Option<&str> {
        match level {
            1 => Some(&self.org_level_1),
            2 => Some(&self.org_level_2),
            3 => Some(&self.org_level_3),
            4 => Some(&self.org_level_4),
            5 => Some(&self.org_level_5),
            _ => None,
        }
    }

    pub fn initials(&self) -> String {
        self.name
            .split_whitespace()
            .filter_map(|part| part.chars().next())
            .collect()
    }
}

/// An employee with derived engagement level and current layout position.
///
/// The level is fixed at construction; only the active layout engine writes
/// the position.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmployeeRecord {
    #[serde(flatten)]
    pub profile: EmployeeProfile,
    #[serde(flatten)]
    pub usage: UsageFacts,
    #[serde(default, deserialize_with = "lenient_level")]
    engagement_level: EngagementLevel,
    #[serde(default)]
    position: Position,
}

impl EmployeeRecord {
    /// Build a record, classifying its usage facts once
    pub fn new(
        profile: EmployeeProfile,
        usage: UsageFacts,
        classifier: &crate::classifier::EngagementClassifier,
    ) -> Self {
        let engagement_level = classifier.classify(&usage);
        Self {
            profile,
            usage,
            engagement_level,
            position: Position::default(),
        }
    }

    pub fn id(&self) -> u32 {
        self.profile.id
    }

    pub fn engagement_level(&self) -> EngagementLevel {
        self.engagement_level
    }

    pub fn position(&self) -> Position {
        self.position
    }

    pub(crate) fn set_position(&mut self, position: Position) {
        self.position = position;
    }

    /// Re-derive the level from the usage facts; true if it changed
    pub(crate) fn reclassify(
        &mut self,
        classifier: &crate::classifier::EngagementClassifier,
    ) -> bool {
        let level = classifier.classify(&self.usage);
        let changed = level != self.engagement_level;
        self.engagement_level = level;
        changed
    }

    /// Certification line shown in the info panel
    pub fn certification_status(&self) -> &'static str {
        if self.usage.pro_certified {
            "Pro Certified"
        } else if self.usage.in_pro_program {
            "In Pro Program"
        } else if self.usage.practitioner_certified {
            "Practitioner Certified"
        } else if self.usage.in_practitioner_program {
            "In Practitioner Program"
        } else {
            "None"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_levels_are_ordered() {
        let levels = EngagementLevel::all();
        assert_eq!(levels.len(), 9);
        for pair in levels.windows(2) {
            assert!(pair[0] < pair[1], "{} should precede {}", pair[0], pair[1]);
        }
    }

    #[test]
    fn test_level_round_trips_through_str() {
        for level in EngagementLevel::all() {
            assert_eq!(level.as_str().parse::<EngagementLevel>().unwrap(), level);
        }
    }

    #[test]
    fn test_level_parse_accepts_labels() {
        assert_eq!(
            "Edge of Explorer".parse::<EngagementLevel>().unwrap(),
            EngagementLevel::EdgeOfExplorer
        );
    }

    #[test]
    fn test_level_parse_unknown_is_error() {
        assert!("guru".parse::<EngagementLevel>().is_err());
    }

    #[test]
    fn test_parse_lenient_falls_back_to_outsider() {
        assert_eq!(EngagementLevel::parse_lenient("guru"), EngagementLevel::Outsider);
        assert_eq!(EngagementLevel::parse_lenient("pro"), EngagementLevel::Pro);
    }

    #[test]
    fn test_level_serde_snake_case() {
        let json = serde_json::to_string(&EngagementLevel::EdgeOfPractitioner).unwrap();
        assert_eq!(json, "\"edge_of_practitioner\"");
    }

    #[test]
    fn test_edge_levels_stay_in_outer_band() {
        use EngagementLevel::*;
        assert_eq!(EdgeOfNewcomer.coarse_band(), CoarseBand::Outsider);
        assert_eq!(EdgeOfExplorer.coarse_band(), CoarseBand::Newcomer);
        assert_eq!(EdgeOfPractitioner.coarse_band(), CoarseBand::Explorer);
        assert_eq!(EdgeOfPro.coarse_band(), CoarseBand::Practitioner);
        assert_eq!(Pro.coarse_band(), CoarseBand::Practitioner);
    }

    #[test]
    fn test_edge_flags() {
        let edges: Vec<_> = EngagementLevel::all()
            .into_iter()
            .filter(EngagementLevel::is_edge)
            .collect();
        assert_eq!(edges.len(), 4);
    }

    #[test]
    fn test_colors_follow_band() {
        assert_eq!(EngagementLevel::Outsider.color(), DEFAULT_COLOR);
        assert_eq!(EngagementLevel::EdgeOfExplorer.color(), "#3B82F6");
        assert_eq!(EngagementLevel::Pro.color(), "#8B5CF6");
    }

    #[test]
    fn test_band_indices_match_all() {
        for (i, band) in CoarseBand::all().iter().enumerate() {
            assert_eq!(band.index(), i);
        }
    }

    #[test]
    fn test_position_lerp_clamps() {
        let a = Position::new(0.0, 0.0);
        let b = Position::new(10.0, -20.0);
        assert_eq!(a.lerp(&b, 0.5), Position::new(5.0, -10.0));
        assert_eq!(a.lerp(&b, 2.0), b);
        assert_eq!(a.lerp(&b, -1.0), a);
    }

    #[test]
    fn test_position_distance() {
        let a = Position::new(0.0, 0.0);
        let b = Position::new(3.0, 4.0);
        assert_eq!(a.distance(&b), 5.0);
    }

    #[test]
    fn test_profile_initials_and_org_levels() {
        let profile = EmployeeProfile {
            name: "Ada Lovelace".into(),
            org_level_3: "Platform Team".into(),
            ..Default::default()
        };
        assert_eq!(profile.initials(), "AL");
        assert_eq!(profile.org_level(3), Some("Platform Team"));
        assert_eq!(profile.org_level(6), None);
    }
}

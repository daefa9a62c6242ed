//! Render boundary
//!
//! A [`RenderFrame`] is everything an external renderer needs for one paint:
//! the active modes, the background decoration and one [`RenderedEntity`]
//! per member. The frame is plain data (serde) so it can cross a process or
//! language boundary unchanged. [`SvgRenderer`] turns a frame into a static
//! SVG scene.

pub mod svg;

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::config::CanvasConfig;
use crate::coordinator::{Decoration, DisplayMode, RingStyle};
use crate::layout::ViewMode;
use crate::types::{CoarseBand, EmployeeRecord, EngagementLevel, Position};

pub use svg::SvgRenderer;

/// Label row sits just below the rings, inside the first label row
pub const BAND_LABEL_ROW: f64 = 4.3;

/// One positioned member as handed to the renderer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RenderedEntity {
    pub id: u32,
    pub engagement_level: EngagementLevel,
    pub x: f64,
    pub y: f64,
    pub color: String,
    pub radius: f64,
    pub name: String,
    pub initials: String,
}

impl RenderedEntity {
    pub fn new(record: &EmployeeRecord, position: Position, display: DisplayMode) -> Self {
        let level = record.engagement_level();
        Self {
            id: record.id(),
            engagement_level: level,
            x: position.x,
            y: position.y,
            color: level.color().to_string(),
            radius: display.radius(),
            name: record.profile.name.clone(),
            initials: record.profile.initials(),
        }
    }
}

/// "Outsider: 12" style count label under the bullseye
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BandLabel {
    pub band: CoarseBand,
    pub text: String,
    pub x: f64,
    pub y: f64,
    pub color: String,
}

/// One label per coarse band, left to right from outsider to practitioner
pub fn band_labels(counts: &BTreeMap<CoarseBand, usize>, canvas: &CanvasConfig) -> Vec<BandLabel> {
    let cell = canvas.cell();
    CoarseBand::all()
        .into_iter()
        .map(|band| BandLabel {
            band,
            text: format!("{}: {}", band.label(), counts.get(&band).copied().unwrap_or(0)),
            x: (band.index() as f64 + 0.5) * cell,
            y: BAND_LABEL_ROW * cell,
            color: band.color().to_string(),
        })
        .collect()
}

/// Snapshot of everything needed for one paint
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RenderFrame {
    pub view: ViewMode,
    pub display: DisplayMode,
    pub ring_style: RingStyle,
    /// Background currently drawn; `None` between clearing and redrawing
    pub decoration: Option<Decoration>,
    /// Fade-in progress of the decoration, 0..=1
    pub decoration_opacity: f64,
    pub band_counts: BTreeMap<CoarseBand, usize>,
    pub entities: Vec<RenderedEntity>,
}

impl RenderFrame {
    pub fn entity(&self, id: u32) -> Option<&RenderedEntity> {
        self.entities.iter().find(|e| e.id == id)
    }

    pub fn to_json(&self) -> crate::error::Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

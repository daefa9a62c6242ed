//! Bullseye (ring/band) layout
//!
//! Each coarse band is an annulus between two boundaries. Members sit on one
//! of two sub-radii interpolated inside the annulus: the edge radius at 35%
//! of the thickness (closer to the centre, "about to enter the next ring")
//! and the core radius at 70% ("settled in this ring"). The innermost
//! practitioner band has no edge sub-band, so its members alternate between
//! the two radii for spread.
//!
//! Members of a sub-band split the angular span evenly and sit in the centre
//! of their slot: `angle_i = start + (i + 0.5) * span / n`.
//!
//! Coordinates use the SVG convention (y down), so a point at angle θ is
//! `(cx + r cos θ, cy - r sin θ)`: larger angles turn counter-clockwise and
//! "up" is towards smaller y.

use std::f64::consts::{FRAC_PI_2, PI};

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::partition::{BandKey, Partition, SubBand};
use super::Placement;
use crate::config::{BullseyeConfig, RingConfig};
use crate::types::{CoarseBand, EmployeeRecord, Position};

/// Bullseye shape
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RingGeometry {
    /// Quarter circle anchored at the bottom-right corner of the grid,
    /// spanning straight up (π/2) to straight left (π)
    #[default]
    Quarter,
    /// Full circle around the grid centre, starting straight up
    Full,
}

impl RingGeometry {
    pub fn span(&self) -> AngularSpan {
        match self {
            Self::Quarter => AngularSpan::new(FRAC_PI_2, FRAC_PI_2),
            Self::Full => AngularSpan::new(FRAC_PI_2, 2.0 * PI),
        }
    }
}

/// Angular range shared out among the members of a sub-band
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AngularSpan {
    pub start: f64,
    pub span: f64,
}

impl AngularSpan {
    pub fn new(start: f64, span: f64) -> Self {
        Self { start, span }
    }

    /// Width of each of `n` slots; `None` for an empty sub-band
    pub fn slot_width(&self, n: usize) -> Option<f64> {
        (n > 0).then(|| self.span / n as f64)
    }

    /// `(from, to)` angle bounds of each of `n` slots
    pub fn slot_bounds(&self, n: usize) -> Vec<(f64, f64)> {
        let Some(width) = self.slot_width(n) else {
            return Vec::new();
        };
        (0..n)
            .map(|i| {
                let from = self.start + i as f64 * width;
                (from, from + width)
            })
            .collect()
    }

    /// Centre angle of each of `n` slots
    pub fn slot_angles(&self, n: usize) -> Vec<f64> {
        let Some(width) = self.slot_width(n) else {
            return Vec::new();
        };
        (0..n)
            .map(|i| self.start + (i as f64 + 0.5) * width)
            .collect()
    }
}

/// Edge and core sub-radii of one band
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BandRadii {
    pub edge: f64,
    pub core: f64,
}

impl BandRadii {
    /// Interpolate the sub-radii between an inner and an outer boundary
    pub fn between(inner: f64, outer: f64, edge_fraction: f64, core_fraction: f64) -> Self {
        let thickness = outer - inner;
        Self {
            edge: inner + thickness * edge_fraction,
            core: inner + thickness * core_fraction,
        }
    }
}

/// Circular bullseye layout engine
#[derive(Debug, Clone)]
pub struct RingLayout {
    geometry: RingGeometry,
    center: Position,
    /// Pixels per ring unit
    unit: f64,
    rings: RingConfig,
}

impl RingLayout {
    pub fn from_config(config: &BullseyeConfig) -> Self {
        let grid = config.canvas.grid_size();
        let geometry = config.rings.geometry;
        let (center, unit) = match geometry {
            RingGeometry::Quarter => (Position::new(grid, grid), config.canvas.cell()),
            RingGeometry::Full => (
                Position::new(grid / 2.0, grid / 2.0),
                grid / 2.0 / config.rings.outsider,
            ),
        };
        Self {
            geometry,
            center,
            unit,
            rings: config.rings.clone(),
        }
    }

    pub fn geometry(&self) -> RingGeometry {
        self.geometry
    }

    pub fn center(&self) -> Position {
        self.center
    }

    /// Outer boundary radius of a band (the drawn ring for all but outsiders)
    pub fn outer_boundary(&self, band: CoarseBand) -> f64 {
        let units = match band {
            CoarseBand::Outsider => self.rings.outsider,
            CoarseBand::Newcomer => self.rings.newcomer,
            CoarseBand::Explorer => self.rings.explorer,
            CoarseBand::Practitioner => self.rings.practitioner,
        };
        units * self.unit
    }

    /// Inner boundary radius of a band
    pub fn inner_boundary(&self, band: CoarseBand) -> f64 {
        match band {
            CoarseBand::Outsider => self.outer_boundary(CoarseBand::Newcomer),
            CoarseBand::Newcomer => self.outer_boundary(CoarseBand::Explorer),
            CoarseBand::Explorer => self.outer_boundary(CoarseBand::Practitioner),
            CoarseBand::Practitioner => self.rings.practitioner_inner * self.unit,
        }
    }

    pub fn band_radii(&self, band: CoarseBand) -> BandRadii {
        BandRadii::between(
            self.inner_boundary(band),
            self.outer_boundary(band),
            self.rings.edge_fraction,
            self.rings.core_fraction,
        )
    }

    /// Radius for the member at `rank` within group `key`
    pub fn radius_for(&self, key: BandKey, rank: usize) -> f64 {
        let radii = self.band_radii(key.band);
        match key.sub_band {
            SubBand::Edge => radii.edge,
            SubBand::Core => radii.core,
            SubBand::Alternating if rank % 2 == 0 => radii.core,
            SubBand::Alternating => radii.edge,
        }
    }

    /// Polar to screen coordinates around the centre
    pub fn polar(&self, angle: f64, radius: f64) -> Position {
        Position::new(
            self.center.x + angle.cos() * radius,
            self.center.y - angle.sin() * radius,
        )
    }

    /// Place every record; output order matches `records`
    pub fn place(&self, records: &[EmployeeRecord]) -> Vec<Placement> {
        let partition = Partition::by_band_key(records);
        let span = self.geometry.span();
        let mut positions = vec![Position::default(); records.len()];

        for (key, members) in partition.groups() {
            debug!(
                "Ring band {:?}/{:?}: {} members",
                key.band,
                key.sub_band,
                members.len()
            );
            let angles = span.slot_angles(members.len());
            for (rank, (&index, angle)) in members.iter().zip(angles).enumerate() {
                positions[index] = self.polar(angle, self.radius_for(*key, rank));
            }
        }

        records
            .iter()
            .zip(positions)
            .map(|(record, position)| Placement::new(record.id(), position))
            .collect()
    }
}

#[cfg(test)]
#[path = "tests_ring.rs"]
mod tests;

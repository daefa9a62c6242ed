//! Linear (four-section) layout
//!
//! The canvas is split into four equal-width sections, one per coarse band,
//! outsider on the left. `edge_of_X` members join the section they are
//! leaving so both views keep the same grouping. Members of a section fill a
//! centred grid with `ceil(sqrt(n))` columns, stacked upward from the
//! baseline.

use tracing::debug;

use super::partition::Partition;
use super::Placement;
use crate::config::{BullseyeConfig, LinearConfig};
use crate::types::{CoarseBand, EmployeeRecord, Position};

/// Number of columns for a section of `n` members
pub fn grid_columns(n: usize) -> usize {
    if n == 0 {
        return 0;
    }
    (n as f64).sqrt().ceil() as usize
}

/// Grid cell of one member inside its section
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridSlot {
    pub row: usize,
    pub col: usize,
    pub columns: usize,
}

impl GridSlot {
    pub fn for_index(index: usize, section_size: usize) -> Self {
        let columns = grid_columns(section_size).max(1);
        Self {
            row: index / columns,
            col: index % columns,
            columns,
        }
    }
}

/// Linear section layout engine
#[derive(Debug, Clone)]
pub struct LinearLayout {
    section_width: f64,
    baseline_y: f64,
    spacing: LinearConfig,
}

impl LinearLayout {
    pub fn from_config(config: &BullseyeConfig) -> Self {
        Self {
            section_width: config.canvas.width / CoarseBand::all().len() as f64,
            baseline_y: config.canvas.height() - config.linear.baseline_offset,
            spacing: config.linear.clone(),
        }
    }

    pub fn section_width(&self) -> f64 {
        self.section_width
    }

    /// y of the horizontal guide line
    pub fn baseline_y(&self) -> f64 {
        self.baseline_y
    }

    /// Horizontal centre of a band's section
    pub fn anchor_x(&self, band: CoarseBand) -> f64 {
        self.section_width * band.index() as f64 + self.section_width / 2.0
    }

    /// Offset of a grid slot from the section anchor (y grows downward)
    pub fn offset(&self, slot: GridSlot) -> (f64, f64) {
        let centred_col = slot.col as f64 - (slot.columns as f64 - 1.0) / 2.0;
        (
            centred_col * self.spacing.column_spacing,
            slot.row as f64 * self.spacing.row_spacing,
        )
    }

    /// Place every record; output order matches `records`
    pub fn place(&self, records: &[EmployeeRecord]) -> Vec<Placement> {
        let partition = Partition::by_coarse_band(records);
        let mut positions = vec![Position::default(); records.len()];

        for (band, members) in partition.groups() {
            debug!("Linear section {}: {} members", band, members.len());
            let anchor_x = self.anchor_x(*band);
            for (rank, &index) in members.iter().enumerate() {
                let (dx, dy) = self.offset(GridSlot::for_index(rank, members.len()));
                positions[index] = Position::new(
                    anchor_x + dx,
                    self.baseline_y - dy - self.spacing.stack_lift,
                );
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
#[path = "tests_linear.rs"]
mod tests;

//! Linear layout tests
//!
//! Section grouping, grid slots and stacking offsets.

use super::*;
use crate::layout::fixtures::roster_of;
use crate::types::EngagementLevel::{self, *};

fn layout() -> LinearLayout {
    LinearLayout::from_config(&BullseyeConfig::default())
}

// -------------------------------------------------------------------------
// Grid slots
// -------------------------------------------------------------------------

#[test]
fn test_grid_columns() {
    assert_eq!(grid_columns(0), 0);
    assert_eq!(grid_columns(1), 1);
    assert_eq!(grid_columns(2), 2);
    assert_eq!(grid_columns(4), 2);
    assert_eq!(grid_columns(5), 3);
    assert_eq!(grid_columns(9), 3);
    assert_eq!(grid_columns(10), 4);
    assert_eq!(grid_columns(100), 10);
}

#[test]
fn test_five_members_fill_three_columns() {
    let slots: Vec<GridSlot> = (0..5).map(|i| GridSlot::for_index(i, 5)).collect();
    assert!(slots.iter().all(|s| s.columns == 3));
    assert_eq!(
        slots.iter().map(|s| s.row).collect::<Vec<_>>(),
        vec![0, 0, 0, 1, 1]
    );
    assert_eq!(
        slots.iter().map(|s| s.col).collect::<Vec<_>>(),
        vec![0, 1, 2, 0, 1]
    );
}

#[test]
fn test_offsets_are_centred() {
    let layout = layout();
    let slot = |col| GridSlot {
        row: 0,
        col,
        columns: 3,
    };
    assert_eq!(layout.offset(slot(0)), (-20.0, 0.0));
    assert_eq!(layout.offset(slot(1)), (0.0, 0.0));
    assert_eq!(layout.offset(slot(2)), (20.0, 0.0));
    assert_eq!(
        layout.offset(GridSlot {
            row: 2,
            col: 0,
            columns: 2
        }),
        (-10.0, 50.0)
    );
}

// -------------------------------------------------------------------------
// Sections
// -------------------------------------------------------------------------

#[test]
fn test_section_anchors() {
    let layout = layout();
    assert_eq!(layout.section_width(), 225.0);
    assert_eq!(layout.baseline_y(), 1005.0);
    assert_eq!(layout.anchor_x(CoarseBand::Outsider), 112.5);
    assert_eq!(layout.anchor_x(CoarseBand::Newcomer), 337.5);
    assert_eq!(layout.anchor_x(CoarseBand::Explorer), 562.5);
    assert_eq!(layout.anchor_x(CoarseBand::Practitioner), 787.5);
}

#[test]
fn test_five_outsiders_positions() {
    let records = roster_of(&[Outsider; 5]);
    let placements = layout().place(&records);
    let xs: Vec<f64> = placements.iter().map(|p| p.position.x).collect();
    let ys: Vec<f64> = placements.iter().map(|p| p.position.y).collect();
    assert_eq!(xs, vec![92.5, 112.5, 132.5, 92.5, 112.5]);
    assert_eq!(ys, vec![955.0, 955.0, 955.0, 930.0, 930.0]);
}

#[test]
fn test_edge_members_join_section_they_leave() {
    let layout = layout();
    let records = roster_of(&[EdgeOfNewcomer, EdgeOfExplorer, EdgeOfPractitioner, EdgeOfPro]);
    let placements = layout.place(&records);
    assert_eq!(placements[0].position.x, layout.anchor_x(CoarseBand::Outsider));
    assert_eq!(placements[1].position.x, layout.anchor_x(CoarseBand::Newcomer));
    assert_eq!(placements[2].position.x, layout.anchor_x(CoarseBand::Explorer));
    assert_eq!(
        placements[3].position.x,
        layout.anchor_x(CoarseBand::Practitioner)
    );
}

#[test]
fn test_section_rank_follows_roster_order_across_levels() {
    let records = roster_of(&[Outsider, Newcomer, EdgeOfNewcomer]);
    let placements = layout().place(&records);
    // Outsider section holds members 1 and 3 in a two-column grid
    assert_eq!(placements[0].position, Position::new(102.5, 955.0));
    assert_eq!(placements[2].position, Position::new(122.5, 955.0));
    assert_eq!(placements[1].position, Position::new(337.5, 955.0));
}

#[test]
fn test_no_two_members_share_a_cell() {
    let levels: Vec<EngagementLevel> = EngagementLevel::all()
        .into_iter()
        .cycle()
        .take(120)
        .collect();
    let records = roster_of(&levels);
    let placements = layout().place(&records);
    for i in 0..placements.len() {
        for j in (i + 1)..placements.len() {
            assert!(
                placements[i].position.distance(&placements[j].position) > 1.0,
                "members {} and {} overlap",
                placements[i].id,
                placements[j].id
            );
        }
    }
}

#[test]
fn test_sections_stay_within_their_columns() {
    let layout = layout();
    let records = roster_of(&[Newcomer; 16]);
    for placement in layout.place(&records) {
        let x = placement.position.x;
        assert!(x > layout.section_width() && x < 2.0 * layout.section_width());
        assert!(placement.position.y < layout.baseline_y());
    }
}

#[test]
fn test_empty_sections_do_not_panic() {
    let records = roster_of(&[Explorer, Explorer]);
    let placements = layout().place(&records);
    assert_eq!(placements.len(), 2);
    assert!(layout().place(&[]).is_empty());
}

//! Bullseye layout tests
//!
//! Band radii, slot spacing and the polar transform.

use std::f64::consts::{FRAC_PI_2, PI};

use super::*;
use crate::layout::fixtures::roster_of;
use crate::types::EngagementLevel::{self, *};

const EPS: f64 = 1e-9;

fn quarter() -> RingLayout {
    RingLayout::from_config(&BullseyeConfig::default())
}

fn full() -> RingLayout {
    let mut config = BullseyeConfig::default();
    config.rings.geometry = RingGeometry::Full;
    RingLayout::from_config(&config)
}

fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < EPS,
        "expected {expected}, got {actual}"
    );
}

/// Angle of a placed point as seen from the centre (y up)
fn angle_of(layout: &RingLayout, p: Position) -> f64 {
    let c = layout.center();
    (c.y - p.y).atan2(p.x - c.x)
}

// -------------------------------------------------------------------------
// Geometry
// -------------------------------------------------------------------------

#[test]
fn test_quarter_center_is_grid_corner() {
    assert_eq!(quarter().center(), Position::new(900.0, 900.0));
    assert_eq!(quarter().geometry(), RingGeometry::Quarter);
}

#[test]
fn test_boundaries_nest() {
    let layout = quarter();
    assert_close(layout.outer_boundary(CoarseBand::Practitioner), 225.0);
    assert_close(layout.outer_boundary(CoarseBand::Explorer), 450.0);
    assert_close(layout.outer_boundary(CoarseBand::Newcomer), 675.0);
    assert_close(layout.outer_boundary(CoarseBand::Outsider), 945.0);
    assert_close(layout.inner_boundary(CoarseBand::Practitioner), 67.5);
    assert_close(layout.inner_boundary(CoarseBand::Outsider), 675.0);
}

#[test]
fn test_band_radii_interpolation() {
    let layout = quarter();

    let outsider = layout.band_radii(CoarseBand::Outsider);
    assert_close(outsider.edge, 675.0 + 0.35 * 270.0);
    assert_close(outsider.core, 675.0 + 0.70 * 270.0);

    let newcomer = layout.band_radii(CoarseBand::Newcomer);
    assert_close(newcomer.edge, 528.75);
    assert_close(newcomer.core, 607.5);

    let practitioner = layout.band_radii(CoarseBand::Practitioner);
    assert_close(practitioner.edge, 67.5 + 0.35 * 157.5);
    assert_close(practitioner.core, 67.5 + 0.70 * 157.5);
}

#[test]
fn test_edge_radius_is_inside_core_radius() {
    let layout = quarter();
    for band in CoarseBand::all() {
        let radii = layout.band_radii(band);
        assert!(radii.edge < radii.core, "{band}");
        assert!(radii.edge > layout.inner_boundary(band));
        assert!(radii.core < layout.outer_boundary(band));
    }
}

#[test]
fn test_full_geometry_fits_grid() {
    let layout = full();
    assert_eq!(layout.center(), Position::new(450.0, 450.0));
    assert_close(layout.outer_boundary(CoarseBand::Outsider), 450.0);
    assert!(layout.band_radii(CoarseBand::Outsider).core < 450.0);
}

// -------------------------------------------------------------------------
// Angular slots
// -------------------------------------------------------------------------

#[test]
fn test_slot_angles_are_slot_centres() {
    let span = RingGeometry::Quarter.span();
    let angles = span.slot_angles(4);
    assert_eq!(angles.len(), 4);
    for (i, angle) in angles.iter().enumerate() {
        assert_close(*angle, FRAC_PI_2 + (i as f64 + 0.5) * (FRAC_PI_2 / 4.0));
    }
}

#[test]
fn test_slot_bounds_tile_the_span() {
    for geometry in [RingGeometry::Quarter, RingGeometry::Full] {
        let span = geometry.span();
        for n in 1..=60 {
            let bounds = span.slot_bounds(n);
            assert_eq!(bounds.len(), n);
            assert_close(bounds[0].0, span.start);
            assert_close(bounds[n - 1].1, span.start + span.span);

            let total: f64 = bounds.iter().map(|(from, to)| to - from).sum();
            assert!((total - span.span).abs() < 1e-9);

            for pair in bounds.windows(2) {
                assert_close(pair[0].1, pair[1].0);
                assert!(pair[0].0 < pair[1].0);
            }
        }
    }
}

#[test]
fn test_empty_sub_band_has_no_slots() {
    let span = RingGeometry::Full.span();
    assert_eq!(span.slot_width(0), None);
    assert!(span.slot_angles(0).is_empty());
    assert!(span.slot_bounds(0).is_empty());
}

#[test]
fn test_full_span_is_two_pi() {
    assert_close(RingGeometry::Full.span().span, 2.0 * PI);
    assert_close(RingGeometry::Quarter.span().span, FRAC_PI_2);
}

// -------------------------------------------------------------------------
// Placement
// -------------------------------------------------------------------------

#[test]
fn test_single_outsider_position() {
    let layout = quarter();
    let records = roster_of(&[Outsider]);
    let placements = layout.place(&records);

    let angle = FRAC_PI_2 + FRAC_PI_2 / 2.0;
    let radius = layout.band_radii(CoarseBand::Outsider).core;
    assert_eq!(placements[0].id, 1);
    assert_close(placements[0].position.x, 900.0 + angle.cos() * radius);
    assert_close(placements[0].position.y, 900.0 - angle.sin() * radius);
}

#[test]
fn test_members_sit_on_their_sub_band_radius() {
    let layout = quarter();
    let records = roster_of(&[
        Outsider,
        EdgeOfNewcomer,
        Newcomer,
        EdgeOfExplorer,
        Explorer,
        EdgeOfPractitioner,
    ]);
    let placements = layout.place(&records);
    let center = layout.center();

    for (record, placement) in records.iter().zip(&placements) {
        let level = record.engagement_level();
        let radii = layout.band_radii(level.coarse_band());
        let expected = if level.is_edge() { radii.edge } else { radii.core };
        assert_close(placement.position.distance(&center), expected);
    }
}

#[test]
fn test_practitioner_band_alternates_radii() {
    let layout = quarter();
    let records = roster_of(&[Practitioner, Pro, EdgeOfPro, Practitioner]);
    let placements = layout.place(&records);
    let center = layout.center();
    let radii = layout.band_radii(CoarseBand::Practitioner);

    let distances: Vec<f64> = placements
        .iter()
        .map(|p| p.position.distance(&center))
        .collect();
    assert_close(distances[0], radii.core);
    assert_close(distances[1], radii.edge);
    assert_close(distances[2], radii.core);
    assert_close(distances[3], radii.edge);
}

#[test]
fn test_sub_band_angles_have_exact_spacing() {
    let layout = quarter();
    let records = roster_of(&[Explorer; 5]);
    let placements = layout.place(&records);

    let step = FRAC_PI_2 / 5.0;
    let angles: Vec<f64> = placements
        .iter()
        .map(|p| angle_of(&layout, p.position))
        .collect();
    assert_close(angles[0], FRAC_PI_2 + step / 2.0);
    for pair in angles.windows(2) {
        assert!((pair[1] - pair[0] - step).abs() < 1e-9);
    }
}

#[test]
fn test_edge_and_core_are_slotted_independently() {
    let layout = quarter();
    let records = roster_of(&[Newcomer, EdgeOfExplorer, Newcomer]);
    let placements = layout.place(&records);

    // One edge member alone in its sub-band takes the middle of the span
    assert_close(
        angle_of(&layout, placements[1].position),
        FRAC_PI_2 + FRAC_PI_2 / 2.0,
    );
    // Two core members split the span in halves
    assert_close(
        angle_of(&layout, placements[0].position),
        FRAC_PI_2 + FRAC_PI_2 / 4.0,
    );
    assert_close(
        angle_of(&layout, placements[2].position),
        FRAC_PI_2 + 3.0 * FRAC_PI_2 / 4.0,
    );
}

#[test]
fn test_quarter_placements_stay_in_upper_left_quadrant() {
    let layout = quarter();
    let levels: Vec<EngagementLevel> = EngagementLevel::all()
        .into_iter()
        .cycle()
        .take(90)
        .collect();
    let records = roster_of(&levels);
    for placement in layout.place(&records) {
        assert!(placement.position.x <= 900.0 + EPS);
        assert!(placement.position.y <= 900.0 + EPS);
        assert!(placement.position.x >= 0.0);
        assert!(placement.position.y >= 0.0);
    }
}

#[test]
fn test_ring_placement_order_matches_records() {
    let layout = full();
    let records = roster_of(&[Pro, Outsider, Explorer]);
    let ids: Vec<u32> = layout.place(&records).iter().map(|p| p.id).collect();
    assert_eq!(ids, vec![1, 2, 3]);
}

#[test]
fn test_ring_place_empty() {
    assert!(quarter().place(&[]).is_empty());
}

mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(100))]

        /// Slots never overlap and always cover the whole span
        #[test]
        fn prop_slots_partition_span(n in 1usize..500, full_circle in any::<bool>()) {
            let geometry = if full_circle { RingGeometry::Full } else { RingGeometry::Quarter };
            let span = geometry.span();
            let bounds = span.slot_bounds(n);
            let total: f64 = bounds.iter().map(|(a, b)| b - a).sum();
            prop_assert!((total - span.span).abs() < 1e-9);

            let angles = span.slot_angles(n);
            for (angle, (from, to)) in angles.iter().zip(&bounds) {
                prop_assert!(from < angle && angle < to);
            }
        }
    }
}

// Copyright 2026 the Carte Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::string::String;
use alloc::vec::Vec;
use core::fmt::Write as _;

use carte_flow::{Direction, DivisionPaths, MergePolicy, merge_nearby};
use carte_scale::FactorScale;
use kurbo::Point;

use crate::error::RibbonError;
use crate::projection::FlowProjection;
use crate::vector;

/// Configuration for ribbon construction.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct RibbonConfig {
    /// How segment endpoints combine with nearby divisions.
    pub merge: MergePolicy,
    /// Band width from survivor count, factor-modulated by longitude.
    pub width: FactorScale,
}

/// A closed variable-width polygon tracing one division in one direction.
///
/// Points are in plot space and wind from the raw anchor waypoint along
/// the band's upper edge, then back along the lower edge, closing the
/// ring. Under well-formed (monotone, non-reversing) input the ring is
/// simple; that property is assumed, not enforced.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Ribbon {
    points: Vec<Point>,
}

impl Ribbon {
    /// The polygon outline in winding order.
    #[must_use]
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    /// Returns `true` when the division has no waypoint in the requested
    /// direction at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Formats the outline as an SVG `points` attribute value.
    ///
    /// Coordinates are fixed to `decimals` places; three to four decimals
    /// reproduce the reference charts faithfully.
    #[must_use]
    pub fn points_attr(&self, decimals: usize) -> String {
        let mut out = String::new();
        for (i, p) in self.points.iter().enumerate() {
            if i > 0 {
                out.push(' ');
            }
            let _ = write!(out, "{:.prec$},{:.prec$}", p.x, p.y, prec = decimals);
        }
        out
    }
}

/// Builds the ribbon polygon for one division and direction.
///
/// A segment starts at every waypoint of the division whose direction
/// matches and ends at the division's next waypoint regardless of that
/// waypoint's own direction, so a band connects through the turnaround.
/// Terminal waypoints start no segment. Segment starts resolve through
/// [`merge_nearby`] normally; segment ends are forced into their merged
/// aggregate even when individually opted out, so adjacent segments share
/// a consistent boundary.
///
/// Each segment contributes four corners, offset from its merged endpoints
/// by half the band width along the segment's upward perpendicular. The
/// width comes from the start's merged survivor count, modulated by the
/// start longitude. The ring is the raw anchor waypoint, the upper edge in
/// path order, then the lower edge reversed, every point projected through
/// `projection`.
///
/// A division with matching waypoints but no segments yields the single
/// projected anchor (no visible band); a division with no matching
/// waypoint yields an empty ribbon.
///
/// # Errors
///
/// Propagates merge failures, and surfaces a merged segment that collapses
/// to zero length as [`GeometryError::ZeroLengthVector`](crate::GeometryError::ZeroLengthVector)
/// rather than emitting `NaN` geometry.
pub fn build_ribbon(
    paths: &DivisionPaths,
    division: u32,
    direction: Direction,
    cfg: &RibbonConfig,
    projection: &FlowProjection,
) -> Result<Ribbon, RibbonError> {
    let path = paths.path(division);
    let all = paths.movements();

    let Some(anchor) = path.iter().find(|m| m.direction == direction) else {
        return Ok(Ribbon::default());
    };

    let mut top: Vec<Point> = Vec::new();
    let mut bottom_pairs: Vec<(Point, Point)> = Vec::new();

    for (m, n) in path.iter().zip(path.iter().skip(1)) {
        if m.direction != direction {
            continue;
        }
        let start = merge_nearby(all, m, false, &cfg.merge)?;
        let end = merge_nearby(all, n, true, &cfg.merge)?;

        let s = start.geo().point();
        let e = end.geo().point();
        let perp = vector::upward(vector::perpendicular(e - s)?);

        let width = cfg.width.map_factored(start.survivors as f64, start.lng);
        let half = perp * (width / 2.0);

        top.push(s + half);
        top.push(e + half);
        bottom_pairs.push((e - half, s - half));
    }

    let mut points = Vec::with_capacity(1 + top.len() + 2 * bottom_pairs.len());
    points.push(anchor.geo().point());
    points.extend(top);
    for (right, left) in bottom_pairs.into_iter().rev() {
        points.push(right);
        points.push(left);
    }

    Ok(Ribbon {
        points: points.into_iter().map(|p| projection.project(p)).collect(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use carte_flow::Movement;
    use kurbo::Vec2;

    fn width_scale() -> FactorScale {
        FactorScale::new([0.0, 400_000.0], [0.0, 2.0]).unwrap()
    }

    fn cfg() -> RibbonConfig {
        RibbonConfig {
            merge: MergePolicy::default(),
            width: width_scale(),
        }
    }

    #[test]
    fn single_segment_yields_anchor_plus_four_corners() {
        let paths = DivisionPaths::new(&[
            Movement::waypoint(23.0, 54.0, 1, Direction::Advance, 400_000),
            Movement::waypoint(25.0, 54.5, 1, Direction::Advance, 380_000),
        ]);
        let ribbon = build_ribbon(
            &paths,
            1,
            Direction::Advance,
            &cfg(),
            &FlowProjection::default(),
        )
        .unwrap();

        let pts = ribbon.points();
        assert_eq!(pts.len(), 5);
        assert_eq!(pts[0], Point::new(23.0, 54.0));

        // Top and bottom edges are symmetric about the path line.
        let start = Point::new(23.0, 54.0);
        let end = Point::new(25.0, 54.5);
        assert!((pts[1].midpoint(pts[4]) - start).hypot() < 1e-12);
        assert!((pts[2].midpoint(pts[3]) - end).hypot() < 1e-12);

        // The offset is perpendicular to the segment.
        let seg = end - start;
        assert!((pts[1] - pts[4]).dot(seg).abs() < 1e-12);

        // Width at both ends equals the width scale at the start waypoint.
        let expected = width_scale().map_factored(400_000.0, 23.0);
        assert!(((pts[1] - pts[4]).hypot() - expected).abs() < 1e-12);
        assert!(((pts[2] - pts[3]).hypot() - expected).abs() < 1e-12);

        // The upper edge really is the upper one.
        assert!(pts[1].y > pts[4].y);
    }

    #[test]
    fn terminal_waypoint_emits_no_segment() {
        let paths = DivisionPaths::new(&[
            Movement::waypoint(23.0, 54.0, 1, Direction::Advance, 400_000),
            Movement::waypoint(25.0, 54.5, 1, Direction::Advance, 380_000),
            Movement::waypoint(26.0, 54.6, 1, Direction::Advance, 370_000),
        ]);
        let ribbon = build_ribbon(
            &paths,
            1,
            Direction::Advance,
            &cfg(),
            &FlowProjection::default(),
        )
        .unwrap();
        // Two segments: anchor + 2 * 4 corners.
        assert_eq!(ribbon.points().len(), 9);
    }

    #[test]
    fn lone_waypoint_yields_only_the_anchor() {
        let paths =
            DivisionPaths::new(&[Movement::waypoint(23.0, 54.0, 1, Direction::Advance, 400_000)]);
        let ribbon = build_ribbon(
            &paths,
            1,
            Direction::Advance,
            &cfg(),
            &FlowProjection::default(),
        )
        .unwrap();
        assert_eq!(ribbon.points(), [Point::new(23.0, 54.0)]);
        assert!(!ribbon.is_empty());
    }

    #[test]
    fn absent_direction_yields_an_empty_ribbon() {
        let paths = DivisionPaths::new(&[
            Movement::waypoint(23.0, 54.0, 1, Direction::Advance, 400_000),
            Movement::waypoint(25.0, 54.5, 1, Direction::Advance, 380_000),
        ]);
        let ribbon = build_ribbon(
            &paths,
            1,
            Direction::Retreat,
            &cfg(),
            &FlowProjection::default(),
        )
        .unwrap();
        assert!(ribbon.is_empty());
        assert_eq!(ribbon.points_attr(3), "");
    }

    #[test]
    fn band_connects_through_the_turnaround() {
        // The last advance waypoint links to the first retreat waypoint of
        // the same division; the retreat leg then starts its own band.
        let paths = DivisionPaths::new(&[
            Movement::waypoint(23.0, 54.0, 1, Direction::Advance, 400_000),
            Movement::waypoint(25.0, 54.5, 1, Direction::Advance, 380_000),
            Movement::waypoint(24.0, 54.2, 1, Direction::Retreat, 50_000),
        ]);
        let advance = build_ribbon(
            &paths,
            1,
            Direction::Advance,
            &cfg(),
            &FlowProjection::default(),
        )
        .unwrap();
        // Two advance segments, the second ending on the retreat waypoint.
        assert_eq!(advance.points().len(), 9);

        let retreat = build_ribbon(
            &paths,
            1,
            Direction::Retreat,
            &cfg(),
            &FlowProjection::default(),
        )
        .unwrap();
        // The retreat waypoint is terminal: anchor only.
        assert_eq!(retreat.points().len(), 1);
    }

    #[test]
    fn forced_end_merge_keeps_adjacent_segments_consistent() {
        // The shared middle waypoint opts out of merging, but as a segment
        // end it is still forced into the aggregate with division 2, so
        // the first segment ends where the band visually runs.
        let mut middle = Movement::waypoint(25.0, 54.0, 1, Direction::Advance, 300_000);
        middle.merge = false;
        let paths = DivisionPaths::new(&[
            Movement::waypoint(23.0, 54.0, 1, Direction::Advance, 300_000),
            middle,
            Movement::waypoint(25.0, 54.2, 2, Direction::Advance, 320_000),
        ]);
        let ribbon = build_ribbon(
            &paths,
            1,
            Direction::Advance,
            &cfg(),
            &FlowProjection::default(),
        )
        .unwrap();

        // The merged end anchors at division 2's waypoint (more survivors).
        let pts = ribbon.points();
        assert_eq!(pts.len(), 5);
        assert!((pts[2].midpoint(pts[3]) - Point::new(25.0, 54.2)).hypot() < 1e-12);
    }

    #[test]
    fn collapsed_segment_is_a_geometry_error() {
        let paths = DivisionPaths::new(&[
            Movement::waypoint(23.0, 54.0, 1, Direction::Advance, 400_000),
            Movement::waypoint(23.0, 54.0, 1, Direction::Advance, 400_000),
        ]);
        let err = build_ribbon(
            &paths,
            1,
            Direction::Advance,
            &cfg(),
            &FlowProjection::default(),
        )
        .unwrap_err();
        assert_eq!(
            err,
            RibbonError::Geometry(crate::GeometryError::ZeroLengthVector)
        );
    }

    #[test]
    fn points_attr_fixes_the_precision() {
        let ribbon = Ribbon {
            points: [Point::new(1.0 / 3.0, 2.0), Point::new(4.56789, -0.125)].into(),
        };
        assert_eq!(ribbon.points_attr(3), "0.333,2.000 4.568,-0.125");
        assert_eq!(ribbon.points_attr(4), "0.3333,2.0000 4.5679,-0.1250");
    }

    #[test]
    fn rebuilding_from_identical_input_is_bit_identical() {
        let paths = DivisionPaths::new(&[
            Movement::waypoint(23.0, 54.0, 1, Direction::Advance, 400_000),
            Movement::waypoint(25.0, 54.5, 1, Direction::Advance, 380_000),
        ]);
        let a = build_ribbon(
            &paths,
            1,
            Direction::Advance,
            &cfg(),
            &FlowProjection::default(),
        )
        .unwrap();
        let b = build_ribbon(
            &paths,
            1,
            Direction::Advance,
            &cfg(),
            &FlowProjection::default(),
        )
        .unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn descending_segment_still_offsets_upward() {
        // The upward canonicalization applies per segment, so a descending
        // segment still offsets its upper edge upward.
        let paths = DivisionPaths::new(&[
            Movement::waypoint(23.0, 55.0, 1, Direction::Advance, 400_000),
            Movement::waypoint(25.0, 54.0, 1, Direction::Advance, 380_000),
        ]);
        let ribbon = build_ribbon(
            &paths,
            1,
            Direction::Advance,
            &cfg(),
            &FlowProjection::default(),
        )
        .unwrap();
        let pts = ribbon.points();
        let seg = Vec2::new(2.0, -1.0);
        let offset = pts[1] - Point::new(23.0, 55.0);
        assert!(offset.y > 0.0);
        assert!(offset.dot(seg).abs() < 1e-12);
    }
}

// Copyright 2026 the Carte Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::string::String;
use alloc::vec::Vec;

use carte_flow::{
    Dataset, Direction, DivisionPaths, MergePolicy, interpolate_lat_at, merge_nearby,
};
use carte_ribbon::{Ribbon, RibbonConfig, build_ribbon};
use carte_scale::FactorScale;
use kurbo::{Line, Point};

use crate::error::ChartError;
use crate::scales;

/// Longitude span of the temperature grid, from the reference chart.
const GRID_SPAN: [f64; 2] = [26.7, 37.6];

/// Knobs for assembling the chart geometry.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ChartConfig {
    /// How nearby divisions combine into display bands.
    pub merge: MergePolicy,
    /// Band width from survivor count.
    pub width: FactorScale,
    /// Label nudge off the band edge, as a multiple of the half band
    /// width, for movements that do not set their own.
    pub label_offset_default: f64,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            merge: MergePolicy::default(),
            width: scales::width_scale(),
            label_offset_default: 1.0,
        }
    }
}

/// One division's band in one direction.
#[derive(Clone, Debug, PartialEq)]
pub struct FlowRibbon {
    /// The division drawn.
    pub division: u32,
    /// Advance or retreat leg.
    pub direction: Direction,
    /// The plot-space polygon outline.
    pub ribbon: Ribbon,
}

/// A survivor-count label anchor.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SurvivorLabel {
    /// The division the labeled waypoint belongs to.
    pub division: u32,
    /// The leg the label annotates.
    pub direction: Direction,
    /// The merged survivor total displayed.
    pub survivors: u64,
    /// Plot-space anchor, nudged clear of the band.
    pub position: Point,
}

/// A place-name label anchor.
#[derive(Clone, Debug, PartialEq)]
pub struct CityAnchor {
    /// Display name.
    pub name: String,
    /// Plot-space anchor, including the record's geographic offsets.
    pub position: Point,
    /// Optional font override, passed through.
    pub font: Option<String>,
}

/// Every derived geometric feature of one chart.
///
/// All fields are plain plot-space values; the renderer decides stroke,
/// fill, and text layout.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ChartGeometry {
    /// Bands per division and direction, empty ribbons omitted.
    pub ribbons: Vec<FlowRibbon>,
    /// Survivor-count labels for label-flagged waypoints.
    pub survivor_labels: Vec<SurvivorLabel>,
    /// Place-name label anchors.
    pub city_anchors: Vec<CityAnchor>,
    /// The temperature curve, one point per sample in date order.
    pub temperature_curve: Vec<Point>,
    /// Vertical connectors from each curve point up to the retreat band.
    pub temperature_connectors: Vec<Line>,
}

impl ChartGeometry {
    /// Derives the full chart geometry from a dataset.
    ///
    /// # Errors
    ///
    /// Propagates merge, interpolation, and ribbon failures. Temperature
    /// connectors require retreat movements bracketing every sample's
    /// longitude; a dataset with temperatures but no such movements fails
    /// rather than emitting a dangling connector.
    pub fn build(data: &Dataset, cfg: &ChartConfig) -> Result<Self, ChartError> {
        let paths = DivisionPaths::new(&data.movements);
        let ribbon_cfg = RibbonConfig {
            merge: cfg.merge,
            width: cfg.width,
        };

        let mut ribbons = Vec::new();
        for division in paths.divisions() {
            for direction in [Direction::Advance, Direction::Retreat] {
                let ribbon = build_ribbon(
                    &paths,
                    division,
                    direction,
                    &ribbon_cfg,
                    &scales::projection(direction),
                )?;
                if !ribbon.is_empty() {
                    ribbons.push(FlowRibbon {
                        division,
                        direction,
                        ribbon,
                    });
                }
            }
        }

        Ok(Self {
            ribbons,
            survivor_labels: survivor_labels(&paths, cfg)?,
            city_anchors: city_anchors(data),
            temperature_curve: temperature_curve(data),
            temperature_connectors: temperature_connectors(data, cfg)?,
        })
    }
}

fn survivor_labels(
    paths: &DivisionPaths,
    cfg: &ChartConfig,
) -> Result<Vec<SurvivorLabel>, ChartError> {
    let mut labels = Vec::new();
    for division in paths.divisions() {
        let path = paths.path(division);
        for (i, m) in path.iter().enumerate() {
            if !m.label {
                continue;
            }
            let merged = merge_nearby(paths.movements(), m, false, &cfg.merge)?;

            // Optionally slide the anchor along the outgoing segment.
            let mut geo = merged.geo().point();
            if let (Some(center), Some(next)) = (m.label_center_scale, path.get(i + 1)) {
                geo = geo + (next.geo().point() - geo) * center;
            }

            // Place the label clear of the band's upper edge. The width
            // scale yields plot units, so the nudge happens after
            // projection; plot y grows downward, hence the subtraction.
            let width = cfg.width.map_factored(merged.survivors as f64, merged.lng);
            let mut position = scales::projection(m.direction).project(geo);
            position.y -= width / 2.0 * m.label_offset_scale.unwrap_or(cfg.label_offset_default);

            labels.push(SurvivorLabel {
                division,
                direction: m.direction,
                survivors: merged.survivors,
                position,
            });
        }
    }
    Ok(labels)
}

fn city_anchors(data: &Dataset) -> Vec<CityAnchor> {
    let projection = scales::projection(Direction::Advance);
    data.cities
        .iter()
        .map(|c| {
            let geo = Point::new(
                c.lng + c.lng_offset.unwrap_or(0.0),
                c.lat + c.lat_offset.unwrap_or(0.0),
            );
            CityAnchor {
                name: c.name.clone(),
                position: projection.project(geo),
                font: c.font.clone(),
            }
        })
        .collect()
}

fn temperature_curve(data: &Dataset) -> Vec<Point> {
    let lng = scales::longitude_scale();
    let temp = scales::temperature_scale();
    data.temperatures
        .iter()
        .map(|s| Point::new(lng.map(s.lng), temp.map(s.temp)))
        .collect()
}

fn temperature_connectors(data: &Dataset, cfg: &ChartConfig) -> Result<Vec<Line>, ChartError> {
    let lng = scales::longitude_scale();
    let temp = scales::temperature_scale();
    let retreat = scales::latitude_scale(Direction::Retreat);

    let mut connectors = Vec::new();
    for s in &data.temperatures {
        let lat = interpolate_lat_at(&data.movements, Direction::Retreat, s.lng, &cfg.merge)?;
        let x = lng.map(s.lng);
        connectors.push(Line::new(
            (x, temp.map(s.temp)),
            (x, retreat.map_factored(lat, s.lng)),
        ));
    }
    Ok(connectors)
}

/// Horizontal grid segments for the temperature strip.
///
/// One segment per requested temperature, spanning the reference chart's
/// grid extent.
#[must_use]
pub fn temperature_grid_lines(temps: &[f64]) -> Vec<Line> {
    let lng = scales::longitude_scale();
    let temp = scales::temperature_scale();
    temps
        .iter()
        .map(|&t| {
            let y = temp.map(t);
            Line::new((lng.map(GRID_SPAN[0]), y), (lng.map(GRID_SPAN[1]), y))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use carte_flow::Movement;

    fn mv(lng: f64, lat: f64, division: u32, direction: Direction, survivors: u64) -> Movement {
        Movement::waypoint(lng, lat, division, direction, survivors)
    }

    #[test]
    fn grid_lines_span_the_reference_extent() {
        let lines = temperature_grid_lines(&[0.0, -10.0, -20.0, -30.0]);
        assert_eq!(lines.len(), 4);
        assert_eq!(lines[0].p0.y, 30.0);
        assert_eq!(lines[3].p0.y, 37.0);
        for line in &lines {
            assert_eq!(line.p0.y, line.p1.y);
            assert!(line.p0.x < line.p1.x);
        }
    }

    #[test]
    fn label_nudge_clears_the_band_edge() {
        let mut labeled = mv(32.0, 54.8, 1, Direction::Advance, 145_000);
        labeled.label = true;
        let paths = DivisionPaths::new(&[labeled]);

        let cfg = ChartConfig::default();
        let labels = survivor_labels(&paths, &cfg).unwrap();
        assert_eq!(labels.len(), 1);

        let band_center = scales::projection(Direction::Advance).project(Point::new(32.0, 54.8));
        let half_width = cfg.width.map_factored(145_000.0, 32.0) / 2.0;
        assert_eq!(labels[0].position.x, band_center.x);
        assert!((band_center.y - labels[0].position.y - half_width).abs() < 1e-12);
    }

    #[test]
    fn label_center_scale_slides_along_the_segment() {
        let mut labeled = mv(24.0, 54.0, 1, Direction::Advance, 100_000);
        labeled.label = true;
        labeled.label_center_scale = Some(0.5);
        labeled.label_offset_scale = Some(0.0);
        let paths = DivisionPaths::new(&[labeled, mv(26.0, 54.4, 1, Direction::Advance, 90_000)]);

        let labels = survivor_labels(&paths, &ChartConfig::default()).unwrap();
        let expected =
            scales::projection(Direction::Advance).project(Point::new(25.0, 54.2));
        assert!((labels[0].position - expected).hypot() < 1e-12);
    }
}

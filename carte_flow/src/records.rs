// Copyright 2026 the Carte Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The record types of one flow-map dataset.
//!
//! Records are plain values read once from an external payload and never
//! mutated afterwards. The `serde` feature gates derives matching the
//! conventional JSON shape: camel-cased optional fields and the single
//! letter direction codes `"A"`/`"R"` (the spelled-out names are accepted
//! as aliases).

use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;

use kurbo::Point;

/// Whether a path segment moves the army out or back.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Direction {
    /// Forward movement, away from the origin of the campaign.
    #[cfg_attr(feature = "serde", serde(rename = "A", alias = "Advance"))]
    Advance,
    /// Return movement.
    #[cfg_attr(feature = "serde", serde(rename = "R", alias = "Retreat"))]
    Retreat,
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Advance => f.write_str("advance"),
            Self::Retreat => f.write_str("retreat"),
        }
    }
}

/// A geographic coordinate in degrees.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GeoPoint {
    /// Longitude in degrees.
    pub lng: f64,
    /// Latitude in degrees.
    pub lat: f64,
}

impl GeoPoint {
    /// Creates a geographic coordinate.
    #[must_use]
    pub fn new(lng: f64, lat: f64) -> Self {
        Self { lng, lat }
    }

    /// Euclidean distance to `other` in raw lng/lat units.
    ///
    /// Merge resolution deliberately measures proximity in coordinate
    /// space, not on the sphere; the thresholds are calibrated for it.
    #[must_use]
    pub fn distance(self, other: Self) -> f64 {
        (self.point() - other.point()).hypot()
    }

    /// This coordinate as a plot-space point (`lng → x`, `lat → y`).
    #[must_use]
    pub fn point(self) -> Point {
        Point::new(self.lng, self.lat)
    }
}

/// One waypoint of one division's path.
///
/// Waypoints are ordered by traversal within the dataset; consecutive
/// waypoints of the same division form a path segment. See
/// [`DivisionPaths`](crate::DivisionPaths) for the adjacency rules.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct Movement {
    /// Longitude in degrees.
    pub lng: f64,
    /// Latitude in degrees.
    pub lat: f64,
    /// The division this waypoint belongs to.
    pub division: u32,
    /// Advance or retreat leg.
    pub direction: Direction,
    /// Army size at this waypoint.
    pub survivors: u64,
    /// Whether this waypoint may be combined with nearby divisions for
    /// display. Defaults to `true`; see
    /// [`merge_nearby`](crate::merge_nearby) for the opt-out semantics.
    #[cfg_attr(feature = "serde", serde(default = "default_merge"))]
    pub merge: bool,
    /// Whether a survivor-count label is placed at this waypoint.
    #[cfg_attr(feature = "serde", serde(default))]
    pub label: bool,
    /// Label nudge off the band edge, as a multiple of the half band width.
    #[cfg_attr(feature = "serde", serde(default))]
    pub label_offset_scale: Option<f64>,
    /// Label nudge along the outgoing segment, as a fraction of it.
    #[cfg_attr(feature = "serde", serde(default))]
    pub label_center_scale: Option<f64>,
}

#[cfg(feature = "serde")]
fn default_merge() -> bool {
    true
}

impl Movement {
    /// Creates a plain waypoint with default display flags.
    #[must_use]
    pub fn waypoint(
        lng: f64,
        lat: f64,
        division: u32,
        direction: Direction,
        survivors: u64,
    ) -> Self {
        Self {
            lng,
            lat,
            division,
            direction,
            survivors,
            merge: true,
            label: false,
            label_offset_scale: None,
            label_center_scale: None,
        }
    }

    /// This waypoint's geographic coordinate.
    #[must_use]
    pub fn geo(&self) -> GeoPoint {
        GeoPoint::new(self.lng, self.lat)
    }
}

/// A displayed aggregate of one or more nearby same-direction waypoints.
///
/// Always derived on demand by [`merge_nearby`](crate::merge_nearby), never
/// stored. The type itself marks the value as an aggregate; there is no
/// sentinel division id.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MergedMovement {
    /// Longitude of the anchoring waypoint (the largest division merged).
    pub lng: f64,
    /// Latitude of the anchoring waypoint.
    pub lat: f64,
    /// The shared direction of every merged waypoint.
    pub direction: Direction,
    /// Sum of survivors over the unique divisions merged.
    pub survivors: u64,
}

impl MergedMovement {
    /// This aggregate's geographic coordinate.
    #[must_use]
    pub fn geo(&self) -> GeoPoint {
        GeoPoint::new(self.lng, self.lat)
    }
}

impl From<Movement> for MergedMovement {
    /// A single waypoint viewed as its own aggregate.
    fn from(m: Movement) -> Self {
        Self {
            lng: m.lng,
            lat: m.lat,
            direction: m.direction,
            survivors: m.survivors,
        }
    }
}

/// A label anchor for a named place.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct City {
    /// Longitude in degrees.
    pub lng: f64,
    /// Latitude in degrees.
    pub lat: f64,
    /// Display name.
    pub name: String,
    /// Optional label offset east, in degrees of longitude.
    #[cfg_attr(feature = "serde", serde(default))]
    pub lng_offset: Option<f64>,
    /// Optional label offset north, in degrees of latitude.
    #[cfg_attr(feature = "serde", serde(default))]
    pub lat_offset: Option<f64>,
    /// Optional font override, passed through to the renderer.
    #[cfg_attr(feature = "serde", serde(default))]
    pub font: Option<String>,
}

/// One point on the temperature curve, ordered by date.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TemperatureSample {
    /// Longitude in degrees.
    pub lng: f64,
    /// Latitude, when the sample is tied to a point on the path.
    #[cfg_attr(feature = "serde", serde(default))]
    pub lat: Option<f64>,
    /// Temperature in degrees Réaumur.
    pub temp: f64,
    /// Month label, passed through to the renderer.
    #[cfg_attr(feature = "serde", serde(default))]
    pub month: Option<String>,
    /// Day-of-month label.
    #[cfg_attr(feature = "serde", serde(default))]
    pub day: Option<u32>,
}

/// The full in-memory payload for one chart.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Dataset {
    /// Movement waypoints in traversal order.
    #[cfg_attr(feature = "serde", serde(default))]
    pub movements: Vec<Movement>,
    /// Place label anchors.
    #[cfg_attr(feature = "serde", serde(default))]
    pub cities: Vec<City>,
    /// Temperature curve samples in date order.
    #[cfg_attr(feature = "serde", serde(default))]
    pub temperatures: Vec<TemperatureSample>,
}

// Copyright 2026 the Carte Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Carte Chart: the 1812-campaign flow map, assembled.
//!
//! This crate pins down the scale configuration of the classic chart of
//! Napoleon's Russian campaign and derives every geometric feature the
//! renderer draws from a [`Dataset`](carte_flow::Dataset):
//!
//! - [`scales`]: the canonical longitude, latitude, width, and
//!   temperature scales, including the direction-dependent latitude
//!   offsets that separate the advance and retreat bands.
//! - [`ChartGeometry`]: ribbons per division and direction, survivor
//!   label anchors, city label anchors, the temperature curve, and the
//!   vertical connectors tying the curve to the retreat band.
//!
//! The output is plain plot-space geometry (`kurbo` points and lines);
//! drawing it is the caller's concern.
//!
//! ## Minimal example
//!
//! ```rust
//! use carte_chart::{ChartConfig, ChartGeometry};
//! use carte_flow::{Dataset, Direction, Movement};
//!
//! let data = Dataset {
//!     movements: [
//!         Movement::waypoint(24.0, 54.9, 1, Direction::Advance, 422_000),
//!         Movement::waypoint(32.0, 54.8, 1, Direction::Advance, 145_000),
//!         Movement::waypoint(32.0, 54.4, 1, Direction::Retreat, 98_000),
//!         Movement::waypoint(24.0, 54.4, 1, Direction::Retreat, 10_000),
//!     ]
//!     .into(),
//!     ..Dataset::default()
//! };
//!
//! let geometry = ChartGeometry::build(&data, &ChartConfig::default())?;
//! assert_eq!(geometry.ribbons.len(), 2);
//! # Ok::<(), carte_chart::ChartError>(())
//! ```
//!
//! This crate is `no_std`.

#![no_std]

extern crate alloc;

mod error;
mod geometry;
pub mod scales;

pub use error::ChartError;
pub use geometry::{
    ChartConfig, ChartGeometry, CityAnchor, FlowRibbon, SurvivorLabel, temperature_grid_lines,
};

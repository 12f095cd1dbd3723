// Copyright 2026 the Carte Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Carte Ribbon: variable-width flow ribbon polygons.
//!
//! A ribbon traces one division's path in one direction as a closed
//! polygon whose width at each waypoint encodes the army size there. This
//! crate builds those polygons from grouped movement records:
//!
//! - [`vector`]: guarded perpendicular/unit/angle helpers over
//!   [`kurbo::Vec2`]. Degenerate (zero-length) inputs are explicit errors,
//!   never `NaN` coordinates.
//! - [`FlowProjection`]: the pair of coordinate scales that places
//!   data-space points on the plot, with the vertical scale modulated by
//!   the horizontal input.
//! - [`build_ribbon`]: the polygon construction itself, offsetting each
//!   path segment perpendicular to its direction by half the band width
//!   and closing the ring along the bottom edge.
//!
//! ## Minimal example
//!
//! ```rust
//! use carte_flow::{Direction, DivisionPaths, Movement};
//! use carte_ribbon::{FlowProjection, RibbonConfig, build_ribbon};
//! use carte_scale::FactorScale;
//!
//! let paths = DivisionPaths::new(&[
//!     Movement::waypoint(23.0, 54.0, 1, Direction::Advance, 400_000),
//!     Movement::waypoint(25.0, 54.5, 1, Direction::Advance, 380_000),
//! ]);
//!
//! let cfg = RibbonConfig {
//!     width: FactorScale::new([0.0, 400_000.0], [0.0, 2.0])?,
//!     ..RibbonConfig::default()
//! };
//!
//! // One segment: four ribbon corners plus the raw anchor waypoint.
//! let ribbon = build_ribbon(&paths, 1, Direction::Advance, &cfg, &FlowProjection::default())?;
//! assert_eq!(ribbon.points().len(), 5);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! This crate is `no_std`.

#![no_std]

extern crate alloc;

mod error;
mod projection;
mod ribbon;
pub mod vector;

pub use error::{GeometryError, RibbonError};
pub use projection::FlowProjection;
pub use ribbon::{Ribbon, RibbonConfig, build_ribbon};

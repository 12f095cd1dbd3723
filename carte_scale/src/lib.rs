// Copyright 2026 the Carte Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Carte Scale: linear and factor-modulated scale primitives.
//!
//! This crate provides the coordinate scales used by flow-map geometry:
//! - [`LinearScale`]: an affine `domain → range` mapping.
//! - [`FactorScale`]: a linear mapping whose effective gain and offset
//!   depend on a secondary "factor" input.
//!
//! The factor mechanism is what lets a chart drawn in a non-conformal
//! projection compress one axis depending on position along the other: a
//! latitude scale whose gain and offset are driven by longitude maps a
//! fixed real-world distance to different spans at different longitudes.
//!
//! Scales are plain immutable values. Construction validates the domain, so
//! mapping itself can never divide by zero.
//!
//! ## Minimal example
//!
//! ```rust
//! use carte_scale::{FactorScale, LinearScale};
//!
//! // Plain linear mapping: the midpoint of the domain maps to the
//! // midpoint of the range.
//! let lat = LinearScale::new([54.0, 56.0], [30.0, 0.0])?;
//! assert_eq!(lat.map(55.0), 15.0);
//!
//! // The same mapping, modulated by longitude: at the western edge the
//! // gain shrinks latitude spans and an offset re-anchors the band.
//! let lat = FactorScale::new([54.0, 56.0], [30.0, 0.0])?
//!     .with_factor_domain([23.0, 39.0])?
//!     .with_gain_range([0.4, 1.0])
//!     .with_offset_range([15.0, 0.0]);
//! assert_eq!(lat.map_factored(55.0, 23.0), 15.0 * 0.4 + 15.0);
//! # Ok::<(), carte_scale::ScaleError>(())
//! ```
//!
//! This crate is `no_std`.

#![no_std]

mod error;
mod factor;
mod linear;

pub use error::ScaleError;
pub use factor::FactorScale;
pub use linear::LinearScale;

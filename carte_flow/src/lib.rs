// Copyright 2026 the Carte Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Carte Flow: movement records, division paths, and merge resolution.
//!
//! This crate holds the semantic data model of a troop-flow map and the
//! operations that prepare it for geometry construction:
//!
//! - **Records** ([`Movement`], [`City`], [`TemperatureSample`],
//!   [`Dataset`]): plain immutable values describing one campaign. With the
//!   `serde` feature enabled they parse directly from the conventional
//!   JSON payload shape.
//! - **Division paths** ([`DivisionPaths`]): an explicit per-division
//!   ordered waypoint grouping. Adjacency ("next"/"previous" waypoint) is
//!   defined within a division's own sequence, never across divisions.
//! - **Merge resolution** ([`merge_nearby`], [`MergePolicy`]): collapses
//!   nearby same-direction waypoints of several divisions into one
//!   [`MergedMovement`] whose survivor count is the sum over the unique
//!   divisions involved.
//! - **Interpolation** ([`interpolate_lat_at`]): the latitude of a
//!   direction's band at an arbitrary longitude, linearly interpolated
//!   between merged bracketing waypoints.
//!
//! Everything here is a pure function of its inputs: records are never
//! mutated after construction and derived values are recomputed on each
//! call.
//!
//! ## Minimal example
//!
//! ```rust
//! use carte_flow::{Direction, DivisionPaths, MergePolicy, Movement, merge_nearby};
//!
//! let movements = [
//!     Movement::waypoint(24.0, 54.9, 1, Direction::Advance, 100_000),
//!     Movement::waypoint(24.0, 55.1, 2, Direction::Advance, 60_000),
//! ];
//!
//! // The two divisions sit within the merge radius of one another, so they
//! // display as one band of 160 000 survivors anchored at the larger one.
//! let merged = merge_nearby(&movements, &movements[1], false, &MergePolicy::default())?;
//! assert_eq!(merged.survivors, 160_000);
//! assert_eq!(merged.lat, 54.9);
//!
//! let paths = DivisionPaths::new(&movements);
//! assert_eq!(paths.divisions().count(), 2);
//! # Ok::<(), carte_flow::FlowError>(())
//! ```
//!
//! This crate is `no_std`.

#![no_std]

extern crate alloc;

mod error;
mod interp;
mod merge;
mod paths;
mod records;

pub use error::FlowError;
pub use interp::interpolate_lat_at;
pub use merge::{MergePolicy, merge_nearby};
pub use paths::DivisionPaths;
pub use records::{City, Dataset, Direction, GeoPoint, MergedMovement, Movement, TemperatureSample};

// Copyright 2026 the Carte Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use crate::error::FlowError;
use crate::merge::{MergePolicy, merge_nearby};
use crate::records::{Direction, Movement};

/// Latitude of a direction's band at an arbitrary longitude.
///
/// Brackets are searched over the waypoints of `direction` in input order:
/// the first with `lng <= x` scanning forward and the last with `lng >= x`
/// scanning backward. Both brackets are resolved through
/// [`merge_nearby`] so the interpolated band follows the displayed
/// (combined) positions rather than any single division. When both
/// brackets land on the same longitude, that latitude is returned
/// directly; otherwise the latitude is linearly interpolated between them.
///
/// # Errors
///
/// Returns [`FlowError::NoBracket`] when no waypoint of `direction` lies on
/// either side of `x`, and propagates merge failures.
pub fn interpolate_lat_at(
    movements: &[Movement],
    direction: Direction,
    x: f64,
    policy: &MergePolicy,
) -> Result<f64, FlowError> {
    let bracket = FlowError::NoBracket { lng: x, direction };

    let left = movements
        .iter()
        .find(|m| m.direction == direction && m.lng <= x)
        .ok_or(bracket)?;
    let right = movements
        .iter()
        .rev()
        .find(|m| m.direction == direction && m.lng >= x)
        .ok_or(bracket)?;

    let left = merge_nearby(movements, left, false, policy)?;
    let right = merge_nearby(movements, right, false, policy)?;

    let dlng = left.lng - right.lng;
    if dlng == 0.0 {
        return Ok(left.lat);
    }
    Ok((left.lat - right.lat) / dlng * (x - right.lng) + right.lat)
}

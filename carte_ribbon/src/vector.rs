// Copyright 2026 the Carte Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Guarded vector operations over [`kurbo::Vec2`].
//!
//! Addition, subtraction, scaling, dot products, and lengths come from
//! kurbo itself. This module adds the operations the ribbon geometry needs
//! that kurbo does not define, with degenerate inputs surfaced as
//! [`GeometryError`] instead of `NaN`.

#[cfg(not(feature = "std"))]
use kurbo::common::FloatFuncs as _;
use kurbo::Vec2;

use crate::error::GeometryError;

/// The unit vector in the direction of `v`.
///
/// # Errors
///
/// Returns [`GeometryError::ZeroLengthVector`] when `v` has zero length.
pub fn unit(v: Vec2) -> Result<Vec2, GeometryError> {
    let len = v.hypot();
    if len == 0.0 {
        return Err(GeometryError::ZeroLengthVector);
    }
    Ok(v * (1.0 / len))
}

/// A unit vector perpendicular to `v`.
///
/// A horizontal input (`y == 0`) maps to `(0, 1)` by convention, avoiding
/// the division by `y`; every other input yields the unit-normalized
/// `(1, -x/y)`. Which of the two perpendiculars is returned is arbitrary;
/// callers that need a consistent side apply [`upward`].
///
/// # Errors
///
/// Returns [`GeometryError::ZeroLengthVector`] when `v` has zero length.
pub fn perpendicular(v: Vec2) -> Result<Vec2, GeometryError> {
    if v.x == 0.0 && v.y == 0.0 {
        return Err(GeometryError::ZeroLengthVector);
    }
    if v.y == 0.0 {
        return Ok(Vec2::new(0.0, 1.0));
    }
    unit(Vec2::new(1.0, -v.x / v.y))
}

/// The angle between `a` and `b`, in radians within `[0, π]`.
///
/// The cosine is clamped to `[-1, 1]` so floating drift on near-parallel
/// inputs cannot escape into `NaN`.
///
/// # Errors
///
/// Returns [`GeometryError::ZeroLengthVector`] when either input has zero
/// length.
pub fn angle_between(a: Vec2, b: Vec2) -> Result<f64, GeometryError> {
    let lengths = a.hypot() * b.hypot();
    if lengths == 0.0 {
        return Err(GeometryError::ZeroLengthVector);
    }
    Ok((a.dot(b) / lengths).clamp(-1.0, 1.0).acos())
}

/// Canonicalizes a perpendicular to the upward side (`y >= 0`).
#[must_use]
pub fn upward(v: Vec2) -> Vec2 {
    if v.y < 0.0 { -v } else { v }
}

// Copyright 2026 the Carte Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::fmt;

use carte_flow::FlowError;

/// Errors raised by the guarded vector operations.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GeometryError {
    /// A zero-length vector has no direction, so it cannot be normalized,
    /// rotated to a perpendicular, or given an angle.
    ZeroLengthVector,
}

impl fmt::Display for GeometryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ZeroLengthVector => f.write_str("zero-length vector has no direction"),
        }
    }
}

impl core::error::Error for GeometryError {}

/// Errors raised while building a ribbon polygon.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum RibbonError {
    /// Merge resolution failed for a segment endpoint.
    Flow(FlowError),
    /// A merged segment collapsed to zero length, so it has no
    /// perpendicular to offset along.
    Geometry(GeometryError),
}

impl fmt::Display for RibbonError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Flow(e) => write!(f, "ribbon segment endpoint: {e}"),
            Self::Geometry(e) => write!(f, "ribbon segment geometry: {e}"),
        }
    }
}

impl core::error::Error for RibbonError {
    fn source(&self) -> Option<&(dyn core::error::Error + 'static)> {
        match self {
            Self::Flow(e) => Some(e),
            Self::Geometry(e) => Some(e),
        }
    }
}

impl From<FlowError> for RibbonError {
    fn from(e: FlowError) -> Self {
        Self::Flow(e)
    }
}

impl From<GeometryError> for RibbonError {
    fn from(e: GeometryError) -> Self {
        Self::Geometry(e)
    }
}

// Copyright 2026 the Carte Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::fmt;

/// Errors raised while configuring a scale.
///
/// Scales validate their configuration up front so that mapping is total:
/// a degenerate domain would otherwise surface later as a silent division
/// by zero and propagate `NaN`/`Infinity` through downstream geometry.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ScaleError {
    /// The domain has zero width, so no input can be mapped through it.
    DegenerateDomain {
        /// The domain start.
        start: f64,
        /// The domain end, equal to `start`.
        end: f64,
    },
}

impl fmt::Display for ScaleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DegenerateDomain { start, end } => {
                write!(f, "degenerate scale domain [{start}, {end}] has zero width")
            }
        }
    }
}

impl core::error::Error for ScaleError {}

// Copyright 2026 the Carte Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::fmt;

use crate::records::Direction;

/// Errors raised by merge resolution and interpolation.
///
/// These are precondition violations on the input records. None of them is
/// retryable; callers decide whether to skip the affected feature or abort.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum FlowError {
    /// Merge resolution found no candidate waypoints at all.
    ///
    /// A well-formed target always matches itself, so this indicates the
    /// target was resolved against a record set it does not belong to.
    NoMergeCandidates {
        /// Longitude of the offending target.
        lng: f64,
        /// Latitude of the offending target.
        lat: f64,
    },
    /// No waypoints of the requested direction bracket the longitude.
    NoBracket {
        /// The longitude that could not be bracketed.
        lng: f64,
        /// The direction whose waypoints were searched.
        direction: Direction,
    },
}

impl fmt::Display for FlowError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoMergeCandidates { lng, lat } => {
                write!(f, "no merge candidates for movement at ({lng}, {lat})")
            }
            Self::NoBracket { lng, direction } => {
                write!(f, "no {direction} movements bracket longitude {lng}")
            }
        }
    }
}

impl core::error::Error for FlowError {}

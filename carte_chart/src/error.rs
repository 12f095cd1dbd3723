// Copyright 2026 the Carte Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::fmt;

use carte_flow::FlowError;
use carte_ribbon::RibbonError;

/// Errors raised while assembling chart geometry.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ChartError {
    /// Merge resolution or interpolation failed on the movement records.
    Flow(FlowError),
    /// A ribbon could not be constructed.
    Ribbon(RibbonError),
}

impl fmt::Display for ChartError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Flow(e) => write!(f, "chart movement data: {e}"),
            Self::Ribbon(e) => write!(f, "chart ribbon: {e}"),
        }
    }
}

impl core::error::Error for ChartError {
    fn source(&self) -> Option<&(dyn core::error::Error + 'static)> {
        match self {
            Self::Flow(e) => Some(e),
            Self::Ribbon(e) => Some(e),
        }
    }
}

impl From<FlowError> for ChartError {
    fn from(e: FlowError) -> Self {
        Self::Flow(e)
    }
}

impl From<RibbonError> for ChartError {
    fn from(e: RibbonError) -> Self {
        Self::Ribbon(e)
    }
}

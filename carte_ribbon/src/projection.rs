// Copyright 2026 the Carte Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use carte_scale::{FactorScale, LinearScale};
use kurbo::Point;

/// The coordinate scales placing data-space points on the plot.
///
/// The horizontal scale is plainly linear. The vertical scale is
/// factor-modulated by the horizontal input, which is how a chart drawn in
/// a non-conformal projection compresses vertical spacing toward one edge:
/// the same latitude interval spans fewer plot units at low longitudes.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct FlowProjection {
    /// Horizontal placement (`lng → x`).
    pub x: LinearScale,
    /// Vertical placement (`lat → y`), modulated by the horizontal input.
    pub y: FactorScale,
}

impl FlowProjection {
    /// Projects a data-space point into plot space.
    #[must_use]
    pub fn project(&self, p: Point) -> Point {
        Point::new(self.x.map(p.x), self.y.map_factored(p.y, p.x))
    }
}

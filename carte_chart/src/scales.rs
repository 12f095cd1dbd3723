// Copyright 2026 the Carte Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The canonical scale configuration of the 1812-campaign chart.
//!
//! The chart spans longitudes 23°–39° across a 100-unit-wide plot. The
//! latitude scale is factor-modulated by longitude: at the western edge
//! latitude spans are compressed to 40% and pushed down the plot, which
//! reproduces the non-conformal projection of the reference chart. The
//! retreat band uses a larger offset so the two legs never overlap.
//!
//! Every domain here is a fixed non-degenerate constant, so construction
//! cannot fail.

use carte_flow::Direction;
use carte_ribbon::FlowProjection;
use carte_scale::{FactorScale, LinearScale};

/// Longitude span of the chart, also the factor domain of every
/// longitude-modulated scale.
pub const LNG_DOMAIN: [f64; 2] = [23.0, 39.0];

/// Horizontal placement: longitude onto the plot's 100-unit width.
#[must_use]
pub fn longitude_scale() -> LinearScale {
    LinearScale::new(LNG_DOMAIN, [0.0, 100.0]).expect("longitude domain is non-degenerate")
}

/// Vertical placement: latitude onto plot units, modulated by longitude.
///
/// The advance and retreat legs share gain but use different offsets.
#[must_use]
pub fn latitude_scale(direction: Direction) -> FactorScale {
    let offset_range = match direction {
        Direction::Advance => [15.0, 0.0],
        Direction::Retreat => [18.5, 0.0],
    };
    FactorScale::new([54.0, 56.0], [30.0, 0.0])
        .expect("latitude domain is non-degenerate")
        .with_factor_domain(LNG_DOMAIN)
        .expect("longitude factor domain is non-degenerate")
        .with_gain_range([0.4, 1.0])
        .with_offset_range(offset_range)
}

/// Band width from survivor count, slightly compressed toward the west.
#[must_use]
pub fn width_scale() -> FactorScale {
    FactorScale::new([0.0, 422_000.0], [0.0, 7.0])
        .expect("survivor domain is non-degenerate")
        .with_factor_domain(LNG_DOMAIN)
        .expect("longitude factor domain is non-degenerate")
        .with_gain_range([0.9, 1.0])
}

/// Temperature onto the strip below the map (0° at the top).
#[must_use]
pub fn temperature_scale() -> LinearScale {
    LinearScale::new([0.0, -30.0], [30.0, 37.0]).expect("temperature domain is non-degenerate")
}

/// The full plot projection for one direction.
#[must_use]
pub fn projection(direction: Direction) -> FlowProjection {
    FlowProjection {
        x: longitude_scale(),
        y: latitude_scale(direction),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn longitude_covers_the_plot_width() {
        let s = longitude_scale();
        assert_eq!(s.map(23.0), 0.0);
        assert_eq!(s.map(39.0), 100.0);
        assert_eq!(s.map(31.0), 50.0);
    }

    #[test]
    fn latitude_offsets_separate_the_two_legs() {
        let advance = latitude_scale(Direction::Advance);
        let retreat = latitude_scale(Direction::Retreat);
        // Same latitude and longitude, but the retreat band sits 3.5 plot
        // units lower at the western edge.
        let a = advance.map_factored(54.5, 23.0);
        let r = retreat.map_factored(54.5, 23.0);
        assert!((r - a - 3.5).abs() < 1e-12);
        // At the eastern edge both offsets vanish.
        assert_eq!(
            advance.map_factored(54.5, 39.0),
            retreat.map_factored(54.5, 39.0)
        );
    }

    #[test]
    fn width_tops_out_at_the_full_army() {
        let w = width_scale();
        assert_eq!(w.map_factored(422_000.0, 39.0), 7.0);
        assert_eq!(w.map_factored(0.0, 30.0), 0.0);
        // Western compression: the same count draws slightly narrower.
        assert!(w.map_factored(422_000.0, 23.0) < 7.0);
    }

    #[test]
    fn temperature_grows_downward_from_freezing() {
        let t = temperature_scale();
        assert_eq!(t.map(0.0), 30.0);
        assert_eq!(t.map(-30.0), 37.0);
    }
}

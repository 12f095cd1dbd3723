// Copyright 2026 the Carte Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::vec::Vec;

use crate::error::FlowError;
use crate::records::{MergedMovement, Movement};

/// Candidate rules for combining nearby waypoints into one display band.
///
/// The defaults reproduce the reference chart: waypoints qualify when they
/// share the target's direction, sit on the same longitude checkpoint, and
/// lie within 0.4 coordinate units. Neither constant has a documented
/// derivation, so both stay configurable rather than hard-coded.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MergePolicy {
    /// Maximum Euclidean distance (in lng/lat units) for a candidate.
    pub radius: f64,
    /// Require candidates to share the target's exact longitude.
    ///
    /// Movements are pre-snapped to shared longitude checkpoints, so the
    /// comparison is exact, not a tolerance.
    pub same_longitude: bool,
}

impl Default for MergePolicy {
    fn default() -> Self {
        Self {
            radius: 0.4,
            same_longitude: true,
        }
    }
}

/// Combines the waypoints near `target` into one aggregate for display.
///
/// Candidates are the movements sharing `target`'s direction that satisfy
/// the [`MergePolicy`]. One waypoint per division is counted, the nearest
/// when several of the same division qualify. The aggregate's survivors are
/// the sum over those unique divisions, and its position is the waypoint of
/// the largest division, so the widest band anchors the merged point.
///
/// When `target` has opted out (`merge: false`) and `force` is `false`, the
/// target is returned unchanged as a single-waypoint aggregate. Segment
/// ends are resolved with `force: true` so that two adjacent segments
/// always share a consistent boundary.
///
/// # Errors
///
/// Returns [`FlowError::NoMergeCandidates`] when nothing qualifies. A
/// well-formed target always matches itself, so an empty candidate set
/// means `target` does not belong to `movements`.
pub fn merge_nearby(
    movements: &[Movement],
    target: &Movement,
    force: bool,
    policy: &MergePolicy,
) -> Result<MergedMovement, FlowError> {
    if !force && !target.merge {
        return Ok(MergedMovement::from(*target));
    }

    let mut candidates: Vec<(f64, &Movement)> = movements
        .iter()
        .filter(|m| m.direction == target.direction)
        .filter(|m| !policy.same_longitude || m.lng == target.lng)
        .map(|m| (target.geo().distance(m.geo()), m))
        .filter(|(dist, _)| *dist <= policy.radius)
        .collect();

    if candidates.is_empty() {
        return Err(FlowError::NoMergeCandidates {
            lng: target.lng,
            lat: target.lat,
        });
    }

    // Nearest instance of each division wins.
    candidates.sort_by(|a, b| a.0.total_cmp(&b.0));
    let mut unique: Vec<&Movement> = Vec::new();
    for &(_, m) in &candidates {
        if !unique.iter().any(|u| u.division == m.division) {
            unique.push(m);
        }
    }

    // The largest division's coordinates anchor the merged point.
    unique.sort_by(|a, b| b.survivors.cmp(&a.survivors));
    let anchor = unique[0];

    Ok(MergedMovement {
        lng: anchor.lng,
        lat: anchor.lat,
        direction: target.direction,
        survivors: unique.iter().map(|m| m.survivors).sum(),
    })
}

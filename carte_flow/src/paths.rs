// Copyright 2026 the Carte Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::collections::BTreeMap;
use alloc::vec::Vec;

use crate::records::Movement;

/// Per-division ordered waypoint grouping.
///
/// The flat movement list interleaves divisions; what "next waypoint" means
/// is a property of a single division's traversal. `DivisionPaths` builds
/// that grouping once so adjacency becomes an explicit operation on a
/// division's own sequence:
///
/// - Consecutive entries of [`path`](Self::path) are adjacent.
/// - A division boundary in the flat input never produces an adjacency.
///
/// Waypoint order within each division follows the input order, and the
/// flat input is retained for merge resolution, which searches across
/// divisions.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct DivisionPaths {
    movements: Vec<Movement>,
    by_division: BTreeMap<u32, Vec<Movement>>,
}

impl DivisionPaths {
    /// Groups the flat movement list by division, preserving input order.
    #[must_use]
    pub fn new(movements: &[Movement]) -> Self {
        let mut by_division: BTreeMap<u32, Vec<Movement>> = BTreeMap::new();
        for m in movements {
            by_division.entry(m.division).or_default().push(*m);
        }
        Self {
            movements: movements.to_vec(),
            by_division,
        }
    }

    /// The flat movement list in input order.
    #[must_use]
    pub fn movements(&self) -> &[Movement] {
        &self.movements
    }

    /// Iterates over division ids in ascending order.
    pub fn divisions(&self) -> impl Iterator<Item = u32> + '_ {
        self.by_division.keys().copied()
    }

    /// The ordered waypoints of one division.
    ///
    /// Unknown divisions yield an empty path.
    #[must_use]
    pub fn path(&self, division: u32) -> &[Movement] {
        self.by_division
            .get(&division)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Returns `true` when no movements were grouped.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.movements.is_empty()
    }
}

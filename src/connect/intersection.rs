/*
intersection.rs

Copyright 2025 Hervé Quatremain

This file is part of Minigames.

Minigames is free software: you can redistribute it and/or modify it under the
terms of the GNU General Public License as published by the Free Software
Foundation, either version 3 of the License, or (at your option) any later
version.

Minigames is distributed in the hope that it will be useful, but WITHOUT ANY
WARRANTY; without even the implied warranty of MERCHANTABILITY or FITNESS FOR
A PARTICULAR PURPOSE. See the GNU General Public License for more details.

You should have received a copy of the GNU General Public License along with
Minigames. If not, see <https://www.gnu.org/licenses/>.

SPDX-License-Identifier: GPL-3.0-or-later
*/

//! Detect crossings between a new path and the paths already on the board.
//!
//! Every segment of the candidate path is tested against every segment of each accepted path.
//! Crossings close to the markers do not count: paths that start or end on neighboring markers
//! often touch near the circles, and the player cannot avoid it.
//!
//! When both paths know their markers, the distance is measured from the crossing to the four
//! marker centers with [`IntersectionConfig::marker_clearance`].
//! Otherwise the distance is measured to the four segment endpoints with the much smaller
//! [`IntersectionConfig::segment_clearance`].

use log::debug;
use serde::{Deserialize, Serialize};

use super::path::ConnectPath;
use crate::geometry::{Point, Segment};

/// Distance thresholds used by the intersection checker.
///
/// The clearances are proportional to the marker radius on screen.
#[derive(Serialize, Deserialize, Debug, Copy, Clone, PartialEq)]
#[serde(default)]
pub struct IntersectionConfig {
    /// Crossings closer than this to a path's start or end marker are ignored.
    pub marker_clearance: f64,

    /// Crossings closer than this to a segment endpoint are ignored, when the paths have no
    /// marker context.
    pub segment_clearance: f64,

    /// Determinant under which two segments are considered parallel.
    pub parallel_epsilon: f64,
}

impl Default for IntersectionConfig {
    fn default() -> Self {
        Self {
            marker_clearance: 30.0,
            segment_clearance: 5.0,
            parallel_epsilon: 1e-4,
        }
    }
}

/// Whether the candidate path crosses any of the accepted paths.
///
/// A candidate with fewer than two points never crosses anything.
/// Self-intersections of the candidate are not checked.
pub fn paths_intersect(
    candidate: &ConnectPath,
    accepted: &[ConnectPath],
    config: &IntersectionConfig,
) -> bool {
    if candidate.len() < 2 {
        return false;
    }
    accepted
        .iter()
        .any(|other| path_pair_crosses(candidate, other, config))
}

/// Whether two paths cross each other away from their markers.
pub fn path_pair_crosses(a: &ConnectPath, b: &ConnectPath, config: &IntersectionConfig) -> bool {
    if a.len() < 2 || b.len() < 2 {
        return false;
    }
    for sa in a.segments() {
        for sb in b.segments() {
            if let Some(p) = sa.crossing(&sb, config.parallel_epsilon)
                && !is_excluded(p, &sa, &sb, a, b, config)
            {
                debug!("Crossing at {p} between segments {sa:?} and {sb:?}");
                return true;
            }
        }
    }
    false
}

/// Whether the crossing point is close enough to the ends to be ignored.
fn is_excluded(
    p: Point,
    sa: &Segment,
    sb: &Segment,
    a: &ConnectPath,
    b: &ConnectPath,
    config: &IntersectionConfig,
) -> bool {
    match (a.anchors(), b.anchors()) {
        (Some(aa), Some(ab)) => aa
            .positions()
            .iter()
            .chain(ab.positions().iter())
            .any(|m| p.distance(*m) < config.marker_clearance),
        _ => [sa.start, sa.end, sb.start, sb.end]
            .iter()
            .any(|e| p.distance(*e) < config.segment_clearance),
    }
}

/*
marker.rs

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

//! Colored circles that players connect in pairs.

use serde::{Deserialize, Serialize};

use crate::geometry::Point;

/// Radius of the markers on the board.
pub const MARKER_RADIUS: f64 = 25.0;

/// Index of a marker in the board's marker list.
pub type MarkerId = usize;

/// Circular target on the board.
///
/// Exactly two markers share the same color. Once a marker is part of a committed path,
/// it cannot be selected again.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Marker {
    /// Center of the circle.
    pub position: Point,

    /// Radius of the circle.
    #[serde(default = "default_radius")]
    pub radius: f64,

    /// Color tag, such as `#FF6B6B`. Pairs are matched on this value.
    pub color: String,

    /// Whether the marker is part of a committed path.
    #[serde(default)]
    pub connected: bool,
}

fn default_radius() -> f64 {
    MARKER_RADIUS
}

impl Marker {
    /// Create an unconnected [`Marker`] object.
    pub fn new(position: Point, color: &str) -> Self {
        Self {
            position,
            radius: MARKER_RADIUS,
            color: color.to_string(),
            connected: false,
        }
    }

    /// Whether the point is inside the circle (border included).
    pub fn contains(&self, point: Point) -> bool {
        self.position.distance(point) <= self.radius
    }
}

/// Reference to the marker at one end of a path.
#[derive(Serialize, Deserialize, Debug, Copy, Clone, PartialEq)]
pub struct Anchor {
    /// Marker identifier.
    pub marker: MarkerId,

    /// Center of the marker when the path was recorded.
    pub position: Point,
}

impl Anchor {
    /// Create an [`Anchor`] object for the given marker.
    pub fn new(marker: MarkerId, position: Point) -> Self {
        Self { marker, position }
    }
}

/// Find the marker under the given point.
///
/// Markers later in the list are drawn on top, so they are hit first.
pub fn marker_at(markers: &[Marker], point: Point) -> Option<MarkerId> {
    markers.iter().rposition(|m| m.contains(point))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hit_test_includes_border() {
        let m = Marker::new(Point::new(100.0, 100.0), "#FF6B6B");
        assert!(m.contains(Point::new(100.0, 100.0)));
        assert!(m.contains(Point::new(125.0, 100.0)));
        assert!(!m.contains(Point::new(125.1, 100.0)));
    }

    #[test]
    fn topmost_marker_wins() {
        let markers: Vec<Marker> = vec![
            Marker::new(Point::new(100.0, 100.0), "#FF6B6B"),
            Marker::new(Point::new(110.0, 100.0), "#4ECDC4"),
            Marker::new(Point::new(400.0, 100.0), "#FF6B6B"),
        ];
        assert_eq!(marker_at(&markers, Point::new(105.0, 100.0)), Some(1));
        assert_eq!(marker_at(&markers, Point::new(80.0, 100.0)), Some(0));
        assert_eq!(marker_at(&markers, Point::new(250.0, 250.0)), None);
    }

    #[test]
    fn deserialize_with_defaults() {
        let m: Marker =
            serde_json::from_str(r##"{"position": {"x": 1.0, "y": 2.0}, "color": "#F7DC6F"}"##)
                .unwrap();
        assert_eq!(m.radius, MARKER_RADIUS);
        assert!(!m.connected);
    }
}

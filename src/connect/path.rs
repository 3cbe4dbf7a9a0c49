/*
path.rs

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

//! Freehand path drawn between two markers.

use serde::{Deserialize, Serialize};

use super::marker::Anchor;
use crate::geometry::{Point, Segment, segments};

/// A pointer sample is recorded only when it is farther than this from the previous point.
/// This bounds the length of the path.
pub const MIN_SAMPLE_DISTANCE: f64 = 2.0;

/// The pointer-up position is recorded when it is farther than this from the last point.
pub const MIN_RELEASE_DISTANCE: f64 = 1.0;

/// Start and end markers of a path.
#[derive(Serialize, Deserialize, Debug, Copy, Clone, PartialEq)]
pub struct Anchors {
    pub start: Anchor,
    pub end: Anchor,
}

impl Anchors {
    /// Return the positions of the two markers.
    pub fn positions(&self) -> [Point; 2] {
        [self.start.position, self.end.position]
    }
}

/// Polyline connecting two markers.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ConnectPath {
    /// Path points in drawing order.
    points: Vec<Point>,

    /// Markers at both ends. Paths built without marker context have no anchors.
    anchors: Option<Anchors>,

    /// Color of the connected markers.
    pub color: String,
}

impl ConnectPath {
    /// Create a path from a list of points, without marker context.
    pub fn from_points(points: Vec<Point>, color: &str) -> Self {
        Self {
            points,
            anchors: None,
            color: color.to_string(),
        }
    }

    /// Create a path from a list of points that connects the given markers.
    pub fn with_anchors(points: Vec<Point>, anchors: Anchors, color: &str) -> Self {
        Self {
            points,
            anchors: Some(anchors),
            color: color.to_string(),
        }
    }

    /// Return the path points.
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    /// Return the markers at both ends of the path.
    pub fn anchors(&self) -> Option<&Anchors> {
        self.anchors.as_ref()
    }

    /// Number of points.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Whether the path has no points.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Iterate over the consecutive segments of the path.
    pub fn segments(&self) -> impl Iterator<Item = Segment> + '_ {
        segments(&self.points)
    }
}

/// Path being drawn while the pointer is down.
#[derive(Debug, Clone)]
pub struct PathRecorder {
    /// Marker where the drag started.
    start: Anchor,

    /// Recorded points. The first one is the center of the start marker.
    points: Vec<Point>,

    /// Color of the start marker.
    color: String,
}

impl PathRecorder {
    /// Start recording from the given marker.
    pub fn new(start: Anchor, color: &str) -> Self {
        Self {
            start,
            points: vec![start.position],
            color: color.to_string(),
        }
    }

    /// Return the start marker.
    pub fn start(&self) -> Anchor {
        self.start
    }

    /// Return the color of the path.
    pub fn color(&self) -> &str {
        &self.color
    }

    /// Return the points recorded so far.
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    /// Add a pointer sample if it is far enough from the last recorded point.
    ///
    /// Return whether the point was added.
    pub fn sample(&mut self, point: Point) -> bool {
        self.push_beyond(point, MIN_SAMPLE_DISTANCE)
    }

    /// Add the pointer-up position if it moved from the last recorded point.
    pub fn release(&mut self, point: Point) -> bool {
        self.push_beyond(point, MIN_RELEASE_DISTANCE)
    }

    fn push_beyond(&mut self, point: Point, min_distance: f64) -> bool {
        match self.points.last() {
            Some(last) if last.distance(point) <= min_distance => false,
            _ => {
                self.points.push(point);
                true
            }
        }
    }

    /// Close the path on the end marker: its center becomes the last point.
    pub fn finish(mut self, end: Anchor) -> ConnectPath {
        self.points.push(end.position);
        ConnectPath::with_anchors(
            self.points,
            Anchors {
                start: self.start,
                end,
            },
            &self.color,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn recorder() -> PathRecorder {
        PathRecorder::new(Anchor::new(0, Point::new(50.0, 50.0)), "#45B7D1")
    }

    #[test]
    fn recording_starts_on_marker_center() {
        let r = recorder();
        assert_eq!(r.points(), &[Point::new(50.0, 50.0)]);
        assert_eq!(r.color(), "#45B7D1");
    }

    #[test]
    fn close_samples_are_dropped() {
        let mut r = recorder();
        assert!(!r.sample(Point::new(51.0, 51.0)));
        assert!(!r.sample(Point::new(52.0, 50.0)));
        assert!(r.sample(Point::new(52.5, 50.0)));
        assert!(r.sample(Point::new(60.0, 50.0)));
        assert_eq!(r.points().len(), 3);
    }

    #[test]
    fn release_uses_smaller_threshold() {
        let mut r = recorder();
        assert!(!r.release(Point::new(51.0, 50.0)));
        assert!(r.release(Point::new(51.5, 50.0)));
    }

    #[test]
    fn finish_appends_end_center() {
        let mut r = recorder();
        r.sample(Point::new(100.0, 50.0));
        let path: ConnectPath = r.finish(Anchor::new(3, Point::new(200.0, 50.0)));
        assert_eq!(path.len(), 3);
        assert_eq!(path.points()[2], Point::new(200.0, 50.0));
        let anchors: &Anchors = path.anchors().unwrap();
        assert_eq!(anchors.start.marker, 0);
        assert_eq!(anchors.end.marker, 3);
        assert_eq!(path.segments().count(), 2);
    }
}

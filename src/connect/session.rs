/*
session.rs

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

//! Manage the status of a circle-connection game in progress.
//!
//! The [`ConnectGame`] object receives the pointer events from the user interface, records the
//! path being drawn, and commits it when it links two markers of the same color without
//! crossing the other paths.

use log::debug;
use rand::Rng;

use super::board::{self, BoardSize};
use super::intersection::{IntersectionConfig, paths_intersect};
use super::marker::{Anchor, Marker, MarkerId, marker_at};
use super::path::{ConnectPath, PathRecorder};
use crate::geometry::Point;

/// Points earned for each committed connection.
pub const CONNECTION_POINTS: usize = 10;

/// Bonus points earned when moving to the next level.
pub const LEVEL_BONUS: usize = 50;

/// Result of releasing the pointer.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum ConnectOutcome {
    /// No path was being drawn.
    Ignored,

    /// The path is committed.
    Connected,

    /// The path is committed and all the markers are now connected.
    LevelComplete,

    /// The path crosses a committed path and is discarded.
    Crossing,

    /// The path does not end on a free marker of the same color, and is discarded.
    NoMatch,
}

/// Circle-connection game session.
#[derive(Debug, Clone)]
pub struct ConnectGame {
    /// Current level, starting at 1.
    pub level: usize,

    /// Total score.
    pub score: usize,

    /// Markers on the board.
    markers: Vec<Marker>,

    /// Committed paths.
    connections: Vec<ConnectPath>,

    /// Path being drawn, if the pointer is down.
    drawing: Option<PathRecorder>,

    /// Board dimensions used when building a level.
    size: BoardSize,

    /// Intersection thresholds.
    config: IntersectionConfig,
}

impl ConnectGame {
    /// Create a game at level 1 with a random board.
    pub fn new(size: BoardSize, config: IntersectionConfig) -> Self {
        let mut game: ConnectGame = Self::with_markers(Vec::new(), size, config);
        game.start_level(&mut rand::rng());
        game
    }

    /// Create a game at level 1 with the provided markers.
    pub fn with_markers(markers: Vec<Marker>, size: BoardSize, config: IntersectionConfig) -> Self {
        Self {
            level: 1,
            score: 0,
            markers,
            connections: Vec::new(),
            drawing: None,
            size,
            config,
        }
    }

    /// Return the markers.
    pub fn markers(&self) -> &[Marker] {
        &self.markers
    }

    /// Return the committed paths.
    pub fn connections(&self) -> &[ConnectPath] {
        &self.connections
    }

    /// Return the points of the path being drawn.
    pub fn current_path(&self) -> Option<&[Point]> {
        self.drawing.as_ref().map(|d| d.points())
    }

    /// Return the marker where the path being drawn started.
    pub fn selected_marker(&self) -> Option<MarkerId> {
        self.drawing.as_ref().map(|d| d.start().marker)
    }

    /// Whether all the markers are connected.
    pub fn is_level_complete(&self) -> bool {
        !self.markers.is_empty() && self.markers.iter().all(|m| m.connected)
    }

    /// Build a new board for the current level, dropping all the paths.
    pub fn start_level<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.markers = board::build_markers(self.level, self.size, rng);
        self.connections.clear();
        self.drawing = None;
    }

    /// Restart the current level with a new board.
    pub fn reset_level(&mut self) {
        self.start_level(&mut rand::rng());
    }

    /// Move to the next level and earn the level bonus.
    pub fn next_level(&mut self) {
        self.level += 1;
        self.score += LEVEL_BONUS;
        self.start_level(&mut rand::rng());
    }

    /// Start drawing if the pointer is on a free marker.
    ///
    /// Return whether a new path is being drawn.
    pub fn pointer_down(&mut self, point: Point) -> bool {
        match marker_at(&self.markers, point) {
            Some(id) if !self.markers[id].connected => {
                let m: &Marker = &self.markers[id];
                debug!("Drawing from marker {id} ({})", m.color);
                self.drawing = Some(PathRecorder::new(Anchor::new(id, m.position), &m.color));
                true
            }
            _ => false,
        }
    }

    /// Extend the path being drawn.
    pub fn pointer_move(&mut self, point: Point) {
        if let Some(d) = self.drawing.as_mut() {
            d.sample(point);
        }
    }

    /// Finish the path being drawn.
    pub fn pointer_up(&mut self, point: Point) -> ConnectOutcome {
        let Some(mut recorder) = self.drawing.take() else {
            return ConnectOutcome::Ignored;
        };
        recorder.release(point);

        let start: MarkerId = recorder.start().marker;
        let target: MarkerId = match marker_at(&self.markers, point) {
            Some(id)
                if id != start
                    && !self.markers[id].connected
                    && self.markers[id].color == recorder.color() =>
            {
                id
            }
            _ => {
                debug!("Path from marker {start} does not end on a matching marker");
                return ConnectOutcome::NoMatch;
            }
        };

        let path: ConnectPath =
            recorder.finish(Anchor::new(target, self.markers[target].position));
        if paths_intersect(&path, &self.connections, &self.config) {
            debug!("Path from marker {start} to marker {target} crosses another path");
            return ConnectOutcome::Crossing;
        }

        debug!(
            "Connected marker {start} to marker {target} with {} points",
            path.len()
        );
        self.connections.push(path);
        self.markers[start].connected = true;
        self.markers[target].connected = true;
        self.score += CONNECTION_POINTS;

        if self.is_level_complete() {
            ConnectOutcome::LevelComplete
        } else {
            ConnectOutcome::Connected
        }
    }

    /// Cancel the path being drawn when the pointer leaves the board.
    pub fn pointer_leave(&mut self) {
        if self.drawing.take().is_some() {
            debug!("Drawing cancelled");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    /// Two red markers on the left/right, two blue ones on the top/bottom.
    fn cross_board() -> ConnectGame {
        let markers: Vec<Marker> = vec![
            Marker::new(Point::new(100.0, 300.0), "#FF6B6B"),
            Marker::new(Point::new(700.0, 300.0), "#FF6B6B"),
            Marker::new(Point::new(400.0, 100.0), "#4ECDC4"),
            Marker::new(Point::new(400.0, 500.0), "#4ECDC4"),
        ];
        ConnectGame::with_markers(markers, BoardSize::default(), IntersectionConfig::default())
    }

    fn drag(game: &mut ConnectGame, points: &[(f64, f64)]) -> ConnectOutcome {
        let (first, rest) = points.split_first().unwrap();
        game.pointer_down(Point::from(*first));
        let (last, middle) = rest.split_last().unwrap();
        for p in middle {
            game.pointer_move(Point::from(*p));
        }
        game.pointer_up(Point::from(*last))
    }

    #[test]
    fn commit_connection() {
        let mut game: ConnectGame = cross_board();
        let outcome = drag(&mut game, &[(100.0, 300.0), (400.0, 300.0), (700.0, 300.0)]);
        assert_eq!(outcome, ConnectOutcome::Connected);
        assert_eq!(game.score, CONNECTION_POINTS);
        assert!(game.markers()[0].connected);
        assert!(game.markers()[1].connected);
        assert_eq!(game.connections().len(), 1);
        let path: &ConnectPath = &game.connections()[0];
        assert_eq!(path.points()[0], Point::new(100.0, 300.0));
        assert_eq!(*path.points().last().unwrap(), Point::new(700.0, 300.0));
        assert!(game.current_path().is_none());
    }

    #[test]
    fn crossing_path_is_rejected() {
        let mut game: ConnectGame = cross_board();
        drag(&mut game, &[(100.0, 300.0), (400.0, 300.0), (700.0, 300.0)]);
        let outcome = drag(&mut game, &[(400.0, 100.0), (400.0, 300.0), (400.0, 500.0)]);
        assert_eq!(outcome, ConnectOutcome::Crossing);
        assert!(!game.markers()[2].connected);
        assert!(!game.markers()[3].connected);
        assert_eq!(game.score, CONNECTION_POINTS);
        assert_eq!(game.connections().len(), 1);
    }

    #[test]
    fn detour_completes_the_level() {
        let mut game: ConnectGame = cross_board();
        drag(&mut game, &[(100.0, 300.0), (400.0, 300.0), (700.0, 300.0)]);
        // Touching the red path 50 units from its end marker is a crossing
        let outcome = drag(
            &mut game,
            &[
                (400.0, 100.0),
                (750.0, 100.0),
                (650.0, 300.0),
                (750.0, 500.0),
                (400.0, 500.0),
            ],
        );
        assert_eq!(outcome, ConnectOutcome::Crossing);

        // Go around the red marker through the right side of the board
        let outcome = drag(
            &mut game,
            &[
                (400.0, 100.0),
                (750.0, 100.0),
                (790.0, 300.0),
                (750.0, 500.0),
                (400.0, 500.0),
            ],
        );
        assert_eq!(outcome, ConnectOutcome::LevelComplete);
        assert!(game.is_level_complete());
        assert_eq!(game.score, 2 * CONNECTION_POINTS);
    }

    #[test]
    fn wrong_color_or_empty_space() {
        let mut game: ConnectGame = cross_board();
        assert_eq!(
            drag(&mut game, &[(100.0, 300.0), (250.0, 200.0), (400.0, 100.0)]),
            ConnectOutcome::NoMatch
        );
        assert_eq!(
            drag(&mut game, &[(100.0, 300.0), (250.0, 300.0), (300.0, 300.0)]),
            ConnectOutcome::NoMatch
        );
        // Releasing on the start marker is not a connection
        assert_eq!(
            drag(&mut game, &[(100.0, 300.0), (150.0, 300.0), (105.0, 300.0)]),
            ConnectOutcome::NoMatch
        );
        assert_eq!(game.score, 0);
        assert!(game.markers().iter().all(|m| !m.connected));
    }

    #[test]
    fn connected_markers_cannot_be_selected() {
        let mut game: ConnectGame = cross_board();
        drag(&mut game, &[(100.0, 300.0), (700.0, 300.0)]);
        assert!(!game.pointer_down(Point::new(100.0, 300.0)));
        assert_eq!(game.pointer_up(Point::new(700.0, 300.0)), ConnectOutcome::Ignored);
        assert!(!game.pointer_down(Point::new(250.0, 450.0)));
    }

    #[test]
    fn leaving_the_board_cancels_drawing() {
        let mut game: ConnectGame = cross_board();
        assert!(game.pointer_down(Point::new(100.0, 300.0)));
        assert_eq!(game.selected_marker(), Some(0));
        game.pointer_move(Point::new(300.0, 300.0));
        assert_eq!(game.current_path().unwrap().len(), 2);
        game.pointer_leave();
        assert!(game.current_path().is_none());
        assert_eq!(game.pointer_up(Point::new(700.0, 300.0)), ConnectOutcome::Ignored);
    }

    #[test]
    fn next_level_adds_bonus_and_markers() {
        let mut game = ConnectGame::new(BoardSize::default(), IntersectionConfig::default());
        assert_eq!(game.markers().len(), 6);
        game.next_level();
        assert_eq!(game.level, 2);
        assert_eq!(game.score, LEVEL_BONUS);
        assert_eq!(game.markers().len(), 8);
        assert!(game.connections().is_empty());

        game.reset_level();
        assert_eq!(game.level, 2);
        assert_eq!(game.markers().len(), 8);

        let mut rng = StdRng::seed_from_u64(1);
        game.level = 10;
        game.start_level(&mut rng);
        assert_eq!(game.markers().len(), 16);
    }
}

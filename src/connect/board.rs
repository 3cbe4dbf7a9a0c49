/*
board.rs

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

//! Build the marker layout for a circle-connection level.

use log::debug;
use rand::Rng;
use rand::seq::SliceRandom;

use super::marker::Marker;
use crate::geometry::Point;

/// Colors of the marker pairs. A level uses the first colors of the list.
pub const COLORS: [&str; 12] = [
    "#FF6B6B", "#4ECDC4", "#45B7D1", "#FFA07A", "#98D8C8", "#F7DC6F", "#BB8FCE", "#85C1E2",
    "#F8B739", "#6C5CE7", "#A29BFE", "#FD79A8",
];

/// Maximum number of marker pairs on the board.
pub const MAX_PAIRS: usize = 8;

/// Distance between the board border and the marker centers.
const MARGIN: f64 = 60.0;

/// Random offset applied to the marker positions, as a share of the cell size.
const JITTER: f64 = 0.3;

/// Size of the drawing surface.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct BoardSize {
    pub width: f64,
    pub height: f64,
}

impl Default for BoardSize {
    fn default() -> Self {
        Self {
            width: 800.0,
            height: 600.0,
        }
    }
}

/// Number of marker pairs for the given level (levels start at 1).
pub fn pairs_for_level(level: usize) -> usize {
    (2 + level).min(MAX_PAIRS)
}

/// Create the shuffled markers of a level.
pub fn build_markers<R: Rng + ?Sized>(level: usize, size: BoardSize, rng: &mut R) -> Vec<Marker> {
    let num_pairs: usize = pairs_for_level(level);
    let mut colors: Vec<&str> = COLORS[..num_pairs]
        .iter()
        .flat_map(|c| [*c, *c])
        .collect();
    colors.shuffle(rng);

    let positions: Vec<Point> = generate_positions(colors.len(), size, rng);
    debug!(
        "Level {level}: {num_pairs} pairs on a {}x{} board",
        size.width, size.height
    );
    colors
        .iter()
        .zip(positions)
        .map(|(color, position)| Marker::new(position, color))
        .collect()
}

/// Spread `count` positions over a grid that covers the board, with some randomness.
///
/// The grid has more columns than rows. Each position is moved randomly inside its cell and is
/// kept inside the board margin.
pub fn generate_positions<R: Rng + ?Sized>(
    count: usize,
    size: BoardSize,
    rng: &mut R,
) -> Vec<Point> {
    if count == 0 {
        return Vec::new();
    }
    let cols: usize = ((count as f64 * 1.5).sqrt().ceil() as usize).max(1);
    let rows: usize = count.div_ceil(cols);

    let cell_width: f64 = (size.width - MARGIN * 2.0) / cols as f64;
    let cell_height: f64 = (size.height - MARGIN * 2.0) / rows as f64;
    let max_x: f64 = (size.width - MARGIN).max(MARGIN);
    let max_y: f64 = (size.height - MARGIN).max(MARGIN);

    let mut positions: Vec<Point> = Vec::with_capacity(rows * cols);
    for r in 0..rows {
        for c in 0..cols {
            let x: f64 = MARGIN
                + c as f64 * cell_width
                + cell_width / 2.0
                + (rng.random::<f64>() - 0.5) * cell_width * JITTER;
            let y: f64 = MARGIN
                + r as f64 * cell_height
                + cell_height / 2.0
                + (rng.random::<f64>() - 0.5) * cell_height * JITTER;
            positions.push(Point::new(x.clamp(MARGIN, max_x), y.clamp(MARGIN, max_y)));
        }
    }
    positions.truncate(count);
    positions
}

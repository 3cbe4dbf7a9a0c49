/*
grid.rs

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

//! Square grid of cells addressed by index.
//!
//! Cell indexes go from `0` to `size * size - 1`, row by row.

use rand::Rng;
use strum_macros::FromRepr;

use crate::difficulty::Difficulty;

/// Borders of the grid, in the order used for the random draw.
#[derive(Debug, Copy, Clone, PartialEq, Eq, FromRepr)]
#[repr(u8)]
pub enum Edge {
    Top,
    Right,
    Bottom,
    Left,
}

/// N×N grid.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Grid {
    size: usize,
}

impl Grid {
    /// Create a [`Grid`] object. The size must not be zero.
    pub fn new(size: usize) -> Option<Self> {
        if size == 0 { None } else { Some(Self { size }) }
    }

    /// Number of rows (and columns).
    pub fn size(&self) -> usize {
        self.size
    }

    /// Number of cells.
    pub fn num_cells(&self) -> usize {
        self.size * self.size
    }

    /// Whether the index is a cell of the grid.
    pub fn contains(&self, index: usize) -> bool {
        index < self.num_cells()
    }

    /// Return the row and the column of the cell.
    pub fn to_row_col(&self, index: usize) -> (usize, usize) {
        (index / self.size, index % self.size)
    }

    /// Return the index of the cell at the given row and column.
    pub fn to_index(&self, row: usize, col: usize) -> usize {
        row * self.size + col
    }

    /// Return the up, down, left, and right neighbors of the cell, skipping the ones for which
    /// `exclude` returns true.
    pub fn neighbors<F>(&self, index: usize, exclude: F) -> Vec<usize>
    where
        F: Fn(usize) -> bool,
    {
        let (r, c) = self.to_row_col(index);
        let mut opts: Vec<usize> = Vec::with_capacity(4);
        if r > 0 {
            opts.push(self.to_index(r - 1, c));
        }
        if r < self.size - 1 {
            opts.push(self.to_index(r + 1, c));
        }
        if c > 0 {
            opts.push(self.to_index(r, c - 1));
        }
        if c < self.size - 1 {
            opts.push(self.to_index(r, c + 1));
        }
        opts.retain(|i| !exclude(*i));
        opts
    }

    /// Whether two cells share a side.
    pub fn is_adjacent(&self, a: usize, b: usize) -> bool {
        let (ar, ac) = self.to_row_col(a);
        let (br, bc) = self.to_row_col(b);
        ar.abs_diff(br) + ac.abs_diff(bc) == 1
    }

    /// Whether the cell is on the outer border of the grid.
    pub fn is_edge(&self, index: usize) -> bool {
        let (r, c) = self.to_row_col(index);
        r == 0 || c == 0 || r == self.size - 1 || c == self.size - 1
    }

    /// Pick a random cell on the border: first a random edge, then a random cell along it.
    pub fn random_edge_cell<R: Rng + ?Sized>(&self, rng: &mut R) -> usize {
        let edge: Edge = Edge::from_repr(rng.random_range(0..4)).unwrap_or(Edge::Top);
        let along: usize = rng.random_range(0..self.size);
        match edge {
            Edge::Top => self.to_index(0, along),
            Edge::Right => self.to_index(along, self.size - 1),
            Edge::Bottom => self.to_index(self.size - 1, along),
            Edge::Left => self.to_index(along, 0),
        }
    }
}

impl From<Difficulty> for Grid {
    fn from(difficulty: Difficulty) -> Self {
        Self {
            size: difficulty.grid_size(),
        }
    }
}

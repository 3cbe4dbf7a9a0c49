/*
walk_path.rs

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

//! Ordered list of grid cells.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use super::grid::Grid;

/// Walk object.
///
/// The walk is serialized as the list of its cells.
#[derive(Serialize, Deserialize, Debug, Default, Clone)]
#[serde(from = "Vec<usize>", into = "Vec<usize>")]
pub struct WalkPath {
    /// Walk as an ordered list of cell indexes.
    cells: Vec<usize>,

    /// Cells currently in the walk.
    /// Instead of looking for the cell in the [`WalkPath::cells`] vector, this
    /// [`std::collections::HashSet`] speeds up the lookup.
    members: HashSet<usize>,
}

impl From<Vec<usize>> for WalkPath {
    fn from(cells: Vec<usize>) -> Self {
        let members: HashSet<usize> = cells.iter().copied().collect();
        Self { cells, members }
    }
}

impl From<WalkPath> for Vec<usize> {
    fn from(walk: WalkPath) -> Self {
        walk.cells
    }
}

impl PartialEq for WalkPath {
    fn eq(&self, other: &Self) -> bool {
        self.cells == other.cells
    }
}

impl WalkPath {
    /// Create a [`WalkPath`] object.
    pub fn new(capacity: usize) -> Self {
        Self {
            cells: Vec::with_capacity(capacity),
            members: HashSet::with_capacity(capacity),
        }
    }

    /// Create a [`WalkPath`] object from a list of cells.
    pub fn from_slice(cells: &[usize]) -> Self {
        Self::from(cells.to_vec())
    }

    /// Remove all the cells from the walk.
    pub fn clear(&mut self) {
        self.cells.clear();
        self.members.clear();
    }

    /// Add a cell at the end of the walk.
    pub fn push(&mut self, cell: usize) {
        self.cells.push(cell);
        self.members.insert(cell);
    }

    /// Remove the last cell from the walk.
    pub fn pop(&mut self) -> Option<usize> {
        let cell: Option<usize> = self.cells.pop();
        if let Some(c) = cell {
            self.members.remove(&c);
        }
        cell
    }

    /// Get the number of cells in the walk.
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Whether the walk has no cells.
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Whether the cell is in the walk or not.
    pub fn contains(&self, cell: usize) -> bool {
        self.members.contains(&cell)
    }

    /// Return the cells of the walk.
    pub fn cells(&self) -> &[usize] {
        &self.cells
    }

    /// Return the first cell of the walk.
    pub fn first(&self) -> Option<usize> {
        self.cells.first().copied()
    }

    /// Return the last cell of the walk.
    pub fn last(&self) -> Option<usize> {
        self.cells.last().copied()
    }

    /// Return the position of the given cell in the walk.
    pub fn position(&self, cell: usize) -> Option<usize> {
        self.cells.iter().position(|c| *c == cell)
    }

    /// Whether the walk is a valid self-avoiding walk on the grid: all cells are in the grid,
    /// no cell repeats, and consecutive cells share a side.
    pub fn is_valid_on(&self, grid: &Grid) -> bool {
        let mut seen: HashSet<usize> = HashSet::with_capacity(self.cells.len());
        self.cells
            .iter()
            .all(|c| grid.contains(*c) && seen.insert(*c))
            && self.cells.windows(2).all(|w| grid.is_adjacent(w[0], w[1]))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn push_pop_keep_lookup_in_sync() {
        let mut w = WalkPath::new(4);
        w.push(3);
        w.push(8);
        assert!(w.contains(8));
        assert_eq!(w.pop(), Some(8));
        assert!(!w.contains(8));
        assert_eq!(w.first(), Some(3));
        assert_eq!(w.last(), Some(3));
        assert_eq!(w.pop(), Some(3));
        assert_eq!(w.pop(), None);
        assert!(w.is_empty());
    }

    #[test]
    fn validity_on_grid() {
        let g = Grid::new(5).unwrap();
        assert!(WalkPath::from_slice(&[0, 1, 6, 11, 12]).is_valid_on(&g));
        // Repeated cell
        assert!(!WalkPath::from_slice(&[0, 1, 0]).is_valid_on(&g));
        // Row wrap
        assert!(!WalkPath::from_slice(&[3, 4, 5]).is_valid_on(&g));
        // Outside of the grid
        assert!(!WalkPath::from_slice(&[24, 25]).is_valid_on(&g));
    }

    #[test]
    fn deserialized_walk_has_lookup() {
        let w = WalkPath::from_slice(&[2, 7, 12]);
        assert_eq!(serde_json::to_string(&w).unwrap(), "[2,7,12]");

        let mut back: WalkPath = serde_json::from_str("[2, 7, 12]").unwrap();
        assert_eq!(back, w);
        assert!(back.contains(7));
        assert!(!back.contains(3));
        assert_eq!(back.pop(), Some(12));
        assert!(!back.contains(12));
        back.push(13);
        assert!(back.contains(13));
    }
}

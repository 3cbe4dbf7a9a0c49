/*
random_walk.rs

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

//! Generate a random self-avoiding walk on a grid.
//!
//! The walk starts on a border cell, which is easier to spot when memorizing the walk.
//! It then moves to a random unvisited neighbor at each step.
//! When it gets stuck, it backtracks one cell and tries again from there: the abandoned cell
//! stays visited, so the walk never comes back to a dead end.
//! If it backtracks all the way to its first cell, the attempt is dropped and a new one starts
//! from another random border cell.

use log::debug;
use rand::Rng;
use rand::seq::IndexedRandom;
use std::collections::HashSet;
use std::error::Error;
use std::fmt;
use std::time::Instant;

use super::grid::Grid;
use super::walk_path::WalkPath;
use crate::difficulty::Difficulty;

/// Maximum number of attempts, each one from a new random starting cell.
const MAX_ATTEMPTS: usize = 64;

/// The step budget of an attempt is this factor times the number of cells.
const BUDGET_FACTOR: usize = 3;

/// Type of errors.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum WalkError {
    /// The grid has no cells.
    EmptyGrid,

    /// The length bounds are zero or inverted.
    InvalidBounds { min_len: usize, max_len: usize },
}

impl fmt::Display for WalkError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            WalkError::EmptyGrid => write!(f, "the grid size must be at least 1"),
            WalkError::InvalidBounds { min_len, max_len } => {
                write!(f, "invalid walk length bounds [{min_len}, {max_len}]")
            }
        }
    }
}

impl Error for WalkError {}

/// Result of one generation attempt.
enum Attempt {
    /// The walk reached its target length, or the step budget ran out.
    Finished(WalkPath),

    /// The walk backtracked to its first cell. The longest walk seen during the attempt is
    /// kept in case all the attempts fail.
    BoxedIn(WalkPath),
}

/// [`RandomWalk`] object.
#[derive(Debug, Clone)]
pub struct RandomWalk {
    /// Grid on which the walks are drawn.
    pub grid: Grid,

    /// Minimum walk length.
    pub min_len: usize,

    /// Maximum walk length.
    pub max_len: usize,

    /// Number of steps (moves and backtracks) it took to generate the last walk.
    pub iteration: usize,

    /// Number of attempts it took to generate the last walk.
    pub attempts: usize,

    /// Duration in seconds it took to generate the last walk.
    pub duration: f32,
}

impl RandomWalk {
    /// Create the object.
    ///
    /// # Errors
    ///
    /// The method returns an error if `min_len` is zero or greater than `max_len`.
    pub fn new(grid: Grid, min_len: usize, max_len: usize) -> Result<Self, WalkError> {
        if min_len == 0 || min_len > max_len {
            return Err(WalkError::InvalidBounds { min_len, max_len });
        }
        Ok(Self {
            grid,
            min_len,
            max_len,
            iteration: 0,
            attempts: 0,
            duration: 0.0,
        })
    }

    /// Create the object for the grid and the walk length of the given difficulty level.
    pub fn for_difficulty(difficulty: Difficulty) -> Self {
        Self {
            grid: Grid::from(difficulty),
            min_len: difficulty.min_walk_len(),
            max_len: difficulty.max_walk_len(),
            iteration: 0,
            attempts: 0,
            duration: 0.0,
        }
    }

    /// Generate and return a random walk.
    ///
    /// The walk is never empty.
    /// It is shorter than [`RandomWalk::min_len`] only when the grid is too small for such a
    /// walk.
    pub fn generate(&mut self) -> WalkPath {
        self.generate_with(&mut rand::rng())
    }

    /// Generate a random walk with the provided random number generator.
    pub fn generate_with<R: Rng + ?Sized>(&mut self, rng: &mut R) -> WalkPath {
        let start: Instant = Instant::now();
        self.iteration = 0;
        self.attempts = 0;

        let mut longest: WalkPath = WalkPath::default();
        while self.attempts < MAX_ATTEMPTS {
            self.attempts += 1;
            match self.attempt(rng) {
                Attempt::Finished(walk) => {
                    longest = walk;
                    break;
                }
                Attempt::BoxedIn(walk) => {
                    debug!("    Restart: boxed in at the starting cell");
                    if walk.len() > longest.len() {
                        longest = walk;
                    }
                }
            }
        }

        self.duration = start.elapsed().as_secs_f32();
        debug!(
            "Walk length = {}  Attempts = {}  Iterations = {}  Duration = {}",
            longest.len(),
            self.attempts,
            self.iteration,
            self.duration
        );
        longest
    }

    /// Build one walk from a random border cell.
    fn attempt<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Attempt {
        let target: usize = rng.random_range(self.min_len..=self.max_len);
        let first: usize = self.grid.random_edge_cell(rng);
        debug!("== Starting cell {first}  Target length {target}");

        let mut visited: HashSet<usize> = HashSet::with_capacity(self.grid.num_cells());
        let mut walk: WalkPath = WalkPath::new(target);
        visited.insert(first);
        walk.push(first);
        let mut longest: WalkPath = walk.clone();

        let mut budget: usize = BUDGET_FACTOR * self.grid.num_cells();
        while walk.len() < target && budget > 0 {
            budget -= 1;
            self.iteration += 1;

            let Some(current) = walk.last() else {
                break;
            };
            let opts: Vec<usize> = self.grid.neighbors(current, |c| visited.contains(&c));
            let Some(&next) = opts.choose(rng) else {
                if walk.len() > 1 {
                    walk.pop();
                    debug!("    Back: no free neighbor for cell {current}");
                    continue;
                }
                return Attempt::BoxedIn(longest);
            };

            visited.insert(next);
            walk.push(next);
            if walk.len() > longest.len() {
                longest = walk.clone();
            }
        }

        if walk.len() < target {
            debug!(
                "    Step budget exhausted at length {} (target {target})",
                walk.len()
            );
        }
        Attempt::Finished(walk)
    }
}

/// Generate a random walk on a `grid_size` × `grid_size` grid, with a length between
/// `min_len` and `max_len`.
///
/// # Errors
///
/// The function returns an error if the grid is empty or if the length bounds are invalid.
pub fn generate_walk(
    grid_size: usize,
    min_len: usize,
    max_len: usize,
) -> Result<WalkPath, WalkError> {
    let grid: Grid = Grid::new(grid_size).ok_or(WalkError::EmptyGrid)?;
    let mut generator: RandomWalk = RandomWalk::new(grid, min_len, max_len)?;
    Ok(generator.generate())
}

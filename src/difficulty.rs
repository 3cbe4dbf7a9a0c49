/*
difficulty.rs

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

//! Difficulty levels of the path-memory game.

use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Difficulty level.
#[derive(
    Serialize, Deserialize, Debug, Copy, Clone, PartialOrd, PartialEq, Eq, Hash, ValueEnum, Default,
)]
pub enum Difficulty {
    Easy,
    #[default]
    Medium,
    Hard,
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Difficulty::Easy => write!(f, "Easy"),
            Difficulty::Medium => write!(f, "Medium"),
            Difficulty::Hard => write!(f, "Hard"),
        }
    }
}

impl Difficulty {
    /// Number of rows and columns of the grid.
    pub fn grid_size(&self) -> usize {
        match self {
            Difficulty::Easy => 5,
            Difficulty::Medium => 6,
            Difficulty::Hard => 7,
        }
    }

    /// Shortest walk to memorize.
    pub fn min_walk_len(&self) -> usize {
        self.grid_size() + 3
    }

    /// Longest walk to memorize.
    pub fn max_walk_len(&self) -> usize {
        self.grid_size() + 6
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn walk_bounds_follow_grid_size() {
        assert_eq!(Difficulty::Easy.grid_size(), 5);
        assert_eq!(Difficulty::Easy.min_walk_len(), 8);
        assert_eq!(Difficulty::Easy.max_walk_len(), 11);
        assert_eq!(Difficulty::Hard.min_walk_len(), 10);
        assert_eq!(Difficulty::Hard.max_walk_len(), 13);
        assert_eq!(Difficulty::default(), Difficulty::Medium);
    }

    #[test]
    fn parse_from_command_line_value() {
        assert_eq!(
            Difficulty::from_str("hard", true).unwrap(),
            Difficulty::Hard
        );
        assert!(Difficulty::from_str("impossible", true).is_err());
    }
}

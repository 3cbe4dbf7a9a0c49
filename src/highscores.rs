/*
highscores.rs

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

//! Manage high scores for the games.
//!
//! The main object, [`HighScores`], maintains a list of high scores for each game and
//! difficulty level.
//! This object is saved when a player makes it to a scoreboard, and is restored when a game
//! starts.
//! See the [`crate::saver::highscores`] module that saves and restores the [`HighScores`] object.

use std::collections::HashMap;
use std::fmt;
use std::time::SystemTime;

use serde::{Deserialize, Serialize};

use crate::difficulty::Difficulty;

/// Number of entries per scoreboard (number of top scores to keep).
const BOARD_SIZE: usize = 10;

/// Games that keep high scores.
#[derive(Serialize, Deserialize, Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum GameKind {
    CircleConnect,
    PathMemory,
}

impl fmt::Display for GameKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            GameKind::CircleConnect => write!(f, "Circle connect"),
            GameKind::PathMemory => write!(f, "Path memory"),
        }
    }
}

/// Object that represent a score.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
pub struct Score {
    /// Points earned during the game.
    pub points: usize,

    /// Level reached.
    pub level: usize,

    /// Completion timestamp, which is used to display the date and time in the scoreboard.
    pub when: SystemTime,
}

/// Sorted list of the top scores for a game.
#[derive(Serialize, Deserialize, Debug, Clone, Default)]
struct GameHighScoreBoard {
    /// Sorted list of the top scores, highest first.
    /// The number of scores in this list is controlled by the [`BOARD_SIZE`] constant.
    top: Vec<Score>,
}

impl GameHighScoreBoard {
    /// Add a score to the scoreboard and return the position in the board, or None if the
    /// score does not make it to the board.
    ///
    /// The returned position starts at 1 (top score).
    /// A new score ranks after the existing scores with the same points.
    fn add_score(&mut self, points: usize, level: usize) -> Option<usize> {
        let index: usize = self.top.partition_point(|s| s.points >= points);
        if index >= BOARD_SIZE {
            return None;
        }
        self.top.insert(
            index,
            Score {
                points,
                level,
                when: SystemTime::now(),
            },
        );
        self.top.truncate(BOARD_SIZE);
        Some(index + 1)
    }
}

/// List of the scoreboards for the games.
#[derive(Serialize, Deserialize, Debug, Clone, Default)]
pub struct HighScores {
    /// Map of the [`GameHighScoreBoard`] scoreboards indexed by the game.
    ///
    /// The game index is a string in the format "<game>@@<difficulty>", or "<game>" for the
    /// games without difficulty levels.
    board: HashMap<String, GameHighScoreBoard>,
}

impl HighScores {
    /// Create a [`HighScores`] object.
    pub fn new() -> Self {
        Self {
            board: HashMap::new(),
        }
    }

    /// Return the string that is used as an index for the list of scoreboards.
    fn build_key(game: GameKind, difficulty: Option<Difficulty>) -> String {
        match difficulty {
            Some(d) => format!("{game:?}@@{d:?}"),
            None => format!("{game:?}"),
        }
    }

    /// Add a score to the scoreboard of the provided game and return the position in the
    /// scoreboard, or None if the score does not make it to the board.
    ///
    /// The returned position starts at 1 (top score).
    pub fn add_score(
        &mut self,
        game: GameKind,
        difficulty: Option<Difficulty>,
        points: usize,
        level: usize,
    ) -> Option<usize> {
        let key: String = Self::build_key(game, difficulty);
        self.board
            .entry(key)
            .or_default()
            .add_score(points, level)
    }

    /// Return the list of [`Score`] for the given game.
    ///
    /// Return None when the scoreboard is empty.
    pub fn get_score(&self, game: GameKind, difficulty: Option<Difficulty>) -> Option<&[Score]> {
        self.board
            .get(&Self::build_key(game, difficulty))
            .map(|b| b.top.as_slice())
            .filter(|top| !top.is_empty())
    }

    /// Return the high score of the given game.
    pub fn best(&self, game: GameKind, difficulty: Option<Difficulty>) -> Option<usize> {
        self.get_score(game, difficulty)
            .and_then(|top| top.first())
            .map(|s| s.points)
    }

    /// Return whether the list of scoreboard is empty (no scoreboard for any game)
    pub fn is_empty(&self) -> bool {
        self.board.values().all(|b| b.top.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scores_are_sorted_highest_first() {
        let mut h = HighScores::new();
        assert!(h.is_empty());
        assert_eq!(h.add_score(GameKind::PathMemory, Some(Difficulty::Easy), 3, 4), Some(1));
        assert_eq!(h.add_score(GameKind::PathMemory, Some(Difficulty::Easy), 7, 8), Some(1));
        assert_eq!(h.add_score(GameKind::PathMemory, Some(Difficulty::Easy), 5, 6), Some(2));
        // Ties rank after the existing score
        assert_eq!(h.add_score(GameKind::PathMemory, Some(Difficulty::Easy), 5, 6), Some(3));

        let top: &[Score] = h.get_score(GameKind::PathMemory, Some(Difficulty::Easy)).unwrap();
        let points: Vec<usize> = top.iter().map(|s| s.points).collect();
        assert_eq!(points, vec![7, 5, 5, 3]);
        assert_eq!(h.best(GameKind::PathMemory, Some(Difficulty::Easy)), Some(7));
        assert!(!h.is_empty());
    }

    #[test]
    fn boards_are_separate() {
        let mut h = HighScores::new();
        h.add_score(GameKind::PathMemory, Some(Difficulty::Hard), 2, 3);
        h.add_score(GameKind::CircleConnect, None, 180, 3);
        assert_eq!(h.best(GameKind::PathMemory, Some(Difficulty::Easy)), None);
        assert_eq!(h.best(GameKind::PathMemory, Some(Difficulty::Hard)), Some(2));
        assert_eq!(h.best(GameKind::CircleConnect, None), Some(180));
    }

    #[test]
    fn board_keeps_top_ten() {
        let mut h = HighScores::new();
        for p in 1..=BOARD_SIZE {
            h.add_score(GameKind::CircleConnect, None, p * 10, 1);
        }
        assert_eq!(h.add_score(GameKind::CircleConnect, None, 5, 1), None);
        assert_eq!(h.add_score(GameKind::CircleConnect, None, 55, 1), Some(6));
        let top: &[Score] = h.get_score(GameKind::CircleConnect, None).unwrap();
        assert_eq!(top.len(), BOARD_SIZE);
        assert_eq!(top.last().unwrap().points, 20);
    }
}

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

//! Manage the status of a path-memory game in progress.
//!
//! A round goes through three phases:
//!
//! * [`Phase::Preview`]: the user interface lights the cells of the walk one after the other,
//!   following [`PathMemoryGame::preview_schedule`].
//! * [`Phase::Playing`]: the player selects the cells in the same order, starting from the
//!   marked starting cell.
//! * [`Phase::Finished`]: the player selected as many cells as the walk has. The round is
//!   either solved, and the level increases, or the player must retry with
//!   [`PathMemoryGame::reset_user`].

use log::debug;
use rand::Rng;
use std::error::Error;
use std::fmt;
use std::time::Duration;

use super::grid::Grid;
use super::random_walk::RandomWalk;
use super::walk_path::WalkPath;
use crate::difficulty::Difficulty;

/// Time between two cells during the preview.
pub const PREVIEW_STEP: Duration = Duration::from_millis(400);

/// How long a cell stays lit during the preview.
pub const PREVIEW_LIT: Duration = Duration::from_millis(280);

/// Pause between the end of the preview and the start of the playing phase.
pub const PREVIEW_TAIL: Duration = Duration::from_millis(150);

/// Round phase.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Phase {
    /// No round started yet.
    Idle,
    Preview,
    Playing,
    /// The player completed the walk.
    Finished,
}

/// One cell of the preview animation.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct PreviewStep {
    pub cell: usize,

    /// Delay from the start of the preview before lighting the cell.
    pub on: Duration,

    /// Delay from the start of the preview before turning the cell off.
    pub off: Duration,
}

/// Selection accepted by [`PathMemoryGame::select_cell`].
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum CellSelection {
    /// The player selected the starting cell.
    Started,

    /// The player extended their path.
    Extended,

    /// The player's path matches the walk.
    Solved,

    /// The player's path has the length of the walk, but differs from it.
    Mismatch,
}

/// Selection refused by [`PathMemoryGame::select_cell`].
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum SelectionError {
    /// The game does not accept selections in the current phase.
    NotPlaying,

    /// The cell index is outside of the grid.
    OutOfGrid,

    /// The first selected cell must be the starting cell.
    WrongStart,

    /// The cell does not share a side with the previously selected cell.
    NotAdjacent,

    /// The cell is already in the player's path.
    AlreadySelected,
}

impl fmt::Display for SelectionError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            SelectionError::NotPlaying => write!(f, "wait for the preview to finish"),
            SelectionError::OutOfGrid => write!(f, "this cell is not on the grid"),
            SelectionError::WrongStart => write!(f, "start from the marked starting cell"),
            SelectionError::NotAdjacent => {
                write!(f, "select a cell next to the previous one (up, down, left, right)")
            }
            SelectionError::AlreadySelected => write!(f, "do not go through the same cell twice"),
        }
    }
}

impl Error for SelectionError {}

/// Path-memory game session.
#[derive(Debug, Clone)]
pub struct PathMemoryGame {
    /// Current level, starting at 1.
    pub level: usize,

    /// Number of solved rounds.
    pub success_count: usize,

    difficulty: Difficulty,

    /// Walk generator for the current difficulty.
    generator: RandomWalk,

    /// Walk to memorize.
    walk: WalkPath,

    /// Cells selected by the player.
    user_path: WalkPath,

    phase: Phase,
}

impl PathMemoryGame {
    /// Create a [`PathMemoryGame`] object with a first walk ready to preview.
    pub fn new(difficulty: Difficulty) -> Self {
        let mut generator: RandomWalk = RandomWalk::for_difficulty(difficulty);
        let walk: WalkPath = generator.generate();
        Self {
            level: 1,
            success_count: 0,
            difficulty,
            generator,
            walk,
            user_path: WalkPath::default(),
            phase: Phase::Idle,
        }
    }

    /// Return the difficulty level.
    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    /// Change the difficulty level and build a new walk. The counters are kept.
    pub fn set_difficulty(&mut self, difficulty: Difficulty) {
        self.difficulty = difficulty;
        self.generator = RandomWalk::for_difficulty(difficulty);
        self.walk = self.generator.generate();
        self.user_path.clear();
        self.phase = Phase::Idle;
    }

    /// Return the grid.
    pub fn grid(&self) -> &Grid {
        &self.generator.grid
    }

    /// Return the walk to memorize.
    pub fn walk(&self) -> &WalkPath {
        &self.walk
    }

    /// Return the cells selected by the player.
    pub fn user_path(&self) -> &WalkPath {
        &self.user_path
    }

    /// Return the current phase.
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Return the cell where the walk starts.
    pub fn start_cell(&self) -> Option<usize> {
        self.walk.first()
    }

    /// Return the cell where the walk ends.
    pub fn end_cell(&self) -> Option<usize> {
        self.walk.last()
    }

    /// Generate a new walk and start its preview.
    pub fn start_round(&mut self) {
        self.start_round_with(&mut rand::rng());
    }

    /// Start a round with a walk built from the provided random number generator.
    pub fn start_round_with<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.walk = self.generator.generate_with(rng);
        self.user_path.clear();
        self.phase = Phase::Preview;
        debug!(
            "Round at level {}: walk {:?}",
            self.level,
            self.walk.cells()
        );
    }

    /// Return when to light and unlight each cell of the walk during the preview.
    pub fn preview_schedule(&self) -> Vec<PreviewStep> {
        self.walk
            .cells()
            .iter()
            .zip(0u32..)
            .map(|(cell, i)| PreviewStep {
                cell: *cell,
                on: PREVIEW_STEP * i,
                off: PREVIEW_STEP * i + PREVIEW_LIT,
            })
            .collect()
    }

    /// Total time of the preview, after which [`PathMemoryGame::finish_preview`] is expected.
    pub fn preview_duration(&self) -> Duration {
        PREVIEW_STEP * self.walk.len() as u32 + PREVIEW_TAIL
    }

    /// End the preview and let the player select the cells.
    pub fn finish_preview(&mut self) {
        if self.phase == Phase::Preview {
            self.phase = Phase::Playing;
        }
    }

    /// Process a cell selected by the player.
    ///
    /// # Errors
    ///
    /// The method returns an error when the selection breaks a rule. The player's path is not
    /// modified in that case.
    pub fn select_cell(&mut self, cell: usize) -> Result<CellSelection, SelectionError> {
        if self.phase != Phase::Playing {
            return Err(SelectionError::NotPlaying);
        }
        if !self.generator.grid.contains(cell) {
            return Err(SelectionError::OutOfGrid);
        }

        let Some(last) = self.user_path.last() else {
            if Some(cell) != self.walk.first() {
                return Err(SelectionError::WrongStart);
            }
            self.user_path.push(cell);
            return Ok(CellSelection::Started);
        };

        if !self.generator.grid.is_adjacent(last, cell) {
            return Err(SelectionError::NotAdjacent);
        }
        if self.user_path.contains(cell) {
            return Err(SelectionError::AlreadySelected);
        }
        self.user_path.push(cell);

        if self.user_path.len() < self.walk.len() {
            return Ok(CellSelection::Extended);
        }

        self.phase = Phase::Finished;
        if self.user_path == self.walk {
            self.success_count += 1;
            self.level += 1;
            debug!("Walk solved, level {}", self.level);
            Ok(CellSelection::Solved)
        } else {
            debug!("Walk mismatch: {:?}", self.user_path.cells());
            Ok(CellSelection::Mismatch)
        }
    }

    /// Clear the player's path and let them try the same walk again.
    pub fn reset_user(&mut self) {
        self.user_path.clear();
        if self.phase == Phase::Finished {
            self.phase = Phase::Playing;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn playing_game() -> PathMemoryGame {
        let mut game = PathMemoryGame::new(Difficulty::Easy);
        game.start_round();
        game.finish_preview();
        game
    }

    #[test]
    fn replaying_the_walk_solves_the_round() {
        let mut game: PathMemoryGame = playing_game();
        let cells: Vec<usize> = game.walk().cells().to_vec();
        let (last, first_cells) = cells.split_last().unwrap();
        assert_eq!(game.select_cell(cells[0]), Ok(CellSelection::Started));
        for c in &first_cells[1..] {
            assert_eq!(game.select_cell(*c), Ok(CellSelection::Extended));
        }
        assert_eq!(game.select_cell(*last), Ok(CellSelection::Solved));
        assert_eq!(game.level, 2);
        assert_eq!(game.success_count, 1);
        assert_eq!(game.phase(), Phase::Finished);

        game.start_round();
        assert_eq!(game.phase(), Phase::Preview);
        assert!(game.user_path().is_empty());
    }

    #[test]
    fn selections_before_playing_are_refused() {
        let mut game = PathMemoryGame::new(Difficulty::Medium);
        let start: usize = game.start_cell().unwrap();
        assert_eq!(game.select_cell(start), Err(SelectionError::NotPlaying));
        game.start_round();
        let start: usize = game.start_cell().unwrap();
        assert_eq!(game.select_cell(start), Err(SelectionError::NotPlaying));
        game.finish_preview();
        assert_eq!(game.select_cell(start), Ok(CellSelection::Started));
    }

    #[test]
    fn selection_rules() {
        let mut game: PathMemoryGame = playing_game();
        let grid: Grid = *game.grid();
        let start: usize = game.start_cell().unwrap();

        assert_eq!(game.select_cell(grid.num_cells()), Err(SelectionError::OutOfGrid));
        let other: usize = (0..grid.num_cells()).find(|c| *c != start).unwrap();
        assert_eq!(game.select_cell(other), Err(SelectionError::WrongStart));
        assert_eq!(game.select_cell(start), Ok(CellSelection::Started));
        assert_eq!(game.select_cell(start), Err(SelectionError::NotAdjacent));

        let far: usize = (0..grid.num_cells())
            .find(|c| *c != start && !grid.is_adjacent(start, *c))
            .unwrap();
        assert_eq!(game.select_cell(far), Err(SelectionError::NotAdjacent));

        let next: usize = grid.neighbors(start, |_| false)[0];
        assert_eq!(game.select_cell(next), Ok(CellSelection::Extended));
        assert_eq!(game.select_cell(start), Err(SelectionError::AlreadySelected));
        assert_eq!(game.user_path().len(), 2);
    }

    /// Free neighbor of the cell before last, other than the last cell of the walk.
    fn detour(grid: &Grid, walk: &[usize]) -> Option<usize> {
        let (last, path) = walk.split_last()?;
        grid.neighbors(*path.last()?, |c| path.contains(&c))
            .into_iter()
            .find(|c| c != last)
    }

    #[test]
    fn mismatch_then_retry() {
        let mut game = PathMemoryGame::new(Difficulty::Easy);
        let grid: Grid = *game.grid();
        let mut rng = StdRng::seed_from_u64(11);

        // Look for a walk where the player can deviate on the last cell
        let mut found: Option<(Vec<usize>, usize)> = None;
        for _ in 0..100 {
            game.start_round_with(&mut rng);
            let walk: Vec<usize> = game.walk().cells().to_vec();
            if let Some(d) = detour(&grid, &walk) {
                found = Some((walk, d));
                break;
            }
        }
        let (walk, detour) = found.unwrap();
        game.finish_preview();

        for c in &walk[..walk.len() - 1] {
            game.select_cell(*c).unwrap();
        }
        assert_eq!(game.select_cell(detour), Ok(CellSelection::Mismatch));
        assert_eq!(game.level, 1);
        assert_eq!(game.success_count, 0);
        assert_eq!(game.phase(), Phase::Finished);
        assert_eq!(game.select_cell(walk[0]), Err(SelectionError::NotPlaying));

        game.reset_user();
        assert_eq!(game.phase(), Phase::Playing);
        assert!(game.user_path().is_empty());
        let (last, path) = walk.split_last().unwrap();
        for c in path {
            game.select_cell(*c).unwrap();
        }
        assert_eq!(game.select_cell(*last), Ok(CellSelection::Solved));
        assert_eq!(game.success_count, 1);
        assert_eq!(game.level, 2);
        assert_eq!(game.end_cell(), Some(*last));
    }

    #[test]
    fn seeded_rounds_are_reproducible() {
        let mut a = PathMemoryGame::new(Difficulty::Medium);
        let mut b = PathMemoryGame::new(Difficulty::Medium);
        a.start_round_with(&mut StdRng::seed_from_u64(3));
        b.start_round_with(&mut StdRng::seed_from_u64(3));
        assert_eq!(a.walk(), b.walk());
        assert_eq!(a.phase(), Phase::Preview);
    }

    #[test]
    fn preview_timing() {
        let mut game = PathMemoryGame::new(Difficulty::Hard);
        game.start_round();
        let schedule: Vec<PreviewStep> = game.preview_schedule();
        assert_eq!(schedule.len(), game.walk().len());
        assert_eq!(schedule[0].on, Duration::ZERO);
        assert_eq!(schedule[0].off, Duration::from_millis(280));
        assert_eq!(schedule[2].on, Duration::from_millis(800));
        assert_eq!(schedule[2].cell, game.walk().cells()[2]);
        assert_eq!(
            game.preview_duration(),
            Duration::from_millis(400 * game.walk().len() as u64 + 150)
        );
    }

    #[test]
    fn difficulty_change_resizes_grid() {
        let mut game = PathMemoryGame::new(Difficulty::Easy);
        assert_eq!(game.grid().size(), 5);
        game.set_difficulty(Difficulty::Hard);
        assert_eq!(game.difficulty(), Difficulty::Hard);
        assert_eq!(game.grid().size(), 7);
        assert!(game.walk().len() >= 10);
        assert_eq!(game.phase(), Phase::Idle);
    }
}

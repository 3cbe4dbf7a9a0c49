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

//! Save and restore the high scores of the games.
//!
//! The saved object is a serialization of the [`HighScores`] object in JSON format by
//! using [`serde`].

use log::debug;
use std::error::Error;
use std::fs::{File, create_dir_all, remove_file};
use std::io::{BufReader, BufWriter, ErrorKind, Write};
use std::path::{Path, PathBuf};

use crate::difficulty::Difficulty;
use crate::highscores::{GameKind, HighScores};

/// Object to save and restore the high scores.
pub struct SaverHighScores {
    /// Absolute path to the save file.
    save_file: PathBuf,
}

impl SaverHighScores {
    /// Create a [`SaverHighScores`] object.
    ///
    /// The provided [`PathBuf`] is the path to the directory where the high scores must be saved.
    pub fn new(mut data_dir: PathBuf) -> Self {
        data_dir.push("highscores.json");
        debug!("High scores file: {data_dir:?}");
        Self {
            save_file: data_dir,
        }
    }

    /// Return the path to the save file.
    pub fn path(&self) -> &Path {
        &self.save_file
    }

    /// Retrieve the [`HighScores`] object for the high scores file.
    ///
    /// Return the [`HighScores`] object or None if the high scores file does not exist.
    pub fn get_highscores(&self) -> Result<Option<HighScores>, Box<dyn Error>> {
        let file: File = match File::open(&self.save_file) {
            Ok(f) => f,
            Err(error) => match error.kind() {
                ErrorKind::NotFound => return Ok(None),
                _ => return Err(Box::new(error)),
            },
        };
        let reader: BufReader<File> = BufReader::new(file);
        let highscores: HighScores = serde_json::from_reader(reader)?;
        Ok(Some(highscores))
    }

    /// Save the provided [`HighScores`] object.
    ///
    /// The data directory is created if it does not exist.
    pub fn save_highscores(&self, highscores: &HighScores) -> Result<(), Box<dyn Error>> {
        if let Some(dir) = self.save_file.parent() {
            create_dir_all(dir)?;
        }
        let file: File = File::create(&self.save_file)?;
        let mut writer: BufWriter<File> = BufWriter::new(file);

        serde_json::to_writer(&mut writer, highscores)?;
        writer.flush()?;
        Ok(())
    }

    /// Add a score to the saved high scores, and return its position in the scoreboard.
    ///
    /// A high scores file that cannot be read is replaced by a new list.
    pub fn record_score(
        &self,
        game: GameKind,
        difficulty: Option<Difficulty>,
        points: usize,
        level: usize,
    ) -> Result<Option<usize>, Box<dyn Error>> {
        let mut highscores: HighScores = match self.get_highscores() {
            Ok(h) => h.unwrap_or_default(),
            Err(e) => {
                debug!("Cannot read the high scores, starting a new list: {e}");
                HighScores::new()
            }
        };
        let position: Option<usize> = highscores.add_score(game, difficulty, points, level);
        self.save_highscores(&highscores)?;
        Ok(position)
    }

    /// Delete the high scores file. A missing file is not an error.
    pub fn delete_save(&self) -> Result<(), Box<dyn Error>> {
        match remove_file(&self.save_file) {
            Ok(()) => Ok(()),
            Err(error) if error.kind() == ErrorKind::NotFound => Ok(()),
            Err(error) => Err(Box::new(error)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use std::fs;

    fn temp_dir(name: &str) -> PathBuf {
        let mut dir: PathBuf = env::temp_dir();
        dir.push(format!("minigames-{name}-{}", std::process::id()));
        dir
    }

    #[test]
    fn missing_file_is_not_an_error() {
        let saver = SaverHighScores::new(temp_dir("missing"));
        assert!(saver.get_highscores().unwrap().is_none());
    }

    #[test]
    fn save_and_restore() {
        let dir: PathBuf = temp_dir("roundtrip");
        let saver = SaverHighScores::new(dir.clone());
        let mut highscores = HighScores::new();
        highscores.add_score(GameKind::PathMemory, Some(Difficulty::Medium), 4, 5);
        saver.save_highscores(&highscores).unwrap();

        let restored: HighScores = saver.get_highscores().unwrap().unwrap();
        assert_eq!(
            restored.best(GameKind::PathMemory, Some(Difficulty::Medium)),
            Some(4)
        );

        saver.delete_save().unwrap();
        assert!(saver.get_highscores().unwrap().is_none());
        saver.delete_save().unwrap();
        let _ = fs::remove_dir_all(dir);
    }

    #[test]
    fn corrupted_file_is_an_error() {
        let dir: PathBuf = temp_dir("corrupted");
        fs::create_dir_all(&dir).unwrap();
        let saver = SaverHighScores::new(dir.clone());
        fs::write(saver.path(), "{not json").unwrap();
        assert!(saver.get_highscores().is_err());
        let _ = fs::remove_dir_all(dir);
    }

    #[test]
    fn record_score_creates_and_updates_the_file() {
        let dir: PathBuf = temp_dir("record");
        let saver = SaverHighScores::new(dir.clone());
        assert_eq!(
            saver.record_score(GameKind::CircleConnect, None, 40, 2).unwrap(),
            Some(1)
        );
        assert_eq!(
            saver.record_score(GameKind::CircleConnect, None, 90, 3).unwrap(),
            Some(1)
        );
        let restored: HighScores = saver.get_highscores().unwrap().unwrap();
        let points: Vec<usize> = restored
            .get_score(GameKind::CircleConnect, None)
            .unwrap()
            .iter()
            .map(|s| s.points)
            .collect();
        assert_eq!(points, vec![90, 40]);
        let _ = fs::remove_dir_all(dir);
    }

    #[test]
    fn record_score_replaces_corrupted_file() {
        let dir: PathBuf = temp_dir("record-corrupted");
        fs::create_dir_all(&dir).unwrap();
        let saver = SaverHighScores::new(dir.clone());
        fs::write(saver.path(), "[1, 2").unwrap();
        assert_eq!(
            saver
                .record_score(GameKind::PathMemory, Some(Difficulty::Easy), 3, 4)
                .unwrap(),
            Some(1)
        );
        assert!(saver.get_highscores().unwrap().is_some());
        let _ = fs::remove_dir_all(dir);
    }
}

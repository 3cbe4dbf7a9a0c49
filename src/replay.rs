/*
replay.rs

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

//! Replay recorded pointer events through a circle-connection game.
//!
//! The replay file is a JSON object:
//!
//! ```json
//! {
//!     "level": 1,
//!     "width": 800,
//!     "height": 600,
//!     "markers": [
//!         {"position": {"x": 100, "y": 300}, "color": "#FF6B6B"},
//!         {"position": {"x": 700, "y": 300}, "color": "#FF6B6B"}
//!     ],
//!     "events": [
//!         {"kind": "down", "x": 100, "y": 300},
//!         {"kind": "move", "x": 400, "y": 310},
//!         {"kind": "up", "x": 700, "y": 300}
//!     ]
//! }
//! ```
//!
//! All the fields but `events` are optional.
//! Without `markers`, a random board is built for the level.
//! A non-zero final score is added to the circle-connection high scores.

use log::debug;
use serde::Deserialize;
use std::error::Error;
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

use minigames::connect::board::BoardSize;
use minigames::connect::intersection::IntersectionConfig;
use minigames::connect::marker::Marker;
use minigames::connect::session::{ConnectGame, ConnectOutcome};
use minigames::geometry::Point;
use minigames::highscores::GameKind;
use minigames::saver::highscores::SaverHighScores;

/// Pointer event from the user interface.
#[derive(Deserialize, Debug, Copy, Clone, PartialEq)]
#[serde(tag = "kind", rename_all = "lowercase")]
enum PointerEvent {
    Down { x: f64, y: f64 },
    Move { x: f64, y: f64 },
    Up { x: f64, y: f64 },
    Leave,
}

fn default_level() -> usize {
    1
}

fn default_width() -> f64 {
    BoardSize::default().width
}

fn default_height() -> f64 {
    BoardSize::default().height
}

/// Content of a replay file.
#[derive(Deserialize, Debug)]
struct ReplayFile {
    #[serde(default = "default_level")]
    level: usize,

    #[serde(default = "default_width")]
    width: f64,

    #[serde(default = "default_height")]
    height: f64,

    #[serde(default)]
    markers: Vec<Marker>,

    events: Vec<PointerEvent>,
}

impl ReplayFile {
    /// Build the game session described by the file.
    fn build_game(&self, config: IntersectionConfig) -> ConnectGame {
        let size = BoardSize {
            width: self.width,
            height: self.height,
        };
        let mut game: ConnectGame = if self.markers.is_empty() {
            ConnectGame::new(size, config)
        } else {
            ConnectGame::with_markers(self.markers.clone(), size, config)
        };
        if self.level > 1 {
            game.level = self.level;
            if self.markers.is_empty() {
                game.reset_level();
            }
        }
        game
    }
}

/// Read a replay file.
fn load(file: &Path) -> Result<ReplayFile, Box<dyn Error>> {
    let reader: BufReader<File> = BufReader::new(File::open(file)?);
    let replay: ReplayFile = serde_json::from_reader(reader)?;
    Ok(replay)
}

/// Apply the events to the game and return the outcome of each pointer release.
fn apply(game: &mut ConnectGame, events: &[PointerEvent]) -> Vec<ConnectOutcome> {
    let mut outcomes: Vec<ConnectOutcome> = Vec::new();
    for event in events {
        debug!("Event {event:?}");
        match *event {
            PointerEvent::Down { x, y } => {
                game.pointer_down(Point::new(x, y));
            }
            PointerEvent::Move { x, y } => game.pointer_move(Point::new(x, y)),
            PointerEvent::Up { x, y } => outcomes.push(game.pointer_up(Point::new(x, y))),
            PointerEvent::Leave => game.pointer_leave(),
        }
    }
    outcomes
}

/// Replay the file and print the outcomes. Return the exit code.
pub fn run(file: &Path, config: IntersectionConfig, data_dir: PathBuf) -> u8 {
    let replay: ReplayFile = match load(file) {
        Ok(r) => r,
        Err(e) => {
            eprintln!("Cannot read {}: {e}", file.display());
            return 1;
        }
    };
    let mut game: ConnectGame = replay.build_game(config);

    println!("Level {} markers:", game.level);
    for (i, m) in game.markers().iter().enumerate() {
        println!("{i:>4}  {}  {}", m.color, m.position);
    }

    for (i, outcome) in apply(&mut game, &replay.events).iter().enumerate() {
        println!("Release {}: {outcome:?}", i + 1);
    }
    println!(
        "Connections = {}  Score = {}  Level complete = {}",
        game.connections().len(),
        game.score,
        game.is_level_complete()
    );

    if game.score == 0 {
        return 0;
    }
    let saver: SaverHighScores = SaverHighScores::new(data_dir);
    match saver.record_score(GameKind::CircleConnect, None, game.score, game.level) {
        Ok(Some(p)) => println!("New high score: position {p}"),
        Ok(None) => debug!("The score does not make it to the scoreboard"),
        Err(e) => {
            eprintln!("Cannot save the high scores: {e}");
            return 1;
        }
    }
    0
}

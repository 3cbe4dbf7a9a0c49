/*
cli_options.rs

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

//! Process command-line options.
//!
//! # Examples
//!
//! Generate three walks for the path-memory game at the easy difficulty level, and draw them:
//!
//! ```text
//! $ minigames --walk -f easy -c 3 --show
//! [4, 9, 8, 13, 12, 17, 22, 21, 20]
//!      1  2  3  4  5
//!   1  .  .  .  .  1
//!   2  .  .  .  3  2
//!   3  .  .  5  4  .
//!   4  .  .  6  .  .
//!   5  9  8  7  .  .
//! ...
//! ```
//!
//! Replay pointer events through a circle-connection game:
//!
//! ```text
//! $ minigames --replay drag.json --marker-clearance 20
//! ```
//!
//! Play the path-memory game in the terminal, list the high scores, and then delete them:
//!
//! ```text
//! $ minigames --play -f hard
//! $ minigames --scores
//! $ minigames --clear-scores
//! ```

use chrono::{DateTime, Local};
use clap::{ArgGroup, CommandFactory, Parser};
use log::{LevelFilter, debug};
use std::path::PathBuf;

use minigames::config::{self, COPYRIGHT_NOTICE};
use minigames::connect::intersection::IntersectionConfig;
use minigames::difficulty::Difficulty;
use minigames::highscores::{GameKind, HighScores, Score};
use minigames::saver::highscores::SaverHighScores;
use minigames::walk::random_walk::RandomWalk;
use minigames::walk::walk_path::WalkPath;

use crate::play;
use crate::replay;

/// Logic of the Minigames collection, from the command line.
#[derive(Parser)]
#[command(about, long_about = None, version, long_version = COPYRIGHT_NOTICE)]
#[command(group(ArgGroup::new("mode").args(["walk", "replay", "play", "scores", "clear_scores"])))]
struct Args {
    /// Generate random walks for the path-memory game
    #[arg(short, long, default_value_t = false)]
    walk: bool,

    /// Difficulty level for the path-memory game
    #[arg(value_enum, short = 'f', long, default_value_t = Difficulty::Medium)]
    difficulty: Difficulty,

    /// Number of walks to generate
    #[arg(short, long, default_value_t = 1, requires = "walk")]
    count: usize,

    /// Draw the generated walks on a grid
    #[arg(long, default_value_t = false, requires = "walk")]
    show: bool,

    /// Print some statistics after generating the walks
    #[arg(short, long, default_value_t = false, requires = "walk")]
    summary: bool,

    /// Replay a JSON file of pointer events through a circle-connection game
    #[arg(short, long, value_name = "FILE")]
    replay: Option<PathBuf>,

    /// Ignore the crossings closer than this distance to a marker
    #[arg(long, value_name = "DISTANCE", requires = "replay")]
    marker_clearance: Option<f64>,

    /// Ignore the crossings closer than this distance to a segment end, for paths without
    /// markers
    #[arg(long, value_name = "DISTANCE", requires = "replay")]
    segment_clearance: Option<f64>,

    /// Play the path-memory game in the terminal
    #[arg(short, long, default_value_t = false)]
    play: bool,

    /// List the high scores
    #[arg(short = 'l', long, default_value_t = false)]
    scores: bool,

    /// Delete the saved high scores
    #[arg(long, default_value_t = false)]
    clear_scores: bool,

    /// Directory where the high scores are saved
    #[arg(long, value_name = "DIR")]
    data_dir: Option<PathBuf>,

    /// Enable debug messages
    #[arg(short, long, default_value_t = false)]
    debug: bool,
}

/// Parse and process command-line options, and return the exit code.
pub fn parse() -> u8 {
    let args: Args = Args::parse();

    let mut logger = env_logger::Builder::from_default_env();
    if args.debug {
        logger.filter_level(LevelFilter::Debug);
    }
    logger.init();

    if args.walk {
        return generate_walks(&args);
    }

    if !(args.replay.is_some() || args.play || args.scores || args.clear_scores) {
        let _ = Args::command().print_help();
        return 0;
    }

    let Some(data_dir) = args.data_dir.clone().or_else(config::user_data_dir) else {
        eprintln!("Cannot find the user data directory, use --data-dir");
        return 1;
    };

    if let Some(file) = &args.replay {
        let mut intersection: IntersectionConfig = IntersectionConfig::default();
        if let Some(d) = args.marker_clearance {
            intersection.marker_clearance = d;
        }
        if let Some(d) = args.segment_clearance {
            intersection.segment_clearance = d;
        }
        return replay::run(file, intersection, data_dir);
    }

    if args.play {
        return play::run(args.difficulty, data_dir);
    }

    if args.clear_scores {
        return clear_scores(data_dir);
    }

    list_scores(data_dir)
}

/// Verify that the walk has the expected length, is a valid self-avoiding walk, and starts on
/// the border.
fn check_walk(generator: &RandomWalk, walk: &WalkPath) -> Result<(), String> {
    if walk.len() < generator.min_len || walk.len() > generator.max_len {
        return Err(format!(
            "Wrong length: {} not in [{}, {}]: {:?}",
            walk.len(),
            generator.min_len,
            generator.max_len,
            walk.cells()
        ));
    }
    if !walk.is_valid_on(&generator.grid) {
        return Err(format!("Invalid walk: {:?}", walk.cells()));
    }
    if !walk.first().is_some_and(|c| generator.grid.is_edge(c)) {
        return Err(format!(
            "Walk does not start on the border: {:?}",
            walk.cells()
        ));
    }
    Ok(())
}

/// Generate walks, verify them, and print them.
fn generate_walks(args: &Args) -> u8 {
    let mut generator: RandomWalk = RandomWalk::for_difficulty(args.difficulty);
    let mut total: f32 = 0.0;
    let mut max: f32 = 0.0;
    let mut iterations: usize = 0;
    let mut restarts: usize = 0;

    for i in 0..args.count {
        debug!("Walk {i}");
        let walk: WalkPath = generator.generate();
        total += generator.duration;
        if generator.duration > max {
            max = generator.duration;
        }
        iterations += generator.iteration;
        restarts += generator.attempts - 1;

        if let Err(e) = check_walk(&generator, &walk) {
            eprintln!("{e}");
            return 1;
        }

        println!("{:?}", walk.cells());
        if args.show {
            println!("{}", play::draw_walk(&generator.grid, &walk));
        }
    }

    // Print some stats
    if args.summary && args.count > 0 {
        println!(
            "
        total time = {}s
      average time = {}s
          max time = {}s
average iterations = {}
          restarts = {}",
            total,
            total / args.count as f32,
            max,
            iterations / args.count,
            restarts
        );
    }
    0
}

/// Print the saved high scores.
fn list_scores(data_dir: PathBuf) -> u8 {
    let saver: SaverHighScores = SaverHighScores::new(data_dir);
    let highscores: HighScores = match saver.get_highscores() {
        Ok(Some(h)) => h,
        Ok(None) => HighScores::new(),
        Err(e) => {
            eprintln!("Cannot read {}: {e}", saver.path().display());
            return 1;
        }
    };
    if highscores.is_empty() {
        println!("No high scores yet");
        return 0;
    }

    let boards: [(GameKind, Option<Difficulty>); 4] = [
        (GameKind::CircleConnect, None),
        (GameKind::PathMemory, Some(Difficulty::Easy)),
        (GameKind::PathMemory, Some(Difficulty::Medium)),
        (GameKind::PathMemory, Some(Difficulty::Hard)),
    ];
    for (game, difficulty) in boards {
        let Some(top) = highscores.get_score(game, difficulty) else {
            continue;
        };
        match difficulty {
            Some(d) => println!("{game} ({d})"),
            None => println!("{game}"),
        }
        for (i, score) in top.iter().enumerate() {
            println!("{:>4}. {}", i + 1, format_score(score));
        }
    }
    0
}

/// Delete the saved high scores.
fn clear_scores(data_dir: PathBuf) -> u8 {
    let saver: SaverHighScores = SaverHighScores::new(data_dir);
    if let Err(e) = saver.delete_save() {
        eprintln!("Cannot delete {}: {e}", saver.path().display());
        return 1;
    }
    0
}

/// Format a scoreboard entry.
fn format_score(score: &Score) -> String {
    let dt: DateTime<Local> = DateTime::from(score.when);
    format!(
        "{:>6} points  level {:>3}  {}",
        score.points,
        score.level,
        dt.format("%c")
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use minigames::walk::grid::Grid;
    use std::fs;
    use std::time::SystemTime;

    fn temp_dir(name: &str) -> PathBuf {
        let mut dir: PathBuf = std::env::temp_dir();
        dir.push(format!("minigames-cli-{name}-{}", std::process::id()));
        dir
    }

    #[test]
    fn walk_checks() {
        let generator = RandomWalk::new(Grid::new(4).unwrap(), 3, 5).unwrap();
        assert!(check_walk(&generator, &WalkPath::from_slice(&[0, 1, 5, 9])).is_ok());

        let short: Result<(), String> = check_walk(&generator, &WalkPath::from_slice(&[0, 1]));
        assert!(short.unwrap_err().starts_with("Wrong length"));
        let jump: Result<(), String> = check_walk(&generator, &WalkPath::from_slice(&[0, 1, 9]));
        assert!(jump.unwrap_err().starts_with("Invalid walk"));
        let inner: Result<(), String> =
            check_walk(&generator, &WalkPath::from_slice(&[5, 6, 10, 11]));
        assert!(inner.unwrap_err().starts_with("Walk does not start on the border"));
    }

    #[test]
    fn generated_walks_pass_checks() {
        let mut generator = RandomWalk::for_difficulty(Difficulty::Hard);
        for _ in 0..50 {
            let walk: WalkPath = generator.generate();
            assert_eq!(check_walk(&generator, &walk), Ok(()));
        }
    }

    #[test]
    fn score_formatting() {
        let score = Score {
            points: 120,
            level: 4,
            when: SystemTime::now(),
        };
        let s: String = format_score(&score);
        assert!(s.starts_with("   120 points  level   4  "), "{s}");
    }

    #[test]
    fn list_and_clear_scores() {
        let dir: PathBuf = temp_dir("scores");
        assert_eq!(list_scores(dir.clone()), 0);
        assert_eq!(clear_scores(dir.clone()), 0);

        let saver = SaverHighScores::new(dir.clone());
        saver
            .record_score(GameKind::CircleConnect, None, 30, 1)
            .unwrap();
        assert_eq!(list_scores(dir.clone()), 0);
        assert_eq!(clear_scores(dir.clone()), 0);
        assert!(saver.get_highscores().unwrap().is_none());

        fs::write(saver.path(), "{").unwrap();
        assert_eq!(list_scores(dir.clone()), 1);
        let _ = fs::remove_dir_all(dir);
    }
}

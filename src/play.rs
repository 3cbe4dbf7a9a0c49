/*
play.rs

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

//! Play the path-memory game in the terminal.
//!
//! The walk is shown on a text grid. Once the player presses Enter, the screen is cleared and
//! the player enters the cells as `row,col` pairs (starting at 1).
//! When the player quits, the number of solved rounds is added to the high scores.

use log::debug;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use minigames::difficulty::Difficulty;
use minigames::highscores::GameKind;
use minigames::saver::highscores::SaverHighScores;
use minigames::walk::grid::Grid;
use minigames::walk::session::{CellSelection, PathMemoryGame};
use minigames::walk::walk_path::WalkPath;

/// Draw a grid with a label in each cell.
fn draw_grid<F>(grid: &Grid, label: F) -> String
where
    F: Fn(usize) -> Option<String>,
{
    let mut s: String = String::from("   ");
    for c in 1..=grid.size() {
        s.push_str(&format!("{c:>3}"));
    }
    for r in 0..grid.size() {
        s.push_str(&format!("\n{:>3}", r + 1));
        for c in 0..grid.size() {
            let l: String = label(grid.to_index(r, c)).unwrap_or_else(|| ".".to_string());
            s.push_str(&format!("{l:>3}"));
        }
    }
    s
}

/// Draw the walk with the step number in each cell.
pub fn draw_walk(grid: &Grid, walk: &WalkPath) -> String {
    draw_grid(grid, |i| walk.position(i).map(|p| (p + 1).to_string()))
}

/// Draw the grid with only the start and end cells.
fn draw_start_end(grid: &Grid, start: Option<usize>, end: Option<usize>) -> String {
    draw_grid(grid, |i| {
        if Some(i) == start {
            Some("S".to_string())
        } else if Some(i) == end {
            Some("E".to_string())
        } else {
            None
        }
    })
}

/// Convert "row,col" tokens (starting at 1) to cell indexes.
fn parse_cells(grid: &Grid, line: &str) -> Result<Vec<usize>, String> {
    line.split_whitespace()
        .map(|token| {
            let (r, c) = token
                .split_once(',')
                .ok_or_else(|| format!("{token}: expected row,col"))?;
            let r: usize = r.trim().parse().map_err(|_| format!("{token}: bad row"))?;
            let c: usize = c.trim().parse().map_err(|_| format!("{token}: bad column"))?;
            if r == 0 || c == 0 || r > grid.size() || c > grid.size() {
                return Err(format!("{token}: outside of the grid"));
            }
            Ok(grid.to_index(r - 1, c - 1))
        })
        .collect()
}

/// Read a line from the player. Return None at the end of the input.
fn read_line<B: BufRead>(input: &mut B) -> Option<String> {
    let _ = io::stdout().flush();
    let mut line: String = String::new();
    match input.read_line(&mut line) {
        Ok(0) | Err(_) => None,
        Ok(_) => Some(line.trim().to_string()),
    }
}

/// Play rounds until the player quits, and return the exit code.
pub fn run(difficulty: Difficulty, data_dir: PathBuf) -> u8 {
    let mut game: PathMemoryGame = PathMemoryGame::new(difficulty);
    let stdin = io::stdin();
    let mut input = stdin.lock();

    'rounds: loop {
        game.start_round();
        println!(
            "\nLevel {}  Solved {}\n{}",
            game.level,
            game.success_count,
            draw_walk(game.grid(), game.walk())
        );
        print!("Memorize the walk, then press Enter (q to quit) ");
        match read_line(&mut input) {
            Some(l) if l != "q" => (),
            _ => break,
        }
        // Clear the screen to hide the walk
        print!("\x1B[2J\x1B[H");
        game.finish_preview();

        loop {
            println!(
                "{}",
                draw_start_end(game.grid(), game.start_cell(), game.end_cell())
            );
            print!("Cells from S to E as row,col pairs (q to quit): ");
            let Some(line) = read_line(&mut input) else {
                break 'rounds;
            };
            if line == "q" {
                break 'rounds;
            }
            let cells: Vec<usize> = match parse_cells(game.grid(), &line) {
                Ok(c) => c,
                Err(e) => {
                    println!("{e}");
                    continue;
                }
            };

            let mut last: Option<CellSelection> = None;
            for cell in cells {
                match game.select_cell(cell) {
                    Ok(s) => last = Some(s),
                    Err(e) => {
                        println!("Wrong move: {e}");
                        last = None;
                        break;
                    }
                }
            }
            match last {
                Some(CellSelection::Solved) => {
                    println!("Well done! The walk is correct.");
                    continue 'rounds;
                }
                Some(CellSelection::Mismatch) => {
                    println!("Almost! Your walk is different. Try again.");
                }
                Some(_) => println!("The walk is longer. Try again."),
                None => (),
            }
            game.reset_user();
        }
    }

    println!(
        "\nSolved {} walks, reached level {}",
        game.success_count, game.level
    );
    if game.success_count > 0 {
        return save_score(&game, data_dir);
    }
    0
}

/// Add the result to the high scores.
fn save_score(game: &PathMemoryGame, data_dir: PathBuf) -> u8 {
    let saver: SaverHighScores = SaverHighScores::new(data_dir);
    match saver.record_score(
        GameKind::PathMemory,
        Some(game.difficulty()),
        game.success_count,
        game.level,
    ) {
        Ok(Some(p)) => println!("New high score: position {p}"),
        Ok(None) => debug!("The score does not make it to the scoreboard"),
        Err(e) => {
            eprintln!("Cannot save the high scores: {e}");
            return 1;
        }
    }
    0
}

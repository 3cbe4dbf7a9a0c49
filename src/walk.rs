/*
walk.rs

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

//! Path-memory game: watch a walk across a grid, then repeat it.
//!
//! The walk is a [`walk_path::WalkPath`] produced by [`random_walk::RandomWalk::generate`] on a
//! [`grid::Grid`] sized after the [`crate::difficulty::Difficulty`].
//! [`session::PathMemoryGame`] drives the rounds: preview, player selections, and the level and
//! success counters.

pub mod grid;
pub mod random_walk;
pub mod session;
pub mod walk_path;

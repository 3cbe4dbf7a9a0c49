/*
lib.rs

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

//! Logic of the Minigames collection.
//!
//! Two games have non-trivial algorithms:
//!
//! * The circle-connection game, in [`connect`]: the player links markers of the same color
//!   with freehand paths that must not cross.
//!   [`connect::intersection::paths_intersect`] tests a new path against the paths already on
//!   the board.
//! * The path-memory game, in [`walk`]: the player memorizes a walk across a grid and repeats
//!   it. [`walk::random_walk::RandomWalk`] builds random self-avoiding walks.
//!
//! Both games keep their state in a session object owned by the caller
//! ([`connect::session::ConnectGame`] and [`walk::session::PathMemoryGame`]).
//! Rendering, input events, and timers are left to the user interface.

pub mod config;
pub mod connect;
pub mod difficulty;
pub mod geometry;
pub mod highscores;
pub mod saver;
pub mod walk;

/*
connect.rs

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

//! Circle-connection game: link the markers of the same color without crossing paths.
//!
//! A level is a board of [`marker::Marker`] pairs built by [`board::build_markers`].
//! The player draws a freehand path from a marker to its twin.
//! While the pointer moves, a [`path::PathRecorder`] samples the pointer positions.
//! When the pointer is released on the matching marker, the recorder produces a
//! [`path::ConnectPath`], which [`intersection::paths_intersect`] checks against the paths
//! already on the board.
//!
//! [`session::ConnectGame`] ties these parts together and keeps the level and the score.

pub mod board;
pub mod intersection;
pub mod marker;
pub mod path;
pub mod session;

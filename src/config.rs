/*
config.rs

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

//! Package constants and default locations.

use std::path::PathBuf;

/// Name of the package, also used for the data directory.
pub const PACKAGE: &str = env!("CARGO_PKG_NAME");

/// Long version message.
pub const COPYRIGHT_NOTICE: &str = concat!(
    env!("CARGO_PKG_VERSION"),
    "\nCopyright 2025 Hervé Quatremain\n",
    "License GPLv3+: GNU GPL version 3 or later <https://gnu.org/licenses/gpl.html>.\n",
    "This is free software: you are free to change and redistribute it.\n",
    "There is NO WARRANTY, to the extent permitted by law."
);

/// Return the directory where the game data is saved.
///
/// On Linux, this is `$XDG_DATA_HOME/minigames`, or `$HOME/.local/share/minigames` when
/// `XDG_DATA_HOME` is not set or is not an absolute path.
/// Return None when the home directory cannot be found.
pub fn user_data_dir() -> Option<PathBuf> {
    dirs::data_dir().map(|mut dir| {
        dir.push(PACKAGE);
        dir
    })
}

// Copyright (C) 2026  Caprica Software Limited
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with this program.  If not, see <https://www.gnu.org/licenses/>.

//! Terminal emulator background control.
//!
//! The background is changed with OSC (Operating System Command) escape
//! sequences. Terminals that do not understand them simply ignore them, so
//! failures here are never fatal.

use std::io::{self, Write};

const OSC_SET_BACKGROUND: &str = "\x1b]11;";
const OSC_RESET_BACKGROUND: &str = "\x1b]111";
const BEL: &str = "\x07";

/// Sets the terminal background color to `hex_color`, e.g. `"#141824"`.
///
/// # Errors
///
/// Returns an error if the escape sequence cannot be written to `stdout`.
pub(crate) fn set_terminal_bg(hex_color: &str) -> io::Result<()> {
    write_osc(&mut io::stdout(), &format!("{}{}", OSC_SET_BACKGROUND, hex_color))
}

/// Reverts the terminal background to the user's own configuration.
///
/// This is called during cleanup, so it is best-effort.
pub(crate) fn reset_terminal_bg() {
    write_osc(&mut io::stdout(), OSC_RESET_BACKGROUND).ok();
}

fn write_osc(out: &mut impl Write, sequence: &str) -> io::Result<()> {
    write!(out, "{}{}", sequence, BEL)?;
    out.flush()
}

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

use crossterm::event::{KeyCode, KeyEvent};

use crate::remote::RemoteCommand;

/// Maps a key press to the remote control button it stands for.
///
/// The digit keys form the numeric keypad, selecting channels `0` to `9`
/// directly. Keys that are not remote buttons yield `None`.
pub(crate) fn command_for_key(key: &KeyEvent) -> Option<RemoteCommand> {
    let command = match key.code {
        KeyCode::Char('p') => RemoteCommand::Power,
        KeyCode::Char('m') => RemoteCommand::Mute,

        KeyCode::Char('k') | KeyCode::Up => RemoteCommand::ChannelUp,
        KeyCode::Char('j') | KeyCode::Down => RemoteCommand::ChannelDown,

        KeyCode::Char('+') | KeyCode::Char('=') | KeyCode::Right => RemoteCommand::VolumeUp,
        KeyCode::Char('-') | KeyCode::Char('_') | KeyCode::Left => RemoteCommand::VolumeDown,

        KeyCode::Char(c) if c.is_ascii_digit() => {
            RemoteCommand::SetChannel(c.to_digit(10)? as i32)
        }

        _ => return None,
    };

    Some(command)
}

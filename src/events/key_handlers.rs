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

use anyhow::Result;
use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind};

use crate::{App, events::AppEvent, remote::command_for_key};

use super::handlers::handle_remote;

/// Maps keyboard input to remote control buttons.
///
/// The command line gets the first look at every key; while it is active it
/// consumes all of them. Otherwise keys are looked up in the remote's key
/// map, with `q` reserved for quitting.
///
/// # Errors
///
/// Returns an error if an event cannot be posted to the application event
/// channel.
pub(super) fn process_key_event(app: &mut App, key: KeyEvent) -> Result<()> {
    // Some platforms report releases as well, a button is pressed once.
    if key.kind != KeyEventKind::Press {
        return Ok(());
    }

    let handled = app.commander.handle_event(Event::Key(key), &app.event_tx);
    if handled {
        return Ok(());
    }

    process_global_key_event(app, key)
}

fn process_global_key_event(app: &mut App, key: KeyEvent) -> Result<()> {
    if key.code == KeyCode::Char('q') {
        app.event_tx.send(AppEvent::ExitApplication)?;
        return Ok(());
    }

    if let Some(command) = command_for_key(&key) {
        handle_remote(app, command);
    }

    Ok(())
}

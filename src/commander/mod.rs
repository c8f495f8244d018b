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

//! Command-line input logic and state management.
//!
//! This module implements a command-line component, handling a text input
//! component and dispatching the corresponding application event when a
//! command is submitted. It gives access to remote buttons by name, and to
//! channels beyond the single-digit keypad.
//!
//! # Commands
//!
//! | Command  | Action               |
//! |----------|----------------------|
//! | `power`  | power on/off         |
//! | `mute`   | mute on/off          |
//! | `cu`     | channel up           |
//! | `cd`     | channel down         |
//! | `vu`     | volume up            |
//! | `vd`     | volume down          |
//! | `ch <n>` | tune to channel `n`  |
//! | `q`      | quit                 |
//!
//! `policy strict` or `policy permissive` changes how out of range channels
//! are handled and saves the choice to the configuration file.

use std::sync::mpsc::Sender;

use crossterm::event::{Event, KeyCode};
use thiserror::Error;
use tracing::{debug, warn};
use tui_input::{Input, backend::crossterm::EventHandler};

use crate::{
    events::AppEvent,
    remote::{ChannelPolicy, RemoteCommand},
};

#[derive(Debug, Error, PartialEq, Eq)]
pub(crate) enum CommandError {
    #[error("unknown command: {0}")]
    Unknown(String),

    #[error("missing argument for '{0}'")]
    MissingArgument(&'static str),

    #[error("not a channel number: {0}")]
    InvalidChannel(String),

    #[error("unknown channel policy: {0} (expected strict or permissive)")]
    InvalidPolicy(String),
}

/// What a submitted command line asks for.
#[derive(Debug, PartialEq, Eq)]
pub(crate) enum CommandAction {
    Remote(RemoteCommand),
    SetPolicy(ChannelPolicy),
    Exit,
}

pub(crate) struct Commander {
    active: bool,
    pub(crate) input: Input,
}

impl Commander {
    pub(crate) fn new() -> Self {
        Self {
            active: false,
            input: Input::default(),
        }
    }

    pub(crate) fn active(&self) -> bool {
        self.active
    }

    /// Offers an input event to the command line.
    ///
    /// Returns `true` if the event was consumed, in which case it must not be
    /// processed any further.
    pub(crate) fn handle_event(&mut self, event: Event, event_tx: &Sender<AppEvent>) -> bool {
        let Event::Key(key_event) = event else {
            return false;
        };

        if !self.active {
            if key_event.code == KeyCode::Char(':') {
                self.active = true;
                return true;
            }
            return false;
        }

        match key_event.code {
            KeyCode::Esc => {
                self.input.reset();
                self.active = false;
            }

            KeyCode::Enter => {
                let buffer = self.input.value().trim().to_string();
                self.input.reset();
                self.active = false;
                if !buffer.is_empty() {
                    self.submit(&buffer, event_tx);
                }
            }

            _ => {
                // Delegate all other key events to the managed input component.
                self.input.handle_event(&event);
            }
        }

        true
    }

    fn submit(&self, buffer: &str, event_tx: &Sender<AppEvent>) {
        debug!(command = buffer, "command submitted");

        let event = match parse_command(buffer) {
            Ok(CommandAction::Remote(command)) => AppEvent::Remote(command),
            Ok(CommandAction::SetPolicy(policy)) => AppEvent::SetChannelPolicy(policy),
            Ok(CommandAction::Exit) => AppEvent::ExitApplication,
            Err(e) => {
                warn!("Rejected command '{}': {}", buffer, e);
                AppEvent::Error(e.to_string())
            }
        };

        // The receiver only goes away when the application is shutting down.
        let _ = event_tx.send(event);
    }
}

/// Parses a command line into the action it requests.
pub(crate) fn parse_command(buffer: &str) -> Result<CommandAction, CommandError> {
    let parts: Vec<&str> = buffer.split_whitespace().collect();

    let command = match parts.as_slice() {
        ["q"] => return Ok(CommandAction::Exit),

        ["power"] => RemoteCommand::Power,
        ["mute"] => RemoteCommand::Mute,
        ["cu"] => RemoteCommand::ChannelUp,
        ["cd"] => RemoteCommand::ChannelDown,
        ["vu"] => RemoteCommand::VolumeUp,
        ["vd"] => RemoteCommand::VolumeDown,

        ["ch"] => return Err(CommandError::MissingArgument("ch")),
        ["ch", channel] => {
            let channel = channel
                .parse::<i32>()
                .map_err(|_| CommandError::InvalidChannel(channel.to_string()))?;
            RemoteCommand::SetChannel(channel)
        }

        ["policy"] => return Err(CommandError::MissingArgument("policy")),
        ["policy", "strict"] => return Ok(CommandAction::SetPolicy(ChannelPolicy::Strict)),
        ["policy", "permissive"] => {
            return Ok(CommandAction::SetPolicy(ChannelPolicy::Permissive));
        }
        ["policy", other] => return Err(CommandError::InvalidPolicy(other.to_string())),

        _ => return Err(CommandError::Unknown(buffer.to_string())),
    };

    Ok(CommandAction::Remote(command))
}

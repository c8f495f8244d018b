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

use tracing::{info, warn};

use crate::{
    App,
    remote::{ChannelPolicy, RemoteCommand},
};

pub(super) fn handle_remote(app: &mut App, command: RemoteCommand) {
    match app.television.apply(command, app.config.channel_policy) {
        Ok(()) => {
            app.status = None;
            info!(?command, state = %app.television, "button pressed");
        }
        Err(e) => {
            warn!(?command, "Button rejected: {}", e);
            app.status = Some(e.to_string());
        }
    }
}

pub(super) fn handle_set_channel_policy(app: &mut App, policy: ChannelPolicy) {
    app.config.channel_policy = policy;
    info!(?policy, "channel policy changed");

    match (app.config_store)(&app.config) {
        Ok(()) => app.status = None,
        Err(e) => {
            warn!("Failed to save configuration: {}", e);
            app.status = Some(format!("Failed to save configuration: {}", e));
        }
    }
}

pub(super) fn handle_error(app: &mut App, message: String) {
    app.status = Some(message);
}

pub(super) fn handle_tick(_app: &mut App) {}

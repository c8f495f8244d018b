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

//! Remote control buttons.
//!
//! Each button on the remote is represented by a [`RemoteCommand`], which can
//! be applied to a [`Television`]. The front end never touches television
//! state directly, every key press and typed command ends up here.

mod keys;

pub(crate) use keys::command_for_key;

use serde::{Deserialize, Serialize};

use crate::device::{DeviceError, Television};

/// A single button press.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum RemoteCommand {
    Power,
    Mute,
    ChannelUp,
    ChannelDown,
    VolumeUp,
    VolumeDown,
    SetChannel(i32),
}

/// How direct channel selection treats channels outside the configured
/// range.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub(crate) enum ChannelPolicy {
    /// Tune to whatever was requested.
    #[default]
    Permissive,
    /// Refuse out of range channels.
    Strict,
}

impl Television {
    /// Presses `command` on the remote.
    ///
    /// # Errors
    ///
    /// Only [`RemoteCommand::SetChannel`] under [`ChannelPolicy::Strict`] can
    /// fail, see [`Television::try_set_channel`].
    pub(crate) fn apply(
        &mut self,
        command: RemoteCommand,
        policy: ChannelPolicy,
    ) -> Result<(), DeviceError> {
        match command {
            RemoteCommand::Power => self.power(),
            RemoteCommand::Mute => self.mute(),
            RemoteCommand::ChannelUp => self.channel_up(),
            RemoteCommand::ChannelDown => self.channel_down(),
            RemoteCommand::VolumeUp => self.volume_up(),
            RemoteCommand::VolumeDown => self.volume_down(),
            RemoteCommand::SetChannel(channel) => match policy {
                ChannelPolicy::Permissive => self.set_channel(channel),
                ChannelPolicy::Strict => self.try_set_channel(channel)?,
            },
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::device::DeviceBounds;

    fn powered() -> Television {
        let mut tv = Television::new(DeviceBounds::COMPACT);
        tv.power();
        tv
    }

    #[test]
    fn test_apply_matches_direct_calls() {
        let mut pressed = powered();
        let mut called = powered();

        let script = [
            RemoteCommand::VolumeUp,
            RemoteCommand::Mute,
            RemoteCommand::ChannelDown,
            RemoteCommand::VolumeDown,
            RemoteCommand::ChannelUp,
            RemoteCommand::SetChannel(2),
            RemoteCommand::Power,
        ];
        for command in script {
            pressed.apply(command, ChannelPolicy::Permissive).unwrap();
        }

        called.volume_up();
        called.mute();
        called.channel_down();
        called.volume_down();
        called.channel_up();
        called.set_channel(2);
        called.power();

        assert_eq!(pressed, called);
    }

    #[test]
    fn test_permissive_policy_accepts_any_channel() {
        let mut tv = powered();
        assert!(tv.apply(RemoteCommand::SetChannel(9), ChannelPolicy::Permissive).is_ok());
        assert_eq!(tv.channel(), 9);
    }

    #[test]
    fn test_strict_policy_rejects_out_of_range_channel() {
        let mut tv = powered();
        let result = tv.apply(RemoteCommand::SetChannel(9), ChannelPolicy::Strict);
        assert!(matches!(
            result,
            Err(DeviceError::ChannelOutOfRange { channel: 9, .. })
        ));
        assert_eq!(tv.channel(), 0);

        tv.apply(RemoteCommand::SetChannel(3), ChannelPolicy::Strict)
            .unwrap();
        assert_eq!(tv.channel(), 3);
    }

    #[test]
    fn test_policy_default_is_permissive() {
        assert_eq!(ChannelPolicy::default(), ChannelPolicy::Permissive);
    }
}

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

//! Television control state.
//!
//! This module contains the [`Television`] state machine driven by the remote
//! control. It owns the power, mute, channel and volume state and exposes it
//! only through command and query methods.
//!
//! # Rules
//!
//! * Every command other than [`Television::power`] is ignored while the
//!   television is switched off.
//! * Channel up/down wrap around at the configured bounds, volume up/down
//!   saturate at them.
//! * Muting never touches the stored volume, it only changes what
//!   [`Television::volume`] reports. Any volume change clears the mute first.
//! * Direct channel selection with [`Television::set_channel`] is not clamped,
//!   [`Television::try_set_channel`] is the checked alternative.

mod bounds;

pub(crate) use bounds::DeviceBounds;

use std::fmt;

use thiserror::Error;
use tracing::debug;

#[derive(Debug, Error, PartialEq, Eq)]
pub(crate) enum DeviceError {
    #[error("invalid {range} range: minimum {min} is greater than maximum {max}")]
    InvalidBounds {
        range: &'static str,
        min: i32,
        max: i32,
    },

    #[error("channel {channel} is outside the range {min}..={max}")]
    ChannelOutOfRange { channel: i32, min: i32, max: i32 },
}

/// The controllable state of a television.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Television {
    bounds: DeviceBounds,
    power: bool,
    muted: bool,
    volume: i32,
    channel: i32,
}

impl Television {
    /// Creates a television that is switched off, unmuted, and sitting at the
    /// lowest channel and volume of `bounds`.
    pub(crate) fn new(bounds: DeviceBounds) -> Self {
        Self {
            bounds,
            power: false,
            muted: false,
            volume: bounds.min_volume,
            channel: bounds.min_channel,
        }
    }

    /// Toggles the power. This is the only command honoured while off.
    pub(crate) fn power(&mut self) {
        self.power = !self.power;
        debug!(power = self.power, "power toggled");
    }

    /// Toggles the mute state.
    pub(crate) fn mute(&mut self) {
        if !self.power {
            return;
        }
        self.muted = !self.muted;
        debug!(muted = self.muted, "mute toggled");
    }

    /// Moves to the next channel, wrapping from the last channel to the first.
    pub(crate) fn channel_up(&mut self) {
        if !self.power {
            return;
        }
        self.channel = if self.channel < self.bounds.max_channel {
            self.channel + 1
        } else {
            self.bounds.min_channel
        };
        debug!(channel = self.channel, "channel up");
    }

    /// Moves to the previous channel, wrapping from the first channel to the
    /// last.
    pub(crate) fn channel_down(&mut self) {
        if !self.power {
            return;
        }
        self.channel = if self.channel > self.bounds.min_channel {
            self.channel - 1
        } else {
            self.bounds.max_channel
        };
        debug!(channel = self.channel, "channel down");
    }

    /// Unmutes, then raises the volume by one step unless already at the
    /// maximum.
    pub(crate) fn volume_up(&mut self) {
        if !self.power {
            return;
        }
        self.unmute();
        if self.volume < self.bounds.max_volume {
            self.volume += 1;
        }
        debug!(volume = self.volume, "volume up");
    }

    /// Unmutes, then lowers the volume by one step unless already at the
    /// minimum.
    pub(crate) fn volume_down(&mut self) {
        if !self.power {
            return;
        }
        self.unmute();
        if self.volume > self.bounds.min_volume {
            self.volume -= 1;
        }
        debug!(volume = self.volume, "volume down");
    }

    /// Tunes directly to `channel`.
    ///
    /// The value is taken as-is, even when it lies outside the configured
    /// channel range. Relative navigation afterwards resumes from wherever
    /// this left the channel.
    pub(crate) fn set_channel(&mut self, channel: i32) {
        if !self.power {
            return;
        }
        self.channel = channel;
        debug!(channel, "channel selected");
    }

    /// Tunes directly to `channel`, refusing values outside the configured
    /// channel range.
    ///
    /// Like every other command this does nothing while the television is
    /// off, in which case no range check is made either.
    ///
    /// # Errors
    ///
    /// Returns [`DeviceError::ChannelOutOfRange`] and leaves the channel
    /// unchanged if `channel` is not within bounds.
    pub(crate) fn try_set_channel(&mut self, channel: i32) -> Result<(), DeviceError> {
        if !self.power {
            return Ok(());
        }
        if !self.bounds.contains_channel(channel) {
            return Err(DeviceError::ChannelOutOfRange {
                channel,
                min: self.bounds.min_channel,
                max: self.bounds.max_channel,
            });
        }
        self.set_channel(channel);
        Ok(())
    }

    pub(crate) fn is_powered(&self) -> bool {
        self.power
    }

    pub(crate) fn is_muted(&self) -> bool {
        self.muted
    }

    /// The audible volume: zero while muted, otherwise the stored level.
    pub(crate) fn volume(&self) -> i32 {
        if self.muted { 0 } else { self.volume }
    }

    pub(crate) fn channel(&self) -> i32 {
        self.channel
    }

    pub(crate) fn bounds(&self) -> DeviceBounds {
        self.bounds
    }

    /// A one-line snapshot of the state, e.g.
    /// `Power - True, Mute - False, Channel - 3, Volume - 1`.
    pub(crate) fn describe(&self) -> String {
        self.to_string()
    }

    // Auto-unmute step shared by the volume commands.
    fn unmute(&mut self) {
        if self.muted {
            self.mute();
        }
    }
}

impl fmt::Display for Television {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Power - {}, Mute - {}, Channel - {}, Volume - {}",
            title_case(self.is_powered()),
            title_case(self.is_muted()),
            self.channel(),
            self.volume()
        )
    }
}

fn title_case(value: bool) -> &'static str {
    if value { "True" } else { "False" }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn compact() -> Television {
        Television::new(DeviceBounds::COMPACT)
    }

    fn powered(bounds: DeviceBounds) -> Television {
        let mut tv = Television::new(bounds);
        tv.power();
        tv
    }

    // Raw field snapshot, bypassing the mute adjustment of `volume()`.
    fn fields(tv: &Television) -> (bool, bool, i32, i32) {
        (tv.power, tv.muted, tv.volume, tv.channel)
    }

    #[test]
    fn test_initial_state() {
        let tv = Television::new(DeviceBounds::FULL_RANGE);
        assert!(!tv.is_powered());
        assert!(!tv.is_muted());
        assert_eq!(tv.volume(), 0);
        assert_eq!(tv.channel(), 0);
        assert_eq!(tv.bounds(), DeviceBounds::FULL_RANGE);
    }

    #[test]
    fn test_initial_state_starts_at_lower_bounds() {
        let bounds = DeviceBounds::new(5, 10, 2, 7).unwrap();
        let tv = powered(bounds);
        assert_eq!(tv.volume(), 5);
        assert_eq!(tv.channel(), 2);
    }

    #[test]
    fn test_power_toggles() {
        let mut tv = compact();
        tv.power();
        assert!(tv.is_powered());
        tv.power();
        assert!(!tv.is_powered());
    }

    #[test]
    fn test_commands_ignored_while_off() {
        let mut tv = powered(DeviceBounds::COMPACT);
        tv.volume_up();
        tv.channel_up();
        tv.mute();
        tv.power();
        let before = fields(&tv);

        tv.mute();
        tv.channel_up();
        tv.channel_down();
        tv.volume_up();
        tv.volume_down();
        tv.set_channel(2);
        assert_eq!(tv.try_set_channel(99), Ok(()));

        assert_eq!(fields(&tv), before);
    }

    #[test]
    fn test_channel_up_wraps_after_full_cycle() {
        let mut tv = powered(DeviceBounds::COMPACT);
        let b = DeviceBounds::COMPACT;
        for _ in 0..(b.max_channel - b.min_channel + 1) {
            tv.channel_up();
        }
        assert_eq!(tv.channel(), b.min_channel);
    }

    #[test]
    fn test_channel_down_wraps_after_full_cycle() {
        let mut tv = powered(DeviceBounds::FULL_RANGE);
        let b = DeviceBounds::FULL_RANGE;
        tv.channel_down();
        assert_eq!(tv.channel(), b.max_channel);
        for _ in 1..(b.max_channel - b.min_channel + 1) {
            tv.channel_down();
        }
        assert_eq!(tv.channel(), b.min_channel);
    }

    #[test]
    fn test_channel_up_from_max_returns_to_min() {
        let mut tv = powered(DeviceBounds::COMPACT);
        tv.set_channel(3);
        tv.channel_up();
        assert_eq!(tv.channel(), 0);
    }

    #[test]
    fn test_volume_clamps_at_bounds() {
        let mut tv = powered(DeviceBounds::COMPACT);
        tv.volume_down();
        assert_eq!(tv.volume(), 0);

        for _ in 0..5 {
            tv.volume_up();
        }
        assert_eq!(tv.volume(), 2);

        tv.volume_up();
        assert_eq!(tv.volume(), 2);
    }

    #[test]
    fn test_mute_preserves_stored_volume() {
        let mut tv = powered(DeviceBounds::COMPACT);
        tv.volume_up();
        tv.mute();
        assert!(tv.is_muted());
        assert_eq!(tv.volume(), 0);
        assert_eq!(tv.volume, 1);

        tv.mute();
        assert!(!tv.is_muted());
        assert_eq!(tv.volume(), 1);
    }

    #[test]
    fn test_volume_up_unmutes() {
        let mut tv = powered(DeviceBounds::COMPACT);
        tv.mute();
        tv.volume_up();
        assert!(!tv.is_muted());
        assert_eq!(tv.volume(), 1);
    }

    #[test]
    fn test_volume_down_unmutes() {
        let mut tv = powered(DeviceBounds::COMPACT);
        tv.volume_up();
        tv.volume_up();
        tv.mute();
        tv.volume_down();
        assert!(!tv.is_muted());
        assert_eq!(tv.volume(), 1);
    }

    #[test]
    fn test_volume_unmutes_even_at_bounds() {
        let mut tv = powered(DeviceBounds::COMPACT);
        tv.mute();
        tv.volume_down();
        assert!(!tv.is_muted());
        assert_eq!(tv.volume(), 0);
    }

    #[test]
    fn test_mute_survives_power_cycle() {
        let mut tv = powered(DeviceBounds::COMPACT);
        tv.volume_up();
        tv.mute();
        tv.power();
        tv.power();
        assert!(tv.is_muted());
        assert_eq!(tv.volume(), 0);
    }

    #[test]
    fn test_set_channel_accepts_out_of_range() {
        let mut tv = powered(DeviceBounds::COMPACT);
        tv.set_channel(9);
        assert_eq!(tv.channel(), 9);

        // Relative navigation resumes from the out of range value.
        tv.channel_down();
        assert_eq!(tv.channel(), 8);
        tv.set_channel(-4);
        tv.channel_up();
        assert_eq!(tv.channel(), -3);
    }

    #[test]
    fn test_try_set_channel_in_range() {
        let mut tv = powered(DeviceBounds::COMPACT);
        assert_eq!(tv.try_set_channel(3), Ok(()));
        assert_eq!(tv.channel(), 3);
    }

    #[test]
    fn test_try_set_channel_rejects_out_of_range() {
        let mut tv = powered(DeviceBounds::COMPACT);
        tv.set_channel(2);
        assert_eq!(
            tv.try_set_channel(9),
            Err(DeviceError::ChannelOutOfRange {
                channel: 9,
                min: 0,
                max: 3
            })
        );
        assert!(tv.try_set_channel(-1).is_err());
        assert_eq!(tv.channel(), 2);
    }

    #[test]
    fn test_describe_scenario() {
        let mut tv = compact();
        assert_eq!(
            tv.describe(),
            "Power - False, Mute - False, Channel - 0, Volume - 0"
        );

        tv.power();
        assert_eq!(
            tv.describe(),
            "Power - True, Mute - False, Channel - 0, Volume - 0"
        );

        tv.volume_up();
        assert_eq!(tv.volume(), 1);
        tv.mute();
        assert_eq!(tv.volume(), 0);
        assert!(tv.is_muted());
        assert_eq!(
            tv.describe(),
            "Power - True, Mute - True, Channel - 0, Volume - 0"
        );
        tv.mute();
        assert_eq!(tv.volume(), 1);

        tv.channel_down();
        assert_eq!(tv.channel(), 3);

        tv.set_channel(9);
        assert_eq!(tv.channel(), 9);
        assert_eq!(
            tv.to_string(),
            "Power - True, Mute - False, Channel - 9, Volume - 1"
        );
    }

    #[test]
    fn test_bounds_hold_under_random_walk() {
        let mut tv = powered(DeviceBounds::COMPACT);
        let b = DeviceBounds::COMPACT;
        // Deterministic mix of every relative command.
        for i in 0..200u32 {
            match i.wrapping_mul(2_654_435_761) % 6 {
                0 => tv.channel_up(),
                1 => tv.channel_down(),
                2 => tv.volume_up(),
                3 => tv.volume_down(),
                4 => tv.mute(),
                _ => {
                    tv.power();
                    tv.power();
                }
            }
            assert!((b.min_volume..=b.max_volume).contains(&tv.volume));
            assert!(b.contains_channel(tv.channel()));
        }
    }
}

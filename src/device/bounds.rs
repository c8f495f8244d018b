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

use serde::{Deserialize, Serialize};

use crate::device::DeviceError;

/// Channel and volume limits, fixed when a [`super::Television`] is built.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct DeviceBounds {
    pub(crate) min_volume: i32,
    pub(crate) max_volume: i32,
    pub(crate) min_channel: i32,
    pub(crate) max_channel: i32,
}

impl Default for DeviceBounds {
    fn default() -> Self {
        Self::FULL_RANGE
    }
}

impl DeviceBounds {
    /// Volume as a percentage and the ten keypad channels.
    pub(crate) const FULL_RANGE: Self = Self {
        min_volume: 0,
        max_volume: 100,
        min_channel: 0,
        max_channel: 9,
    };

    /// A deliberately tiny range, convenient for exercising the wrap and clamp
    /// rules.
    pub(crate) const COMPACT: Self = Self {
        min_volume: 0,
        max_volume: 2,
        min_channel: 0,
        max_channel: 3,
    };

    /// Creates a checked set of bounds.
    ///
    /// # Errors
    ///
    /// Returns [`DeviceError::InvalidBounds`] if either minimum is greater
    /// than its maximum.
    pub(crate) fn new(
        min_volume: i32,
        max_volume: i32,
        min_channel: i32,
        max_channel: i32,
    ) -> Result<Self, DeviceError> {
        Self {
            min_volume,
            max_volume,
            min_channel,
            max_channel,
        }
        .validated()
    }

    fn validated(self) -> Result<Self, DeviceError> {
        if self.min_volume > self.max_volume {
            return Err(DeviceError::InvalidBounds {
                range: "volume",
                min: self.min_volume,
                max: self.max_volume,
            });
        }
        if self.min_channel > self.max_channel {
            return Err(DeviceError::InvalidBounds {
                range: "channel",
                min: self.min_channel,
                max: self.max_channel,
            });
        }
        Ok(self)
    }

    pub(crate) fn contains_channel(&self, channel: i32) -> bool {
        (self.min_channel..=self.max_channel).contains(&channel)
    }

    /// Position of `volume` within the volume range, from `0.0` to `1.0`.
    pub(crate) fn volume_ratio(&self, volume: i32) -> f64 {
        // Computed in f64, the span of two extreme i32 bounds overflows i32.
        let span = f64::from(self.max_volume) - f64::from(self.min_volume);
        if span <= 0.0 {
            return 0.0;
        }
        ((f64::from(volume) - f64::from(self.min_volume)) / span).clamp(0.0, 1.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_presets_are_valid() {
        assert_eq!(DeviceBounds::FULL_RANGE.validated(), Ok(DeviceBounds::FULL_RANGE));
        assert_eq!(DeviceBounds::COMPACT.validated(), Ok(DeviceBounds::COMPACT));
        assert_eq!(DeviceBounds::default(), DeviceBounds::FULL_RANGE);
    }

    #[test]
    fn test_single_value_ranges_are_valid() {
        assert!(DeviceBounds::new(4, 4, 1, 1).is_ok());
    }

    #[test]
    fn test_inverted_volume_range_rejected() {
        assert_eq!(
            DeviceBounds::new(10, 0, 0, 9),
            Err(DeviceError::InvalidBounds {
                range: "volume",
                min: 10,
                max: 0
            })
        );
    }

    #[test]
    fn test_inverted_channel_range_rejected() {
        let err = DeviceBounds::new(0, 10, 9, 0).unwrap_err();
        assert_eq!(
            err.to_string(),
            "invalid channel range: minimum 9 is greater than maximum 0"
        );
    }

    #[test]
    fn test_contains_channel() {
        let bounds = DeviceBounds::COMPACT;
        assert!(bounds.contains_channel(0));
        assert!(bounds.contains_channel(3));
        assert!(!bounds.contains_channel(4));
        assert!(!bounds.contains_channel(-1));
    }

    #[test]
    fn test_volume_ratio() {
        let bounds = DeviceBounds::FULL_RANGE;
        assert_eq!(bounds.volume_ratio(0), 0.0);
        assert_eq!(bounds.volume_ratio(50), 0.5);
        assert_eq!(bounds.volume_ratio(100), 1.0);

        let flat = DeviceBounds::new(3, 3, 0, 0).unwrap();
        assert_eq!(flat.volume_ratio(3), 0.0);
    }

    #[test]
    fn test_volume_ratio_with_extreme_bounds() {
        let bounds = DeviceBounds::new(i32::MIN, i32::MAX, 0, 9).unwrap();
        assert_eq!(bounds.volume_ratio(i32::MIN), 0.0);
        assert_eq!(bounds.volume_ratio(i32::MAX), 1.0);
        assert!((bounds.volume_ratio(0) - 0.5).abs() < 1e-9);

        // A muted television reports 0, which may lie below the range.
        let high = DeviceBounds::new(i32::MAX - 10, i32::MAX, 0, 9).unwrap();
        assert_eq!(high.volume_ratio(0), 0.0);
    }
}

//! User selections: display mode, temperature unit and sensor channel.
//!
//! Each selector owns the pattern of its indicator lines, so driving the
//! LEDs is a pure function of the enum value and exactly one line per group
//! is ever asserted.
//!
//! # Display Modes
//!
//! - [`DisplayMode::Current`]: latest reading of the active channel
//! - [`DisplayMode::Min`]: lowest reading seen on the active channel
//! - [`DisplayMode::Max`]: highest reading seen on the active channel

use crate::config::{MODE_INDICATORS, SENSOR_CHANNELS};
use crate::units::TemperatureUnit;

/// What the display shows for the active channel.
#[derive(Clone, Copy, PartialEq, Eq, Default, Debug)]
#[cfg_attr(target_arch = "arm", derive(defmt::Format))]
#[repr(u8)]
pub enum DisplayMode {
    /// Live reading.
    #[default]
    Current = 0,
    /// Lowest raw reading since power-up (hottest on the NTC divider).
    Min = 1,
    /// Highest raw reading since power-up (coldest on the NTC divider).
    Max = 2,
}

impl DisplayMode {
    /// Cycle to the next mode: Current -> Min -> Max -> Current
    #[inline]
    pub const fn next(self) -> Self {
        match self {
            Self::Current => Self::Min,
            Self::Min => Self::Max,
            Self::Max => Self::Current,
        }
    }

    /// Indicator lines (Current, Min, Max); `true` = lit.
    #[inline]
    pub const fn indicators(self) -> [bool; MODE_INDICATORS] {
        [
            matches!(self, Self::Current),
            matches!(self, Self::Min),
            matches!(self, Self::Max),
        ]
    }

    pub(crate) const fn from_bits(bits: u8) -> Self {
        match bits {
            1 => Self::Min,
            2 => Self::Max,
            _ => Self::Current,
        }
    }
}

/// Which thermistor input is active.
#[derive(Clone, Copy, PartialEq, Eq, Default, Debug)]
#[cfg_attr(target_arch = "arm", derive(defmt::Format))]
#[repr(u8)]
pub enum SensorChannel {
    #[default]
    A = 0,
    B = 1,
}

impl SensorChannel {
    /// Switch to the other channel.
    #[inline]
    pub const fn toggle(self) -> Self {
        match self {
            Self::A => Self::B,
            Self::B => Self::A,
        }
    }

    /// Index into per-channel arrays.
    #[inline]
    pub const fn index(self) -> usize { self as usize }

    /// Indicator lines (A, B); `true` = lit.
    #[inline]
    pub const fn indicators(self) -> [bool; SENSOR_CHANNELS] { [matches!(self, Self::A), matches!(self, Self::B)] }

    pub(crate) const fn from_bits(bits: u8) -> Self {
        match bits {
            1 => Self::B,
            _ => Self::A,
        }
    }
}

/// Snapshot of all three selectors.
#[derive(Clone, Copy, PartialEq, Eq, Default, Debug)]
#[cfg_attr(target_arch = "arm", derive(defmt::Format))]
pub struct Selection {
    pub mode: DisplayMode,
    pub unit: TemperatureUnit,
    pub channel: SensorChannel,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mode_default() {
        assert_eq!(DisplayMode::default(), DisplayMode::Current);
    }

    #[test]
    fn test_mode_next() {
        assert_eq!(DisplayMode::Current.next(), DisplayMode::Min);
        assert_eq!(DisplayMode::Min.next(), DisplayMode::Max);
        assert_eq!(DisplayMode::Max.next(), DisplayMode::Current);
    }

    #[test]
    fn test_mode_cycle() {
        let mode = DisplayMode::Current;
        let mode = mode.next(); // -> Min
        let mode = mode.next(); // -> Max
        let mode = mode.next(); // -> Current
        assert_eq!(mode, DisplayMode::Current);
    }

    #[test]
    fn test_mode_indicators_exclusive() {
        for mode in [DisplayMode::Current, DisplayMode::Min, DisplayMode::Max] {
            let lit = mode.indicators().iter().filter(|&&on| on).count();
            assert_eq!(lit, 1, "{mode:?} lights {lit} indicators");
        }
        assert_eq!(DisplayMode::Min.indicators(), [false, true, false]);
    }

    #[test]
    fn test_channel_toggle_and_index() {
        assert_eq!(SensorChannel::A.toggle(), SensorChannel::B);
        assert_eq!(SensorChannel::B.toggle(), SensorChannel::A);
        assert_eq!(SensorChannel::A.index(), 0);
        assert_eq!(SensorChannel::B.index(), 1);
    }

    #[test]
    fn test_channel_indicators_exclusive() {
        assert_eq!(SensorChannel::A.indicators(), [true, false]);
        assert_eq!(SensorChannel::B.indicators(), [false, true]);
    }

    #[test]
    fn test_bits_round_trip() {
        for mode in [DisplayMode::Current, DisplayMode::Min, DisplayMode::Max] {
            assert_eq!(DisplayMode::from_bits(mode as u8), mode);
        }
        for channel in [SensorChannel::A, SensorChannel::B] {
            assert_eq!(SensorChannel::from_bits(channel as u8), channel);
        }
    }

    #[test]
    fn test_selection_default() {
        let selection = Selection::default();
        assert_eq!(selection.mode, DisplayMode::Current);
        assert_eq!(selection.unit, TemperatureUnit::Celsius);
        assert_eq!(selection.channel, SensorChannel::A);
    }
}

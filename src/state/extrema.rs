//! Per-channel running minimum and maximum of raw samples.
//!
//! Extrema are kept as raw ADC samples, not temperatures, and converted only
//! when shown. They live for one power cycle; there is no reset path.

use super::SensorChannel;
use crate::config::{ADC_FULL_SCALE, SENSOR_CHANNELS};

/// Lowest and highest raw sample seen on one channel.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Extrema {
    pub min: i16,
    pub max: i16,
}

impl Extrema {
    /// Inverted sentinels so the first real sample replaces both bounds.
    pub const fn new() -> Self {
        Self {
            min: ADC_FULL_SCALE,
            max: 0,
        }
    }

    /// Widen the bounds to include `sample`.
    #[inline]
    pub fn observe(
        &mut self,
        sample: i16,
    ) {
        if sample > self.max {
            self.max = sample;
        }
        if sample < self.min {
            self.min = sample;
        }
    }
}

impl Default for Extrema {
    fn default() -> Self { Self::new() }
}

/// One [`Extrema`] per sensor channel.
pub struct MinMaxTracker {
    channels: [Extrema; SENSOR_CHANNELS],
}

impl MinMaxTracker {
    pub const fn new() -> Self {
        Self {
            channels: [Extrema::new(); SENSOR_CHANNELS],
        }
    }

    /// Fold a sample into the extrema of `channel`.
    #[inline]
    pub fn update(
        &mut self,
        channel: SensorChannel,
        sample: i16,
    ) {
        self.channels[channel.index()].observe(sample);
    }

    /// Current extrema of `channel`.
    #[inline]
    pub const fn get(
        &self,
        channel: SensorChannel,
    ) -> Extrema {
        self.channels[channel.index()]
    }
}

impl Default for MinMaxTracker {
    fn default() -> Self { Self::new() }
}

//! Lock-free cells shared between the sampling, refresh and button tasks and
//! the control loop.
//!
//! Every cell has exactly one writer. Writers store with `Release` and
//! readers load with `Acquire`, so a reader never sees a value older than the
//! last store it synchronized with and never blocks.
//!
//! | Cell | Writer | Readers |
//! |------|--------|---------|
//! | [`RawSampleCell`] | sampling task | control loop |
//! | [`DigitCell`] | control loop | refresh task |
//! | [`SelectionCell`] | button task | control loop |
//!
//! The four digit patterns are packed into a single word, so the refresh
//! task can never observe a half-published buffer.

use core::sync::atomic::{AtomicI16, AtomicU8, AtomicU32, Ordering};

use crate::segments::DigitBuffer;
use crate::state::{DisplayMode, Selection, SensorChannel};
use crate::units::TemperatureUnit;

/// Marker for "no conversion stored yet"; outside the 10-bit sample range.
const NO_SAMPLE: i16 = i16::MIN;

/// Latest 10-bit ADC sample.
///
/// Empty until the sampling task stores its first conversion.
pub struct RawSampleCell(AtomicI16);

impl RawSampleCell {
    pub const fn new() -> Self { Self(AtomicI16::new(NO_SAMPLE)) }

    #[inline]
    pub fn store(
        &self,
        sample: i16,
    ) {
        self.0.store(sample, Ordering::Release);
    }

    #[inline]
    pub fn load(&self) -> Option<i16> {
        match self.0.load(Ordering::Acquire) {
            NO_SAMPLE => None,
            sample => Some(sample),
        }
    }
}

impl Default for RawSampleCell {
    fn default() -> Self { Self::new() }
}

/// Published display buffer, packed with [`DigitBuffer::pack`].
pub struct DigitCell(AtomicU32);

impl DigitCell {
    /// Starts blank until the control loop publishes.
    pub const fn new() -> Self { Self(AtomicU32::new(DigitBuffer::BLANK.pack())) }

    /// Publish all four digits at once.
    #[inline]
    pub fn publish(
        &self,
        digits: DigitBuffer,
    ) {
        self.0.store(digits.pack(), Ordering::Release);
    }

    /// Full buffer as last published.
    #[inline]
    pub fn snapshot(&self) -> DigitBuffer { DigitBuffer::unpack(self.0.load(Ordering::Acquire)) }

    /// Segment pattern of a single digit.
    #[inline]
    pub fn digit(
        &self,
        index: usize,
    ) -> u8 {
        self.snapshot().get(index)
    }
}

impl Default for DigitCell {
    fn default() -> Self { Self::new() }
}

/// Mode, unit and channel selectors.
///
/// Each selector is its own byte; readers may briefly see a new mode with an
/// old unit, which only affects a single control loop iteration.
pub struct SelectionCell {
    mode: AtomicU8,
    unit: AtomicU8,
    channel: AtomicU8,
}

impl SelectionCell {
    pub const fn new() -> Self {
        Self {
            mode: AtomicU8::new(DisplayMode::Current as u8),
            unit: AtomicU8::new(TemperatureUnit::Celsius as u8),
            channel: AtomicU8::new(SensorChannel::A as u8),
        }
    }

    pub fn store(
        &self,
        selection: Selection,
    ) {
        self.mode.store(selection.mode as u8, Ordering::Release);
        self.unit.store(selection.unit as u8, Ordering::Release);
        self.channel.store(selection.channel as u8, Ordering::Release);
    }

    pub fn load(&self) -> Selection {
        Selection {
            mode: DisplayMode::from_bits(self.mode.load(Ordering::Acquire)),
            unit: TemperatureUnit::from_bits(self.unit.load(Ordering::Acquire)),
            channel: SensorChannel::from_bits(self.channel.load(Ordering::Acquire)),
        }
    }
}

impl Default for SelectionCell {
    fn default() -> Self { Self::new() }
}

/// All state crossing task boundaries.
///
/// Created once at startup and handed to every task by `&'static` reference.
pub struct SharedState {
    pub raw_sample: RawSampleCell,
    pub digits: DigitCell,
    pub selection: SelectionCell,
}

impl SharedState {
    pub const fn new() -> Self {
        Self {
            raw_sample: RawSampleCell::new(),
            digits: DigitCell::new(),
            selection: SelectionCell::new(),
        }
    }
}

impl Default for SharedState {
    fn default() -> Self { Self::new() }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::segments::{DIGIT_TABLE, GLYPH_C};

    #[test]
    fn test_initial_state() {
        let shared = SharedState::new();
        assert_eq!(shared.raw_sample.load(), None);
        assert_eq!(shared.digits.snapshot(), DigitBuffer::BLANK);
        assert_eq!(shared.selection.load(), Selection::default());
    }

    #[test]
    fn test_sample_cell_holds_stored_zero() {
        let cell = RawSampleCell::new();
        cell.store(0);
        assert_eq!(cell.load(), Some(0));
    }

    #[test]
    fn test_digit_cell_publishes_whole_buffer() {
        let cell = DigitCell::new();
        let buffer = DigitBuffer([0, DIGIT_TABLE[2], DIGIT_TABLE[3], GLYPH_C]);
        cell.publish(buffer);
        assert_eq!(cell.snapshot(), buffer);
        assert_eq!(cell.digit(1), DIGIT_TABLE[2]);
        assert_eq!(cell.digit(3), GLYPH_C);
    }

    #[test]
    fn test_selection_round_trip() {
        let cell = SelectionCell::new();
        let selection = Selection {
            mode: DisplayMode::Max,
            unit: TemperatureUnit::Fahrenheit,
            channel: SensorChannel::B,
        };
        cell.store(selection);
        assert_eq!(cell.load(), selection);
    }

    #[test]
    fn test_cross_thread_publication() {
        use std::sync::Arc;
        use std::thread;

        let shared = Arc::new(SharedState::new());
        let writer = {
            let shared = Arc::clone(&shared);
            thread::spawn(move || {
                for raw in 0..=1023 {
                    shared.raw_sample.store(raw);
                }
            })
        };
        // Reader only ever sees values the writer stored
        for _ in 0..1000 {
            if let Some(raw) = shared.raw_sample.load() {
                assert!((0..=1023).contains(&raw));
            }
        }
        writer.join().unwrap();
        assert_eq!(shared.raw_sample.load(), Some(1023));
    }
}

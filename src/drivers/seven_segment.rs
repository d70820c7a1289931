//! Pin driver for a 4-digit multiplexed seven-segment display.
//!
//! Pin mapping:
//! - Segments a..g, dp: GPIO0..GPIO7 (high = lit)
//! - Digit enables 0..3: GPIO8..GPIO11 (low = enabled, leftmost digit first)

use embassy_rp::gpio::{Level, Output};

use thermo_pico2::config::DIGIT_COUNT;
use thermo_pico2::multiplex::DigitDrive;

/// Segment lines per digit (a..g plus decimal point).
pub const SEGMENT_LINES: usize = 8;

/// Owns the segment and digit-enable outputs.
pub struct SevenSegment<'d> {
    segments: [Output<'d>; SEGMENT_LINES],
    digits: [Output<'d>; DIGIT_COUNT],
}

impl<'d> SevenSegment<'d> {
    /// Take ownership of the pins and start with every digit disabled.
    pub fn new(
        segments: [Output<'d>; SEGMENT_LINES],
        digits: [Output<'d>; DIGIT_COUNT],
    ) -> Self {
        let mut display = Self { segments, digits };
        display.disable_all();
        display
    }

    /// Turn every digit off.
    #[inline]
    pub fn disable_all(&mut self) {
        for enable in &mut self.digits {
            enable.set_high();
        }
    }

    /// Show one digit for the current refresh tick.
    pub fn drive(
        &mut self,
        drive: DigitDrive,
    ) {
        self.disable_all();

        for (enable, on) in self.digits.iter_mut().zip(drive.enable_lines()) {
            if on {
                enable.set_low();
            }
        }

        for (bit, segment) in self.segments.iter_mut().enumerate() {
            segment.set_level(Level::from(drive.pattern & (1 << bit) != 0));
        }
    }
}

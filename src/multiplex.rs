//! Time-division multiplexing of the four display digits.
//!
//! Only one digit is lit at a time. On every refresh tick the driver turns
//! all digit enables off, enables the digit under the cursor, outputs its
//! segment pattern and advances the cursor. At 500 Hz each digit is lit at
//! 125 Hz, well above flicker fusion.

use crate::config::DIGIT_COUNT;
use crate::shared::DigitCell;

/// What the display driver must output for one tick.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct DigitDrive {
    /// Digit to enable (0 = leftmost).
    pub digit: usize,
    /// Segment pattern for that digit.
    pub pattern: u8,
}

impl DigitDrive {
    /// Digit enable lines; exactly one is `true`.
    #[inline]
    pub fn enable_lines(&self) -> [bool; DIGIT_COUNT] {
        let mut lines = [false; DIGIT_COUNT];
        lines[self.digit] = true;
        lines
    }
}

/// Refresh cursor.
pub struct Multiplexer {
    cursor: usize,
}

impl Multiplexer {
    pub const fn new() -> Self { Self { cursor: 0 } }

    /// Read the digit under the cursor and advance modulo [`DIGIT_COUNT`].
    pub fn tick(
        &mut self,
        digits: &DigitCell,
    ) -> DigitDrive {
        let digit = self.cursor;
        self.cursor = (self.cursor + 1) % DIGIT_COUNT;
        DigitDrive {
            digit,
            pattern: digits.digit(digit),
        }
    }

    /// Digit the next tick will drive.
    pub const fn cursor(&self) -> usize { self.cursor }
}

impl Default for Multiplexer {
    fn default() -> Self { Self::new() }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::segments::DigitBuffer;

    #[test]
    fn test_cycles_through_all_digits() {
        let cell = DigitCell::new();
        cell.publish(DigitBuffer([1, 2, 3, 4]));
        let mut mux = Multiplexer::new();

        let drives: [DigitDrive; 8] = core::array::from_fn(|_| mux.tick(&cell));
        for (i, drive) in drives.iter().enumerate() {
            assert_eq!(drive.digit, i % DIGIT_COUNT);
            assert_eq!(drive.pattern, (i % DIGIT_COUNT) as u8 + 1);
        }
        assert_eq!(mux.cursor(), 0);
    }

    #[test]
    fn test_exactly_one_enable_line() {
        for digit in 0..DIGIT_COUNT {
            let lines = DigitDrive { digit, pattern: 0 }.enable_lines();
            assert_eq!(lines.iter().filter(|&&on| on).count(), 1);
            assert!(lines[digit]);
        }
    }

    #[test]
    fn test_picks_up_new_buffer_mid_cycle() {
        let cell = DigitCell::new();
        let mut mux = Multiplexer::new();
        cell.publish(DigitBuffer([1, 1, 1, 1]));
        assert_eq!(mux.tick(&cell).pattern, 1);
        cell.publish(DigitBuffer([2, 2, 2, 2]));
        assert_eq!(mux.tick(&cell), DigitDrive { digit: 1, pattern: 2 });
    }
}

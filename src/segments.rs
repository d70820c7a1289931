//! Seven-segment glyphs and the numeric display encoder.
//!
//! # Segment Bit Layout
//!
//! ```text
//!  bit:  7   6   5   4   3   2   1   0
//!  seg:  dp  g   f   e   d   c   b   a
//!
//!      aaa
//!     f   b
//!      ggg
//!     e   c
//!      ddd  dp
//! ```
//!
//! # Digit Layout
//!
//! Index 0 is the leftmost digit. The rightmost digit (index 3) always holds
//! the unit glyph, which leaves three positions for the number itself:
//!
//! | value | digits          |
//! |-------|-----------------|
//! | 0     | `_ _ 0 C`       |
//! | 23    | `_ 2 3 C`       |
//! | 105   | `1 0 5 C`       |
//! | -5    | `_ - 5 C`       |
//! | -15   | `- 1 5 C`       |

use heapless::String;

use crate::config::{DIGIT_COUNT, DISPLAY_MAX_EXCLUSIVE, DISPLAY_MIN_EXCLUSIVE};
use crate::units::TemperatureUnit;

// =============================================================================
// Glyphs
// =============================================================================

/// All segments off.
pub const BLANK: u8 = 0b0000_0000;

/// Segment g only.
pub const MINUS: u8 = 0b0100_0000;

/// Letter "C" (a, d, e, f).
pub const GLYPH_C: u8 = 0b0011_1001;

/// Letter "F" (a, e, f, g).
pub const GLYPH_F: u8 = 0b0111_0001;

/// Standard encodings for the decimal digits 0-9.
pub const DIGIT_TABLE: [u8; 10] = [
    0b0011_1111, // 0
    0b0000_0110, // 1
    0b0101_1011, // 2
    0b0100_1111, // 3
    0b0110_0110, // 4
    0b0110_1101, // 5
    0b0111_1101, // 6
    0b0000_0111, // 7
    0b0111_1111, // 8
    0b0110_1111, // 9
];

/// Segment pattern for a single decimal digit.
#[inline]
const fn digit(d: i16) -> u8 { DIGIT_TABLE[d as usize] }

// =============================================================================
// Digit Buffer
// =============================================================================

/// The four segment patterns shown on the display, leftmost first.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
#[cfg_attr(target_arch = "arm", derive(defmt::Format))]
pub struct DigitBuffer(pub [u8; DIGIT_COUNT]);

impl DigitBuffer {
    /// All digits off.
    pub const BLANK: Self = Self([BLANK; DIGIT_COUNT]);

    /// Segment pattern at `index` (0 = leftmost).
    #[inline]
    pub const fn get(
        &self,
        index: usize,
    ) -> u8 {
        self.0[index]
    }

    /// Pack into one word, digit 0 in the low byte.
    #[inline]
    pub const fn pack(self) -> u32 { u32::from_le_bytes(self.0) }

    /// Inverse of [`pack`](Self::pack).
    #[inline]
    pub const fn unpack(word: u32) -> Self { Self(word.to_le_bytes()) }

    /// Decode the glyphs back into text, e.g. `" 23C"`.
    ///
    /// Patterns that are not known glyphs decode as `'?'`.
    pub fn to_text(&self) -> String<DIGIT_COUNT> {
        let mut text = String::new();
        for &pattern in &self.0 {
            // Capacity equals DIGIT_COUNT, so every push fits
            text.push(glyph_char(pattern)).ok();
        }
        text
    }
}

impl Default for DigitBuffer {
    fn default() -> Self { Self::BLANK }
}

/// Character represented by a segment pattern.
fn glyph_char(pattern: u8) -> char {
    match pattern {
        BLANK => ' ',
        MINUS => '-',
        GLYPH_C => 'C',
        GLYPH_F => 'F',
        _ => DIGIT_TABLE
            .iter()
            .position(|&p| p == pattern)
            .and_then(|d| char::from_digit(d as u32, 10))
            .unwrap_or('?'),
    }
}

// =============================================================================
// Encoder
// =============================================================================

/// Reasons a value cannot be shown.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
#[cfg_attr(target_arch = "arm", derive(defmt::Format))]
pub enum EncodeError {
    /// Value needs more than three character positions.
    OutOfRange(i16),
}

/// Encode a whole-degree value and its unit into display patterns.
///
/// Accepts values in the open range (-100, 1000). Leading zeros are blanked,
/// but a digit is only blanked when every digit to its left is blank too, so
/// 105 keeps its zero. Values outside the range are rejected; the caller keeps
/// showing whatever it published last.
pub fn encode(
    value: i16,
    unit: TemperatureUnit,
) -> Result<DigitBuffer, EncodeError> {
    if value <= DISPLAY_MIN_EXCLUSIVE || value >= DISPLAY_MAX_EXCLUSIVE {
        return Err(EncodeError::OutOfRange(value));
    }

    let magnitude = value.abs();
    let hundreds = magnitude / 100;
    let tens = (magnitude / 10) % 10;
    let ones = magnitude % 10;

    let (first, second) = if value <= -10 {
        (MINUS, digit(tens))
    } else if value < 0 {
        (BLANK, MINUS)
    } else if hundreds > 0 {
        (digit(hundreds), digit(tens))
    } else if tens > 0 {
        (BLANK, digit(tens))
    } else {
        (BLANK, BLANK)
    };

    Ok(DigitBuffer([first, second, digit(ones), unit.glyph()]))
}

#[cfg(test)]
mod tests {
    use super::*;

    const C: TemperatureUnit = TemperatureUnit::Celsius;
    const F: TemperatureUnit = TemperatureUnit::Fahrenheit;

    #[test]
    fn test_zero() {
        assert_eq!(encode(0, C), Ok(DigitBuffer([BLANK, BLANK, DIGIT_TABLE[0], GLYPH_C])));
    }

    #[test]
    fn test_single_negative_digit() {
        assert_eq!(encode(-5, C), Ok(DigitBuffer([BLANK, MINUS, DIGIT_TABLE[5], GLYPH_C])));
    }

    #[test]
    fn test_two_negative_digits() {
        assert_eq!(
            encode(-15, F),
            Ok(DigitBuffer([MINUS, DIGIT_TABLE[1], DIGIT_TABLE[5], GLYPH_F]))
        );
    }

    #[test]
    fn test_leading_zero_blanking() {
        assert_eq!(encode(7, C).unwrap().to_text().as_str(), "  7C");
        assert_eq!(encode(23, C).unwrap().to_text().as_str(), " 23C");
        assert_eq!(encode(100, C).unwrap().to_text().as_str(), "100C");
    }

    #[test]
    fn test_inner_zero_kept_when_hundreds_shown() {
        assert_eq!(
            encode(105, F),
            Ok(DigitBuffer([DIGIT_TABLE[1], DIGIT_TABLE[0], DIGIT_TABLE[5], GLYPH_F]))
        );
    }

    #[test]
    fn test_range_edges() {
        assert_eq!(encode(999, C).unwrap().to_text().as_str(), "999C");
        assert_eq!(encode(-99, C).unwrap().to_text().as_str(), "-99C");
        assert_eq!(encode(-10, C).unwrap().to_text().as_str(), "-10C");
        assert_eq!(encode(-9, C).unwrap().to_text().as_str(), " -9C");
    }

    #[test]
    fn test_out_of_range_rejected() {
        assert_eq!(encode(1000, C), Err(EncodeError::OutOfRange(1000)));
        assert_eq!(encode(-100, C), Err(EncodeError::OutOfRange(-100)));
        assert_eq!(encode(i16::MIN, F), Err(EncodeError::OutOfRange(i16::MIN)));
        assert_eq!(encode(i16::MAX, F), Err(EncodeError::OutOfRange(i16::MAX)));
    }

    #[test]
    fn test_unit_always_rightmost() {
        for value in [-99, -5, 0, 42, 999] {
            assert_eq!(encode(value, C).unwrap().get(3), GLYPH_C);
            assert_eq!(encode(value, F).unwrap().get(3), GLYPH_F);
        }
    }

    #[test]
    fn test_special_glyphs_are_not_digits() {
        for glyph in [BLANK, MINUS, GLYPH_C, GLYPH_F] {
            assert!(!DIGIT_TABLE.contains(&glyph));
        }
    }

    #[test]
    fn test_pack_places_leftmost_digit_in_low_byte() {
        let buffer = DigitBuffer([0x01, 0x02, 0x03, 0x04]);
        assert_eq!(buffer.pack(), 0x0403_0201);
        assert_eq!(DigitBuffer::unpack(0x0403_0201), buffer);
    }

    #[test]
    fn test_to_text_unknown_pattern() {
        assert_eq!(DigitBuffer([0xFF, BLANK, BLANK, BLANK]).to_text().as_str(), "?   ");
    }

    #[test]
    fn test_default_is_blank() {
        assert_eq!(DigitBuffer::default().pack(), 0);
    }
}

//! Temperature unit selection and Celsius to Fahrenheit conversion.

use crate::segments::{GLYPH_C, GLYPH_F};

/// Unit the display shows temperatures in.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
#[cfg_attr(target_arch = "arm", derive(defmt::Format))]
#[repr(u8)]
pub enum TemperatureUnit {
    #[default]
    Celsius = 0,
    Fahrenheit = 1,
}

impl TemperatureUnit {
    /// Switch to the other unit.
    pub const fn toggle(self) -> Self {
        match self {
            Self::Celsius => Self::Fahrenheit,
            Self::Fahrenheit => Self::Celsius,
        }
    }

    /// Seven-segment glyph shown in the rightmost digit.
    pub const fn glyph(self) -> u8 {
        match self {
            Self::Celsius => GLYPH_C,
            Self::Fahrenheit => GLYPH_F,
        }
    }

    /// Express a Celsius reading in this unit.
    #[inline]
    pub fn convert(
        self,
        celsius: i16,
    ) -> i16 {
        match self {
            Self::Celsius => celsius,
            Self::Fahrenheit => celsius_to_fahrenheit(celsius),
        }
    }

    pub(crate) const fn from_bits(bits: u8) -> Self {
        match bits {
            1 => Self::Fahrenheit,
            _ => Self::Celsius,
        }
    }
}

/// Convert whole degrees Celsius to whole degrees Fahrenheit.
///
/// The product `C * 9 / 5` is truncated toward zero before the +32 offset
/// is added, so negative inputs round toward +32 rather than away from it
/// (-1 C gives 31 F, not 30 F).
pub fn celsius_to_fahrenheit(celsius: i16) -> i16 {
    let scaled = f32::from(celsius) * 9.0 / 5.0;
    (scaled as i16).saturating_add(32)
}

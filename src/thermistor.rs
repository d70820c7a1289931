//! NTC thermistor conversion using the Beta model.
//!
//! The thermistor is the ground-side leg of a voltage divider whose fixed
//! resistor equals the thermistor's nominal resistance `R0`, so a mid-scale
//! reading means the thermistor is at the reference temperature.
//!
//! ```text
//! R / R0 = 1 / (1024 / raw - 1)
//! 1 / T  = ln(R / R0) / B + 1 / T0
//! ```
//!
//! All arithmetic is single precision and the result is truncated toward
//! zero, so the same sample always yields the same integer on every target.

use crate::config::{
    ADC_FULL_SCALE,
    ADC_MIN_VALID,
    KELVIN_OFFSET,
    THERMISTOR_BETA,
    THERMISTOR_R0_OHMS,
    THERMISTOR_T0_CELSIUS,
};

/// Number of ADC codes (full scale + 1).
const ADC_CODES: f32 = (ADC_FULL_SCALE as f32) + 1.0;

/// Clamp a raw sample into the range the Beta model is defined on.
///
/// A reading of 0 has no finite resistance ratio, so it is treated as 1.
#[inline]
pub const fn clamp_sample(raw: i16) -> i16 {
    if raw < ADC_MIN_VALID {
        ADC_MIN_VALID
    } else if raw > ADC_FULL_SCALE {
        ADC_FULL_SCALE
    } else {
        raw
    }
}

/// Convert a 10-bit ADC sample to whole degrees Celsius.
///
/// Out-of-range samples are clamped first (see [`clamp_sample`]), so the
/// result is always finite.
pub fn adc_to_celsius(raw: i16) -> i16 {
    let raw = f32::from(clamp_sample(raw));

    let divider_ohms = THERMISTOR_R0_OHMS / (ADC_CODES / raw - 1.0);
    let ratio = divider_ohms / THERMISTOR_R0_OHMS;

    let mut inv_kelvin = libm::logf(ratio) / THERMISTOR_BETA;
    inv_kelvin += 1.0 / (THERMISTOR_T0_CELSIUS + KELVIN_OFFSET);

    let celsius = 1.0 / inv_kelvin - KELVIN_OFFSET;

    // Float-to-int casts truncate toward zero and saturate
    celsius as i16
}

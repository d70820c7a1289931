//! Analog sample feed.
//!
//! The ADC runs back to back; each completed conversion is scaled to a
//! 10-bit [`RawSampleCell`](crate::shared::RawSampleCell) value and stored.
//! No averaging or filtering: the control loop always sees the single latest
//! conversion.

use crate::config::{ADC_FULL_SCALE, ADC_NATIVE_BITS, ADC_SAMPLE_BITS};
use crate::shared::SharedState;

/// Scale a native 12-bit conversion down to the 10-bit sample range.
#[inline]
pub const fn scale_conversion(native: u16) -> i16 {
    let scaled = (native >> (ADC_NATIVE_BITS - ADC_SAMPLE_BITS)) as i16;
    if scaled > ADC_FULL_SCALE { ADC_FULL_SCALE } else { scaled }
}

/// Publish a completed conversion.
#[inline]
pub fn on_conversion(
    shared: &SharedState,
    native: u16,
) {
    shared.raw_sample.store(scale_conversion(native));
}

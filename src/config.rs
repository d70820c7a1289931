//! Thermometer configuration constants.
//!
//! All tunables are compile-time constants. Groups that depend on each other
//! carry `const` assertions, so an inconsistent combination (for example a
//! refresh rate that would make the display flicker) fails to compile.

// =============================================================================
// ADC Configuration
// =============================================================================

/// Resolution of the RP2350 SAR ADC.
pub const ADC_NATIVE_BITS: u32 = 12;

/// Resolution of a [`RawSample`](crate::shared::RawSampleCell) after scaling.
pub const ADC_SAMPLE_BITS: u32 = 10;

/// Highest 10-bit sample value.
pub const ADC_FULL_SCALE: i16 = (1 << ADC_SAMPLE_BITS) - 1;

/// Lowest sample accepted by the thermistor model.
/// A reading of 0 would imply a zero-resistance divider and a log of zero.
pub const ADC_MIN_VALID: i16 = 1;

const _: () = assert!(ADC_SAMPLE_BITS <= ADC_NATIVE_BITS);
const _: () = assert!(ADC_MIN_VALID > 0);
const _: () = assert!(ADC_MIN_VALID < ADC_FULL_SCALE);

// =============================================================================
// Thermistor Model
// =============================================================================

/// Beta (material) constant of the NTC thermistor.
pub const THERMISTOR_BETA: f32 = 4050.0;

/// Nominal thermistor resistance at [`THERMISTOR_T0_CELSIUS`].
/// The fixed divider resistor has the same value.
pub const THERMISTOR_R0_OHMS: f32 = 20_000.0;

/// Reference temperature for [`THERMISTOR_R0_OHMS`].
pub const THERMISTOR_T0_CELSIUS: f32 = 25.0;

/// Offset between Celsius and Kelvin.
pub const KELVIN_OFFSET: f32 = 273.15;

// =============================================================================
// Display Configuration
// =============================================================================

/// Number of digits on the seven-segment display.
pub const DIGIT_COUNT: usize = 4;

/// Multiplex refresh rate (one digit per tick).
pub const REFRESH_HZ: u64 = 500;

/// Minimum per-digit refresh rate that looks steady to the eye.
pub const FLICKER_FUSION_HZ: u64 = 60;

/// Values must be strictly greater than this to be displayed.
pub const DISPLAY_MIN_EXCLUSIVE: i16 = -100;

/// Values must be strictly less than this to be displayed.
/// The rightmost digit holds the unit glyph, leaving three numeric digits.
pub const DISPLAY_MAX_EXCLUSIVE: i16 = 1000;

// Packed into one AtomicU32 by the digit cell
const _: () = assert!(DIGIT_COUNT == 4);
const _: () = assert!(REFRESH_HZ / DIGIT_COUNT as u64 >= FLICKER_FUSION_HZ);

// =============================================================================
// Control Loop
// =============================================================================

/// Period of one control loop iteration (~100 Hz).
pub const CONTROL_PERIOD_MS: u64 = 10;

// The loop must be slower than a single refresh tick
const _: () = assert!(CONTROL_PERIOD_MS * REFRESH_HZ > 1000);

// =============================================================================
// Inputs and Indicators
// =============================================================================

/// Number of thermistor inputs.
pub const SENSOR_CHANNELS: usize = 2;

/// Number of physical buttons (mode, unit, sensor).
pub const BUTTON_COUNT: usize = 3;

/// Number of display mode indicator lines.
pub const MODE_INDICATORS: usize = 3;

//! Hardware drivers for the thermometer.
//!
//! - `seven_segment`: Multiplexed 4-digit seven-segment display pins
//! - `indicators`: Active-low indicator LED groups
//! - `buttons`: Active-low push buttons with edge wait

mod buttons;
mod indicators;
mod seven_segment;

pub use buttons::Buttons;
pub use indicators::Indicators;
pub use seven_segment::SevenSegment;

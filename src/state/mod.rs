//! State management for the thermometer.
//!
//! - `button`: Button edge detection
//! - `selection`: Display mode, unit and sensor channel selectors
//! - `input`: Button snapshot processing and action dispatch
//! - `extrema`: Per-channel min/max tracking

mod button;
mod extrema;
mod input;
mod selection;

pub use button::{ButtonLevels, EdgeDetector};
pub use extrema::{Extrema, MinMaxTracker};
pub use input::{InputResult, process_buttons};
pub use selection::{DisplayMode, Selection, SensorChannel};

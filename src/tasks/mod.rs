//! Async tasks for the thermometer firmware.
//!
//! This module contains Embassy async tasks that run alongside the control
//! loop in `main`:
//! - `sampling`: Free-running ADC conversions into the shared sample cell
//! - `refresh`: Display multiplexing at `REFRESH_HZ`
//! - `buttons`: Button edges -> selection changes and indicator LEDs

pub mod buttons;
pub mod refresh;
pub mod sampling;

pub use buttons::button_task;
pub use refresh::refresh_task;
pub use sampling::{CHANNEL_SWITCH, sampling_task};

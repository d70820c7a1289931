//! Control loop: sample -> extrema -> temperature -> digits.
//!
//! One [`ControlLoop::step`] runs per control period. It never blocks; the
//! caller owns the sleep between iterations.

use crate::segments::{DigitBuffer, EncodeError, encode};
use crate::shared::SharedState;
use crate::state::{DisplayMode, MinMaxTracker};
use crate::thermistor::adc_to_celsius;

/// Outcome of one control loop iteration.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum StepOutcome {
    /// A new buffer was published to the display.
    Published(DigitBuffer),
    /// The value could not be shown; the previous buffer stays on the display.
    Held(EncodeError),
    /// No conversion has arrived yet; extrema and display are untouched.
    Waiting,
}

/// Owns the min/max history and drives the display buffer.
pub struct ControlLoop {
    tracker: MinMaxTracker,
}

impl ControlLoop {
    pub const fn new() -> Self {
        Self {
            tracker: MinMaxTracker::new(),
        }
    }

    /// Run one iteration against the shared state.
    pub fn step(
        &mut self,
        shared: &SharedState,
    ) -> StepOutcome {
        let Some(raw) = shared.raw_sample.load() else {
            return StepOutcome::Waiting;
        };
        let selection = shared.selection.load();

        self.tracker.update(selection.channel, raw);
        let extrema = self.tracker.get(selection.channel);

        let shown = match selection.mode {
            DisplayMode::Current => raw,
            DisplayMode::Min => extrema.min,
            DisplayMode::Max => extrema.max,
        };

        let value = selection.unit.convert(adc_to_celsius(shown));

        match encode(value, selection.unit) {
            Ok(digits) => {
                shared.digits.publish(digits);
                StepOutcome::Published(digits)
            }
            Err(err) => StepOutcome::Held(err),
        }
    }

    /// Min/max history.
    pub const fn tracker(&self) -> &MinMaxTracker { &self.tracker }
}

impl Default for ControlLoop {
    fn default() -> Self { Self::new() }
}

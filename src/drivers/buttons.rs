//! Push buttons (active-low with internal pull-up).
//!
//! Pin mapping:
//! - Mode: GPIO12
//! - Unit: GPIO13
//! - Sensor: GPIO14

use embassy_futures::select::select3;
use embassy_rp::gpio::Input;

use thermo_pico2::state::ButtonLevels;

/// The three user buttons.
pub struct Buttons<'d> {
    mode: Input<'d>,
    unit: Input<'d>,
    sensor: Input<'d>,
}

impl<'d> Buttons<'d> {
    pub fn new(
        mode: Input<'d>,
        unit: Input<'d>,
        sensor: Input<'d>,
    ) -> Self {
        Self { mode, unit, sensor }
    }

    /// Wait until any button changes level.
    pub async fn wait_for_change(&mut self) {
        select3(
            self.mode.wait_for_any_edge(),
            self.unit.wait_for_any_edge(),
            self.sensor.wait_for_any_edge(),
        )
        .await;
    }

    /// Snapshot all three levels at once (`is_low()` means pressed).
    pub fn snapshot(&self) -> ButtonLevels {
        ButtonLevels::from_pressed(self.mode.is_low(), self.unit.is_low(), self.sensor.is_low())
    }
}

//! Button task.
//!
//! Wakes on any button edge, snapshots all three buttons and applies the
//! press edges: selection update, indicator LEDs and ADC channel switch.

use defmt::info;
use thermo_pico2::config::{MODE_INDICATORS, SENSOR_CHANNELS};
use thermo_pico2::shared::SharedState;
use thermo_pico2::state::{EdgeDetector, process_buttons};

use super::CHANNEL_SWITCH;
use crate::drivers::{Buttons, Indicators};

/// Button task - the only writer of the selection cell.
#[embassy_executor::task]
pub async fn button_task(
    mut buttons: Buttons<'static>,
    mut mode_leds: Indicators<'static, MODE_INDICATORS>,
    mut channel_leds: Indicators<'static, SENSOR_CHANNELS>,
    shared: &'static SharedState,
) {
    info!("Button task started");

    let mut edges = EdgeDetector::new();

    loop {
        buttons.wait_for_change().await;

        let result = process_buttons(&mut edges, buttons.snapshot(), shared.selection.load());
        if result.is_idle() {
            continue;
        }

        shared.selection.store(result.selection);

        if let Some(pattern) = result.mode_indicators {
            mode_leds.show(pattern);
            info!("Mode: {}", result.selection.mode);
        }

        if result.unit_toggled {
            info!("Unit: {}", result.selection.unit);
        }

        if let Some(channel) = result.switch_channel {
            CHANNEL_SWITCH.signal(channel);
            if let Some(pattern) = result.channel_indicators {
                channel_leds.show(pattern);
            }
            info!("Sensor: channel {}", channel);
        }
    }
}

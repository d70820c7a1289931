//! ADC sampling task.
//!
//! Converts back to back on the active thermistor input and stores every
//! result in the shared sample cell. Channel switches arrive from the button
//! task through [`CHANNEL_SWITCH`] and apply from the next conversion on; a
//! conversion already in flight still lands as if it came from the new
//! channel.

use core::sync::atomic::{AtomicU32, Ordering};

use defmt::{Debug2Format, debug, info, warn};
use embassy_rp::adc::{Adc, Async, Channel};
use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::signal::Signal;
use thermo_pico2::SensorChannel;
use thermo_pico2::config::SENSOR_CHANNELS;
use thermo_pico2::sampling::on_conversion;
use thermo_pico2::shared::SharedState;

/// Signal to switch the ADC to another thermistor input.
pub static CHANNEL_SWITCH: Signal<CriticalSectionRawMutex, SensorChannel> = Signal::new();

/// Atomic counter for failed conversions.
static ADC_ERRORS: AtomicU32 = AtomicU32::new(0);

/// Sampling task - the only writer of the shared sample cell.
#[embassy_executor::task]
pub async fn sampling_task(
    mut adc: Adc<'static, Async>,
    mut inputs: [Channel<'static>; SENSOR_CHANNELS],
    shared: &'static SharedState,
) {
    info!("Sampling task started");

    let mut active = SensorChannel::default();

    loop {
        if let Some(channel) = CHANNEL_SWITCH.try_take() {
            active = channel;
            debug!("ADC input switched to channel {}", active);
        }

        match adc.read(&mut inputs[active.index()]).await {
            Ok(native) => on_conversion(shared, native),
            Err(err) => {
                // Sample cell keeps its last good value
                let count = ADC_ERRORS.fetch_add(1, Ordering::Relaxed) + 1;
                warn!("ADC conversion failed ({} total): {}", count, Debug2Format(&err));
            }
        }
    }
}

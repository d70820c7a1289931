//! Display refresh task.
//!
//! Lights one digit per tick; the cursor wraps every `DIGIT_COUNT` ticks.

use defmt::info;
use embassy_time::{Duration, Ticker};
use thermo_pico2::config::REFRESH_HZ;
use thermo_pico2::multiplex::Multiplexer;
use thermo_pico2::shared::SharedState;

use crate::drivers::SevenSegment;

/// Display refresh task - the only reader of the digit cell.
#[embassy_executor::task]
pub async fn refresh_task(
    mut display: SevenSegment<'static>,
    shared: &'static SharedState,
) {
    info!("Refresh task started at {} Hz", REFRESH_HZ);

    let mut mux = Multiplexer::new();
    let mut ticker = Ticker::every(Duration::from_hz(REFRESH_HZ));

    loop {
        ticker.next().await;
        display.drive(mux.tick(&shared.digits));
    }
}

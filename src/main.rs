//! Dual-Channel Thermometer Firmware for Raspberry Pi Pico 2 (RP2350)
//!
//! Reads two NTC thermistors and shows the selected reading on a 4-digit
//! multiplexed seven-segment display.
//!
//! # Architecture
//!
//! Three tasks feed one control loop through lock-free cells:
//! - Sampling task: free-running ADC conversions -> raw sample cell
//! - Refresh task: 500 Hz ticker, one digit per tick <- digit cell
//! - Button task: edge-triggered buttons -> selection cell, LEDs, ADC input
//! - Main loop (~100 Hz): sample -> min/max -> temperature -> digit cell
//!
//! # Button Controls
//!
//! - **Mode**: Cycle Current → Min → Max → Current
//! - **Unit**: Toggle Celsius/Fahrenheit
//! - **Sensor**: Toggle thermistor A/B
//!
//! On a host target this binary only prints build instructions; the library
//! holds all testable logic.

#![cfg_attr(target_arch = "arm", no_std)]
#![cfg_attr(target_arch = "arm", no_main)]
// Crate-level lints (match lib.rs for consistency)
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_possible_wrap)]
#![allow(clippy::cast_sign_loss)]

// Modules only used in the binary (not testable on host)
#[cfg(target_arch = "arm")]
mod drivers;
#[cfg(target_arch = "arm")]
mod tasks;

#[cfg(not(target_arch = "arm"))]
fn main() {
    println!("thermo is RP2350 firmware: build with `cargo build --release --target thumbv8m.main-none-eabihf`");
    println!("host tests: `cargo test --lib`");
}

#[cfg(target_arch = "arm")]
mod firmware {
    use defmt::{debug, info, warn};
    use embassy_executor::Spawner;
    use embassy_rp::adc::{self, Adc, Channel};
    use embassy_rp::bind_interrupts;
    use embassy_rp::gpio::{Input, Level, Output, Pull};
    use embassy_time::Timer;
    use static_cell::StaticCell;
    use thermo_pico2::config::CONTROL_PERIOD_MS;
    use thermo_pico2::{ControlLoop, DigitBuffer, Selection, SharedState, StepOutcome};
    use {defmt_rtt as _, panic_probe as _};

    use crate::drivers::{Buttons, Indicators, SevenSegment};
    use crate::tasks::{button_task, refresh_task, sampling_task};

    bind_interrupts!(struct Irqs {
        ADC_IRQ_FIFO => adc::InterruptHandler;
    });

    // Program metadata for `picotool info`
    #[unsafe(link_section = ".bi_entries")]
    #[used]
    pub static PICOTOOL_ENTRIES: [embassy_rp::binary_info::EntryAddr; 4] = [
        embassy_rp::binary_info::rp_program_name!(c"thermo"),
        embassy_rp::binary_info::rp_program_description!(c"Dual NTC thermometer on 4-digit seven-segment display"),
        embassy_rp::binary_info::rp_cargo_version!(),
        embassy_rp::binary_info::rp_program_build_attribute!(),
    ];

    /// State shared by every task (single writer per cell).
    static SHARED: StaticCell<SharedState> = StaticCell::new();

    #[embassy_executor::main]
    async fn main(spawner: Spawner) {
        info!("Thermometer starting...");

        let p = embassy_rp::init(Default::default());
        let shared: &'static SharedState = SHARED.init(SharedState::new());
        let selection = Selection::default();

        // Thermistor inputs: A = GPIO26 (ADC0), B = GPIO27 (ADC1)
        let adc = Adc::new(p.ADC, Irqs, adc::Config::default());
        let inputs = [
            Channel::new_pin(p.PIN_26, Pull::None),
            Channel::new_pin(p.PIN_27, Pull::None),
        ];
        info!("ADC initialized");

        // Segments a..g, dp = GPIO0..7 (off); digit enables = GPIO8..11 (disabled)
        let display = SevenSegment::new(
            [
                Output::new(p.PIN_0, Level::Low),
                Output::new(p.PIN_1, Level::Low),
                Output::new(p.PIN_2, Level::Low),
                Output::new(p.PIN_3, Level::Low),
                Output::new(p.PIN_4, Level::Low),
                Output::new(p.PIN_5, Level::Low),
                Output::new(p.PIN_6, Level::Low),
                Output::new(p.PIN_7, Level::Low),
            ],
            [
                Output::new(p.PIN_8, Level::High),
                Output::new(p.PIN_9, Level::High),
                Output::new(p.PIN_10, Level::High),
                Output::new(p.PIN_11, Level::High),
            ],
        );
        info!("Display pins initialized");

        // Buttons (active-low with internal pull-up)
        let buttons = Buttons::new(
            Input::new(p.PIN_12, Pull::Up),
            Input::new(p.PIN_13, Pull::Up),
            Input::new(p.PIN_14, Pull::Up),
        );
        info!("Buttons initialized");

        // Indicators (active-low), lit from the initial selection
        let mode_leds = Indicators::new(
            [
                Output::new(p.PIN_15, Level::High),
                Output::new(p.PIN_16, Level::High),
                Output::new(p.PIN_17, Level::High),
            ],
            selection.mode.indicators(),
        );
        let channel_leds = Indicators::new(
            [Output::new(p.PIN_18, Level::High), Output::new(p.PIN_19, Level::High)],
            selection.channel.indicators(),
        );
        shared.selection.store(selection);
        info!("Indicators initialized: {}", selection);

        spawner.spawn(sampling_task(adc, inputs, shared)).unwrap();
        info!("Sampling task spawned");

        spawner.spawn(refresh_task(display, shared)).unwrap();
        info!("Refresh task spawned");

        spawner.spawn(button_task(buttons, mode_leds, channel_leds, shared)).unwrap();
        info!("Button task spawned");

        // Control loop
        let mut control = ControlLoop::new();
        let mut last_shown: Option<DigitBuffer> = None;
        let mut holding = false;

        info!("Control loop starting ({} ms period)", CONTROL_PERIOD_MS);

        loop {
            // Sleep first so the sampling task has stored a conversion
            Timer::after_millis(CONTROL_PERIOD_MS).await;

            match control.step(shared) {
                StepOutcome::Published(digits) => {
                    if holding {
                        info!("Reading displayable again");
                        holding = false;
                    }
                    if last_shown != Some(digits) {
                        debug!("Display: '{}'", digits.to_text().as_str());
                        last_shown = Some(digits);
                    }
                }
                StepOutcome::Held(err) => {
                    if !holding {
                        warn!("Display held at last good value: {}", err);
                        holding = true;
                    }
                }
                StepOutcome::Waiting => debug!("Waiting for first ADC conversion"),
            }
        }
    }
}

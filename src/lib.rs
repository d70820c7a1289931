//! Thermometer library - testable modules for the dual-channel thermometer.
//!
//! This library contains the core logic that can be tested on the host machine.
//! The binary (`main.rs`) uses this library and adds the embedded-specific code.
//!
//! # Pipeline
//!
//! ```text
//! ADC -> sampling -> RawSampleCell -> control loop -> DigitCell -> multiplexer -> display
//!                                          ^
//! buttons -> input -> SelectionCell -------+
//! ```
//!
//! # Testing
//!
//! Run tests on host with:
//! ```bash
//! cargo test --lib --target x86_64-unknown-linux-gnu  # Linux/macOS
//! cargo test --lib --target x86_64-pc-windows-msvc    # Windows
//! ```
//!
//! Tests run with `std` enabled (via `cfg_attr`), allowing use of the standard
//! test framework while the actual firmware runs as `no_std`.

// Use no_std only when NOT testing (tests need std for the test harness)
#![cfg_attr(not(test), no_std)]
// Crate-level lints
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_possible_wrap)]
#![allow(clippy::cast_sign_loss)]

// === Pure logic modules (testable on host, no ARM dependencies) ===

// Configuration
pub mod config;

// Conversion
pub mod segments;
pub mod thermistor;
pub mod units;

// Selection and history
pub mod state;

// Task-facing logic
pub mod control;
pub mod multiplex;
pub mod sampling;
pub mod shared;

// Re-export commonly used items
pub use control::{ControlLoop, StepOutcome};
pub use segments::{DigitBuffer, EncodeError};
pub use shared::SharedState;
pub use state::{DisplayMode, Selection, SensorChannel};
pub use units::TemperatureUnit;

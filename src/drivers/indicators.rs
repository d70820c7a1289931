//! Indicator LED groups (active-low: Low = ON).
//!
//! Pin mapping:
//! - Mode (Current, Min, Max): GPIO15, GPIO16, GPIO17
//! - Channel (A, B): GPIO18, GPIO19

use embassy_rp::gpio::{Level, Output};

/// A group of LEDs driven from a pattern where `true` = lit.
pub struct Indicators<'d, const N: usize> {
    lines: [Output<'d>; N],
}

impl<'d, const N: usize> Indicators<'d, N> {
    /// Take ownership of the pins and show `initial`.
    pub fn new(
        lines: [Output<'d>; N],
        initial: [bool; N],
    ) -> Self {
        let mut group = Self { lines };
        group.show(initial);
        group
    }

    /// Drive every line of the group from `pattern`.
    pub fn show(
        &mut self,
        pattern: [bool; N],
    ) {
        for (line, on) in self.lines.iter_mut().zip(pattern) {
            line.set_level(if on { Level::Low } else { Level::High });
        }
    }
}

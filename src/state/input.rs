//! Input handling for button events.
//!
//! Turns a fresh button snapshot into selection changes and the indicator
//! lines to drive:
//!
//! - **Mode**: Current -> Min -> Max -> Current, 3 mode indicators
//! - **Unit**: Celsius <-> Fahrenheit
//! - **Sensor**: channel A <-> B, 2 channel indicators, ADC input switch

use super::{ButtonLevels, DisplayMode, EdgeDetector, Selection, SensorChannel};
use crate::config::{MODE_INDICATORS, SENSOR_CHANNELS};

/// Result of processing one button snapshot.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct InputResult {
    /// Selection after applying every press edge.
    pub selection: Selection,
    /// New mode indicator pattern if the mode button was pressed.
    pub mode_indicators: Option<[bool; MODE_INDICATORS]>,
    /// Whether the unit button was pressed.
    pub unit_toggled: bool,
    /// Channel the ADC must switch to if the sensor button was pressed.
    pub switch_channel: Option<SensorChannel>,
    /// New channel indicator pattern if the sensor button was pressed.
    pub channel_indicators: Option<[bool; SENSOR_CHANNELS]>,
}

impl InputResult {
    /// True if no button was pressed.
    pub const fn is_idle(&self) -> bool {
        self.mode_indicators.is_none() && !self.unit_toggled && self.switch_channel.is_none()
    }
}

/// Process a button snapshot and return the resulting actions.
///
/// # Arguments
///
/// * `edges` - Edge detector holding the previous snapshot
/// * `levels` - Current snapshot of the three buttons
/// * `current` - Selection before this snapshot
pub fn process_buttons(
    edges: &mut EdgeDetector,
    levels: ButtonLevels,
    current: Selection,
) -> InputResult {
    let pressed = edges.rising(levels);

    let mut result = InputResult {
        selection: current,
        mode_indicators: None,
        unit_toggled: false,
        switch_channel: None,
        channel_indicators: None,
    };

    if pressed.contains(ButtonLevels::MODE) {
        let mode: DisplayMode = current.mode.next();
        result.selection.mode = mode;
        result.mode_indicators = Some(mode.indicators());
    }

    if pressed.contains(ButtonLevels::UNIT) {
        result.selection.unit = current.unit.toggle();
        result.unit_toggled = true;
    }

    if pressed.contains(ButtonLevels::SENSOR) {
        let channel = current.channel.toggle();
        result.selection.channel = channel;
        result.switch_channel = Some(channel);
        result.channel_indicators = Some(channel.indicators());
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::units::TemperatureUnit;

    /// Press and release `button`, returning the result of the press.
    fn click(
        edges: &mut EdgeDetector,
        selection: Selection,
        button: ButtonLevels,
    ) -> InputResult {
        let result = process_buttons(edges, button, selection);
        let release = process_buttons(edges, ButtonLevels::NONE, result.selection);
        assert!(release.is_idle());
        result
    }

    #[test]
    fn test_mode_press_advances_and_lights_one_indicator() {
        let mut edges = EdgeDetector::new();
        let result = click(&mut edges, Selection::default(), ButtonLevels::MODE);
        assert_eq!(result.selection.mode, DisplayMode::Min);
        assert_eq!(result.mode_indicators, Some([false, true, false]));
        assert!(result.switch_channel.is_none());
    }

    #[test]
    fn test_three_mode_presses_return_to_start() {
        let mut edges = EdgeDetector::new();
        let start = Selection::default();
        let mut selection = start;
        let mut indicators = None;
        for _ in 0..3 {
            let result = click(&mut edges, selection, ButtonLevels::MODE);
            selection = result.selection;
            indicators = result.mode_indicators;
        }
        assert_eq!(selection, start);
        assert_eq!(indicators, Some(start.mode.indicators()));
    }

    #[test]
    fn test_unit_press_toggles() {
        let mut edges = EdgeDetector::new();
        let result = click(&mut edges, Selection::default(), ButtonLevels::UNIT);
        assert!(result.unit_toggled);
        assert_eq!(result.selection.unit, TemperatureUnit::Fahrenheit);
        assert!(result.mode_indicators.is_none());
    }

    #[test]
    fn test_sensor_press_switches_adc_and_indicators() {
        let mut edges = EdgeDetector::new();
        let result = click(&mut edges, Selection::default(), ButtonLevels::SENSOR);
        assert_eq!(result.selection.channel, SensorChannel::B);
        assert_eq!(result.switch_channel, Some(SensorChannel::B));
        assert_eq!(result.channel_indicators, Some([false, true]));
    }

    #[test]
    fn test_held_button_does_not_repeat() {
        let mut edges = EdgeDetector::new();
        let first = process_buttons(&mut edges, ButtonLevels::MODE, Selection::default());
        let second = process_buttons(&mut edges, ButtonLevels::MODE, first.selection);
        assert!(second.is_idle());
        assert_eq!(second.selection.mode, DisplayMode::Min);
    }

    #[test]
    fn test_release_does_not_fire() {
        let mut edges = EdgeDetector::new();
        let pressed = process_buttons(&mut edges, ButtonLevels::UNIT, Selection::default());
        let released = process_buttons(&mut edges, ButtonLevels::NONE, pressed.selection);
        assert!(released.is_idle());
        assert_eq!(released.selection.unit, TemperatureUnit::Fahrenheit);
    }

    #[test]
    fn test_press_release_press_toggles_twice() {
        let mut edges = EdgeDetector::new();
        let mut selection = Selection::default();
        let mut toggles = 0;
        for levels in [ButtonLevels::UNIT, ButtonLevels::NONE, ButtonLevels::UNIT] {
            let result = process_buttons(&mut edges, levels, selection);
            if result.unit_toggled {
                toggles += 1;
            }
            selection = result.selection;
        }
        assert_eq!(toggles, 2);
        assert_eq!(selection.unit, TemperatureUnit::Celsius);
    }
}

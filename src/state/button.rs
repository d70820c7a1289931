//! Button edge detection.
//!
//! The button task snapshots all three buttons each time any of them
//! changes level. Only a transition from released to pressed between two
//! consecutive snapshots counts; a held level and a release never trigger.
//! Contact bounce is left to the pull-ups and the button hardware, there is
//! no timing filter here.

/// Raw levels of the three buttons, one bit per button (bit set = pressed).
#[derive(Clone, Copy, PartialEq, Eq, Default, Debug)]
pub struct ButtonLevels(u8);

impl ButtonLevels {
    /// Mode button (Current/Min/Max).
    pub const MODE: Self = Self(1 << 0);
    /// Unit button (Celsius/Fahrenheit).
    pub const UNIT: Self = Self(1 << 1);
    /// Sensor button (channel A/B).
    pub const SENSOR: Self = Self(1 << 2);

    /// No button pressed.
    pub const NONE: Self = Self(0);

    const MASK: u8 = Self::MODE.0 | Self::UNIT.0 | Self::SENSOR.0;

    /// Build a snapshot from the three pressed states.
    pub const fn from_pressed(
        mode: bool,
        unit: bool,
        sensor: bool,
    ) -> Self {
        Self((mode as u8) | ((unit as u8) << 1) | ((sensor as u8) << 2))
    }

    /// Build a snapshot from raw bits; bits outside the three buttons are dropped.
    pub const fn from_bits(bits: u8) -> Self { Self(bits & Self::MASK) }

    /// Raw bits.
    pub const fn bits(self) -> u8 { self.0 }

    /// True if every button in `other` is set in `self`.
    #[inline]
    pub const fn contains(
        self,
        other: Self,
    ) -> bool {
        self.0 & other.0 == other.0 && other.0 != 0
    }

    /// True if no button is set.
    #[inline]
    pub const fn is_empty(self) -> bool { self.0 == 0 }
}

/// Previous-snapshot edge detector shared by all buttons.
pub struct EdgeDetector {
    previous: ButtonLevels,
}

impl EdgeDetector {
    /// Create a detector that assumes all buttons start released.
    pub const fn new() -> Self {
        Self {
            previous: ButtonLevels::NONE,
        }
    }

    /// Record a new snapshot and return the buttons that were just pressed.
    ///
    /// `changed = previous ^ current`; a button fires only where it changed
    /// and is now pressed.
    pub fn rising(
        &mut self,
        current: ButtonLevels,
    ) -> ButtonLevels {
        let changed = self.previous.0 ^ current.0;
        self.previous = current;
        ButtonLevels(changed & current.0)
    }

    /// Last recorded snapshot.
    pub const fn previous(&self) -> ButtonLevels { self.previous }
}

impl Default for EdgeDetector {
    fn default() -> Self { Self::new() }
}

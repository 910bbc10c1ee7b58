//! Values derived from the display state for presentation.

use std::fmt;

use super::state::DisplayState;

/// Time-of-day greeting shown in the header
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Greeting {
    LateNight,
    Morning,
    Afternoon,
    Evening,
}

impl Greeting {
    pub fn for_hour(hour: u32) -> Self {
        match hour {
            0..=5 => Greeting::LateNight,
            6..=11 => Greeting::Morning,
            12..=17 => Greeting::Afternoon,
            _ => Greeting::Evening,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Greeting::LateNight => "Late Night",
            Greeting::Morning => "Good Morning",
            Greeting::Afternoon => "Good Afternoon",
            Greeting::Evening => "Good Evening",
        }
    }
}

impl fmt::Display for Greeting {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Greeting for the current state; none before mount
pub fn greeting(state: &DisplayState) -> Option<Greeting> {
    if !state.is_mounted() {
        return None;
    }
    state.snapshot().hour_value().map(Greeting::for_hour)
}

/// Fraction of the current minute elapsed, in `[0, 1)`
pub fn meter_fraction(state: &DisplayState) -> f64 {
    if !state.is_mounted() {
        return 0.0;
    }
    state
        .snapshot()
        .second_value()
        .map(|s| f64::from(s.min(59)) / 60.0)
        .unwrap_or(0.0)
}

/// Whether blinking elements are in their bright phase
///
/// Blinks follow the seconds: bright on even seconds, dim on odd ones.
/// With reduced motion, or before mount, they stay bright.
pub fn blink_on(state: &DisplayState, reduced_motion: bool) -> bool {
    if reduced_motion || !state.is_mounted() {
        return true;
    }
    state
        .snapshot()
        .second_value()
        .map(|s| s % 2 == 0)
        .unwrap_or(true)
}

use serde::{Deserialize, Serialize};

/// factor applied to each half-day commute block during rush windows.
pub const RUSH_MULTIPLIER: f64 = 1.4;

/// Congestion multipliers for the two half-day blocks of the commute loop.
/// Normal mode is the identity set; rush mode inflates both blocks
/// uniformly rather than adding a flat offset to the day.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MultiplierSet {
    pub morning: f64,
    pub evening: f64,
}

impl MultiplierSet {
    pub const NORMAL: MultiplierSet = MultiplierSet {
        morning: 1.0,
        evening: 1.0,
    };

    pub const RUSH: MultiplierSet = MultiplierSet {
        morning: RUSH_MULTIPLIER,
        evening: RUSH_MULTIPLIER,
    };

    /// total loop seconds with each half-day block scaled by its multiplier.
    pub fn adjusted_daily_seconds(&self, morning_seconds: f64, evening_seconds: f64) -> f64 {
        morning_seconds * self.morning + evening_seconds * self.evening
    }
}

use serde::{Deserialize, Serialize};

use super::Day;

/// One day of the weekly breakdown. Weekend entries always carry the
/// discounted, non-rush value regardless of the requested mode.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeeklyEntry {
    pub day: Day,
    pub minutes: f64,
    pub hours: f64,
    pub is_workday: bool,
    pub is_rush_adjusted: bool,
    pub extra_minutes: i64,
}

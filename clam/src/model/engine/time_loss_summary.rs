use serde::{Deserialize, Serialize};

/// Derived time loss figures for one commute loop, under both the normal
/// and rush-adjusted multiplier sets. Recomputed in full for every
/// calculation; never persisted by the engine.
///
/// Every rush-adjusted figure is at least its normal counterpart, and the
/// extra_* fields carry the whole-minute delta attributable to congestion.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimeLossSummary {
    /// sum of the four leg durations, unadjusted
    pub daily_seconds: i64,
    pub daily_minutes: f64,
    pub daily_hours: f64,
    pub monthly_hours: f64,
    pub monthly_days: f64,
    pub yearly_hours: f64,
    pub yearly_days: f64,
    pub yearly_weeks: f64,
    pub rush_daily_minutes: f64,
    pub rush_daily_hours: f64,
    pub rush_monthly_hours: f64,
    pub rush_yearly_hours: f64,
    pub extra_daily_minutes: i64,
    pub extra_monthly_minutes: i64,
    pub extra_yearly_minutes: i64,
}

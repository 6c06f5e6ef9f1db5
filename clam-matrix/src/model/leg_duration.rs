use serde::{Deserialize, Serialize};

/// Travel estimate for one directed leg of a commute loop, as reported by
/// the distance matrix provider. Immutable once obtained.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LegDuration {
    /// human-readable distance, e.g. "15.0 km"
    pub distance_text: String,
    /// human-readable duration, e.g. "25 mins"
    pub duration_text: String,
    /// duration of the leg in seconds
    pub duration_seconds: i64,
}

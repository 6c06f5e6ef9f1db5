use serde::{Deserialize, Serialize};

use crate::model::LegDuration;

/// Substitute leg applied by the caller when the provider cannot produce an
/// estimate. Downstream time loss computation only ever sees complete legs
/// and never substitutes defaults itself.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FallbackConfig {
    pub distance_text: String,
    pub duration_text: String,
    pub duration_seconds: i64,
}

impl Default for FallbackConfig {
    fn default() -> Self {
        Self {
            distance_text: String::from("15.0 km"),
            duration_text: String::from("25 mins"),
            duration_seconds: 1500,
        }
    }
}

impl FallbackConfig {
    pub fn to_leg_duration(&self) -> LegDuration {
        LegDuration {
            distance_text: self.distance_text.clone(),
            duration_text: self.duration_text.clone(),
            duration_seconds: self.duration_seconds,
        }
    }
}

use serde::{Deserialize, Serialize};

use super::WeeklyEntry;

/// Both weekly series, built eagerly so a consumer can toggle between the
/// normal and rush presentations without recomputation. Each series holds
/// exactly 7 entries ordered Monday through Sunday.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeeklyProjection {
    pub normal: Vec<WeeklyEntry>,
    pub rush: Vec<WeeklyEntry>,
}

impl WeeklyProjection {
    pub fn series(&self, rush: bool) -> &[WeeklyEntry] {
        if rush {
            &self.rush
        } else {
            &self.normal
        }
    }
}

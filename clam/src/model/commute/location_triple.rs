use serde::{Deserialize, Serialize};

use super::CommuteError;

/// The three fixed stops of the daily loop, as free-text addresses.
/// All three must be populated before any travel time lookup is attempted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocationTriple {
    pub home: String,
    pub school: String,
    pub work: String,
}

impl LocationTriple {
    pub fn new(home: &str, school: &str, work: &str) -> LocationTriple {
        LocationTriple {
            home: home.to_string(),
            school: school.to_string(),
            work: work.to_string(),
        }
    }

    /// confirms every stop has an address. checked before any provider
    /// lookup; an invalid triple is a precondition failure, not retried.
    pub fn validate(&self) -> Result<(), CommuteError> {
        for (name, value) in [
            ("home", &self.home),
            ("school", &self.school),
            ("work", &self.work),
        ] {
            if value.trim().is_empty() {
                return Err(CommuteError::InvalidLocationTriple(name.to_string()));
            }
        }
        Ok(())
    }
}

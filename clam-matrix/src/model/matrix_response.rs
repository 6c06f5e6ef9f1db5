use serde::{Deserialize, Serialize};

use super::LegDuration;
use crate::client::MatrixError;

/// status value the provider reports on both responses and elements when a
/// route estimate was produced.
pub const STATUS_OK: &str = "OK";

/// Wire shape of a distance matrix response. Requests here are always
/// one origin by one destination, so a successful response carries exactly
/// one row with exactly one element.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatrixResponse {
    pub status: String,
    #[serde(default)]
    pub rows: Vec<MatrixRow>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatrixRow {
    #[serde(default)]
    pub elements: Vec<MatrixElement>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatrixElement {
    pub status: String,
    pub distance: Option<TextValue>,
    pub duration: Option<TextValue>,
}

/// a provider quantity in both display and numeric form, e.g.
/// `{"text": "25 mins", "value": 1500}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TextValue {
    pub text: String,
    pub value: i64,
}

impl MatrixResponse {
    /// pulls the single origin/destination element out of a one-by-one
    /// matrix response, confirming the response and element statuses.
    pub fn into_leg_duration(self) -> Result<LegDuration, MatrixError> {
        if self.status != STATUS_OK {
            return Err(MatrixError::ResponseStatusError(self.status));
        }
        let element = self
            .rows
            .into_iter()
            .next()
            .and_then(|row| row.elements.into_iter().next())
            .ok_or_else(|| {
                MatrixError::DeserializeError(String::from(
                    "response has no origin/destination element",
                ))
            })?;
        if element.status != STATUS_OK {
            return Err(MatrixError::ElementStatusError(element.status));
        }
        let distance = element.distance.ok_or_else(|| {
            MatrixError::DeserializeError(String::from("element missing 'distance'"))
        })?;
        let duration = element.duration.ok_or_else(|| {
            MatrixError::DeserializeError(String::from("element missing 'duration'"))
        })?;
        Ok(LegDuration {
            distance_text: distance.text,
            duration_text: duration.text,
            duration_seconds: duration.value,
        })
    }
}

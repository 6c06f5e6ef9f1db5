use serde::{Deserialize, Serialize};

/// Travel mode requested from the distance matrix provider. A commute loop
/// uses a single fixed mode across all four legs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum TravelMode {
    #[default]
    Driving,
    Walking,
    Bicycling,
    Transit,
}

impl std::fmt::Display for TravelMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TravelMode::Driving => write!(f, "driving"),
            TravelMode::Walking => write!(f, "walking"),
            TravelMode::Bicycling => write!(f, "bicycling"),
            TravelMode::Transit => write!(f, "transit"),
        }
    }
}

mod leg_duration;
mod matrix_response;
mod travel_mode;

pub use leg_duration::LegDuration;
pub use matrix_response::{MatrixElement, MatrixResponse, MatrixRow, TextValue};
pub use travel_mode::TravelMode;

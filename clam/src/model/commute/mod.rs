mod commute_error;
mod leg_kind;
mod location_triple;
mod travel_times;

pub use commute_error::CommuteError;
pub use leg_kind::LegKind;
pub use location_triple::LocationTriple;
pub use travel_times::TravelTimes;

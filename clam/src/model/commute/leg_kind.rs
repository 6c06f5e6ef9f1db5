use serde::{Deserialize, Serialize};

use super::LocationTriple;

/// One directed leg of the daily commute loop
/// home -> school -> work -> school -> home. School is visited on both the
/// morning and evening halves, so the loop is a cycle rather than a simple
/// round trip.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LegKind {
    HomeToSchool,
    SchoolToWork,
    WorkToSchool,
    SchoolToHome,
}

impl LegKind {
    /// the four legs in the order they are driven during a day.
    pub const ALL: [LegKind; 4] = [
        LegKind::HomeToSchool,
        LegKind::SchoolToWork,
        LegKind::WorkToSchool,
        LegKind::SchoolToHome,
    ];

    /// origin/destination address pair for this leg.
    pub fn endpoints<'a>(&self, locations: &'a LocationTriple) -> (&'a str, &'a str) {
        match self {
            LegKind::HomeToSchool => (&locations.home, &locations.school),
            LegKind::SchoolToWork => (&locations.school, &locations.work),
            LegKind::WorkToSchool => (&locations.work, &locations.school),
            LegKind::SchoolToHome => (&locations.school, &locations.home),
        }
    }
}

impl std::fmt::Display for LegKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LegKind::HomeToSchool => write!(f, "home_to_school"),
            LegKind::SchoolToWork => write!(f, "school_to_work"),
            LegKind::WorkToSchool => write!(f, "work_to_school"),
            LegKind::SchoolToHome => write!(f, "school_to_home"),
        }
    }
}

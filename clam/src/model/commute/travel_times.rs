use clam_matrix::model::LegDuration;
use serde::{Deserialize, Serialize};

use super::{CommuteError, LegKind};

/// One full day's round-trip commute loop: exactly four named legs, fetched
/// fresh from the provider for every calculation. Fields are optional so an
/// incomplete loop is representable and rejected downstream rather than
/// silently defaulted; callers apply fallback legs upstream.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct TravelTimes {
    pub home_to_school: Option<LegDuration>,
    pub school_to_work: Option<LegDuration>,
    pub work_to_school: Option<LegDuration>,
    pub school_to_home: Option<LegDuration>,
}

impl TravelTimes {
    pub fn new(
        home_to_school: LegDuration,
        school_to_work: LegDuration,
        work_to_school: LegDuration,
        school_to_home: LegDuration,
    ) -> TravelTimes {
        TravelTimes {
            home_to_school: Some(home_to_school),
            school_to_work: Some(school_to_work),
            work_to_school: Some(work_to_school),
            school_to_home: Some(school_to_home),
        }
    }

    pub fn get(&self, kind: LegKind) -> Option<&LegDuration> {
        match kind {
            LegKind::HomeToSchool => self.home_to_school.as_ref(),
            LegKind::SchoolToWork => self.school_to_work.as_ref(),
            LegKind::WorkToSchool => self.work_to_school.as_ref(),
            LegKind::SchoolToHome => self.school_to_home.as_ref(),
        }
    }

    /// a leg is usable only if present with a non-negative duration.
    pub fn require(&self, kind: LegKind) -> Result<&LegDuration, CommuteError> {
        match self.get(kind) {
            Some(leg) if leg.duration_seconds >= 0 => Ok(leg),
            _ => Err(CommuteError::MissingLegData(kind)),
        }
    }

    pub fn is_complete(&self) -> bool {
        LegKind::ALL.iter().all(|kind| self.require(*kind).is_ok())
    }
}

use super::{MultiplierSet, TimeLossSummary};
use crate::model::commute::{CommuteError, LegKind, TravelTimes};

/// working days per month. captures a 5-day workweek averaged across a
/// month, deliberately simpler than calendar-accurate day counting.
pub const WORKDAYS_PER_MONTH: f64 = 22.0;
pub const MONTHS_PER_YEAR: f64 = 12.0;

/// half-away-from-zero rounding to one decimal place, used consistently
/// across the engine.
pub fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// daily/monthly/yearly figures for one multiplier set.
struct Projection {
    daily_minutes: f64,
    daily_hours: f64,
    monthly_hours: f64,
    yearly_hours: f64,
}

impl Projection {
    fn new(morning_seconds: f64, evening_seconds: f64, multipliers: &MultiplierSet) -> Projection {
        let daily_seconds = multipliers.adjusted_daily_seconds(morning_seconds, evening_seconds);
        let daily_minutes = round1(daily_seconds / 60.0);
        let daily_hours = daily_minutes / 60.0;
        let monthly_hours = round1(daily_hours * WORKDAYS_PER_MONTH);
        let yearly_hours = round1(monthly_hours * MONTHS_PER_YEAR);
        Projection {
            daily_minutes,
            daily_hours,
            monthly_hours,
            yearly_hours,
        }
    }
}

/// Turns one complete commute loop into its time loss summary. Pure and
/// stateless; every invocation is an independent calculation over its
/// inputs. Fails with [`CommuteError::MissingLegData`] if any leg is absent
/// or negative rather than substituting a default.
pub fn compute_time_loss(travel_times: &TravelTimes) -> Result<TimeLossSummary, CommuteError> {
    let h2s = travel_times.require(LegKind::HomeToSchool)?.duration_seconds;
    let s2w = travel_times.require(LegKind::SchoolToWork)?.duration_seconds;
    let w2s = travel_times.require(LegKind::WorkToSchool)?.duration_seconds;
    let s2h = travel_times.require(LegKind::SchoolToHome)?.duration_seconds;

    // morning block: drop off at school, continue to work.
    // evening block: back to school for pickup, then home.
    let morning_seconds = (h2s + s2w) as f64;
    let evening_seconds = (w2s + s2h) as f64;

    let normal = Projection::new(morning_seconds, evening_seconds, &MultiplierSet::NORMAL);
    let rush = Projection::new(morning_seconds, evening_seconds, &MultiplierSet::RUSH);

    Ok(TimeLossSummary {
        daily_seconds: h2s + s2w + w2s + s2h,
        daily_minutes: normal.daily_minutes,
        daily_hours: normal.daily_hours,
        monthly_hours: normal.monthly_hours,
        monthly_days: round2(normal.monthly_hours / 24.0),
        yearly_hours: normal.yearly_hours,
        yearly_days: round1(normal.yearly_hours / 24.0),
        yearly_weeks: round2(normal.yearly_hours / 168.0),
        rush_daily_minutes: rush.daily_minutes,
        rush_daily_hours: rush.daily_hours,
        rush_monthly_hours: rush.monthly_hours,
        rush_yearly_hours: rush.yearly_hours,
        extra_daily_minutes: (rush.daily_minutes - normal.daily_minutes).round() as i64,
        extra_monthly_minutes: ((rush.monthly_hours - normal.monthly_hours) * 60.0).round() as i64,
        extra_yearly_minutes: ((rush.yearly_hours - normal.yearly_hours) * 60.0).round() as i64,
    })
}

#[cfg(test)]
mod test {
    use super::compute_time_loss;
    use crate::model::commute::{CommuteError, LegKind, TravelTimes};
    use clam_matrix::model::LegDuration;

    fn mock_leg(duration_seconds: i64) -> LegDuration {
        LegDuration {
            distance_text: String::from("10.0 km"),
            duration_text: String::from("n mins"),
            duration_seconds,
        }
    }

    fn mock_travel_times(h2s: i64, s2w: i64, w2s: i64, s2h: i64) -> TravelTimes {
        TravelTimes::new(mock_leg(h2s), mock_leg(s2w), mock_leg(w2s), mock_leg(s2h))
    }

    #[test]
    fn test_daily_and_projected_time_loss() {
        let times = mock_travel_times(900, 600, 600, 900);
        let summary = compute_time_loss(&times).expect("complete loop should compute");

        // ASSERTION 1: the four legs sum to a 50-minute daily loop.
        assert_eq!(summary.daily_seconds, 3000);
        assert_eq!(summary.daily_minutes, 50.0);

        // ASSERTION 2: monthly and yearly figures chain with one-decimal
        // rounding at each step (22 workdays, 12 months).
        assert_eq!(summary.monthly_hours, 18.3);
        assert_eq!(summary.yearly_hours, 219.6);

        // ASSERTION 3: day/week conversions derive from the rounded hours.
        assert_eq!(summary.monthly_days, 0.76);
        assert_eq!(summary.yearly_days, 9.2);
        assert_eq!(summary.yearly_weeks, 1.31);

        // ASSERTION 4: the engine is deterministic for fixed inputs.
        let again = compute_time_loss(&times).expect("complete loop should compute");
        assert_eq!(summary, again);
    }

    #[test]
    fn test_rush_multiplier_applies_per_block() {
        let times = mock_travel_times(900, 600, 600, 900);
        let summary = compute_time_loss(&times).expect("complete loop should compute");

        // ASSERTION 1: (900+600)*1.4 + (600+900)*1.4 = 4200s = 70 minutes.
        assert_eq!(summary.rush_daily_minutes, 70.0);
        assert_eq!(summary.extra_daily_minutes, 20);

        // ASSERTION 2: rush projections follow the same rounding chain.
        assert_eq!(summary.rush_monthly_hours, 25.7);
        assert_eq!(summary.rush_yearly_hours, 308.4);

        // ASSERTION 3: monthly/yearly extras are the hour deltas expressed
        // in whole minutes.
        assert_eq!(summary.extra_monthly_minutes, 444);
        assert_eq!(summary.extra_yearly_minutes, 5328);
    }

    #[test]
    fn test_zero_duration_loop() {
        let summary =
            compute_time_loss(&mock_travel_times(0, 0, 0, 0)).expect("zero loop should compute");
        assert_eq!(summary.daily_minutes, 0.0);
        assert_eq!(summary.monthly_hours, 0.0);
        assert_eq!(summary.yearly_hours, 0.0);
        assert_eq!(summary.rush_daily_minutes, 0.0);
        assert_eq!(summary.extra_daily_minutes, 0);
        assert_eq!(summary.extra_monthly_minutes, 0);
        assert_eq!(summary.extra_yearly_minutes, 0);
    }

    #[test]
    fn test_missing_leg_never_defaulted() {
        let times = TravelTimes {
            school_to_home: None,
            ..mock_travel_times(900, 600, 600, 900)
        };
        assert_eq!(
            compute_time_loss(&times),
            Err(CommuteError::MissingLegData(LegKind::SchoolToHome))
        );
    }

    #[test]
    fn test_rush_never_below_normal() {
        let cases = [
            (900, 600, 600, 900),
            (1500, 1500, 1500, 1500),
            (0, 0, 0, 0),
            (37, 1201, 845, 7),
            (86400, 1, 1, 86400),
        ];
        for (h2s, s2w, w2s, s2h) in cases {
            let summary = compute_time_loss(&mock_travel_times(h2s, s2w, w2s, s2h))
                .expect("complete loop should compute");
            assert!(summary.rush_daily_minutes >= summary.daily_minutes);
            assert!(summary.rush_monthly_hours >= summary.monthly_hours);
            assert!(summary.rush_yearly_hours >= summary.yearly_hours);
            assert!(summary.extra_daily_minutes >= 0);
        }
    }
}

use itertools::Itertools;

use super::{Day, WeeklyEntry, WeeklyProjection};
use crate::model::engine::TimeLossSummary;

/// factor applied to weekend commute minutes. weekend traffic is lighter;
/// the commute still occurs.
pub const WEEKEND_MULTIPLIER: f64 = 0.8;

/// average weeks per month, used for on-demand monthly estimates over a
/// weekly series.
pub const WEEKS_PER_MONTH: f64 = 4.33;

pub const MINUTES_PER_DAY: f64 = 1440.0;

/// builds both weekly series from an engine summary.
pub fn build_projection(summary: &TimeLossSummary) -> WeeklyProjection {
    let normal = build_series(summary.daily_minutes, summary.daily_hours, None);
    let rush = build_series(
        summary.daily_minutes,
        summary.daily_hours,
        Some((summary.rush_daily_minutes, summary.rush_daily_hours)),
    );
    WeeklyProjection { normal, rush }
}

/// one 7-entry series, Monday through Sunday. The five weekday entries all
/// carry the same figures (the model assumes an identical commute every
/// workday); weekend entries are discounted and never rush-adjusted.
fn build_series(
    daily_minutes: f64,
    daily_hours: f64,
    rush: Option<(f64, f64)>,
) -> Vec<WeeklyEntry> {
    Day::ALL
        .iter()
        .map(|day| {
            if !day.is_workday() {
                return WeeklyEntry {
                    day: *day,
                    minutes: (daily_minutes * WEEKEND_MULTIPLIER).round(),
                    hours: daily_hours * WEEKEND_MULTIPLIER,
                    is_workday: false,
                    is_rush_adjusted: false,
                    extra_minutes: 0,
                };
            }
            match rush {
                Some((rush_minutes, rush_hours)) => WeeklyEntry {
                    day: *day,
                    minutes: rush_minutes,
                    hours: rush_hours,
                    is_workday: true,
                    is_rush_adjusted: true,
                    extra_minutes: (rush_minutes - daily_minutes).round() as i64,
                },
                None => WeeklyEntry {
                    day: *day,
                    minutes: daily_minutes,
                    hours: daily_hours,
                    is_workday: true,
                    is_rush_adjusted: false,
                    extra_minutes: 0,
                },
            }
        })
        .collect_vec()
}

/// total minutes across the five workday entries.
pub fn workweek_minutes(series: &[WeeklyEntry]) -> f64 {
    series
        .iter()
        .filter(|entry| entry.is_workday)
        .map(|entry| entry.minutes)
        .sum()
}

pub fn average_workday_minutes(series: &[WeeklyEntry]) -> f64 {
    workweek_minutes(series) / 5.0
}

/// monthly estimate over a series, via the average month length in weeks.
pub fn monthly_minutes_estimate(series: &[WeeklyEntry]) -> f64 {
    workweek_minutes(series) * WEEKS_PER_MONTH
}

pub fn yearly_minutes_estimate(series: &[WeeklyEntry]) -> f64 {
    monthly_minutes_estimate(series) * 12.0
}

pub fn minutes_as_days(minutes: f64) -> f64 {
    minutes / MINUTES_PER_DAY
}

#[cfg(test)]
mod test {
    use super::build_projection;
    use crate::model::commute::TravelTimes;
    use crate::model::engine::{engine_ops, TimeLossSummary};
    use crate::model::weekly::Day;
    use clam_matrix::model::LegDuration;

    fn mock_leg(duration_seconds: i64) -> LegDuration {
        LegDuration {
            distance_text: String::from("10.0 km"),
            duration_text: String::from("n mins"),
            duration_seconds,
        }
    }

    /// 50-minute normal loop, 70-minute rush loop.
    fn mock_summary() -> TimeLossSummary {
        let times = TravelTimes::new(mock_leg(900), mock_leg(600), mock_leg(600), mock_leg(900));
        engine_ops::compute_time_loss(&times)
            .expect("test invariant failed: complete loop should compute")
    }

    #[test]
    fn test_series_ordering_and_workdays() {
        let projection = build_projection(&mock_summary());

        for series in [&projection.normal, &projection.rush] {
            // ASSERTION 1: exactly seven entries, Monday through Sunday.
            let days = series.iter().map(|e| e.day).collect::<Vec<_>>();
            assert_eq!(days, Day::ALL.to_vec());

            // ASSERTION 2: Monday through Friday are workdays, the rest
            // are not, and the flag matches the day.
            for entry in series {
                assert_eq!(entry.is_workday, entry.day.is_workday());
            }
            assert_eq!(series.iter().filter(|e| e.is_workday).count(), 5);
        }
    }

    #[test]
    fn test_normal_series_is_unadjusted() {
        let projection = build_projection(&mock_summary());
        for entry in projection.normal.iter().filter(|e| e.is_workday) {
            assert_eq!(entry.minutes, 50.0);
            assert!(!entry.is_rush_adjusted);
            assert_eq!(entry.extra_minutes, 0);
        }
    }

    #[test]
    fn test_rush_series_weekday_extras() {
        let projection = build_projection(&mock_summary());
        for entry in projection.rush.iter().filter(|e| e.is_workday) {
            assert_eq!(entry.minutes, 70.0);
            assert!(entry.is_rush_adjusted);
            assert_eq!(entry.extra_minutes, 20);
        }
    }

    #[test]
    fn test_weekend_discount_never_rush_adjusted() {
        let projection = build_projection(&mock_summary());
        for series in [&projection.normal, &projection.rush] {
            for entry in series.iter().filter(|e| !e.is_workday) {
                // ASSERTION: weekends carry the discounted whole-minute
                // value and stay unadjusted even in the rush series.
                assert_eq!(entry.minutes, 40.0);
                assert!(!entry.is_rush_adjusted);
                assert_eq!(entry.extra_minutes, 0);
                assert!(entry.minutes <= 50.0);
            }
        }
    }

    #[test]
    fn test_aggregates_over_series() {
        let projection = build_projection(&mock_summary());
        let series = projection.series(false);

        assert_eq!(super::workweek_minutes(series), 250.0);
        assert_eq!(super::average_workday_minutes(series), 50.0);
        assert_eq!(super::monthly_minutes_estimate(series), 1082.5);
        assert_eq!(super::yearly_minutes_estimate(series), 12990.0);
        assert!((super::minutes_as_days(1440.0) - 1.0).abs() < f64::EPSILON);
    }
}

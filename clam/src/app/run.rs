use std::path::Path;

use serde::Serialize;

use super::{AppConfig, AppError};
use crate::model::commute::{LegKind, LocationTriple, TravelTimes};
use crate::model::engine::{engine_ops, TimeLossSummary};
use crate::model::weekly::{weekly_ops, WeeklyProjection};
use crate::util::duration_format::format_minutes;

/// The full result of one calculation, as handed to presentation or
/// history layers. Recomputed in full every run; never cached.
#[derive(Debug, Clone, Serialize)]
pub struct CalculationOutput {
    pub locations: LocationTriple,
    pub travel_times: TravelTimes,
    pub time_loss: TimeLossSummary,
    pub weekly: WeeklyProjection,
}

/// runs one calculation end to end: resolve and validate locations, fetch
/// the four leg estimates concurrently, aggregate, project, render.
///
/// legs that the provider fails to estimate are substituted with the
/// configured fallback before any computation, so a calculation either
/// produces a complete report or none at all.
pub fn run_calculate(
    home: Option<String>,
    school: Option<String>,
    work: Option<String>,
    config_path: Option<&Path>,
    rush: bool,
    json: bool,
) -> Result<(), AppError> {
    log::info!(
        "starting calculation at {}",
        chrono::Local::now().to_rfc3339()
    );
    let config = AppConfig::load(config_path)?;
    let locations = resolve_locations(&config, home, school, work);
    locations.validate()?;

    let client = config.matrix.build()?;

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .map_err(|e| AppError::TokioError(format!("{e}")))?;

    // the four legs have no ordering dependency; request them concurrently
    // and join before any computation begins.
    let [l1, l2, l3, l4] = LegKind::ALL.map(|kind| kind.endpoints(&locations));
    let (h2s, s2w, w2s, s2h) = runtime.block_on(async {
        futures::join!(
            client.estimate_or_fallback(l1.0, l1.1),
            client.estimate_or_fallback(l2.0, l2.1),
            client.estimate_or_fallback(l3.0, l3.1),
            client.estimate_or_fallback(l4.0, l4.1),
        )
    });

    let travel_times = TravelTimes::new(h2s, s2w, w2s, s2h);
    let time_loss = engine_ops::compute_time_loss(&travel_times)?;
    let weekly = weekly_ops::build_projection(&time_loss);
    let output = CalculationOutput {
        locations,
        travel_times,
        time_loss,
        weekly,
    };

    if json {
        let rendered = serde_json::to_string_pretty(&output)
            .map_err(|e| AppError::SerializationError(format!("{e}")))?;
        println!("{rendered}");
    } else {
        print_report(&output, rush);
    }
    Ok(())
}

/// command line addresses override configured ones, field by field.
fn resolve_locations(
    config: &AppConfig,
    home: Option<String>,
    school: Option<String>,
    work: Option<String>,
) -> LocationTriple {
    let base = config
        .locations
        .clone()
        .unwrap_or_else(|| LocationTriple::new("", "", ""));
    LocationTriple {
        home: home.unwrap_or(base.home),
        school: school.unwrap_or(base.school),
        work: work.unwrap_or(base.work),
    }
}

fn print_report(output: &CalculationOutput, rush: bool) {
    let summary = &output.time_loss;

    println!("daily loop legs:");
    for kind in LegKind::ALL {
        if let Some(leg) = output.travel_times.get(kind) {
            println!(
                "  {kind}: {} ({})",
                leg.duration_text, leg.distance_text
            );
        }
    }
    println!();

    println!("time lost to the daily loop:");
    println!("  daily:   {}", format_minutes(summary.daily_minutes));
    println!(
        "  monthly: {:.1} hours ({:.2} days)",
        summary.monthly_hours, summary.monthly_days
    );
    println!(
        "  yearly:  {:.1} hours ({:.1} days, {:.2} weeks)",
        summary.yearly_hours, summary.yearly_days, summary.yearly_weeks
    );
    println!();

    println!("with rush hour congestion:");
    println!(
        "  daily:   {} (+{} minutes)",
        format_minutes(summary.rush_daily_minutes),
        summary.extra_daily_minutes
    );
    println!(
        "  monthly: {:.1} hours (+{} minutes)",
        summary.rush_monthly_hours, summary.extra_monthly_minutes
    );
    println!(
        "  yearly:  {:.1} hours (+{} minutes)",
        summary.rush_yearly_hours, summary.extra_yearly_minutes
    );
    println!();

    let series = output.weekly.series(rush);
    let label = if rush { "rush" } else { "normal" };
    println!("weekly breakdown ({label}):");
    for entry in series {
        let marker = if entry.is_rush_adjusted {
            format!(" (+{} minutes)", entry.extra_minutes)
        } else {
            String::new()
        };
        println!("  {:<9} {}{marker}", entry.day, format_minutes(entry.minutes));
    }
    println!();

    println!(
        "  workweek total:   {}",
        format_minutes(weekly_ops::workweek_minutes(series))
    );
    println!(
        "  average workday:  {}",
        format_minutes(weekly_ops::average_workday_minutes(series))
    );
    println!(
        "  monthly estimate: {}",
        format_minutes(weekly_ops::monthly_minutes_estimate(series))
    );
    let yearly = weekly_ops::yearly_minutes_estimate(series);
    println!(
        "  yearly estimate:  {} ({:.1} days)",
        format_minutes(yearly),
        weekly_ops::minutes_as_days(yearly)
    );
}

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use super::{run, AppError};

/// Command line tool estimating the time a commuter loses to the fixed
/// daily loop home -> school -> work -> school -> home
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct CommuteApp {
    #[command(subcommand)]
    pub op: CommuteOperation,
}

#[derive(Debug, Clone, Subcommand)]
pub enum CommuteOperation {
    /// fetch travel times for the daily loop and report the projected time loss
    Calculate {
        /// home address (overrides the configured location)
        #[arg(long)]
        home: Option<String>,
        /// school address (overrides the configured location)
        #[arg(long)]
        school: Option<String>,
        /// work address (overrides the configured location)
        #[arg(long)]
        work: Option<String>,
        /// path to a TOML configuration file
        #[arg(long)]
        config: Option<PathBuf>,
        /// print the weekly breakdown with the rush-hour adjustment applied
        #[arg(long)]
        rush: bool,
        /// emit the full calculation as JSON instead of a text report
        #[arg(long)]
        json: bool,
    },
}

impl CommuteOperation {
    pub fn run(self) -> Result<(), AppError> {
        match self {
            CommuteOperation::Calculate {
                home,
                school,
                work,
                config,
                rush,
                json,
            } => run::run_calculate(home, school, work, config.as_deref(), rush, json),
        }
    }
}

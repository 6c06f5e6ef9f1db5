pub mod engine_ops;
mod multiplier_set;
mod time_loss_summary;

pub use multiplier_set::{MultiplierSet, RUSH_MULTIPLIER};
pub use time_loss_summary::TimeLossSummary;

use thiserror::Error;

use super::LegKind;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CommuteError {
    #[error("missing or invalid travel leg duration for '{0}'")]
    MissingLegData(LegKind),
    #[error("location field '{0}' must not be empty")]
    InvalidLocationTriple(String),
}

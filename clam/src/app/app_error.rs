use thiserror::Error;

use crate::model::commute::CommuteError;
use clam_matrix::client::MatrixError;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("failure loading app configuration: {0}")]
    ConfigurationError(String),
    #[error(transparent)]
    CommuteError(#[from] CommuteError),
    #[error(transparent)]
    MatrixError(#[from] MatrixError),
    #[error("failure creating async rust tokio runtime: {0}")]
    TokioError(String),
    #[error("failure serializing calculation output: {0}")]
    SerializationError(String),
}

impl From<config::ConfigError> for AppError {
    fn from(value: config::ConfigError) -> Self {
        AppError::ConfigurationError(value.to_string())
    }
}

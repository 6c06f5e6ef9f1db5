use thiserror::Error;

#[derive(Error, Debug)]
pub enum MatrixError {
    #[error("invalid matrix client configuration: {0}")]
    ConfigurationError(String),
    #[error("failure sending distance matrix request: {0}")]
    ConnectionError(String),
    #[error("failure deserializing distance matrix response: {0}")]
    DeserializeError(String),
    #[error("distance matrix response status was '{0}', expected 'OK'")]
    ResponseStatusError(String),
    #[error("distance matrix element status was '{0}', expected 'OK'")]
    ElementStatusError(String),
}

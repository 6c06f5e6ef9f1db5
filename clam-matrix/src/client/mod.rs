mod fallback_config;
mod matrix_client;
mod matrix_client_config;
mod matrix_error;

pub use fallback_config::FallbackConfig;
pub use matrix_client::MatrixClient;
pub use matrix_client_config::MatrixClientConfig;
pub use matrix_error::MatrixError;

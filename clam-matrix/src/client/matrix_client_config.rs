use serde::{Deserialize, Serialize};

use super::{FallbackConfig, MatrixClient, MatrixError};
use crate::model::TravelMode;

pub const DEFAULT_BASE_URL: &str = "https://maps.googleapis.com/maps/api/distancematrix/json";
pub const DEFAULT_LANGUAGE: &str = "mn";

/// Serializable configuration for a MatrixClient.
/// Builds to a [`MatrixClient`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatrixClientConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,
    #[serde(default)]
    pub api_key: Option<String>,
    #[serde(default = "default_language")]
    pub language: String,
    #[serde(default)]
    pub mode: TravelMode,
    #[serde(default)]
    pub fallback: FallbackConfig,
}

impl Default for MatrixClientConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            api_key: None,
            language: default_language(),
            mode: TravelMode::default(),
            fallback: FallbackConfig::default(),
        }
    }
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_language() -> String {
    DEFAULT_LANGUAGE.to_string()
}

impl MatrixClientConfig {
    pub fn build(&self) -> Result<MatrixClient, MatrixError> {
        if self.base_url.trim().is_empty() {
            return Err(MatrixError::ConfigurationError(String::from(
                "base_url must not be empty",
            )));
        }
        Ok(MatrixClient::new(self.clone()))
    }
}

impl TryFrom<MatrixClientConfig> for MatrixClient {
    type Error = MatrixError;

    fn try_from(value: MatrixClientConfig) -> Result<Self, Self::Error> {
        value.build()
    }
}

#[cfg(test)]
mod test {
    use super::MatrixClientConfig;
    use crate::model::TravelMode;

    #[test]
    fn test_config_defaults_from_empty_toml_section() {
        let config: MatrixClientConfig = serde_json::from_value(serde_json::json!({}))
            .expect("test invariant failed: empty config section should deserialize");
        assert_eq!(config.base_url, super::DEFAULT_BASE_URL);
        assert_eq!(config.language, "mn");
        assert_eq!(config.mode, TravelMode::Driving);
        assert!(config.api_key.is_none());
        assert_eq!(config.fallback.duration_seconds, 1500);
    }

    #[test]
    fn test_empty_base_url_rejected() {
        let config = MatrixClientConfig {
            base_url: String::from("  "),
            ..Default::default()
        };
        assert!(config.build().is_err());
    }
}

use std::path::Path;

use clam_matrix::client::MatrixClientConfig;
use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};

use super::AppError;
use crate::model::commute::LocationTriple;

/// Application configuration: provider client settings plus optionally
/// preconfigured loop locations. Loaded from an optional TOML file layered
/// under `CLAM_*` environment overrides.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub matrix: MatrixClientConfig,
    #[serde(default)]
    pub locations: Option<LocationTriple>,
}

impl AppConfig {
    pub fn load(path: Option<&Path>) -> Result<AppConfig, AppError> {
        let builder = match path {
            Some(p) => Config::builder().add_source(File::from(p)),
            None => Config::builder().add_source(File::with_name("clam").required(false)),
        };
        let settings = builder
            .add_source(Environment::with_prefix("CLAM").separator("__"))
            .build()?;
        let app_config = settings.try_deserialize::<AppConfig>()?;
        Ok(app_config)
    }
}

#[cfg(test)]
mod test {
    use super::AppConfig;
    use clam_matrix::model::TravelMode;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert!(config.locations.is_none());
        assert_eq!(config.matrix.mode, TravelMode::Driving);
        assert_eq!(config.matrix.fallback.duration_seconds, 1500);
    }

    #[test]
    fn test_deserialize_partial_config() {
        let config: AppConfig = serde_json::from_value(serde_json::json!({
            "matrix": { "api_key": "k", "language": "en" },
            "locations": { "home": "a", "school": "b", "work": "c" }
        }))
        .expect("test invariant failed: partial config should deserialize");
        assert_eq!(config.matrix.api_key.as_deref(), Some("k"));
        assert_eq!(config.matrix.language, "en");
        assert_eq!(
            config.locations.expect("locations should be present").home,
            "a"
        );
    }
}

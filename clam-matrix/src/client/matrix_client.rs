use super::{MatrixClientConfig, MatrixError};
use crate::model::{LegDuration, MatrixResponse};

/// Asynchronous client for a distance matrix web service. Each call
/// estimates one directed origin/destination leg; the four legs of a
/// commute loop have no ordering dependency and may be awaited
/// concurrently by the caller.
#[derive(Debug)]
pub struct MatrixClient {
    config: MatrixClientConfig,
    http: reqwest::Client,
}

impl MatrixClient {
    pub fn new(config: MatrixClientConfig) -> MatrixClient {
        MatrixClient {
            config,
            http: reqwest::Client::new(),
        }
    }

    /// requests a travel estimate for one directed origin/destination pair.
    pub async fn estimate(
        &self,
        origin: &str,
        destination: &str,
    ) -> Result<LegDuration, MatrixError> {
        let api_key = self.config.api_key.as_deref().ok_or_else(|| {
            MatrixError::ConfigurationError(String::from(
                "no api_key configured for distance matrix requests",
            ))
        })?;
        log::debug!(
            "estimate leg with origin={origin}, destination={destination}, mode={}",
            self.config.mode
        );
        let params = self.query_params(origin, destination, api_key);
        let response = self
            .http
            .get(&self.config.base_url)
            .query(&params)
            .send()
            .await
            .map_err(|e| MatrixError::ConnectionError(format!("GET request failed: {e}")))?;
        let matrix: MatrixResponse = response
            .json()
            .await
            .map_err(|e| MatrixError::DeserializeError(format!("{e}")))?;
        matrix.into_leg_duration()
    }

    /// requests an estimate, substituting the configured fallback leg when
    /// the provider fails for any reason.
    pub async fn estimate_or_fallback(&self, origin: &str, destination: &str) -> LegDuration {
        match self.estimate(origin, destination).await {
            Ok(leg) => leg,
            Err(e) => {
                log::warn!(
                    "estimate for {origin} -> {destination} failed, substituting fallback leg: {e}"
                );
                self.config.fallback.to_leg_duration()
            }
        }
    }

    fn query_params(
        &self,
        origin: &str,
        destination: &str,
        api_key: &str,
    ) -> Vec<(&'static str, String)> {
        vec![
            ("origins", origin.to_string()),
            ("destinations", destination.to_string()),
            ("mode", self.config.mode.to_string()),
            ("language", self.config.language.clone()),
            ("key", api_key.to_string()),
        ]
    }
}

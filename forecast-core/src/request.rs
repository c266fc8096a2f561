//! Provider request URLs built from the stored settings.
//!
//! Only the URL is produced here; fetching it is up to the caller.

use anyhow::{Context, Result, anyhow};
use reqwest::Url;

use crate::config::Config;

pub const BASE_URL: &str = "https://api.openweathermap.org/data/2.5/";

/// The two provider endpoints whose payloads the codec decodes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Endpoint {
    Current,
    Forecast,
}

impl Endpoint {
    pub fn as_str(&self) -> &'static str {
        match self {
            Endpoint::Current => "current",
            Endpoint::Forecast => "forecast",
        }
    }

    pub const fn all() -> &'static [Endpoint] {
        &[Endpoint::Current, Endpoint::Forecast]
    }

    /// Path segment below [`BASE_URL`].
    pub fn path(&self) -> &'static str {
        match self {
            Endpoint::Current => "weather",
            Endpoint::Forecast => "forecast",
        }
    }
}

impl std::fmt::Display for Endpoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<&str> for Endpoint {
    type Error = anyhow::Error;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value.to_lowercase().as_str() {
            "current" => Ok(Endpoint::Current),
            "forecast" => Ok(Endpoint::Forecast),
            _ => Err(anyhow!("Unknown endpoint '{value}'. Supported endpoints: current, forecast.")),
        }
    }
}

impl Config {
    /// Query parameters shared by both endpoints, in request order.
    pub fn request_query(&self) -> Vec<(&'static str, String)> {
        let mut query = vec![
            ("q", self.location.trim().to_string()),
            ("mode", "json".to_string()),
            ("units", self.units.as_str().to_string()),
            ("lang", self.language.clone()),
        ];

        if let Some(key) = self.api_key.as_deref() {
            query.push(("appid", key.to_string()));
        }

        query
    }

    /// Full request URL for `endpoint`. Fails when no location is set.
    pub fn request_url(&self, endpoint: Endpoint) -> Result<Url> {
        if self.location.trim().is_empty() {
            return Err(anyhow!(
                "No location configured.\n\
                 Hint: run `forecast configure` and enter a location."
            ));
        }

        let base = Url::parse(BASE_URL)
            .and_then(|base| base.join(endpoint.path()))
            .context("Failed to build provider base URL")?;

        Url::parse_with_params(base.as_str(), self.request_query())
            .with_context(|| format!("Failed to build {endpoint} request URL"))
    }
}

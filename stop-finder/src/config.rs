//! Application configuration from environment variables.

use std::str::FromStr;

use crate::postcodes::PostcodeClientConfig;
use crate::tfl::StopPointClientConfig;

/// Default number of stop points to display.
pub const DEFAULT_STOP_COUNT: usize = 5;

pub const POSTCODES_BASE_URL: &str = "POSTCODES_BASE_URL";
pub const TFL_BASE_URL: &str = "TFL_BASE_URL";
pub const TFL_APP_ID: &str = "TFL_APP_ID";
pub const TFL_APP_KEY: &str = "TFL_APP_KEY";
pub const STOP_COUNT: &str = "STOP_COUNT";
pub const STOP_RADIUS_METRES: &str = "STOP_RADIUS_METRES";
pub const HTTP_TIMEOUT_SECS: &str = "HTTP_TIMEOUT_SECS";

/// Errors from reading configuration.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid value for {name}: {value:?}")]
    Invalid { name: &'static str, value: String },
}

/// Everything needed to build a [`Runner`](crate::runner::Runner).
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub postcodes: PostcodeClientConfig,
    pub stop_points: StopPointClientConfig,
    /// Maximum number of stop points to display.
    pub stop_count: usize,
}

impl AppConfig {
    /// Read configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Read configuration through an arbitrary variable lookup.
    ///
    /// Unset and empty variables fall back to defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());

        let mut postcodes = PostcodeClientConfig::new();
        let mut stop_points = StopPointClientConfig::new();

        if let Some(url) = get(POSTCODES_BASE_URL) {
            postcodes = postcodes.with_base_url(url);
        }
        if let Some(url) = get(TFL_BASE_URL) {
            stop_points = stop_points.with_base_url(url);
        }
        stop_points.app_id = get(TFL_APP_ID);
        stop_points.app_key = get(TFL_APP_KEY);

        if let Some(radius) = parse_var(&get, STOP_RADIUS_METRES)? {
            stop_points = stop_points.with_radius(radius);
        }
        if let Some(secs) = parse_var::<u64, _>(&get, HTTP_TIMEOUT_SECS)? {
            // reqwest treats a zero timeout as "fail immediately"
            if secs == 0 {
                return Err(ConfigError::Invalid {
                    name: HTTP_TIMEOUT_SECS,
                    value: secs.to_string(),
                });
            }
            postcodes = postcodes.with_timeout(secs);
            stop_points = stop_points.with_timeout(secs);
        }
        let stop_count = parse_var(&get, STOP_COUNT)?.unwrap_or(DEFAULT_STOP_COUNT);

        Ok(Self {
            postcodes,
            stop_points,
            stop_count,
        })
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            postcodes: PostcodeClientConfig::default(),
            stop_points: StopPointClientConfig::default(),
            stop_count: DEFAULT_STOP_COUNT,
        }
    }
}

fn parse_var<T, G>(get: &G, name: &'static str) -> Result<Option<T>, ConfigError>
where
    T: FromStr,
    G: Fn(&str) -> Option<String>,
{
    match get(name) {
        None => Ok(None),
        Some(value) => value
            .trim()
            .parse()
            .map(Some)
            .map_err(|_| ConfigError::Invalid { name, value }),
    }
}

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Largest stop count solved by exhaustive search.
pub const DEFAULT_EXACT_SEARCH_LIMIT: usize = 4;

/// Upper bound on the exact search limit; exhaustive search is factorial in
/// the stop count.
pub const MAX_EXACT_SEARCH_LIMIT: usize = 8;

/// How a coordinate that matches no registered node is handled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CoordinateMatch {
    /// Exact coordinate match, otherwise the default (hub) node.
    #[default]
    Exact,
    /// Exact match first, otherwise the geometrically nearest node.
    Nearest,
}

impl std::str::FromStr for CoordinateMatch {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "exact" => Ok(Self::Exact),
            "nearest" => Ok(Self::Nearest),
            other => Err(format!("expected 'exact' or 'nearest', got '{other}'")),
        }
    }
}

/// Tunables of the assignment engine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RouterConfig {
    /// Stop sets up to this size are solved exactly; larger ones greedily.
    pub exact_search_limit: usize,
    pub coordinate_match: CoordinateMatch,
}

impl Default for RouterConfig {
    fn default() -> Self {
        Self {
            exact_search_limit: DEFAULT_EXACT_SEARCH_LIMIT,
            coordinate_match: CoordinateMatch::Exact,
        }
    }
}

impl RouterConfig {
    /// Load the configuration from `DELIVERY_*` environment variables,
    /// falling back to defaults for anything unset.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable is set but cannot be parsed.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build the configuration from an arbitrary key lookup so it can be
    /// tested without touching the process environment.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(raw) = lookup("DELIVERY_EXACT_SEARCH_LIMIT") {
            let invalid = |reason: String| ConfigError::InvalidEnvVar {
                var: "DELIVERY_EXACT_SEARCH_LIMIT".to_string(),
                reason,
            };
            let limit = raw
                .trim()
                .parse::<usize>()
                .map_err(|e| invalid(e.to_string()))?;
            if limit > MAX_EXACT_SEARCH_LIMIT {
                return Err(invalid(format!(
                    "{limit} exceeds the maximum of {MAX_EXACT_SEARCH_LIMIT}"
                )));
            }
            config.exact_search_limit = limit;
        }

        if let Some(raw) = lookup("DELIVERY_COORDINATE_MATCH") {
            config.coordinate_match = raw.parse::<CoordinateMatch>().map_err(|reason| {
                ConfigError::InvalidEnvVar {
                    var: "DELIVERY_COORDINATE_MATCH".to_string(),
                    reason,
                }
            })?;
        }

        Ok(config)
    }
}

use std::str::FromStr;

use inventory_core::pagination::DEFAULT_PAGE_SIZE;

/// Largest accepted `MAX_PAGE_SIZE`.
pub const PAGE_SIZE_LIMIT: i64 = 1000;

/// Server configuration loaded from environment variables.
///
/// All fields have sensible defaults suitable for local development.
/// In production, override via environment variables.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `3000`).
    pub port: u16,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
    /// Rows per page on paginated lists (default: `10`, at most `1000`).
    pub max_page_size: i64,
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("{var} must be {expected}, got '{value}'")]
    Invalid {
        var: &'static str,
        expected: &'static str,
        value: String,
    },
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                | Default    |
    /// |------------------------|------------|
    /// | `HOST`                 | `0.0.0.0`  |
    /// | `PORT`                 | `3000`     |
    /// | `REQUEST_TIMEOUT_SECS` | `30`       |
    /// | `MAX_PAGE_SIZE`        | `10`       |
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build the configuration from an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let host = lookup("HOST").unwrap_or_else(|| "0.0.0.0".into());
        let port: u16 = parse_or(&lookup, "PORT", 3000, "a valid u16")?;
        let request_timeout_secs: u64 =
            parse_or(&lookup, "REQUEST_TIMEOUT_SECS", 30, "a valid u64")?;
        let max_page_size: i64 = parse_or(
            &lookup,
            "MAX_PAGE_SIZE",
            DEFAULT_PAGE_SIZE,
            "an integer between 1 and 1000",
        )?;

        if !(1..=PAGE_SIZE_LIMIT).contains(&max_page_size) {
            return Err(ConfigError::Invalid {
                var: "MAX_PAGE_SIZE",
                expected: "an integer between 1 and 1000",
                value: max_page_size.to_string(),
            });
        }

        Ok(Self {
            host,
            port,
            request_timeout_secs,
            max_page_size,
        })
    }
}

fn parse_or<F, T>(
    lookup: &F,
    var: &'static str,
    default: T,
    expected: &'static str,
) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
{
    match lookup(var) {
        None => Ok(default),
        Some(value) => value.trim().parse().map_err(|_| ConfigError::Invalid {
            var,
            expected,
            value,
        }),
    }
}

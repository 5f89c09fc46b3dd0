//! Server configuration parsed from environment variables.
//!
//! `main` loads `.env` through `dotenvy` before calling [`AppConfig::from_env`],
//! so every key below may come from either source.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use std::path::PathBuf;

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_IDENTITY_REQUEST_TIMEOUT_SECS: u64 = 30;
pub const DEFAULT_IDENTITY_CONNECT_TIMEOUT_SECS: u64 = 10;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid {var}: {value:?}")]
    InvalidNumber { var: &'static str, value: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IdentityTimeouts {
    pub request_secs: u64,
    pub connect_secs: u64,
}

/// Hosted identity provider (Supabase project) settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SupabaseConfig {
    /// Project base URL without a trailing slash.
    pub url: String,
    /// Public anon key sent as the `apikey` header.
    pub anon_key: String,
    pub timeouts: IdentityTimeouts,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub port: u16,
    /// `None` disables the auth routes (they answer 503).
    pub supabase: Option<SupabaseConfig>,
    /// Places catalog override; the bundled catalog is used when absent.
    pub places_file: Option<PathBuf>,
}

impl AppConfig {
    /// Build config from the process environment.
    ///
    /// - `PORT`: default 3000
    /// - `SUPABASE_URL`, `SUPABASE_ANON_KEY`: both required to enable auth
    /// - `PLACES_FILE`: optional YAML places catalog
    /// - `IDENTITY_REQUEST_TIMEOUT_SECS`: default 30
    /// - `IDENTITY_CONNECT_TIMEOUT_SECS`: default 10
    ///
    /// # Errors
    ///
    /// Returns an error if a numeric variable is present but malformed.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_vars(|key| std::env::var(key).ok())
    }

    /// Build config from an arbitrary key lookup.
    ///
    /// # Errors
    ///
    /// Returns an error if a numeric variable is present but malformed.
    pub fn from_vars<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let port = parse_or(&lookup, "PORT", DEFAULT_PORT)?;
        let timeouts = IdentityTimeouts {
            request_secs: parse_or(&lookup, "IDENTITY_REQUEST_TIMEOUT_SECS", DEFAULT_IDENTITY_REQUEST_TIMEOUT_SECS)?,
            connect_secs: parse_or(&lookup, "IDENTITY_CONNECT_TIMEOUT_SECS", DEFAULT_IDENTITY_CONNECT_TIMEOUT_SECS)?,
        };

        let url = non_empty(lookup("SUPABASE_URL"));
        let anon_key = non_empty(lookup("SUPABASE_ANON_KEY"));
        let supabase = match (url, anon_key) {
            (Some(url), Some(anon_key)) => {
                Some(SupabaseConfig { url: url.trim_end_matches('/').to_owned(), anon_key, timeouts })
            }
            _ => None,
        };

        let places_file = non_empty(lookup("PLACES_FILE")).map(PathBuf::from);

        Ok(Self { port, supabase, places_file })
    }
}

fn non_empty(raw: Option<String>) -> Option<String> {
    raw.map(|v| v.trim().to_owned()).filter(|v| !v.is_empty())
}

fn parse_or<F, T>(lookup: &F, var: &'static str, default: T) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: std::str::FromStr,
{
    match non_empty(lookup(var)) {
        None => Ok(default),
        Some(value) => value
            .parse::<T>()
            .map_err(|_| ConfigError::InvalidNumber { var, value }),
    }
}

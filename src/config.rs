//! Service configuration from environment variables.

use std::time::Duration;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("{name} must be a positive integer, got {value:?}")]
    InvalidNumber { name: &'static str, value: String },
}

#[derive(Debug, Clone)]
pub struct Config {
    pub bind_addr: String,
    /// Postgres URL for the crop requirement table; built-in rows when unset.
    pub database_url: Option<String>,
    pub report_cache_capacity: u64,
    pub report_cache_ttl: Duration,
    pub history_max_sessions: u64,
    pub history_max_entries: usize,
    pub history_idle: Duration,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            bind_addr: "0.0.0.0:8080".to_string(),
            database_url: None,
            report_cache_capacity: 1000,
            report_cache_ttl: Duration::from_secs(3600),
            history_max_sessions: 10_000,
            history_max_entries: 50,
            history_idle: Duration::from_secs(86400),
        }
    }
}

impl Config {
    /// Read configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Read configuration through `lookup`, falling back to defaults for unset keys.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        let number = |name: &'static str, default: u64| -> Result<u64, ConfigError> {
            match lookup(name) {
                None => Ok(default),
                Some(value) => match value.trim().parse::<u64>() {
                    Ok(n) if n > 0 => Ok(n),
                    _ => Err(ConfigError::InvalidNumber { name, value }),
                },
            }
        };

        Ok(Self {
            bind_addr: lookup("BIND_ADDR").unwrap_or(defaults.bind_addr),
            database_url: lookup("DATABASE_URL").filter(|url| !url.trim().is_empty()),
            report_cache_capacity: number("REPORT_CACHE_CAPACITY", defaults.report_cache_capacity)?,
            report_cache_ttl: Duration::from_secs(number(
                "REPORT_CACHE_TTL_SECS",
                defaults.report_cache_ttl.as_secs(),
            )?),
            history_max_sessions: number(
                "HISTORY_MAX_SESSIONS",
                defaults.history_max_sessions,
            )?,
            history_max_entries: number(
                "HISTORY_MAX_ENTRIES",
                defaults.history_max_entries as u64,
            )? as usize,
            history_idle: Duration::from_secs(number(
                "HISTORY_IDLE_SECS",
                defaults.history_idle.as_secs(),
            )?),
        })
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name| map.get(name).cloned()
    }

    #[test]
    fn test_defaults_when_unset() {
        let config = Config::from_lookup(|_| None).unwrap();

        assert_eq!(config.bind_addr, "0.0.0.0:8080");
        assert!(config.database_url.is_none());
        assert_eq!(config.report_cache_capacity, 1000);
        assert_eq!(config.history_max_entries, 50);
        assert_eq!(config.history_max_sessions, 10_000);
    }

    #[test]
    fn test_overrides() {
        let config = Config::from_lookup(lookup_from(&[
            ("BIND_ADDR", "127.0.0.1:3000"),
            ("DATABASE_URL", "postgres://soil@localhost/soil"),
            ("HISTORY_MAX_ENTRIES", "5"),
            ("HISTORY_MAX_SESSIONS", "200"),
            ("REPORT_CACHE_TTL_SECS", " 60 "),
        ]))
        .unwrap();

        assert_eq!(config.bind_addr, "127.0.0.1:3000");
        assert_eq!(
            config.database_url.as_deref(),
            Some("postgres://soil@localhost/soil")
        );
        assert_eq!(config.history_max_entries, 5);
        assert_eq!(config.history_max_sessions, 200);
        assert_eq!(config.report_cache_ttl, Duration::from_secs(60));
    }

    #[test]
    fn test_empty_database_url_is_unset() {
        let config = Config::from_lookup(lookup_from(&[("DATABASE_URL", "")])).unwrap();
        assert!(config.database_url.is_none());
    }

    #[test]
    fn test_invalid_number() {
        let err = Config::from_lookup(lookup_from(&[("HISTORY_MAX_ENTRIES", "0")])).unwrap_err();
        assert!(err.to_string().contains("HISTORY_MAX_ENTRIES"));

        assert!(Config::from_lookup(lookup_from(&[("REPORT_CACHE_CAPACITY", "lots")])).is_err());
    }
}

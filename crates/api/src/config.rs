use std::net::{IpAddr, Ipv4Addr};
use std::str::FromStr;

use axum::http::HeaderValue;

/// Which origins the CORS layer accepts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CorsOrigins {
    /// `CORS_ORIGINS=*`: any origin, no credentials.
    Any,
    /// An explicit allow-list.
    List(Vec<HeaderValue>),
}

/// Log line format for the tracing subscriber.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Pretty,
    Json,
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

/// Server configuration loaded from environment variables.
///
/// All fields have defaults suitable for local development.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: IpAddr,
    /// Bind port (default: `3000`).
    pub port: u16,
    /// Allowed CORS origins (default: any).
    pub cors_origins: CorsOrigins,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
    /// PostgreSQL URL. `None` selects the in-memory store.
    pub database_url: Option<String>,
    /// Pool size when `database_url` is set (default: `10`).
    pub database_max_connections: u32,
    /// Log output format (default: pretty).
    pub log_format: LogFormat,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: IpAddr::V4(Ipv4Addr::UNSPECIFIED),
            port: 3000,
            cors_origins: CorsOrigins::Any,
            request_timeout_secs: 30,
            database_url: None,
            database_max_connections: 10,
            log_format: LogFormat::Pretty,
        }
    }
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                    | Default   |
    /// |----------------------------|-----------|
    /// | `HOST`                     | `0.0.0.0` |
    /// | `PORT`                     | `3000`    |
    /// | `CORS_ORIGINS`             | `*`       |
    /// | `REQUEST_TIMEOUT_SECS`     | `30`      |
    /// | `DATABASE_URL`             | unset     |
    /// | `DATABASE_MAX_CONNECTIONS` | `10`      |
    /// | `LOG_FORMAT`               | `pretty`  |
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build configuration from an arbitrary key lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let defaults = Self::default();

        let host = parse_var(&lookup, "HOST", "an IP address", defaults.host)?;
        let port = parse_var(&lookup, "PORT", "a valid u16", defaults.port)?;
        let request_timeout_secs = parse_var(
            &lookup,
            "REQUEST_TIMEOUT_SECS",
            "a valid u64",
            defaults.request_timeout_secs,
        )?;
        let database_max_connections = parse_var(
            &lookup,
            "DATABASE_MAX_CONNECTIONS",
            "a valid u32",
            defaults.database_max_connections,
        )?;

        let cors_origins = match lookup("CORS_ORIGINS") {
            Some(raw) => parse_cors_origins(&raw)?,
            None => defaults.cors_origins,
        };

        let database_url = lookup("DATABASE_URL")
            .map(|url| url.trim().to_string())
            .filter(|url| !url.is_empty());

        let log_format = match lookup("LOG_FORMAT").as_deref().map(str::trim) {
            None | Some("") | Some("pretty") => LogFormat::Pretty,
            Some("json") => LogFormat::Json,
            Some(other) => {
                return Err(ConfigError::Invalid {
                    var: "LOG_FORMAT",
                    expected: "'pretty' or 'json'",
                    value: other.to_string(),
                })
            }
        };

        Ok(Self {
            host,
            port,
            cors_origins,
            request_timeout_secs,
            database_url,
            database_max_connections,
            log_format,
        })
    }
}

fn parse_var<T: FromStr>(
    lookup: &impl Fn(&str) -> Option<String>,
    var: &'static str,
    expected: &'static str,
    default: T,
) -> Result<T, ConfigError> {
    match lookup(var) {
        None => Ok(default),
        Some(raw) => raw.trim().parse().map_err(|_| ConfigError::Invalid {
            var,
            expected,
            value: raw,
        }),
    }
}

/// `*` means any origin; otherwise a comma-separated list of origins.
fn parse_cors_origins(raw: &str) -> Result<CorsOrigins, ConfigError> {
    if raw.trim() == "*" {
        return Ok(CorsOrigins::Any);
    }

    let origins = raw
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(|origin| {
            HeaderValue::from_str(origin).map_err(|_| ConfigError::Invalid {
                var: "CORS_ORIGINS",
                expected: "a comma-separated list of origins",
                value: origin.to_string(),
            })
        })
        .collect::<Result<Vec<_>, _>>()?;

    Ok(CorsOrigins::List(origins))
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use assert_matches::assert_matches;

    use super::*;

    fn load(vars: &[(&str, &str)]) -> Result<ServerConfig, ConfigError> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        ServerConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn defaults_when_nothing_is_set() {
        let config = load(&[]).unwrap();
        assert_eq!(config.port, 3000);
        assert_eq!(config.host, IpAddr::V4(Ipv4Addr::UNSPECIFIED));
        assert_eq!(config.cors_origins, CorsOrigins::Any);
        assert_eq!(config.database_url, None);
        assert_eq!(config.log_format, LogFormat::Pretty);
    }

    #[test]
    fn reads_overrides() {
        let config = load(&[
            ("PORT", "8080"),
            ("HOST", "127.0.0.1"),
            ("DATABASE_URL", "postgres://localhost/swapi"),
            ("CORS_ORIGINS", "http://a.test, http://b.test"),
            ("LOG_FORMAT", "json"),
        ])
        .unwrap();

        assert_eq!(config.port, 8080);
        assert_eq!(config.host.to_string(), "127.0.0.1");
        assert_eq!(
            config.database_url.as_deref(),
            Some("postgres://localhost/swapi")
        );
        assert_eq!(
            config.cors_origins,
            CorsOrigins::List(vec![
                HeaderValue::from_static("http://a.test"),
                HeaderValue::from_static("http://b.test"),
            ])
        );
        assert_eq!(config.log_format, LogFormat::Json);
    }

    #[test]
    fn blank_database_url_means_in_memory() {
        let config = load(&[("DATABASE_URL", "  ")]).unwrap();
        assert_eq!(config.database_url, None);
    }

    #[test]
    fn invalid_port_is_reported() {
        let err = load(&[("PORT", "http")]).unwrap_err();
        assert_eq!(err.to_string(), "PORT must be a valid u16, got 'http'");
    }

    #[test]
    fn unknown_log_format_is_reported() {
        assert_matches!(
            load(&[("LOG_FORMAT", "xml")]),
            Err(ConfigError::Invalid { var: "LOG_FORMAT", .. })
        );
    }
}

//! HTTP listener settings: bind address, request limits, CORS and logging.

use std::net::SocketAddr;
use std::time::Duration;

use http::HeaderValue;
use serde::Deserialize;

use super::error::ValidationError;

/// Upper bound for `request_timeout_secs`.
pub const MAX_REQUEST_TIMEOUT_SECS: u64 = 300;

/// Deployment environment. Production switches logs to JSON.
#[derive(Debug, Clone, Copy, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    #[default]
    Development,
    Production,
}

/// Which origins may call the API from a browser.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CorsPolicy {
    /// No origins configured, or `*`.
    AnyOrigin,
    /// Only these origins. An empty list denies every cross-origin caller.
    Origins(Vec<HeaderValue>),
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub environment: Environment,
    /// `EnvFilter` directive used when `RUST_LOG` is unset.
    pub log_level: String,
    pub request_timeout_secs: u64,
    /// Comma-separated allowed origins, e.g. `https://shop.example.com`.
    pub cors_origins: Option<String>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8080,
            environment: Environment::Development,
            log_level: "info,offer_pricing=debug,tower_http=debug".to_string(),
            request_timeout_secs: 30,
            cors_origins: None,
        }
    }
}

impl ServerConfig {
    pub fn socket_addr(&self) -> Result<SocketAddr, ValidationError> {
        let raw = format!("{}:{}", self.host, self.port);
        raw.parse()
            .map_err(|_| ValidationError::InvalidBindAddress(raw))
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    pub fn is_production(&self) -> bool {
        self.environment == Environment::Production
    }

    /// Parses `cors_origins`.
    ///
    /// A single unparsable origin fails the whole policy rather than being
    /// skipped, so a typo never widens or silently narrows access.
    pub fn cors_policy(&self) -> Result<CorsPolicy, ValidationError> {
        let origins: Vec<&str> = self
            .cors_origins
            .as_deref()
            .unwrap_or_default()
            .split(',')
            .map(str::trim)
            .filter(|origin| !origin.is_empty())
            .collect();

        if origins.is_empty() || origins.contains(&"*") {
            return Ok(CorsPolicy::AnyOrigin);
        }

        origins
            .into_iter()
            .map(|origin| {
                HeaderValue::from_str(origin)
                    .map_err(|_| ValidationError::InvalidCorsOrigin(origin.to_string()))
            })
            .collect::<Result<Vec<_>, _>>()
            .map(CorsPolicy::Origins)
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.port == 0 {
            return Err(ValidationError::InvalidPort);
        }
        if !(1..=MAX_REQUEST_TIMEOUT_SECS).contains(&self.request_timeout_secs) {
            return Err(ValidationError::InvalidTimeout);
        }
        self.socket_addr()?;
        self.cors_policy()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn with_origins(origins: &str) -> ServerConfig {
        ServerConfig {
            cors_origins: Some(origins.to_string()),
            ..ServerConfig::default()
        }
    }

    #[test]
    fn defaults_listen_on_8080_and_validate() {
        let config = ServerConfig::default();
        assert_eq!(config.socket_addr().unwrap().port(), 8080);
        assert_eq!(config.request_timeout(), Duration::from_secs(30));
        assert!(!config.is_production());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn unparsable_host_is_rejected() {
        let config = ServerConfig {
            host: "not a host".to_string(),
            ..ServerConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ValidationError::InvalidBindAddress(_))
        ));
    }

    #[test]
    fn port_and_timeout_bounds() {
        let zero_port = ServerConfig {
            port: 0,
            ..ServerConfig::default()
        };
        assert!(matches!(zero_port.validate(), Err(ValidationError::InvalidPort)));

        for secs in [0, MAX_REQUEST_TIMEOUT_SECS + 1] {
            let config = ServerConfig {
                request_timeout_secs: secs,
                ..ServerConfig::default()
            };
            assert!(matches!(config.validate(), Err(ValidationError::InvalidTimeout)));
        }
    }

    #[test]
    fn no_origins_or_wildcard_allows_any() {
        assert_eq!(ServerConfig::default().cors_policy().unwrap(), CorsPolicy::AnyOrigin);
        assert_eq!(with_origins(" , ").cors_policy().unwrap(), CorsPolicy::AnyOrigin);
        assert_eq!(
            with_origins("https://a.example.com, *").cors_policy().unwrap(),
            CorsPolicy::AnyOrigin
        );
    }

    #[test]
    fn origins_are_trimmed_and_kept_in_order() {
        let policy = with_origins("http://localhost:5173, https://shop.example.com,")
            .cors_policy()
            .unwrap();
        assert_eq!(
            policy,
            CorsPolicy::Origins(vec![
                HeaderValue::from_static("http://localhost:5173"),
                HeaderValue::from_static("https://shop.example.com"),
            ])
        );
    }

    #[test]
    fn invalid_origin_fails_validation() {
        let config = with_origins("https://shop.example.com\u{7f}");
        assert!(matches!(
            config.cors_policy(),
            Err(ValidationError::InvalidCorsOrigin(_))
        ));
        assert!(config.validate().is_err());
    }
}

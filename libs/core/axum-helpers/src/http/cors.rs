use axum::http::{HeaderValue, Method, header};
use core_config::{ConfigError, FromEnv, env_required};
use std::time::Duration;
use tower_http::cors::{AllowOrigin, CorsLayer};

const CORS_ENV: &str = "CORS_ALLOWED_ORIGIN";

/// Allowed browser origins.
///
/// `CORS_ALLOWED_ORIGIN` is required and holds comma-separated origins,
/// e.g. `http://localhost:5173,https://films.example.com`.
#[derive(Clone, Debug)]
pub struct CorsSettings {
    pub allowed_origins: Vec<HeaderValue>,
}

impl CorsSettings {
    pub fn parse(raw: &str) -> Result<Self, ConfigError> {
        let allowed_origins = raw
            .split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(HeaderValue::from_str)
            .collect::<Result<Vec<_>, _>>()
            .map_err(|e| ConfigError::ParseError {
                key: CORS_ENV.to_string(),
                details: e.to_string(),
            })?;

        if allowed_origins.is_empty() {
            return Err(ConfigError::ParseError {
                key: CORS_ENV.to_string(),
                details: "cannot be empty".to_string(),
            });
        }

        Ok(Self { allowed_origins })
    }
}

impl FromEnv for CorsSettings {
    fn from_env() -> Result<Self, ConfigError> {
        Self::parse(&env_required(CORS_ENV)?)
    }
}

/// CORS layer for the configured origins.
///
/// Methods GET, POST, PUT, DELETE, OPTIONS; headers Content-Type,
/// Authorization, Accept; credentials allowed; 1 hour max age.
pub fn create_cors_layer(settings: &CorsSettings) -> CorsLayer {
    CorsLayer::new()
        .allow_origin(AllowOrigin::list(settings.allowed_origins.clone()))
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION, header::ACCEPT])
        .allow_credentials(true)
        .max_age(Duration::from_secs(3600))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_multiple_origins() {
        let settings = CorsSettings::parse("http://localhost:3000, https://example.com").unwrap();
        assert_eq!(settings.allowed_origins.len(), 2);
        assert_eq!(settings.allowed_origins[1], "https://example.com");
    }

    #[test]
    fn test_parse_rejects_empty() {
        let err = CorsSettings::parse(" , ").unwrap_err();
        assert!(err.to_string().contains(CORS_ENV));
    }

    #[test]
    fn test_from_env_requires_variable() {
        temp_env::with_var_unset(CORS_ENV, || {
            assert!(CorsSettings::from_env().is_err());
        });
    }

    #[test]
    fn test_from_env_reads_variable() {
        temp_env::with_var(CORS_ENV, Some("http://localhost:5173"), || {
            let settings = CorsSettings::from_env().unwrap();
            assert_eq!(settings.allowed_origins[0], "http://localhost:5173");
        });
    }
}

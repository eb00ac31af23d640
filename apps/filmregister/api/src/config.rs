use axum_helpers::{CorsSettings, JwtConfig};
use core_config::{AppInfo, FromEnv, app_info, env_optional, server::ServerConfig};
use database::postgres::PostgresConfig;

use crate::seed::SeedProfile;

pub use core_config::Environment;

/// Application configuration, composed from the shared config components.
#[derive(Clone, Debug)]
pub struct Config {
    pub app: AppInfo,
    pub database: PostgresConfig,
    pub server: ServerConfig,
    pub jwt: JwtConfig,
    pub cors: CorsSettings,
    pub environment: Environment,
    /// Sample data to load at startup, if any
    pub seed_profile: Option<SeedProfile>,
}

impl Config {
    pub fn from_env() -> eyre::Result<Self> {
        let environment = Environment::from_env();
        let database = PostgresConfig::from_env()?; // Required
        let server = ServerConfig::from_env()?; // HOST=0.0.0.0, PORT=8080 by default
        let jwt = JwtConfig::from_env()?; // Required
        let cors = CorsSettings::from_env()?; // Required

        Ok(Self {
            app: app_info!(),
            database,
            server,
            jwt,
            cors,
            environment,
            seed_profile: seed_profile_from_env(),
        })
    }
}

/// Unknown profile names (e.g. `test`) load nothing.
fn seed_profile_from_env() -> Option<SeedProfile> {
    let raw = env_optional("SEED_PROFILE")?;
    match raw.parse() {
        Ok(profile) => Some(profile),
        Err(_) => {
            tracing::debug!(profile = %raw, "No sample data for this profile");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seed_profile_names() {
        temp_env::with_var("SEED_PROFILE", Some("demo"), || {
            assert_eq!(seed_profile_from_env(), Some(SeedProfile::Demo));
        });
        temp_env::with_var("SEED_PROFILE", Some("default-init"), || {
            assert_eq!(seed_profile_from_env(), Some(SeedProfile::DefaultInit));
        });
        temp_env::with_var("SEED_PROFILE", Some("test"), || {
            assert_eq!(seed_profile_from_env(), None);
        });
        temp_env::with_var_unset("SEED_PROFILE", || {
            assert_eq!(seed_profile_from_env(), None);
        });
    }
}

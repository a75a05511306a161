use axum_helpers::{CorsConfig, JwtConfig};
use core_config::{AppInfo, FromEnv, app_info, server::ServerConfig};
use database::postgres::PostgresConfig;

pub use core_config::Environment;

/// Accounts API configuration, composed from the shared config components
#[derive(Clone, Debug)]
pub struct Config {
    pub app: AppInfo,
    pub environment: Environment,
    pub server: ServerConfig,
    pub database: PostgresConfig,
    pub jwt: JwtConfig,
    pub cors: CorsConfig,
}

impl Config {
    pub fn from_env() -> eyre::Result<Self> {
        let environment = Environment::from_env();
        let server = ServerConfig::from_env()?; // HOST=0.0.0.0, PORT=8080
        let database = PostgresConfig::from_env()?; // DATABASE_URL required
        let jwt = JwtConfig::from_env()?; // JWT_SECRET required
        let cors = CorsConfig::from_env()?; // ALLOW_ORIGINS required

        Ok(Self {
            app: app_info!(),
            environment,
            server,
            database,
            jwt,
            cors,
        })
    }
}

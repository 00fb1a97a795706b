/// Configuration management for the RecipeShare service
///
/// This module handles loading and managing configuration from environment
/// variables.
use serde::{Deserialize, Serialize};

/// Main application configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Application settings
    pub app: AppConfig,
    /// CORS configuration
    pub cors: CorsConfig,
    /// Database configuration
    pub database: DatabaseConfig,
    /// Session verification configuration
    pub session: SessionConfig,
}

/// Application settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Application environment (development, staging, production)
    pub env: String,
    /// Server host to bind to
    pub host: String,
    /// Server port to bind to
    pub port: u16,
}

/// CORS configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CorsConfig {
    /// Comma-separated list of allowed origins
    pub allowed_origins: String,
}

/// Database configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatabaseConfig {
    /// Database URL
    pub url: String,
    /// Max connections in pool
    pub max_connections: u32,
    /// Connection acquisition timeout in seconds
    pub acquire_timeout_secs: u64,
    /// Run embedded migrations at startup
    pub run_migrations: bool,
}

/// Session verification configuration
///
/// Session tokens are issued by the external auth backend; this service only
/// verifies them. When no secret is provisioned the header renders the
/// indeterminate auth state instead of failing requests.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionConfig {
    /// Shared HS256 secret for verifying session tokens, if provisioned
    pub jwt_secret: Option<String>,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self, String> {
        let app_env = std::env::var("APP_ENV").unwrap_or_else(|_| "development".to_string());

        Ok(Config {
            app: AppConfig {
                env: app_env.clone(),
                host: std::env::var("RECIPESHARE_HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
                port: std::env::var("RECIPESHARE_PORT")
                    .ok()
                    .and_then(|p| p.parse().ok())
                    .unwrap_or(8080),
            },
            cors: {
                let allowed_origins = match std::env::var("CORS_ALLOWED_ORIGINS") {
                    Ok(value) => value,
                    Err(_) if app_env.eq_ignore_ascii_case("production") => {
                        return Err("CORS_ALLOWED_ORIGINS must be set in production".to_string())
                    }
                    Err(_) => "http://localhost:3000".to_string(),
                };

                if app_env.eq_ignore_ascii_case("production") && allowed_origins.trim() == "*" {
                    return Err("CORS_ALLOWED_ORIGINS cannot be '*' in production".to_string());
                }

                CorsConfig { allowed_origins }
            },
            database: DatabaseConfig {
                url: std::env::var("DATABASE_URL")
                    .unwrap_or_else(|_| "postgresql://localhost/recipeshare".to_string()),
                max_connections: std::env::var("DATABASE_MAX_CONNECTIONS")
                    .ok()
                    .and_then(|c| c.parse().ok())
                    .unwrap_or(10),
                acquire_timeout_secs: std::env::var("DATABASE_ACQUIRE_TIMEOUT_SECS")
                    .ok()
                    .and_then(|v| v.parse().ok())
                    .unwrap_or(10),
                run_migrations: std::env::var("DATABASE_RUN_MIGRATIONS")
                    .ok()
                    .and_then(|v| v.parse().ok())
                    .unwrap_or(true),
            },
            session: {
                let jwt_secret = std::env::var("SESSION_JWT_SECRET").ok();
                if jwt_secret.is_none() && app_env.eq_ignore_ascii_case("production") {
                    return Err("SESSION_JWT_SECRET must be set in production".to_string());
                }

                SessionConfig { jwt_secret }
            },
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_apply_outside_production() {
        // Serial-safety: only reads variables this test does not set.
        std::env::remove_var("APP_ENV");
        std::env::remove_var("RECIPESHARE_PORT");

        let config = Config::from_env().expect("default config should load");
        assert_eq!(config.app.port, 8080);
        assert_eq!(config.database.max_connections, 10);
        assert!(config.database.run_migrations);
    }
}

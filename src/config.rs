//! Application configuration loaded from environment variables.
//!
//! Configuration is loaded once at startup and validated before the server starts.
//!
//! ## Storage
//!
//! ```bash
//! # Either a full SQLite URL
//! export DATABASE_URL="sqlite://./storage/url-shortener.db"
//!
//! # Or just the file location
//! export STORAGE_PATH="./storage/url-shortener.db"
//! ```
//!
//! If `DATABASE_URL` is not set, it is built from `STORAGE_PATH`.
//!
//! ## Required Variables
//!
//! - `JWT_SECRET` - HS256 signing secret for bearer tokens
//!
//! ## Optional Variables
//!
//! - `APP_ENV` - `local`, `dev` or `prod` (default: `local`); selects log level and format
//! - `LISTEN` - Bind address (default: `0.0.0.0:3000`)
//! - `RUST_LOG` - Log filter (default depends on `APP_ENV`)
//! - `LOG_FORMAT` - `text` or `json` (default depends on `APP_ENV`)
//! - `REQUEST_TIMEOUT` - Per-request timeout in seconds (default: 4)
//! - `ALIAS_LENGTH` - Length of generated aliases (default: 6)
//! - `ALIAS_MAX_ATTEMPTS` - Generated alias attempts before giving up (default: 10)
//! - `ARGON2_MEMORY_KIB`, `ARGON2_ITERATIONS` - Password hashing cost (default: 19456, 2)

use anyhow::{Context, Result};
use std::env;
use std::fmt;
use std::str::FromStr;

/// Deployment profile. Affects logging only.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Environment {
    Local,
    Dev,
    Prod,
}

impl Environment {
    /// Default `tracing` filter for this profile.
    pub fn default_log_level(&self) -> &'static str {
        match self {
            Environment::Local | Environment::Dev => "debug",
            Environment::Prod => "info",
        }
    }

    /// Default log output format for this profile.
    pub fn default_log_format(&self) -> &'static str {
        match self {
            Environment::Local => "text",
            Environment::Dev | Environment::Prod => "json",
        }
    }
}

impl FromStr for Environment {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "local" => Ok(Environment::Local),
            "dev" => Ok(Environment::Dev),
            "prod" => Ok(Environment::Prod),
            other => anyhow::bail!("APP_ENV must be 'local', 'dev' or 'prod', got '{}'", other),
        }
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Environment::Local => "local",
            Environment::Dev => "dev",
            Environment::Prod => "prod",
        };
        f.write_str(name)
    }
}

/// Service configuration loaded from environment variables.
#[derive(Clone)]
pub struct Config {
    pub env: Environment,
    pub database_url: String,
    pub listen_addr: String,
    pub log_level: String,
    pub log_format: String,
    /// Upper bound for handling a single request, in seconds.
    pub request_timeout: u64,
    /// HS256 secret used to sign and verify bearer tokens.
    /// Loaded from `JWT_SECRET`. Must be non-empty.
    pub jwt_secret: String,
    /// Length of randomly generated aliases.
    pub alias_length: usize,
    /// Generated aliases tried before reporting the alias space as exhausted.
    pub alias_max_attempts: usize,
    /// Argon2 memory cost in KiB.
    pub argon2_memory_kib: u32,
    /// Argon2 iteration count.
    pub argon2_iterations: u32,

    // ── Pool settings ───────────────────────────────────────────────────────
    /// Maximum number of connections in the pool (`DB_MAX_CONNECTIONS`, default: 10).
    pub db_max_connections: u32,
    /// Timeout for acquiring a connection from the pool in seconds
    /// (`DB_CONNECT_TIMEOUT`, default: 30).
    pub db_connect_timeout: u64,
    /// Idle connection lifetime in seconds before it is closed
    /// (`DB_IDLE_TIMEOUT`, default: 600).
    pub db_idle_timeout: u64,
    /// Maximum connection lifetime in seconds (`DB_MAX_LIFETIME`, default: 1800).
    pub db_max_lifetime: u64,
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("env", &self.env)
            .field("database_url", &self.database_url)
            .field("listen_addr", &self.listen_addr)
            .field("log_level", &self.log_level)
            .field("log_format", &self.log_format)
            .field("request_timeout", &self.request_timeout)
            .field("jwt_secret", &"***")
            .field("alias_length", &self.alias_length)
            .field("alias_max_attempts", &self.alias_max_attempts)
            .field("argon2_memory_kib", &self.argon2_memory_kib)
            .field("argon2_iterations", &self.argon2_iterations)
            .field("db_max_connections", &self.db_max_connections)
            .field("db_connect_timeout", &self.db_connect_timeout)
            .field("db_idle_timeout", &self.db_idle_timeout)
            .field("db_max_lifetime", &self.db_max_lifetime)
            .finish()
    }
}

fn parse_env<T: FromStr>(name: &str, default: T) -> T {
    env::var(name)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}

impl Config {
    /// Loads configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if `JWT_SECRET` is missing or `APP_ENV` is unknown.
    pub fn from_env() -> Result<Self> {
        let env_profile: Environment = env::var("APP_ENV")
            .unwrap_or_else(|_| "local".to_string())
            .parse()?;

        let database_url = Self::load_database_url();

        let listen_addr = env::var("LISTEN").unwrap_or_else(|_| "0.0.0.0:3000".to_string());
        let log_level =
            env::var("RUST_LOG").unwrap_or_else(|_| env_profile.default_log_level().to_string());
        let log_format = env::var("LOG_FORMAT")
            .unwrap_or_else(|_| env_profile.default_log_format().to_string());

        let jwt_secret = env::var("JWT_SECRET").context("JWT_SECRET must be set")?;

        Ok(Self {
            env: env_profile,
            database_url,
            listen_addr,
            log_level,
            log_format,
            request_timeout: parse_env("REQUEST_TIMEOUT", 4),
            jwt_secret,
            alias_length: parse_env("ALIAS_LENGTH", 6),
            alias_max_attempts: parse_env("ALIAS_MAX_ATTEMPTS", 10),
            argon2_memory_kib: parse_env("ARGON2_MEMORY_KIB", 19_456),
            argon2_iterations: parse_env("ARGON2_ITERATIONS", 2),
            db_max_connections: parse_env("DB_MAX_CONNECTIONS", 10),
            db_connect_timeout: parse_env("DB_CONNECT_TIMEOUT", 30),
            db_idle_timeout: parse_env("DB_IDLE_TIMEOUT", 600),
            db_max_lifetime: parse_env("DB_MAX_LIFETIME", 1800),
        })
    }

    /// Loads the database URL with fallback to the storage path.
    ///
    /// Priority:
    /// 1. `DATABASE_URL` environment variable
    /// 2. `sqlite://` + `STORAGE_PATH` (default `./storage/url-shortener.db`)
    pub fn load_database_url() -> String {
        if let Ok(url) = env::var("DATABASE_URL") {
            return url;
        }

        let path =
            env::var("STORAGE_PATH").unwrap_or_else(|_| "./storage/url-shortener.db".to_string());

        format!("sqlite://{}", path)
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if any value is out of range or malformed.
    pub fn validate(&self) -> Result<()> {
        if self.log_format != "text" && self.log_format != "json" {
            anyhow::bail!(
                "LOG_FORMAT must be 'text' or 'json', got '{}'",
                self.log_format
            );
        }

        if !self.listen_addr.contains(':') {
            anyhow::bail!(
                "LISTEN must be in format 'host:port', got '{}'",
                self.listen_addr
            );
        }

        if !self.database_url.starts_with("sqlite:") {
            anyhow::bail!(
                "DATABASE_URL must start with 'sqlite:', got '{}'",
                self.database_url
            );
        }

        if self.jwt_secret.is_empty() {
            anyhow::bail!("JWT_SECRET must not be empty");
        }

        if self.request_timeout == 0 {
            anyhow::bail!("REQUEST_TIMEOUT must be greater than 0");
        }

        if !(4..=32).contains(&self.alias_length) {
            anyhow::bail!(
                "ALIAS_LENGTH must be between 4 and 32, got {}",
                self.alias_length
            );
        }

        if self.alias_max_attempts == 0 || self.alias_max_attempts > 1000 {
            anyhow::bail!(
                "ALIAS_MAX_ATTEMPTS must be between 1 and 1000, got {}",
                self.alias_max_attempts
            );
        }

        if self.argon2_memory_kib < 8 {
            anyhow::bail!("ARGON2_MEMORY_KIB must be at least 8");
        }
        if self.argon2_iterations == 0 {
            anyhow::bail!("ARGON2_ITERATIONS must be at least 1");
        }

        if self.db_max_connections == 0 {
            anyhow::bail!("DB_MAX_CONNECTIONS must be at least 1");
        }
        if self.db_connect_timeout == 0 {
            anyhow::bail!("DB_CONNECT_TIMEOUT must be greater than 0");
        }

        Ok(())
    }

    /// Prints configuration summary (without sensitive data).
    pub fn print_summary(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  Environment: {}", self.env);
        tracing::info!("  Listen address: {}", self.listen_addr);
        tracing::info!("  Database: {}", self.database_url);
        tracing::info!("  Log level: {}", self.log_level);
        tracing::info!("  Log format: {}", self.log_format);
        tracing::info!("  Request timeout: {}s", self.request_timeout);
        tracing::info!("  Alias length: {}", self.alias_length);
    }
}

/// Loads and validates configuration from environment variables.
///
/// # Errors
///
/// Returns an error if required variables are missing or validation fails.
///
/// # Note
///
/// This function expects environment variables to be already loaded
/// (e.g., via `dotenvy::dotenv()` in `main.rs`).
pub fn load_from_env() -> Result<Config> {
    let config = Config::from_env()?;
    config.validate()?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    fn test_config() -> Config {
        Config {
            env: Environment::Local,
            database_url: "sqlite://./test.db".to_string(),
            listen_addr: "0.0.0.0:3000".to_string(),
            log_level: "info".to_string(),
            log_format: "text".to_string(),
            request_timeout: 4,
            jwt_secret: "test-secret".to_string(),
            alias_length: 6,
            alias_max_attempts: 10,
            argon2_memory_kib: 19_456,
            argon2_iterations: 2,
            db_max_connections: 10,
            db_connect_timeout: 30,
            db_idle_timeout: 600,
            db_max_lifetime: 1800,
        }
    }

    #[test]
    fn test_config_validation() {
        let mut config = test_config();
        assert!(config.validate().is_ok());

        config.log_format = "invalid".to_string();
        assert!(config.validate().is_err());

        config.log_format = "json".to_string();
        assert!(config.validate().is_ok());

        config.listen_addr = "3000".to_string();
        assert!(config.validate().is_err());

        config.listen_addr = "0.0.0.0:3000".to_string();

        config.database_url = "postgres://localhost/test".to_string();
        assert!(config.validate().is_err());

        config.database_url = "sqlite::memory:".to_string();
        assert!(config.validate().is_ok());

        config.jwt_secret = String::new();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_alias_settings_validation() {
        let mut config = test_config();

        config.alias_length = 2;
        assert!(config.validate().is_err());

        config.alias_length = 6;
        config.alias_max_attempts = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_debug_hides_secret() {
        let printed = format!("{:?}", test_config());
        assert!(!printed.contains("test-secret"));
    }

    #[test]
    fn test_environment_defaults() {
        assert_eq!(Environment::Local.default_log_format(), "text");
        assert_eq!(Environment::Dev.default_log_format(), "json");
        assert_eq!(Environment::Dev.default_log_level(), "debug");
        assert_eq!(Environment::Prod.default_log_level(), "info");
        assert!("staging".parse::<Environment>().is_err());
        assert_eq!("PROD".parse::<Environment>().unwrap(), Environment::Prod);
    }

    #[test]
    #[serial]
    fn test_database_url_from_storage_path() {
        // SAFETY: Tests are run serially due to #[serial], so no concurrent access
        unsafe {
            env::remove_var("DATABASE_URL");
            env::set_var("STORAGE_PATH", "/tmp/shortener.db");
        }

        assert_eq!(Config::load_database_url(), "sqlite:///tmp/shortener.db");

        unsafe {
            env::remove_var("STORAGE_PATH");
        }
    }

    #[test]
    #[serial]
    fn test_database_url_priority() {
        // SAFETY: Tests are run serially
        unsafe {
            env::set_var("DATABASE_URL", "sqlite://from-url.db");
            env::set_var("STORAGE_PATH", "from-path.db");
        }

        let url = Config::load_database_url();

        assert!(url.contains("from-url"));
        assert!(!url.contains("from-path"));

        unsafe {
            env::remove_var("DATABASE_URL");
            env::remove_var("STORAGE_PATH");
        }
    }

    #[test]
    #[serial]
    fn test_from_env_requires_secret() {
        // SAFETY: Tests are run serially
        unsafe {
            env::remove_var("JWT_SECRET");
        }
        assert!(Config::from_env().is_err());

        unsafe {
            env::set_var("JWT_SECRET", "s3cret");
            env::set_var("APP_ENV", "prod");
            env::remove_var("RUST_LOG");
            env::remove_var("LOG_FORMAT");
        }

        let config = Config::from_env().unwrap();
        assert_eq!(config.env, Environment::Prod);
        assert_eq!(config.log_level, "info");
        assert_eq!(config.log_format, "json");
        assert_eq!(config.alias_length, 6);

        unsafe {
            env::remove_var("JWT_SECRET");
            env::remove_var("APP_ENV");
        }
    }
}

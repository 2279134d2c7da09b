use std::num::NonZeroU32;

use dioxus_logger::tracing::Level;

use crate::{error::config::ConfigError, util::password::PasswordHasher};

pub struct Config {
    pub database_url: String,
    pub database_max_connections: u32,
    pub log_level: Level,
    pub slug_max_attempts: u32,
    pub password_hash_iterations: u32,
}

impl Config {
    pub const DEFAULT_DATABASE_MAX_CONNECTIONS: u32 = 10;
    pub const DEFAULT_SLUG_MAX_ATTEMPTS: u32 = 10;

    /// Reads configuration from environment variables.
    ///
    /// `DATABASE_URL` is required; every other variable falls back to its default.
    /// Counts must be greater than zero.
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            database_url: required("DATABASE_URL")?,
            database_max_connections: parsed_non_zero(
                "DATABASE_MAX_CONNECTIONS",
                Self::DEFAULT_DATABASE_MAX_CONNECTIONS,
            )?,
            log_level: parsed("LOG_LEVEL", Level::INFO)?,
            slug_max_attempts: parsed_non_zero(
                "SLUG_MAX_ATTEMPTS",
                Self::DEFAULT_SLUG_MAX_ATTEMPTS,
            )?,
            password_hash_iterations: parsed_non_zero(
                "PASSWORD_HASH_ITERATIONS",
                PasswordHasher::DEFAULT_ITERATIONS,
            )?,
        })
    }

    pub fn password_hasher(&self) -> PasswordHasher {
        PasswordHasher::new(self.password_hash_iterations)
    }
}

fn required(var: &str) -> Result<String, ConfigError> {
    std::env::var(var).map_err(|_| ConfigError::MissingEnvVar(var.to_string()))
}

fn parsed<T>(var: &str, default: T) -> Result<T, ConfigError>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    match std::env::var(var) {
        Ok(value) => value
            .trim()
            .parse()
            .map_err(|e: T::Err| ConfigError::InvalidEnvValue {
                var: var.to_string(),
                reason: e.to_string(),
            }),
        Err(_) => Ok(default),
    }
}

fn parsed_non_zero(var: &str, default: u32) -> Result<u32, ConfigError> {
    let default = NonZeroU32::new(default).unwrap_or(NonZeroU32::MIN);

    Ok(parsed(var, default)?.get())
}

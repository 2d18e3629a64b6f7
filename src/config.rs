use std::net::{AddrParseError, SocketAddr};
use std::num::ParseIntError;

use thiserror::Error;

pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";
pub const DEFAULT_BASE_PATH: &str = "/api";
pub const DEFAULT_POOL_MAX_SIZE: u32 = 10;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("BIND_ADDR `{value}` is not a socket address: {source}")]
    BindAddr { value: String, source: AddrParseError },
    #[error("DB_POOL_MAX_SIZE `{value}` is not a positive integer")]
    PoolSize { value: String, source: Option<ParseIntError> },
    #[error("could not load .env file: {0}")]
    EnvFile(#[from] dotenvy::Error),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Config {
    /// Postgres connection string; `None` runs on the in-memory store.
    pub database_url: Option<String>,
    pub bind_addr: SocketAddr,
    /// Route prefix, either empty or `/segment[/segment...]`.
    pub base_path: String,
    pub pool_max_size: u32,
}

impl Config {
    /// Reads `.env` if present, then the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        load_env_file(dotenvy::dotenv())?;
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError> where F: Fn(&str) -> Option<String> {
        let database_url = lookup("DATABASE_URL").filter(|url| !url.trim().is_empty());

        let bind_addr = lookup("BIND_ADDR").unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string());
        let bind_addr = bind_addr
            .parse::<SocketAddr>()
            .map_err(|source| ConfigError::BindAddr { value: bind_addr.clone(), source })?;

        let base_path = normalize_base_path(
            &lookup("NOTES_BASE_PATH").unwrap_or_else(|| DEFAULT_BASE_PATH.to_string())
        );

        let pool_max_size = match lookup("DB_POOL_MAX_SIZE") {
            None => DEFAULT_POOL_MAX_SIZE,
            Some(value) => match value.trim().parse::<u32>() {
                Ok(0) => return Err(ConfigError::PoolSize { value, source: None }),
                Ok(size) => size,
                Err(err) => return Err(ConfigError::PoolSize { value, source: Some(err) }),
            },
        };

        Ok(Config { database_url, bind_addr, base_path, pool_max_size })
    }
}

// A missing .env is fine, an unreadable or malformed one is not.
fn load_env_file<T>(loaded: Result<T, dotenvy::Error>) -> Result<(), ConfigError> {
    match loaded {
        Ok(_) => Ok(()),
        Err(err) if err.not_found() => Ok(()),
        Err(err) => Err(ConfigError::EnvFile(err)),
    }
}

fn normalize_base_path(raw: &str) -> String {
    let trimmed = raw.trim().trim_matches('/');
    if trimmed.is_empty() {
        String::new()
    } else {
        format!("/{trimmed}")
    }
}

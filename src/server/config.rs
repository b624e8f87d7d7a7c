use std::{path::PathBuf, str::FromStr};

use crate::server::error::{config::ConfigError, AppError};

const DEFAULT_BIND_ADDRESS: &str = "0.0.0.0:8080";
const DEFAULT_CORS_ORIGIN: &str = "http://localhost:5173";
const DEFAULT_UPLOAD_MAX_BYTES: usize = 10 * 1024 * 1024;

pub struct Config {
    pub database_url: String,
    pub upload_path: PathBuf,

    pub bind_address: String,
    pub cors_origin: String,
    pub upload_max_bytes: usize,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        Ok(Self {
            database_url: required("DATABASE_URL")?,
            upload_path: PathBuf::from(required("UPLOAD_PATH")?),
            bind_address: std::env::var("BIND_ADDRESS")
                .unwrap_or_else(|_| DEFAULT_BIND_ADDRESS.to_string()),
            cors_origin: std::env::var("CORS_ORIGIN")
                .unwrap_or_else(|_| DEFAULT_CORS_ORIGIN.to_string()),
            upload_max_bytes: parse_or(
                "UPLOAD_MAX_BYTES",
                std::env::var("UPLOAD_MAX_BYTES").ok(),
                DEFAULT_UPLOAD_MAX_BYTES,
            )?,
        })
    }
}

fn required(name: &str) -> Result<String, ConfigError> {
    std::env::var(name).map_err(|_| ConfigError::MissingEnvVar(name.to_string()))
}

/// Parses an optional variable, falling back to `default` when it is unset.
fn parse_or<T: FromStr>(name: &str, value: Option<String>, default: T) -> Result<T, ConfigError> {
    match value {
        None => Ok(default),
        Some(value) => value
            .trim()
            .parse()
            .map_err(|_| ConfigError::InvalidEnvVar {
                name: name.to_string(),
                value,
            }),
    }
}

use anyhow::{Context, Result};
use dotenvy::dotenv;
use std::env;
use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;

use crate::utils::retry::RetryPolicy;

#[derive(Clone, Debug)]
pub struct Config {
    pub server_addr: String,
    pub database_url: String,

    // On-disk artifacts
    pub face_data_dir: PathBuf,
    pub model_path: PathBuf,
    pub labels_path: PathBuf,
    pub templates_dir: PathBuf,
    pub log_dir: PathBuf,

    // Punch-out lookup
    pub punch_out_max_attempts: u32,
    pub punch_out_retry_delay_ms: u64,

    // Rate limiting
    pub rate_login_per_min: u32,
    pub rate_register_per_min: u32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server_addr: "127.0.0.1:5000".to_string(),
            database_url: "sqlite://database/interns.db".to_string(),
            face_data_dir: PathBuf::from("face_data"),
            model_path: PathBuf::from("face_model.tflite"),
            labels_path: PathBuf::from("label.txt"),
            templates_dir: PathBuf::from("templates"),
            log_dir: PathBuf::from("logs"),
            punch_out_max_attempts: 3,
            punch_out_retry_delay_ms: 200,
            rate_login_per_min: 60,
            rate_register_per_min: 30,
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenv().ok();

        let defaults = Self::default();

        Ok(Self {
            server_addr: env::var("SERVER_ADDR").unwrap_or(defaults.server_addr),
            database_url: env::var("DATABASE_URL").unwrap_or(defaults.database_url),

            face_data_dir: env_or("FACE_DATA_DIR", defaults.face_data_dir)?,
            model_path: env_or("MODEL_PATH", defaults.model_path)?,
            labels_path: env_or("LABELS_PATH", defaults.labels_path)?,
            templates_dir: env_or("TEMPLATES_DIR", defaults.templates_dir)?,
            log_dir: env_or("LOG_DIR", defaults.log_dir)?,

            punch_out_max_attempts: env_or(
                "PUNCH_OUT_MAX_ATTEMPTS",
                defaults.punch_out_max_attempts,
            )?,
            punch_out_retry_delay_ms: env_or(
                "PUNCH_OUT_RETRY_DELAY_MS",
                defaults.punch_out_retry_delay_ms,
            )?,

            rate_login_per_min: env_or("RATE_LOGIN_PER_MIN", defaults.rate_login_per_min)?,
            rate_register_per_min: env_or(
                "RATE_REGISTER_PER_MIN",
                defaults.rate_register_per_min,
            )?,
        })
    }

    pub fn punch_out_retry(&self) -> RetryPolicy {
        RetryPolicy::new(
            self.punch_out_max_attempts,
            Duration::from_millis(self.punch_out_retry_delay_ms),
        )
    }
}

/// Reads `key` from the environment, falling back to `default` when unset.
/// A value that is set but does not parse is an error.
fn env_or<T>(key: &str, default: T) -> Result<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match env::var(key) {
        Ok(raw) => raw
            .trim()
            .parse()
            .with_context(|| format!("{key} has an invalid value: {raw:?}")),
        Err(_) => Ok(default),
    }
}

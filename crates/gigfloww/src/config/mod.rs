use std::env;
use std::fmt;
use std::time::Duration;

use crate::signup::{AttachmentPolicy, SessionPolicy, DEFAULT_MAX_RESUME_BYTES};

const DEFAULT_SUBMIT_DELAY_MS: u64 = 2_000;

/// Distinguishes runtime behavior for different stages of the tool.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppEnvironment {
    Development,
    Test,
    Production,
}

impl AppEnvironment {
    fn from_str(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "prod" | "production" => Self::Production,
            "test" | "ci" => Self::Test,
            _ => Self::Development,
        }
    }
}

/// Top-level configuration for the application.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub environment: AppEnvironment,
    pub signup: SignupConfig,
    pub telemetry: TelemetryConfig,
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let environment = AppEnvironment::from_str(
            &env::var("APP_ENV").unwrap_or_else(|_| "development".to_string()),
        );

        let submit_delay_ms = parse_u64("SIGNUP_SUBMIT_DELAY_MS", DEFAULT_SUBMIT_DELAY_MS)?;
        let max_resume_bytes = parse_u64("SIGNUP_MAX_RESUME_BYTES", DEFAULT_MAX_RESUME_BYTES)?;
        if max_resume_bytes == 0 {
            return Err(ConfigError::InvalidNumber {
                key: "SIGNUP_MAX_RESUME_BYTES",
            });
        }

        let log_level = env::var("APP_LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

        Ok(Self {
            environment,
            signup: SignupConfig {
                submit_delay: Duration::from_millis(submit_delay_ms),
                max_resume_bytes,
            },
            telemetry: TelemetryConfig { log_level },
        })
    }
}

fn parse_u64(key: &'static str, default: u64) -> Result<u64, ConfigError> {
    match env::var(key) {
        Ok(raw) => raw
            .trim()
            .parse::<u64>()
            .map_err(|_| ConfigError::InvalidNumber { key }),
        Err(_) => Ok(default),
    }
}

/// Knobs for the signup form session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignupConfig {
    pub submit_delay: Duration,
    pub max_resume_bytes: u64,
}

impl SignupConfig {
    pub fn session_policy(&self) -> SessionPolicy {
        SessionPolicy {
            submit_delay: self.submit_delay,
            attachments: AttachmentPolicy::new(self.max_resume_bytes),
        }
    }
}

impl Default for SignupConfig {
    fn default() -> Self {
        Self {
            submit_delay: Duration::from_millis(DEFAULT_SUBMIT_DELAY_MS),
            max_resume_bytes: DEFAULT_MAX_RESUME_BYTES,
        }
    }
}

/// Tracing controls.
#[derive(Debug, Clone)]
pub struct TelemetryConfig {
    pub log_level: String,
}

#[derive(Debug)]
pub enum ConfigError {
    InvalidNumber { key: &'static str },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidNumber { key } => {
                write!(f, "{key} must be a positive whole number")
            }
        }
    }
}

impl std::error::Error for ConfigError {}

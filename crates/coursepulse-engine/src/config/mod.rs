use std::env;
use std::fmt;

use crate::analysis::scoring::WeightVector;

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

/// Top-level configuration: runtime environment, telemetry, and the default
/// weight vector handed to scoring calls when the caller has no override.
/// The engine itself stays stateless; this is caller-side configuration.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub environment: AppEnvironment,
    pub telemetry: TelemetryConfig,
    pub weights: WeightVector,
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let environment = AppEnvironment::from_str(
            &env::var("APP_ENV").unwrap_or_else(|_| "development".to_string()),
        );

        let log_level = env::var("APP_LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

        Ok(Self {
            environment,
            telemetry: TelemetryConfig { log_level },
            weights: load_weights()?,
        })
    }
}

fn load_weights() -> Result<WeightVector, ConfigError> {
    let defaults = WeightVector::default();
    Ok(WeightVector {
        impact: weight_var("APP_WEIGHT_IMPACT", defaults.impact)?,
        urgency: weight_var("APP_WEIGHT_URGENCY", defaults.urgency)?,
        effort: weight_var("APP_WEIGHT_EFFORT", defaults.effort)?,
        strategic: weight_var("APP_WEIGHT_STRATEGIC", defaults.strategic)?,
        trend: weight_var("APP_WEIGHT_TREND", defaults.trend)?,
    })
}

fn weight_var(name: &'static str, default: f64) -> Result<f64, ConfigError> {
    let raw = match env::var(name) {
        Ok(raw) => raw,
        Err(_) => return Ok(default),
    };

    let value = raw
        .trim()
        .parse::<f64>()
        .map_err(|_| ConfigError::InvalidWeight { name })?;
    if !value.is_finite() {
        return Err(ConfigError::InvalidWeight { name });
    }

    Ok(value)
}

/// Tracing controls.
#[derive(Debug, Clone)]
pub struct TelemetryConfig {
    pub log_level: String,
}

#[derive(Debug)]
pub enum ConfigError {
    InvalidWeight { name: &'static str },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidWeight { name } => {
                write!(f, "{name} must be a finite number")
            }
        }
    }
}

impl std::error::Error for ConfigError {}

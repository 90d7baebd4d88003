use crate::portfolio::{Agency, ValidationError};
use std::env;
use std::fmt;
use std::path::PathBuf;

const DEFAULT_AGENCY_NAME: &str = "VancoVista";
const DEFAULT_ADDRESS_FILE: &str = "address_data.txt";
const DEFAULT_PROPERTY_FILE: &str = "property_data.txt";

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
    pub agency: AgencyConfig,
    pub telemetry: TelemetryConfig,
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let environment = AppEnvironment::from_str(
            &env::var("APP_ENV").unwrap_or_else(|_| "development".to_string()),
        );

        let name = env::var("AGENCY_NAME").unwrap_or_else(|_| DEFAULT_AGENCY_NAME.to_string());
        Agency::validate_name(&name).map_err(ConfigError::InvalidAgencyName)?;

        let address_file = data_file("AGENCY_ADDRESS_FILE", DEFAULT_ADDRESS_FILE)?;
        let property_file = data_file("AGENCY_PROPERTY_FILE", DEFAULT_PROPERTY_FILE)?;

        let log_level = env::var("APP_LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

        Ok(Self {
            environment,
            agency: AgencyConfig {
                name,
                address_file,
                property_file,
            },
            telemetry: TelemetryConfig { log_level },
        })
    }
}

fn data_file(var: &'static str, default: &str) -> Result<PathBuf, ConfigError> {
    match env::var(var) {
        Ok(value) if value.trim().is_empty() => Err(ConfigError::EmptyPath { var }),
        Ok(value) => Ok(PathBuf::from(value)),
        Err(_) => Ok(PathBuf::from(default)),
    }
}

/// Agency identity and the two listing files it is loaded from.
#[derive(Debug, Clone)]
pub struct AgencyConfig {
    pub name: String,
    pub address_file: PathBuf,
    pub property_file: PathBuf,
}

/// Tracing controls.
#[derive(Debug, Clone)]
pub struct TelemetryConfig {
    pub log_level: String,
}

#[derive(Debug)]
pub enum ConfigError {
    InvalidAgencyName(ValidationError),
    EmptyPath { var: &'static str },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidAgencyName(err) => write!(f, "AGENCY_NAME is invalid: {err}"),
            ConfigError::EmptyPath { var } => write!(f, "{var} must not be empty"),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::InvalidAgencyName(err) => Some(err),
            ConfigError::EmptyPath { .. } => None,
        }
    }
}

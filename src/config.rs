//! Configuration management for the annotator.
//!
//! This module handles loading configuration from environment variables,
//! with optional `.env` support via `dotenvy`.

use crate::error::{ConfigError, ConfigResult};
use crate::writer::DEFAULT_RESULTS_DIR;
use std::env;

/// Runtime configuration for annotation and results output.
#[derive(Debug, Clone)]
pub struct Config {
    /// Target environment label, absent when `ALLURE_ENVIRONMENT` is unset or empty
    pub environment: Option<String>,

    /// Directory result records are written to (default: "allure-results")
    pub results_dir: String,

    /// Log level (default: "error")
    pub log_level: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// All variables are optional:
    /// - `ALLURE_ENVIRONMENT`: environment label attached to each test
    /// - `ALLURE_RESULTS_DIR`: results directory (default: "allure-results")
    /// - `LOG_LEVEL`: logging level (default: "error")
    pub fn from_env() -> ConfigResult<Self> {
        // Try to load .env file if it exists (but don't fail if it doesn't)
        let _ = dotenvy::dotenv();

        let environment = env::var("ALLURE_ENVIRONMENT")
            .ok()
            .filter(|value| !value.is_empty());

        let results_dir = match env::var("ALLURE_RESULTS_DIR") {
            Ok(val) => {
                if val.trim().is_empty() {
                    return Err(ConfigError::InvalidValue {
                        var: "ALLURE_RESULTS_DIR".to_string(),
                        reason: "Cannot be empty".to_string(),
                    });
                }
                val
            }
            Err(_) => DEFAULT_RESULTS_DIR.to_string(),
        };

        let log_level = env::var("LOG_LEVEL").unwrap_or_else(|_| "error".to_string());

        Ok(Config {
            environment,
            results_dir,
            log_level,
        })
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            environment: None,
            results_dir: DEFAULT_RESULTS_DIR.to_string(),
            log_level: "error".to_string(),
        }
    }
}

// src/environment.rs
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use tracing::info;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EnvironmentConfig {
    pub review_api_url: String,
    pub request_timeout_secs: u64,
}

#[derive(Debug, Deserialize)]
struct ConfigFile {
    local: EnvironmentConfig,
    production: EnvironmentConfig,
}

impl EnvironmentConfig {
    /// Load configuration based on environment
    pub fn load() -> Result<Self> {
        let environment = Self::get_environment();
        info!("Loading configuration for environment: {}", environment);

        let mut config = Self::load_from_file(&environment)?;

        // REVIEW_API_URL always wins over the file value
        if let Ok(url) = std::env::var("REVIEW_API_URL") {
            config.review_api_url = url;
        }

        Ok(config)
    }

    fn get_environment() -> String {
        std::env::var("RECRUVIEW_ENV")
            .or_else(|_| std::env::var("ENVIRONMENT"))
            .or_else(|_| std::env::var("ENV"))
            .unwrap_or_else(|_| "local".to_string())
    }

    fn load_from_file(environment: &str) -> Result<Self> {
        let config_path = std::path::PathBuf::from("config.yaml");
        if !config_path.exists() {
            anyhow::bail!("config.yaml not found in current directory. Server cannot start without configuration.");
        }

        let config_content =
            std::fs::read_to_string(&config_path).context("Failed to read config.yaml")?;

        let config_file: ConfigFile =
            serde_yaml::from_str(&config_content).context("Failed to parse config.yaml")?;

        Ok(Self::select(config_file, environment))
    }

    fn select(config_file: ConfigFile, environment: &str) -> Self {
        match environment {
            "production" => config_file.production,
            _ => config_file.local,
        }
    }
}

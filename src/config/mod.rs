use crate::adapters::vision;
use crate::domain::ports::ConfigProvider;
use crate::utils::error::{OcrError, Result};
use std::env;

#[derive(Debug, Clone)]
pub struct ServiceConfig {
    pub host: String,
    pub port: u16,
    pub api_key: String,
    pub vision_endpoint: String,
    pub timeout_seconds: u64,
}

impl ServiceConfig {
    /// Reads configuration from the environment. Only `API_KEY` is required;
    /// everything else falls back to a sensible default.
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            host: env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            port: env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse()
                .unwrap_or(8080),
            api_key: env::var("API_KEY").map_err(|_| OcrError::ConfigError {
                message: "API_KEY environment variable is required".to_string(),
            })?,
            vision_endpoint: env::var("VISION_ENDPOINT")
                .unwrap_or_else(|_| vision::DEFAULT_ENDPOINT.to_string()),
            timeout_seconds: env::var("REQUEST_TIMEOUT_SECONDS")
                .unwrap_or_else(|_| "30".to_string())
                .parse()
                .unwrap_or(30),
        })
    }
}

impl ConfigProvider for ServiceConfig {
    fn vision_endpoint(&self) -> &str {
        &self.vision_endpoint
    }

    fn api_key(&self) -> &str {
        &self.api_key
    }

    fn timeout_seconds(&self) -> u64 {
        self.timeout_seconds
    }
}

impl crate::utils::validation::Validate for ServiceConfig {
    fn validate(&self) -> Result<()> {
        use crate::utils::validation::*;

        // 驗證 Vision 端點
        validate_url("vision_endpoint", &self.vision_endpoint)?;

        // 驗證 API key
        validate_non_empty_string("api_key", &self.api_key)?;

        // 驗證超時範圍
        validate_range("timeout_seconds", self.timeout_seconds, 1, 300)?;

        tracing::info!("✅ Service configuration validation passed");
        Ok(())
    }
}

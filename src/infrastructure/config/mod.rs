use crate::domain::error::{AppError, Result};
use crate::domain::llm_config::LLMConfig;
use figment::providers::{Env, Format, Serialized, Toml};
use figment::Figment;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use validator::Validate;

pub const DEFAULT_CONFIG_FILE: &str = "Enricher.toml";
pub const DEFAULT_ENV_PREFIX: &str = "ENRICHER_";
pub const API_KEY_VAR: &str = "GLM_API_KEY";

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct AppConfig {
    #[validate(length(min = 1))]
    pub input_path: String,
    #[validate(length(min = 1))]
    pub output_path: String,
    /// Fixes ids-independent randomness (timestamps, status) for reproducible runs
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
    #[validate(nested)]
    pub llm: LLMConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            input_path: "./EdX.csv".to_string(),
            output_path: "./COURSE_CATALOG.csv".to_string(),
            seed: None,
            llm: LLMConfig::default(),
        }
    }
}

impl AppConfig {
    pub fn input_path(&self) -> &Path {
        Path::new(&self.input_path)
    }

    pub fn output_path(&self) -> &Path {
        Path::new(&self.output_path)
    }
}

/// Layers defaults, the TOML file, prefixed environment variables and CLI paths.
pub struct ConfigService {
    config_file: PathBuf,
    env_prefix: String,
    api_key_var: String,
}

impl ConfigService {
    pub fn new() -> Self {
        Self {
            config_file: PathBuf::from(DEFAULT_CONFIG_FILE),
            env_prefix: DEFAULT_ENV_PREFIX.to_string(),
            api_key_var: API_KEY_VAR.to_string(),
        }
    }

    pub fn with_config_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.config_file = path.into();
        self
    }

    pub fn with_env_prefix(mut self, prefix: &str) -> Self {
        self.env_prefix = prefix.to_string();
        self
    }

    pub fn with_api_key_var(mut self, name: &str) -> Self {
        self.api_key_var = name.to_string();
        self
    }

    /// Positional args: `[input] [output]`.
    pub fn load(&self, args: &[String]) -> Result<AppConfig> {
        let mut figment = Figment::from(Serialized::defaults(AppConfig::default()))
            .merge(Toml::file(&self.config_file))
            .merge(Env::prefixed(&self.env_prefix).split("__"));

        if let Some(input) = args.first() {
            figment = figment.merge(Serialized::default("input_path", input));
        }
        if let Some(output) = args.get(1) {
            figment = figment.merge(Serialized::default("output_path", output));
        }

        let mut config: AppConfig = figment.extract()?;
        config.validate()?;

        if config.llm.api_key.is_none() {
            config.llm.api_key = self.resolve_api_key(&config.llm);
        }

        Ok(config)
    }

    /// Environment first, then the secret file. Absence is not an error.
    pub fn resolve_api_key(&self, llm: &LLMConfig) -> Option<String> {
        if let Ok(key) = std::env::var(&self.api_key_var) {
            if !key.trim().is_empty() {
                return Some(key.trim().to_string());
            }
        }

        match self.read_secret_file(Path::new(&llm.api_key_file)) {
            Ok(key) => key,
            Err(err) => {
                tracing::debug!(error = %err, "Secret file unavailable");
                None
            }
        }
    }

    fn read_secret_file(&self, path: &Path) -> Result<Option<String>> {
        if !path.is_file() {
            return Ok(None);
        }

        let entries = dotenvy::from_path_iter(path).map_err(|e| {
            AppError::ConfigError(format!("Failed to read {}: {}", path.display(), e))
        })?;

        for entry in entries {
            let (key, value) = entry.map_err(|e| {
                AppError::ConfigError(format!("Malformed entry in {}: {}", path.display(), e))
            })?;
            if key == self.api_key_var && !value.trim().is_empty() {
                return Ok(Some(value.trim().to_string()));
            }
        }

        Ok(None)
    }
}

impl Default for ConfigService {
    fn default() -> Self {
        Self::new()
    }
}

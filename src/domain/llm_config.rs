use serde::{Deserialize, Serialize};
use validator::Validate;

pub const DEFAULT_BASE_URL: &str = "https://open.bigmodel.cn/api/paas/v4";
pub const DEFAULT_MODEL: &str = "glm-4.6";

#[derive(Debug, Serialize, Deserialize, Clone, Validate)]
pub struct LLMConfig {
    /// Set to false to force the template strategy even when a key exists.
    pub enabled: bool,
    #[validate(url)]
    pub base_url: String,
    #[validate(length(min = 1))]
    pub model: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,
    /// Secret file holding a `GLM_API_KEY=` line, consulted after the environment.
    pub api_key_file: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_tokens: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(range(min = 0.0, max = 2.0))]
    pub temperature: Option<f32>,
    #[validate(range(min = 1, max = 300))]
    pub timeout_secs: u64,
}

impl Default for LLMConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            base_url: DEFAULT_BASE_URL.to_string(),
            model: DEFAULT_MODEL.to_string(),
            api_key: None,
            api_key_file: ".env/GLM_API_KEY.env".to_string(),
            max_tokens: Some(500),
            temperature: Some(0.7),
            timeout_secs: 30,
        }
    }
}

impl LLMConfig {
    pub fn timeout(&self) -> std::time::Duration {
        std::time::Duration::from_secs(self.timeout_secs)
    }

    /// The remote strategy runs only when it is enabled and a key was resolved.
    pub fn remote_ready(&self) -> bool {
        self.enabled
            && self
                .api_key
                .as_deref()
                .map(|key| !key.trim().is_empty())
                .unwrap_or(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        assert!(LLMConfig::default().validate().is_ok());
    }

    #[test]
    fn test_remote_ready_requires_key() {
        let mut config = LLMConfig::default();
        assert!(!config.remote_ready());

        config.api_key = Some("   ".to_string());
        assert!(!config.remote_ready());

        config.api_key = Some("secret".to_string());
        assert!(config.remote_ready());

        config.enabled = false;
        assert!(!config.remote_ready());
    }

    #[test]
    fn test_rejects_out_of_range_timeout() {
        let config = LLMConfig {
            timeout_secs: 0,
            ..LLMConfig::default()
        };
        assert!(config.validate().is_err());
    }
}

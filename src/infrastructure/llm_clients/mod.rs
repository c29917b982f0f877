pub mod chat_completions;

use crate::domain::error::Result;
use crate::domain::llm_config::LLMConfig;
use async_trait::async_trait;

pub use chat_completions::ChatCompletionsClient;

#[async_trait]
pub trait LLMClient {
    /// Send one system + user exchange and return the raw message content.
    async fn generate(&self, config: &LLMConfig, system: &str, user: &str) -> Result<String>;
}

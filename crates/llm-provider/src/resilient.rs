use async_trait::async_trait;
use tracing::{info, warn};

use crate::error::ProviderError;
use crate::providers::gemini::{GeminiProvider, DEFAULT_GEMINI_MODEL};
use crate::providers::mock::MockProvider;
use crate::providers::openai::{OpenAiProvider, DEFAULT_OPENAI_MODEL};
use crate::traits::LlmProvider;
use crate::types::Turn;

/// Primary provider plus a deterministic mock fallback behind the same
/// contract. The mock does no I/O, so once the primary is caught this
/// layer always resolves — upstream outages never reach the chat user.
pub struct ResilientProvider {
    primary: Box<dyn LlmProvider>,
    fallback: MockProvider,
}

impl ResilientProvider {
    pub fn new(primary: Box<dyn LlmProvider>) -> Self {
        Self {
            primary,
            fallback: MockProvider,
        }
    }

    /// Pick the primary from the environment, first match wins:
    /// GEMINI_API_KEY, then OPENAI_API_KEY, then the mock. Fixed for the
    /// process lifetime.
    pub fn from_env() -> Self {
        if let Some(key) = env_key("GEMINI_API_KEY") {
            let model = env_model("GEMINI_MODEL", DEFAULT_GEMINI_MODEL);
            info!("using Gemini provider: {}", model);
            return Self::new(Box::new(GeminiProvider::new(key, model)));
        }

        if let Some(key) = env_key("OPENAI_API_KEY") {
            let model = env_model("OPENAI_MODEL", DEFAULT_OPENAI_MODEL);
            info!("using OpenAI provider: {}", model);
            return Self::new(Box::new(OpenAiProvider::new(key, model)));
        }

        warn!("no provider API key set, using mock provider");
        Self::new(Box::new(MockProvider))
    }
}

fn env_key(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|k| !k.is_empty())
}

fn env_model(name: &str, default: &str) -> String {
    std::env::var(name)
        .ok()
        .filter(|m| !m.is_empty())
        .unwrap_or_else(|| default.to_string())
}

#[async_trait]
impl LlmProvider for ResilientProvider {
    async fn generate(&self, turns: &[Turn]) -> Result<String, ProviderError> {
        match self.primary.generate(turns).await {
            Ok(text) => Ok(text),
            Err(err) => {
                // Exactly one retry, always against the mock. Never the
                // same failing primary again.
                warn!(
                    "{} provider failed, falling back to mock: {}",
                    self.primary.name(),
                    err
                );
                self.fallback.generate(turns).await
            }
        }
    }

    fn name(&self) -> &'static str {
        "resilient"
    }
}

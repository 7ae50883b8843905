use async_trait::async_trait;

use crate::error::ProviderError;
use crate::traits::LlmProvider;
use crate::types::{Role, Turn};

/// Deterministic provider used as the fallback tier and as a test fixture.
/// Echoes the most recent user turn; performs no I/O and never fails.
pub struct MockProvider;

#[async_trait]
impl LlmProvider for MockProvider {
    async fn generate(&self, turns: &[Turn]) -> Result<String, ProviderError> {
        let prompt = turns
            .iter()
            .rev()
            .find(|t| t.role == Role::User)
            .map(|t| t.content.as_str())
            .filter(|c| !c.is_empty())
            .unwrap_or("How can I help?");
        Ok(format!("Mock response: {}", prompt))
    }

    fn name(&self) -> &'static str {
        "mock"
    }
}

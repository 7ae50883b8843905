use async_trait::async_trait;

use crate::error::ProviderError;
use crate::types::Turn;

#[async_trait]
pub trait LlmProvider: Send + Sync {
    /// Produce a single completed text response for the given history.
    /// `turns` is the full visible conversation at call time.
    async fn generate(&self, turns: &[Turn]) -> Result<String, ProviderError>;

    /// Get the provider name
    fn name(&self) -> &'static str;
}

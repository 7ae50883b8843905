use anyhow::Result;
use async_trait::async_trait;
use llm_provider::Role;
use plan_extract::Plan;
use uuid::Uuid;

use crate::types::{ChatMessage, ChatRef};

/// Storage port for chats and their messages, scoped per user. `None`
/// from the chat-scoped operations means the chat does not exist for
/// that user; `Err` is reserved for backend failures, so persistent
/// implementations can slot in behind the same contract.
#[async_trait]
pub trait ChatStore: Send + Sync {
    async fn list_chats(&self, user_id: &str) -> Result<Vec<ChatRef>>;

    async fn create_chat(&self, user_id: &str, name: Option<String>) -> Result<ChatRef>;

    async fn messages(&self, user_id: &str, chat_id: Uuid) -> Result<Option<Vec<ChatMessage>>>;

    async fn append_message(
        &self,
        user_id: &str,
        chat_id: Uuid,
        role: Role,
        content: String,
        plan: Option<Plan>,
    ) -> Result<Option<ChatMessage>>;
}

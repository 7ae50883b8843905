use std::collections::HashMap;

use anyhow::Result;
use async_trait::async_trait;
use chrono::Utc;
use llm_provider::Role;
use plan_extract::Plan;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::store::ChatStore;
use crate::types::{ChatMessage, ChatRef};

struct ChatRecord {
    chat: ChatRef,
    messages: Vec<ChatMessage>,
}

/// Process-lifetime store: per-user chat lists behind one RwLock. Chats
/// keep insertion order so listings are stable.
#[derive(Default)]
pub struct MemoryChatStore {
    inner: RwLock<HashMap<String, Vec<ChatRecord>>>,
}

impl MemoryChatStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ChatStore for MemoryChatStore {
    async fn list_chats(&self, user_id: &str) -> Result<Vec<ChatRef>> {
        let inner = self.inner.read().await;
        Ok(inner
            .get(user_id)
            .map(|records| records.iter().map(|r| r.chat.clone()).collect())
            .unwrap_or_default())
    }

    async fn create_chat(&self, user_id: &str, name: Option<String>) -> Result<ChatRef> {
        let mut inner = self.inner.write().await;
        let records = inner.entry(user_id.to_string()).or_default();
        let name = name
            .filter(|n| !n.is_empty())
            .unwrap_or_else(|| format!("Chat {}", records.len() + 1));
        let chat = ChatRef {
            id: Uuid::new_v4(),
            name,
            created_at: Utc::now(),
        };
        records.push(ChatRecord {
            chat: chat.clone(),
            messages: Vec::new(),
        });
        Ok(chat)
    }

    async fn messages(&self, user_id: &str, chat_id: Uuid) -> Result<Option<Vec<ChatMessage>>> {
        let inner = self.inner.read().await;
        Ok(inner
            .get(user_id)
            .and_then(|records| records.iter().find(|r| r.chat.id == chat_id))
            .map(|r| r.messages.clone()))
    }

    async fn append_message(
        &self,
        user_id: &str,
        chat_id: Uuid,
        role: Role,
        content: String,
        plan: Option<Plan>,
    ) -> Result<Option<ChatMessage>> {
        let mut inner = self.inner.write().await;
        let record = inner
            .get_mut(user_id)
            .and_then(|records| records.iter_mut().find(|r| r.chat.id == chat_id));
        let Some(record) = record else {
            return Ok(None);
        };

        let message = ChatMessage {
            id: Uuid::new_v4(),
            role,
            content,
            created_at: Utc::now(),
            plan,
        };
        record.messages.push(message.clone());
        Ok(Some(message))
    }
}

use std::sync::Arc;

use anyhow::Result;
use llm_provider::{LlmProvider, Role, Turn};
use plan_extract::{default_plan, extract_plan, Plan};
use tracing::warn;
use uuid::Uuid;

use crate::store::ChatStore;
use crate::types::ChatExchange;

/// Literal token left in the assistant text where rendering splices in
/// the structured plan view.
pub const PLAN_PLACEHOLDER: &str = "{{PLAN}}";

const TRIGGER_PHRASE: &str = "project plan";

/// Orchestrates one chat turn: store the user message, route it either
/// through the planning path or the plain-conversation path, store the
/// assistant reply.
pub struct ChatEngine<P> {
    store: Arc<dyn ChatStore>,
    provider: P,
}

impl<P: LlmProvider> ChatEngine<P> {
    pub fn new(store: Arc<dyn ChatStore>, provider: P) -> Self {
        Self { store, provider }
    }

    /// `None` means the chat does not exist for this user. Provider
    /// failures on the plain path do surface here; behind the resilient
    /// wrapper they should not occur.
    pub async fn send_message(
        &self,
        user_id: &str,
        chat_id: Uuid,
        content: &str,
    ) -> Result<Option<ChatExchange>> {
        let user_message = match self
            .store
            .append_message(user_id, chat_id, Role::User, content.to_string(), None)
            .await?
        {
            Some(message) => message,
            None => return Ok(None),
        };

        let (assistant_content, plan) = if wants_project_plan(content) {
            let (text, plan) = self.plan_reply(content).await;
            (text, Some(plan))
        } else {
            let history = self
                .store
                .messages(user_id, chat_id)
                .await?
                .unwrap_or_default();
            let turns: Vec<Turn> = history
                .iter()
                .map(|m| Turn {
                    role: m.role,
                    content: m.content.clone(),
                })
                .collect();
            (self.provider.generate(&turns).await?, None)
        };

        let assistant_message = match self
            .store
            .append_message(user_id, chat_id, Role::Assistant, assistant_content, plan)
            .await?
        {
            Some(message) => message,
            None => return Ok(None),
        };

        Ok(Some(ChatExchange {
            user_message,
            assistant_message,
        }))
    }

    /// Planning path: dedicated JSON-only prompt, then extraction. Every
    /// failure lands on the default plan — the user asked for a plan, so
    /// they get one.
    async fn plan_reply(&self, request: &str) -> (String, Plan) {
        let prompt = planning_prompt(request);
        match self.provider.generate(&[Turn::user(prompt)]).await {
            Ok(raw) => match extract_plan(&raw) {
                Ok(plan) => (
                    format!("Here is your project plan: {}", PLAN_PLACEHOLDER),
                    plan,
                ),
                Err(err) => {
                    warn!("plan extraction failed, using default plan: {}", err);
                    (fallback_text(), default_plan())
                }
            },
            Err(err) => {
                warn!("plan generation failed, using default plan: {}", err);
                (fallback_text(), default_plan())
            }
        }
    }
}

fn fallback_text() -> String {
    format!(
        "Here is your project plan: {} Let me know if you want any changes.",
        PLAN_PLACEHOLDER
    )
}

/// Case-insensitive trigger anywhere in the submitted text.
pub fn wants_project_plan(content: &str) -> bool {
    content.to_lowercase().contains(TRIGGER_PHRASE)
}

fn planning_prompt(request: &str) -> String {
    [
        "You are a planner. Generate a concise project plan as JSON only. No prose.",
        "Return strictly a JSON object: { \"workstreams\": [ { \"id\": \"A\", \"title\": \"...\", \"description\": \"...\", \"deliverables\": [ { \"id\": \"A1\", \"title\": \"...\", \"description\": \"...\" } ] } ] }",
        "Rules: 3-6 workstreams; each 2-4 deliverables; ids letter + number; keep descriptions short (1 sentence).",
        &format!("User request: {}", request),
    ]
    .join("\n")
}

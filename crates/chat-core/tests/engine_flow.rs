use std::sync::Arc;

use async_trait::async_trait;
use chat_core::{ChatEngine, ChatStore, MemoryChatStore, PLAN_PLACEHOLDER};
use llm_provider::{LlmProvider, MockProvider, ProviderError, Role, Turn};
use uuid::Uuid;

/// Provider that answers every call with a fixed script.
struct ScriptedProvider(&'static str);

#[async_trait]
impl LlmProvider for ScriptedProvider {
    async fn generate(&self, _turns: &[Turn]) -> Result<String, ProviderError> {
        Ok(self.0.to_string())
    }

    fn name(&self) -> &'static str {
        "scripted"
    }
}

struct FailingProvider;

#[async_trait]
impl LlmProvider for FailingProvider {
    async fn generate(&self, _turns: &[Turn]) -> Result<String, ProviderError> {
        Err(ProviderError::Empty {
            provider: self.name(),
        })
    }

    fn name(&self) -> &'static str {
        "failing"
    }
}

async fn engine_with<P: LlmProvider>(provider: P) -> (ChatEngine<P>, Arc<MemoryChatStore>, Uuid) {
    let store = Arc::new(MemoryChatStore::new());
    let chat = store.create_chat("alice", None).await.unwrap();
    let engine = ChatEngine::new(store.clone(), provider);
    (engine, store, chat.id)
}

#[tokio::test]
async fn plain_message_uses_history_and_attaches_no_plan() {
    let (engine, store, chat_id) = engine_with(MockProvider).await;

    let exchange = engine
        .send_message("alice", chat_id, "What's the weather")
        .await
        .unwrap()
        .unwrap();

    assert_eq!(exchange.user_message.content, "What's the weather");
    assert_eq!(
        exchange.assistant_message.content,
        "Mock response: What's the weather"
    );
    assert!(exchange.assistant_message.plan.is_none());

    let messages = store.messages("alice", chat_id).await.unwrap().unwrap();
    assert_eq!(messages.len(), 2);
    assert_eq!(messages[0].role, Role::User);
    assert_eq!(messages[1].role, Role::Assistant);
}

#[tokio::test]
async fn plan_trigger_attaches_extracted_plan() {
    let scripted = ScriptedProvider(
        r#"```json
{"workstreams":[
  {"id":"A","title":"Onboarding content","description":"Write it.","deliverables":[
    {"id":"A1","title":"Welcome guide","description":"First week."}
  ]},
  {"id":"B","title":"Tooling access","description":"Grant it.","deliverables":[]}
]}
```"#,
    );
    let (engine, _store, chat_id) = engine_with(scripted).await;

    let exchange = engine
        .send_message("alice", chat_id, "Please draft a project plan for onboarding")
        .await
        .unwrap()
        .unwrap();

    assert!(exchange.assistant_message.content.contains(PLAN_PLACEHOLDER));
    let plan = exchange.assistant_message.plan.expect("plan attached");
    assert_eq!(plan.workstreams.len(), 2);
    assert_eq!(plan.workstreams[0].title, "Onboarding content");
    assert_eq!(plan.workstreams[0].deliverables[0].id, "A1");
}

#[tokio::test]
async fn unparseable_response_falls_back_to_default_plan() {
    let scripted = ScriptedProvider("I'm sorry, I cannot produce structured output today.");
    let (engine, _store, chat_id) = engine_with(scripted).await;

    let exchange = engine
        .send_message("alice", chat_id, "I need a project plan")
        .await
        .unwrap()
        .unwrap();

    let plan = exchange.assistant_message.plan.expect("default plan attached");
    assert_eq!(plan.workstreams.len(), 4);
    assert_eq!(plan.workstreams[0].id, "A");
    assert!(exchange
        .assistant_message
        .content
        .contains("Let me know if you want any changes"));
}

#[tokio::test]
async fn provider_failure_on_plan_path_still_yields_a_plan() {
    let (engine, _store, chat_id) = engine_with(FailingProvider).await;

    let exchange = engine
        .send_message("alice", chat_id, "give me a project plan")
        .await
        .unwrap()
        .unwrap();

    assert!(exchange.assistant_message.plan.is_some());
    assert!(exchange.assistant_message.content.contains(PLAN_PLACEHOLDER));
}

#[tokio::test]
async fn missing_chat_is_none() {
    let store: Arc<MemoryChatStore> = Arc::new(MemoryChatStore::new());
    let engine = ChatEngine::new(store, MockProvider);

    let result = engine
        .send_message("alice", Uuid::new_v4(), "hello")
        .await
        .unwrap();
    assert!(result.is_none());
}

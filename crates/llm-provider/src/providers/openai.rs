use async_trait::async_trait;
use reqwest::Client as Http;
use serde_json::{json, Value};

use crate::error::ProviderError;
use crate::traits::LlmProvider;
use crate::types::{Role, Turn};

pub const DEFAULT_OPENAI_MODEL: &str = "gpt-4o-mini";

const BASE_URL: &str = "https://api.openai.com/v1";

pub struct OpenAiProvider {
    http: Http,
    api_key: String,
    model: String,
    base_url: String,
}

impl OpenAiProvider {
    pub fn new(api_key: String, model: String) -> Self {
        Self {
            http: Http::new(),
            api_key,
            model,
            base_url: BASE_URL.to_string(),
        }
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    fn request_body(&self, turns: &[Turn]) -> Value {
        let messages: Vec<Value> = turns
            .iter()
            .map(|t| {
                let role = match t.role {
                    Role::User => "user",
                    Role::Assistant => "assistant",
                };
                json!({ "role": role, "content": t.content })
            })
            .collect();
        json!({
            "model": self.model,
            "messages": messages,
            "temperature": 0.3,
            "max_tokens": 300
        })
    }
}

#[async_trait]
impl LlmProvider for OpenAiProvider {
    async fn generate(&self, turns: &[Turn]) -> Result<String, ProviderError> {
        let url = format!("{}/chat/completions", self.base_url);

        let resp = self
            .http
            .post(url)
            .bearer_auth(&self.api_key)
            .json(&self.request_body(turns))
            .send()
            .await
            .map_err(|source| ProviderError::Transport {
                provider: self.name(),
                source,
            })?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(ProviderError::Upstream {
                provider: self.name(),
                status,
                body,
            });
        }

        let v: Value = resp.json().await.map_err(|source| ProviderError::Transport {
            provider: self.name(),
            source,
        })?;

        v.pointer("/choices/0/message/content")
            .and_then(Value::as_str)
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .map(String::from)
            .ok_or(ProviderError::Empty {
                provider: self.name(),
            })
    }

    fn name(&self) -> &'static str {
        "openai"
    }
}

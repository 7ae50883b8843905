use async_trait::async_trait;
use reqwest::Client as Http;
use serde_json::{json, Value};

use crate::error::ProviderError;
use crate::traits::LlmProvider;
use crate::types::{Role, Turn};

pub const DEFAULT_GEMINI_MODEL: &str = "gemini-2.5-flash";

const BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";

pub struct GeminiProvider {
    http: Http,
    api_key: String,
    model: String,
    base_url: String,
}

impl GeminiProvider {
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
}

/// Gemini has its own label for the assistant role.
fn request_body(turns: &[Turn]) -> Value {
    let contents: Vec<Value> = turns
        .iter()
        .map(|t| {
            let role = match t.role {
                Role::Assistant => "model",
                Role::User => "user",
            };
            json!({ "role": role, "parts": [{ "text": t.content }] })
        })
        .collect();
    json!({ "contents": contents })
}

#[async_trait]
impl LlmProvider for GeminiProvider {
    async fn generate(&self, turns: &[Turn]) -> Result<String, ProviderError> {
        let url = format!(
            "{}/models/{}:generateContent?key={}",
            self.base_url, self.model, self.api_key
        );

        let resp = self
            .http
            .post(url)
            .json(&request_body(turns))
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

        v.pointer("/candidates/0/content/parts/0/text")
            .and_then(Value::as_str)
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .map(String::from)
            .ok_or(ProviderError::Empty {
                provider: self.name(),
            })
    }

    fn name(&self) -> &'static str {
        "gemini"
    }
}

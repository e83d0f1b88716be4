use async_trait::async_trait;
use serde::Deserialize;
use tracing::{debug, warn};

use crate::application::CompletionClient;
use crate::domain::DomainError;

pub const DEFAULT_BASE_URL: &str = "https://api.groq.com";
const CHAT_COMPLETIONS_PATH: &str = "/openai/v1/chat/completions";
pub const DEFAULT_MODEL: &str = "llama3-70b-8192";

/// Fallback when the API returns no choices at all.
const NO_RESPONSE_FALLBACK: &str = "No response available";
/// Fallback when a choice is present but carries no message content.
const NO_CONTENT_FALLBACK: &str = "No content available";

/// OpenAI-compatible chat-completion request payload.
#[derive(serde::Serialize)]
struct ApiRequest<'a> {
    model: &'a str,
    messages: Vec<ApiMessage<'a>>,
}

#[derive(serde::Serialize)]
struct ApiMessage<'a> {
    role: &'a str,
    content: &'a str,
}

/// Minimal subset of the chat-completion response we care about, decoded
/// defensively: every field the upstream might omit is optional or defaulted
/// rather than probed for dynamically.
#[derive(Deserialize)]
struct ApiResponse {
    #[serde(default)]
    choices: Vec<Choice>,
}

#[derive(Deserialize)]
struct Choice {
    message: Option<ChoiceMessage>,
}

#[derive(Deserialize)]
struct ChoiceMessage {
    content: Option<String>,
}

impl ApiResponse {
    /// Extract the first choice's message content, substituting the fixed
    /// fallback strings where the response is missing pieces.
    fn message_text(self) -> String {
        match self.choices.into_iter().next() {
            Some(choice) => choice
                .message
                .and_then(|m| m.content)
                .unwrap_or_else(|| NO_CONTENT_FALLBACK.to_string()),
            None => NO_RESPONSE_FALLBACK.to_string(),
        }
    }
}

/// HTTP client for the Groq chat-completions API (OpenAI-compatible wire
/// format).
///
/// Implements [`CompletionClient`] so higher-level components stay decoupled
/// from transport and serialization details. Constructed explicitly and
/// passed down — never held as process-global state — so the test suite can
/// substitute a double.
///
/// Configuration comes from the environment via [`GroqClient::from_env`]:
///
/// ```text
/// GROQ_API_KEY=gsk_...            (required)
/// GROQ_MODEL=llama3-70b-8192      (optional)
/// GROQ_BASE_URL=https://api.groq.com  (optional)
/// ```
///
/// One outbound call per invocation, no retries, and no explicit timeout —
/// the transport default applies.
pub struct GroqClient {
    client: reqwest::Client,
    api_key: String,
    model: String,
    /// Full endpoint URL (base + CHAT_COMPLETIONS_PATH).
    url: String,
}

impl GroqClient {
    pub fn new(
        api_key: impl Into<String>,
        model: impl Into<String>,
        base_url: impl Into<String>,
    ) -> Self {
        let base: String = base_url.into();
        let url = format!("{}{}", base.trim_end_matches('/'), CHAT_COMPLETIONS_PATH);
        Self {
            client: reqwest::Client::new(),
            api_key: api_key.into(),
            model: model.into(),
            url,
        }
    }

    /// Construct from environment variables:
    ///
    /// | Variable        | Default                 | Purpose              |
    /// |-----------------|-------------------------|----------------------|
    /// | `GROQ_API_KEY`  | — (required)            | Bearer credential    |
    /// | `GROQ_MODEL`    | `llama3-70b-8192`       | Model identifier     |
    /// | `GROQ_BASE_URL` | `https://api.groq.com`  | API-compatible host  |
    ///
    /// A missing API key is a fatal startup condition, surfaced as an error
    /// here so `main` can refuse to start.
    pub fn from_env() -> Result<Self, DomainError> {
        let key = std::env::var("GROQ_API_KEY").map_err(|_| {
            DomainError::invalid_input("GROQ_API_KEY not found in environment variables")
        })?;
        let model =
            std::env::var("GROQ_MODEL").unwrap_or_else(|_| DEFAULT_MODEL.to_string());
        let base =
            std::env::var("GROQ_BASE_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());
        Ok(Self::new(key, model, base))
    }
}

#[async_trait]
impl CompletionClient for GroqClient {
    async fn complete(&self, prompt: &str) -> Result<String, DomainError> {
        let request = ApiRequest {
            model: &self.model,
            messages: vec![ApiMessage {
                role: "user",
                content: prompt,
            }],
        };

        debug!("Sending completion request to {}", self.url);

        let response = self
            .client
            .post(&self.url)
            .bearer_auth(&self.api_key)
            .json(&request)
            .send()
            .await
            .map_err(|e| DomainError::network(format!("request failed: {e}")))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            warn!("GroqClient: API returned {status}: {body}");
            return Err(DomainError::api(format!("API returned {status}")));
        }

        let api_response: ApiResponse = response
            .json()
            .await
            .map_err(|e| DomainError::decode(format!("failed to parse response: {e}")))?;

        Ok(api_response.message_text())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn decode(raw: &str) -> String {
        serde_json::from_str::<ApiResponse>(raw)
            .expect("valid JSON")
            .message_text()
    }

    #[test]
    fn extracts_first_choice_content() {
        let raw = r#"{"choices":[{"message":{"role":"assistant","content":"Visit the Marais."}},{"message":{"content":"second"}}]}"#;
        assert_eq!(decode(raw), "Visit the Marais.");
    }

    #[test]
    fn empty_choices_yields_no_response_fallback() {
        assert_eq!(decode(r#"{"choices":[]}"#), "No response available");
    }

    #[test]
    fn missing_choices_field_yields_no_response_fallback() {
        assert_eq!(decode(r#"{"id":"cmpl-1"}"#), "No response available");
    }

    #[test]
    fn missing_content_yields_no_content_fallback() {
        assert_eq!(
            decode(r#"{"choices":[{"message":{"role":"assistant"}}]}"#),
            "No content available"
        );
        assert_eq!(decode(r#"{"choices":[{}]}"#), "No content available");
    }

    #[test]
    fn endpoint_url_tolerates_trailing_slash() {
        let client = GroqClient::new("key", "model", "https://api.groq.com/");
        assert_eq!(
            client.url,
            "https://api.groq.com/openai/v1/chat/completions"
        );
    }
}

//! OpenAI-compatible chat-completions client constrained to the question schema.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::{Value, json};

use super::config::LlmConfig;
use super::error::{QotdError, QotdResult};

/// Name of the structured-output schema sent to the provider.
pub const SCHEMA_NAME: &str = "ice_breaker_questions";

/// Something that turns a prompt into the raw JSON of a question list.
#[async_trait]
pub trait QuestionModel: Send + Sync {
    /// Complete `prompt`, returning the model's message content untouched.
    async fn complete(&self, prompt: &str) -> QotdResult<String>;
}

/// JSON schema requiring `{"questions": [string, ...]}` and nothing else.
#[must_use]
pub fn questions_schema() -> Value {
    json!({
        "type": "object",
        "required": ["questions"],
        "properties": {
            "questions": {
                "type": "array",
                "items": {
                    "type": "string",
                    "description": "The ice-breaker question text."
                },
                "description": "A list of ice-breaker questions."
            }
        },
        "additionalProperties": false
    })
}

#[derive(Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Serialize)]
struct JsonSchemaFormat {
    name: &'static str,
    strict: bool,
    schema: Value,
}

#[derive(Serialize)]
struct ResponseFormat {
    #[serde(rename = "type")]
    kind: &'static str,
    json_schema: JsonSchemaFormat,
}

#[derive(Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
    response_format: ResponseFormat,
    temperature: f32,
    max_tokens: u32,
    top_p: f32,
}

#[derive(Deserialize)]
struct ChatResponse {
    #[serde(default)]
    choices: Vec<Choice>,
}

#[derive(Deserialize)]
struct Choice {
    message: AssistantMessage,
}

#[derive(Deserialize)]
struct AssistantMessage {
    content: Option<String>,
}

/// Async client for an OpenAI-compatible provider.
pub struct OpenAiCompatClient {
    client: reqwest::Client,
    config: LlmConfig,
}

impl OpenAiCompatClient {
    /// Create a client.
    ///
    /// # Errors
    /// Returns an error if the configuration is invalid or the HTTP client
    /// cannot be built.
    pub fn new(config: LlmConfig) -> QotdResult<Self> {
        config.validate()?;
        let client = reqwest::Client::builder().build()?;
        Ok(Self { client, config })
    }

    fn request_body<'a>(&'a self, prompt: &'a str) -> ChatRequest<'a> {
        ChatRequest {
            model: &self.config.model,
            messages: vec![ChatMessage {
                role: "user",
                content: prompt,
            }],
            response_format: ResponseFormat {
                kind: "json_schema",
                json_schema: JsonSchemaFormat {
                    name: SCHEMA_NAME,
                    strict: true,
                    schema: questions_schema(),
                },
            },
            temperature: self.config.temperature,
            max_tokens: self.config.max_tokens,
            top_p: self.config.top_p,
        }
    }
}

#[async_trait]
impl QuestionModel for OpenAiCompatClient {
    async fn complete(&self, prompt: &str) -> QotdResult<String> {
        let api_key = self
            .config
            .api_key
            .as_ref()
            .ok_or_else(|| QotdError::ApiKeyRequired(self.config.base_url.clone()))?;

        let url = self.config.completions_url()?;
        tracing::debug!("Requesting questions from {} ({})", url, self.config.model);

        let response = self
            .client
            .post(url)
            .bearer_auth(api_key)
            .json(&self.request_body(prompt))
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(QotdError::UpstreamStatus {
                status: status.as_u16(),
                body,
            });
        }

        let body: ChatResponse = response.json().await?;
        body.choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .ok_or(QotdError::EmptyResponse)
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;
    use wiremock::matchers::{body_partial_json, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn client_for(server: &MockServer) -> Option<OpenAiCompatClient> {
        let config = LlmConfig::default()
            .with_base_url(format!("{}/api/v1", server.uri()))
            .with_api_key("test-key");
        OpenAiCompatClient::new(config).ok()
    }

    #[tokio::test]
    async fn test_complete_sends_schema_and_returns_content() {
        let server = MockServer::start().await;
        let content = r#"{"questions":["What is your favourite dinosaur?"]}"#;

        Mock::given(method("POST"))
            .and(path("/api/v1/chat/completions"))
            .and(header("authorization", "Bearer test-key"))
            .and(body_partial_json(json!({
                "model": "openai/gpt-4o",
                "temperature": 1.0,
                "max_tokens": 2048,
                "top_p": 1.0,
                "response_format": {
                    "type": "json_schema",
                    "json_schema": { "name": "ice_breaker_questions", "strict": true }
                }
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "choices": [{ "message": { "role": "assistant", "content": content } }]
            })))
            .expect(1)
            .mount(&server)
            .await;

        let Some(client) = client_for(&server) else {
            panic!("client should build");
        };
        let result = client.complete("hello").await.ok();
        assert_eq!(result.as_deref(), Some(content));
    }

    #[tokio::test]
    async fn test_upstream_error_status() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(502).set_body_string("bad gateway"))
            .mount(&server)
            .await;

        let Some(client) = client_for(&server) else {
            panic!("client should build");
        };
        let result = client.complete("hello").await;
        assert!(matches!(result, Err(QotdError::UpstreamStatus { status: 502, .. })));
    }

    #[tokio::test]
    async fn test_empty_choices() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "choices": [] })))
            .mount(&server)
            .await;

        let Some(client) = client_for(&server) else {
            panic!("client should build");
        };
        let result = client.complete("hello").await;
        assert!(matches!(result, Err(QotdError::EmptyResponse)));
    }

    #[tokio::test]
    async fn test_missing_api_key() {
        let client = OpenAiCompatClient::new(LlmConfig::default()).ok();
        let Some(client) = client else {
            panic!("client should build");
        };
        let result = client.complete("hello").await;
        assert!(matches!(result, Err(QotdError::ApiKeyRequired(_))));
    }

    #[test]
    fn test_schema_requires_questions() {
        let schema = questions_schema();
        assert_eq!(schema["required"], json!(["questions"]));
        assert_eq!(schema["properties"]["questions"]["items"]["type"], "string");
        assert_eq!(schema["additionalProperties"], false);
    }
}

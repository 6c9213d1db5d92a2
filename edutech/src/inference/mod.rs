//! Client for the local text-generation inference endpoint.
//!
//! The chat feature proxies messages to an Ollama-style HTTP service: a
//! single `POST {url}/api/generate` with `{model, prompt, stream, options}`
//! returning `{response}`. The call is synchronous from the handler's point
//! of view (non-streaming, greedy decoding, bounded output length), blocks
//! for at most the configured timeout, and is never retried.

use crate::config::InferenceConfig;
use crate::errors::Error;
use reqwest::Client;
use serde_json::json;
use tracing::instrument;

/// Prompt template applied to every chat message before generation.
pub fn build_prompt(message: &str) -> String {
    format!("Explain clearly:\n{message}")
}

/// HTTP client for the text-generation endpoint.
#[derive(Debug, Clone)]
pub struct InferenceClient {
    client: Client,
    url: url::Url,
    model: String,
    max_output_tokens: u32,
}

impl InferenceClient {
    /// Build a client with the configured request timeout baked in.
    pub fn new(config: &InferenceConfig) -> Result<Self, Error> {
        let client = Client::builder().timeout(config.timeout).build().map_err(|e| Error::Internal {
            operation: format!("build inference http client: {e}"),
        })?;

        Ok(Self {
            client,
            url: config.url.clone(),
            model: config.model.clone(),
            max_output_tokens: config.max_output_tokens,
        })
    }

    /// Run one generation and return the produced text.
    ///
    /// The `response` field is extracted from the reply; a well-formed reply
    /// without it yields an empty string rather than an error. Transport
    /// failures, non-2xx statuses, and non-JSON bodies all surface as
    /// [`Error::UpstreamUnavailable`].
    #[instrument(skip_all, fields(model = %self.model), err)]
    pub async fn generate(&self, prompt: &str) -> Result<String, Error> {
        let full_url = format!("{}/api/generate", self.url.as_str().trim_end_matches('/'));
        let payload = json!({
            "model": self.model,
            "prompt": prompt,
            "stream": false,
            "options": {
                "temperature": 0.0,
                "num_predict": self.max_output_tokens,
            }
        });

        let response = self
            .client
            .post(&full_url)
            .json(&payload)
            .send()
            .await
            .map_err(|e| Error::UpstreamUnavailable {
                message: format!("request to {full_url} failed: {e}"),
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(Error::UpstreamUnavailable {
                message: format!("inference endpoint returned HTTP {status}"),
            });
        }

        let body: serde_json::Value = response.json().await.map_err(|e| Error::UpstreamUnavailable {
            message: format!("failed to parse inference response as JSON: {e}"),
        })?;

        Ok(extract_generated_text(&body))
    }
}

/// Pull the generated text out of an inference reply, tolerating its absence.
fn extract_generated_text(body: &serde_json::Value) -> String {
    body.get("response").and_then(|v| v.as_str()).unwrap_or_default().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;
    use wiremock::matchers::{body_partial_json, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn test_config(url: &str) -> InferenceConfig {
        crate::test_utils::install_crypto_provider();
        InferenceConfig {
            url: url.parse().unwrap(),
            model: "llama3".to_string(),
            timeout: Duration::from_secs(60),
            max_output_tokens: 512,
        }
    }

    #[test]
    fn test_build_prompt_prefixes_instruction() {
        assert_eq!(build_prompt("what is gravity?"), "Explain clearly:\nwhat is gravity?");
    }

    #[test]
    fn test_extract_generated_text_missing_field_is_empty() {
        assert_eq!(extract_generated_text(&json!({"done": true})), "");
        assert_eq!(extract_generated_text(&json!({"response": "hi"})), "hi");
        // Non-string response field is treated as absent
        assert_eq!(extract_generated_text(&json!({"response": 42})), "");
    }

    #[tokio::test]
    async fn test_generate_sends_expected_payload() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/generate"))
            .and(body_partial_json(json!({
                "model": "llama3",
                "prompt": "Explain clearly:\nwhat is gravity?",
                "stream": false,
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"response": "Gravity is a force."})))
            .expect(1)
            .mount(&server)
            .await;

        let client = InferenceClient::new(&test_config(&server.uri())).unwrap();
        let reply = client.generate(&build_prompt("what is gravity?")).await.unwrap();
        assert_eq!(reply, "Gravity is a force.");
    }

    #[tokio::test]
    async fn test_generate_maps_http_error_to_upstream_unavailable() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/generate"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&server)
            .await;

        let client = InferenceClient::new(&test_config(&server.uri())).unwrap();
        let err = client.generate("prompt").await.unwrap_err();
        assert!(matches!(err, Error::UpstreamUnavailable { .. }));
    }

    #[tokio::test]
    async fn test_generate_maps_non_json_body_to_upstream_unavailable() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/generate"))
            .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
            .mount(&server)
            .await;

        let client = InferenceClient::new(&test_config(&server.uri())).unwrap();
        let err = client.generate("prompt").await.unwrap_err();
        assert!(matches!(err, Error::UpstreamUnavailable { .. }));
    }

    #[tokio::test]
    async fn test_generate_unreachable_endpoint() {
        // Nothing listens on this port
        let client = InferenceClient::new(&test_config("http://127.0.0.1:1")).unwrap();
        let err = client.generate("prompt").await.unwrap_err();
        assert!(matches!(err, Error::UpstreamUnavailable { .. }));
    }
}

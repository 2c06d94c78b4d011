use std::time::Duration;

use async_trait::async_trait;
use tracing::{debug, warn};

use crate::service::{GenerateRequest, GenerativeService, OutputFormat};
use crate::types::{
    Content, GenerateContentRequest, GenerateContentResponse, GenerationConfig, GoogleSearch,
    ToolSpec,
};
use crate::{GeminiError, Result};

pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com";
pub const DEFAULT_MODEL: &str = "gemini-2.5-flash";

// ─── GeminiOptions ────────────────────────────────────────────────────────

#[derive(Debug, Clone)]
pub struct GeminiOptions {
    pub base_url: String,
    pub model: String,
    /// `None` leaves the client unconfigured; every call then fails with
    /// [`GeminiError::NotConfigured`] without touching the network.
    pub api_key: Option<String>,
    pub timeout: Duration,
}

impl Default for GeminiOptions {
    fn default() -> Self {
        GeminiOptions {
            base_url: DEFAULT_BASE_URL.to_string(),
            model: DEFAULT_MODEL.to_string(),
            api_key: None,
            timeout: Duration::from_secs(60),
        }
    }
}

// ─── GeminiClient ─────────────────────────────────────────────────────────

pub struct GeminiClient {
    http: reqwest::Client,
    options: GeminiOptions,
}

impl GeminiClient {
    pub fn new(options: GeminiOptions) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(options.timeout)
            .build()?;
        Ok(GeminiClient { http, options })
    }

    fn endpoint(&self) -> String {
        format!(
            "{}/v1beta/models/{}:generateContent",
            self.options.base_url.trim_end_matches('/'),
            self.options.model
        )
    }

    fn api_key(&self) -> Option<&str> {
        self.options
            .api_key
            .as_deref()
            .filter(|k| !k.trim().is_empty())
    }
}

/// Translate a call shape into the wire body.
pub(crate) fn build_body(request: &GenerateRequest) -> GenerateContentRequest {
    let mut body = GenerateContentRequest {
        contents: vec![Content::user_text(request.prompt.clone())],
        generation_config: None,
        tools: Vec::new(),
    };
    match &request.output {
        OutputFormat::Text => {}
        OutputFormat::Json(schema) => {
            body.generation_config = Some(GenerationConfig {
                response_mime_type: Some("application/json".to_string()),
                response_schema: Some(schema.clone()),
            });
        }
        OutputFormat::WebGrounded => {
            body.tools.push(ToolSpec {
                google_search: Some(GoogleSearch {}),
            });
        }
    }
    body
}

#[async_trait]
impl GenerativeService for GeminiClient {
    fn is_configured(&self) -> bool {
        self.api_key().is_some()
    }

    async fn generate(&self, request: GenerateRequest) -> Result<GenerateContentResponse> {
        let api_key = self.api_key().ok_or(GeminiError::NotConfigured)?;
        let body = build_body(&request);

        debug!(model = %self.options.model, prompt_len = request.prompt.len(), "generateContent");
        let response = self
            .http
            .post(self.endpoint())
            .header("x-goog-api-key", api_key)
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        let text = response.text().await?;
        if !status.is_success() {
            warn!(status = status.as_u16(), "generateContent failed");
            return Err(GeminiError::from_status(status.as_u16(), &text));
        }

        serde_json::from_str(&text).map_err(|source| GeminiError::Decode { body: text, source })
    }
}

// ─── Tests ────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Schema;
    use mockito::Matcher;

    fn client(base_url: &str, api_key: Option<&str>) -> GeminiClient {
        GeminiClient::new(GeminiOptions {
            base_url: base_url.to_string(),
            api_key: api_key.map(str::to_string),
            timeout: Duration::from_secs(5),
            ..Default::default()
        })
        .unwrap()
    }

    const PATH: &str = "/v1beta/models/gemini-2.5-flash:generateContent";

    #[test]
    fn json_request_carries_mime_type_and_schema() {
        let body = build_body(&GenerateRequest::json(
            "suggest",
            Schema::array_of(Schema::string()),
        ));
        let v = serde_json::to_value(&body).unwrap();
        assert_eq!(v["generationConfig"]["responseMimeType"], "application/json");
        assert_eq!(v["generationConfig"]["responseSchema"]["type"], "ARRAY");
        assert_eq!(v["generationConfig"]["responseSchema"]["items"]["type"], "STRING");
        assert!(v.get("tools").is_none());
    }

    #[test]
    fn web_grounded_request_attaches_search_tool() {
        let body = build_body(&GenerateRequest::web_grounded("find tutorials"));
        let v = serde_json::to_value(&body).unwrap();
        assert!(v["tools"][0]["google_search"].is_object());
        assert!(v.get("generationConfig").is_none());
        assert_eq!(v["contents"][0]["parts"][0]["text"], "find tutorials");
    }

    #[test]
    fn blank_key_is_not_configured() {
        assert!(!client("http://localhost", Some("  ")).is_configured());
        assert!(!client("http://localhost", None).is_configured());
        assert!(client("http://localhost", Some("k")).is_configured());
    }

    #[tokio::test]
    async fn unconfigured_client_never_calls_out() {
        let mut server = mockito::Server::new_async().await;
        let mock = server.mock("POST", PATH).expect(0).create_async().await;

        let err = client(&server.url(), None)
            .generate(GenerateRequest::text("hi"))
            .await
            .unwrap_err();
        assert!(matches!(err, GeminiError::NotConfigured));
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn generate_sends_key_header_and_parses_text() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("POST", PATH)
            .match_header("x-goog-api-key", "test-key")
            .match_body(Matcher::PartialJson(serde_json::json!({
                "contents": [{"role": "user", "parts": [{"text": "describe me"}]}]
            })))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(
                r#"{"candidates": [{"content": {"role": "model", "parts": [{"text": "A bold "}, {"text": "maker."}]}, "finishReason": "STOP"}]}"#,
            )
            .create_async()
            .await;

        let response = client(&server.url(), Some("test-key"))
            .generate(GenerateRequest::text("describe me"))
            .await
            .unwrap();
        assert_eq!(response.text(), "A bold maker.");
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn non_success_status_is_typed_error() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("POST", PATH)
            .with_status(500)
            .with_body(r#"{"error": {"code": 500, "message": "backend unavailable"}}"#)
            .create_async()
            .await;

        let err = client(&server.url(), Some("k"))
            .generate(GenerateRequest::text("hi"))
            .await
            .unwrap_err();
        assert!(
            matches!(err, GeminiError::Status { status: 500, ref message } if message == "backend unavailable")
        );
    }

    #[tokio::test]
    async fn garbage_body_is_decode_error() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("POST", PATH)
            .with_status(200)
            .with_body("<html>oops</html>")
            .create_async()
            .await;

        let err = client(&server.url(), Some("k"))
            .generate(GenerateRequest::text("hi"))
            .await
            .unwrap_err();
        assert!(matches!(err, GeminiError::Decode { .. }));
    }

    #[tokio::test]
    async fn trailing_slash_in_base_url_is_tolerated() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("POST", PATH)
            .with_status(200)
            .with_body(r#"{"candidates": []}"#)
            .create_async()
            .await;

        let base = format!("{}/", server.url());
        let response = client(&base, Some("k"))
            .generate(GenerateRequest::text("hi"))
            .await
            .unwrap();
        assert_eq!(response.text(), "");
        mock.assert_async().await;
    }
}

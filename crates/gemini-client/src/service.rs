use async_trait::async_trait;

use crate::types::{GenerateContentResponse, Schema};
use crate::Result;

// ─── GenerateRequest ──────────────────────────────────────────────────────

/// The three call shapes the application uses.
#[derive(Debug, Clone, PartialEq)]
pub enum OutputFormat {
    /// Free-text prompt, free-text answer.
    Text,
    /// `application/json` output constrained to the schema.
    Json(Schema),
    /// Free text with Google Search grounding; citations come back in the
    /// candidate's grounding metadata.
    WebGrounded,
}

#[derive(Debug, Clone, PartialEq)]
pub struct GenerateRequest {
    pub prompt: String,
    pub output: OutputFormat,
}

impl GenerateRequest {
    pub fn text(prompt: impl Into<String>) -> Self {
        GenerateRequest {
            prompt: prompt.into(),
            output: OutputFormat::Text,
        }
    }

    pub fn json(prompt: impl Into<String>, schema: Schema) -> Self {
        GenerateRequest {
            prompt: prompt.into(),
            output: OutputFormat::Json(schema),
        }
    }

    pub fn web_grounded(prompt: impl Into<String>) -> Self {
        GenerateRequest {
            prompt: prompt.into(),
            output: OutputFormat::WebGrounded,
        }
    }
}

// ─── GenerativeService ────────────────────────────────────────────────────

/// Seam between callers and the transport. [`crate::GeminiClient`] is the
/// production implementation; tests substitute their own.
#[async_trait]
pub trait GenerativeService: Send + Sync {
    /// Whether a credential is present. Must not fail or block.
    fn is_configured(&self) -> bool;

    async fn generate(&self, request: GenerateRequest) -> Result<GenerateContentResponse>;
}

use gemini_client::GeminiError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AdvisorError {
    #[error(
        "AI service is not configured. Set the API key in the environment (API_KEY or GEMINI_API_KEY)."
    )]
    NotConfigured,

    #[error("AI service call failed: {0}")]
    Service(#[source] GeminiError),
}

impl From<GeminiError> for AdvisorError {
    fn from(e: GeminiError) -> Self {
        match e {
            GeminiError::NotConfigured => AdvisorError::NotConfigured,
            other => AdvisorError::Service(other),
        }
    }
}

/// Why a service reply could not be turned into the expected JSON value.
#[derive(Debug, Error)]
pub enum DecodeError {
    #[error("service returned an empty body")]
    Empty,

    #[error("service returned malformed JSON: {0}")]
    Malformed(#[source] serde_json::Error),

    #[error("expected a JSON {expected}, got {found}")]
    WrongShape {
        expected: &'static str,
        found: &'static str,
    },
}

use thiserror::Error;

#[derive(Debug, Error)]
pub enum GeminiError {
    #[error("AI service is not configured: no API key available")]
    NotConfigured,

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API key rejected ({status}): {message}")]
    Unauthorized { status: u16, message: String },

    #[error("rate limited: {0}")]
    RateLimited(String),

    #[error("service returned {status}: {message}")]
    Status { status: u16, message: String },

    #[error("failed to decode generateContent response: {source}\n  body: {body}")]
    Decode {
        body: String,
        #[source]
        source: serde_json::Error,
    },
}

impl GeminiError {
    /// Map a non-success HTTP status to an error, preferring the
    /// `error.message` field of Google's error envelope when present.
    pub fn from_status(status: u16, body: &str) -> Self {
        let message = serde_json::from_str::<serde_json::Value>(body)
            .ok()
            .and_then(|v| v["error"]["message"].as_str().map(str::to_string))
            .unwrap_or_else(|| body.to_string());
        match status {
            401 | 403 => GeminiError::Unauthorized { status, message },
            429 => GeminiError::RateLimited(message),
            _ => GeminiError::Status { status, message },
        }
    }
}

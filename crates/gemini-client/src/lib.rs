//! `gemini-client`: a small async driver for Google's Gemini
//! `generateContent` REST endpoint.
//!
//! # Architecture
//!
//! ```text
//! GenerateRequest      ← prompt + call shape (text / JSON schema / web grounded)
//!     │
//!     ▼
//! GenerativeService    ← async trait; the seam tests mock
//!     │
//!     ▼
//! GeminiClient         ← reqwest POST {base}/v1beta/models/{model}:generateContent
//!     │                   x-goog-api-key header
//!     ▼
//! GenerateContentResponse ← candidates, text parts, grounding metadata
//! ```
//!
//! # Quick start
//!
//! ```rust,ignore
//! use gemini_client::{GeminiClient, GeminiOptions, GenerateRequest, GenerativeService};
//!
//! let client = GeminiClient::new(GeminiOptions {
//!     api_key: std::env::var("API_KEY").ok(),
//!     ..Default::default()
//! })?;
//!
//! if client.is_configured() {
//!     let reply = client.generate(GenerateRequest::text("say hello")).await?;
//!     println!("{}", reply.text());
//! }
//! ```

pub mod client;
pub mod error;
pub mod service;
pub mod types;


pub use client::{GeminiClient, GeminiOptions, DEFAULT_BASE_URL, DEFAULT_MODEL};
pub use error::GeminiError;
pub use service::{GenerateRequest, GenerativeService, OutputFormat};
pub use types::{
    Candidate, Content, GenerateContentResponse, GroundingChunk, GroundingMetadata, Part, Schema,
    SchemaType, WebSource,
};

/// Convenience `Result` alias for this crate.
pub type Result<T> = std::result::Result<T, GeminiError>;

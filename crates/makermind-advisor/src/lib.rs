//! `makermind-advisor`: AI-backed project recommendations.
//!
//! Builds prompts and response schemas from a maker's profile and stash,
//! sends them through a [`gemini_client::GenerativeService`], and decodes
//! the replies into [`makermind_core::types::Project`] records. Failure
//! policy differs per call:
//!
//! | call | on failure |
//! |---|---|
//! | [`Advisor::generate_persona`] | `Err(AdvisorError)` |
//! | [`Advisor::recommended_projects`] | empty list |
//! | [`Advisor::stash_buster`] | `None` |
//! | [`Advisor::find_resources`] | empty list |

pub mod advisor;
pub mod dashboard;
pub mod decode;
pub mod error;
pub mod prompt;
pub mod schema;


pub use advisor::{Advisor, MAX_RESOURCES, PERSONA_PLACEHOLDER};
pub use dashboard::{load_dashboard, DashboardFeed, DashboardLoad, ViewLifetime};
pub use error::{AdvisorError, DecodeError};

pub type Result<T> = std::result::Result<T, AdvisorError>;

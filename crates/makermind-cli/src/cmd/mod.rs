pub mod inventory;
pub mod onboard;
pub mod recommend;
pub mod resources;
pub mod review;
pub mod saved;
pub mod schedule;
pub mod status;

use anyhow::Context;
use makermind_advisor::Advisor;
use makermind_core::config::Config;
use makermind_core::session::Session;
use makermind_core::types::{Project, UserProfile};
use std::path::Path;

/// Config plus an advisor built from it.
pub fn advisor(root: &Path) -> anyhow::Result<Advisor> {
    let config = Config::load(root).context("failed to load .makermind/config.yaml")?;
    Advisor::from_config(&config).context("failed to build AI client")
}

pub fn require_profile(session: &Session) -> anyhow::Result<&UserProfile> {
    session
        .state()
        .slots
        .profile
        .as_ref()
        .context("no maker profile yet; run `makermind onboard` first")
}

pub fn find_saved<'a>(session: &'a Session, id: &str) -> anyhow::Result<&'a Project> {
    session
        .state()
        .slots
        .saved_projects
        .iter()
        .find(|p| p.id == id)
        .with_context(|| format!("saved project '{id}' not found"))
}

/// Shown in place of AI output when no credential is present.
pub const CONFIGURATION_NEEDED: &str = "AI service is not configured.\n\
    Set API_KEY (or GEMINI_API_KEY) in the environment, or point \
    ai.api_key_env in .makermind/config.yaml at the variable that holds it.";

pub fn runtime() -> anyhow::Result<tokio::runtime::Runtime> {
    tokio::runtime::Runtime::new().context("failed to start async runtime")
}

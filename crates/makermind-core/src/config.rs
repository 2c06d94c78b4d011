use crate::error::Result;
use crate::onboarding::{DEFAULT_BUDGET, DEFAULT_NAME};
use crate::paths;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::warn;

/// Environment variable consulted when the configured one is unset.
pub const FALLBACK_API_KEY_ENV: &str = "GEMINI_API_KEY";

// ---------------------------------------------------------------------------
// AiConfig
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AiConfig {
    #[serde(default = "default_model")]
    pub model: String,
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Name of the environment variable holding the API credential.
    #[serde(default = "default_api_key_env")]
    pub api_key_env: String,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_model() -> String {
    "gemini-2.5-flash".to_string()
}

fn default_base_url() -> String {
    "https://generativelanguage.googleapis.com".to_string()
}

fn default_api_key_env() -> String {
    "API_KEY".to_string()
}

fn default_timeout_secs() -> u64 {
    60
}

impl Default for AiConfig {
    fn default() -> Self {
        Self {
            model: default_model(),
            base_url: default_base_url(),
            api_key_env: default_api_key_env(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl AiConfig {
    /// Read the credential from the process environment. Never fails;
    /// an unset or blank variable is `None`.
    pub fn resolve_api_key(&self) -> Option<String> {
        let key = [self.api_key_env.as_str(), FALLBACK_API_KEY_ENV]
            .iter()
            .filter_map(|var| std::env::var(var).ok())
            .map(|v| v.trim().to_string())
            .find(|v| !v.is_empty());
        if key.is_none() {
            warn!(
                env = %self.api_key_env,
                "API key is missing; project generation is unavailable until it is set"
            );
        }
        key
    }
}

// ---------------------------------------------------------------------------
// RecommendationConfig
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecommendationConfig {
    #[serde(default = "default_count")]
    pub count: usize,
}

fn default_count() -> usize {
    5
}

impl Default for RecommendationConfig {
    fn default() -> Self {
        Self {
            count: default_count(),
        }
    }
}

// ---------------------------------------------------------------------------
// OnboardingConfig
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OnboardingConfig {
    #[serde(default = "default_name")]
    pub default_name: String,
    #[serde(default = "default_budget")]
    pub default_budget: f64,
}

fn default_name() -> String {
    DEFAULT_NAME.to_string()
}

fn default_budget() -> f64 {
    DEFAULT_BUDGET
}

impl Default for OnboardingConfig {
    fn default() -> Self {
        Self {
            default_name: default_name(),
            default_budget: default_budget(),
        }
    }
}

// ---------------------------------------------------------------------------
// Config
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub ai: AiConfig,
    #[serde(default)]
    pub recommendations: RecommendationConfig,
    #[serde(default)]
    pub onboarding: OnboardingConfig,
}

impl Config {
    /// Load `.makermind/config.yaml`, or defaults when the file is absent.
    pub fn load(root: &Path) -> Result<Self> {
        let path = paths::config_path(root);
        if !path.exists() {
            return Ok(Self::default());
        }
        let data = std::fs::read_to_string(&path)?;
        let config: Config = serde_yaml::from_str(&data)?;
        Ok(config)
    }

    pub fn save(&self, root: &Path) -> Result<()> {
        let path = paths::config_path(root);
        let data = serde_yaml::to_string(self)?;
        crate::io::atomic_write(&path, data.as_bytes())
    }
}

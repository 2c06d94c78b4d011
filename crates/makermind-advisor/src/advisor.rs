use std::sync::{Arc, Mutex};
use std::time::Duration;

use gemini_client::{GeminiClient, GeminiOptions, GenerateRequest, GenerativeService};
use makermind_core::catalog::PROJECT_COLORS;
use makermind_core::config::Config;
use makermind_core::ids::now_millis;
use makermind_core::types::{Material, Project, ProjectCategory, SearchResult, UserProfile};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use tracing::{info, warn};

use crate::decode::{parse_array, parse_object, project_from_value, ProjectDefaults};
use crate::error::AdvisorError;
use crate::{prompt, schema, Result};

/// Substituted when the service answers a persona request with no text.
pub const PERSONA_PLACEHOLDER: &str = "A creative maker with a unique blend of styles.";

/// Resource searches return at most this many links.
pub const MAX_RESOURCES: usize = 3;

pub const DEFAULT_RECOMMENDATION_COUNT: usize = 5;

/// The recommendation client: turns profile and inventory into requests
/// against a [`GenerativeService`] and decodes the replies.
///
/// Holds no application state. Calls are independent and may run
/// concurrently; the only shared piece is the palette RNG.
pub struct Advisor {
    service: Arc<dyn GenerativeService>,
    palette: Mutex<StdRng>,
    count: usize,
}

impl Advisor {
    pub fn new(service: Arc<dyn GenerativeService>) -> Self {
        Advisor {
            service,
            palette: Mutex::new(StdRng::from_entropy()),
            count: DEFAULT_RECOMMENDATION_COUNT,
        }
    }

    /// Deterministic palette assignment for tests and reproducible runs.
    pub fn with_seed(service: Arc<dyn GenerativeService>, seed: u64) -> Self {
        Advisor {
            palette: Mutex::new(StdRng::seed_from_u64(seed)),
            ..Self::new(service)
        }
    }

    pub fn with_count(mut self, count: usize) -> Self {
        self.count = count.max(1);
        self
    }

    /// Build a Gemini-backed advisor from workspace configuration. The
    /// credential comes from the environment; its absence is not an error
    /// here, it only makes [`configured`](Self::configured) return false.
    pub fn from_config(config: &Config) -> Result<Self> {
        let client = GeminiClient::new(GeminiOptions {
            base_url: config.ai.base_url.clone(),
            model: config.ai.model.clone(),
            api_key: config.ai.resolve_api_key(),
            timeout: Duration::from_secs(config.ai.timeout_secs),
        })?;
        Ok(Self::new(Arc::new(client)).with_count(config.recommendations.count))
    }

    /// Non-failing credential check.
    pub fn configured(&self) -> bool {
        self.service.is_configured()
    }

    fn pick_color(&self) -> String {
        let mut rng = self.palette.lock().unwrap_or_else(|e| e.into_inner());
        PROJECT_COLORS
            .choose(&mut *rng)
            .copied()
            .unwrap_or_default()
            .to_string()
    }

    // ─── Persona ──────────────────────────────────────────────────────────

    /// Two-sentence aesthetic description for the chosen styles. Failures
    /// are returned to the caller; only an empty reply is papered over.
    pub async fn generate_persona(&self, styles: &[String]) -> Result<String> {
        if !self.configured() {
            return Err(AdvisorError::NotConfigured);
        }
        let response = self
            .service
            .generate(GenerateRequest::text(prompt::persona(styles)))
            .await
            .inspect_err(|e| warn!(error = %e, "persona generation failed"))?;
        let text = response.text();
        let text = text.trim();
        if text.is_empty() {
            Ok(PERSONA_PLACEHOLDER.to_string())
        } else {
            Ok(text.to_string())
        }
    }

    // ─── Recommendations ──────────────────────────────────────────────────

    /// Recommended projects for the profile. Degrades to an empty list on
    /// any service or decode failure.
    pub async fn recommended_projects(
        &self,
        profile: &UserProfile,
        inventory: &[Material],
    ) -> Vec<Project> {
        match self.try_recommended_projects(profile, inventory).await {
            Ok(projects) => projects,
            Err(e) => {
                warn!(error = %e, "recommendations unavailable");
                Vec::new()
            }
        }
    }

    async fn try_recommended_projects(
        &self,
        profile: &UserProfile,
        inventory: &[Material],
    ) -> Result<Vec<Project>> {
        let request = GenerateRequest::json(
            prompt::recommendations(profile, inventory, self.count),
            schema::project_list(),
        );
        let response = self.service.generate(request).await?;
        let items = match parse_array(&response.text()) {
            Ok(items) => items,
            Err(e) => {
                warn!(error = %e, "could not decode recommendations");
                return Ok(Vec::new());
            }
        };
        let stamp = now_millis();
        let projects: Vec<Project> = items
            .iter()
            .enumerate()
            .map(|(i, item)| {
                let defaults = ProjectDefaults {
                    id: format!("gen-{stamp}-{i}"),
                    title: "Untitled Project",
                    time_estimate: "1h",
                    match_score: 50,
                };
                project_from_value(item, &defaults, &self.pick_color())
            })
            .collect();
        info!(count = projects.len(), "recommendations decoded");
        Ok(projects)
    }

    // ─── Stash buster ─────────────────────────────────────────────────────

    /// One project built only from what is already in the stash. `None` for
    /// an empty inventory (no call is made) and on any failure.
    pub async fn stash_buster(&self, inventory: &[Material]) -> Option<Project> {
        if inventory.is_empty() {
            return None;
        }
        let request = GenerateRequest::json(prompt::stash_buster(inventory), schema::project());
        let response = match self.service.generate(request).await {
            Ok(r) => r,
            Err(e) => {
                warn!(error = %e, "stash buster unavailable");
                return None;
            }
        };
        let map = match parse_object(&response.text()) {
            Ok(map) => map,
            Err(e) => {
                warn!(error = %e, "could not decode stash buster");
                return None;
            }
        };
        let defaults = ProjectDefaults {
            id: format!("stash-{}", now_millis()),
            title: "Stash Buster",
            time_estimate: "30m",
            match_score: 90,
        };
        Some(project_from_value(
            &serde_json::Value::Object(map),
            &defaults,
            &self.pick_color(),
        ))
    }

    // ─── Resources ────────────────────────────────────────────────────────

    /// Up to three tutorial or recipe links from a web-grounded search,
    /// unique by URI in first-seen order. Empty on any failure.
    pub async fn find_resources(&self, title: &str, category: ProjectCategory) -> Vec<SearchResult> {
        let request = GenerateRequest::web_grounded(prompt::resources(title, category));
        let response = match self.service.generate(request).await {
            Ok(r) => r,
            Err(e) => {
                warn!(error = %e, "resource search unavailable");
                return Vec::new();
            }
        };

        let mut results: Vec<SearchResult> = Vec::new();
        for web in response.grounding_chunks().iter().filter_map(|c| c.web.as_ref()) {
            let Some(uri) = web.uri.as_deref().filter(|u| !u.is_empty()) else {
                continue;
            };
            if results.iter().any(|r| r.uri == uri) {
                continue;
            }
            results.push(SearchResult {
                title: web.title.clone().unwrap_or_else(|| uri.to_string()),
                uri: uri.to_string(),
            });
            if results.len() == MAX_RESOURCES {
                break;
            }
        }
        results
    }
}

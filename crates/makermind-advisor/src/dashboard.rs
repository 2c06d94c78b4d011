use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use makermind_core::types::{Material, Project, UserProfile};
use tracing::debug;

use crate::advisor::Advisor;

/// Liveness flag shared between a view and the requests it started.
///
/// Clones observe the same flag. Once [`end`](Self::end) is called, results
/// that resolve afterwards are dropped instead of being applied.
#[derive(Debug, Clone)]
pub struct ViewLifetime(Arc<AtomicBool>);

impl ViewLifetime {
    pub fn new() -> Self {
        ViewLifetime(Arc::new(AtomicBool::new(true)))
    }

    pub fn end(&self) {
        self.0.store(false, Ordering::SeqCst);
    }

    pub fn is_alive(&self) -> bool {
        self.0.load(Ordering::SeqCst)
    }
}

impl Default for ViewLifetime {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug, Clone, Default)]
pub struct DashboardFeed {
    pub projects: Vec<Project>,
    pub stash_buster: Option<Project>,
}

#[derive(Debug, Clone)]
pub enum DashboardLoad {
    /// No credential; the host shows setup guidance.
    ConfigurationNeeded,
    Loaded(DashboardFeed),
}

/// Fetch recommendations and the stash buster concurrently.
///
/// The two calls are independent: one failing leaves the other's result in
/// place. Returns `None` when `lifetime` ended before both resolved.
pub async fn load_dashboard(
    advisor: &Advisor,
    profile: &UserProfile,
    inventory: &[Material],
    lifetime: &ViewLifetime,
) -> Option<DashboardLoad> {
    if !advisor.configured() {
        return Some(DashboardLoad::ConfigurationNeeded);
    }
    let (projects, stash_buster) = tokio::join!(
        advisor.recommended_projects(profile, inventory),
        advisor.stash_buster(inventory),
    );
    if !lifetime.is_alive() {
        debug!("dashboard torn down before load finished; discarding results");
        return None;
    }
    Some(DashboardLoad::Loaded(DashboardFeed {
        projects,
        stash_buster,
    }))
}

//! View controller: one immutable [`AppState`] value and a pure
//! [`transition`] function. Persistence of touched slots is the caller's job
//! (see [`crate::session::Session`]).

use crate::error::MakerError;
use crate::store::{PersistedSlots, Slot};
use crate::types::{Material, Project, Review, UserProfile};
use crate::{inventory, review, saved, schedule};
use serde::{Deserialize, Serialize};
use std::fmt;

// ---------------------------------------------------------------------------
// View
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum View {
    Onboarding,
    Dashboard,
    Inventory,
    ProjectDetail,
    Calendar,
    Saved,
}

impl View {
    pub fn as_str(self) -> &'static str {
        match self {
            View::Onboarding => "onboarding",
            View::Dashboard => "dashboard",
            View::Inventory => "inventory",
            View::ProjectDetail => "project_detail",
            View::Calendar => "calendar",
            View::Saved => "saved",
        }
    }
}

impl fmt::Display for View {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for View {
    type Err = MakerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "onboarding" => Ok(View::Onboarding),
            "dashboard" => Ok(View::Dashboard),
            "inventory" => Ok(View::Inventory),
            "project_detail" => Ok(View::ProjectDetail),
            "calendar" => Ok(View::Calendar),
            "saved" => Ok(View::Saved),
            _ => Err(MakerError::UnknownView(s.to_string())),
        }
    }
}

// ---------------------------------------------------------------------------
// Action
// ---------------------------------------------------------------------------

#[derive(Debug, Clone)]
pub enum Action {
    CompleteOnboarding(UserProfile),
    EditProfile,
    Navigate(View),
    SelectProject(Project),
    BackToDashboard,
    AddMaterial(Material),
    RemoveMaterial(String),
    ToggleSave(Project),
    RemoveSaved(String),
    AssignToDay { day: String, project_id: String },
    UnassignFromDay { day: String, project_id: String },
    AddReview(Review),
}

// ---------------------------------------------------------------------------
// AppState
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq)]
pub struct AppState {
    pub view: View,
    /// Transient; never persisted.
    pub selected_project: Option<Project>,
    pub slots: PersistedSlots,
}

impl AppState {
    /// Initial state from persisted slots: onboarding without a profile,
    /// dashboard otherwise.
    pub fn boot(slots: PersistedSlots) -> Self {
        let view = if slots.profile.is_some() {
            View::Dashboard
        } else {
            View::Onboarding
        };
        AppState {
            view,
            selected_project: None,
            slots,
        }
    }

    pub fn has_profile(&self) -> bool {
        self.slots.profile.is_some()
    }
}

/// Result of one transition: the next state plus the slots it changed.
#[derive(Debug, Clone)]
pub struct Transition {
    pub state: AppState,
    pub touched: Vec<Slot>,
}

impl Transition {
    fn view_only(state: AppState) -> Self {
        Transition {
            state,
            touched: Vec::new(),
        }
    }

    fn touching(state: AppState, slot: Slot) -> Self {
        Transition {
            state,
            touched: vec![slot],
        }
    }
}

/// Compute the next state. Never fails; intents that make no sense in the
/// current state leave it unchanged.
pub fn transition(prev: &AppState, action: Action) -> Transition {
    let mut next = prev.clone();
    let result = match action {
        Action::CompleteOnboarding(profile) => {
            next.slots.profile = Some(profile);
            next.view = View::Dashboard;
            next.selected_project = None;
            Transition::touching(next, Slot::Profile)
        }
        Action::EditProfile => {
            next.view = View::Onboarding;
            Transition::view_only(next)
        }
        Action::Navigate(view) => {
            next.view = view;
            Transition::view_only(next)
        }
        Action::SelectProject(project) => {
            next.selected_project = Some(project);
            next.view = View::ProjectDetail;
            Transition::view_only(next)
        }
        Action::BackToDashboard => {
            next.view = View::Dashboard;
            Transition::view_only(next)
        }
        Action::AddMaterial(item) => {
            next.slots.inventory = inventory::add_material(&prev.slots.inventory, item);
            Transition::touching(next, Slot::Inventory)
        }
        Action::RemoveMaterial(id) => {
            next.slots.inventory = inventory::remove_material(&prev.slots.inventory, &id);
            Transition::touching(next, Slot::Inventory)
        }
        Action::ToggleSave(project) => {
            next.slots.saved_projects = saved::toggle_save(&prev.slots.saved_projects, &project);
            Transition::touching(next, Slot::SavedProjects)
        }
        Action::RemoveSaved(id) => {
            next.slots.saved_projects = saved::remove_saved(&prev.slots.saved_projects, &id);
            Transition::touching(next, Slot::SavedProjects)
        }
        Action::AssignToDay { day, project_id } => {
            next.slots.schedule = schedule::assign_to_day(&prev.slots.schedule, &day, &project_id);
            Transition::touching(next, Slot::Schedule)
        }
        Action::UnassignFromDay { day, project_id } => {
            next.slots.schedule =
                schedule::unassign_from_day(&prev.slots.schedule, &day, &project_id);
            Transition::touching(next, Slot::Schedule)
        }
        Action::AddReview(r) => {
            next.slots.reviews = review::add_review(&prev.slots.reviews, r);
            Transition::touching(next, Slot::Reviews)
        }
    };
    settle(result)
}

/// Apply the guards that keep the view consistent with the data.
fn settle(mut t: Transition) -> Transition {
    if !t.state.has_profile() {
        t.state.view = View::Onboarding;
    } else if t.state.view == View::ProjectDetail && t.state.selected_project.is_none() {
        t.state.view = View::Dashboard;
    }
    t
}

//! Onboarding draft: the profile under construction while the maker picks
//! styles, tools, skills and a budget. The same draft serves first-run
//! creation and later edits.

use crate::types::{SkillLevel, UserProfile};
use std::collections::BTreeMap;

pub const DEFAULT_NAME: &str = "Maker";
pub const DEFAULT_BUDGET: f64 = 25.0;
pub const FALLBACK_DESCRIPTION: &str = "A creative maker.";

#[derive(Debug, Clone, PartialEq)]
pub struct OnboardingDraft {
    pub name: String,
    pub styles: Vec<String>,
    pub style_description: Option<String>,
    pub tools: Vec<String>,
    pub skills: BTreeMap<String, SkillLevel>,
    pub per_project_budget: f64,
    original_styles: Vec<String>,
}

impl Default for OnboardingDraft {
    fn default() -> Self {
        Self::with_defaults(DEFAULT_NAME, DEFAULT_BUDGET)
    }
}

impl OnboardingDraft {
    pub fn with_defaults(name: &str, budget: f64) -> Self {
        Self {
            name: name.to_string(),
            styles: Vec::new(),
            style_description: None,
            tools: Vec::new(),
            skills: BTreeMap::new(),
            per_project_budget: budget,
            original_styles: Vec::new(),
        }
    }

    /// Start from an existing profile (edit mode).
    pub fn from_profile(profile: &UserProfile) -> Self {
        Self {
            name: profile.name.clone(),
            styles: profile.styles.clone(),
            style_description: Some(profile.style_description.clone())
                .filter(|d| !d.trim().is_empty()),
            tools: profile.tools.clone(),
            skills: profile.skills.clone(),
            per_project_budget: profile.per_project_budget,
            original_styles: profile.styles.clone(),
        }
    }

    pub fn toggle_style(&mut self, id: &str) {
        toggle(&mut self.styles, id);
    }

    pub fn toggle_tool(&mut self, name: &str) {
        toggle(&mut self.tools, name);
    }

    pub fn set_skill(&mut self, category: &str, level: SkillLevel) {
        self.skills.insert(category.to_string(), level);
    }

    pub fn set_budget(&mut self, amount: f64) {
        self.per_project_budget = if amount.is_finite() { amount.max(0.0) } else { 0.0 };
    }

    pub fn set_name(&mut self, name: &str) {
        self.name = name.trim().to_string();
    }

    /// The persona text must be (re)generated when there is none yet or the
    /// style set differs from the one the draft was opened with.
    pub fn needs_persona(&self) -> bool {
        self.style_description.is_none() || self.styles_changed()
    }

    fn styles_changed(&self) -> bool {
        let mut before = self.original_styles.clone();
        let mut after = self.styles.clone();
        before.sort();
        after.sort();
        before != after
    }

    /// Produce the final profile. `persona` replaces the current description
    /// when provided.
    pub fn finish(self, persona: Option<String>) -> UserProfile {
        let name = if self.name.trim().is_empty() {
            DEFAULT_NAME.to_string()
        } else {
            self.name
        };
        let per_project_budget = if self.per_project_budget > 0.0 {
            self.per_project_budget
        } else {
            DEFAULT_BUDGET
        };
        let style_description = persona
            .or(self.style_description)
            .filter(|d| !d.trim().is_empty())
            .unwrap_or_else(|| FALLBACK_DESCRIPTION.to_string());
        UserProfile {
            name,
            styles: self.styles,
            style_description,
            tools: self.tools,
            skills: self.skills,
            per_project_budget,
        }
    }
}

fn toggle(list: &mut Vec<String>, value: &str) {
    if let Some(pos) = list.iter().position(|v| v == value) {
        list.remove(pos);
    } else {
        list.push(value.to_string());
    }
}

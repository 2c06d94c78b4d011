use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

// ---------------------------------------------------------------------------
// SkillLevel
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum SkillLevel {
    Novice,
    Intermediate,
    Expert,
}

impl SkillLevel {
    pub fn all() -> &'static [SkillLevel] {
        &[
            SkillLevel::Novice,
            SkillLevel::Intermediate,
            SkillLevel::Expert,
        ]
    }

    pub fn as_str(self) -> &'static str {
        match self {
            SkillLevel::Novice => "Novice",
            SkillLevel::Intermediate => "Intermediate",
            SkillLevel::Expert => "Expert",
        }
    }
}

impl fmt::Display for SkillLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for SkillLevel {
    type Err = crate::error::MakerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "novice" => Ok(SkillLevel::Novice),
            "intermediate" => Ok(SkillLevel::Intermediate),
            "expert" => Ok(SkillLevel::Expert),
            _ => Err(crate::error::MakerError::UnknownSkillLevel(s.to_string())),
        }
    }
}

// ---------------------------------------------------------------------------
// UserProfile
// ---------------------------------------------------------------------------

/// The maker's onboarding answers. Replaced wholesale on edit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    pub name: String,
    #[serde(default)]
    pub styles: Vec<String>,
    #[serde(default)]
    pub style_description: String,
    #[serde(default)]
    pub tools: Vec<String>,
    #[serde(default)]
    pub skills: BTreeMap<String, SkillLevel>,
    #[serde(default)]
    pub per_project_budget: f64,
}

// ---------------------------------------------------------------------------
// Material
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Material {
    pub id: String,
    pub name: String,
    pub quantity: String,
    pub category: String,
}

// ---------------------------------------------------------------------------
// ProjectCategory
// ---------------------------------------------------------------------------

/// Stored values are read through [`ProjectCategory::from_loose`], so a
/// saved project with an unfamiliar category still loads.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String")]
pub enum ProjectCategory {
    Baking,
    Cooking,
    #[default]
    Crafts,
    #[serde(rename = "Home Decor")]
    HomeDecor,
    Woodworking,
}

impl ProjectCategory {
    pub fn as_str(self) -> &'static str {
        match self {
            ProjectCategory::Baking => "Baking",
            ProjectCategory::Cooking => "Cooking",
            ProjectCategory::Crafts => "Crafts",
            ProjectCategory::HomeDecor => "Home Decor",
            ProjectCategory::Woodworking => "Woodworking",
        }
    }

    /// Lenient mapping used for service output and stored records. Anything
    /// outside the fixed set lands in `Crafts`.
    pub fn from_loose(s: &str) -> Self {
        let normalized: String = s
            .chars()
            .filter(|c| c.is_alphanumeric())
            .collect::<String>()
            .to_ascii_lowercase();
        match normalized.as_str() {
            "baking" => ProjectCategory::Baking,
            "cooking" => ProjectCategory::Cooking,
            "homedecor" => ProjectCategory::HomeDecor,
            "woodworking" => ProjectCategory::Woodworking,
            _ => ProjectCategory::Crafts,
        }
    }
}

impl From<String> for ProjectCategory {
    fn from(s: String) -> Self {
        ProjectCategory::from_loose(&s)
    }
}

impl fmt::Display for ProjectCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Project
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiyAlternative {
    pub material: String,
    pub instruction: String,
}

/// A recommended project. Produced by the advisor; never edited locally.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub category: ProjectCategory,
    #[serde(default)]
    pub time_estimate: String,
    pub match_score: u8,
    #[serde(default)]
    pub missing_tools: Vec<String>,
    #[serde(default)]
    pub missing_materials: Vec<String>,
    #[serde(default)]
    pub materials: Vec<String>,
    #[serde(default)]
    pub diy_alternatives: Vec<DiyAlternative>,
    #[serde(default)]
    pub steps: Vec<String>,
    #[serde(default)]
    pub cost_estimate: f64,
    #[serde(default)]
    pub color: String,
}

// ---------------------------------------------------------------------------
// Review
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Review {
    pub id: String,
    pub project_id: String,
    pub rating: u8,
    pub text: String,
    pub date: String,
}

// ---------------------------------------------------------------------------
// SearchResult
// ---------------------------------------------------------------------------

/// A tutorial or recipe link found by a web-grounded search.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchResult {
    pub title: String,
    pub uri: String,
}

// ---------------------------------------------------------------------------
// Collections
// ---------------------------------------------------------------------------

/// Day name → ordered project ids. An id appears at most once per day.
pub type WeeklySchedule = BTreeMap<String, Vec<String>>;

/// Project id → reviews, newest first.
pub type ReviewBook = BTreeMap<String, Vec<Review>>;

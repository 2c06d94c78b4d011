//! Prompt text sent to the generative service.

use makermind_core::types::{Material, ProjectCategory, UserProfile};

/// `"Flour (2 cups), Yarn (1 ball)"`.
pub fn inventory_list(inventory: &[Material]) -> String {
    inventory
        .iter()
        .map(|m| format!("{} ({})", m.name, m.quantity))
        .collect::<Vec<_>>()
        .join(", ")
}

pub fn persona(styles: &[String]) -> String {
    format!(
        "The user identifies with these design styles: {}.\n\
         Write a concise, 2-sentence description of their \"Maker Persona\" and aesthetic preferences.\n\
         Focus on the vibe, color palette, and atmosphere they likely enjoy.",
        styles.join(", ")
    )
}

pub fn recommendations(profile: &UserProfile, inventory: &[Material], count: usize) -> String {
    let skills = serde_json::to_string(&profile.skills).unwrap_or_else(|_| "{}".to_string());
    format!(
        "You are \"MakerMind\". Suggest {count} DIY projects (Baking, Cooking, Crafts, Home Decor, Woodworking).\n\
         \n\
         Profile:\n\
         - Styles: {styles}\n\
         - Style: {description}\n\
         - Tools/Stash: {tools}\n\
         - Skills: {skills}\n\
         - Inventory: {inventory}\n\
         - Target Cost: ~${budget} per project (Strict constraint)\n\
         \n\
         Constraints:\n\
         1. Match aesthetic.\n\
         2. Use inventory/tools if possible.\n\
         3. Calc Match Score (0-100).\n\
         4. Description max 15 words. (Be extremely concise)\n\
         5. Max 3 steps per project. (Brief summary steps only)\n\
         6. Missing materials list must be short.\n\
         7. CRITICAL: If a required material (like clay, mod podge, buttermilk, oat flour, paint) \
         can be made at home from scratch, provide a 'diyAlternatives' entry explaining how to make it.\n\
         \n\
         Return RAW JSON array.",
        styles = profile.styles.join(", "),
        description = profile.style_description,
        tools = profile.tools.join(", "),
        inventory = inventory_list(inventory),
        budget = profile.per_project_budget,
    )
}

pub fn stash_buster(inventory: &[Material]) -> String {
    format!(
        "Suggest ONE small, creative project using ONLY: {} (plus household basics like flour, salt, glue, water).\n\
         Concise description (max 20 words). Max 4 steps.\n\
         If you use a material like 'Clay' or 'Glue' that can be homemade, include it in diyAlternatives.\n\
         Return RAW JSON object.",
        inventory_list(inventory)
    )
}

/// Bakes are looked up as recipes, everything else as tutorials.
pub fn search_term(title: &str, category: ProjectCategory) -> String {
    match category {
        ProjectCategory::Baking => format!("recipe for {title}"),
        _ => format!("tutorial how to make {title}"),
    }
}

pub fn resources(title: &str, category: ProjectCategory) -> String {
    format!(
        "Find the best top 3 online tutorials or recipes for: \"{title}\". Search for: {}.",
        search_term(title, category)
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use makermind_core::types::SkillLevel;
    use std::collections::BTreeMap;

    fn material(name: &str, qty: &str) -> Material {
        Material {
            id: name.to_lowercase(),
            name: name.to_string(),
            quantity: qty.to_string(),
            category: "General".to_string(),
        }
    }

    #[test]
    fn inventory_renders_name_and_quantity() {
        let inv = vec![material("Flour", "2 cups"), material("Yarn", "1 ball")];
        assert_eq!(inventory_list(&inv), "Flour (2 cups), Yarn (1 ball)");
        assert_eq!(inventory_list(&[]), "");
    }

    #[test]
    fn recommendations_prompt_carries_profile() {
        let mut skills = BTreeMap::new();
        skills.insert("Baking".to_string(), SkillLevel::Expert);
        let profile = UserProfile {
            name: "Ana".into(),
            styles: vec!["cottagecore".into(), "boho".into()],
            style_description: "Soft florals and warm wood.".into(),
            tools: vec!["Oven".into()],
            skills,
            per_project_budget: 30.0,
        };
        let p = recommendations(&profile, &[material("Flour", "2 cups")], 5);
        assert!(p.contains("Suggest 5 DIY projects"));
        assert!(p.contains("cottagecore, boho"));
        assert!(p.contains("Soft florals and warm wood."));
        assert!(p.contains(r#"{"Baking":"Expert"}"#));
        assert!(p.contains("Flour (2 cups)"));
        assert!(p.contains("~$30 per project"));
    }

    #[test]
    fn search_term_depends_on_category() {
        assert_eq!(
            search_term("Sourdough", ProjectCategory::Baking),
            "recipe for Sourdough"
        );
        assert_eq!(
            search_term("Birdhouse", ProjectCategory::Woodworking),
            "tutorial how to make Birdhouse"
        );
        assert!(resources("Sourdough", ProjectCategory::Baking).contains("recipe for Sourdough"));
    }

    #[test]
    fn persona_prompt_lists_styles() {
        let p = persona(&["minimalist".to_string(), "industrial".to_string()]);
        assert!(p.contains("minimalist, industrial"));
    }
}

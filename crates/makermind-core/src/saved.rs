//! Saved-projects reducers and the budget filter shown on the saved screen.

use crate::types::Project;

/// Remove the project if its id is already saved, otherwise append it.
/// Applying this twice with the same project restores the original list.
pub fn toggle_save(prev: &[Project], project: &Project) -> Vec<Project> {
    if prev.iter().any(|p| p.id == project.id) {
        remove_saved(prev, &project.id)
    } else {
        let mut next = prev.to_vec();
        next.push(project.clone());
        next
    }
}

/// Remove by id only; used where the caller holds no full project.
pub fn remove_saved(prev: &[Project], id: &str) -> Vec<Project> {
    prev.iter().filter(|p| p.id != id).cloned().collect()
}

pub fn is_saved(saved: &[Project], id: &str) -> bool {
    saved.iter().any(|p| p.id == id)
}

/// Projects whose cost estimate is within `max_cost`.
pub fn within_budget(saved: &[Project], max_cost: f64) -> Vec<&Project> {
    saved.iter().filter(|p| p.cost_estimate <= max_cost).collect()
}

/// Upper bound for the budget slider: the most expensive saved project,
/// never below 100.
pub fn budget_ceiling(saved: &[Project]) -> f64 {
    saved
        .iter()
        .map(|p| p.cost_estimate)
        .fold(100.0_f64, f64::max)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::ProjectCategory;

    fn project(id: &str, cost: f64) -> Project {
        Project {
            id: id.to_string(),
            title: format!("Project {id}"),
            description: String::new(),
            category: ProjectCategory::Crafts,
            time_estimate: "1h".to_string(),
            match_score: 50,
            missing_tools: vec![],
            missing_materials: vec![],
            materials: vec![],
            diy_alternatives: vec![],
            steps: vec![],
            cost_estimate: cost,
            color: "bg-sol-500".to_string(),
        }
    }

    #[test]
    fn toggle_twice_is_involution() {
        let original = vec![project("a", 5.0), project("b", 10.0)];
        for candidate in [project("c", 1.0), project("a", 5.0)] {
            let once = toggle_save(&original, &candidate);
            let twice = toggle_save(&once, &candidate);
            assert_eq!(twice.len(), original.len());
            let ids = |v: &[Project]| {
                let mut ids: Vec<String> = v.iter().map(|p| p.id.clone()).collect();
                ids.sort();
                ids
            };
            assert_eq!(ids(&twice), ids(&original));
        }
    }

    #[test]
    fn toggle_appends_new_at_end() {
        let next = toggle_save(&[project("a", 1.0)], &project("b", 2.0));
        assert_eq!(next.last().map(|p| p.id.as_str()), Some("b"));
    }

    #[test]
    fn toggle_removes_existing_by_id() {
        let next = toggle_save(&[project("a", 1.0), project("b", 2.0)], &project("a", 99.0));
        assert_eq!(next.len(), 1);
        assert!(!is_saved(&next, "a"));
    }

    #[test]
    fn budget_filter_is_inclusive() {
        let saved = vec![project("a", 10.0), project("b", 25.0), project("c", 40.0)];
        let ids: Vec<_> = within_budget(&saved, 25.0).iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, ["a", "b"]);
    }

    #[test]
    fn budget_ceiling_floors_at_one_hundred() {
        assert_eq!(budget_ceiling(&[]), 100.0);
        assert_eq!(budget_ceiling(&[project("a", 20.0)]), 100.0);
        assert_eq!(budget_ceiling(&[project("a", 250.0)]), 250.0);
    }
}

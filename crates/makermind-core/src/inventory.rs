//! Inventory ("stash") reducers.

use crate::ids;
use crate::types::Material;

pub const DEFAULT_QUANTITY: &str = "1 unit";
pub const DEFAULT_CATEGORY: &str = "General";

/// Build a new material from user input. Blank names are rejected.
pub fn new_material(name: &str, quantity: Option<&str>, category: Option<&str>) -> Option<Material> {
    let name = name.trim();
    if name.is_empty() {
        return None;
    }
    let quantity = quantity
        .map(str::trim)
        .filter(|q| !q.is_empty())
        .unwrap_or(DEFAULT_QUANTITY);
    let category = category
        .map(str::trim)
        .filter(|c| !c.is_empty())
        .unwrap_or(DEFAULT_CATEGORY);
    Some(Material {
        id: ids::next_id(),
        name: name.to_string(),
        quantity: quantity.to_string(),
        category: category.to_string(),
    })
}

/// Append `item`. An id already in the list makes this a no-op so the
/// inventory never holds two materials with the same id.
pub fn add_material(prev: &[Material], item: Material) -> Vec<Material> {
    let mut next = prev.to_vec();
    if !prev.iter().any(|m| m.id == item.id) {
        next.push(item);
    }
    next
}

/// Drop the material with `id`; unknown ids leave the list unchanged.
pub fn remove_material(prev: &[Material], id: &str) -> Vec<Material> {
    prev.iter().filter(|m| m.id != id).cloned().collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn mat(id: &str, name: &str) -> Material {
        Material {
            id: id.to_string(),
            name: name.to_string(),
            quantity: DEFAULT_QUANTITY.to_string(),
            category: DEFAULT_CATEGORY.to_string(),
        }
    }

    #[test]
    fn add_appends_at_end() {
        let inv = add_material(&[mat("1", "Flour")], mat("2", "Salt"));
        let names: Vec<_> = inv.iter().map(|m| m.name.as_str()).collect();
        assert_eq!(names, ["Flour", "Salt"]);
    }

    #[test]
    fn add_does_not_mutate_input() {
        let prev = vec![mat("1", "Flour")];
        let _ = add_material(&prev, mat("2", "Salt"));
        assert_eq!(prev.len(), 1);
    }

    #[test]
    fn add_duplicate_id_is_noop() {
        let prev = vec![mat("1", "Flour")];
        let next = add_material(&prev, mat("1", "Something else"));
        assert_eq!(next, prev);
    }

    #[test]
    fn remove_unknown_id_leaves_list_unchanged() {
        let prev = vec![mat("1", "Flour"), mat("2", "Salt")];
        assert_eq!(remove_material(&prev, "404"), prev);
    }

    #[test]
    fn remove_filters_by_id() {
        let prev = vec![mat("1", "Flour"), mat("2", "Salt")];
        let next = remove_material(&prev, "1");
        assert_eq!(next, vec![mat("2", "Salt")]);
    }

    #[test]
    fn mixed_sequence_keeps_ids_unique() {
        let mut inv = Vec::new();
        let ops: &[(&str, bool)] = &[
            ("a", true),
            ("b", true),
            ("a", true),
            ("c", true),
            ("b", false),
            ("b", true),
            ("z", false),
            ("c", true),
        ];
        for (id, add) in ops {
            inv = if *add {
                add_material(&inv, mat(id, "thing"))
            } else {
                remove_material(&inv, id)
            };
            let unique: HashSet<_> = inv.iter().map(|m| m.id.as_str()).collect();
            assert_eq!(unique.len(), inv.len());
        }
        let ids: Vec<_> = inv.iter().map(|m| m.id.as_str()).collect();
        assert_eq!(ids, ["a", "c", "b"]);
    }

    #[test]
    fn new_material_applies_defaults() {
        let m = new_material("  Acrylic Paint ", None, Some("")).unwrap();
        assert_eq!(m.name, "Acrylic Paint");
        assert_eq!(m.quantity, "1 unit");
        assert_eq!(m.category, "General");
        assert!(!m.id.is_empty());
    }

    #[test]
    fn new_material_rejects_blank_name() {
        assert!(new_material("   ", Some("3"), None).is_none());
    }
}

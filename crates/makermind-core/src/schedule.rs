//! Weekly planner reducers.
//!
//! Ids in the schedule are not checked against the saved collection; a
//! project removed from "saved" can leave a stale id behind, and
//! [`projects_for_day`] filters those out when reading.

use crate::types::{Project, WeeklySchedule};

/// Append `project_id` to `day` unless it is already there.
pub fn assign_to_day(prev: &WeeklySchedule, day: &str, project_id: &str) -> WeeklySchedule {
    let mut next = prev.clone();
    let ids = next.entry(day.to_string()).or_default();
    if !ids.iter().any(|id| id == project_id) {
        ids.push(project_id.to_string());
    }
    next
}

/// Remove `project_id` from `day`. Missing day or id is a no-op.
pub fn unassign_from_day(prev: &WeeklySchedule, day: &str, project_id: &str) -> WeeklySchedule {
    let mut next = prev.clone();
    if let Some(ids) = next.get_mut(day) {
        ids.retain(|id| id != project_id);
    }
    next
}

/// Saved projects scheduled on `day`, in saved-collection order.
pub fn projects_for_day<'a>(
    schedule: &WeeklySchedule,
    saved: &'a [Project],
    day: &str,
) -> Vec<&'a Project> {
    let Some(ids) = schedule.get(day) else {
        return Vec::new();
    };
    saved.iter().filter(|p| ids.contains(&p.id)).collect()
}

/// Scheduled ids with no matching saved project.
pub fn stale_ids<'a>(schedule: &'a WeeklySchedule, saved: &[Project]) -> Vec<(&'a str, &'a str)> {
    schedule
        .iter()
        .flat_map(|(day, ids)| ids.iter().map(move |id| (day.as_str(), id.as_str())))
        .filter(|(_, id)| !saved.iter().any(|p| p.id == *id))
        .collect()
}

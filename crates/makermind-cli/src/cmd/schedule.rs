use crate::output::{print_json, print_table};
use clap::Subcommand;
use makermind_core::catalog::{canonical_day, WEEK_DAYS};
use makermind_core::schedule::projects_for_day;
use makermind_core::session::Session;
use makermind_core::view::{Action, View};
use std::path::Path;

#[derive(Subcommand)]
pub enum ScheduleSubcommand {
    /// Plan a saved project on a day (e.g. `mon`, `Tuesday`)
    Assign { day: String, project_id: String },
    /// Take a project off a day
    Remove { day: String, project_id: String },
    /// Show the week
    Show,
}

pub fn run(root: &Path, subcmd: ScheduleSubcommand, json: bool) -> anyhow::Result<()> {
    match subcmd {
        ScheduleSubcommand::Assign { day, project_id } => assign(root, &day, &project_id, json),
        ScheduleSubcommand::Remove { day, project_id } => remove(root, &day, &project_id, json),
        ScheduleSubcommand::Show => show(root, json),
    }
}

fn assign(root: &Path, day: &str, project_id: &str, json: bool) -> anyhow::Result<()> {
    let day = canonical_day(day)?;
    let mut session = Session::open(root);
    let title = super::find_saved(&session, project_id)?.title.clone();
    session.dispatch(Action::AssignToDay {
        day: day.to_string(),
        project_id: project_id.to_string(),
    })?;

    if json {
        print_json(&serde_json::json!({ "day": day, "project_id": project_id }))?;
    } else {
        println!("Planned \"{title}\" on {day}");
    }
    Ok(())
}

fn remove(root: &Path, day: &str, project_id: &str, json: bool) -> anyhow::Result<()> {
    let day = canonical_day(day)?;
    let mut session = Session::open(root);
    session.dispatch(Action::UnassignFromDay {
        day: day.to_string(),
        project_id: project_id.to_string(),
    })?;

    if json {
        print_json(&serde_json::json!({ "day": day, "project_id": project_id }))?;
    } else {
        println!("Unplanned [{project_id}] from {day}");
    }
    Ok(())
}

fn show(root: &Path, json: bool) -> anyhow::Result<()> {
    let mut session = Session::open(root);
    session.dispatch(Action::Navigate(View::Calendar))?;
    let slots = &session.state().slots;

    if json {
        let week: serde_json::Map<String, serde_json::Value> = WEEK_DAYS
            .iter()
            .map(|day| {
                let projects = projects_for_day(&slots.schedule, &slots.saved_projects, day);
                (day.to_string(), serde_json::json!(projects))
            })
            .collect();
        return print_json(&week);
    }

    let rows = WEEK_DAYS
        .iter()
        .map(|day| {
            let titles: Vec<String> =
                projects_for_day(&slots.schedule, &slots.saved_projects, day)
                    .iter()
                    .map(|p| format!("{} [{}]", p.title, p.id))
                    .collect();
            vec![day.to_string(), titles.join(", ")]
        })
        .collect();
    print_table(&["DAY", "PROJECTS"], rows);
    Ok(())
}

use crate::output::{money, print_json, print_project_detail, print_projects};
use clap::Subcommand;
use makermind_core::review::{average_rating, reviews_for};
use makermind_core::saved::{budget_ceiling, within_budget};
use makermind_core::session::Session;
use makermind_core::view::{Action, View};
use std::path::Path;

#[derive(Subcommand)]
pub enum SavedSubcommand {
    /// List saved projects
    List {
        /// Only projects costing at most this much
        #[arg(long)]
        max_cost: Option<f64>,
    },
    /// Show one saved project in full
    Show { id: String },
    /// Remove a saved project
    Remove { id: String },
}

pub fn run(root: &Path, subcmd: SavedSubcommand, json: bool) -> anyhow::Result<()> {
    match subcmd {
        SavedSubcommand::List { max_cost } => list(root, max_cost, json),
        SavedSubcommand::Show { id } => show(root, &id, json),
        SavedSubcommand::Remove { id } => remove(root, &id, json),
    }
}

fn list(root: &Path, max_cost: Option<f64>, json: bool) -> anyhow::Result<()> {
    let mut session = Session::open(root);
    session.dispatch(Action::Navigate(View::Saved))?;
    let saved = &session.state().slots.saved_projects;
    let ceiling = budget_ceiling(saved);
    let shown = within_budget(saved, max_cost.unwrap_or(ceiling));

    if json {
        print_json(&serde_json::json!({
            "ceiling": ceiling,
            "projects": shown,
        }))?;
        return Ok(());
    }
    print_projects(&shown);
    if shown.len() < saved.len() {
        println!(
            "\n{} of {} saved projects within {}",
            shown.len(),
            saved.len(),
            money(max_cost.unwrap_or(ceiling))
        );
    }
    Ok(())
}

fn show(root: &Path, id: &str, json: bool) -> anyhow::Result<()> {
    let mut session = Session::open(root);
    let project = super::find_saved(&session, id)?.clone();
    session.dispatch(Action::SelectProject(project))?;
    let state = session.state();
    let Some(project) = state.selected_project.as_ref() else {
        return Ok(());
    };
    let reviews = reviews_for(&state.slots.reviews, id);

    if json {
        print_json(&serde_json::json!({
            "project": project,
            "reviews": reviews,
            "average_rating": average_rating(&state.slots.reviews, id),
        }))?;
        return Ok(());
    }
    print_project_detail(project);
    if let Some(avg) = average_rating(&state.slots.reviews, id) {
        println!("\nRated {avg:.1}/5 across {} review(s)", reviews.len());
    }
    Ok(())
}

fn remove(root: &Path, id: &str, json: bool) -> anyhow::Result<()> {
    let mut session = Session::open(root);
    let before = session.state().slots.saved_projects.len();
    let after = session
        .dispatch(Action::RemoveSaved(id.to_string()))?
        .slots
        .saved_projects
        .len();
    let removed = after < before;

    if json {
        print_json(&serde_json::json!({ "id": id, "removed": removed }))?;
    } else if removed {
        println!("Removed saved project [{id}]");
    } else {
        println!("No saved project with id [{id}]");
    }
    Ok(())
}

use crate::output::{print_json, print_projects};
use makermind_advisor::{load_dashboard, DashboardLoad, ViewLifetime};
use makermind_core::saved::is_saved;
use makermind_core::session::Session;
use makermind_core::view::{Action, View};
use std::path::Path;

pub fn run(root: &Path, save: bool, json: bool) -> anyhow::Result<()> {
    let mut session = Session::open(root);
    session.dispatch(Action::Navigate(View::Dashboard))?;
    let profile = super::require_profile(&session)?.clone();
    let inventory = session.state().slots.inventory.clone();

    let advisor = super::advisor(root)?;
    let lifetime = ViewLifetime::new();
    let rt = super::runtime()?;
    let load = rt.block_on(load_dashboard(&advisor, &profile, &inventory, &lifetime));

    let feed = match load {
        Some(DashboardLoad::Loaded(feed)) => feed,
        Some(DashboardLoad::ConfigurationNeeded) => {
            if json {
                print_json(&serde_json::json!({ "configured": false }))?;
            } else {
                println!("{}", super::CONFIGURATION_NEEDED);
            }
            return Ok(());
        }
        None => return Ok(()),
    };

    let mut saved_ids = Vec::new();
    if save {
        for project in feed.projects.iter().chain(feed.stash_buster.iter()) {
            if !is_saved(&session.state().slots.saved_projects, &project.id) {
                session.dispatch(Action::ToggleSave(project.clone()))?;
                saved_ids.push(project.id.clone());
            }
        }
    }

    if json {
        print_json(&serde_json::json!({
            "configured": true,
            "projects": feed.projects,
            "stash_buster": feed.stash_buster,
            "saved": saved_ids,
        }))?;
        return Ok(());
    }

    println!("Recommended for {}:", profile.name);
    print_projects(&feed.projects.iter().collect::<Vec<_>>());
    match &feed.stash_buster {
        Some(p) => {
            println!("\nStash buster:");
            print_projects(&[p]);
        }
        None if inventory.is_empty() => {
            println!("\nAdd materials to your stash to get a stash buster project.")
        }
        None => {}
    }
    if !saved_ids.is_empty() {
        println!("\nSaved {} project(s).", saved_ids.len());
    }
    Ok(())
}

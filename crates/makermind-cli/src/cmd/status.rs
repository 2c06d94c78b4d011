use crate::output::print_json;
use makermind_core::config::Config;
use makermind_core::schedule::stale_ids;
use makermind_core::session::{Session, Startup};
use std::path::Path;

pub fn run(root: &Path, json: bool) -> anyhow::Result<()> {
    let session = Session::open(root);
    let config = Config::load(root)?;
    let configured = config.ai.resolve_api_key().is_some();
    let startup = session.startup(configured);
    let slots = &session.state().slots;
    let scheduled: usize = slots.schedule.values().map(Vec::len).sum();
    let stale = stale_ids(&slots.schedule, &slots.saved_projects).len();
    let reviews: usize = slots.reviews.values().map(Vec::len).sum();

    if json {
        print_json(&serde_json::json!({
            "configured": configured,
            "view": session.state().view.as_str(),
            "profile": slots.profile.as_ref().map(|p| p.name.as_str()),
            "inventory": slots.inventory.len(),
            "saved": slots.saved_projects.len(),
            "scheduled": scheduled,
            "stale_scheduled": stale,
            "reviews": reviews,
            "model": config.ai.model,
        }))?;
        return Ok(());
    }

    match startup {
        Startup::ConfigurationNeeded => println!("{}\n", super::CONFIGURATION_NEEDED),
        Startup::Ready(_) => println!("AI service: configured ({})", config.ai.model),
    }
    println!("View:      {}", session.state().view);
    match &slots.profile {
        Some(p) => println!("Maker:     {}", p.name),
        None => println!("Maker:     (none; run `makermind onboard`)"),
    }
    println!("Inventory: {}", slots.inventory.len());
    println!("Saved:     {}", slots.saved_projects.len());
    if stale > 0 {
        println!("Scheduled: {scheduled} ({stale} no longer saved)");
    } else {
        println!("Scheduled: {scheduled}");
    }
    println!("Reviews:   {reviews}");
    Ok(())
}

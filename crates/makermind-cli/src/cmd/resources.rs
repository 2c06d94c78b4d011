use crate::output::{print_json, print_table};
use makermind_core::session::Session;
use std::path::Path;

pub fn run(root: &Path, project_id: &str, json: bool) -> anyhow::Result<()> {
    let session = Session::open(root);
    let project = super::find_saved(&session, project_id)?;

    let advisor = super::advisor(root)?;
    if !advisor.configured() {
        if json {
            print_json(&serde_json::json!({ "configured": false, "resources": [] }))?;
        } else {
            println!("{}", super::CONFIGURATION_NEEDED);
        }
        return Ok(());
    }

    let rt = super::runtime()?;
    let results = rt.block_on(advisor.find_resources(&project.title, project.category));

    if json {
        return print_json(&serde_json::json!({ "configured": true, "resources": results }));
    }
    if results.is_empty() {
        println!("No tutorials found for \"{}\".", project.title);
        return Ok(());
    }
    let rows = results
        .iter()
        .map(|r| vec![r.title.clone(), r.uri.clone()])
        .collect();
    print_table(&["TITLE", "LINK"], rows);
    Ok(())
}

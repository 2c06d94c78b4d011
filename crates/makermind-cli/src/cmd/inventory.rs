use crate::output::{print_json, print_table};
use anyhow::bail;
use clap::Subcommand;
use makermind_core::inventory::new_material;
use makermind_core::session::Session;
use makermind_core::view::{Action, View};
use std::path::Path;

#[derive(Subcommand)]
pub enum InventorySubcommand {
    /// Add a material to the stash
    Add {
        #[arg(required = true)]
        name: Vec<String>,
        /// Free-text amount, e.g. "2 cups" (default: 1 unit)
        #[arg(long, short = 'q')]
        quantity: Option<String>,
        /// Category (default: General)
        #[arg(long, short = 'c')]
        category: Option<String>,
    },
    /// Remove a material by id
    Remove { id: String },
    /// List the stash
    List,
}

pub fn run(root: &Path, subcmd: InventorySubcommand, json: bool) -> anyhow::Result<()> {
    match subcmd {
        InventorySubcommand::Add {
            name,
            quantity,
            category,
        } => add(
            root,
            &name.join(" "),
            quantity.as_deref(),
            category.as_deref(),
            json,
        ),
        InventorySubcommand::Remove { id } => remove(root, &id, json),
        InventorySubcommand::List => list(root, json),
    }
}

fn add(
    root: &Path,
    name: &str,
    quantity: Option<&str>,
    category: Option<&str>,
    json: bool,
) -> anyhow::Result<()> {
    let Some(material) = new_material(name, quantity, category) else {
        bail!("material name must not be blank");
    };
    let mut session = Session::open(root);
    session.dispatch(Action::AddMaterial(material.clone()))?;

    if json {
        print_json(&material)?;
    } else {
        println!(
            "Added [{}]: {} ({}, {})",
            material.id, material.name, material.quantity, material.category
        );
    }
    Ok(())
}

fn remove(root: &Path, id: &str, json: bool) -> anyhow::Result<()> {
    let mut session = Session::open(root);
    let before = session.state().slots.inventory.len();
    let after = session
        .dispatch(Action::RemoveMaterial(id.to_string()))?
        .slots
        .inventory
        .len();
    let removed = after < before;

    if json {
        print_json(&serde_json::json!({ "id": id, "removed": removed }))?;
    } else if removed {
        println!("Removed [{id}]");
    } else {
        println!("No material with id [{id}]");
    }
    Ok(())
}

fn list(root: &Path, json: bool) -> anyhow::Result<()> {
    let mut session = Session::open(root);
    session.dispatch(Action::Navigate(View::Inventory))?;
    let inventory = &session.state().slots.inventory;

    if json {
        return print_json(inventory);
    }
    if inventory.is_empty() {
        println!("Your stash is empty.");
        return Ok(());
    }
    let rows = inventory
        .iter()
        .map(|m| {
            vec![
                m.id.clone(),
                m.name.clone(),
                m.quantity.clone(),
                m.category.clone(),
            ]
        })
        .collect();
    print_table(&["ID", "NAME", "QUANTITY", "CATEGORY"], rows);
    Ok(())
}

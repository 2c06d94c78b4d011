use makermind_core::types::Project;
use serde::Serialize;

pub fn print_json<T: Serialize>(value: &T) -> anyhow::Result<()> {
    let json = serde_json::to_string_pretty(value)?;
    println!("{}", json);
    Ok(())
}

pub fn print_table(headers: &[&str], rows: Vec<Vec<String>>) {
    let mut widths: Vec<usize> = headers.iter().map(|h| h.chars().count()).collect();
    for row in &rows {
        for (i, cell) in row.iter().enumerate() {
            if i < widths.len() {
                widths[i] = widths[i].max(cell.chars().count());
            }
        }
    }

    let header_row: Vec<String> = headers
        .iter()
        .enumerate()
        .map(|(i, h)| format!("{:width$}", h, width = widths[i]))
        .collect();
    println!("{}", header_row.join("  "));

    let sep: Vec<String> = widths.iter().map(|&w| "-".repeat(w)).collect();
    println!("{}", sep.join("  "));

    for row in &rows {
        let cells: Vec<String> = row
            .iter()
            .enumerate()
            .map(|(i, cell)| {
                let w = widths.get(i).copied().unwrap_or(0);
                format!("{:width$}", cell, width = w)
            })
            .collect();
        println!("{}", cells.join("  ").trim_end());
    }
}

pub fn money(amount: f64) -> String {
    format!("${amount:.2}")
}

/// One row per project: id, title, category, time, match, cost.
pub fn print_projects(projects: &[&Project]) {
    if projects.is_empty() {
        println!("No projects.");
        return;
    }
    let rows = projects
        .iter()
        .map(|p| {
            vec![
                p.id.clone(),
                p.title.clone(),
                p.category.to_string(),
                p.time_estimate.clone(),
                format!("{}%", p.match_score),
                money(p.cost_estimate),
            ]
        })
        .collect();
    print_table(&["ID", "TITLE", "CATEGORY", "TIME", "MATCH", "COST"], rows);
}

/// Full detail view of a single project.
pub fn print_project_detail(p: &Project) {
    println!("{}  [{}]", p.title, p.id);
    println!(
        "{} · {} · {}% match · {}",
        p.category,
        p.time_estimate,
        p.match_score,
        money(p.cost_estimate)
    );
    if !p.description.is_empty() {
        println!("\n{}", p.description);
    }
    print_list("Materials", &p.materials);
    print_list("Missing materials", &p.missing_materials);
    print_list("Missing tools", &p.missing_tools);
    if !p.diy_alternatives.is_empty() {
        println!("\nMake it yourself:");
        for alt in &p.diy_alternatives {
            println!("  - {}: {}", alt.material, alt.instruction);
        }
    }
    if !p.steps.is_empty() {
        println!("\nSteps:");
        for (i, step) in p.steps.iter().enumerate() {
            println!("  {}. {}", i + 1, step);
        }
    }
}

fn print_list(label: &str, items: &[String]) {
    if !items.is_empty() {
        println!("\n{label}: {}", items.join(", "));
    }
}

use crate::output::{print_json, print_table};
use anyhow::bail;
use clap::Subcommand;
use makermind_core::review::{compose_review, reviews_for, MAX_RATING, MIN_RATING};
use makermind_core::session::Session;
use makermind_core::view::Action;
use std::path::Path;

#[derive(Subcommand)]
pub enum ReviewSubcommand {
    /// Journal a finished project
    Add {
        project_id: String,
        /// Stars, 1 to 5
        rating: u8,
        #[arg(required = true)]
        text: Vec<String>,
    },
    /// List reviews for a project, newest first
    List { project_id: String },
}

pub fn run(root: &Path, subcmd: ReviewSubcommand, json: bool) -> anyhow::Result<()> {
    match subcmd {
        ReviewSubcommand::Add {
            project_id,
            rating,
            text,
        } => add(root, &project_id, rating, &text.join(" "), json),
        ReviewSubcommand::List { project_id } => list(root, &project_id, json),
    }
}

fn add(root: &Path, project_id: &str, rating: u8, text: &str, json: bool) -> anyhow::Result<()> {
    let Some(review) = compose_review(project_id, rating, text) else {
        bail!("a review needs a rating from {MIN_RATING} to {MAX_RATING} and some text");
    };
    let mut session = Session::open(root);
    session.dispatch(Action::AddReview(review.clone()))?;

    if json {
        print_json(&review)?;
    } else {
        println!(
            "Logged {}/{MAX_RATING} for [{project_id}] on {}",
            review.rating, review.date
        );
    }
    Ok(())
}

fn list(root: &Path, project_id: &str, json: bool) -> anyhow::Result<()> {
    let session = Session::open(root);
    let reviews = reviews_for(&session.state().slots.reviews, project_id);

    if json {
        return print_json(&reviews);
    }
    if reviews.is_empty() {
        println!("No reviews for [{project_id}] yet.");
        return Ok(());
    }
    let rows = reviews
        .iter()
        .map(|r| {
            vec![
                r.date.clone(),
                "★".repeat(usize::from(r.rating)),
                r.text.clone(),
            ]
        })
        .collect();
    print_table(&["DATE", "RATING", "TEXT"], rows);
    Ok(())
}

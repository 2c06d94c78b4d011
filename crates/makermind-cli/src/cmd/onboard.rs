use crate::output::{money, print_json};
use anyhow::{bail, Context};
use clap::Args;
use makermind_advisor::AdvisorError;
use makermind_core::catalog::{find_style, STYLE_OPTIONS};
use makermind_core::config::Config;
use makermind_core::onboarding::OnboardingDraft;
use makermind_core::session::Session;
use makermind_core::types::SkillLevel;
use makermind_core::view::Action;
use std::path::Path;

#[derive(Args)]
pub struct OnboardArgs {
    /// Display name
    #[arg(long)]
    name: Option<String>,

    /// Toggle a style by id (repeatable), e.g. --style boho --style rustic
    #[arg(long = "style")]
    styles: Vec<String>,

    /// Toggle a tool by name (repeatable)
    #[arg(long = "tool")]
    tools: Vec<String>,

    /// Set a skill level as CATEGORY=LEVEL (repeatable), e.g. --skill Baking=Expert
    #[arg(long = "skill")]
    skills: Vec<String>,

    /// Budget per project in dollars
    #[arg(long)]
    budget: Option<f64>,

    /// Use this persona text instead of generating one
    #[arg(long)]
    persona: Option<String>,
}

fn parse_skill(raw: &str) -> anyhow::Result<(String, SkillLevel)> {
    let (category, level) = raw
        .split_once('=')
        .with_context(|| format!("invalid skill '{raw}': expected CATEGORY=LEVEL"))?;
    let category = category.trim();
    if category.is_empty() {
        bail!("invalid skill '{raw}': empty category");
    }
    Ok((category.to_string(), level.trim().parse()?))
}

pub fn run(root: &Path, args: OnboardArgs, json: bool) -> anyhow::Result<()> {
    let mut session = Session::open(root);
    let config = Config::load(root)?;

    let existing = session.state().slots.profile.clone();
    let mut draft = match existing {
        Some(existing) => {
            session.dispatch(Action::EditProfile)?;
            OnboardingDraft::from_profile(&existing)
        }
        None => OnboardingDraft::with_defaults(
            &config.onboarding.default_name,
            config.onboarding.default_budget,
        ),
    };

    if let Some(name) = &args.name {
        draft.set_name(name);
    }
    for style in &args.styles {
        if find_style(style).is_none() {
            let known: Vec<&str> = STYLE_OPTIONS.iter().map(|s| s.id).collect();
            bail!("unknown style '{style}' (known: {})", known.join(", "));
        }
        draft.toggle_style(style);
    }
    for tool in &args.tools {
        draft.toggle_tool(tool);
    }
    for raw in &args.skills {
        let (category, level) = parse_skill(raw)?;
        draft.set_skill(&category, level);
    }
    if let Some(budget) = args.budget {
        draft.set_budget(budget);
    }

    let persona = match args.persona {
        Some(text) => Some(text),
        None if draft.needs_persona() && !draft.styles.is_empty() => {
            let advisor = super::advisor(root)?;
            let rt = super::runtime()?;
            match rt.block_on(advisor.generate_persona(&draft.styles)) {
                Ok(text) => Some(text),
                Err(AdvisorError::NotConfigured) => {
                    eprintln!("{}", super::CONFIGURATION_NEEDED);
                    None
                }
                Err(e) => return Err(e).context("could not generate your maker persona"),
            }
        }
        None => None,
    };

    let profile = draft.finish(persona);
    session.dispatch(Action::CompleteOnboarding(profile.clone()))?;

    if json {
        print_json(&profile)?;
    } else {
        println!("Welcome, {}!", profile.name);
        println!("{}", profile.style_description);
    }
    Ok(())
}

pub fn show(root: &Path, json: bool) -> anyhow::Result<()> {
    let session = Session::open(root);
    let profile = super::require_profile(&session)?;

    if json {
        return print_json(profile);
    }
    println!("{}", profile.name);
    println!("{}\n", profile.style_description);
    let styles: Vec<&str> = profile
        .styles
        .iter()
        .map(|id| find_style(id).map_or(id.as_str(), |s| s.name))
        .collect();
    println!("Styles:  {}", styles.join(", "));
    println!("Tools:   {}", profile.tools.join(", "));
    for (category, level) in &profile.skills {
        println!("Skill:   {category} = {level}");
    }
    println!("Budget:  {} per project", money(profile.per_project_budget));
    Ok(())
}

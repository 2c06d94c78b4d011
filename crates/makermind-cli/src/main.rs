mod cmd;
mod output;
mod root;

use clap::{Parser, Subcommand};
use cmd::{
    inventory::InventorySubcommand, review::ReviewSubcommand, saved::SavedSubcommand,
    schedule::ScheduleSubcommand,
};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "makermind",
    about = "MakerMind: DIY project recommendations from your style, tools and stash",
    version,
    propagate_version = true
)]
struct Cli {
    /// Data root (default: auto-detect from .makermind/)
    #[arg(long, global = true, env = "MAKERMIND_ROOT")]
    root: Option<PathBuf>,

    /// Output as JSON
    #[arg(long, global = true, short = 'j')]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the current view, slot sizes and AI configuration
    Status,

    /// Create or edit the maker profile
    Onboard(cmd::onboard::OnboardArgs),

    /// Show the maker profile
    Profile,

    /// Manage the material stash
    Inventory {
        #[command(subcommand)]
        subcommand: InventorySubcommand,
    },

    /// Generate project recommendations and a stash buster
    Recommend {
        /// Save every returned project
        #[arg(long)]
        save: bool,
    },

    /// Manage saved projects
    Saved {
        #[command(subcommand)]
        subcommand: SavedSubcommand,
    },

    /// Weekly planner
    Schedule {
        #[command(subcommand)]
        subcommand: ScheduleSubcommand,
    },

    /// Project journal
    Review {
        #[command(subcommand)]
        subcommand: ReviewSubcommand,
    },

    /// Find tutorials or recipes for a saved project
    Resources { project_id: String },
}

fn main() {
    let cli = Cli::parse();

    let default_level = match &cli.command {
        Commands::Recommend { .. } | Commands::Resources { .. } => tracing::Level::INFO,
        _ => tracing::Level::WARN,
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env().add_directive(default_level.into()),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let root = root::resolve_root(cli.root.as_deref());

    let result = match cli.command {
        Commands::Status => cmd::status::run(&root, cli.json),
        Commands::Onboard(args) => cmd::onboard::run(&root, args, cli.json),
        Commands::Profile => cmd::onboard::show(&root, cli.json),
        Commands::Inventory { subcommand } => cmd::inventory::run(&root, subcommand, cli.json),
        Commands::Recommend { save } => cmd::recommend::run(&root, save, cli.json),
        Commands::Saved { subcommand } => cmd::saved::run(&root, subcommand, cli.json),
        Commands::Schedule { subcommand } => cmd::schedule::run(&root, subcommand, cli.json),
        Commands::Review { subcommand } => cmd::review::run(&root, subcommand, cli.json),
        Commands::Resources { project_id } => cmd::resources::run(&root, &project_id, cli.json),
    };

    if let Err(e) = result {
        eprintln!("error: {e:#}");
        std::process::exit(1);
    }
}

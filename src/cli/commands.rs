use std::path::PathBuf;

use clap::{ArgAction, Args, Parser, Subcommand};

#[derive(Parser)]
#[command(name = "pb", about = concat!("phaseboard v", env!("CARGO_PKG_VERSION"), " - phases, milestones and kanban in one tree"), version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output as JSON
    #[arg(long, global = true)]
    pub json: bool,

    /// Config file (default: ./phaseboard.toml if present, else built-in demo data)
    #[arg(short = 'c', long = "config", global = true)]
    pub config: Option<PathBuf>,

    /// More logging on stderr (-v info, -vv debug, -vvv trace)
    #[arg(short = 'v', long = "verbose", action = ArgAction::Count, global = true)]
    pub verbose: u8,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Write a starter phaseboard.toml
    Init(InitArgs),
    /// Print boards, groups and items
    Show(ShowArgs),
    /// Print item counts and completion per board
    Stats,
    /// Apply a script of JSON actions (one per line) and print the result
    Apply(ApplyArgs),
    /// Validate the config's seed data
    Check,
    /// List the views a user can reach
    Nav(NavArgs),
    /// List team members, optionally after adding or removing some
    Team(TeamArgs),
    /// List notifications and messages, optionally after marking or removing some
    Feed(FeedArgs),
}

#[derive(Args)]
pub struct InitArgs {
    /// Where to write (default: ./phaseboard.toml)
    pub path: Option<PathBuf>,
    /// Overwrite an existing file
    #[arg(long)]
    pub force: bool,
}

#[derive(Args)]
pub struct ShowArgs {
    /// Only this board
    pub board: Option<String>,
}

#[derive(Args)]
pub struct ApplyArgs {
    /// Script file, or `-` for stdin
    pub script: String,
    /// Only print this board at the end
    #[arg(long)]
    pub board: Option<String>,
    /// Print a line for every new snapshot as it is produced
    #[arg(long)]
    pub watch: bool,
    /// Fail on the first bad or rejected line instead of skipping it
    #[arg(long)]
    pub strict: bool,
}

#[derive(Args)]
pub struct NavArgs {
    /// Log in as this user (omit for an anonymous session)
    #[arg(long)]
    pub name: Option<String>,
    /// Role: admin, project_manager or team_member
    #[arg(long, default_value = "team_member")]
    pub role: String,
}

#[derive(Args)]
pub struct TeamArgs {
    /// Case-insensitive name filter
    #[arg(long)]
    pub search: Option<String>,
    /// Add a member with this name before listing (not written back to the config)
    #[arg(long)]
    pub add: Option<String>,
    /// Role for --add: admin, developer (default), designer or product-manager
    #[arg(long, requires = "add")]
    pub role: Option<String>,
    /// Remove the member with this ID before listing (repeatable)
    #[arg(long)]
    pub remove: Vec<String>,
}

#[derive(Args)]
pub struct FeedArgs {
    /// Mark the notification or message with this ID read (repeatable)
    #[arg(long)]
    pub read: Vec<String>,
    /// Remove the notification or message with this ID (repeatable)
    #[arg(long)]
    pub remove: Vec<String>,
}

mod cmd;
mod logging;
mod tui;

use std::path::PathBuf;
use std::process;

use clap::error::ErrorKind;
use clap::{Args, CommandFactory, Parser, Subcommand};
use taskgraph_core::config::ConfigLoader;

#[derive(Debug, Parser)]
#[command(
    name = "taskgraph",
    version,
    about = "Index markdown checklists and search them from the terminal",
    arg_required_else_help = true
)]
struct Cli {
    /// Config file (defaults to $XDG_CONFIG_HOME/taskgraph/config.toml)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Index every markdown file under a directory
    Index(IndexArgs),

    /// Rank indexed nodes against a free-text query
    Query(QueryArgs),

    /// List checklist items from the index
    List(ListArgs),
}

#[derive(Debug, Args)]
pub struct IndexArgs {
    /// Root directory to index
    pub dir: PathBuf,

    /// Where to write the index (overrides config)
    #[arg(long)]
    pub out: Option<PathBuf>,
}

#[derive(Debug, Args)]
pub struct QueryArgs {
    /// Query text; omit to start interactive mode
    pub text: Option<String>,

    /// Index to read (overrides config)
    #[arg(long)]
    pub index: Option<PathBuf>,

    /// Maximum number of results (overrides config)
    #[arg(long)]
    pub limit: Option<usize>,

    /// Search interactively, re-ranking on every keystroke
    #[arg(long, short)]
    pub interactive: bool,

    /// Print results as JSON
    #[arg(long, conflicts_with = "interactive")]
    pub json: bool,
}

#[derive(Debug, Args)]
pub struct ListArgs {
    /// Include closed items
    #[arg(long, short)]
    pub all: bool,

    /// Index to read (overrides config)
    #[arg(long)]
    pub index: Option<PathBuf>,
}

fn main() {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            let code = match e.kind() {
                // Bare `taskgraph`: usage goes to stdout like `--help`
                ErrorKind::DisplayHelpOnMissingArgumentOrSubcommand => {
                    let _ = Cli::command().print_help();
                    process::exit(0);
                }
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => 0,
                _ => 1,
            };
            let _ = e.print();
            process::exit(code);
        }
    };

    if let Err(e) = color_eyre::install() {
        eprintln!("Failed to install error handler: {e}");
    }

    let rc = match ConfigLoader::load(cli.config.as_deref()) {
        Ok(rc) => rc,
        Err(e) => {
            eprintln!("Error loading config: {e}");
            process::exit(1);
        }
    };

    logging::init(&rc);

    let code = match cli.command {
        Commands::Index(args) => cmd::index::run(&rc, args),
        Commands::Query(args) => cmd::query::run(&rc, args),
        Commands::List(args) => cmd::list::run(&rc, args),
    };
    process::exit(code);
}

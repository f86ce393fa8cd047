//! Command line interface for the bibshelf paper manager.
//!
//! Keeps a personal library of arXiv papers in a JSON file. Papers are fetched from arXiv by
//! identifier, tagged with keywords and exported as BibTeX.
//!
//! # Usage
//!
//! ```bash
//! # Write a configuration file
//! bibshelf init
//!
//! # Add a paper by its identifier, with keywords
//! bibshelf add 1512.05435 --keywords "vision, resnet"
//!
//! # List papers, optionally by keyword
//! bibshelf list --keyword Vision
//!
//! # Find papers mentioning some text
//! bibshelf search "residual"
//!
//! # Export BibTeX for everything tagged "vision"
//! bibshelf export --keyword vision --output refs.bib
//! ```
//!
//! Every command that changes the library rewrites the library file before returning.
//! Verbosity is raised with `-v` (repeatable) or set through `RUST_LOG`.

#![warn(missing_docs, clippy::missing_docs_in_private_items)]

use std::{
  path::{Path, PathBuf},
  process::ExitCode,
};

use bibshelf::{
  config::Config,
  error::BibshelfError,
  library::{Add, Edit, Library, Query, Remove},
  paper::{DisplayValue, Paper},
  prelude::*,
  retriever::{sanitize_identifier, Retriever},
};
use clap::{builder::ArgAction, Args, Parser, Subcommand};
use console::style;
use tracing::{debug, trace};
use tracing_subscriber::EnvFilter;

pub mod commands;
pub mod error;
pub mod interaction;

use crate::{commands::*, error::*, interaction::*};

/// Command line interface configuration and argument parsing
#[derive(Parser)]
#[command(author, version, about = "Keep a personal shelf of arXiv papers")]
pub struct Cli {
  /// Verbose mode (-v, -vv, -vvv) for different levels of logging detail
  #[arg(
        short,
        long,
        action = ArgAction::Count,
        global = true,
        help = "Increase logging verbosity"
    )]
  verbose: u8,

  /// Path to the configuration file. Defaults to `~/.bibshelf/config.toml`.
  #[arg(long, global = true)]
  config: Option<PathBuf>,

  /// Path to the library file, overriding the one named in the configuration.
  #[arg(long, short, global = true)]
  path: Option<PathBuf>,

  /// The subcommand to execute
  #[command(subcommand)]
  command: Commands,

  /// Skip all prompts and accept defaults (mostly for testing)
  #[arg(long, hide = true, global = true)]
  accept_defaults: bool,
}

/// Configures the logging system based on the verbosity level
///
/// The verbosity levels are:
/// - 0: error (default)
/// - 1: warn
/// - 2: info
/// - 3: debug
/// - 4+: trace
///
/// `RUST_LOG` takes precedence when set.
fn setup_logging(verbosity: u8) {
  let filter = match verbosity {
    0 => "error",
    1 => "warn",
    2 => "info",
    3 => "debug",
    _ => "trace",
  };

  let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter));

  tracing_subscriber::fmt()
    .with_env_filter(filter)
    .with_writer(std::io::stderr)
    .with_file(true)
    .with_line_number(true)
    .with_target(true)
    .init();
}

/// Resolves configuration and library locations, then dispatches the subcommand.
async fn run(cli: &Cli) -> Result<()> {
  let config_path = match &cli.config {
    Some(path) => path.clone(),
    None => Config::default_path()?,
  };
  let config = Config::load(&config_path)?;
  let library_path = cli.path.clone().unwrap_or_else(|| config.library_path.clone());
  trace!("Using config {} and library {}", config_path.display(), library_path.display());

  let open = || Library::open(&library_path);
  match cli.command.clone() {
    Commands::Init(args) => init(cli, &config_path, config, args),
    Commands::Add(args) => add(cli, &mut open()?, &config.retriever(), args).await,
    Commands::List(args) => list(cli, &mut open()?, args),
    Commands::Keywords => keywords(cli, &open()?),
    Commands::Search(args) => search(cli, &mut open()?, args),
    Commands::Show(args) => show(cli, &mut open()?, args),
    Commands::Edit(args) => edit(cli, &mut open()?, args),
    Commands::Tag(args) => tag(cli, &mut open()?, args),
    Commands::Untag(args) => untag(cli, &mut open()?, args),
    Commands::Remove(args) => remove(cli, &mut open()?, args),
    Commands::Export(args) => export(cli, &mut open()?, args),
  }
}

/// Entry point for the bibshelf CLI application
///
/// Parses arguments, sets up logging and runs the requested command. Failures are reported
/// on stderr and turn into a non-zero exit status.
#[tokio::main]
async fn main() -> ExitCode {
  let cli = Cli::parse();
  setup_logging(cli.verbose);

  match run(&cli).await {
    Ok(()) => ExitCode::SUCCESS,
    Err(e) => {
      if let Err(reply_error) = cli.reply(ResponseContent::Error(e)) {
        eprintln!("{reply_error}");
      }
      ExitCode::FAILURE
    },
  }
}

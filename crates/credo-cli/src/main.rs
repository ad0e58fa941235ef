//! `credo`: command-line access to a Credo dataset.
//!
//! Imports raw spreadsheet rows into the JSON document layout and answers
//! trace, search, Scripture and cross-reference queries against it.

mod commands;
mod config;

use std::{io, path::PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use credo_core::{Dataset, RecordSource as _, interpretation::Lens};
use credo_store_json::JsonDir;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

use commands::ImportPaths;
use config::{ConfigFile, Settings};

// ─── CLI args ─────────────────────────────────────────────────────────────────

#[derive(Parser, Debug)]
#[command(name = "credo", version, about = "Trace doctrines through their historical evidence")]
struct Args {
  /// Directory holding the dataset's JSON documents (default: data).
  #[arg(long, env = "CREDO_DATA_DIR", global = true)]
  data_dir: Option<PathBuf>,

  /// Path to a TOML config file (data_dir, min_query_len).
  #[arg(short, long, value_name = "FILE", global = true)]
  config: Option<PathBuf>,

  /// Raise log verbosity; repeat for more.
  #[arg(short, long, action = clap::ArgAction::Count, global = true)]
  verbose: u8,

  #[command(subcommand)]
  command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
  /// Build the dataset from raw doctrine, source and position rows.
  Import {
    #[arg(long)]
    doctrines: PathBuf,
    #[arg(long)]
    sources:   PathBuf,
    #[arg(long)]
    positions: PathBuf,
    /// Output directory (default: the data directory).
    #[arg(long)]
    out:       Option<PathBuf>,
  },
  /// Load the dataset and report integrity warnings.
  Check,
  /// Show a claim's evidence in chronological order.
  Trace {
    claim: String,
    /// Print the trace as JSON.
    #[arg(long)]
    json:  bool,
  },
  /// Case-insensitive search over claims and nodes.
  Search { query: String },
  /// Look up a passage by reference ("John 3:5") or slug ("john-3-5").
  Scripture { reference: String },
  /// Claims with an edge to a node.
  ClaimsFor { node: String },
  /// Interpretations of a claim, optionally for one lens.
  Interpretations {
    claim: String,
    #[arg(long)]
    lens:  Option<Lens>,
  },
  /// Show one source.
  Source { id: String },
  /// List modules.
  Modules,
}

// ─── Entry point ──────────────────────────────────────────────────────────────

fn main() -> Result<()> {
  let args = Args::parse();
  init_tracing(args.verbose);

  let file_cfg = match &args.config {
    Some(path) => ConfigFile::read(path)?,
    None => ConfigFile::default(),
  };
  let settings = Settings::resolve(args.data_dir, file_cfg);

  let stdout = io::stdout();
  let mut out = stdout.lock();

  match args.command {
    Command::Import {
      doctrines,
      sources,
      positions,
      out: out_dir,
    } => commands::import_rows(
      ImportPaths {
        doctrines: &doctrines,
        sources:   &sources,
        positions: &positions,
        out:       out_dir.as_deref().unwrap_or(&settings.data_dir),
      },
      &mut out,
    ),
    Command::Check => commands::check(&load(&settings)?, &mut out),
    Command::Trace { claim, json } => {
      commands::trace(&load(&settings)?, &claim, json, &mut out)
    }
    Command::Search { query } => {
      commands::search(&load(&settings)?, &query, settings.min_query_len, &mut out)
    }
    Command::Scripture { reference } => {
      commands::scripture(&load(&settings)?, &reference, &mut out)
    }
    Command::ClaimsFor { node } => commands::claims_for(&load(&settings)?, &node, &mut out),
    Command::Interpretations { claim, lens } => {
      commands::interpretations(&load(&settings)?, &claim, lens, &mut out)
    }
    Command::Source { id } => commands::source(&load(&settings)?, &id, &mut out),
    Command::Modules => commands::modules(&load(&settings)?, &mut out),
  }
}

fn init_tracing(verbose: u8) {
  let level = match verbose {
    0 => LevelFilter::WARN,
    1 => LevelFilter::INFO,
    2 => LevelFilter::DEBUG,
    _ => LevelFilter::TRACE,
  };
  tracing_subscriber::fmt()
    .with_writer(io::stderr)
    .with_env_filter(
      EnvFilter::builder()
        .with_default_directive(level.into())
        .from_env_lossy(),
    )
    .init();
}

fn load(settings: &Settings) -> Result<Dataset> {
  let store = JsonDir::new(&settings.data_dir);
  store
    .load()
    .with_context(|| format!("loading dataset from {}", store.path().display()))
}

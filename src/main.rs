use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;

use dirbrowse::app::Settings;
use dirbrowse::runner::{logging, run_app};

/// Browse a directory in the terminal and open files in your editor.
#[derive(Parser, Debug)]
#[command(name = "dirbrowse", version, about)]
struct Cli {
    /// Directory to start in (defaults to the current directory).
    dir: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let _log_guard = logging::init_logging();

    let start = match cli.dir {
        Some(dir) => dir,
        None => std::env::current_dir().context("cannot determine current directory")?,
    };
    let start = start
        .canonicalize()
        .with_context(|| format!("cannot open {}", start.display()))?;

    run_app(start, Settings::from_env())
}

//! # heartcode entry point
//!
//! ```text
//! main()
//!   │
//!   ├─> Parse CLI arguments (clap)
//!   ├─> Resolve the run config (JSON file + flags)
//!   ├─> Initialise tracing (console, plus rolling files with --log-dir)
//!   └─> Run the subcommand: encode | labels | mappings
//! ```
//!
//! ```bash
//! heartcode encode --input cleaned_heart_data.csv --report report.json
//! heartcode labels --input cleaned_heart_data.csv --column SmokerStatus
//! heartcode mappings
//! ```

#![warn(clippy::all, rust_2018_idioms)]

mod cli;

use anyhow::Result;
use clap::Parser as _;

fn main() -> Result<()> {
    let cli = cli::Cli::parse();

    let task = cli.command.into_task()?;
    heartcode::logging::init(task.log_dir())?;

    cli::run_task(task)
}

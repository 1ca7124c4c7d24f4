use anyhow::{Context as _, Result};
use clap::{Parser, Subcommand};
use heartcode::config::{ConfigOverrides, EncoderConfig};
use heartcode::encoder::{self, distinct_labels, heart_rules, load_table, rule_for};
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(
    name = "heartcode",
    about = "Encode heart-health survey categories as integers"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Encode a cleaned survey CSV and write the numeric copy
    Encode {
        /// Input CSV. Defaults to cleaned_heart_data.csv.
        #[arg(short, long, env = "HEARTCODE_INPUT")]
        input: Option<PathBuf>,

        /// Output CSV. Defaults to transformed_heart_data_to_numerical.csv.
        #[arg(short, long, env = "HEARTCODE_OUTPUT")]
        output: Option<PathBuf>,

        /// Path to a JSON run configuration file
        #[arg(long)]
        config: Option<PathBuf>,

        /// Write a JSON encoding report to this path
        #[arg(long)]
        report: Option<PathBuf>,

        /// Also write rolling log files into this directory
        #[arg(long)]
        log_dir: Option<PathBuf>,
    },
    /// List the distinct labels of one column
    Labels {
        /// Input CSV
        #[arg(short, long)]
        input: PathBuf,

        /// Column to inspect
        #[arg(short, long)]
        column: String,
    },
    /// Print the label-to-code table as JSON
    Mappings,
}

/// A parsed command with its configuration resolved.
pub enum Task {
    Encode(EncoderConfig),
    Labels { input: PathBuf, column: String },
    Mappings,
}

impl Commands {
    /// Reads the JSON config (if any) once and layers the flags over it.
    pub fn into_task(self) -> Result<Task> {
        match self {
            Self::Encode {
                input,
                output,
                config,
                report,
                log_dir,
            } => {
                let overrides = ConfigOverrides {
                    input,
                    output,
                    report,
                    log_dir,
                };
                let config = EncoderConfig::load(config.as_deref(), overrides)
                    .context("Failed to load configuration")?;
                Ok(Task::Encode(config))
            }
            Self::Labels { input, column } => Ok(Task::Labels { input, column }),
            Self::Mappings => Ok(Task::Mappings),
        }
    }
}

impl Task {
    /// Log directory to hand to the logger before the task runs.
    pub fn log_dir(&self) -> Option<&Path> {
        match self {
            Self::Encode(config) => config.log_dir.as_deref(),
            Self::Labels { .. } | Self::Mappings => None,
        }
    }
}

pub fn run_task(task: Task) -> Result<()> {
    match task {
        Task::Encode(config) => handle_encode(&config),
        Task::Labels { input, column } => handle_labels(&input, &column),
        Task::Mappings => handle_mappings(),
    }
}

#[expect(clippy::print_stdout)]
fn handle_encode(config: &EncoderConfig) -> Result<()> {
    let report = encoder::run_encode(&config.input, &config.output).with_context(|| {
        format!(
            "Failed to encode {} into {}",
            config.input.display(),
            config.output.display()
        )
    })?;

    if let Some(path) = &config.report {
        report
            .write_json(path)
            .context("Failed to write encoding report")?;
        tracing::info!("Report written to {}", path.display());
    }

    println!("{}", report.summary());
    for outcome in report.outcomes.iter().filter(|o| !o.is_clean()) {
        println!(
            "  {}: {} unrecognised cells left missing",
            outcome.column, outcome.unmapped
        );
    }
    Ok(())
}

#[expect(clippy::print_stdout)]
fn handle_labels(input: &Path, column: &str) -> Result<()> {
    let df = load_table(input).context("Failed to load input file")?;
    let labels = distinct_labels(&df, column)?;
    let rule = rule_for(column);

    for label in labels {
        let Some(label) = label else {
            println!("(missing)");
            continue;
        };
        match rule.and_then(|r| r.code_for(&label)) {
            Some(code) => println!("{label} -> {code}"),
            None if rule.is_some() => println!("{label} -> (unrecognised)"),
            None => println!("{label}"),
        }
    }
    Ok(())
}

#[expect(clippy::print_stdout)]
fn handle_mappings() -> Result<()> {
    let rules = heart_rules();
    let json = serde_json::to_string_pretty(&rules).context("Failed to serialize rule table")?;
    println!("{json}");
    Ok(())
}

//! # heartcode - numeric encoding for the heart-health survey
//!
//! Converts the cleaned survey CSV from human-readable category labels to
//! integer codes suitable for statistics and model training.
//!
//! ## Quick Start
//!
//! ```no_run
//! use heartcode::encoder::{encode_table, heart_rules, load_table, save_table};
//! use std::path::Path;
//!
//! let mut df = load_table(Path::new("cleaned_heart_data.csv"))?;
//! let report = encode_table(&mut df, &heart_rules())?;
//! save_table(&mut df, Path::new("transformed_heart_data_to_numerical.csv"))?;
//!
//! for outcome in report.outcomes.iter().filter(|o| !o.is_clean()) {
//!     println!("{}: {} unrecognised cells", outcome.column, outcome.unmapped);
//! }
//! # Ok::<(), heartcode::error::EncodeError>(())
//! ```
//!
//! ## Core Modules
//!
//! - [`encoder`]: rule table, column mapping, CSV load/save, run report
//! - [`config`]: JSON run configuration with command-line overrides
//! - [`error`]: error types
//! - [`logging`]: tracing subscriber setup

#![warn(clippy::all, rust_2018_idioms)]

pub mod config;
pub mod encoder;
pub mod error;
pub mod logging;

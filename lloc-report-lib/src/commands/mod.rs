//! Command-line interface and orchestration for lloc-report
//!
//! This module parses the command line, loads configuration, sets up logging,
//! and drives the parse → aggregate → render pipeline.
//!
//! ## Execution Flow
//!
//! The `run` function parses command-line arguments using clap and then:
//!
//! 1. Writes the default configuration and stops, if `--init-config` was given
//! 2. Loads the configuration and the summary report
//! 3. Aggregates the file and function populations into a report
//! 4. Renders the report as text, or as CSV when a destination was given
//!
//! Any failure along the way discards the partial report. A single error entry
//! is printed instead and the host is asked to exit with status 1.

mod common;
mod config;
mod host;
mod init;
mod run;
mod summarize;

#[cfg(debug_assertions)]
pub use config::Config;

pub use common::{ColorMode, LogLevel};
pub use host::Host;
pub use init::init_config;
pub use run::run;
pub use summarize::{SummarizeArgs, summarize};

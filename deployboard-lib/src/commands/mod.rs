//! Command-line interface and orchestration for deployboard
//!
//! This module implements the CLI commands and ties the data sources, the
//! dashboard model, and the report generators together. It handles argument
//! parsing, configuration management, and the high-level workflows.
//!
//! # Implementation Model
//!
//! ## Commands
//!
//! - **render**: Load deployments once, build the dashboard, and write the
//!   requested reports (console, HTML, JSON, CSV)
//! - **watch**: Rebuild an HTML dashboard on a fixed interval, reading the
//!   source through a TTL cache
//! - **init**: Generate a default configuration file
//! - **validate**: Check configuration file syntax and values
//!
//! ## Execution Flow
//!
//! The `run` function parses command-line arguments using clap and routes
//! to the appropriate command handler. The render and watch commands share
//! the same setup through the `common` module:
//!
//! 1. Initialize logging and load configuration
//! 2. Select the data source from the command line or the configuration
//! 3. Load the source and build the dashboard
//! 4. Echo load problems to the error stream and generate reports
//!
//! Problems reading the data source are not errors: they end up as notices
//! on the dashboard itself.

mod common;
mod config;
mod host;
mod init;
mod render;
mod run;
mod validate;
mod watch;

#[cfg(debug_assertions)]
pub use config::Config;

pub use host::Host;
pub use init::{InitArgs, init_config};
pub use render::{RenderArgs, render_dashboard};
pub use run::run;
pub use validate::{ValidateArgs, validate_config};
pub use watch::{WatchArgs, watch_dashboard};

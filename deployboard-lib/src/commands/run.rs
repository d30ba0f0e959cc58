//! Command dispatch logic for deployboard

use super::{InitArgs, RenderArgs, ValidateArgs, WatchArgs, init_config, render_dashboard, validate_config, watch_dashboard};
use crate::{Host, Result};
use clap::builder::Styles;
use clap::builder::styling::{AnsiColor, Effects};
use clap::{Parser, Subcommand};

const CLAP_STYLES: Styles = Styles::styled()
    .header(AnsiColor::Green.on_default().effects(Effects::BOLD))
    .usage(AnsiColor::Green.on_default().effects(Effects::BOLD))
    .literal(AnsiColor::Cyan.on_default().effects(Effects::BOLD))
    .placeholder(AnsiColor::Cyan.on_default());

#[derive(Parser, Debug)]
#[command(name = "deployboard", bin_name = "deployboard", author, version, long_about = None)]
#[command(about = "Display precomputed model deployment metrics as a dashboard of metric cards")]
#[command(styles = CLAP_STYLES)]
struct Cli {
    #[command(subcommand)]
    command: DeployboardSubcommand,
}

#[derive(Subcommand, Debug)]
enum DeployboardSubcommand {
    /// Load deployment metrics once and generate dashboard reports
    Render(Box<RenderArgs>),
    /// Keep an HTML dashboard up to date by re-rendering it on an interval
    Watch(Box<WatchArgs>),
    /// Generate a default configuration file
    Init(InitArgs),
    /// Validate a configuration file
    Validate(ValidateArgs),
}

/// Dispatch command-line arguments to the appropriate handler
///
/// This function parses the command-line arguments and executes the corresponding
/// subcommand. It's designed to be called from main.rs with the program arguments.
///
/// # Arguments
///
/// * `args` - An iterator of command-line arguments (typically from `std::env::args()`)
///
/// # Errors
///
/// Returns an error if command parsing fails or if the executed command fails
pub async fn run<I, T, H>(host: &mut H, args: I) -> Result<()>
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
    H: Host,
{
    match &Cli::parse_from(args).command {
        DeployboardSubcommand::Render(render_args) => render_dashboard(host, render_args),
        DeployboardSubcommand::Watch(watch_args) => watch_dashboard(host, watch_args).await,
        DeployboardSubcommand::Init(init_args) => init_config(host, init_args),
        DeployboardSubcommand::Validate(validate_args) => validate_config(host, validate_args),
    }
}

use super::Host;
use super::common::{ColorMode, Common, CommonArgs, write_report_file};
use crate::Result;
use crate::reports::{generate_console, generate_csv, generate_html, generate_json};
use crate::sources::MetricSource;
use camino::Utf8PathBuf;
use chrono::Local;
use clap::Parser;
use std::io::Write;

#[derive(Parser, Debug)]
pub struct RenderArgs {
    #[command(flatten)]
    pub common: CommonArgs,

    /// Control when to use colored output
    #[arg(long, value_name = "WHEN", default_value = "auto")]
    pub color: ColorMode,

    /// Output the dashboard to an HTML file
    #[arg(long, value_name = "PATH", help_heading = "Report Output")]
    pub html: Option<Utf8PathBuf>,

    /// Output the dashboard to a JSON file
    #[arg(long, value_name = "PATH", help_heading = "Report Output")]
    pub json: Option<Utf8PathBuf>,

    /// Output the dashboard to a CSV file
    #[arg(long, value_name = "PATH", help_heading = "Report Output")]
    pub csv: Option<Utf8PathBuf>,

    /// Output the dashboard to the console. If omitted, console output is shown only when no other reports are generated.
    #[arg(long, help_heading = "Report Output")]
    pub console: bool,

    /// Exit with status code 1 if no deployment could be loaded
    #[arg(long)]
    pub error_if_unavailable: bool,
}

pub fn render_dashboard<H: Host>(host: &mut H, args: &RenderArgs) -> Result<()> {
    let mut common = Common::new(host, &args.common)?;

    let result = common.source.load();
    let dashboard = common.build(&result);
    common.report_problems(&dashboard);

    let generating_reports = args.html.is_some() || args.json.is_some() || args.csv.is_some();
    if args.console || !generating_reports {
        let mut console_output = String::new();
        generate_console(&dashboard, args.color.use_colors(), &mut console_output)?;
        let _ = write!(common.output(), "{console_output}");
    }

    if let Some(filename) = &args.html {
        let mut html = String::new();
        generate_html(&dashboard, Local::now(), &mut html)?;
        write_report_file(filename, &html)?;
    }

    if let Some(filename) = &args.json {
        let mut json_output = String::new();
        generate_json(&dashboard, &mut json_output)?;
        write_report_file(filename, &json_output)?;
    }

    if let Some(filename) = &args.csv {
        let mut csv_output = String::new();
        generate_csv(&dashboard, &mut csv_output)?;
        write_report_file(filename, &csv_output)?;
    }

    if args.error_if_unavailable && !dashboard.has_data() {
        return Err(ohno::AppError::new("no deployment data could be loaded"));
    }

    Ok(())
}

//! Common processing logic shared between the render and watch commands.

use super::Host;
use super::config::Config;
use crate::Result;
use crate::dashboard::{BuildOptions, Dashboard, NoticeLevel};
use crate::metrics::Extractor;
use crate::sources::{DataSource, JsonFileSource, LoadResult, MetricSource, SqliteTableSource};
use camino::{Utf8Path, Utf8PathBuf};
use clap::{Args, ValueEnum};
use ohno::IntoAppError;
use std::fs;
use std::io::Write;

/// Color mode configuration for output
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ColorMode {
    /// Always use colors
    Always,

    /// Never use colors
    Never,

    /// Use colors if the output is a terminal, otherwise don't use colors
    Auto,
}

impl ColorMode {
    pub fn use_colors(self) -> bool {
        match self {
            Self::Always => true,
            Self::Never => false,
            Self::Auto => {
                use std::io::{IsTerminal, stdout};
                stdout().is_terminal()
            }
        }
    }
}

/// Log level for diagnostic output
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogLevel {
    /// No logging output
    None,

    /// Only error messages
    Error,

    /// Warning and error messages
    Warn,

    /// Info, warning, and error messages
    Info,

    /// Debug, info, warning, and error messages
    Debug,

    /// Trace, debug, info, warning, and error messages
    Trace,
}

/// Common arguments shared between the render and watch commands
#[derive(Args, Debug)]
pub struct CommonArgs {
    /// Path to configuration file (default is `deployboard.toml`)
    #[arg(long, short = 'c', value_name = "PATH")]
    pub config: Option<Utf8PathBuf>,

    /// Read deployments from a JSON file (default is the configured `data_file`)
    #[arg(long, value_name = "PATH", conflicts_with = "sqlite", help_heading = "Data Source")]
    pub file: Option<Utf8PathBuf>,

    /// Read deployments from a table of a SQLite database
    #[arg(long, value_name = "PATH", help_heading = "Data Source")]
    pub sqlite: Option<Utf8PathBuf>,

    /// Table to read with --sqlite (default is the configured `table`)
    #[arg(long, value_name = "NAME", requires = "sqlite", help_heading = "Data Source")]
    pub table: Option<String>,

    /// Set the logging level for diagnostic output
    #[arg(long, value_name = "LEVEL", default_value = "none", global = true)]
    pub log_level: LogLevel,
}

pub struct Common<'a, H: Host> {
    pub config: Config,
    pub source: DataSource,
    host: &'a mut H,
}

impl<H: Host> core::fmt::Debug for Common<'_, H> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Common").field("config", &self.config).field("source", &self.source).finish_non_exhaustive()
    }
}

impl<'a, H: Host> Common<'a, H> {
    /// Set up logging, load the configuration, and pick the data source
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration cannot be loaded
    pub fn new(host: &'a mut H, args: &CommonArgs) -> Result<Self> {
        Self::init_logging(args.log_level);

        let config = Config::load(Utf8Path::new("."), args.config.as_ref())?;
        let source = Self::select_source(args, &config);
        log::info!("Reading deployments from {}", source.describe());

        Ok(Self { config, source, host })
    }

    /// Initialize logger based on log level
    fn init_logging(log_level: LogLevel) {
        let level = match log_level {
            LogLevel::None => return,
            LogLevel::Error => "error",
            LogLevel::Warn => "warn",
            LogLevel::Info => "info",
            LogLevel::Debug => "debug",
            LogLevel::Trace => "trace",
        };

        let env = env_logger::Env::default().filter_or("RUST_LOG", level);

        // A logger may already be installed when several commands run in one process
        let _ = env_logger::Builder::from_env(env)
            .format_timestamp(None)
            .format_module_path(false)
            .format_target(matches!(log_level, LogLevel::Debug | LogLevel::Trace))
            .try_init();
    }

    fn select_source(args: &CommonArgs, config: &Config) -> DataSource {
        if let Some(db) = &args.sqlite {
            let table = args.table.clone().unwrap_or_else(|| config.table.clone());
            DataSource::SqliteTable(SqliteTableSource::new(db.clone(), table))
        } else {
            let path = args.file.clone().unwrap_or_else(|| config.data_file.clone());
            DataSource::JsonFile(JsonFileSource::new(path))
        }
    }

    /// Build the dashboard for one load of the source
    pub fn build(&self, result: &LoadResult) -> Dashboard {
        let options = BuildOptions {
            title: &self.config.title,
            grid_columns: self.config.grid_columns,
            extractor: Extractor::new(&self.config.metric_groups, &self.config.excluded_columns),
            acronyms: &self.config.acronyms,
        };

        Dashboard::build(result, &self.source.empty_warning(), &options)
    }

    /// Echo the warnings and errors of a dashboard to the error stream
    pub fn report_problems(&mut self, dashboard: &Dashboard) {
        for notice in dashboard.notices.iter().filter(|n| n.level != NoticeLevel::Info) {
            let _ = writeln!(self.host.error(), "{}: {}", notice.level, notice.message);
        }
    }

    pub fn output(&mut self) -> impl Write {
        self.host.output()
    }
}

/// Write a generated report to a file
pub fn write_report_file(path: &Utf8Path, contents: &str) -> Result<()> {
    fs::write(path, contents).into_app_err_with(|| format!("writing report to '{path}'"))?;
    log::info!("Wrote report to '{path}'");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::host::TestHost;
    use crate::dashboard::Notice;

    fn args(file: Option<&str>, sqlite: Option<&str>, table: Option<&str>) -> CommonArgs {
        CommonArgs {
            config: None,
            file: file.map(Utf8PathBuf::from),
            sqlite: sqlite.map(Utf8PathBuf::from),
            table: table.map(str::to_string),
            log_level: LogLevel::None,
        }
    }

    #[test]
    fn test_select_source_defaults_to_data_file() {
        let source = Common::<TestHost>::select_source(&args(None, None, None), &Config::default());
        assert!(matches!(&source, DataSource::JsonFile(s) if s.path() == "all_project_metrics_dsb.json"));
    }

    #[test]
    fn test_select_source_file() {
        let source = Common::<TestHost>::select_source(&args(Some("other.json"), None, None), &Config::default());
        assert!(matches!(&source, DataSource::JsonFile(s) if s.path() == "other.json"));
    }

    #[test]
    fn test_select_source_sqlite_default_table() {
        let source = Common::<TestHost>::select_source(&args(None, Some("metrics.db"), None), &Config::default());
        assert!(matches!(&source, DataSource::SqliteTable(s) if s.table() == "deployment_metrics"));
    }

    #[test]
    fn test_select_source_sqlite_table() {
        let source = Common::<TestHost>::select_source(&args(None, Some("metrics.db"), Some("nightly")), &Config::default());
        assert!(matches!(&source, DataSource::SqliteTable(s) if s.table() == "nightly"));
    }

    #[test]
    fn test_report_problems_skips_info() {
        let mut host = TestHost::new();
        let mut common = Common {
            config: Config::default(),
            source: DataSource::JsonFile(JsonFileSource::new("metrics.json")),
            host: &mut host,
        };

        let dashboard = Dashboard {
            title: "Deployments".into(),
            notices: vec![
                Notice::new(NoticeLevel::Info, "Displaying metrics for 1 deployments."),
                Notice::new(NoticeLevel::Error, "Failed to load data from table 't': boom"),
                Notice::new(NoticeLevel::Warning, "No data found in table 't'."),
            ],
            sections: Vec::new(),
        };
        common.report_problems(&dashboard);

        assert_eq!(
            host.error_str(),
            "error: Failed to load data from table 't': boom\nwarning: No data found in table 't'.\n"
        );
    }

    #[test]
    fn test_color_mode() {
        assert!(ColorMode::Always.use_colors());
        assert!(!ColorMode::Never.use_colors());
    }
}

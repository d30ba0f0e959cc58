use crate::Result;
use camino::{Utf8Path, Utf8PathBuf};
use core::num::NonZeroUsize;
use core::time::Duration;
use ohno::{IntoAppError, app_err};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fs;
use std::io;

/// The default configuration TOML content, embedded from `default_config.toml`
pub const DEFAULT_CONFIG_TOML: &str = include_str!("../../default_config.toml");

/// Name of the configuration file looked up when none is given explicitly
pub const CONFIG_FILE_NAME: &str = "deployboard.toml";

const MAX_GRID_COLUMNS: usize = 12;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Title shown at the top of the dashboard
    #[serde(default = "default_title")]
    pub title: String,

    /// JSON file read when no data source is given on the command line
    #[serde(default = "default_data_file")]
    pub data_file: Utf8PathBuf,

    /// Table read from a `SQLite` database when none is given on the command line
    #[serde(default = "default_table")]
    pub table: String,

    /// Number of metric cards per grid row
    #[serde(default = "default_grid_columns")]
    pub grid_columns: NonZeroUsize,

    /// Metric groups read from a deployment's `metrics_summary`, in display order
    #[serde(default = "default_metric_groups")]
    pub metric_groups: Vec<String>,

    /// Columns of a database row that are never shown as metrics
    #[serde(default = "default_excluded_columns")]
    pub excluded_columns: Vec<String>,

    /// Lowercase fragments of metric keys displayed in uppercase
    #[serde(default = "default_acronyms")]
    pub acronyms: Vec<String>,

    /// Duration to keep loaded data before reading the source again
    #[serde(default = "default_cache_ttl", with = "humantime_serde")]
    pub cache_ttl: Duration,
}

fn default_title() -> String {
    "Watsonx Deployments Metrics Dashboard".to_string()
}

fn default_data_file() -> Utf8PathBuf {
    Utf8PathBuf::from("all_project_metrics_dsb.json")
}

fn default_table() -> String {
    "deployment_metrics".to_string()
}

fn default_grid_columns() -> NonZeroUsize {
    NonZeroUsize::new(4).unwrap_or(NonZeroUsize::MIN)
}

fn default_metric_groups() -> Vec<String> {
    to_strings(&["generative_ai_quality", "model_health", "mrm_risk"])
}

fn default_excluded_columns() -> Vec<String> {
    to_strings(&["deployment_name", "prompt_template_name", "deployment_id", "error"])
}

fn default_acronyms() -> Vec<String> {
    to_strings(crate::metrics::DEFAULT_ACRONYMS)
}

const fn default_cache_ttl() -> Duration {
    Duration::from_secs(5 * 60)
}

fn to_strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| (*s).to_string()).collect()
}

impl Config {
    /// Load configuration from a file or use defaults
    ///
    /// Without an explicit path, `deployboard.toml` in `base_dir` is used if it exists.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, parsed, or validated
    pub fn load(base_dir: &Utf8Path, config_path: Option<&Utf8PathBuf>) -> Result<Self> {
        let (final_path, text) = if let Some(path) = config_path {
            let text = fs::read_to_string(path).into_app_err_with(|| format!("reading deployboard configuration file '{path}'"))?;
            (path.clone(), text)
        } else {
            let path = base_dir.join(CONFIG_FILE_NAME);
            match fs::read_to_string(&path) {
                Ok(text) => (path, text),
                Err(e) if e.kind() == io::ErrorKind::NotFound => {
                    log::debug!("No configuration file at '{path}', using defaults");
                    return Ok(Self::default());
                }
                Err(e) => return Err(e).into_app_err_with(|| format!("reading deployboard configuration file '{path}'")),
            }
        };

        let config: Self = toml::from_str(&text).into_app_err_with(|| format!("parsing configuration file '{final_path}'"))?;
        config.validate()?;

        log::info!("Loaded configuration from '{final_path}'");
        Ok(config)
    }

    /// Save the default configuration to a TOML file
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be written
    pub fn save_default(output_path: &Utf8Path) -> Result<()> {
        fs::write(output_path, DEFAULT_CONFIG_TOML).into_app_err_with(|| format!("writing default configuration to {output_path}"))?;
        Ok(())
    }

    /// Validate configuration values
    ///
    /// # Errors
    ///
    /// Returns an error if a value is out of range or a list holds empty or repeated entries
    fn validate(&self) -> Result<()> {
        if self.grid_columns.get() > MAX_GRID_COLUMNS {
            return Err(app_err!(
                "grid_columns must be between 1 and {MAX_GRID_COLUMNS}, got {}",
                self.grid_columns
            ));
        }

        if self.cache_ttl.is_zero() {
            return Err(app_err!("cache_ttl must be greater than zero"));
        }

        if self.table.is_empty() {
            return Err(app_err!("table must not be empty"));
        }

        validate_list("metric_groups", &self.metric_groups)?;
        validate_list("excluded_columns", &self.excluded_columns)?;
        validate_list("acronyms", &self.acronyms)?;

        if let Some(acronym) = self.acronyms.iter().find(|a| a.chars().any(char::is_uppercase)) {
            return Err(app_err!("acronyms must be lowercase, got '{acronym}'"));
        }

        Ok(())
    }
}

fn validate_list(name: &str, entries: &[String]) -> Result<()> {
    let mut seen = HashSet::new();
    for entry in entries {
        if entry.is_empty() {
            return Err(app_err!("{name} must not contain empty entries"));
        }

        if !seen.insert(entry.as_str()) {
            return Err(app_err!("{name} contains '{entry}' more than once"));
        }
    }

    Ok(())
}

impl Default for Config {
    fn default() -> Self {
        Self {
            title: default_title(),
            data_file: default_data_file(),
            table: default_table(),
            grid_columns: default_grid_columns(),
            metric_groups: default_metric_groups(),
            excluded_columns: default_excluded_columns(),
            acronyms: default_acronyms(),
            cache_ttl: default_cache_ttl(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn columns(n: usize) -> NonZeroUsize {
        NonZeroUsize::new(n).unwrap()
    }

    #[test]
    fn test_default_config_is_valid() {
        Config::default().validate().unwrap();
    }

    #[test]
    fn test_default_config_toml_matches_default() {
        let parsed: Config = toml::from_str(DEFAULT_CONFIG_TOML).unwrap();
        assert_eq!(parsed, Config::default());
    }

    #[test]
    fn test_empty_toml_uses_defaults() {
        let parsed: Config = toml::from_str("").unwrap();
        assert_eq!(parsed, Config::default());
    }

    #[test]
    fn test_partial_toml() {
        let parsed: Config = toml::from_str("grid_columns = 3\ncache_ttl = \"90s\"").unwrap();
        assert_eq!(parsed.grid_columns, columns(3));
        assert_eq!(parsed.cache_ttl, Duration::from_secs(90));
        assert_eq!(parsed.table, "deployment_metrics");
    }

    #[test]
    fn test_unknown_field_rejected() {
        assert!(toml::from_str::<Config>("colour = \"blue\"").is_err());
    }

    #[test]
    fn test_zero_grid_columns_rejected() {
        assert!(toml::from_str::<Config>("grid_columns = 0").is_err());
    }

    #[test]
    fn test_validate_grid_columns_upper_bound() {
        let config = Config { grid_columns: columns(12), ..Config::default() };
        config.validate().unwrap();

        let config = Config { grid_columns: columns(13), ..Config::default() };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_zero_cache_ttl() {
        let config = Config { cache_ttl: Duration::ZERO, ..Config::default() };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_empty_table() {
        let config = Config { table: String::new(), ..Config::default() };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_duplicate_group() {
        let config = Config { metric_groups: to_strings(&["model_health", "model_health"]), ..Config::default() };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_empty_excluded_column() {
        let config = Config { excluded_columns: to_strings(&["deployment_id", ""]), ..Config::default() };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_uppercase_acronym() {
        let config = Config { acronyms: to_strings(&["PII"]), ..Config::default() };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_empty_lists_allowed() {
        let config = Config { metric_groups: Vec::new(), acronyms: Vec::new(), ..Config::default() };
        config.validate().unwrap();
    }

    #[test]
    #[cfg_attr(miri, ignore = "Miri cannot call GetTempPathW")]
    fn test_save_default_and_load() {
        let tmp = tempfile::tempdir().unwrap();
        let base_dir = Utf8PathBuf::try_from(tmp.path().to_path_buf()).unwrap();
        let output_path = base_dir.join(CONFIG_FILE_NAME);
        Config::save_default(&output_path).unwrap();

        let loaded = Config::load(&base_dir, Some(&output_path)).unwrap();
        assert_eq!(loaded, Config::default());
    }

    #[test]
    #[cfg_attr(miri, ignore = "Miri cannot call GetTempPathW")]
    fn test_load_finds_file_in_base_dir() {
        let tmp = tempfile::tempdir().unwrap();
        let base_dir = Utf8PathBuf::try_from(tmp.path().to_path_buf()).unwrap();
        fs::write(base_dir.join(CONFIG_FILE_NAME), "title = \"Risk Board\"").unwrap();

        let loaded = Config::load(&base_dir, None).unwrap();
        assert_eq!(loaded.title, "Risk Board");
    }

    #[test]
    #[cfg_attr(miri, ignore = "Miri cannot call GetTempPathW")]
    fn test_load_missing_config_uses_defaults() {
        let tmp = tempfile::tempdir().unwrap();
        let base_dir = Utf8PathBuf::try_from(tmp.path().to_path_buf()).unwrap();
        assert_eq!(Config::load(&base_dir, None).unwrap(), Config::default());
    }

    #[test]
    #[cfg_attr(miri, ignore = "Miri cannot call GetTempPathW")]
    fn test_load_explicit_missing_file_fails() {
        let tmp = tempfile::tempdir().unwrap();
        let base_dir = Utf8PathBuf::try_from(tmp.path().to_path_buf()).unwrap();
        let path = base_dir.join("absent.toml");
        assert!(Config::load(&base_dir, Some(&path)).is_err());
    }

    #[test]
    #[cfg_attr(miri, ignore = "Miri cannot call GetTempPathW")]
    fn test_load_invalid_values_fail() {
        let tmp = tempfile::tempdir().unwrap();
        let base_dir = Utf8PathBuf::try_from(tmp.path().to_path_buf()).unwrap();
        let path = base_dir.join(CONFIG_FILE_NAME);
        fs::write(&path, "grid_columns = 20").unwrap();

        let err = Config::load(&base_dir, Some(&path)).unwrap_err();
        assert!(err.to_string().contains("grid_columns"));
    }
}

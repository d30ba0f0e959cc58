use super::{DeploymentRecord, LoadResult, MetricSource, NAME_COLUMN, NestedRecord, TEMPLATE_COLUMN, UNNAMED_DEPLOYMENT};
use camino::Utf8PathBuf;
use serde_json::Value;
use std::fs::File;
use std::io::BufReader;

const LOG_TARGET: &str = "    source";

/// A JSON file holding an array of deployments, each with a `metrics_summary` of metric groups.
#[derive(Debug, Clone)]
pub struct JsonFileSource {
    path: Utf8PathBuf,
}

/// Field holding the metric groups of a deployment entry.
const SUMMARY_FIELD: &str = "metrics_summary";

/// Turn one element of the top-level array into a record.
///
/// Entries are taken as they come: a name that is not a string is shown as its JSON text,
/// and an element that is not an object becomes an unnamed deployment without metrics.
fn record_from_entry(entry: &Value) -> DeploymentRecord {
    DeploymentRecord::Nested(NestedRecord {
        deployment_name: entry_text(entry, NAME_COLUMN).unwrap_or_else(|| UNNAMED_DEPLOYMENT.to_string()),
        prompt_template_name: entry_text(entry, TEMPLATE_COLUMN),
        metrics_summary: entry.get(SUMMARY_FIELD).cloned().unwrap_or(Value::Null),
    })
}

/// The display text of a field, `None` when it is absent or null.
fn entry_text(entry: &Value, field: &str) -> Option<String> {
    match entry.get(field)? {
        Value::Null => None,
        Value::String(s) => Some(s.clone()),
        other => Some(other.to_string()),
    }
}

impl JsonFileSource {
    #[must_use]
    pub fn new(path: impl Into<Utf8PathBuf>) -> Self {
        Self { path: path.into() }
    }

    #[must_use]
    pub fn path(&self) -> &Utf8PathBuf {
        &self.path
    }
}

impl MetricSource for JsonFileSource {
    fn describe(&self) -> String {
        format!("file '{}'", self.path)
    }

    fn load(&self) -> LoadResult {
        let file = match File::open(&self.path) {
            Ok(file) => file,
            Err(e) => {
                log::warn!(target: LOG_TARGET, "Unable to open '{}': {e}", self.path);
                return LoadResult::Missing;
            }
        };

        match serde_json::from_reader::<_, Vec<Value>>(BufReader::new(file)) {
            Ok(entries) => {
                log::info!(target: LOG_TARGET, "Loaded {} deployment(s) from '{}'", entries.len(), self.path);
                LoadResult::Found(entries.iter().map(record_from_entry).collect())
            }
            Err(e) if e.is_io() => {
                log::warn!(target: LOG_TARGET, "Unable to read '{}': {e}", self.path);
                LoadResult::Missing
            }
            Err(e) => {
                log::warn!(target: LOG_TARGET, "Unable to parse '{}': {e}", self.path);
                LoadResult::Failed(format!("Error: The file '{}' is not a valid JSON file.", self.path))
            }
        }
    }

    fn empty_warning(&self) -> String {
        format!(
            "Data file not found or is empty! Please make sure the file `{}` is in the same directory and contains data.",
            self.path
        )
    }
}

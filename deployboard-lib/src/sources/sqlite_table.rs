use super::{DeploymentRecord, FlatRecord, LoadResult, MetricSource};
use crate::metrics::MetricValue;
use camino::Utf8PathBuf;
use compact_str::CompactString;
use rusqlite::{Connection, OpenFlags};

const LOG_TARGET: &str = "    source";

/// A `SQLite` table with one row per deployment and one column per metric.
#[derive(Debug, Clone)]
pub struct SqliteTableSource {
    path: Utf8PathBuf,
    table: String,
}

impl SqliteTableSource {
    #[must_use]
    pub fn new(path: impl Into<Utf8PathBuf>, table: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            table: table.into(),
        }
    }

    #[must_use]
    pub fn table(&self) -> &str {
        &self.table
    }

    fn query(&self) -> rusqlite::Result<Vec<DeploymentRecord>> {
        let conn = Connection::open_with_flags(&self.path, OpenFlags::SQLITE_OPEN_READ_ONLY | OpenFlags::SQLITE_OPEN_NO_MUTEX)?;
        let mut stmt = conn.prepare(&format!("SELECT * FROM {}", quote_identifier(&self.table)))?;
        let column_names: Vec<CompactString> = stmt.column_names().into_iter().map(CompactString::from).collect();

        let mut rows = stmt.query([])?;
        let mut records = Vec::new();
        while let Some(row) = rows.next()? {
            let mut columns = Vec::with_capacity(column_names.len());
            for (index, name) in column_names.iter().enumerate() {
                columns.push((name.clone(), MetricValue::from_sql(row.get_ref(index)?)));
            }

            records.push(DeploymentRecord::Flat(FlatRecord::from_columns(columns)));
        }

        Ok(records)
    }
}

impl MetricSource for SqliteTableSource {
    fn describe(&self) -> String {
        format!("table '{}' in '{}'", self.table, self.path)
    }

    fn load(&self) -> LoadResult {
        match self.query() {
            Ok(records) => {
                log::info!(target: LOG_TARGET, "Loaded {} deployment(s) from table '{}'", records.len(), self.table);
                LoadResult::Found(records)
            }
            Err(e) => {
                log::warn!(target: LOG_TARGET, "Unable to query table '{}' in '{}': {e}", self.table, self.path);
                LoadResult::Failed(format!("Failed to load data from table '{}': {e}", self.table))
            }
        }
    }

    fn empty_warning(&self) -> String {
        format!("No data found in table '{}'.", self.table)
    }
}

/// Quote a table name so it is always read as an identifier.
fn quote_identifier(name: &str) -> String {
    format!("\"{}\"", name.replace('"', "\"\""))
}

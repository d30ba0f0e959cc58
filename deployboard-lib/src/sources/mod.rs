//! Loading deployment records from data sources
//!
//! A data source is read in one shot and yields a [`LoadResult`]: the records it
//! holds, or the reason it holds none. Two sources exist:
//!
//! - [`JsonFileSource`] reads a JSON array of deployments whose metrics are
//!   grouped under `metrics_summary`.
//! - [`SqliteTableSource`] reads every row of a `SQLite` table, one deployment
//!   per row and one metric per column.
//!
//! Failures are never raised as errors. They come back as values so that the
//! dashboard can turn them into notices for the user.
//!
//! [`SourceCache`] wraps a source with a TTL so a long-running process can
//! re-render without re-reading unchanged data.

mod cache;
mod deployment_record;
mod json_file;
mod load_result;
mod sqlite_table;

pub use cache::SourceCache;
pub use deployment_record::{DeploymentRecord, FlatRecord, NAME_COLUMN, NestedRecord, TEMPLATE_COLUMN, UNNAMED_DEPLOYMENT};
pub use json_file::JsonFileSource;
pub use load_result::LoadResult;
pub use sqlite_table::SqliteTableSource;

use core::fmt::Debug;

/// Something deployment records can be loaded from.
pub trait MetricSource: Debug {
    /// A short human-readable description used in logs.
    fn describe(&self) -> String;

    /// Read the source.
    fn load(&self) -> LoadResult;

    /// The warning to show when the source yields no deployments.
    fn empty_warning(&self) -> String;
}

/// The data source selected on the command line.
#[derive(Debug, Clone)]
pub enum DataSource {
    JsonFile(JsonFileSource),
    SqliteTable(SqliteTableSource),
}

impl MetricSource for DataSource {
    fn describe(&self) -> String {
        match self {
            Self::JsonFile(source) => source.describe(),
            Self::SqliteTable(source) => source.describe(),
        }
    }

    fn load(&self) -> LoadResult {
        match self {
            Self::JsonFile(source) => source.load(),
            Self::SqliteTable(source) => source.load(),
        }
    }

    fn empty_warning(&self) -> String {
        match self {
            Self::JsonFile(source) => source.empty_warning(),
            Self::SqliteTable(source) => source.empty_warning(),
        }
    }
}

use super::DeploymentRecord;

/// The outcome of reading a data source once.
#[derive(Debug, Clone)]
pub enum LoadResult {
    /// The source was read; it may still hold no deployments.
    Found(Vec<DeploymentRecord>),

    /// The source does not exist or could not be opened.
    Missing,

    /// The source exists but could not be read as deployment data. The message is meant for the user.
    Failed(String),
}

impl LoadResult {
    /// Returns `true` if the result is `Found`.
    #[must_use]
    pub const fn is_found(&self) -> bool {
        matches!(self, Self::Found(_))
    }

    /// The loaded records, empty unless the result is `Found`.
    #[must_use]
    pub fn records(&self) -> &[DeploymentRecord] {
        match self {
            Self::Found(records) => records,
            Self::Missing | Self::Failed(_) => &[],
        }
    }
}

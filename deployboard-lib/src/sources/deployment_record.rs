use crate::metrics::MetricValue;
use compact_str::CompactString;
use serde_json::Value;

/// Name shown for a deployment whose record does not carry one.
pub const UNNAMED_DEPLOYMENT: &str = "N/A";

/// Column holding the deployment name in a flat record.
pub const NAME_COLUMN: &str = "deployment_name";

/// Column holding the prompt template name in a flat record.
pub const TEMPLATE_COLUMN: &str = "prompt_template_name";

/// One deployment as read from a data source, before any metric is extracted.
#[derive(Debug, Clone)]
pub enum DeploymentRecord {
    /// A record whose metrics are grouped by category, as found in JSON files.
    Nested(NestedRecord),

    /// A record whose metrics sit next to identifier columns, as found in database rows.
    Flat(FlatRecord),
}

impl DeploymentRecord {
    #[must_use]
    pub fn deployment_name(&self) -> &str {
        match self {
            Self::Nested(record) => &record.deployment_name,
            Self::Flat(record) => &record.deployment_name,
        }
    }

    #[must_use]
    pub fn prompt_template_name(&self) -> Option<&str> {
        match self {
            Self::Nested(record) => record.prompt_template_name.as_deref(),
            Self::Flat(record) => record.prompt_template_name.as_deref(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct NestedRecord {
    pub deployment_name: String,
    pub prompt_template_name: Option<String>,

    /// The raw `metrics_summary` object; anything other than an object holds no metrics.
    pub metrics_summary: Value,
}

#[derive(Debug, Clone)]
pub struct FlatRecord {
    pub deployment_name: String,
    pub prompt_template_name: Option<String>,

    /// Every column of the row in column order, identifier columns included.
    pub columns: Vec<(CompactString, MetricValue)>,
}

impl FlatRecord {
    /// Build a record from a row, picking the deployment and template names out of their columns.
    #[must_use]
    pub fn from_columns(columns: Vec<(CompactString, MetricValue)>) -> Self {
        let column_text = |wanted: &str| {
            columns.iter().find(|(name, _)| name == wanted).and_then(|(_, value)| match value {
                MetricValue::Text(s) => Some(s.to_string()),
                MetricValue::Integer(i) => Some(i.to_string()),
                MetricValue::Float(f) => Some(f.to_string()),
                MetricValue::Missing => None,
            })
        };

        let deployment_name = column_text(NAME_COLUMN).unwrap_or_else(|| UNNAMED_DEPLOYMENT.to_string());
        let prompt_template_name = column_text(TEMPLATE_COLUMN);

        Self {
            deployment_name,
            prompt_template_name,
            columns,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_columns_picks_names() {
        let record = FlatRecord::from_columns(vec![
            ("deployment_id".into(), MetricValue::Integer(4)),
            ("deployment_name".into(), MetricValue::Text("chat-prod".into())),
            ("prompt_template_name".into(), MetricValue::Text("summarize".into())),
            ("faithfulness".into(), MetricValue::Float(0.9)),
        ]);

        assert_eq!(record.deployment_name, "chat-prod");
        assert_eq!(record.prompt_template_name.as_deref(), Some("summarize"));
        assert_eq!(record.columns.len(), 4);
    }

    #[test]
    fn test_from_columns_without_names() {
        let record = FlatRecord::from_columns(vec![
            ("deployment_name".into(), MetricValue::Missing),
            ("faithfulness".into(), MetricValue::Float(0.9)),
        ]);

        assert_eq!(record.deployment_name, UNNAMED_DEPLOYMENT);
        assert_eq!(record.prompt_template_name, None);
    }

    #[test]
    fn test_from_columns_numeric_name() {
        let record = FlatRecord::from_columns(vec![("deployment_name".into(), MetricValue::Integer(42))]);
        assert_eq!(record.deployment_name, "42");
    }

    #[test]
    fn test_record_accessors() {
        let record = DeploymentRecord::Nested(NestedRecord {
            deployment_name: "chat-prod".into(),
            prompt_template_name: Some("qa".into()),
            metrics_summary: Value::Null,
        });

        assert_eq!(record.deployment_name(), "chat-prod");
        assert_eq!(record.prompt_template_name(), Some("qa"));
    }
}

use super::MetricValue;
use crate::sources::{DeploymentRecord, FlatRecord, NestedRecord};
use compact_str::CompactString;

/// A single metric of a deployment: its source key and its value.
#[derive(Debug, Clone, PartialEq)]
pub struct Metric {
    pub key: CompactString,
    pub value: MetricValue,
}

impl Metric {
    #[must_use]
    pub fn new(key: impl Into<CompactString>, value: MetricValue) -> Self {
        Self { key: key.into(), value }
    }
}

/// Pulls the displayable metrics out of deployment records.
///
/// Nested records contribute the items of each of `groups` that is present, in group order.
/// Flat records contribute every column not named in `excluded_columns` whose value is present.
/// Either way the metrics keep the order in which the source listed them.
#[derive(Debug, Clone, Copy)]
pub struct Extractor<'a> {
    groups: &'a [String],
    excluded_columns: &'a [String],
}

impl<'a> Extractor<'a> {
    #[must_use]
    pub const fn new(groups: &'a [String], excluded_columns: &'a [String]) -> Self {
        Self { groups, excluded_columns }
    }

    /// Flatten a record into its ordered list of metrics.
    #[must_use]
    pub fn extract(&self, record: &DeploymentRecord) -> Vec<Metric> {
        match record {
            DeploymentRecord::Nested(nested) => self.extract_nested(nested),
            DeploymentRecord::Flat(flat) => self.extract_flat(flat),
        }
    }

    fn extract_nested(&self, record: &NestedRecord) -> Vec<Metric> {
        let Some(summary) = record.metrics_summary.as_object() else {
            return Vec::new();
        };

        self.groups
            .iter()
            .filter_map(|group| summary.get(group).and_then(serde_json::Value::as_object))
            .flat_map(|items| items.iter().map(|(key, value)| Metric::new(key.as_str(), MetricValue::from_json(value))))
            .collect()
    }

    fn extract_flat(&self, record: &FlatRecord) -> Vec<Metric> {
        record
            .columns
            .iter()
            .filter(|(name, value)| !value.is_missing() && !self.excluded_columns.iter().any(|excluded| excluded == name.as_str()))
            .map(|(name, value)| Metric::new(name.clone(), value.clone()))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn groups() -> Vec<String> {
        vec!["generative_ai_quality".into(), "model_health".into(), "mrm_risk".into()]
    }

    fn excluded() -> Vec<String> {
        vec!["deployment_name".into(), "prompt_template_name".into(), "deployment_id".into(), "error".into()]
    }

    fn nested(summary: serde_json::Value) -> DeploymentRecord {
        DeploymentRecord::Nested(NestedRecord {
            deployment_name: "chat-prod".into(),
            prompt_template_name: None,
            metrics_summary: summary,
        })
    }

    fn flat(columns: Vec<(&str, MetricValue)>) -> DeploymentRecord {
        DeploymentRecord::Flat(FlatRecord {
            deployment_name: "chat-prod".into(),
            prompt_template_name: Some("summarize".into()),
            columns: columns.into_iter().map(|(name, value)| (CompactString::from(name), value)).collect(),
        })
    }

    fn keys(metrics: &[Metric]) -> Vec<&str> {
        metrics.iter().map(|m| m.key.as_str()).collect()
    }

    #[test]
    fn test_nested_groups_in_fixed_order() {
        let groups = groups();
        let excluded = excluded();
        let extractor = Extractor::new(&groups, &excluded);

        let record = nested(json!({
            "mrm_risk": {"risk_score": 0.2},
            "model_health": {"records_processed": 1000, "average_api_latency": 123.4},
            "generative_ai_quality": {"faithfulness": 0.91, "pii_input": 0},
        }));

        let metrics = extractor.extract(&record);
        assert_eq!(
            keys(&metrics),
            ["faithfulness", "pii_input", "records_processed", "average_api_latency", "risk_score"]
        );
        assert_eq!(metrics[2].value, MetricValue::Integer(1000));
    }

    #[test]
    fn test_nested_keeps_key_order_within_group() {
        let groups = groups();
        let excluded = excluded();
        let extractor = Extractor::new(&groups, &excluded);

        let record = nested(json!({"model_health": {"zeta": 1, "alpha": 2, "mu": 3}}));
        assert_eq!(keys(&extractor.extract(&record)), ["zeta", "alpha", "mu"]);
    }

    #[test]
    fn test_nested_skips_absent_and_non_object_groups() {
        let groups = groups();
        let excluded = excluded();
        let extractor = Extractor::new(&groups, &excluded);

        let record = nested(json!({
            "generative_ai_quality": [1, 2, 3],
            "model_health": "unavailable",
            "mrm_risk": {"risk_score": 0.2},
            "other_group": {"ignored": 1},
        }));
        assert_eq!(keys(&extractor.extract(&record)), ["risk_score"]);
    }

    #[test]
    fn test_nested_all_groups_absent_is_empty() {
        let groups = groups();
        let excluded = excluded();
        let extractor = Extractor::new(&groups, &excluded);

        assert!(extractor.extract(&nested(json!({}))).is_empty());
        assert!(extractor.extract(&nested(json!(null))).is_empty());
        assert!(extractor.extract(&nested(json!("not a summary"))).is_empty());
    }

    #[test]
    fn test_nested_keeps_missing_values() {
        let groups = groups();
        let excluded = excluded();
        let extractor = Extractor::new(&groups, &excluded);

        let metrics = extractor.extract(&nested(json!({"model_health": {"drift": null}})));
        assert_eq!(metrics, vec![Metric::new("drift", MetricValue::Missing)]);
    }

    #[test]
    fn test_flat_excludes_identifiers_and_missing_values() {
        let groups = groups();
        let excluded = excluded();
        let extractor = Extractor::new(&groups, &excluded);

        let record = flat(vec![
            ("deployment_id", MetricValue::Text("d-1".into())),
            ("deployment_name", MetricValue::Text("chat-prod".into())),
            ("faithfulness", MetricValue::Float(0.9)),
            ("error", MetricValue::Text("timeout".into())),
            ("drift", MetricValue::Missing),
            ("records_processed", MetricValue::Integer(12)),
            ("prompt_template_name", MetricValue::Text("summarize".into())),
        ]);

        let metrics = extractor.extract(&record);
        assert_eq!(keys(&metrics), ["faithfulness", "records_processed"]);
    }

    #[test]
    fn test_flat_all_metrics_null_is_empty() {
        let groups = groups();
        let excluded = excluded();
        let extractor = Extractor::new(&groups, &excluded);

        let record = flat(vec![
            ("deployment_name", MetricValue::Text("chat-prod".into())),
            ("faithfulness", MetricValue::Missing),
            ("drift", MetricValue::Missing),
        ]);
        assert!(extractor.extract(&record).is_empty());
    }
}

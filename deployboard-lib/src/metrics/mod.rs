//! Metric extraction and display formatting
//!
//! This module turns deployment records into a flat, ordered list of metrics
//! and turns each metric into the text shown on a metric card.
//!
//! # Implementation Model
//!
//! A [`Metric`] pairs the source key with a typed [`MetricValue`]. Values are
//! typed once, when the record is loaded, so formatting is a plain `match`
//! rather than an inspection of whatever the source happened to produce.
//!
//! The [`Extractor`] knows the two record shapes:
//! - **Nested** records (JSON files) group their metrics under named
//!   categories, which are visited in a configured order.
//! - **Flat** records (database rows) mix identifier columns with metric
//!   columns; identifiers are excluded by name and null columns are dropped.
//!
//! [`format_label`] and [`format_value`] produce the card text.

mod format;
mod metric;
mod metric_value;

pub use format::{DEFAULT_ACRONYMS, format_label, format_label_with, format_value, write_value};
pub use metric::{Extractor, Metric};
pub use metric_value::MetricValue;

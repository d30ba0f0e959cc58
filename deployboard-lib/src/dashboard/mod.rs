//! The dashboard model shared by all reports
//!
//! [`Dashboard::build`] runs the whole presentation pass over a [`LoadResult`]:
//! the notices describing how the load went, then one [`Section`] per
//! deployment holding its metric cards with their labels and values already
//! formatted and their grid positions assigned. Reports only walk this model.

mod layout;

pub use layout::{GridLayout, GridPosition};

use crate::metrics::{Extractor, format_label_with, format_value};
use crate::sources::LoadResult;
use compact_str::CompactString;
use core::num::NonZeroUsize;
use serde::Serialize;
use strum::Display;

/// Shown in place of the card grid for a deployment without metrics.
pub const NO_METRICS_NOTE: &str = "No metrics available for this deployment.";

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Display, Serialize)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum NoticeLevel {
    Info,
    Warning,
    Error,
}

/// A message about the state of the data, shown above the deployments.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Notice {
    pub level: NoticeLevel,
    pub message: String,
}

impl Notice {
    #[must_use]
    pub fn new(level: NoticeLevel, message: impl Into<String>) -> Self {
        Self {
            level,
            message: message.into(),
        }
    }
}

/// One metric ready for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Card {
    pub key: CompactString,
    pub label: String,
    pub value: String,
    pub position: GridPosition,
}

/// The cards of one deployment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section {
    pub deployment_name: String,
    pub prompt_template_name: Option<String>,
    pub cards: Vec<Card>,
    pub layout: GridLayout,
}

impl Section {
    #[must_use]
    pub fn heading(&self) -> String {
        format!("Metrics for Deployment: {}", self.deployment_name)
    }

    #[must_use]
    pub fn caption(&self) -> Option<String> {
        self.prompt_template_name.as_ref().map(|template| format!("Prompt template: {template}"))
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn rows(&self) -> impl Iterator<Item = &[Card]> {
        self.layout.rows(&self.cards)
    }
}

/// Knobs for [`Dashboard::build`].
#[derive(Debug, Clone, Copy)]
pub struct BuildOptions<'a> {
    pub title: &'a str,
    pub grid_columns: NonZeroUsize,
    pub extractor: Extractor<'a>,
    pub acronyms: &'a [String],
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dashboard {
    pub title: String,
    pub notices: Vec<Notice>,
    pub sections: Vec<Section>,
}

impl Dashboard {
    /// Build the dashboard for one load of a source.
    ///
    /// `empty_warning` is the source's own wording for "there is nothing to show".
    #[must_use]
    pub fn build(result: &LoadResult, empty_warning: &str, options: &BuildOptions<'_>) -> Self {
        let mut notices = Vec::new();
        match result {
            LoadResult::Failed(message) => {
                notices.push(Notice::new(NoticeLevel::Error, message.as_str()));
                notices.push(Notice::new(NoticeLevel::Warning, empty_warning));
            }
            LoadResult::Missing => notices.push(Notice::new(NoticeLevel::Warning, empty_warning)),
            LoadResult::Found(records) if records.is_empty() => notices.push(Notice::new(NoticeLevel::Warning, empty_warning)),
            LoadResult::Found(records) => {
                notices.push(Notice::new(NoticeLevel::Info, format!("Displaying metrics for {} deployments.", records.len())));
            }
        }

        let layout = GridLayout::new(options.grid_columns);
        let sections = result
            .records()
            .iter()
            .map(|record| {
                let cards = options
                    .extractor
                    .extract(record)
                    .into_iter()
                    .enumerate()
                    .map(|(index, metric)| Card {
                        label: format_label_with(&metric.key, options.acronyms),
                        value: format_value(&metric.value),
                        key: metric.key,
                        position: layout.position(index),
                    })
                    .collect();

                Section {
                    deployment_name: record.deployment_name().to_string(),
                    prompt_template_name: record.prompt_template_name().map(str::to_string),
                    cards,
                    layout,
                }
            })
            .collect();

        Self {
            title: options.title.to_string(),
            notices,
            sections,
        }
    }

    /// Returns `true` if at least one deployment was loaded.
    #[must_use]
    pub fn has_data(&self) -> bool {
        !self.sections.is_empty()
    }

    /// The most severe notice level present, if any.
    #[must_use]
    pub fn worst_notice(&self) -> Option<NoticeLevel> {
        self.notices.iter().map(|notice| notice.level).max()
    }
}

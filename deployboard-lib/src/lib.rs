#![doc(hidden)]
#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! Core library for deployboard
//!
//! This library consolidates all functionality for the deployboard tool, which displays
//! precomputed metrics of model deployments as a grid of metric cards.
//!
//! # Module Organization
//!
//! - [`commands`]: Command-line interface and orchestration
//! - [`sources`]: Loading deployment records from JSON files and `SQLite` tables
//! - [`metrics`]: Metric extraction and display formatting
//! - [`dashboard`]: The notices, sections, and card grid shared by all reports
//! - [`reports`]: Report generation in multiple formats

pub type Result<T, E = ohno::AppError> = core::result::Result<T, E>;

#[cfg(any(debug_assertions, test))]
pub mod commands;
#[cfg(not(any(debug_assertions, test)))]
mod commands;

#[cfg(any(debug_assertions, test))]
pub mod dashboard;
#[cfg(not(any(debug_assertions, test)))]
mod dashboard;

#[cfg(any(debug_assertions, test))]
pub mod metrics;
#[cfg(not(any(debug_assertions, test)))]
mod metrics;

#[cfg(any(debug_assertions, test))]
pub mod reports;
#[cfg(not(any(debug_assertions, test)))]
mod reports;

#[cfg(any(debug_assertions, test))]
pub mod sources;
#[cfg(not(any(debug_assertions, test)))]
mod sources;

pub use crate::commands::{Host, run};

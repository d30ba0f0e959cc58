//! Multi-format report generation for the deployment dashboard
//!
//! This module turns a built [`Dashboard`](crate::dashboard::Dashboard) into
//! output for people and for other programs.
//!
//! # Implementation Model
//!
//! Four report generators are provided, each accessed through a `generate` function:
//! - **HTML**: Self-contained page with embedded CSS laying the metric cards out on a grid
//! - **Console**: Terminal output with ANSI colors, sized to the terminal width
//! - **JSON**: Machine-readable structured data
//! - **CSV**: One row per metric card, with proper escaping
//!
//! All generators take the same input and write to a `core::fmt::Write`, so the
//! caller decides whether the output lands in a file, a terminal, or a test buffer.
//! Labels and values arrive already formatted; generators only arrange them.

mod console;
mod csv;
mod html;
mod json;

pub use console::generate as generate_console;
pub use self::csv::generate as generate_csv;
pub use html::generate as generate_html;
pub use json::generate as generate_json;

//! Render precomputed model deployment metrics as a dashboard of metric cards.
//!
//! `deployboard` reads one record per deployment from a JSON file or a `SQLite` table
//! and shows each deployment's metrics as a grid of labelled cards, either once
//! (`render`, to the console or HTML/JSON/CSV files) or continuously (`watch`).
//! Everything lives in `deployboard_lib`; this binary only binds it to the process.
#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

use deployboard_lib::{Host, run};
use std::io::Write;
use std::io::{stderr, stdout};

/// Host bound to stdout, stderr, and the process exit status.
#[derive(Debug, Clone, Default)]
pub struct RealHost;

#[cfg_attr(coverage_nightly, coverage(off))]
impl Host for RealHost {
    fn output(&mut self) -> impl Write {
        stdout()
    }

    fn error(&mut self) -> impl Write {
        stderr()
    }

    fn exit(&mut self, code: i32) {
        std::process::exit(code);
    }
}

#[tokio::main]
#[cfg_attr(coverage_nightly, coverage(off))]
async fn main() -> Result<(), ohno::AppError> {
    run(&mut RealHost, std::env::args()).await
}

use super::Host;
use super::common::{Common, CommonArgs, write_report_file};
use crate::Result;
use crate::reports::generate_html;
use crate::sources::SourceCache;
use camino::Utf8PathBuf;
use chrono::{Local, Utc};
use clap::Parser;
use core::num::NonZeroU64;
use core::time::Duration;
use humantime_serde::re::humantime;
use std::io::Write;

const LOG_TARGET: &str = "     watch";

#[derive(Parser, Debug)]
pub struct WatchArgs {
    #[command(flatten)]
    pub common: CommonArgs,

    /// HTML file to keep up to date
    #[arg(long, value_name = "PATH")]
    pub html: Utf8PathBuf,

    /// Time between renders, such as `30s` or `5m`
    #[arg(long, value_name = "DURATION", default_value = "30s", value_parser = humantime::parse_duration)]
    pub interval: Duration,

    /// Stop after this many renders (default is to run until interrupted)
    #[arg(long, value_name = "N")]
    pub count: Option<NonZeroU64>,
}

/// Re-render the HTML dashboard on a fixed interval
///
/// Loads go through a [`SourceCache`] with the configured TTL, so an interval
/// shorter than the TTL re-renders the cached data rather than reading the
/// source each time.
///
/// # Errors
///
/// Returns an error if the configuration cannot be loaded or the page cannot be written
pub async fn watch_dashboard<H: Host>(host: &mut H, args: &WatchArgs) -> Result<()> {
    let mut common = Common::new(host, &args.common)?;
    let mut cache = SourceCache::new(common.source.clone(), common.config.cache_ttl);

    let mut renders: u64 = 0;
    loop {
        let dashboard = common.build(cache.get(Utc::now()));
        common.report_problems(&dashboard);

        let mut html = String::new();
        let now = Local::now();
        generate_html(&dashboard, now, &mut html)?;
        write_report_file(&args.html, &html)?;

        renders += 1;
        let _ = writeln!(
            common.output(),
            "[{}] Rendered {} deployment(s) to {}",
            now.format("%H:%M:%S"),
            dashboard.sections.len(),
            args.html
        );

        if args.count.is_some_and(|count| renders >= count.get()) {
            log::debug!(target: LOG_TARGET, "Stopping after {renders} render(s)");
            return Ok(());
        }

        log::debug!(target: LOG_TARGET, "Sleeping for {}", humantime::format_duration(args.interval));
        tokio::time::sleep(args.interval).await;
    }
}

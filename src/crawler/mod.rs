//! Crawler module for listing-page fetching and processing
//!
//! This module contains the core crawling logic:
//! - HTTP fetching of listing pages
//! - Listing parsing: row extraction and next-page detection
//! - Per-year chain coordination

mod coordinator;
mod fetcher;
mod parser;

pub use coordinator::{run_crawl, Coordinator};
pub use fetcher::{build_http_client, fetch_listing};
pub use parser::{parse_listing, ParsedListing};

use crate::config::Config;
use crate::output::{CrawlStats, JsonLinesSink};
use crate::Result;
use std::path::Path;
use std::sync::Arc;

/// Runs a complete crawl, writing records to the configured JSON-lines file
///
/// This is the main entry point used by the CLI. It opens the configured
/// output sink, seeds one chain per year, and crawls every chain to
/// completion.
pub async fn crawl(config: Config) -> Result<CrawlStats> {
    let sink = JsonLinesSink::new(Path::new(&config.output.gazettes_path))?;
    run_crawl(config, Arc::new(sink)).await
}

//! Crawl coordinator
//!
//! Seeds one chain per calendar year and runs the chains as independent
//! tasks. A chain is strictly sequential internally: page N+1's address
//! only exists once page N has been fetched and parsed, and the cursor
//! travels inside the address itself. Chains share nothing but the sink
//! handle, so one chain failing (or being cancelled) never touches the
//! others.

use crate::config::Config;
use crate::crawler::fetcher::{build_http_client, fetch_listing};
use crate::crawler::parser::parse_listing;
use crate::output::{ChainOutcome, CrawlStats, GazetteSink};
use crate::url::{generate_urls, ListingPageAddress};
use crate::Result;
use chrono::{Datelike, Utc};
use reqwest::Client;
use std::sync::Arc;
use tokio::task::JoinSet;

/// Main crawler coordinator structure
pub struct Coordinator {
    config: Arc<Config>,
    client: Client,
    sink: Arc<dyn GazetteSink>,
}

impl Coordinator {
    /// Creates a new coordinator with the given configuration and sink
    pub fn new(config: Config, sink: Arc<dyn GazetteSink>) -> Result<Self> {
        let client = build_http_client(&config.user_agent)?;

        Ok(Self {
            config: Arc::new(config),
            client,
            sink,
        })
    }

    /// Runs the full crawl and returns run statistics
    ///
    /// Each year in `[start_year, current UTC year)` gets its own chain
    /// task. The run completes when every chain has either exhausted its
    /// pages or died on a fetch error; the sink is finalized at the end
    /// either way.
    pub async fn run(&self) -> Result<CrawlStats> {
        let seeds = generate_urls(self.config.crawler.start_year, Utc::now().year());
        tracing::info!(
            "Seeding {} year chains (start year {})",
            seeds.len(),
            self.config.crawler.start_year
        );

        let mut tasks = JoinSet::new();
        for seed in seeds {
            let client = self.client.clone();
            let base = self.config.crawler.base_url.clone();
            let sink = Arc::clone(&self.sink);
            tasks.spawn(async move { crawl_chain(client, base, seed, sink).await });
        }

        let mut stats = CrawlStats::new();
        while let Some(joined) = tasks.join_next().await {
            match joined {
                Ok(outcome) => {
                    tracing::info!(
                        year = outcome.year,
                        pages = outcome.pages_fetched,
                        gazettes = outcome.gazettes_emitted,
                        failed = outcome.failed,
                        "Year chain finished"
                    );
                    stats.absorb(&outcome);
                }
                Err(e) => {
                    tracing::error!("Chain task aborted: {}", e);
                    stats.chains_failed += 1;
                }
            }
        }

        self.sink.finalize()?;

        tracing::info!(
            "Crawl finished: {} records from {} pages across {} chains",
            stats.gazettes_emitted,
            stats.pages_fetched,
            stats.total_chains()
        );

        Ok(stats)
    }
}

/// Crawls one year's listing chain to completion
///
/// Follows next-page addresses until the pagination control stops
/// advertising one. A fetch error ends this chain only; records emitted
/// before the error stay emitted.
async fn crawl_chain(
    client: Client,
    base: String,
    seed: ListingPageAddress,
    sink: Arc<dyn GazetteSink>,
) -> ChainOutcome {
    let mut outcome = ChainOutcome::new(seed.year);
    let mut address = seed;

    loop {
        let url = address.to_url_with_base(&base);
        tracing::debug!(year = address.year, cursor = address.cursor, %url, "Fetching listing page");

        let body = match fetch_listing(&client, &url).await {
            Ok(body) => body,
            Err(e) => {
                tracing::warn!(year = address.year, "Chain ended by fetch error: {}", e);
                outcome.failed = true;
                break;
            }
        };
        outcome.pages_fetched += 1;

        let parsed = parse_listing(&body, &address);
        outcome.rows_skipped += parsed.rows_skipped as u64;

        for gazette in &parsed.gazettes {
            match sink.emit(gazette) {
                Ok(()) => outcome.gazettes_emitted += 1,
                Err(e) => {
                    tracing::error!("Sink rejected record: {}", e);
                    outcome.emit_errors += 1;
                }
            }
        }

        match parsed.next_page {
            Some(next) => address = next,
            None => break,
        }
    }

    outcome
}

/// Runs a complete crawl with the given configuration and sink
///
/// Convenience wrapper over [`Coordinator`].
pub async fn run_crawl(config: Config, sink: Arc<dyn GazetteSink>) -> Result<CrawlStats> {
    let coordinator = Coordinator::new(config, sink)?;
    coordinator.run().await
}

//! Crawl statistics
//!
//! Per-chain outcomes are accumulated into one [`CrawlStats`] for the
//! whole run and printed at the end of the CLI invocation.

/// Outcome of one year-chain
#[derive(Debug, Clone)]
pub struct ChainOutcome {
    /// Year this chain covered
    pub year: i32,

    /// Listing pages successfully fetched and parsed
    pub pages_fetched: u64,

    /// Records handed to the sink
    pub gazettes_emitted: u64,

    /// Rows skipped by row-level extraction policy
    pub rows_skipped: u64,

    /// Records the sink refused
    pub emit_errors: u64,

    /// Whether the chain ended on a fetch error instead of running out of
    /// pages
    pub failed: bool,
}

impl ChainOutcome {
    pub fn new(year: i32) -> Self {
        Self {
            year,
            pages_fetched: 0,
            gazettes_emitted: 0,
            rows_skipped: 0,
            emit_errors: 0,
            failed: false,
        }
    }
}

/// Summary statistics for a whole crawl run
#[derive(Debug, Clone, Default)]
pub struct CrawlStats {
    pub chains_completed: u64,
    pub chains_failed: u64,
    pub pages_fetched: u64,
    pub gazettes_emitted: u64,
    pub rows_skipped: u64,
    pub emit_errors: u64,
}

impl CrawlStats {
    pub fn new() -> Self {
        Self::default()
    }

    /// Folds one chain's outcome into the run totals
    pub fn absorb(&mut self, outcome: &ChainOutcome) {
        if outcome.failed {
            self.chains_failed += 1;
        } else {
            self.chains_completed += 1;
        }
        self.pages_fetched += outcome.pages_fetched;
        self.gazettes_emitted += outcome.gazettes_emitted;
        self.rows_skipped += outcome.rows_skipped;
        self.emit_errors += outcome.emit_errors;
    }

    pub fn total_chains(&self) -> u64 {
        self.chains_completed + self.chains_failed
    }
}

/// Prints run statistics to stdout in a formatted manner
pub fn print_stats(stats: &CrawlStats) {
    println!("=== Crawl Statistics ===\n");

    println!(
        "Year chains: {} completed, {} failed",
        stats.chains_completed, stats.chains_failed
    );
    println!("Listing pages fetched: {}", stats.pages_fetched);
    println!("Gazette records emitted: {}", stats.gazettes_emitted);

    if stats.rows_skipped > 0 {
        println!("Rows skipped: {}", stats.rows_skipped);
    }
    if stats.emit_errors > 0 {
        println!("Records the sink rejected: {}", stats.emit_errors);
    }
}

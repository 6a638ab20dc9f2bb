//! Output sinks and crawl statistics
//!
//! Records flow out of the crawler through the [`GazetteSink`] trait;
//! the CLI wires up the JSON-lines sink, tests use the in-memory one.

mod jsonl;
mod stats;
mod traits;

pub use jsonl::JsonLinesSink;
pub use stats::{print_stats, ChainOutcome, CrawlStats};
pub use traits::{GazetteSink, MemorySink, OutputError, OutputResult};

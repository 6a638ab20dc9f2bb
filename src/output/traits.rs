//! Record sink trait and in-memory implementation
//!
//! The crawler hands each [`Gazette`] to a sink as soon as its row is
//! extracted. Sinks own persistence; the crawler guarantees row order
//! within a page and nothing across pages or chains.

use crate::gazette::Gazette;
use std::sync::Mutex;
use thiserror::Error;

/// Errors that can occur while emitting records
#[derive(Debug, Error)]
pub enum OutputError {
    #[error("Failed to write record: {0}")]
    Write(String),

    #[error("Failed to serialize record: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for output operations
pub type OutputResult<T> = Result<T, OutputError>;

/// Destination for extracted gazette records
///
/// Implementations must be thread-safe: independent year-chains emit
/// concurrently through one shared sink handle.
pub trait GazetteSink: Send + Sync {
    /// Emits one record
    fn emit(&self, gazette: &Gazette) -> OutputResult<()>;

    /// Flushes any buffered records; called once after all chains finish
    fn finalize(&self) -> OutputResult<()> {
        Ok(())
    }
}

/// Sink that collects records in memory
///
/// Used by tests and by `--dry-run`-style inspection; order within one
/// chain's pages is preserved, order across chains is arbitrary.
#[derive(Debug, Default)]
pub struct MemorySink {
    records: Mutex<Vec<Gazette>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a copy of everything emitted so far
    pub fn records(&self) -> Vec<Gazette> {
        self.records.lock().unwrap().clone()
    }

    pub fn len(&self) -> usize {
        self.records.lock().unwrap().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl GazetteSink for MemorySink {
    fn emit(&self, gazette: &Gazette) -> OutputResult<()> {
        self.records.lock().unwrap().push(gazette.clone());
        Ok(())
    }
}

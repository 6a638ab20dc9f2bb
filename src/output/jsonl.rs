//! JSON-lines record sink
//!
//! Writes one serialized [`Gazette`] per line, append-only, buffered.
//! This is the default sink for the CLI; downstream tooling picks the
//! file up for document download and archival.

use crate::gazette::Gazette;
use crate::output::traits::{GazetteSink, OutputError, OutputResult};
use std::fs::{File, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::Path;
use std::sync::Mutex;

/// Sink writing records as JSON lines to a file
pub struct JsonLinesSink {
    writer: Mutex<BufWriter<File>>,
}

impl JsonLinesSink {
    /// Opens (or creates) the output file in append mode
    pub fn new(path: &Path) -> OutputResult<Self> {
        let file = OpenOptions::new().create(true).append(true).open(path)?;
        Ok(Self {
            writer: Mutex::new(BufWriter::new(file)),
        })
    }
}

impl GazetteSink for JsonLinesSink {
    fn emit(&self, gazette: &Gazette) -> OutputResult<()> {
        let line = serde_json::to_string(gazette)?;
        let mut writer = self
            .writer
            .lock()
            .map_err(|_| OutputError::Write("output writer poisoned".to_string()))?;
        writeln!(writer, "{}", line)?;
        Ok(())
    }

    fn finalize(&self) -> OutputResult<()> {
        let mut writer = self
            .writer
            .lock()
            .map_err(|_| OutputError::Write("output writer poisoned".to_string()))?;
        writer.flush()?;
        Ok(())
    }
}

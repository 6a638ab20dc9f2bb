//! Gazette record model
//!
//! One [`Gazette`] is emitted per publication row on a listing page. Field
//! names follow the downstream archive's item schema.

use chrono::{DateTime, NaiveDate, Utc};
use serde::Serialize;

/// IBGE code for the municipality of Fortaleza, CE
pub const MUNICIPALITY_ID: &str = "2304400";

/// Government power a gazette belongs to
///
/// This portal only publishes executive-power gazettes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Power {
    Executive,
}

/// One gazette publication, ready for the record sink
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Gazette {
    /// Publication date (no time component)
    pub date: NaiveDate,

    /// Absolute document URLs for later download; exactly one for this portal
    pub file_urls: Vec<String>,

    /// Whether this is a supplementary ("extra") edition
    pub is_extra_edition: bool,

    /// IBGE municipality code, constant for this portal
    pub municipality_id: String,

    /// Publishing power, constant for this portal
    pub power: Power,

    /// Wall-clock UTC timestamp of extraction
    pub scraped_at: DateTime<Utc>,
}

impl Gazette {
    /// Builds a record from one extracted row, stamping the portal constants
    /// and the current extraction time
    pub fn new(date: NaiveDate, file_url: String, is_extra_edition: bool) -> Self {
        Self {
            date,
            file_urls: vec![file_url],
            is_extra_edition,
            municipality_id: MUNICIPALITY_ID.to_string(),
            power: Power::Executive,
            scraped_at: Utc::now(),
        }
    }
}

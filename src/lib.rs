//! Diario-Fortaleza: a paginated gazette listing crawler
//!
//! This crate crawls the Fortaleza (CE) official gazette portal. It enumerates
//! one paginated listing chain per calendar year, extracts one record per
//! gazette publication row, and emits records to an output sink.

pub mod config;
pub mod crawler;
pub mod dates;
pub mod gazette;
pub mod output;
pub mod url;

use thiserror::Error;

/// Main error type for crawler operations
#[derive(Debug, Error)]
pub enum CrawlerError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Fetch error: {0}")]
    Fetch(#[from] FetchError),

    #[error("Output error: {0}")]
    Output(#[from] output::OutputError),

    #[error("HTTP client error: {0}")]
    Reqwest(#[from] reqwest::Error),

    #[error("URL parse error: {0}")]
    UrlParse(#[from] ::url::ParseError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Configuration-specific errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse TOML: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Validation error: {0}")]
    Validation(String),
}

/// Errors fetching a single listing page
///
/// A fetch error ends the year-chain it occurred on; other chains are
/// unaffected. Retry policy is not this crate's concern.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("HTTP error for {url}: {source}")]
    Http { url: String, source: reqwest::Error },

    #[error("HTTP status {status} for {url}")]
    Status { url: String, status: u16 },

    #[error("Invalid listing address {url}: {source}")]
    InvalidAddress {
        url: String,
        source: ::url::ParseError,
    },
}

/// Errors parsing a Portuguese-language date cell
///
/// These never escape the listing parser; a row whose date fails to parse
/// is skipped and the failure logged.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DateParseError {
    #[error("Empty date text")]
    Empty,

    #[error("Unrecognized date format: {0:?}")]
    Unrecognized(String),

    #[error("Unknown month name: {0:?}")]
    UnknownMonth(String),

    #[error("Date components out of range: {0:?}")]
    OutOfRange(String),
}

/// Result type alias for crawler operations
pub type Result<T> = std::result::Result<T, CrawlerError>;

/// Result type alias for configuration operations
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

/// Result type alias for date parsing
pub type DateResult<T> = std::result::Result<T, DateParseError>;

// Re-export commonly used types
pub use config::Config;
pub use gazette::{Gazette, Power, MUNICIPALITY_ID};
pub use url::{document_url, generate_urls, seed_addresses, ListingPageAddress};

//! Listing-page addresses and year enumeration
//!
//! The crawl cursor lives entirely inside the request address: a
//! [`ListingPageAddress`] is an immutable descriptor of one listing page
//! (year filter plus page cursor), and advancing a chain is the pure
//! transformation [`ListingPageAddress::with_cursor`]. This keeps chains
//! resumable and replayable with no hidden state.

use chrono::{Datelike, Utc};

/// Base address of the gazette portal. Document paths are resolved by
/// direct concatenation against this, matching the portal's own links.
pub const PORTAL_BASE: &str = "http://apps.fortaleza.ce.gov.br/diariooficial/";

/// First year the portal has gazettes for.
pub const DEFAULT_START_YEAR: i32 = 2015;

/// Address of one fetchable listing page
///
/// Renders to the portal's year-filtered, paginated listing URL. The
/// `num-diario` and `content-diario` filters are always sent empty and
/// `mes-diario=todos` selects all months; only the year and the page
/// cursor vary.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ListingPageAddress {
    /// Year filter (`ano-diario`)
    pub year: i32,

    /// Page cursor (`current`), 1-based
    pub cursor: u32,
}

impl ListingPageAddress {
    /// Creates the address of the first listing page for a year
    pub fn new(year: i32) -> Self {
        Self { year, cursor: 1 }
    }

    /// Returns the address of the same year's chain at a different cursor
    ///
    /// This is the page-transition function: everything before the cursor
    /// is carried over unchanged.
    pub fn with_cursor(&self, cursor: u32) -> Self {
        Self {
            year: self.year,
            cursor,
        }
    }

    /// Renders the full portal URL for this address
    pub fn to_url(&self) -> String {
        self.to_url_with_base(PORTAL_BASE)
    }

    /// Renders the listing URL against an alternate base
    ///
    /// Used when the crawl loop runs against a test server instead of the
    /// live portal; the query string is identical either way.
    pub fn to_url_with_base(&self, base: &str) -> String {
        format!(
            "{}?num-diario=&content-diario=&ano-diario={}&mes-diario=todos&current={}",
            base, self.year, self.cursor
        )
    }
}

impl std::fmt::Display for ListingPageAddress {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_url())
    }
}

/// Resolves a row's relative document path to an absolute download URL
pub fn document_url(relative_path: &str) -> String {
    format!("{}{}", PORTAL_BASE, relative_path)
}

/// Enumerates the first listing page of every year in `[start_year, current_year)`
///
/// Pure and deterministic; output is ascending by year. The range excludes
/// `current_year` itself, so the sequence is empty when
/// `current_year <= start_year` (no gazettes expected yet, not an error).
pub fn generate_urls(start_year: i32, current_year: i32) -> Vec<ListingPageAddress> {
    (start_year..current_year)
        .map(ListingPageAddress::new)
        .collect()
}

/// Enumerates seed addresses using the UTC wall clock for the current year
pub fn seed_addresses(start_year: i32) -> Vec<ListingPageAddress> {
    generate_urls(start_year, Utc::now().year())
}

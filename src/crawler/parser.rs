//! Listing page parser
//!
//! This module turns one fetched listing page into:
//! - zero or more [`Gazette`] records, one per publication row, and
//! - at most one next-page address, derived from the pagination control.
//!
//! Row-level problems (missing anchor, empty description, unparseable date)
//! skip that row only; they never abort sibling rows or suppress next-page
//! detection. A malformed pagination fragment terminates the chain instead
//! of raising, so one bad page cannot stall a crawl.

use crate::dates::parse_pt_date;
use crate::gazette::Gazette;
use crate::url::{document_url, ListingPageAddress};
use scraper::{ElementRef, Html, Selector};

/// Publication rows in the results table
const ROW_SELECTOR: &str = ".diarios-oficiais .table-responsive tbody tr";

/// Edition label cell, e.g. "Diário Oficial Nº 15923s"
const DESCRIPTION_SELECTOR: &str = "td:nth-child(1)";

/// Date cell, e.g. "05 de Março de 2021"
const DATE_SELECTOR: &str = "td:nth-child(2)";

/// Page links inside the pagination control
const PAGE_LINK_SELECTOR: &str = "ul.pagination .page-link";

/// Everything extracted from one listing page
#[derive(Debug, Clone)]
pub struct ParsedListing {
    /// Records in row order
    pub gazettes: Vec<Gazette>,

    /// Address of the next page in this year's chain, if the pagination
    /// control advertised one
    pub next_page: Option<ListingPageAddress>,

    /// Rows present in the table that produced no record
    pub rows_skipped: usize,
}

/// Parses one listing page
///
/// `current` is the address this page was fetched from; the next-page
/// address (if any) is derived from it by swapping in the cursor found in
/// the pagination control. Pure apart from the `scraped_at` stamp on each
/// record: the same page always yields the same records and next address.
pub fn parse_listing(html: &str, current: &ListingPageAddress) -> ParsedListing {
    let document = Html::parse_document(html);

    let mut gazettes = Vec::new();
    let mut rows_skipped = 0;

    if let Ok(row_selector) = Selector::parse(ROW_SELECTOR) {
        for row in document.select(&row_selector) {
            match extract_row(&row) {
                Some(gazette) => gazettes.push(gazette),
                None => rows_skipped += 1,
            }
        }
    }

    let next_page = extract_next_page(&document, current);

    ParsedListing {
        gazettes,
        next_page,
        rows_skipped,
    }
}

/// Extracts one record from a publication row, or None to skip the row
fn extract_row(row: &ElementRef) -> Option<Gazette> {
    let description = match cell_text(row, DESCRIPTION_SELECTOR) {
        Some(text) => text,
        None => {
            tracing::debug!("Skipping row with empty description cell");
            return None;
        }
    };

    // Extra editions carry a trailing "s" on the edition number,
    // e.g. "Diário Oficial Nº 15923s".
    let is_extra_edition = description.chars().last() == Some('s');

    let path = match anchor_href(row) {
        Some(href) => href,
        None => {
            tracing::debug!(%description, "Skipping row with no document anchor");
            return None;
        }
    };

    let date_text = match cell_text(row, DATE_SELECTOR) {
        Some(text) => text,
        None => {
            tracing::debug!(%description, "Skipping row with empty date cell");
            return None;
        }
    };

    let date = match parse_pt_date(&date_text) {
        Ok(date) => date,
        Err(e) => {
            tracing::warn!(%description, %date_text, "Skipping row with bad date: {}", e);
            return None;
        }
    };

    Some(Gazette::new(date, document_url(&path), is_extra_edition))
}

/// Returns the trimmed text of the first cell matching `selector`,
/// or None if the cell is missing or empty
fn cell_text(row: &ElementRef, selector: &str) -> Option<String> {
    let selector = Selector::parse(selector).ok()?;
    let cell = row.select(&selector).next()?;
    let text = cell.text().collect::<String>().trim().to_string();
    if text.is_empty() {
        None
    } else {
        Some(text)
    }
}

/// Returns the href of the row's first anchor
fn anchor_href(row: &ElementRef) -> Option<String> {
    let selector = Selector::parse("a").ok()?;
    row.select(&selector)
        .next()?
        .value()
        .attr("href")
        .map(|href| href.trim().to_string())
        .filter(|href| !href.is_empty())
}

/// Reads the pagination control and derives the next-page address
///
/// The portal renders the forward control as the last page-link in the
/// list, so the last link is followed regardless of its numeric value.
/// Its href carries the target cursor in the URL fragment ("...#3").
/// No pagination control, no links, or a fragment that is not a number
/// all mean the chain ends here.
fn extract_next_page(
    document: &Html,
    current: &ListingPageAddress,
) -> Option<ListingPageAddress> {
    let selector = Selector::parse(PAGE_LINK_SELECTOR).ok()?;
    let last_link = document.select(&selector).last()?;
    let href = last_link.value().attr("href")?;

    let fragment = match href.split('#').nth(1) {
        Some(fragment) => fragment,
        None => {
            tracing::debug!(href, "Pagination link without fragment, ending chain");
            return None;
        }
    };

    let cursor: u32 = match fragment.trim().parse() {
        Ok(cursor) => cursor,
        Err(_) => {
            tracing::debug!(href, "Non-numeric pagination fragment, ending chain");
            return None;
        }
    };

    Some(current.with_cursor(cursor))
}

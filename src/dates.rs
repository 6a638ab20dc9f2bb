//! Portuguese date parsing for listing-page date cells
//!
//! The portal renders publication dates in long Portuguese form
//! ("05 de Março de 2021"); older listings occasionally use the numeric
//! dd/mm/yyyy form. Both are handled here, always truncated to a calendar
//! date.

use crate::{DateParseError, DateResult};
use chrono::NaiveDate;

/// Parses a Portuguese-language date string into a calendar date
///
/// Month names are matched case-insensitively, with and without accents.
///
/// # Example
///
/// ```
/// use diario_fortaleza::dates::parse_pt_date;
/// use chrono::NaiveDate;
///
/// let date = parse_pt_date("05 de Março de 2021").unwrap();
/// assert_eq!(date, NaiveDate::from_ymd_opt(2021, 3, 5).unwrap());
/// ```
pub fn parse_pt_date(text: &str) -> DateResult<NaiveDate> {
    let text = text.trim();
    if text.is_empty() {
        return Err(DateParseError::Empty);
    }

    if let Some(date) = parse_numeric(text) {
        return Ok(date);
    }

    parse_long_form(text)
}

/// Handles dd/mm/yyyy and dd-mm-yyyy
fn parse_numeric(text: &str) -> Option<NaiveDate> {
    let sep = if text.contains('/') {
        '/'
    } else if text.contains('-') {
        '-'
    } else {
        return None;
    };

    let parts: Vec<&str> = text.split(sep).map(str::trim).collect();
    if parts.len() != 3 {
        return None;
    }

    let day: u32 = parts[0].parse().ok()?;
    let month: u32 = parts[1].parse().ok()?;
    let year: i32 = parts[2].parse().ok()?;

    NaiveDate::from_ymd_opt(year, month, day)
}

/// Handles "05 de Março de 2021" (with or without the "de" connectives)
fn parse_long_form(text: &str) -> DateResult<NaiveDate> {
    let lowered = text.to_lowercase();
    let tokens: Vec<&str> = lowered
        .split_whitespace()
        .map(|t| t.trim_matches(|c| c == ',' || c == '.'))
        .filter(|t| !t.is_empty() && *t != "de")
        .collect();

    if tokens.len() != 3 {
        return Err(DateParseError::Unrecognized(text.to_string()));
    }

    // Day may carry the ordinal marker, e.g. "1º".
    let day_token = tokens[0].trim_end_matches(&['º', '°', 'o'][..]);
    let day: u32 = day_token
        .parse()
        .map_err(|_| DateParseError::Unrecognized(text.to_string()))?;

    let month = month_number(tokens[1])
        .ok_or_else(|| DateParseError::UnknownMonth(tokens[1].to_string()))?;

    let year: i32 = tokens[2]
        .parse()
        .map_err(|_| DateParseError::Unrecognized(text.to_string()))?;

    NaiveDate::from_ymd_opt(year, month, day)
        .ok_or_else(|| DateParseError::OutOfRange(text.to_string()))
}

/// Maps a lowercased Portuguese month name to its number
fn month_number(name: &str) -> Option<u32> {
    match name {
        "janeiro" => Some(1),
        "fevereiro" => Some(2),
        "março" | "marco" => Some(3),
        "abril" => Some(4),
        "maio" => Some(5),
        "junho" => Some(6),
        "julho" => Some(7),
        "agosto" => Some(8),
        "setembro" => Some(9),
        "outubro" => Some(10),
        "novembro" => Some(11),
        "dezembro" => Some(12),
        _ => None,
    }
}

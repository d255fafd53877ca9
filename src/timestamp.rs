//! Timestamp normalization for raw date/time captures.
//!
//! WhatsApp exports mix two timestamp conventions. The tokenizer hands this
//! module the raw captured strings; normalization either yields a canonical
//! `(date, time)` pair or rejects the candidate record outright.
//!
//! Dates are interpreted day-first (`D/M/Y`). Times are tried in a fixed
//! order: 12-hour with seconds, 12-hour without seconds (only when the raw
//! string carries an AM/PM letter), then 24-hour with and without seconds.
//! The first successful parse wins.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};

/// Day-first date formats, two-digit year tried before four-digit so that
/// `12/5/24` never parses as year 24.
const DATE_FORMATS: &[&str] = &["%d/%m/%y", "%d/%m/%Y"];

const TWELVE_HOUR_FORMATS: &[&str] = &["%I:%M:%S %p", "%I:%M %p"];
const TWENTY_FOUR_HOUR_FORMATS: &[&str] = &["%H:%M:%S", "%H:%M"];

/// Parses a raw date capture day-first.
///
/// Invalid calendar dates (day 32, month 13) yield `None`, which drops the
/// whole candidate record.
pub fn parse_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    DATE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(raw, fmt).ok())
}

/// Parses a raw time capture.
///
/// Narrow no-break spaces (U+202F, emitted by iOS before the AM/PM marker)
/// are replaced with regular spaces and the string is trimmed before any
/// format is tried. A marker written with dots (`p.m.`) is accepted.
pub fn parse_time(raw: &str) -> Option<NaiveTime> {
    let cleaned = raw.replace('\u{202f}', " ");
    let cleaned = cleaned.trim();

    if cleaned
        .chars()
        .any(|c| matches!(c, 'A' | 'P' | 'M' | 'a' | 'p' | 'm'))
    {
        let undotted = cleaned.replace('.', "");
        let undotted = undotted.trim();
        TWELVE_HOUR_FORMATS
            .iter()
            .find_map(|fmt| NaiveTime::parse_from_str(undotted, fmt).ok())
    } else {
        TWENTY_FOUR_HOUR_FORMATS
            .iter()
            .find_map(|fmt| NaiveTime::parse_from_str(cleaned, fmt).ok())
    }
}

/// Combines raw date and time captures into a canonical timestamp.
///
/// Returns `None` when either component is unparseable; the caller discards
/// the entire candidate record, never substituting a placeholder.
pub fn parse_timestamp(date_raw: &str, time_raw: &str) -> Option<NaiveDateTime> {
    let date = parse_date(date_raw)?;
    let time = parse_time(time_raw)?;
    Some(date.and_time(time))
}

//! Temporal activity aggregates: hour histograms, day/night split, modal
//! periods, and per-year/month/weekday averages.

use std::collections::{BTreeMap, HashMap};

use chrono::{Datelike, NaiveDate, Timelike};
use serde::Serialize;

use crate::message::Message;
use crate::stats::{Selector, selected};

/// Message counts split into daytime and nighttime.
///
/// Day covers hours 6–17, night the rest.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct DayNightSplit {
    pub day: u64,
    pub night: u64,
}

/// Message counts per hour of day, index 0–23.
pub fn hourly_histogram(selector: &Selector, records: &[Message]) -> [u64; 24] {
    let mut histogram = [0u64; 24];
    for msg in selected(selector, records) {
        histogram[msg.timestamp.hour() as usize] += 1;
    }
    histogram
}

/// Splits the selection into day (6 AM – 5:59 PM) and night messages.
pub fn day_night_split(selector: &Selector, records: &[Message]) -> DayNightSplit {
    let mut split = DayNightSplit::default();
    for msg in selected(selector, records) {
        if (6..18).contains(&msg.timestamp.hour()) {
            split.day += 1;
        } else {
            split.night += 1;
        }
    }
    split
}

/// 12-hour label for an hour of day: `0` is `"12 A.M"`, `13` is `"1 P.M"`.
pub fn format_hour(hour: u32) -> String {
    match hour {
        0 => "12 A.M".to_string(),
        h if h < 12 => format!("{h} A.M"),
        12 => "12 P.M".to_string(),
        h => format!("{} P.M", h - 12),
    }
}

/// The modal year, month name, and calendar day of the selection.
///
/// Ties resolve to the earliest period. Returns `None` for an empty
/// selection.
pub fn most_active_times(
    selector: &Selector,
    records: &[Message],
) -> Option<(i32, String, NaiveDate)> {
    let mut years: BTreeMap<i32, u64> = BTreeMap::new();
    let mut months: BTreeMap<u32, u64> = BTreeMap::new();
    let mut days: BTreeMap<NaiveDate, u64> = BTreeMap::new();

    for msg in selected(selector, records) {
        *years.entry(msg.year).or_insert(0) += 1;
        *months.entry(msg.timestamp.month()).or_insert(0) += 1;
        *days.entry(msg.timestamp.date()).or_insert(0) += 1;
    }

    let year = mode(&years)?;
    let month = mode(&months)?;
    let day = mode(&days)?;

    Some((year, month_name(month), day))
}

/// Message counts per calendar year, ascending.
pub fn messages_per_year(selector: &Selector, records: &[Message]) -> BTreeMap<i32, u64> {
    let mut counts = BTreeMap::new();
    for msg in selected(selector, records) {
        *counts.entry(msg.year).or_insert(0) += 1;
    }
    counts
}

/// Mean messages per calendar month, averaged over the `(year, month)`
/// groups in which that month occurs.
pub fn monthly_average(selector: &Selector, records: &[Message]) -> BTreeMap<u32, f64> {
    let mut group_counts: HashMap<(i32, u32), u64> = HashMap::new();
    for msg in selected(selector, records) {
        *group_counts
            .entry((msg.year, msg.timestamp.month()))
            .or_insert(0) += 1;
    }

    let mut sums: BTreeMap<u32, (u64, u64)> = BTreeMap::new();
    for (&(_, month), &count) in &group_counts {
        let entry = sums.entry(month).or_insert((0, 0));
        entry.0 += count;
        entry.1 += 1;
    }

    sums.into_iter()
        .map(|(month, (total, groups))| (month, total as f64 / groups as f64))
        .collect()
}

/// Mean messages per weekday (0 = Monday), averaged over the active
/// calendar days falling on that weekday.
pub fn weekday_average(selector: &Selector, records: &[Message]) -> BTreeMap<u32, f64> {
    let mut day_counts: HashMap<NaiveDate, u64> = HashMap::new();
    for msg in selected(selector, records) {
        *day_counts.entry(msg.timestamp.date()).or_insert(0) += 1;
    }

    let mut sums: BTreeMap<u32, (u64, u64)> = BTreeMap::new();
    for (date, count) in day_counts {
        let weekday = date.weekday().num_days_from_monday();
        let entry = sums.entry(weekday).or_insert((0, 0));
        entry.0 += count;
        entry.1 += 1;
    }

    sums.into_iter()
        .map(|(weekday, (total, days))| (weekday, total as f64 / days as f64))
        .collect()
}

/// Key with the highest count; ties resolve to the smallest key.
fn mode<K: Copy + Ord>(counts: &BTreeMap<K, u64>) -> Option<K> {
    let mut best: Option<(K, u64)> = None;
    for (&key, &count) in counts {
        if best.is_none_or(|(_, best_count)| count > best_count) {
            best = Some((key, count));
        }
    }
    best.map(|(key, _)| key)
}

fn month_name(month: u32) -> String {
    NaiveDate::from_ymd_opt(2024, month, 1)
        .map(|d| d.format("%B").to_string())
        .unwrap_or_default()
}

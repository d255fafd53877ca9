//! Inter-message response times.

use serde::Serialize;

use crate::message::Message;

/// Response-time aggregate for a record set.
///
/// Deltas are minutes between consecutive human messages after a
/// chronological sort; the undefined first delta is dropped. No upper bound
/// is applied; truncating outliers is a presentation concern.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResponseTimes {
    /// Mean delta in minutes, rounded to two decimals. 0.0 when no deltas exist.
    pub avg: f64,
    /// Median delta in minutes, rounded to two decimals. 0.0 when no deltas exist.
    pub median: f64,
    /// Every delta, in chronological order. Minutes may be fractional.
    pub deltas: Vec<f64>,
}

/// Computes response times over the whole record set.
///
/// Group notifications are excluded before sorting; the shared record set is
/// never reordered. Total over any input: zero or one human message yields
/// an empty delta sequence with zeroed aggregates.
pub fn response_times(records: &[Message]) -> ResponseTimes {
    let mut stamps: Vec<_> = records
        .iter()
        .filter(|msg| !msg.is_notification())
        .map(|msg| msg.timestamp)
        .collect();
    stamps.sort_unstable();

    let deltas: Vec<f64> = stamps
        .windows(2)
        .map(|pair| (pair[1] - pair[0]).num_seconds() as f64 / 60.0)
        .collect();

    if deltas.is_empty() {
        return ResponseTimes {
            avg: 0.0,
            median: 0.0,
            deltas,
        };
    }

    let avg = deltas.iter().sum::<f64>() / deltas.len() as f64;
    let median = median_of(&deltas);

    ResponseTimes {
        avg: round2(avg),
        median: round2(median),
        deltas,
    }
}

fn median_of(deltas: &[f64]) -> f64 {
    let mut sorted = deltas.to_vec();
    sorted.sort_unstable_by(f64::total_cmp);
    let mid = sorted.len() / 2;
    if sorted.len() % 2 == 0 {
        (sorted[mid - 1] + sorted[mid]) / 2.0
    } else {
        sorted[mid]
    }
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

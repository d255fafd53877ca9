//! Emoji usage statistics.
//!
//! Bodies are scanned character by character against the full emoji
//! registry, mirroring how the rest of the engine treats bodies as plain
//! text. Multi-codepoint sequences (skin tones, ZWJ families) therefore
//! count per component, which is the desired granularity for frequency
//! ranking.

use std::collections::HashMap;

use serde::Serialize;

use crate::message::Message;
use crate::stats::{Selector, selected};

/// Aggregate emoji usage for a selection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EmojiStats {
    /// Total emoji characters across all selected bodies.
    pub total: usize,
    /// The single most used emoji, if any emoji occurred at all.
    pub most_frequent: Option<String>,
    /// Occurrences of `most_frequent` (0 when no emoji occurred).
    pub most_frequent_count: usize,
}

/// Counts emoji usage across the selection.
///
/// Ties for the most frequent emoji resolve to whichever candidate was
/// encountered first in record order.
pub fn emojis_used(selector: &Selector, records: &[Message]) -> EmojiStats {
    let mut counts: HashMap<char, usize> = HashMap::new();
    let mut first_seen: Vec<char> = Vec::new();
    let mut total = 0usize;
    let mut buf = [0u8; 4];

    for msg in selected(selector, records) {
        for ch in msg.body.chars() {
            if emojis::get(ch.encode_utf8(&mut buf)).is_some() {
                total += 1;
                let count = counts.entry(ch).or_insert(0);
                if *count == 0 {
                    first_seen.push(ch);
                }
                *count += 1;
            }
        }
    }

    let mut best: Option<(char, usize)> = None;
    for ch in first_seen {
        let count = counts[&ch];
        if best.is_none_or(|(_, best_count)| count > best_count) {
            best = Some((ch, count));
        }
    }

    match best {
        Some((ch, count)) => EmojiStats {
            total,
            most_frequent: Some(ch.to_string()),
            most_frequent_count: count,
        },
        None => EmojiStats {
            total: 0,
            most_frequent: None,
            most_frequent_count: 0,
        },
    }
}

//! Per-participant counting metrics.

use std::collections::HashSet;
use std::sync::LazyLock;

use regex::Regex;

use crate::message::Message;
use crate::stats::{Selector, selected};

/// Placeholder WhatsApp substitutes for stripped media attachments.
pub const MEDIA_OMITTED: &str = "<Media omitted>";

static LINK_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"https?://\S+|www\.\S+").unwrap());

static WORD_PATTERN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\b\w+\b").unwrap());

/// Number of records in the selection.
pub fn messages_sent(selector: &Selector, records: &[Message]) -> usize {
    selected(selector, records).count()
}

/// Total whitespace-delimited tokens across selected bodies.
pub fn words_typed(selector: &Selector, records: &[Message]) -> usize {
    selected(selector, records).map(Message::word_count).sum()
}

/// Mean words per message, rounded to the nearest integer.
///
/// A selection with zero messages yields 0 rather than dividing by zero.
pub fn avg_msg_length(selector: &Selector, records: &[Message]) -> u64 {
    let messages = messages_sent(selector, records);
    if messages == 0 {
        return 0;
    }
    let words = words_typed(selector, records);
    (words as f64 / messages as f64).round() as u64
}

/// Word count of the longest single message in the selection.
pub fn longest_message(selector: &Selector, records: &[Message]) -> usize {
    selected(selector, records)
        .map(Message::word_count)
        .max()
        .unwrap_or(0)
}

/// Number of distinct lowercase word tokens across selected bodies.
pub fn unique_words_used(selector: &Selector, records: &[Message]) -> usize {
    let mut seen: HashSet<String> = HashSet::new();
    for msg in selected(selector, records) {
        let lowered = msg.body.to_lowercase();
        for token in WORD_PATTERN.find_iter(&lowered) {
            seen.insert(token.as_str().to_string());
        }
    }
    seen.len()
}

/// Number of selected messages carrying the exact [`MEDIA_OMITTED`] marker.
pub fn media_shared(selector: &Selector, records: &[Message]) -> usize {
    selected(selector, records)
        .filter(|msg| msg.body.contains(MEDIA_OMITTED))
        .count()
}

/// Number of selected messages containing an http(s) or `www.` link.
pub fn links_shared(selector: &Selector, records: &[Message]) -> usize {
    selected(selector, records)
        .filter(|msg| LINK_PATTERN.is_match(&msg.body))
        .count()
}

/// Per-category counts of omitted-attachment markers.
///
/// A body can count toward several categories at once; `total` is the plain
/// sum of the categories.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FileShareCounts {
    pub media: usize,
    pub document: usize,
    pub gif: usize,
    pub image: usize,
    pub video: usize,
    pub total: usize,
}

/// Counts omitted-attachment markers per category, case-insensitively.
pub fn files_shared(selector: &Selector, records: &[Message]) -> FileShareCounts {
    let mut counts = FileShareCounts::default();

    for msg in selected(selector, records) {
        let lowered = msg.body.to_lowercase();
        if lowered.contains("<media omitted>") {
            counts.media += 1;
        }
        if lowered.contains("<document omitted>") {
            counts.document += 1;
        }
        if lowered.contains("<gif omitted>") {
            counts.gif += 1;
        }
        if lowered.contains("<image omitted>") {
            counts.image += 1;
        }
        if lowered.contains("<video omitted>") {
            counts.video += 1;
        }
    }

    counts.total = counts.media + counts.document + counts.gif + counts.image + counts.video;
    counts
}

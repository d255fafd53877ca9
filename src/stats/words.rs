//! Word-frequency statistics.
//!
//! Bodies are lowercased and scrubbed of URLs, email addresses, phone
//! numbers, and non-alphabetic characters before counting. Common filler
//! words and export artifacts ("media", "omitted", "encrypted") come from
//! the [`STOP_WORDS`] table; a custom table can be injected for other
//! languages.

use std::collections::{HashMap, HashSet};
use std::sync::LazyLock;

use regex::Regex;

use crate::message::Message;
use crate::stats::{Selector, selected};

/// Filler words and export artifacts excluded from frequency ranking.
pub const STOP_WORDS: &[&str] = &[
    "the", "a", "an", "and", "or", "but", "in", "on", "at", "to", "for", "of", "with", "by", "i",
    "you", "he", "she", "it", "we", "they", "me", "him", "her", "us", "them", "my", "your", "his",
    "its", "our", "their", "mine", "yours", "hers", "ours", "theirs", "am", "is", "are", "was",
    "were", "be", "been", "being", "have", "has", "had", "do", "does", "did", "will", "would",
    "could", "should", "may", "might", "must", "can", "shall", "this", "that", "these", "those",
    "here", "there", "where", "when", "why", "how", "not", "no", "yes", "ok", "okay", "yeah",
    "yep", "nope", "uh", "um", "oh", "ah", "edited", "so", "now", "then", "well", "just",
    "really", "very", "too", "also", "only", "get", "got", "go", "going", "come", "coming",
    "know", "think", "see", "look", "like", "want", "need", "make", "take", "give", "put", "say",
    "tell", "ask", "one", "two", "three", "first", "last", "good", "bad", "big", "small", "new",
    "old", "right", "left", "up", "down", "back", "away", "out", "off", "over", "under", "media",
    "omitted", "message", "deleted", "text", "messages", "endtoend", "encrypted", "chat",
    "whatsapp", "whats", "app",
];

static URL_PATTERN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"https?://\S+").unwrap());
static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\S+@\S+").unwrap());
static PHONE_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\+?[\d\s().-]{10,15}").unwrap());

/// Word-frequency extractor with an injectable stop-word table.
pub struct TopWords {
    stop_words: HashSet<String>,
    min_length: usize,
}

impl TopWords {
    /// Creates an extractor with the default [`STOP_WORDS`] table and a
    /// minimum word length of 2.
    pub fn new() -> Self {
        Self::with_stop_words(STOP_WORDS.iter().map(|w| (*w).to_string()))
    }

    /// Creates an extractor with a custom stop-word table.
    pub fn with_stop_words(words: impl IntoIterator<Item = String>) -> Self {
        Self {
            stop_words: words.into_iter().collect(),
            min_length: 2,
        }
    }

    /// The `limit` most frequent words in the selection, most frequent
    /// first. Ties order alphabetically for determinism.
    pub fn top_words(
        &self,
        selector: &Selector,
        records: &[Message],
        limit: usize,
    ) -> Vec<(String, usize)> {
        let mut counts: HashMap<String, usize> = HashMap::new();

        for msg in selected(selector, records) {
            for word in clean_text(&msg.body).split_whitespace() {
                if word.len() >= self.min_length && !self.stop_words.contains(word) {
                    *counts.entry(word.to_string()).or_insert(0) += 1;
                }
            }
        }

        let mut ranked: Vec<(String, usize)> = counts.into_iter().collect();
        ranked.sort_unstable_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
        ranked.truncate(limit);
        ranked
    }
}

impl Default for TopWords {
    fn default() -> Self {
        Self::new()
    }
}

/// Lowercases and strips URLs, emails, phone numbers, and everything that is
/// not an ASCII letter, then collapses whitespace.
fn clean_text(text: &str) -> String {
    let lowered = text.to_lowercase();
    let no_urls = URL_PATTERN.replace_all(&lowered, " ");
    let no_emails = EMAIL_PATTERN.replace_all(&no_urls, " ");
    let no_phones = PHONE_PATTERN.replace_all(&no_emails, " ");

    let letters_only: String = no_phones
        .chars()
        .map(|c| if c.is_ascii_alphabetic() { c } else { ' ' })
        .collect();

    letters_only.split_whitespace().collect::<Vec<_>>().join(" ")
}

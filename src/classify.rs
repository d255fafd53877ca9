//! Author/body classification and system-notification detection.
//!
//! Classification runs in two stages. The first pass splits each matched
//! remainder into `(author, body)` on the first colon, falling back to the
//! [`GROUP_NOTIFICATION`] sentinel when no author prefix exists. The second
//! pass runs once over the finished record set and rewrites the author of
//! any record whose body matches a known system-event phrase. WhatsApp
//! sometimes attributes group events to a named member ("John removed
//! Alice"), and those must not count as John's messages.
//!
//! The phrase table is an immutable constant handed to the classifier at
//! construction, so alternative tables can be injected for testing.

use regex::Regex;

use crate::message::{GROUP_NOTIFICATION, Message};

/// Phrases WhatsApp emits for group and system events.
///
/// Matched case-insensitively as substrings against record bodies. The
/// entries are regex alternates, so the invite-link entry escapes its dots.
pub const SYSTEM_EVENT_PHRASES: &[&str] = &[
    "Messages and calls are end-to-end encrypted",
    "changed the subject",
    "added",
    "left",
    "removed",
    "changed this group's icon",
    "deleted this group's icon",
    "joined using this group's invite link",
    "deleted this message",
    "this message was deleted",
    "created group",
    "changed the group description",
    "video call",
    "Missed voice call",
    "Missed video call",
    "Please join this group",
    r"https://chat\.whatsapp\.com/",
    "You were added",
    "security code changed",
    "now an admin",
    "no longer an admin",
];

/// Authors whose colon-delimited messages are discarded entirely.
pub const NOISE_AUTHORS: &[&str] = &["Meta AI"];

/// Outcome of the first classification pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Classified {
    /// A colon-delimited human message.
    User {
        /// Trimmed text left of the first colon.
        author: String,
        /// Trimmed text right of the first colon.
        body: String,
    },
    /// No author prefix: a system/group notification.
    Notification {
        /// The trimmed remainder.
        body: String,
    },
    /// A noise author (assistant chatter); the record is dropped.
    Noise,
}

/// Two-stage message classifier.
pub struct Classifier {
    system_pattern: Regex,
    noise_authors: Vec<String>,
}

impl Classifier {
    /// Creates a classifier with the default phrase and noise tables.
    pub fn new() -> Self {
        Self::with_tables(SYSTEM_EVENT_PHRASES, NOISE_AUTHORS)
    }

    /// Creates a classifier with custom tables.
    ///
    /// `system_phrases` entries are joined into a single case-insensitive
    /// alternation; entries may use regex syntax.
    pub fn with_tables(system_phrases: &[&str], noise_authors: &[&str]) -> Self {
        // An empty alternation would match everywhere; use a pattern that
        // can never match instead.
        let pattern = if system_phrases.is_empty() {
            "a^".to_string()
        } else {
            format!("(?i){}", system_phrases.join("|"))
        };
        Self {
            system_pattern: Regex::new(&pattern).unwrap(),
            noise_authors: noise_authors.iter().map(|a| (*a).to_string()).collect(),
        }
    }

    /// First pass: splits a remainder into author and body.
    ///
    /// Splitting happens on the FIRST colon only, so bodies containing
    /// colons survive intact. Noise authors are matched case-insensitively
    /// and only when a colon-delimited author is present.
    pub fn classify(&self, remainder: &str) -> Classified {
        let remainder = remainder.trim();
        match remainder.split_once(':') {
            Some((author, body)) => {
                let author = author.trim();
                if self
                    .noise_authors
                    .iter()
                    .any(|noise| noise.eq_ignore_ascii_case(author))
                {
                    Classified::Noise
                } else {
                    Classified::User {
                        author: author.to_string(),
                        body: body.trim().to_string(),
                    }
                }
            }
            None => Classified::Notification {
                body: remainder.to_string(),
            },
        }
    }

    /// Second pass: rewrites the author of system-phrased records.
    ///
    /// Runs once over the full record set after assembly, so multi-line
    /// bodies are complete before matching. Authors are never touched again
    /// after this pass.
    pub fn reclassify_system_events(&self, records: &mut [Message]) {
        for record in records {
            if self.system_pattern.is_match(&record.body) {
                record.author = GROUP_NOTIFICATION.to_string();
            }
        }
    }
}

impl Default for Classifier {
    fn default() -> Self {
        Self::new()
    }
}

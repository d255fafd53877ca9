//! WhatsApp TXT export parser.
//!
//! One unified line-anchored pattern covers both timestamp conventions found
//! in the wild:
//!
//! - Android: `12/5/24, 9:05 PM - Alice: hello`
//! - iOS (bracketed): `[12/05/2024, 21:05:03] Alice: hello`
//!
//! Lines that do not open a new message are continuations: they fold into
//! the body of the most recent record. The pipeline is tokenize → normalize
//! timestamp → classify → assemble, with the system-phrase reclassification
//! pass running once over the finished record set.
//!
//! # Example
//!
//! ```rust
//! use chatlens::parser::ChatParser;
//!
//! let parser = ChatParser::new();
//! let records = parser.parse_str("12/5/24, 9:05 PM - Alice: hello");
//! assert_eq!(records.len(), 1);
//! assert_eq!(records[0].author, "Alice");
//! ```

use std::fs;
use std::path::Path;

use regex::Regex;

use crate::classify::{Classified, Classifier, SYSTEM_EVENT_PHRASES};
use crate::config::ParserConfig;
use crate::error::Result;
use crate::message::{GROUP_NOTIFICATION, Message};
use crate::timestamp;

/// Message-start pattern covering both conventions in one alternation:
/// optional opening bracket, day-first date, time with optional seconds and
/// optional (possibly dotted, NBSP-spaced) AM/PM marker, then a `-` or `]`
/// separator before the remainder.
const MESSAGE_START_PATTERN: &str =
    r"^\[?(\d{1,2}/\d{1,2}/\d{2,4}),\s*(\d{1,2}:\d{2}(?::\d{2})?\s*[APMapm.]*)\]?\s*[-\]]\s*(.+)";

/// Parser for WhatsApp TXT exports.
///
/// # Example
///
/// ```rust,no_run
/// use chatlens::parser::ChatParser;
///
/// let parser = ChatParser::new();
/// let records = parser.parse("whatsapp_chat.txt".as_ref())?;
/// # Ok::<(), chatlens::ChatlensError>(())
/// ```
pub struct ChatParser {
    config: ParserConfig,
    pattern: Regex,
    classifier: Classifier,
}

impl ChatParser {
    /// Creates a parser with default configuration.
    pub fn new() -> Self {
        Self::with_config(ParserConfig::default())
    }

    /// Creates a parser with custom configuration.
    pub fn with_config(config: ParserConfig) -> Self {
        let noise: Vec<&str> = if config.filter_noise_authors {
            config.noise_authors.iter().map(String::as_str).collect()
        } else {
            Vec::new()
        };
        let classifier = Classifier::with_tables(SYSTEM_EVENT_PHRASES, &noise);

        Self {
            config,
            pattern: Regex::new(MESSAGE_START_PATTERN).unwrap(),
            classifier,
        }
    }

    /// Returns the current configuration.
    pub fn config(&self) -> &ParserConfig {
        &self.config
    }

    /// Parses a chat export file.
    ///
    /// # Errors
    ///
    /// Only I/O problems surface as errors; malformed content never does.
    pub fn parse(&self, path: &Path) -> Result<Vec<Message>> {
        let content = fs::read_to_string(path)?;
        Ok(self.parse_str(&content))
    }

    /// Parses chat content from a string.
    ///
    /// Parsing never fails: unmatched text folds into the previous record,
    /// candidates with unparseable timestamps are dropped along with their
    /// continuation lines, and input with no match at all yields an empty
    /// record set. Records come back in source order.
    pub fn parse_str(&self, content: &str) -> Vec<Message> {
        let mut records: Vec<Message> = Vec::new();
        // Continuation lines extend the last record only when that candidate
        // survived; otherwise they are discarded with it.
        let mut last_kept = false;

        for line in content.lines() {
            if line.trim().is_empty() {
                continue;
            }

            if let Some(caps) = self.pattern.captures(line) {
                let date_raw = caps.get(1).map_or("", |m| m.as_str());
                let time_raw = caps.get(2).map_or("", |m| m.as_str());
                let remainder = caps.get(3).map_or("", |m| m.as_str());

                let Some(ts) = timestamp::parse_timestamp(date_raw, time_raw) else {
                    last_kept = false;
                    continue;
                };

                match self.classifier.classify(remainder) {
                    Classified::User { author, body } => {
                        records.push(Message::assemble(author, body, ts));
                        last_kept = true;
                    }
                    Classified::Notification { body } => {
                        records.push(Message::assemble(GROUP_NOTIFICATION, body, ts));
                        last_kept = true;
                    }
                    Classified::Noise => {
                        last_kept = false;
                    }
                }
            } else if last_kept {
                if let Some(last) = records.last_mut() {
                    last.body.push('\n');
                    last.body.push_str(line);
                }
            }
            // Orphan lines before the first match are skipped.
        }

        if self.config.reclassify_system_events {
            self.classifier.reclassify_system_events(&mut records);
        }

        records
    }
}

impl Default for ChatParser {
    fn default() -> Self {
        Self::new()
    }
}

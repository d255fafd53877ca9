//! # Chatlens
//!
//! A Rust library for parsing WhatsApp chat exports into typed, ordered
//! message records and computing chat analytics over them.
//!
//! ## Overview
//!
//! WhatsApp TXT exports are ambiguous, multi-format, and occasionally
//! malformed: two timestamp conventions ("iOS" bracketed and "Android"
//! unbracketed), 12- and 24-hour clocks, narrow no-break spaces before
//! AM/PM markers, multi-line message bodies, and system notifications
//! interleaved with human messages. Chatlens turns that text into a clean
//! chronology-preserving record set and derives metrics from it: counts,
//! streaks, response times, emoji and word frequencies, activity histograms.
//!
//! The parser is forgiving: unmatched lines fold into the preceding
//! message, unparseable timestamps drop their candidate record, and an
//! input with no matches at all yields an empty record set rather than an
//! error.
//!
//! ## Quick Start
//!
//! ```rust
//! use chatlens::prelude::*;
//!
//! let export = "\
//! 12/5/24, 9:05 PM - Alice: hello
//! 12/5/24, 9:07 PM - Bob: hey!
//! 12/5/24, 9:20 PM - Alice: up for dinner?";
//!
//! let parser = ChatParser::new();
//! let records = parser.parse_str(export);
//! assert_eq!(records.len(), 3);
//!
//! assert_eq!(extract_users(&records), vec!["Overall", "Alice", "Bob"]);
//! assert_eq!(messages_sent(&Selector::author("Alice"), &records), 2);
//!
//! let rt = response_times(&records);
//! assert_eq!(rt.deltas, vec![2.0, 13.0]);
//! ```
//!
//! ## Module Structure
//!
//! - [`parser`] — [`ChatParser`](parser::ChatParser), the tokenize →
//!   normalize → classify → assemble pipeline
//! - [`timestamp`] — day-first date and 12h/24h time normalization
//! - [`classify`] — author/body split, noise filter, system-phrase
//!   reclassification ([`Classifier`](classify::Classifier))
//! - [`config`] — [`ParserConfig`](config::ParserConfig)
//! - [`message`] — [`Message`] record type and the
//!   [`GROUP_NOTIFICATION`](message::GROUP_NOTIFICATION) sentinel
//! - [`stats`] — the derived-metrics engine
//! - [`export`] — CSV/JSON/JSONL record export (feature-gated)
//! - [`cli`] — CLI types (feature `cli`)
//! - [`error`] — [`ChatlensError`] and [`Result`]
//! - [`prelude`] — convenient re-exports

#[cfg(feature = "cli")]
pub mod cli;
pub mod classify;
pub mod config;
pub mod error;
#[cfg(any(feature = "csv-output", feature = "json-output"))]
pub mod export;
pub mod message;
pub mod parser;
pub mod stats;
pub mod timestamp;

// Re-export the main types at the crate root for convenience
pub use error::{ChatlensError, Result};
pub use message::Message;

/// Convenient re-exports for common usage.
///
/// Import everything you need with a single line:
///
/// ```rust
/// use chatlens::prelude::*;
/// ```
pub mod prelude {
    // Core record type
    pub use crate::message::{GROUP_NOTIFICATION, Message};

    // Error types
    pub use crate::error::{ChatlensError, Result};

    // Parser
    pub use crate::config::ParserConfig;
    pub use crate::parser::ChatParser;

    // Classification tables
    pub use crate::classify::{Classifier, NOISE_AUTHORS, SYSTEM_EVENT_PHRASES};

    // Metrics engine
    pub use crate::stats::{
        DayNightSplit, EmojiStats, FileShareCounts, ResponseTimes, Selector, TopWords,
        avg_msg_length, day_night_split, emojis_used, extract_users, files_shared,
        first_message_date, format_hour, group_created, hourly_histogram, last_message_date,
        links_shared, longest_active_streak, longest_inactive_streak, longest_message,
        media_shared, messages_per_year, messages_sent, monthly_average, most_active_times,
        participant_count, response_times, unique_words_used, weekday_average, words_typed,
    };

    // Export (feature-gated)
    #[cfg(feature = "csv-output")]
    pub use crate::export::{to_csv, write_csv};
    #[cfg(feature = "json-output")]
    pub use crate::export::{to_json, to_jsonl, write_json, write_jsonl};

    // CLI types
    #[cfg(feature = "cli")]
    pub use crate::cli::ExportFormat;
}

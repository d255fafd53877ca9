//! The normalized chat message record.
//!
//! This module provides [`Message`], the typed representation of one parsed
//! entry of a WhatsApp export. The parser produces records in source order;
//! the stats engine consumes them as an immutable slice.
//!
//! # Overview
//!
//! A record consists of:
//! - **Identity**: `author` (or the [`GROUP_NOTIFICATION`] sentinel) and `body`
//! - **Ordering**: `timestamp`, the sole ordering key, always valid
//! - **Derived calendar fields**: `year`, `month_name`, `day`, `hour`, `minute`,
//!   frozen at assembly time
//!
//! # Examples
//!
//! ```
//! use chatlens::Message;
//! use chrono::NaiveDate;
//!
//! let ts = NaiveDate::from_ymd_opt(2024, 5, 12)
//!     .unwrap()
//!     .and_hms_opt(21, 5, 0)
//!     .unwrap();
//! let msg = Message::assemble("Alice", "hello", ts);
//!
//! assert_eq!(msg.author, "Alice");
//! assert_eq!(msg.month_name, "May");
//! assert_eq!(msg.hour, "21");
//! assert!(!msg.is_notification());
//! ```

use chrono::{Datelike, NaiveDateTime, Timelike};
use serde::{Deserialize, Serialize};

/// Reserved author value marking system-generated entries (member changes,
/// encryption notices, group events) rather than human messages.
pub const GROUP_NOTIFICATION: &str = "group_notification";

/// One parsed entry of a chat export.
///
/// Records are produced by [`ChatParser`](crate::parser::ChatParser) in the
/// order they appear in the source text and are not mutated afterwards. The
/// calendar fields are derived from `timestamp` exactly once, by reformatting
/// the normalized value, never by re-parsing the raw export strings.
///
/// | Field | Type | Description |
/// |-------|------|-------------|
/// | `author` | `String` | Participant name, or [`GROUP_NOTIFICATION`] |
/// | `body` | `String` | Message text; multi-line bodies joined with `\n` |
/// | `timestamp` | `NaiveDateTime` | Wall-clock send time (exports carry no zone) |
/// | `year` | `i32` | Calendar year |
/// | `month_name` | `String` | English month name, `"January"`..`"December"` |
/// | `day` / `hour` / `minute` | `String` | Zero-padded two-digit components |
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    /// Participant name, or [`GROUP_NOTIFICATION`] for system entries.
    pub author: String,

    /// Text content after author-prefix stripping. May be empty.
    pub body: String,

    /// Send time. Always valid; candidates with unparseable timestamps
    /// never become records.
    pub timestamp: NaiveDateTime,

    /// Calendar year of `timestamp`.
    pub year: i32,

    /// English month name of `timestamp`.
    pub month_name: String,

    /// Zero-padded day of month, `"01"`..`"31"`.
    pub day: String,

    /// Zero-padded hour, `"00"`..`"23"`.
    pub hour: String,

    /// Zero-padded minute, `"00"`..`"59"`.
    pub minute: String,
}

impl Message {
    /// Builds a record from classified parts, freezing the derived calendar
    /// fields.
    pub fn assemble(
        author: impl Into<String>,
        body: impl Into<String>,
        timestamp: NaiveDateTime,
    ) -> Self {
        Self {
            author: author.into(),
            body: body.into(),
            timestamp,
            year: timestamp.year(),
            month_name: timestamp.format("%B").to_string(),
            day: format!("{:02}", timestamp.day()),
            hour: format!("{:02}", timestamp.hour()),
            minute: format!("{:02}", timestamp.minute()),
        }
    }

    /// Returns `true` if this record is a system-generated notification.
    pub fn is_notification(&self) -> bool {
        self.author == GROUP_NOTIFICATION
    }

    /// Number of whitespace-delimited tokens in the body.
    pub fn word_count(&self) -> usize {
        self.body.split_whitespace().count()
    }

    /// Returns `true` if the body is empty or whitespace-only.
    pub fn is_empty(&self) -> bool {
        self.body.trim().is_empty()
    }
}

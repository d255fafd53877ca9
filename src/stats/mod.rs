//! Derived-metrics engine.
//!
//! Every function here is a pure, read-only projection over a parsed record
//! set. Nothing mutates the records: metrics that need date-only views or
//! chronological order work on private copies, so computing one metric never
//! perturbs another.
//!
//! All functions are total over any record set the parser can produce,
//! including the empty one: counts come back as 0, streaks as 0, the most
//! frequent emoji as `None`.
//!
//! # Selecting a participant
//!
//! Metrics take a [`Selector`]: [`Selector::Overall`] means every record
//! except group notifications; [`Selector::Author`] narrows to one
//! participant. The UI convention of passing the literal string `"Overall"`
//! is supported through `From<&str>`:
//!
//! ```rust
//! use chatlens::stats::Selector;
//!
//! assert_eq!(Selector::from("Overall"), Selector::Overall);
//! assert_eq!(Selector::from("Alice"), Selector::Author("Alice".to_string()));
//! ```

pub mod activity;
pub mod counts;
pub mod emoji;
pub mod response;
pub mod streaks;
pub mod words;

use std::collections::BTreeSet;

use chrono::NaiveDateTime;

use crate::message::Message;

pub use activity::{
    DayNightSplit, day_night_split, format_hour, hourly_histogram, messages_per_year,
    monthly_average, most_active_times, weekday_average,
};
pub use counts::{
    FileShareCounts, MEDIA_OMITTED, avg_msg_length, files_shared, links_shared, longest_message,
    media_shared, messages_sent, unique_words_used, words_typed,
};
pub use emoji::{EmojiStats, emojis_used};
pub use response::{ResponseTimes, response_times};
pub use streaks::{
    first_message_date, last_message_date, longest_active_streak, longest_inactive_streak,
};
pub use words::{STOP_WORDS, TopWords};

/// The synthetic participant entry meaning "everyone except notifications".
pub const OVERALL: &str = "Overall";

/// Scope of a metric computation.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Selector {
    /// All records except group notifications.
    Overall,
    /// Records from one named participant.
    Author(String),
}

impl Selector {
    /// Creates an author selector.
    pub fn author(name: impl Into<String>) -> Self {
        Selector::Author(name.into())
    }

    /// Whether a record falls inside this selection.
    pub fn matches(&self, msg: &Message) -> bool {
        match self {
            Selector::Overall => !msg.is_notification(),
            Selector::Author(name) => msg.author == *name,
        }
    }
}

impl From<&str> for Selector {
    fn from(name: &str) -> Self {
        if name == OVERALL {
            Selector::Overall
        } else {
            Selector::Author(name.to_string())
        }
    }
}

/// Iterates the records inside a selection.
pub(crate) fn selected<'a>(
    selector: &'a Selector,
    records: &'a [Message],
) -> impl Iterator<Item = &'a Message> {
    records.iter().filter(move |msg| selector.matches(msg))
}

/// Distinct participants, alphabetically sorted, with the synthetic
/// [`OVERALL`] entry prepended. Group notifications are never listed.
pub fn extract_users(records: &[Message]) -> Vec<String> {
    let distinct: BTreeSet<&str> = records
        .iter()
        .filter(|msg| !msg.is_notification())
        .map(|msg| msg.author.as_str())
        .collect();

    let mut users = Vec::with_capacity(distinct.len() + 1);
    users.push(OVERALL.to_string());
    users.extend(distinct.into_iter().map(str::to_string));
    users
}

/// Number of human participants in the record set.
pub fn participant_count(records: &[Message]) -> usize {
    extract_users(records).len() - 1
}

/// When the group was created.
///
/// Looks for the first record whose body mentions `created group`; failing
/// that, falls back to the first record that is not the encryption notice
/// (direct chats have no creation event). Returns `None` for record sets
/// with neither.
pub fn group_created(records: &[Message]) -> Option<NaiveDateTime> {
    if let Some(msg) = records
        .iter()
        .find(|msg| contains_ignore_case(&msg.body, "created group"))
    {
        return Some(msg.timestamp);
    }

    records
        .iter()
        .find(|msg| {
            !contains_ignore_case(&msg.body, "messages and calls are end-to-end encrypted")
        })
        .map(|msg| msg.timestamp)
}

/// Case-insensitive substring test. `needle` must already be lowercase.
pub(crate) fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(needle)
}

//! Streaks over distinct active calendar days.
//!
//! Both streak functions reduce the selection to its set of distinct
//! calendar dates on a private copy; the shared record set keeps full
//! date+time precision and is never narrowed in place.

use std::collections::BTreeSet;

use chrono::{NaiveDate, NaiveDateTime};

use crate::message::Message;
use crate::stats::{Selector, selected};

/// Timestamp of the earliest record in the selection.
pub fn first_message_date(selector: &Selector, records: &[Message]) -> Option<NaiveDateTime> {
    selected(selector, records).map(|msg| msg.timestamp).min()
}

/// Timestamp of the latest record in the selection.
pub fn last_message_date(selector: &Selector, records: &[Message]) -> Option<NaiveDateTime> {
    selected(selector, records).map(|msg| msg.timestamp).max()
}

/// Longest run of consecutive calendar days with at least one message.
///
/// An empty selection yields 0; any non-empty selection yields at least 1.
pub fn longest_active_streak(selector: &Selector, records: &[Message]) -> u64 {
    let days = active_days(selector, records);
    if days.is_empty() {
        return 0;
    }

    let mut max_streak = 1u64;
    let mut streak = 1u64;
    for pair in days.windows(2) {
        if (pair[1] - pair[0]).num_days() == 1 {
            streak += 1;
            max_streak = max_streak.max(streak);
        } else {
            streak = 1;
        }
    }
    max_streak
}

/// Largest gap, in whole days, between two consecutive active days.
///
/// The gap is the day distance itself: active days Jan 3 and Jan 5 give a
/// gap of 2. Selections with fewer than two distinct days yield 0.
pub fn longest_inactive_streak(selector: &Selector, records: &[Message]) -> u64 {
    let days = active_days(selector, records);

    let mut max_gap = 0i64;
    for pair in days.windows(2) {
        let gap = (pair[1] - pair[0]).num_days();
        if gap > 1 {
            max_gap = max_gap.max(gap);
        }
    }
    max_gap as u64
}

/// Distinct calendar dates of the selection, ascending.
fn active_days(selector: &Selector, records: &[Message]) -> Vec<NaiveDate> {
    let distinct: BTreeSet<NaiveDate> = selected(selector, records)
        .map(|msg| msg.timestamp.date())
        .collect();
    distinct.into_iter().collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn msg_on(day: u32) -> Message {
        let ts = NaiveDate::from_ymd_opt(2024, 1, day)
            .unwrap()
            .and_hms_opt(12, 0, 0)
            .unwrap();
        Message::assemble("Alice", "hi", ts)
    }

    #[test]
    fn test_streaks_over_gap() {
        // Active days {Jan 1, Jan 2, Jan 3, Jan 5}
        let records = vec![msg_on(1), msg_on(2), msg_on(3), msg_on(5)];

        assert_eq!(longest_active_streak(&Selector::Overall, &records), 3);
        assert_eq!(longest_inactive_streak(&Selector::Overall, &records), 2);
    }

    #[test]
    fn test_single_day() {
        let records = vec![msg_on(1), msg_on(1)];
        assert_eq!(longest_active_streak(&Selector::Overall, &records), 1);
        assert_eq!(longest_inactive_streak(&Selector::Overall, &records), 0);
    }

    #[test]
    fn test_empty_selection() {
        assert_eq!(longest_active_streak(&Selector::Overall, &[]), 0);
        assert_eq!(longest_inactive_streak(&Selector::Overall, &[]), 0);
    }

    #[test]
    fn test_duplicate_days_collapse() {
        let records = vec![msg_on(1), msg_on(1), msg_on(2), msg_on(2), msg_on(2)];
        assert_eq!(longest_active_streak(&Selector::Overall, &records), 2);
    }

    #[test]
    fn test_unsorted_input_sorted_internally() {
        let records = vec![msg_on(5), msg_on(1), msg_on(3), msg_on(2)];
        assert_eq!(longest_active_streak(&Selector::Overall, &records), 3);
        assert_eq!(longest_inactive_streak(&Selector::Overall, &records), 2);
    }

    #[test]
    fn test_first_and_last_message_date() {
        let records = vec![msg_on(5), msg_on(1), msg_on(3)];
        assert_eq!(
            first_message_date(&Selector::Overall, &records),
            Some(records[1].timestamp)
        );
        assert_eq!(
            last_message_date(&Selector::Overall, &records),
            Some(records[0].timestamp)
        );
        assert_eq!(first_message_date(&Selector::Overall, &[]), None);
    }

    #[test]
    fn test_streaks_do_not_mutate_records() {
        let records = vec![msg_on(1), msg_on(2)];
        let before = records.clone();
        let _ = longest_active_streak(&Selector::Overall, &records);
        let _ = longest_inactive_streak(&Selector::Overall, &records);
        assert_eq!(records, before);
    }
}

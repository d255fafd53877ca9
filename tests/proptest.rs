//! Property-based tests for the parsing pipeline and metrics engine.

use chatlens::prelude::*;
use chrono::{Datelike, Duration, NaiveDate, NaiveDateTime, Timelike};
use proptest::prelude::*;

/// Renders a timestamp in the Android convention.
fn android_line(ts: NaiveDateTime, author: &str, body: &str) -> String {
    format!(
        "{}/{}/{}, {:02}:{:02} - {}: {}",
        ts.day(),
        ts.month(),
        ts.year() % 100,
        ts.hour(),
        ts.minute(),
        author,
        body
    )
}

/// Strictly increasing timestamps starting 1 Jan 2024.
fn increasing_timestamps(max_len: usize) -> impl Strategy<Value = Vec<NaiveDateTime>> {
    prop::collection::vec(1i64..=120, 1..max_len).prop_map(|increments| {
        let mut current = NaiveDate::from_ymd_opt(2024, 1, 1)
            .unwrap()
            .and_hms_opt(0, 0, 0)
            .unwrap();
        let mut stamps = Vec::with_capacity(increments.len());
        for minutes in increments {
            current += Duration::minutes(minutes);
            stamps.push(current);
        }
        stamps
    })
}

proptest! {
    #[test]
    fn round_trip_ordering(stamps in increasing_timestamps(50)) {
        let export: Vec<String> = stamps
            .iter()
            .enumerate()
            .map(|(i, ts)| android_line(*ts, &format!("U{}", i % 3), &format!("m{i}")))
            .collect();

        let parser = ChatParser::new();
        let records = parser.parse_str(&export.join("\n"));

        prop_assert_eq!(records.len(), stamps.len());
        for (record, ts) in records.iter().zip(&stamps) {
            prop_assert_eq!(record.timestamp, *ts);
            prop_assert_eq!(record.year, ts.year());
            prop_assert_eq!(&record.day, &format!("{:02}", ts.day()));
            prop_assert_eq!(&record.hour, &format!("{:02}", ts.hour()));
            prop_assert_eq!(&record.minute, &format!("{:02}", ts.minute()));
        }
    }

    #[test]
    fn arbitrary_text_never_panics(input in ".*") {
        let parser = ChatParser::new();
        let _ = parser.parse_str(&input);
    }

    #[test]
    fn arbitrary_multiline_text_never_panics(lines in prop::collection::vec(".*", 0..20)) {
        let parser = ChatParser::new();
        let _ = parser.parse_str(&lines.join("\n"));
    }

    #[test]
    fn parsing_is_deterministic(input in ".*") {
        let parser = ChatParser::new();
        prop_assert_eq!(parser.parse_str(&input), parser.parse_str(&input));
    }

    #[test]
    fn response_deltas_are_nonnegative_and_sized(stamps in increasing_timestamps(30)) {
        let export: Vec<String> = stamps
            .iter()
            .map(|ts| android_line(*ts, "Alice", "hi"))
            .collect();
        let records = ChatParser::new().parse_str(&export.join("\n"));

        let rt = response_times(&records);
        prop_assert_eq!(rt.deltas.len(), records.len().saturating_sub(1));
        prop_assert!(rt.deltas.iter().all(|d| *d >= 0.0));
        prop_assert!(rt.avg >= 0.0);
        prop_assert!(rt.median >= 0.0);
    }

    #[test]
    fn words_typed_matches_sum_of_word_counts(stamps in increasing_timestamps(20)) {
        let export: Vec<String> = stamps
            .iter()
            .enumerate()
            .map(|(i, ts)| android_line(*ts, "Alice", &"word ".repeat(i % 5 + 1)))
            .collect();
        let records = ChatParser::new().parse_str(&export.join("\n"));

        let total = words_typed(&Selector::Overall, &records);
        let manual: usize = records.iter().map(|m| m.word_count()).sum();
        prop_assert_eq!(total, manual);
    }

    #[test]
    fn histogram_sums_to_message_count(stamps in increasing_timestamps(40)) {
        let export: Vec<String> = stamps
            .iter()
            .map(|ts| android_line(*ts, "Alice", "hi"))
            .collect();
        let records = ChatParser::new().parse_str(&export.join("\n"));

        let histogram = hourly_histogram(&Selector::Overall, &records);
        prop_assert_eq!(
            histogram.iter().sum::<u64>() as usize,
            messages_sent(&Selector::Overall, &records)
        );
    }
}

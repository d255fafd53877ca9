//! Edge case tests for chatlens
//!
//! These tests cover boundary conditions of the parsing pipeline that the
//! regular unit and integration tests do not: hostile inputs, odd
//! whitespace, ambiguous colons, and the noise filter.

use chatlens::classify::Classifier;
use chatlens::config::ParserConfig;
use chatlens::message::GROUP_NOTIFICATION;
use chatlens::parser::ChatParser;
use chatlens::prelude::*;

// =========================================================================
// Malformed input never aborts the parse
// =========================================================================

#[test]
fn test_day_thirty_five_dropped_without_aborting() {
    let parser = ChatParser::new();
    let records = parser.parse_str(
        "35/1/24, 10:00 - Alice: impossible day\n\
         5/1/24, 10:01 - Bob: valid",
    );
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].author, "Bob");
}

#[test]
fn test_month_thirteen_dropped() {
    let parser = ChatParser::new();
    let records = parser.parse_str("5/13/24, 10:00 - Alice: thirteenth month");
    assert!(records.is_empty());
}

#[test]
fn test_invalid_time_dropped() {
    let parser = ChatParser::new();
    let records = parser.parse_str(
        "5/1/24, 25:00 - Alice: no such hour\n\
         5/1/24, 10:61 - Bob: no such minute\n\
         5/1/24, 10:30 - Carol: fine",
    );
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].author, "Carol");
}

#[test]
fn test_garbage_heavy_input() {
    let parser = ChatParser::new();
    let garbage = "����\u{0}\u{1}\nrandom noise\n\t\t\n12/5/24, 9:05 PM - Alice: survived\nmore trailing junk";
    let records = parser.parse_str(garbage);
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].body, "survived\nmore trailing junk");
}

#[test]
fn test_empty_and_whitespace_only_input() {
    let parser = ChatParser::new();
    assert!(parser.parse_str("").is_empty());
    assert!(parser.parse_str("   \n\t\n   ").is_empty());
}

// =========================================================================
// Colon handling
// =========================================================================

#[test]
fn test_body_with_many_colons() {
    let parser = ChatParser::new();
    let records = parser.parse_str("12/5/24, 9:05 PM - Alice: meet at 10:30: sharp");
    assert_eq!(records[0].author, "Alice");
    assert_eq!(records[0].body, "meet at 10:30: sharp");
}

#[test]
fn test_empty_body_after_colon() {
    let parser = ChatParser::new();
    let records = parser.parse_str("12/5/24, 9:05 PM - Alice:");
    // The remainder "Alice:" still matches; the body is empty
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].author, "Alice");
    assert_eq!(records[0].body, "");
}

// =========================================================================
// Whitespace and unicode
// =========================================================================

#[test]
fn test_narrow_no_break_space_before_marker() {
    let parser = ChatParser::new();
    let records = parser.parse_str("[12/05/2024, 9:05\u{202f}PM] Alice: nbsp time");
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].hour, "21");
}

#[test]
fn test_unicode_authors_and_bodies() {
    let parser = ChatParser::new();
    let records = parser.parse_str(
        "12/5/24, 9:05 PM - Мария: Привет мир\n\
         12/5/24, 9:06 PM - 田中太郎: こんにちは",
    );
    assert_eq!(records.len(), 2);
    assert_eq!(records[0].author, "Мария");
    assert_eq!(records[1].body, "こんにちは");
}

#[test]
fn test_author_with_emoji() {
    let parser = ChatParser::new();
    let records = parser.parse_str("12/5/24, 9:05 PM - Alice 🌸: hello");
    assert_eq!(records[0].author, "Alice 🌸");
}

// =========================================================================
// Noise filter
// =========================================================================

#[test]
fn test_meta_ai_produces_zero_records() {
    let parser = ChatParser::new();
    let records = parser.parse_str("5/1/24, 10:00 - Meta AI: suggested reply");
    assert!(records.is_empty());
}

#[test]
fn test_meta_ai_case_insensitive() {
    let parser = ChatParser::new();
    assert!(parser.parse_str("5/1/24, 10:00 - META AI: loud reply").is_empty());
    assert!(parser.parse_str("5/1/24, 10:00 - meta ai: quiet reply").is_empty());
}

#[test]
fn test_noise_filter_can_be_disabled() {
    let parser =
        ChatParser::with_config(ParserConfig::new().with_filter_noise_authors(false));
    let records = parser.parse_str("5/1/24, 10:00 - Meta AI: kept this time");
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].author, "Meta AI");
}

#[test]
fn test_author_mentioning_meta_ai_not_filtered() {
    let parser = ChatParser::new();
    let records = parser.parse_str("5/1/24, 10:00 - Alice: ask Meta AI about it");
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].author, "Alice");
}

// =========================================================================
// System reclassification
// =========================================================================

#[test]
fn test_attributed_system_event_reclassified() {
    let parser = ChatParser::new();
    let records = parser.parse_str("5/1/24, 10:00 - John: John removed Alice");
    assert_eq!(records[0].author, GROUP_NOTIFICATION);
}

#[test]
fn test_reclassification_covers_folded_continuations() {
    // The phrase arrives on a continuation line; the pass runs after folding
    let parser = ChatParser::new();
    let records = parser.parse_str(
        "5/1/24, 10:00 - John: something first\nsecurity code changed",
    );
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].author, GROUP_NOTIFICATION);
}

#[test]
fn test_ordinary_messages_not_reclassified() {
    let parser = ChatParser::new();
    let records = parser.parse_str("5/1/24, 10:00 - Alice: dinner tonight?");
    assert_eq!(records[0].author, "Alice");
}

#[test]
fn test_custom_classifier_tables() {
    let classifier = Classifier::with_tables(&["pinned a message"], &[]);
    let parser = ChatParser::new();
    let mut records = parser.parse_str("5/1/24, 10:00 - Alice: Alice pinned a message");
    // Default table does not know this phrase
    assert_eq!(records[0].author, "Alice");

    classifier.reclassify_system_events(&mut records);
    assert_eq!(records[0].author, GROUP_NOTIFICATION);
}

// =========================================================================
// Very long inputs
// =========================================================================

#[test]
fn test_long_multiline_body() {
    let mut export = String::from("12/5/24, 9:05 PM - Alice: start");
    for i in 0..1_000 {
        export.push_str(&format!("\ncontinuation line {i}"));
    }
    let parser = ChatParser::new();
    let records = parser.parse_str(&export);

    assert_eq!(records.len(), 1);
    assert_eq!(records[0].body.lines().count(), 1_001);
}

#[test]
fn test_many_records() {
    let mut export = String::new();
    for i in 0..5_000 {
        export.push_str(&format!("5/1/24, {:02}:{:02} - Alice: msg {}\n", i / 60 % 24, i % 60, i));
    }
    let parser = ChatParser::new();
    let records = parser.parse_str(&export);
    assert_eq!(records.len(), 5_000);
}

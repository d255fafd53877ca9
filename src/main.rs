//! # chatlens CLI
//!
//! Command-line interface for the chatlens library.

use std::path::Path;
use std::process;
use std::time::Instant;

use clap::Parser as ClapParser;

use chatlens::ChatlensError;
use chatlens::cli::{Args, ExportFormat};
use chatlens::parser::ChatParser;
use chatlens::stats::{
    self, Selector, TopWords, day_night_split, emojis_used, extract_users, first_message_date,
    format_hour, group_created, hourly_histogram, last_message_date, longest_active_streak,
    longest_inactive_streak, response_times,
};

#[cfg(any(feature = "csv-output", feature = "json-output"))]
use chatlens::export;

fn main() {
    if let Err(e) = run() {
        eprintln!("❌ Error: {}", e);
        process::exit(1);
    }
}

fn run() -> Result<(), ChatlensError> {
    let args = <Args as ClapParser>::parse();

    println!("🔎 chatlens v{}", env!("CARGO_PKG_VERSION"));
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    println!("📂 Input:       {}", args.input);
    println!("👤 Participant: {}", args.user);
    println!();

    println!("⏳ Parsing export...");
    let parse_start = Instant::now();
    let parser = ChatParser::new();
    let records = parser.parse(Path::new(&args.input))?;
    println!(
        "   Found {} records ({:.2}s)",
        records.len(),
        parse_start.elapsed().as_secs_f64()
    );
    println!();

    let users = extract_users(&records);
    if !users.iter().any(|u| u == &args.user) {
        return Err(ChatlensError::unknown_author(&args.user));
    }
    let selector = Selector::from(args.user.as_str());

    if selector == Selector::Overall {
        println!("📅 Group created: {}", format_date(group_created(&records)));
        println!("👥 Participants:  {}", stats::participant_count(&records));
        println!();
    }

    print_counts(&selector, &records);
    print_emoji(&selector, &records);
    print_activity(&selector, &records);

    let rt = response_times(&records);
    println!("⏱️  Response times:");
    println!("   Average:  {:.2} min", rt.avg);
    println!("   Median:   {:.2} min", rt.median);
    println!();

    if args.hours {
        print_hourly_histogram(&selector, &records);
    }

    print_top_words(&selector, &records, args.top_words);

    if let Some(ref path) = args.export {
        export_records(&records, path, args.format)?;
        println!("💾 Records exported to {}", path);
    }

    Ok(())
}

fn print_counts(selector: &Selector, records: &[chatlens::Message]) {
    println!("💬 Messages:");
    println!("   Sent:         {}", stats::messages_sent(selector, records));
    println!("   Words typed:  {}", stats::words_typed(selector, records));
    println!("   Media shared: {}", stats::media_shared(selector, records));
    println!("   Links shared: {}", stats::links_shared(selector, records));
    println!(
        "   Average length: {} words (longest: {})",
        stats::avg_msg_length(selector, records),
        stats::longest_message(selector, records)
    );
    println!(
        "   Unique words:   {}",
        stats::unique_words_used(selector, records)
    );
    println!();
}

fn print_emoji(selector: &Selector, records: &[chatlens::Message]) {
    let emoji_stats = emojis_used(selector, records);
    println!("😀 Emojis:");
    println!("   Total used: {}", emoji_stats.total);
    match emoji_stats.most_frequent {
        Some(ref emoji) => println!(
            "   Most used:  {} ({} times)",
            emoji, emoji_stats.most_frequent_count
        ),
        None => println!("   Most used:  none"),
    }
    println!();
}

fn print_activity(selector: &Selector, records: &[chatlens::Message]) {
    println!("🗓️  Activity:");
    println!(
        "   First message: {}",
        format_date(first_message_date(selector, records))
    );
    println!(
        "   Last message:  {}",
        format_date(last_message_date(selector, records))
    );
    println!(
        "   Longest active streak:   {} days",
        longest_active_streak(selector, records)
    );
    println!(
        "   Longest inactive streak: {} days",
        longest_inactive_streak(selector, records)
    );

    let split = day_night_split(selector, records);
    println!("   Day / night: {} / {}", split.day, split.night);
    println!();
}

fn print_hourly_histogram(selector: &Selector, records: &[chatlens::Message]) {
    let histogram = hourly_histogram(selector, records);
    let max = histogram.iter().copied().max().unwrap_or(0);

    println!("🕑 Hourly activity:");
    for (hour, &count) in histogram.iter().enumerate() {
        let width = if max == 0 {
            0
        } else {
            (count as f64 / max as f64 * 40.0).round() as usize
        };
        println!(
            "   {:>7} | {:<40} {}",
            format_hour(hour as u32),
            "#".repeat(width),
            count
        );
    }
    println!();
}

fn print_top_words(selector: &Selector, records: &[chatlens::Message], limit: usize) {
    if limit == 0 {
        return;
    }
    let top = TopWords::new().top_words(selector, records, limit);
    if top.is_empty() {
        return;
    }

    println!("🔤 Top words:");
    for (rank, (word, count)) in top.iter().enumerate() {
        println!("   {:>2}. {:<20} {}", rank + 1, word, count);
    }
    println!();
}

fn format_date(date: Option<chrono::NaiveDateTime>) -> String {
    date.map_or_else(
        || "not available".to_string(),
        |d| d.format("%d %B %Y").to_string(),
    )
}

fn export_records(
    records: &[chatlens::Message],
    path: &str,
    format: ExportFormat,
) -> Result<(), ChatlensError> {
    match format {
        #[cfg(feature = "csv-output")]
        ExportFormat::Csv => export::write_csv(records, Path::new(path)),
        #[cfg(feature = "json-output")]
        ExportFormat::Json => export::write_json(records, Path::new(path)),
        #[cfg(feature = "json-output")]
        ExportFormat::Jsonl => export::write_jsonl(records, Path::new(path)),
        // Fallback for when output features are disabled
        #[allow(unreachable_patterns)]
        _ => panic!(
            "Export format {} is not enabled. Enable the corresponding feature.",
            format
        ),
    }
}

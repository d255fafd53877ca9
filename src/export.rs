//! Record-set export writers.
//!
//! The parsed record set can be exported for downstream tooling in three
//! formats, each behind its cargo feature:
//!
//! - CSV with a semicolon delimiter (`csv-output`)
//! - JSON array (`json-output`)
//! - JSON Lines, one record per line (`json-output`)
//!
//! Each format has a `to_*` string converter and a `write_*` file writer.

#[cfg(feature = "csv-output")]
use std::fs::File;
#[cfg(feature = "json-output")]
use std::fs;
#[cfg(any(feature = "csv-output", feature = "json-output"))]
use std::path::Path;

use crate::error::Result;
use crate::message::Message;

/// Timestamp layout used in CSV output.
#[cfg(feature = "csv-output")]
const CSV_TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Converts records to CSV with a semicolon delimiter.
///
/// # Format
/// - Delimiter: `;`
/// - Columns: `Author`, `Timestamp`, `Body`
/// - Encoding: UTF-8
#[cfg(feature = "csv-output")]
pub fn to_csv(records: &[Message]) -> Result<String> {
    let mut writer = csv::WriterBuilder::new()
        .delimiter(b';')
        .from_writer(Vec::new());

    writer.write_record(["Author", "Timestamp", "Body"])?;
    for msg in records {
        writer.write_record([
            msg.author.as_str(),
            &msg.timestamp.format(CSV_TIMESTAMP_FORMAT).to_string(),
            msg.body.as_str(),
        ])?;
    }

    let bytes = writer.into_inner().map_err(|e| e.into_error())?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

/// Writes records to a CSV file.
#[cfg(feature = "csv-output")]
pub fn write_csv(records: &[Message], path: &Path) -> Result<()> {
    let file = File::create(path)?;
    let mut writer = csv::WriterBuilder::new().delimiter(b';').from_writer(file);

    writer.write_record(["Author", "Timestamp", "Body"])?;
    for msg in records {
        writer.write_record([
            msg.author.as_str(),
            &msg.timestamp.format(CSV_TIMESTAMP_FORMAT).to_string(),
            msg.body.as_str(),
        ])?;
    }

    writer.flush()?;
    Ok(())
}

/// Converts records to a pretty-printed JSON array.
#[cfg(feature = "json-output")]
pub fn to_json(records: &[Message]) -> Result<String> {
    Ok(serde_json::to_string_pretty(records)?)
}

/// Writes records to a JSON file.
#[cfg(feature = "json-output")]
pub fn write_json(records: &[Message], path: &Path) -> Result<()> {
    fs::write(path, to_json(records)?)?;
    Ok(())
}

/// Converts records to JSON Lines, one object per line.
#[cfg(feature = "json-output")]
pub fn to_jsonl(records: &[Message]) -> Result<String> {
    let mut out = String::new();
    for msg in records {
        out.push_str(&serde_json::to_string(msg)?);
        out.push('\n');
    }
    Ok(out)
}

/// Writes records to a JSON Lines file.
#[cfg(feature = "json-output")]
pub fn write_jsonl(records: &[Message], path: &Path) -> Result<()> {
    fs::write(path, to_jsonl(records)?)?;
    Ok(())
}

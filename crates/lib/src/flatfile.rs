//! Line-oriented flat-file helpers shared by every store.
//!
//! The on-disk protocol is one record per line, fields separated by `|`,
//! no escaping. Field values therefore must not contain the delimiter or a
//! newline; the record layer keeps that promise when serializing. Fields
//! are trimmed individually on the way in, blank lines are ignored, and a
//! missing file means an empty store (the file is created on first read so
//! a later save never has to care).

use std::{fs, io, path::Path};

use chrono::NaiveDate;

/// Field separator for every record file.
pub const FIELD_DELIMITER: char = '|';

/// Date layout used in record files, e.g. `31/12/2026`.
pub const DATE_FORMAT: &str = "%d/%m/%Y";

/// Split a record line into trimmed fields.
pub fn split_fields(line: &str) -> Vec<&str> {
    line.split(FIELD_DELIMITER).map(str::trim).collect()
}

/// Join serialized fields back into a record line.
pub fn join_fields(fields: &[String]) -> String {
    let mut line = String::new();
    for (i, field) in fields.iter().enumerate() {
        if i > 0 {
            line.push(FIELD_DELIMITER);
        }
        line.push_str(field);
    }
    line
}

/// Read all non-blank lines from `path`.
///
/// A missing file is not an error: it is created empty and an empty list
/// is returned, so a brand-new data directory behaves like an empty store.
pub fn read_lines(path: impl AsRef<Path>) -> io::Result<Vec<String>> {
    let path = path.as_ref();
    match fs::read_to_string(path) {
        Ok(text) => Ok(text
            .lines()
            .filter(|line| !line.trim().is_empty())
            .map(str::to_string)
            .collect()),
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            tracing::debug!(path = %path.display(), "data file missing, starting empty");
            fs::File::create(path)?;
            Ok(Vec::new())
        }
        Err(e) => Err(e),
    }
}

/// Overwrite `path` with the given lines, one per record.
pub fn write_lines<I>(path: impl AsRef<Path>, lines: I) -> io::Result<()>
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    let mut contents = String::new();
    for line in lines {
        contents.push_str(line.as_ref());
        contents.push('\n');
    }
    fs::write(path, contents)
}

/// Parse a `DD/MM/YYYY` date field. `None` when the text does not conform.
pub fn parse_date(text: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(text.trim(), DATE_FORMAT).ok()
}

/// Render a date the way record files store it.
pub fn format_date(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn split_trims_each_field() {
        assert_eq!(
            split_fields("STANDARD | K101 |AVAILABLE"),
            vec!["STANDARD", "K101", "AVAILABLE"]
        );
    }

    #[test]
    fn split_keeps_empty_fields() {
        assert_eq!(split_fields("a| |b||"), vec!["a", "", "b", "", ""]);
    }

    #[test]
    fn join_uses_the_delimiter() {
        let fields = vec!["A".to_string(), "B".to_string(), "C".to_string()];
        assert_eq!(join_fields(&fields), "A|B|C");
        assert_eq!(join_fields(&[]), "");
    }

    #[test]
    fn read_missing_file_creates_it_and_returns_empty() {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let path = dir.path().join("records.txt");

        let lines = read_lines(&path).expect("Failed to read missing file");
        assert!(lines.is_empty());
        assert!(path.exists());
    }

    #[test]
    fn read_skips_blank_lines() {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let path = dir.path().join("records.txt");
        std::fs::write(&path, "one\n\n   \ntwo\n").expect("Failed to seed file");

        let lines = read_lines(&path).expect("Failed to read file");
        assert_eq!(lines, vec!["one".to_string(), "two".to_string()]);
    }

    #[test]
    fn write_overwrites_previous_contents() {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let path = dir.path().join("records.txt");

        write_lines(&path, ["first", "second"]).expect("Failed to write");
        write_lines(&path, ["only"]).expect("Failed to overwrite");

        let lines = read_lines(&path).expect("Failed to read back");
        assert_eq!(lines, vec!["only".to_string()]);
    }

    #[test]
    fn date_round_trip() {
        let date = parse_date("07/03/2026").expect("Failed to parse date");
        assert_eq!(format_date(date), "07/03/2026");
    }

    #[test]
    fn bad_dates_are_rejected() {
        assert!(parse_date("2026-03-07").is_none());
        assert!(parse_date("31/02/2026").is_none());
        assert!(parse_date("soon").is_none());
    }
}

//! README freshness marker.
//!
//! A run can rewrite a README's `Last updated:` line so the published page
//! reflects when the schedule was last refreshed. Every line starting with
//! the marker is replaced with the new timestamp; a README without one gets
//! the marker appended. All other content is preserved byte for byte.

use std::fs;
use std::path::Path;

use chrono::{DateTime, Datelike, FixedOffset};
use tracing::info;

use crate::error::{CliError, CliResult};

const MARKER: &str = "Last updated:";

/// Refreshes the marker line in the README at `path`.
pub fn update_readme(path: &Path, now: &DateTime<FixedOffset>) -> CliResult<()> {
    let contents = fs::read_to_string(path).map_err(|source| CliError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    let updated = apply_marker(&contents, now);
    fs::write(path, updated).map_err(|source| CliError::Write {
        path: path.to_path_buf(),
        source,
    })?;

    info!(path = %path.display(), "refreshed README timestamp");
    Ok(())
}

/// Formats the marker line, e.g. `Last updated: 21st Sep 2024 20:00:00 +05:30`.
pub fn marker_line(now: &DateTime<FixedOffset>) -> String {
    format!(
        "{MARKER} {}{} {}",
        now.day(),
        ordinal_suffix(now.day()),
        now.format("%b %Y %H:%M:%S %:z")
    )
}

/// Replaces marker lines in `contents`, appending one if none exists.
fn apply_marker(contents: &str, now: &DateTime<FixedOffset>) -> String {
    let line = marker_line(now);
    let mut replaced = false;

    let mut lines: Vec<String> = contents
        .lines()
        .map(|l| {
            if l.trim_start().starts_with(MARKER) {
                replaced = true;
                line.clone()
            } else {
                l.to_string()
            }
        })
        .collect();

    if !replaced {
        if lines.last().is_some_and(|l| !l.is_empty()) {
            lines.push(String::new());
        }
        lines.push(line);
    }

    let mut out = lines.join("\n");
    out.push('\n');
    out
}

/// English ordinal suffix for a day of month (11th, not 11st).
fn ordinal_suffix(day: u32) -> &'static str {
    match day % 100 {
        11 | 12 | 13 => "th",
        _ => match day % 10 {
            1 => "st",
            2 => "nd",
            3 => "rd",
            _ => "th",
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use nextcontest_core::reference_offset;

    fn at(day: u32) -> DateTime<FixedOffset> {
        reference_offset()
            .with_ymd_and_hms(2024, 9, day, 20, 0, 0)
            .unwrap()
    }

    #[test]
    fn ordinal_suffixes() {
        assert_eq!(ordinal_suffix(1), "st");
        assert_eq!(ordinal_suffix(2), "nd");
        assert_eq!(ordinal_suffix(3), "rd");
        assert_eq!(ordinal_suffix(4), "th");
        assert_eq!(ordinal_suffix(11), "th");
        assert_eq!(ordinal_suffix(12), "th");
        assert_eq!(ordinal_suffix(13), "th");
        assert_eq!(ordinal_suffix(21), "st");
        assert_eq!(ordinal_suffix(22), "nd");
        assert_eq!(ordinal_suffix(23), "rd");
        assert_eq!(ordinal_suffix(30), "th");
    }

    #[test]
    fn marker_line_format() {
        assert_eq!(
            marker_line(&at(21)),
            "Last updated: 21st Sep 2024 20:00:00 +05:30"
        );
        assert_eq!(
            marker_line(&at(3)),
            "Last updated: 3rd Sep 2024 20:00:00 +05:30"
        );
    }

    #[test]
    fn existing_marker_is_rewritten_in_place() {
        let before = "# Contests\n\nLast updated: 1st Jan 2020 00:00:00 +05:30\n\nSome table here.\n";
        let after = apply_marker(before, &at(21));

        assert_eq!(
            after,
            "# Contests\n\nLast updated: 21st Sep 2024 20:00:00 +05:30\n\nSome table here.\n"
        );
    }

    #[test]
    fn marker_is_appended_when_absent() {
        let before = "# Contests\n\nSome table here.\n";
        let after = apply_marker(before, &at(21));

        assert!(after.ends_with("Some table here.\n\nLast updated: 21st Sep 2024 20:00:00 +05:30\n"));
    }

    #[test]
    fn empty_file_gets_just_the_marker() {
        let after = apply_marker("", &at(21));
        assert_eq!(after, "Last updated: 21st Sep 2024 20:00:00 +05:30\n");
    }

    #[test]
    fn rewriting_twice_is_idempotent() {
        let once = apply_marker("# Contests\n", &at(21));
        let twice = apply_marker(&once, &at(21));
        assert_eq!(once, twice);
    }

    #[test]
    fn round_trip_through_the_filesystem() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("README.md");
        fs::write(&path, "# Contests\n\nLast updated: never\n").unwrap();

        update_readme(&path, &at(21)).unwrap();

        let contents = fs::read_to_string(&path).unwrap();
        assert_eq!(
            contents,
            "# Contests\n\nLast updated: 21st Sep 2024 20:00:00 +05:30\n"
        );
    }

    #[test]
    fn missing_readme_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = update_readme(&dir.path().join("README.md"), &at(21)).unwrap_err();
        assert!(matches!(err, CliError::Read { .. }));
    }
}

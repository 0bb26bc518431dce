//! Schedule artifact writing.
//!
//! The aggregated schedule is written twice into the output directory: a
//! compact serialization to `contests` and an indented one to
//! `contests.json`. Both files carry the same records in the same order;
//! only the formatting differs. An empty run still writes both files (as
//! empty arrays) so consumers can tell "nothing upcoming" from "never ran".

use std::fs;
use std::path::Path;

use tracing::info;

use nextcontest_core::ContestRecord;

use crate::error::{CliError, CliResult};

/// Compact artifact file name.
pub const COMPACT_FILE: &str = "contests";

/// Indented artifact file name.
pub const PRETTY_FILE: &str = "contests.json";

/// Writes both schedule artifacts into `out_dir`.
pub fn write_schedule(out_dir: &Path, records: &[ContestRecord]) -> CliResult<()> {
    let compact = serde_json::to_string(records)?;
    let pretty = serde_json::to_string_pretty(records)?;

    let compact_path = out_dir.join(COMPACT_FILE);
    fs::write(&compact_path, compact).map_err(|source| CliError::Write {
        path: compact_path.clone(),
        source,
    })?;

    let pretty_path = out_dir.join(PRETTY_FILE);
    fs::write(&pretty_path, pretty).map_err(|source| CliError::Write {
        path: pretty_path.clone(),
        source,
    })?;

    info!(
        count = records.len(),
        dir = %out_dir.display(),
        "wrote schedule artifacts"
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use nextcontest_core::{Platform, reference_offset};

    fn sample_records() -> Vec<ContestRecord> {
        let start = reference_offset()
            .with_ymd_and_hms(2024, 9, 21, 20, 0, 0)
            .unwrap();
        vec![
            ContestRecord::from_duration(
                Platform::Codeforces,
                "Codeforces Round 900",
                "https://codeforces.com/contests/1900",
                start,
                7200,
            ),
            ContestRecord::from_duration(
                Platform::AtCoder,
                "AtCoder Beginner Contest 372",
                "https://atcoder.jp/contests/abc372",
                start,
                6000,
            ),
        ]
    }

    #[test]
    fn writes_both_artifacts() {
        let dir = tempfile::tempdir().unwrap();
        write_schedule(dir.path(), &sample_records()).unwrap();

        assert!(dir.path().join(COMPACT_FILE).exists());
        assert!(dir.path().join(PRETTY_FILE).exists());
    }

    #[test]
    fn artifacts_carry_identical_records() {
        let dir = tempfile::tempdir().unwrap();
        write_schedule(dir.path(), &sample_records()).unwrap();

        let compact = fs::read_to_string(dir.path().join(COMPACT_FILE)).unwrap();
        let pretty = fs::read_to_string(dir.path().join(PRETTY_FILE)).unwrap();

        let a: serde_json::Value = serde_json::from_str(&compact).unwrap();
        let b: serde_json::Value = serde_json::from_str(&pretty).unwrap();
        assert_eq!(a, b);

        let titles: Vec<&str> = a
            .as_array()
            .unwrap()
            .iter()
            .map(|v| v["title"].as_str().unwrap())
            .collect();
        assert_eq!(
            titles,
            ["Codeforces Round 900", "AtCoder Beginner Contest 372"]
        );
    }

    #[test]
    fn only_formatting_differs() {
        let dir = tempfile::tempdir().unwrap();
        write_schedule(dir.path(), &sample_records()).unwrap();

        let compact = fs::read_to_string(dir.path().join(COMPACT_FILE)).unwrap();
        let pretty = fs::read_to_string(dir.path().join(PRETTY_FILE)).unwrap();

        assert!(!compact.contains('\n'));
        assert!(pretty.contains("\n  "));
    }

    #[test]
    fn empty_run_writes_empty_arrays() {
        let dir = tempfile::tempdir().unwrap();
        write_schedule(dir.path(), &[]).unwrap();

        let compact = fs::read_to_string(dir.path().join(COMPACT_FILE)).unwrap();
        assert_eq!(compact, "[]");
    }

    #[test]
    fn missing_directory_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("does-not-exist");

        let err = write_schedule(&missing, &[]).unwrap_err();
        assert!(matches!(err, CliError::Write { .. }));
    }
}

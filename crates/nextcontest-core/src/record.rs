//! The normalized contest record.
//!
//! [`ContestRecord`] is the single schema every platform adapter must
//! produce, whatever transport or time representation the platform exposes.
//! Records are created inside an adapter from one parsed item of that
//! platform's response and are immutable afterwards.

use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::platform::Platform;
use crate::time::duration_seconds;

/// One upcoming or ongoing contest, normalized across platforms.
///
/// Serialized shape (the persisted artifact):
/// `{ id, platform, title, url, start_time, duration }` with `start_time`
/// in RFC3339 carrying its offset and `duration` in whole seconds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContestRecord {
    /// Process-unique opaque identifier, assigned once at creation.
    pub id: String,
    /// The platform this contest belongs to.
    pub platform: Platform,
    /// Display name, whitespace-collapsed.
    pub title: String,
    /// Absolute contest URL.
    pub url: String,
    /// When the contest starts, with timezone offset.
    pub start_time: DateTime<FixedOffset>,
    /// Contest length in whole seconds.
    #[serde(rename = "duration")]
    pub duration_seconds: u64,
}

impl ContestRecord {
    /// Creates a record from a (start, end) pair taken from one platform
    /// response.
    ///
    /// The duration is `end - start` in whole seconds, clamped at zero.
    pub fn from_bounds(
        platform: Platform,
        title: impl AsRef<str>,
        url: impl Into<String>,
        start: DateTime<FixedOffset>,
        end: DateTime<FixedOffset>,
    ) -> Self {
        let duration = duration_seconds(&start, &end);
        Self::from_duration(platform, title, url, start, duration)
    }

    /// Creates a record from a start time and a platform-reported duration.
    ///
    /// Used where the platform displays the length directly instead of an
    /// end timestamp.
    pub fn from_duration(
        platform: Platform,
        title: impl AsRef<str>,
        url: impl Into<String>,
        start: DateTime<FixedOffset>,
        duration_seconds: u64,
    ) -> Self {
        Self {
            id: generate_id(),
            platform,
            title: collapse_whitespace(title.as_ref()),
            url: url.into(),
            start_time: start,
            duration_seconds,
        }
    }

    /// When the contest ends.
    ///
    /// `None` if the duration pushes the end past the representable time
    /// range; callers treat such a record as malformed data.
    pub fn end_time(&self) -> Option<DateTime<FixedOffset>> {
        let seconds = i64::try_from(self.duration_seconds).ok()?;
        let duration = chrono::Duration::try_seconds(seconds)?;
        self.start_time.checked_add_signed(duration)
    }
}

/// Generates a fresh opaque record id (32-char lowercase hex).
fn generate_id() -> String {
    Uuid::new_v4().simple().to_string()
}

/// Collapses runs of whitespace to single spaces and trims the ends.
///
/// This is the only transformation applied to titles.
pub fn collapse_whitespace(s: &str) -> String {
    s.split_whitespace().collect::<Vec<_>>().join(" ")
}

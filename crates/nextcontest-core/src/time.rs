//! Reference-timezone helpers.
//!
//! Every platform reports contest times differently: ISO8601 strings with an
//! embedded offset, bare epoch seconds, or offset-less wall-clock strings.
//! All absolute timestamps are reconciled against a single fixed reference
//! timezone so that "is this contest still ongoing?" comparisons are
//! consistent across sources.

use chrono::{DateTime, FixedOffset, NaiveDateTime, TimeZone, Utc};

/// Seconds east of UTC for the reference timezone (IST, +05:30).
const REFERENCE_OFFSET_SECONDS: i32 = 5 * 3600 + 30 * 60;

/// Returns the fixed reference timezone offset.
///
/// IST observes no daylight saving time, so a fixed offset is exact
/// year-round.
pub fn reference_offset() -> FixedOffset {
    FixedOffset::east_opt(REFERENCE_OFFSET_SECONDS).expect("valid offset")
}

/// Returns the current wall-clock time in the reference timezone.
///
/// This is the "now" used for future/ongoing filtering; it is sampled once
/// per fetch, so repeated runs at different times may legitimately produce
/// different record sets.
pub fn now_in_reference() -> DateTime<FixedOffset> {
    Utc::now().with_timezone(&reference_offset())
}

/// Converts epoch seconds into a timestamp in the reference timezone.
///
/// Returns `None` for out-of-range values.
pub fn from_epoch_seconds(secs: i64) -> Option<DateTime<FixedOffset>> {
    reference_offset().timestamp_opt(secs, 0).single()
}

/// Converts a timestamp from any timezone into the reference timezone.
pub fn to_reference<Tz: TimeZone>(dt: &DateTime<Tz>) -> DateTime<FixedOffset> {
    dt.with_timezone(&reference_offset())
}

/// Parses an ISO8601/RFC3339 timestamp that carries its own offset.
///
/// The offset is preserved as given; callers convert with [`to_reference`]
/// when they need reference-timezone semantics.
pub fn parse_iso(s: &str) -> Option<DateTime<FixedOffset>> {
    DateTime::parse_from_rfc3339(s).ok()
}

/// Parses an ISO8601 timestamp, tolerating a missing offset.
///
/// Offset-bearing values are converted to the reference timezone. Offset-less
/// values are interpreted as reference-timezone wall time, which is what the
/// sources emitting them mean.
pub fn parse_iso_lenient(s: &str) -> Option<DateTime<FixedOffset>> {
    if let Some(dt) = parse_iso(s) {
        return Some(to_reference(&dt));
    }
    let naive = NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S")
        .or_else(|_| NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S%.f"))
        .ok()?;
    naive.and_local_timezone(reference_offset()).single()
}

/// Whole seconds between `start` and `end`, saturating at zero.
///
/// The (start, end) pair always comes from a single platform response, so a
/// negative span only occurs on malformed data; it is clamped rather than
/// propagated.
pub fn duration_seconds(start: &DateTime<FixedOffset>, end: &DateTime<FixedOffset>) -> u64 {
    (*end - *start).num_seconds().max(0) as u64
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ist(y: i32, mo: u32, d: u32, h: u32, mi: u32, s: u32) -> DateTime<FixedOffset> {
        reference_offset()
            .with_ymd_and_hms(y, mo, d, h, mi, s)
            .unwrap()
    }

    #[test]
    fn reference_offset_is_ist() {
        assert_eq!(reference_offset().local_minus_utc(), 19800);
    }

    #[test]
    fn epoch_conversion() {
        // 2024-09-21 14:30:00 UTC == 20:00:00 IST
        let dt = from_epoch_seconds(1_726_929_000).unwrap();
        assert_eq!(dt, ist(2024, 9, 21, 20, 0, 0));
    }

    #[test]
    fn parse_iso_keeps_offset() {
        let dt = parse_iso("2024-09-21T21:00:00+09:00").unwrap();
        assert_eq!(dt.offset().local_minus_utc(), 9 * 3600);
        assert_eq!(to_reference(&dt), ist(2024, 9, 21, 17, 30, 0));
    }

    #[test]
    fn parse_iso_rejects_garbage() {
        assert!(parse_iso("not a timestamp").is_none());
        assert!(parse_iso("2024-09-21").is_none());
    }

    #[test]
    fn lenient_parse_with_offset_converts() {
        let dt = parse_iso_lenient("2024-09-21T15:30:00+00:00").unwrap();
        assert_eq!(dt, ist(2024, 9, 21, 21, 0, 0));
    }

    #[test]
    fn lenient_parse_without_offset_assumes_reference() {
        let dt = parse_iso_lenient("2024-09-22T19:00:00").unwrap();
        assert_eq!(dt, ist(2024, 9, 22, 19, 0, 0));
    }

    #[test]
    fn lenient_parse_with_fraction() {
        let dt = parse_iso_lenient("2024-09-22T19:00:00.500").unwrap();
        assert_eq!(dt.date_naive(), ist(2024, 9, 22, 19, 0, 0).date_naive());
    }

    #[test]
    fn duration_exact() {
        let start = ist(2024, 9, 21, 20, 0, 0);
        let end = ist(2024, 9, 21, 22, 30, 0);
        assert_eq!(duration_seconds(&start, &end), 9000);
    }

    #[test]
    fn duration_spanning_days() {
        let start = ist(2024, 9, 1, 0, 0, 0);
        let end = ist(2024, 9, 11, 0, 0, 0);
        assert_eq!(duration_seconds(&start, &end), 10 * 24 * 60 * 60);
    }

    #[test]
    fn duration_clamps_negative() {
        let start = ist(2024, 9, 21, 20, 0, 0);
        let end = ist(2024, 9, 21, 19, 0, 0);
        assert_eq!(duration_seconds(&start, &end), 0);
    }

    #[test]
    fn duration_across_offsets() {
        // Same span expressed in different offsets must agree.
        let start = parse_iso("2024-09-21T21:00:00+09:00").unwrap();
        let end = parse_iso("2024-09-21T14:00:00+00:00").unwrap();
        assert_eq!(duration_seconds(&start, &end), 2 * 3600);
    }
}

//! GeeksforGeeks adapter.
//!
//! Single REST GET with query parameters selecting upcoming contests; the
//! server-side filter is trusted, so no client-side future/ongoing cut is
//! applied. Timestamps arrive as ISO8601 with (or occasionally without) an
//! offset and are converted to the reference timezone.

use reqwest::Client;
use serde::Deserialize;
use tracing::{debug, warn};

use nextcontest_core::{ContestRecord, Platform, parse_iso_lenient};

use crate::error::{SourceError, SourceResult};
use crate::http;
use crate::source::{BoxFuture, ContestSource};

const ENDPOINT: &str = "https://practiceapi.geeksforgeeks.org/api/vr/events/";
const QUERY: &[(&str, &str)] = &[("type", "contest"), ("sub_type", "upcoming")];

/// Fetches the GeeksforGeeks contest schedule.
pub struct GeeksforGeeksSource {
    client: Client,
}

impl GeeksforGeeksSource {
    /// Creates a new GeeksforGeeks source using the shared HTTP client.
    pub fn new(client: Client) -> Self {
        Self { client }
    }
}

impl ContestSource for GeeksforGeeksSource {
    fn platform(&self) -> Platform {
        Platform::GeeksforGeeks
    }

    fn fetch(&self) -> BoxFuture<'_, SourceResult<Vec<ContestRecord>>> {
        Box::pin(async move {
            let request = self.client.get(ENDPOINT).query(QUERY);
            let body = http::fetch_text(request, Platform::GeeksforGeeks).await?;
            let records = parse_response(&body)?;
            debug!(count = records.len(), "normalized GeeksforGeeks contests");
            Ok(records)
        })
    }
}

#[derive(Debug, Deserialize)]
struct ApiResponse {
    results: Option<ApiResults>,
}

#[derive(Debug, Deserialize)]
struct ApiResults {
    #[serde(default)]
    upcoming: Vec<ApiContest>,
}

#[derive(Debug, Deserialize)]
struct ApiContest {
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    slug: Option<String>,
    #[serde(default)]
    start_time: Option<String>,
    #[serde(default)]
    end_time: Option<String>,
}

/// Parses the events payload into normalized records.
fn parse_response(body: &str) -> SourceResult<Vec<ContestRecord>> {
    let response: ApiResponse = serde_json::from_str(body).map_err(|e| {
        SourceError::invalid_response(format!("unexpected events shape: {e}"))
            .with_platform(Platform::GeeksforGeeks)
            .with_source(e)
    })?;

    let results = response.results.ok_or_else(|| {
        SourceError::invalid_response("missing results section")
            .with_platform(Platform::GeeksforGeeks)
    })?;

    let records = results
        .upcoming
        .into_iter()
        .filter_map(|item| {
            let record = normalize_item(&item);
            if record.is_none() {
                warn!(slug = ?item.slug, "skipping GeeksforGeeks contest with malformed fields");
            }
            record
        })
        .collect();

    Ok(records)
}

/// Normalizes one contest entry; `None` drops only that entry.
fn normalize_item(item: &ApiContest) -> Option<ContestRecord> {
    let name = item.name.as_deref()?;
    let slug = item.slug.as_deref()?;
    let start = parse_iso_lenient(item.start_time.as_deref()?)?;
    let end = parse_iso_lenient(item.end_time.as_deref()?)?;

    Some(ContestRecord::from_bounds(
        Platform::GeeksforGeeks,
        name,
        format!("https://practice.geeksforgeeks.org/contest/{slug}"),
        start,
        end,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use nextcontest_core::reference_offset;

    const FIXTURE: &str = r#"{
        "results": {
            "upcoming": [
                {
                    "name": "GfG Weekly - 170",
                    "slug": "gfg-weekly-170",
                    "start_time": "2024-09-22T19:00:00",
                    "end_time": "2024-09-22T20:30:00"
                },
                {
                    "name": "Job-A-Thon 38",
                    "slug": "job-a-thon-38",
                    "start_time": "2024-09-28T14:30:00+00:00",
                    "end_time": "2024-09-28T17:00:00+00:00"
                }
            ]
        }
    }"#;

    #[test]
    fn parses_upcoming_contests() {
        let records = parse_response(FIXTURE).unwrap();

        assert_eq!(records.len(), 2);
        assert_eq!(records[0].title, "GfG Weekly - 170");
        assert_eq!(
            records[0].url,
            "https://practice.geeksforgeeks.org/contest/gfg-weekly-170"
        );
        assert_eq!(records[0].platform, Platform::GeeksforGeeks);
    }

    #[test]
    fn offsetless_times_read_in_reference_timezone() {
        let records = parse_response(FIXTURE).unwrap();
        let expected = reference_offset()
            .with_ymd_and_hms(2024, 9, 22, 19, 0, 0)
            .unwrap();
        assert_eq!(records[0].start_time, expected);
        assert_eq!(records[0].duration_seconds, 90 * 60);
    }

    #[test]
    fn offset_bearing_times_converted_to_reference() {
        let records = parse_response(FIXTURE).unwrap();
        // 14:30 UTC == 20:00 IST
        let expected = reference_offset()
            .with_ymd_and_hms(2024, 9, 28, 20, 0, 0)
            .unwrap();
        assert_eq!(records[1].start_time, expected);
        assert_eq!(records[1].duration_seconds, 2 * 3600 + 30 * 60);
    }

    #[test]
    fn malformed_item_drops_only_that_item() {
        let body = r#"{
            "results": {
                "upcoming": [
                    {"name": "No Slug", "start_time": "2024-09-22T19:00:00", "end_time": "2024-09-22T20:00:00"},
                    {"name": "Fine", "slug": "fine", "start_time": "2024-09-22T19:00:00", "end_time": "2024-09-22T20:00:00"}
                ]
            }
        }"#;

        let records = parse_response(body).unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].title, "Fine");
    }

    #[test]
    fn missing_results_is_structural() {
        assert!(parse_response(r#"{"detail": "throttled"}"#).is_err());
    }
}

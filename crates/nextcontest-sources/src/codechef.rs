//! CodeChef adapter.
//!
//! Single REST GET against the public contest list API, which returns the
//! ongoing (`present_contests`) and upcoming (`future_contests`) sets
//! already filtered and sorted server-side. The server's filtering is
//! trusted as-is; no client-side future/ongoing filter is applied.

use reqwest::Client;
use serde::Deserialize;
use tracing::{debug, warn};

use nextcontest_core::{ContestRecord, Platform, parse_iso};

use crate::error::{SourceError, SourceResult};
use crate::http;
use crate::source::{BoxFuture, ContestSource};

const ENDPOINT: &str = "https://www.codechef.com/api/list/contests/all";
const QUERY: &[(&str, &str)] = &[("sort_by", "START"), ("sorting_order", "asc")];

/// Fetches the CodeChef contest schedule.
pub struct CodeChefSource {
    client: Client,
}

impl CodeChefSource {
    /// Creates a new CodeChef source using the shared HTTP client.
    pub fn new(client: Client) -> Self {
        Self { client }
    }
}

impl ContestSource for CodeChefSource {
    fn platform(&self) -> Platform {
        Platform::CodeChef
    }

    fn fetch(&self) -> BoxFuture<'_, SourceResult<Vec<ContestRecord>>> {
        Box::pin(async move {
            let request = self.client.get(ENDPOINT).query(QUERY);
            let body = http::fetch_text(request, Platform::CodeChef).await?;
            let records = parse_response(&body)?;
            debug!(count = records.len(), "normalized CodeChef contests");
            Ok(records)
        })
    }
}

#[derive(Debug, Deserialize)]
struct ContestList {
    #[serde(default)]
    present_contests: Vec<ApiContest>,
    #[serde(default)]
    future_contests: Vec<ApiContest>,
}

#[derive(Debug, Deserialize)]
struct ApiContest {
    #[serde(default)]
    contest_code: Option<String>,
    #[serde(default)]
    contest_name: Option<String>,
    #[serde(default)]
    contest_start_date_iso: Option<String>,
    #[serde(default)]
    contest_end_date_iso: Option<String>,
}

/// Parses the contest-list payload into normalized records.
///
/// Present contests come first, then future ones, preserving the server's
/// ascending start-time order within each set.
fn parse_response(body: &str) -> SourceResult<Vec<ContestRecord>> {
    let list: ContestList = serde_json::from_str(body).map_err(|e| {
        SourceError::invalid_response(format!("unexpected contest list shape: {e}"))
            .with_platform(Platform::CodeChef)
            .with_source(e)
    })?;

    let records = list
        .present_contests
        .into_iter()
        .chain(list.future_contests)
        .filter_map(|item| {
            let record = normalize_item(&item);
            if record.is_none() {
                warn!(code = ?item.contest_code, "skipping CodeChef contest with malformed fields");
            }
            record
        })
        .collect();

    Ok(records)
}

/// Normalizes one contest entry; `None` drops only that entry.
fn normalize_item(item: &ApiContest) -> Option<ContestRecord> {
    let code = item.contest_code.as_deref()?;
    let name = item.contest_name.as_deref()?;
    let start = parse_iso(item.contest_start_date_iso.as_deref()?)?;
    let end = parse_iso(item.contest_end_date_iso.as_deref()?)?;

    Some(ContestRecord::from_bounds(
        Platform::CodeChef,
        name,
        format!("https://www.codechef.com/{code}"),
        start,
        end,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    const FIXTURE: &str = r#"{
        "status": "success",
        "present_contests": [
            {
                "contest_code": "START150",
                "contest_name": "Starters 150",
                "contest_start_date_iso": "2024-09-18T20:00:00+05:30",
                "contest_end_date_iso": "2024-09-18T22:00:00+05:30"
            }
        ],
        "future_contests": [
            {
                "contest_code": "COOK160",
                "contest_name": "September Cook-Off",
                "contest_start_date_iso": "2024-09-22T20:00:00+05:30",
                "contest_end_date_iso": "2024-09-22T22:30:00+05:30"
            }
        ]
    }"#;

    #[test]
    fn parses_present_then_future() {
        let records = parse_response(FIXTURE).unwrap();

        assert_eq!(records.len(), 2);
        assert_eq!(records[0].title, "Starters 150");
        assert_eq!(records[0].url, "https://www.codechef.com/START150");
        assert_eq!(records[0].platform, Platform::CodeChef);
        assert_eq!(records[1].title, "September Cook-Off");
    }

    #[test]
    fn duration_matches_fixture_bounds() {
        let records = parse_response(FIXTURE).unwrap();

        assert_eq!(records[0].duration_seconds, 2 * 3600);
        assert_eq!(records[1].duration_seconds, 2 * 3600 + 30 * 60);
    }

    #[test]
    fn malformed_item_drops_only_that_item() {
        let body = r#"{
            "present_contests": [],
            "future_contests": [
                {
                    "contest_code": "GOOD1",
                    "contest_name": "Good Contest",
                    "contest_start_date_iso": "2024-09-22T20:00:00+05:30",
                    "contest_end_date_iso": "2024-09-22T22:00:00+05:30"
                },
                {
                    "contest_code": "BAD1",
                    "contest_name": "Bad Contest",
                    "contest_start_date_iso": "not a date",
                    "contest_end_date_iso": "2024-09-23T22:00:00+05:30"
                },
                {
                    "contest_name": "No Code"
                }
            ]
        }"#;

        let records = parse_response(body).unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].title, "Good Contest");
    }

    #[test]
    fn missing_sections_yield_empty() {
        let records = parse_response("{}").unwrap();
        assert!(records.is_empty());
    }

    #[test]
    fn top_level_garbage_is_structural() {
        let err = parse_response("<html></html>").unwrap_err();
        assert_eq!(err.platform(), Some(Platform::CodeChef));
    }

    #[test]
    fn reparsing_is_identical_except_id() {
        let first = parse_response(FIXTURE).unwrap();
        let second = parse_response(FIXTURE).unwrap();

        for (a, b) in first.iter().zip(&second) {
            assert_ne!(a.id, b.id);
            assert_eq!(a.platform, b.platform);
            assert_eq!(a.title, b.title);
            assert_eq!(a.url, b.url);
            assert_eq!(a.start_time, b.start_time);
            assert_eq!(a.duration_seconds, b.duration_seconds);
        }
    }
}

//! Codeforces adapter.
//!
//! Single REST GET returning the full contest list, past contests included.
//! Start times are epoch seconds interpreted in the reference timezone; the
//! end time is start + duration. Contests whose end time is at or before
//! "now" are excluded, keeping ongoing and upcoming contests only.

use chrono::{DateTime, FixedOffset};
use reqwest::Client;
use serde::Deserialize;
use tracing::{debug, warn};

use nextcontest_core::{ContestRecord, Platform, from_epoch_seconds, now_in_reference};

use crate::error::{SourceError, SourceResult};
use crate::http;
use crate::source::{BoxFuture, ContestSource};

const ENDPOINT: &str = "https://codeforces.com/api/contest.list";

/// Fetches the Codeforces contest schedule.
pub struct CodeforcesSource {
    client: Client,
}

impl CodeforcesSource {
    /// Creates a new Codeforces source using the shared HTTP client.
    pub fn new(client: Client) -> Self {
        Self { client }
    }
}

impl ContestSource for CodeforcesSource {
    fn platform(&self) -> Platform {
        Platform::Codeforces
    }

    fn fetch(&self) -> BoxFuture<'_, SourceResult<Vec<ContestRecord>>> {
        Box::pin(async move {
            let request = self.client.get(ENDPOINT);
            let body = http::fetch_text(request, Platform::Codeforces).await?;
            let records = parse_response(&body, now_in_reference())?;
            debug!(count = records.len(), "normalized Codeforces contests");
            Ok(records)
        })
    }
}

#[derive(Debug, Deserialize)]
struct ApiResponse {
    #[serde(default)]
    status: String,
    #[serde(default)]
    result: Vec<ApiContest>,
}

#[derive(Debug, Deserialize)]
struct ApiContest {
    #[serde(default)]
    id: Option<u64>,
    #[serde(default)]
    name: Option<String>,
    #[serde(default, rename = "startTimeSeconds")]
    start_time_seconds: Option<i64>,
    #[serde(default, rename = "durationSeconds")]
    duration_seconds: Option<u64>,
}

/// Parses the contest-list payload, keeping contests ending after `now`.
///
/// `now` is sampled once per fetch; the future/ongoing cut is a
/// point-in-time decision and intentionally not idempotent across runs.
fn parse_response(body: &str, now: DateTime<FixedOffset>) -> SourceResult<Vec<ContestRecord>> {
    let response: ApiResponse = serde_json::from_str(body).map_err(|e| {
        SourceError::invalid_response(format!("unexpected contest list shape: {e}"))
            .with_platform(Platform::Codeforces)
            .with_source(e)
    })?;

    if response.status != "OK" {
        return Err(SourceError::invalid_response(format!(
            "API status {:?}",
            response.status
        ))
        .with_platform(Platform::Codeforces));
    }

    let records = response
        .result
        .into_iter()
        .filter_map(|item| {
            let record = normalize_item(&item);
            if record.is_none() {
                warn!(id = ?item.id, "skipping Codeforces contest with missing schedule fields");
            }
            record
        })
        .filter(|record| record.end_time().is_some_and(|end| end > now))
        .collect();

    Ok(records)
}

/// Normalizes one contest entry; `None` drops only that entry.
fn normalize_item(item: &ApiContest) -> Option<ContestRecord> {
    let id = item.id?;
    let name = item.name.as_deref()?;
    let start = from_epoch_seconds(item.start_time_seconds?)?;
    let duration = item.duration_seconds?;

    let record = ContestRecord::from_duration(
        Platform::Codeforces,
        name,
        format!("https://codeforces.com/contests/{id}"),
        start,
        duration,
    );
    // A duration that overflows the time range is malformed data.
    record.end_time()?;
    Some(record)
}

//! LeetCode adapter.
//!
//! Single GraphQL POST with a fixed query body. The response covers every
//! contest ever run, so contests whose end time is at or before "now" are
//! excluded, keeping ongoing and upcoming contests only.

use chrono::{DateTime, FixedOffset};
use reqwest::Client;
use serde::Deserialize;
use serde_json::json;
use tracing::{debug, warn};

use nextcontest_core::{ContestRecord, Platform, from_epoch_seconds, now_in_reference};

use crate::error::{SourceError, SourceResult};
use crate::http;
use crate::source::{BoxFuture, ContestSource};

const ENDPOINT: &str = "https://leetcode.com/graphql";
const QUERY: &str = "{ allContests { title titleSlug startTime duration } }";

/// Fetches the LeetCode contest schedule.
pub struct LeetCodeSource {
    client: Client,
}

impl LeetCodeSource {
    /// Creates a new LeetCode source using the shared HTTP client.
    pub fn new(client: Client) -> Self {
        Self { client }
    }
}

impl ContestSource for LeetCodeSource {
    fn platform(&self) -> Platform {
        Platform::LeetCode
    }

    fn fetch(&self) -> BoxFuture<'_, SourceResult<Vec<ContestRecord>>> {
        Box::pin(async move {
            let request = self.client.post(ENDPOINT).json(&json!({ "query": QUERY }));
            let body = http::fetch_text(request, Platform::LeetCode).await?;
            let records = parse_response(&body, now_in_reference())?;
            debug!(count = records.len(), "normalized LeetCode contests");
            Ok(records)
        })
    }
}

#[derive(Debug, Deserialize)]
struct ApiResponse {
    data: Option<ApiData>,
}

#[derive(Debug, Deserialize)]
struct ApiData {
    #[serde(default, rename = "allContests")]
    all_contests: Vec<ApiContest>,
}

#[derive(Debug, Deserialize)]
struct ApiContest {
    #[serde(default)]
    title: Option<String>,
    #[serde(default, rename = "titleSlug")]
    title_slug: Option<String>,
    #[serde(default, rename = "startTime")]
    start_time: Option<i64>,
    #[serde(default)]
    duration: Option<u64>,
}

/// Parses the GraphQL payload, keeping contests ending after `now`.
fn parse_response(body: &str, now: DateTime<FixedOffset>) -> SourceResult<Vec<ContestRecord>> {
    let response: ApiResponse = serde_json::from_str(body).map_err(|e| {
        SourceError::invalid_response(format!("unexpected GraphQL shape: {e}"))
            .with_platform(Platform::LeetCode)
            .with_source(e)
    })?;

    let data = response.data.ok_or_else(|| {
        SourceError::invalid_response("missing data section").with_platform(Platform::LeetCode)
    })?;

    let records = data
        .all_contests
        .into_iter()
        .filter_map(|item| {
            let record = normalize_item(&item);
            if record.is_none() {
                warn!(slug = ?item.title_slug, "skipping LeetCode contest with malformed fields");
            }
            record
        })
        .filter(|record| record.end_time().is_some_and(|end| end > now))
        .collect();

    Ok(records)
}

/// Normalizes one contest entry; `None` drops only that entry.
fn normalize_item(item: &ApiContest) -> Option<ContestRecord> {
    let title = item.title.as_deref()?;
    let slug = item.title_slug.as_deref()?;
    let start = from_epoch_seconds(item.start_time?)?;
    let duration = item.duration?;

    let record = ContestRecord::from_duration(
        Platform::LeetCode,
        title,
        format!("https://leetcode.com/contest/{slug}"),
        start,
        duration,
    );
    // A duration that overflows the time range is malformed data.
    record.end_time()?;
    Some(record)
}

//! AtCoder adapter.
//!
//! Single GET of the contest listing page, scraping the rows of the
//! "upcoming contests" table. Start times are displayed with the site's
//! local offset, which is preserved as-is; durations are displayed as
//! `HH:MM` and converted to seconds. Only the upcoming table is read, so no
//! client-side future/ongoing filter is applied.

use chrono::DateTime;
use reqwest::Client;
use scraper::{ElementRef, Html, Selector};
use tracing::{debug, warn};

use nextcontest_core::{ContestRecord, Platform};

use crate::error::SourceResult;
use crate::http;
use crate::source::{BoxFuture, ContestSource};

const ENDPOINT: &str = "https://atcoder.jp/contests/";

/// Fetches the AtCoder contest schedule.
pub struct AtCoderSource {
    client: Client,
}

impl AtCoderSource {
    /// Creates a new AtCoder source using the shared HTTP client.
    pub fn new(client: Client) -> Self {
        Self { client }
    }
}

impl ContestSource for AtCoderSource {
    fn platform(&self) -> Platform {
        Platform::AtCoder
    }

    fn fetch(&self) -> BoxFuture<'_, SourceResult<Vec<ContestRecord>>> {
        Box::pin(async move {
            let request = self.client.get(ENDPOINT);
            let body = http::fetch_text(request, Platform::AtCoder).await?;
            let records = parse_contests(&body);
            debug!(count = records.len(), "normalized AtCoder contests");
            Ok(records)
        })
    }
}

/// Extracts records from the upcoming-contests table.
///
/// A page without the table (markup change, maintenance page) simply yields
/// no rows; a row that fails to parse is skipped individually.
fn parse_contests(html: &str) -> Vec<ContestRecord> {
    let row_sel = Selector::parse("#contest-table-upcoming tbody tr").expect("valid selector");

    let document = Html::parse_document(html);
    document
        .select(&row_sel)
        .filter_map(|row| {
            let record = normalize_row(&row);
            if record.is_none() {
                warn!("skipping unparsable AtCoder contest row");
            }
            record
        })
        .collect()
}

/// Normalizes one table row; `None` drops only that row.
///
/// Cells are taken positionally: start time, contest link, duration.
fn normalize_row(row: &ElementRef<'_>) -> Option<ContestRecord> {
    let cell_sel = Selector::parse("td").expect("valid selector");
    let time_sel = Selector::parse("a time").expect("valid selector");
    let link_sel = Selector::parse("a").expect("valid selector");

    let cells: Vec<ElementRef<'_>> = row.select(&cell_sel).collect();

    let start_text: String = cells.first()?.select(&time_sel).next()?.text().collect();
    // Displayed as e.g. "2024-09-21 21:00:00+0900"; the offset is kept.
    let start = DateTime::parse_from_str(start_text.trim(), "%Y-%m-%d %H:%M:%S%z").ok()?;

    let link = cells.get(1)?.select(&link_sel).next()?;
    let title: String = link.text().collect();
    let href = link.value().attr("href")?;

    let duration_text: String = cells.get(2)?.text().collect();
    let duration = parse_duration(duration_text.trim())?;

    Some(ContestRecord::from_duration(
        Platform::AtCoder,
        title,
        format!("https://atcoder.jp{href}"),
        start,
        duration,
    ))
}

/// Converts a displayed `HH:MM` duration to seconds.
///
/// The hour field is unbounded (long marathons display e.g. `240:00`).
fn parse_duration(s: &str) -> Option<u64> {
    let (hours, minutes) = s.split_once(':')?;
    let hours: u64 = hours.trim().parse().ok()?;
    let minutes: u64 = minutes.trim().parse().ok()?;
    Some(hours * 3600 + minutes * 60)
}

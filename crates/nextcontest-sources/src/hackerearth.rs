//! HackerEarth adapter.
//!
//! Two-phase pipeline. The discovery phase scrapes the upcoming section of
//! the challenge listing page into lightweight stubs (title, slug, URL); the
//! detail phase resolves exact start/end times from a per-contest JSON
//! endpoint. A failure in phase two drops only the affected stub.
//!
//! Only contests under the listing page's "upcoming" section are considered,
//! so no client-side future/ongoing filter is applied.

use chrono::{DateTime, FixedOffset, NaiveDateTime};
use reqwest::Client;
use scraper::{Html, Selector};
use serde::Deserialize;
use tracing::{debug, warn};

use nextcontest_core::{ContestRecord, Platform, parse_iso, to_reference};

use crate::error::SourceResult;
use crate::http;
use crate::source::{BoxFuture, ContestSource};

const LISTING_URL: &str = "https://www.hackerearth.com/challenges/competitive";

fn detail_url(slug: &str) -> String {
    format!("https://www.hackerearth.com/challengesapp/api/events/{slug}/")
}

/// Fetches the HackerEarth contest schedule.
pub struct HackerEarthSource {
    client: Client,
}

impl HackerEarthSource {
    /// Creates a new HackerEarth source using the shared HTTP client.
    pub fn new(client: Client) -> Self {
        Self { client }
    }

    /// Resolves one discovered stub into a record via the detail endpoint.
    async fn resolve_stub(&self, stub: &ChallengeStub) -> Option<ContestRecord> {
        let request = self
            .client
            .get(detail_url(&stub.slug))
            .query(&[("only_meta", "false")]);

        let body = match http::fetch_text(request, Platform::HackerEarth).await {
            Ok(body) => body,
            Err(e) => {
                warn!(slug = %stub.slug, error = %e, "skipping challenge: detail fetch failed");
                return None;
            }
        };

        match parse_detail(&body) {
            Some((start, end)) => Some(ContestRecord::from_bounds(
                Platform::HackerEarth,
                &stub.title,
                stub.url.clone(),
                start,
                end,
            )),
            None => {
                warn!(slug = %stub.slug, "skipping challenge: malformed detail payload");
                None
            }
        }
    }
}

impl ContestSource for HackerEarthSource {
    fn platform(&self) -> Platform {
        Platform::HackerEarth
    }

    fn fetch(&self) -> BoxFuture<'_, SourceResult<Vec<ContestRecord>>> {
        Box::pin(async move {
            let request = self.client.get(LISTING_URL);
            let body = http::fetch_text(request, Platform::HackerEarth).await?;

            // The parsed DOM is not Send; discovery happens in a sync scope
            // before any detail request is awaited.
            let stubs = parse_listing(&body);
            debug!(count = stubs.len(), "discovered upcoming HackerEarth challenges");

            let mut records = Vec::with_capacity(stubs.len());
            for stub in &stubs {
                if let Some(record) = self.resolve_stub(stub).await {
                    records.push(record);
                }
            }
            Ok(records)
        })
    }
}

/// A challenge discovered on the listing page, before timing is known.
#[derive(Debug, Clone, PartialEq, Eq)]
struct ChallengeStub {
    title: String,
    slug: String,
    url: String,
}

/// Extracts upcoming-challenge stubs from the listing page markup.
///
/// Cards missing a title or link are skipped individually.
fn parse_listing(html: &str) -> Vec<ChallengeStub> {
    let card_sel =
        Selector::parse("div.upcoming > div.challenge-card-modern").expect("valid selector");
    let title_sel = Selector::parse("span.challenge-list-title").expect("valid selector");
    let link_sel = Selector::parse("a.challenge-card-wrapper").expect("valid selector");

    let document = Html::parse_document(html);
    let mut stubs = Vec::new();

    for card in document.select(&card_sel) {
        let Some(title) = card
            .select(&title_sel)
            .next()
            .map(|span| span.text().collect::<String>())
        else {
            warn!("skipping challenge card without a title");
            continue;
        };

        let Some(href) = card
            .select(&link_sel)
            .next()
            .and_then(|a| a.value().attr("href"))
        else {
            warn!(title = %title.trim(), "skipping challenge card without a link");
            continue;
        };

        let Some(slug) = href.trim_matches('/').rsplit('/').next().filter(|s| !s.is_empty())
        else {
            warn!(href = %href, "skipping challenge card with an empty slug");
            continue;
        };

        stubs.push(ChallengeStub {
            title,
            slug: slug.to_string(),
            url: format!("https://www.hackerearth.com{href}"),
        });
    }

    stubs
}

#[derive(Debug, Deserialize)]
struct ApiDetail {
    #[serde(default)]
    start_date: Option<String>,
    #[serde(default)]
    end_date: Option<String>,
}

/// Parses the per-contest detail payload into a (start, end) pair.
fn parse_detail(body: &str) -> Option<(DateTime<FixedOffset>, DateTime<FixedOffset>)> {
    let detail: ApiDetail = serde_json::from_str(body).ok()?;
    let start = parse_detail_time(detail.start_date.as_deref()?)?;
    let end = parse_detail_time(detail.end_date.as_deref()?)?;
    Some((start, end))
}

/// Parses a detail timestamp.
///
/// The endpoint emits UTC instants with a trailing zone marker; the marker
/// is stripped, the remainder read as UTC, and the result converted to the
/// reference timezone. Offset-bearing values are handled as-is.
fn parse_detail_time(s: &str) -> Option<DateTime<FixedOffset>> {
    let trimmed = s.strip_suffix('Z').unwrap_or(s);
    let naive = NaiveDateTime::parse_from_str(trimmed, "%Y-%m-%dT%H:%M:%S")
        .or_else(|_| NaiveDateTime::parse_from_str(trimmed, "%Y-%m-%dT%H:%M:%S%.f"));

    if let Ok(naive) = naive {
        return Some(to_reference(&naive.and_utc()));
    }
    parse_iso(s).map(|dt| to_reference(&dt))
}

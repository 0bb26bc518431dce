//! Order-preserving aggregation across sources.
//!
//! The aggregator invokes every source's `fetch()` exactly once, runs the
//! fetches concurrently, and concatenates the surviving results in the
//! declared source order with each source's internal ordering preserved.
//! A failed source contributes zero records and never blocks, reorders, or
//! cancels the others.
//!
//! Besides the records themselves, the aggregator produces a per-source
//! manifest so callers can distinguish "platform down" from "no contests
//! currently scheduled" — a silent empty contribution conflates the two.

use futures_util::future::join_all;
use tracing::{debug, warn};

use nextcontest_core::{ContestRecord, Platform};

use crate::source::ContestSource;

/// The outcome of one source's fetch within a run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchOutcome {
    /// The source fetched successfully and contributed `count` records.
    Fetched {
        /// Number of records contributed.
        count: usize,
    },
    /// The source failed; it contributed no records.
    Failed {
        /// Display form of the failure.
        error: String,
    },
}

/// One source's entry in the run manifest.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceReport {
    /// The platform the source covers.
    pub platform: Platform,
    /// What happened to its fetch.
    pub outcome: FetchOutcome,
}

impl SourceReport {
    /// Returns `true` if the source failed.
    pub fn is_failed(&self) -> bool {
        matches!(self.outcome, FetchOutcome::Failed { .. })
    }

    /// Number of records contributed (zero on failure).
    pub fn count(&self) -> usize {
        match self.outcome {
            FetchOutcome::Fetched { count } => count,
            FetchOutcome::Failed { .. } => 0,
        }
    }
}

/// The result of one aggregation run.
#[derive(Debug)]
pub struct RunOutcome {
    /// All surviving records, in source order.
    pub records: Vec<ContestRecord>,
    /// One report per source, in the same order.
    pub reports: Vec<SourceReport>,
}

/// Fetches every source once and concatenates the results.
///
/// Fetches run concurrently (one in-flight fetch per source) and are joined
/// back into the declared order, so timing never affects output order. No
/// deduplication, sorting, or revalidation is performed.
pub async fn aggregate(sources: &[Box<dyn ContestSource>]) -> RunOutcome {
    let results = join_all(sources.iter().map(|source| source.fetch())).await;

    let mut records = Vec::new();
    let mut reports = Vec::with_capacity(sources.len());

    for (source, result) in sources.iter().zip(results) {
        let platform = source.platform();
        match result {
            Ok(batch) => {
                debug!(platform = %platform, count = batch.len(), "source fetched");
                reports.push(SourceReport {
                    platform,
                    outcome: FetchOutcome::Fetched { count: batch.len() },
                });
                records.extend(batch);
            }
            Err(error) => {
                warn!(platform = %platform, error = %error, "source failed, contributing no records");
                reports.push(SourceReport {
                    platform,
                    outcome: FetchOutcome::Failed {
                        error: error.to_string(),
                    },
                });
            }
        }
    }

    RunOutcome { records, reports }
}

//! ContestSource trait, per-platform adapters, and the aggregator.
//!
//! This crate provides the abstraction layer for contest platforms:
//!
//! - [`ContestSource`] - The capability every platform adapter implements
//! - One adapter module per platform, each owning its transport, parsing,
//!   and time/duration normalization
//! - [`aggregate`] - Order-preserving concatenation with per-source failure
//!   isolation and a run manifest
//! - [`SourceError`] - Error types for source operations
//!
//! # Architecture
//!
//! ```text
//! ┌──────────┐ ┌────────────┐ ┌─────┐ ┌──────────┐ ┌─────────────┐ ┌─────────┐
//! │ CodeChef │ │ Codeforces │ │ GfG │ │ LeetCode │ │ HackerEarth │ │ AtCoder │
//! │ REST     │ │ REST       │ │ REST│ │ GraphQL  │ │ HTML + REST │ │ HTML    │
//! └────┬─────┘ └─────┬──────┘ └──┬──┘ └────┬─────┘ └──────┬──────┘ └────┬────┘
//!      │             │           │         │              │             │
//!      └─────────────┴───────────┴────┬────┴──────────────┴─────────────┘
//!                                     │ ContestSource::fetch()
//!                                     ▼
//!                              ┌─────────────┐
//!                              │  aggregate  │  failure isolation,
//!                              └──────┬──────┘  fixed order
//!                                     ▼
//!                    Vec<ContestRecord> + Vec<SourceReport>
//! ```

pub mod aggregate;
pub mod atcoder;
pub mod codechef;
pub mod codeforces;
pub mod error;
pub mod geeksforgeeks;
pub mod hackerearth;
pub mod http;
pub mod leetcode;
pub mod source;

// Re-export main types at crate root
pub use aggregate::{FetchOutcome, RunOutcome, SourceReport, aggregate};
pub use atcoder::AtCoderSource;
pub use codechef::CodeChefSource;
pub use codeforces::CodeforcesSource;
pub use error::{SourceError, SourceErrorCode, SourceResult};
pub use geeksforgeeks::GeeksforGeeksSource;
pub use hackerearth::HackerEarthSource;
pub use leetcode::LeetCodeSource;
pub use source::{BoxFuture, ContestSource, FailingSource};

use nextcontest_core::Platform;
use reqwest::Client;

/// Builds the sources for the given platforms, in [`Platform::ALL`] order.
///
/// The returned order is the aggregation order; `platforms` only restricts
/// which of them are built.
pub fn build_sources(client: &Client, platforms: &[Platform]) -> Vec<Box<dyn ContestSource>> {
    Platform::ALL
        .iter()
        .filter(|p| platforms.contains(*p))
        .map(|platform| -> Box<dyn ContestSource> {
            match platform {
                Platform::CodeChef => Box::new(CodeChefSource::new(client.clone())),
                Platform::Codeforces => Box::new(CodeforcesSource::new(client.clone())),
                Platform::GeeksforGeeks => Box::new(GeeksforGeeksSource::new(client.clone())),
                Platform::LeetCode => Box::new(LeetCodeSource::new(client.clone())),
                Platform::HackerEarth => Box::new(HackerEarthSource::new(client.clone())),
                Platform::AtCoder => Box::new(AtCoderSource::new(client.clone())),
            }
        })
        .collect()
}

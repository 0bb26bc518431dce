//! ContestSource trait definition.
//!
//! This module defines the [`ContestSource`] trait, the single capability
//! every platform adapter implements: fetch the platform's schedule and
//! normalize it into [`ContestRecord`]s.
//!
//! Adapters own their transport, parsing, and time/duration normalization.
//! Item-level failures (one malformed contest, one failed follow-up request)
//! are handled inside the adapter by skipping the item; only primary-request
//! failures surface as a [`SourceError`], which the aggregator degrades to an
//! empty contribution.

use std::future::Future;
use std::pin::Pin;

use nextcontest_core::{ContestRecord, Platform};

use crate::error::{SourceError, SourceErrorCode, SourceResult};

/// A boxed future for async trait methods.
///
/// Boxed futures keep the trait object-safe so the aggregator can hold a
/// heterogeneous, ordered list of sources.
pub type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;

/// The core abstraction for contest platforms.
///
/// Each implementation covers exactly one platform. `fetch` performs the
/// platform's network I/O (one or more sequential requests) and returns the
/// normalized records, in the order the platform reported them.
///
/// # Implementation notes
///
/// - Implementations must be `Send + Sync`; fetches for different sources
///   run concurrently.
/// - A fetch holds no resources beyond the call and shares no mutable state
///   with other sources.
/// - Requests must be bounded by the shared client's timeout so one
///   unresponsive platform cannot stall the run.
pub trait ContestSource: Send + Sync {
    /// The platform this source covers.
    fn platform(&self) -> Platform;

    /// Fetches and normalizes the platform's contest schedule.
    ///
    /// # Errors
    ///
    /// Returns `SourceError` on transport failure, non-success status, or a
    /// structurally unexpected primary response. Individual malformed items
    /// are skipped, not reported as errors.
    fn fetch(&self) -> BoxFuture<'_, SourceResult<Vec<ContestRecord>>>;
}

/// A source that always fails with a fixed error.
///
/// Useful in tests and as a placeholder for a source that failed to
/// construct.
#[derive(Debug)]
pub struct FailingSource {
    platform: Platform,
    code: SourceErrorCode,
    message: String,
}

impl FailingSource {
    /// Creates a new failing source.
    pub fn new(platform: Platform, code: SourceErrorCode, message: impl Into<String>) -> Self {
        Self {
            platform,
            code,
            message: message.into(),
        }
    }
}

impl ContestSource for FailingSource {
    fn platform(&self) -> Platform {
        self.platform
    }

    fn fetch(&self) -> BoxFuture<'_, SourceResult<Vec<ContestRecord>>> {
        // SourceError is not Clone (boxed source); rebuild it per call.
        let error = SourceError::new(self.code, self.message.clone()).with_platform(self.platform);
        Box::pin(async move { Err(error) })
    }
}

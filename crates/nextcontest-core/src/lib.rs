//! Core types: platforms, contest records, reference-timezone helpers

pub mod platform;
pub mod record;
pub mod time;
pub mod tracing;

pub use platform::Platform;
pub use record::{ContestRecord, collapse_whitespace};
pub use time::{
    duration_seconds, from_epoch_seconds, now_in_reference, parse_iso, parse_iso_lenient,
    reference_offset, to_reference,
};
pub use tracing::{TracingConfig, TracingError, init_tracing};

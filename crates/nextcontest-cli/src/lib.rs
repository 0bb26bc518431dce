//! nextcontest CLI library.
//!
//! Wires the source adapters and the aggregator to the filesystem: the
//! aggregated schedule is serialized into the output directory and an
//! optional README gets its freshness marker refreshed. The binary in
//! `main.rs` is a thin wrapper around [`cli`], [`output`] and [`readme`].

pub mod cli;
pub mod error;
pub mod output;
pub mod readme;

//! Command-line reader for a published SciCover data directory.
//!
//! Loads documents through the same [`scicover_shared::DocumentCache`] the
//! web front-end uses, either over HTTP or straight from a local build
//! output.

pub mod cli;
pub mod commands;
pub mod source;

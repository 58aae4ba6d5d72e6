//! # Dedup Store
//!
//! This crate persists the set of video ids that have already been
//! summarized and emailed, so a run that sees the same upload twice never
//! notifies twice.
//!
//! The store is a flat JSON array of id strings on disk. A missing file is
//! a valid initial state and reads as the empty set.

mod store;

pub use store::json_file::JsonFileStore;
pub use store::DedupStore;

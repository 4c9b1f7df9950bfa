//! Local storage module for caching ClickUp data
//!
//! The cache is a plain directory tree: one subdirectory per resource kind,
//! one JSON file per record, named after the record id.

pub mod cache;

pub use cache::{CacheError, CacheStore};

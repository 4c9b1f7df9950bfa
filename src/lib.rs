//! clickup-tasks - a command-line task table for ClickUp
//!
//! This library mirrors a ClickUp account's hierarchy (teams → spaces →
//! folders → lists → tasks) into a local file cache, rebuilds readable
//! hierarchy paths from the cached records, and filters and sorts tasks
//! for display.
//!
//! # Modules
//!
//! * [`backend`] - Remote API abstraction and the ClickUp client
//! * [`storage`] - File-per-record local cache
//! * [`sync`] - Hierarchy traversal and cache loading
//! * [`resolver`] - Id to name lookups and hierarchy paths
//! * [`filter`] / [`ordering`] - Task selection and display order
//! * [`ui`] - Table rows and rendering
//! * [`utils`] - Due-date formatting and style parsing

/// Backend abstraction over the remote task service
pub mod backend;

/// Command-line arguments
pub mod cli;

/// Configuration module for managing application settings
pub mod config;

/// Application constants and default values
pub mod constants;

/// Typed records for teams, spaces, folders, lists and tasks
pub mod entities;

/// Name-based task filtering
pub mod filter;

/// Logging setup
pub mod logger;

/// Task display order
pub mod ordering;

/// Id to name lookups for hierarchy paths and filters
pub mod resolver;

/// Local storage layer for caching ClickUp data
pub mod storage;

/// Synchronization engine that mirrors the remote hierarchy into the cache
pub mod sync;

/// Table building and rendering
pub mod ui;

/// Utility functions for date/time handling and other helpers
pub mod utils;

pub use entities::{Record, ResourceKind, Task};

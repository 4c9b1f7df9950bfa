//! Utility modules for clickup-tasks.
//!
//! # Available Utilities
//!
//! - [`datetime`] - Due-date classification and timestamp formatting
//! - [`style`] - Parsing of configured table styles

pub mod datetime;
pub mod style;

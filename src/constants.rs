//! Constants used throughout the application
//!
//! This module centralizes magic strings, table text, and other constant values
//! to improve maintainability and consistency.

// Locations
/// Directory name under the XDG config and cache roots
pub const APP_DIR_NAME: &str = "clickup";
pub const CONFIG_FILE_NAME: &str = "config.toml";
pub const LOCAL_CONFIG_FILE_NAME: &str = "clickup-tasks.toml";
pub const DEFAULT_LOG_FILE_NAME: &str = "tasks.log";
/// Extension of cached record files
pub const CACHE_FILE_EXTENSION: &str = "json";

// Remote API
pub const DEFAULT_API_BASE_URL: &str = "https://api.clickup.com/api/v2";
pub const DEFAULT_TOKEN_ENV: &str = "CLICKUP_API_TOKEN";
/// Upper bound accepted for `api.timeout_secs`
pub const MAX_TIMEOUT_SECS: u64 = 300;

// Table
pub const HIERARCHY_SEPARATOR: &str = "/";
pub const TABLE_HEADERS: [&str; 6] = ["Id", "Status", "Hierarchy", "Priority", "Due Date", "Task"];
pub const NO_TASKS_MESSAGE: &str = "No tasks to display";

// Due dates
pub const DUE_DATE_FORMAT: &str = "%Y-%m-%d %H:%M";
pub const OVERDUE_PREFIX: &str = "OVERDUE: ";

// Messages
pub const CONFIG_GENERATED: &str = "✅ Generated default configuration file";
pub const CACHE_CLEARED: &str = "🗑️  Cleared cache";

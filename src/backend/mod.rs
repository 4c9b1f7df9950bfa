//! Backend abstraction over the remote task service.
//!
//! This module defines the read-only interface the sync walks: one fetch
//! operation per level of the hierarchy, each returning the full collection
//! of records below a given parent.

use async_trait::async_trait;

use crate::entities::{Folder, List, Record, Space, Task, Team};

pub mod clickup;
pub mod factory;

/// Common error types for backend operations.
#[derive(Debug, thiserror::Error)]
pub enum BackendError {
    #[error("Authentication failed: {0}")]
    Auth(String),

    #[error("Resource not found: {0}")]
    NotFound(String),

    #[error("Network error: {0}")]
    Network(String),

    #[error("Invalid data: {0}")]
    InvalidData(String),
}

/// Backend trait the hierarchy sync is written against.
///
/// Implementations return whatever the service hands back in a single page;
/// the records keep their JSON payloads so the cache can store them verbatim.
#[async_trait]
pub trait Backend: Send + Sync {
    /// Returns the backend type identifier (e.g., "clickup").
    fn backend_type(&self) -> &str;

    async fn list_authorized_teams(&self) -> Result<Vec<Record<Team>>, BackendError>;
    async fn list_spaces(&self, team_id: &str) -> Result<Vec<Record<Space>>, BackendError>;
    async fn list_folders(&self, space_id: &str) -> Result<Vec<Record<Folder>>, BackendError>;
    async fn list_folderless_lists(&self, space_id: &str) -> Result<Vec<Record<List>>, BackendError>;
    async fn list_lists(&self, folder_id: &str) -> Result<Vec<Record<List>>, BackendError>;
    async fn list_tasks(&self, list_id: &str) -> Result<Vec<Record<Task>>, BackendError>;
}

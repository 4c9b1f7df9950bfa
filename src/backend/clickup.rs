//! ClickUp backend implementation.

use async_trait::async_trait;
use log::debug;
use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION};
use reqwest::StatusCode;
use serde_json::Value;
use std::time::Duration;

use super::{Backend, BackendError};
use crate::entities::{Folder, List, Record, Resource, Space, Task, Team};

/// ClickUp v2 REST API client.
pub struct ClickUpBackend {
    base_url: String,
    client: reqwest::Client,
}

impl ClickUpBackend {
    /// Create a client that authenticates with a personal API token.
    pub fn new(api_token: &str, base_url: &str, timeout: Duration) -> Result<Self, BackendError> {
        let mut token = HeaderValue::from_str(api_token)
            .map_err(|_| BackendError::Auth("API token contains invalid header characters".to_string()))?;
        token.set_sensitive(true);

        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, token);

        let client = reqwest::Client::builder()
            .default_headers(headers)
            .timeout(timeout)
            .build()
            .map_err(|e| BackendError::Network(format!("Failed to create HTTP client: {e}")))?;

        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client,
        })
    }

    /// GET `path` and parse the array found under `T::KIND`'s plural key.
    async fn get_collection<T: Resource>(&self, path: &str) -> Result<Vec<Record<T>>, BackendError> {
        let url = format!("{}{}", self.base_url, path);
        debug!("GET {url}");

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| Self::format_reqwest_error(e, &url))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| BackendError::Network(format!("Failed to read response body from {url}: {e}")))?;

        if !status.is_success() {
            return Err(Self::status_error(status, &url, &body));
        }

        parse_collection(T::KIND.plural(), &body).map_err(|e| BackendError::InvalidData(format!("{url}: {e}")))
    }

    fn format_reqwest_error(e: reqwest::Error, url: &str) -> BackendError {
        if e.is_timeout() {
            BackendError::Network(format!("{url}: timeout - request took too long"))
        } else if e.is_connect() {
            BackendError::Network(format!("{url}: connection error - {e}"))
        } else {
            BackendError::Network(format!("{url}: {e}"))
        }
    }

    fn status_error(status: StatusCode, url: &str, body: &str) -> BackendError {
        let body = if body.len() > 500 {
            let mut end = 500;
            while !body.is_char_boundary(end) {
                end -= 1;
            }
            format!("{}... (truncated)", &body[..end])
        } else {
            body.to_string()
        };
        let message = format!("HTTP {} from {}: {}", status.as_u16(), url, body);

        match status {
            StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => BackendError::Auth(message),
            StatusCode::NOT_FOUND => BackendError::NotFound(message),
            _ => BackendError::Network(message),
        }
    }
}

/// Extract and parse the records wrapped under `key` in a response body.
pub fn parse_collection<T: Resource>(key: &str, body: &str) -> Result<Vec<Record<T>>, String> {
    let mut envelope: Value = serde_json::from_str(body).map_err(|e| format!("malformed JSON: {e}"))?;

    let items = match envelope.get_mut(key).map(Value::take) {
        Some(Value::Array(items)) => items,
        Some(other) => return Err(format!("expected an array under '{key}', got {other}")),
        None => return Err(format!("response has no '{key}' field")),
    };

    items
        .into_iter()
        .map(|item| Record::from_value(item).map_err(|e| format!("invalid {}: {e}", T::KIND)))
        .collect()
}

#[async_trait]
impl Backend for ClickUpBackend {
    fn backend_type(&self) -> &str {
        "clickup"
    }

    async fn list_authorized_teams(&self) -> Result<Vec<Record<Team>>, BackendError> {
        self.get_collection("/team").await
    }

    async fn list_spaces(&self, team_id: &str) -> Result<Vec<Record<Space>>, BackendError> {
        self.get_collection(&format!("/team/{team_id}/space")).await
    }

    async fn list_folders(&self, space_id: &str) -> Result<Vec<Record<Folder>>, BackendError> {
        self.get_collection(&format!("/space/{space_id}/folder")).await
    }

    async fn list_folderless_lists(&self, space_id: &str) -> Result<Vec<Record<List>>, BackendError> {
        self.get_collection(&format!("/space/{space_id}/list")).await
    }

    async fn list_lists(&self, folder_id: &str) -> Result<Vec<Record<List>>, BackendError> {
        self.get_collection(&format!("/folder/{folder_id}/list")).await
    }

    async fn list_tasks(&self, list_id: &str) -> Result<Vec<Record<Task>>, BackendError> {
        self.get_collection(&format!("/list/{list_id}/task")).await
    }
}

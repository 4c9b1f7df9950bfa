//! Backend factory for creating backend instances from configuration.

use anyhow::{anyhow, Result};
use std::time::Duration;

use super::{clickup::ClickUpBackend, Backend};
use crate::config::ApiConfig;

/// Create a backend instance from backend type and API configuration.
///
/// # Errors
/// Returns error if:
/// - Backend type is unknown
/// - No API token can be resolved
/// - The HTTP client cannot be built
pub fn create_backend(backend_type: &str, api: &ApiConfig) -> Result<Box<dyn Backend>> {
    match backend_type {
        "clickup" => {
            let token = api.resolve_token()?;
            let backend = ClickUpBackend::new(&token, &api.base_url, Duration::from_secs(api.timeout_secs))?;
            Ok(Box::new(backend))
        }
        _ => Err(anyhow!("Unknown backend type: {}", backend_type)),
    }
}

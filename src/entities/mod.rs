//! Typed records for the ClickUp resource hierarchy.
//!
//! Every record keeps the JSON object it was parsed from. Only the fields the
//! application inspects are deserialized into the typed view; the payload is
//! what gets persisted in the cache, byte for byte as serialized by
//! `serde_json`.

pub mod hierarchy;
pub mod task;

use serde::de::{DeserializeOwned, Deserializer, Error as _};
use serde::Deserialize;
use serde_json::Value;
use std::fmt;

pub use hierarchy::{Folder, List, Space, Team};
pub use task::{Priority, Reference, Status, Task};

/// The five levels of the containment tree, root first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ResourceKind {
    Team,
    Space,
    Folder,
    List,
    Task,
}

impl ResourceKind {
    /// All kinds, root first.
    pub const ALL: [ResourceKind; 5] = [
        ResourceKind::Team,
        ResourceKind::Space,
        ResourceKind::Folder,
        ResourceKind::List,
        ResourceKind::Task,
    ];

    /// Singular name, used in log lines and error messages.
    pub fn as_str(self) -> &'static str {
        match self {
            ResourceKind::Team => "team",
            ResourceKind::Space => "space",
            ResourceKind::Folder => "folder",
            ResourceKind::List => "list",
            ResourceKind::Task => "task",
        }
    }

    /// Plural name, used for cache directories and API collection keys.
    pub fn plural(self) -> &'static str {
        match self {
            ResourceKind::Team => "teams",
            ResourceKind::Space => "spaces",
            ResourceKind::Folder => "folders",
            ResourceKind::List => "lists",
            ResourceKind::Task => "tasks",
        }
    }
}

impl fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A typed view over one kind of remote resource.
pub trait Resource: DeserializeOwned + Clone + Send + Sync + 'static {
    const KIND: ResourceKind;

    fn id(&self) -> &str;
    fn name(&self) -> &str;
}

/// A parsed resource together with its verbatim JSON payload.
#[derive(Debug, Clone, PartialEq)]
pub struct Record<T> {
    pub data: T,
    pub raw: Value,
}

impl<T: Resource> Record<T> {
    /// Parse the typed view out of a JSON object, keeping the object itself.
    pub fn from_value(raw: Value) -> Result<Self, serde_json::Error> {
        let data = T::deserialize(&raw)?;
        Ok(Self { data, raw })
    }

    /// Parse a record from the bytes of a cached file.
    pub fn from_slice(bytes: &[u8]) -> Result<Self, serde_json::Error> {
        Self::from_value(serde_json::from_slice(bytes)?)
    }

    pub fn id(&self) -> &str {
        self.data.id()
    }

    pub fn name(&self) -> &str {
        self.data.name()
    }
}

/// Accepts a string or a number and yields it as a string.
///
/// ClickUp ids are strings for most resources but plain numbers for some
/// older endpoints.
pub(crate) fn id_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::String(s) => Ok(s),
        Value::Number(n) => Ok(n.to_string()),
        other => Err(D::Error::custom(format!("expected string or number id, got {other}"))),
    }
}

/// Accepts `null`, a number or a numeric string.
pub(crate) fn lenient_i64<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::Null => Ok(None),
        Value::Number(n) => n
            .as_i64()
            .or_else(|| n.as_f64().and_then(integral_f64))
            .map(Some)
            .ok_or_else(|| D::Error::custom(format!("expected an integer in i64 range, got {n}"))),
        Value::String(s) if s.trim().is_empty() => Ok(None),
        Value::String(s) => s
            .trim()
            .parse::<i64>()
            .map(Some)
            .map_err(|e| D::Error::custom(format!("invalid numeric string {s:?}: {e}"))),
        other => Err(D::Error::custom(format!("expected number, got {other}"))),
    }
}

/// `f` as an `i64` when it has no fractional part and fits.
fn integral_f64(f: f64) -> Option<i64> {
    // i64::MAX as f64 rounds up to 2^63, which is already out of range
    let in_range = f >= i64::MIN as f64 && f < i64::MAX as f64;
    (f.fract() == 0.0 && in_range).then_some(f as i64)
}

/// Like [`lenient_i64`] but the value must be present.
pub(crate) fn required_i64<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    lenient_i64(deserializer)?.ok_or_else(|| D::Error::custom("missing numeric value"))
}

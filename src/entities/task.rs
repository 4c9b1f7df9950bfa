//! Task records, the leaves of the hierarchy.

use serde::Deserialize;

use super::{id_string, lenient_i64, required_i64, Resource, ResourceKind};

/// A task as returned by `GET /list/{id}/task`.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct Task {
    #[serde(deserialize_with = "id_string")]
    pub id: String,
    #[serde(default)]
    pub name: String,
    pub status: Status,
    #[serde(default)]
    pub priority: Option<Priority>,
    /// Milliseconds since the epoch.
    #[serde(default, deserialize_with = "lenient_i64")]
    pub date_created: Option<i64>,
    /// Milliseconds since the epoch.
    #[serde(default, deserialize_with = "lenient_i64")]
    pub due_date: Option<i64>,
    #[serde(default, deserialize_with = "optional_id")]
    pub team_id: Option<String>,
    #[serde(default)]
    pub space: Option<Reference>,
    #[serde(default)]
    pub folder: Option<Reference>,
    #[serde(default)]
    pub list: Option<Reference>,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct Status {
    pub status: String,
    #[serde(deserialize_with = "required_i64")]
    pub orderindex: i64,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct Priority {
    pub priority: String,
    #[serde(deserialize_with = "required_i64")]
    pub orderindex: i64,
}

/// Pointer to an ancestor embedded in a task (`{"id": "..."}`).
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct Reference {
    #[serde(deserialize_with = "id_string")]
    pub id: String,
}

impl Task {
    pub fn space_id(&self) -> Option<&str> {
        self.space.as_ref().map(|r| r.id.as_str())
    }

    pub fn folder_id(&self) -> Option<&str> {
        self.folder.as_ref().map(|r| r.id.as_str())
    }

    pub fn list_id(&self) -> Option<&str> {
        self.list.as_ref().map(|r| r.id.as_str())
    }
}

impl Resource for Task {
    const KIND: ResourceKind = ResourceKind::Task;

    fn id(&self) -> &str {
        &self.id
    }

    fn name(&self) -> &str {
        &self.name
    }
}

fn optional_id<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    use serde::de::Error as _;
    use serde_json::Value;

    match Value::deserialize(deserializer)? {
        Value::Null => Ok(None),
        Value::String(s) => Ok(Some(s)),
        Value::Number(n) => Ok(Some(n.to_string())),
        other => Err(D::Error::custom(format!("expected string or number id, got {other}"))),
    }
}

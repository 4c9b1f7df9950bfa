#![allow(dead_code)]

use async_trait::async_trait;
use serde_json::{json, Value};
use std::collections::{HashMap, HashSet};

use clickup_tasks::backend::{Backend, BackendError};
use clickup_tasks::entities::{Folder, List, Record, Resource, Space, Task, Team};

pub fn record<T: Resource>(raw: Value) -> Record<T> {
    Record::from_value(raw).unwrap()
}

pub fn named(id: &str, name: &str) -> Value {
    json!({ "id": id, "name": name })
}

/// A task payload in the shape ClickUp returns it.
pub fn task_json(id: &str, name: &str, list_id: &str) -> Value {
    json!({
        "id": id,
        "name": name,
        "status": { "status": "Open", "orderindex": 0, "color": "#d3d3d3", "type": "open" },
        "priority": null,
        "date_created": "1700000000000",
        "due_date": null,
        "team_id": "t1",
        "space": { "id": "s1" },
        "folder": { "id": "f1", "name": "ignored", "hidden": false },
        "list": { "id": list_id, "name": "ignored" },
        "custom_fields": []
    })
}

pub fn task(id: &str, priority: Option<i64>, status: i64, created: i64) -> Record<Task> {
    let priority = priority.map(|rank| json!({ "id": rank.to_string(), "priority": "p", "color": "#f00", "orderindex": rank.to_string() }));
    record(json!({
        "id": id,
        "name": id,
        "status": { "status": "open", "orderindex": status },
        "priority": priority,
        "date_created": created.to_string(),
    }))
}

/// In-memory stand-in for the ClickUp API.
#[derive(Default)]
pub struct FakeBackend {
    pub teams: Vec<Value>,
    pub spaces: HashMap<String, Vec<Value>>,
    pub folders: HashMap<String, Vec<Value>>,
    pub folderless: HashMap<String, Vec<Value>>,
    pub lists: HashMap<String, Vec<Value>>,
    pub tasks: HashMap<String, Vec<Value>>,
    /// Parent ids whose child request fails.
    pub failing: HashSet<String>,
}

impl FakeBackend {
    /// Acme → Engineering → {Backend folder → Sprint 1, folderless Inbox}.
    pub fn sample() -> Self {
        let mut fake = FakeBackend {
            teams: vec![named("t1", "Acme")],
            ..Default::default()
        };
        fake.spaces.insert("t1".into(), vec![named("s1", "Engineering")]);
        fake.folders.insert("s1".into(), vec![named("f1", "Backend")]);
        fake.folderless.insert("s1".into(), vec![named("l2", "Inbox")]);
        fake.lists.insert("f1".into(), vec![named("l1", "Sprint 1")]);
        fake.tasks.insert(
            "l1".into(),
            vec![task_json("a", "Fix login", "l1"), task_json("b", "Write docs", "l1")],
        );
        fake.tasks.insert("l2".into(), vec![task_json("c", "Triage", "l2")]);
        fake
    }

    fn children<T: Resource>(&self, map: &HashMap<String, Vec<Value>>, parent: &str) -> Result<Vec<Record<T>>, BackendError> {
        if self.failing.contains(parent) {
            return Err(BackendError::Network(format!("request for {parent} failed")));
        }
        Ok(map
            .get(parent)
            .cloned()
            .unwrap_or_default()
            .into_iter()
            .map(record)
            .collect())
    }
}

#[async_trait]
impl Backend for FakeBackend {
    fn backend_type(&self) -> &str {
        "fake"
    }

    async fn list_authorized_teams(&self) -> Result<Vec<Record<Team>>, BackendError> {
        Ok(self.teams.iter().cloned().map(record).collect())
    }

    async fn list_spaces(&self, team_id: &str) -> Result<Vec<Record<Space>>, BackendError> {
        self.children(&self.spaces, team_id)
    }

    async fn list_folders(&self, space_id: &str) -> Result<Vec<Record<Folder>>, BackendError> {
        self.children(&self.folders, space_id)
    }

    async fn list_folderless_lists(&self, space_id: &str) -> Result<Vec<Record<List>>, BackendError> {
        self.children(&self.folderless, space_id)
    }

    async fn list_lists(&self, folder_id: &str) -> Result<Vec<Record<List>>, BackendError> {
        self.children(&self.lists, folder_id)
    }

    async fn list_tasks(&self, list_id: &str) -> Result<Vec<Record<Task>>, BackendError> {
        self.children(&self.tasks, list_id)
    }
}

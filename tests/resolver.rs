mod common;

use serde_json::json;

use clickup_tasks::entities::{Folder, List, Record, ResourceKind, Space, Task, Team};
use clickup_tasks::resolver::NameResolver;
use common::{named, record};

fn resolver() -> NameResolver {
    let teams: Vec<Record<Team>> = vec![record(named("t1", "Acme"))];
    let spaces: Vec<Record<Space>> = vec![record(named("s1", "Engineering"))];
    let folders: Vec<Record<Folder>> = vec![record(named("f1", "Eng"))];
    let lists: Vec<Record<List>> = vec![record(named("l1", "Backend"))];

    let mut resolver = NameResolver::new();
    resolver.insert_all(&teams);
    resolver.insert_all(&spaces);
    resolver.insert_all(&folders);
    resolver.insert_all(&lists);
    resolver
}

fn task(refs: serde_json::Value) -> Task {
    let mut raw = json!({ "id": "x", "name": "X", "status": { "status": "open", "orderindex": 0 } });
    for (key, value) in refs.as_object().unwrap() {
        raw[key] = value.clone();
    }
    record::<Task>(raw).data
}

#[test]
fn test_full_path() {
    let task = task(json!({ "team_id": "t1", "space": {"id": "s1"}, "folder": {"id": "f1"}, "list": {"id": "l1"} }));
    assert_eq!(resolver().hierarchy_path(&task), "Acme/Engineering/Eng/Backend");
}

#[test]
fn test_unresolvable_level_is_skipped() {
    let task = task(json!({ "team_id": "t1", "space": {"id": "missing"}, "folder": {"id": "f1"}, "list": {"id": "l1"} }));
    assert_eq!(resolver().hierarchy_path(&task), "Acme/Eng/Backend");
}

#[test]
fn test_absent_references_are_skipped() {
    let task = task(json!({ "list": {"id": "l1"} }));
    assert_eq!(resolver().hierarchy_path(&task), "Backend");
}

#[test]
fn test_nothing_resolvable_gives_empty_path() {
    let task = task(json!({ "team_id": "nope" }));
    assert_eq!(NameResolver::new().hierarchy_path(&task), "");
    assert_eq!(resolver().hierarchy_path(&task), "");
}

#[test]
fn test_numeric_team_id_resolves() {
    let task = task(json!({ "team_id": 1 }));
    let teams: Vec<Record<Team>> = vec![record(json!({"id": 1, "name": "Numeric"}))];
    let mut resolver = NameResolver::new();
    resolver.insert_all(&teams);
    assert_eq!(resolver.resolve(&task, ResourceKind::Team), Some("Numeric"));
}

#[test]
fn test_task_names_resolve_by_own_id() {
    let tasks: Vec<Record<Task>> = vec![record(json!({ "id": "x", "name": "Ship it", "status": { "status": "open", "orderindex": 0 } }))];
    let mut resolver = resolver();
    resolver.insert_all(&tasks);
    assert_eq!(resolver.resolve(&tasks[0].data, ResourceKind::Task), Some("Ship it"));
    assert_eq!(resolver.name(ResourceKind::List, "l1"), Some("Backend"));
}

mod common;

use chrono::{TimeZone, Utc};
use ratatui::style::{Color, Modifier, Style};
use serde_json::json;

use clickup_tasks::config::StyleConfig;
use clickup_tasks::entities::{List, Record, Task, Team};
use clickup_tasks::resolver::NameResolver;
use clickup_tasks::ui::table::{buffer_lines, render_buffer, write_buffer};
use clickup_tasks::ui::{build_rows, TableStyles, TaskRow};
use common::{named, record};

const NOW: i64 = 1_700_000_000_000;

fn sample_task() -> Record<Task> {
    record(json!({
        "id": "abc1",
        "name": "Fix login",
        "status": { "status": "In Progress", "orderindex": 2 },
        "priority": { "priority": "urgent", "orderindex": "1" },
        "date_created": "1699000000000",
        "due_date": (NOW + 3 * 3_600_000).to_string(),
        "team_id": "t1",
        "list": { "id": "l1" }
    }))
}

fn resolver() -> NameResolver {
    let teams: Vec<Record<Team>> = vec![record(named("t1", "Acme"))];
    let lists: Vec<Record<List>> = vec![record(named("l1", "Sprint 1"))];
    let mut resolver = NameResolver::new();
    resolver.insert_all(&teams);
    resolver.insert_all(&lists);
    resolver
}

#[test]
fn test_row_cells() {
    let now = Utc.timestamp_millis_opt(NOW).unwrap();
    let rows = build_rows(&[sample_task()], &resolver(), &now);

    assert_eq!(
        rows,
        vec![TaskRow {
            id: "abc1".to_string(),
            status: "in progress (2)".to_string(),
            hierarchy: "Acme/Sprint 1".to_string(),
            priority: "urgent (1)".to_string(),
            due: "in 3 hours".to_string(),
            name: "Fix login".to_string(),
        }]
    );
}

#[test]
fn test_row_without_priority_or_due_date() {
    let now = Utc.timestamp_millis_opt(NOW).unwrap();
    let task: Record<Task> = record(json!({ "id": "z", "name": "Bare", "status": { "status": "OPEN", "orderindex": 0 }, "due_date": null }));
    let row = TaskRow::build(&task.data, &NameResolver::new(), &now);
    assert_eq!(row.status, "open (0)");
    assert_eq!(row.priority, "");
    assert_eq!(row.due, "");
    assert_eq!(row.hierarchy, "");
}

#[test]
fn test_table_layout() {
    let now = Utc.timestamp_millis_opt(NOW).unwrap();
    let rows = build_rows(&[sample_task()], &resolver(), &now);
    let buffer = render_buffer(&rows, &TableStyles::default());
    let lines = buffer_lines(&buffer);

    assert_eq!(lines.len(), 4);
    assert!(lines[0].starts_with('┌'));
    assert!(lines[1].contains("Id"));
    assert!(lines[1].contains("Hierarchy"));
    assert!(lines[1].contains("Due Date"));
    assert!(lines[2].contains("abc1"));
    assert!(lines[2].contains("Acme/Sprint 1"));
    assert!(lines[2].contains("Fix login"));
    assert!(lines[3].starts_with('└'));
    // Every line spans the full bordered width
    assert!(lines.iter().all(|l| l.ends_with('┐') || l.ends_with('│') || l.ends_with('┘')));
}

#[test]
fn test_plain_output_has_no_escape_codes() {
    let now = Utc.timestamp_millis_opt(NOW).unwrap();
    let rows = build_rows(&[sample_task()], &resolver(), &now);
    let styles = TableStyles::from_config(&StyleConfig::default()).unwrap();
    let buffer = render_buffer(&rows, &styles);

    let mut plain = Vec::new();
    write_buffer(&mut plain, &buffer, false).unwrap();
    let plain = String::from_utf8(plain).unwrap();
    assert!(!plain.contains('\u{1b}'));
    assert!(plain.contains("Fix login"));

    let mut styled = Vec::new();
    write_buffer(&mut styled, &buffer, true).unwrap();
    assert!(String::from_utf8(styled).unwrap().contains('\u{1b}'));
}

#[test]
fn test_styles_from_config() {
    let config = StyleConfig {
        head: vec!["bold".to_string(), "lightblue".to_string()],
        border: vec![],
        tasks: vec!["#102030".to_string()],
    };
    let styles = TableStyles::from_config(&config).unwrap();
    assert_eq!(styles.head, Style::default().fg(Color::LightBlue).add_modifier(Modifier::BOLD));
    assert_eq!(styles.border, Style::default());
    assert_eq!(styles.tasks, Style::default().fg(Color::Rgb(0x10, 0x20, 0x30)));

    let bad = StyleConfig {
        head: vec!["rainbow".to_string()],
        ..StyleConfig::default()
    };
    assert!(TableStyles::from_config(&bad).is_err());
}

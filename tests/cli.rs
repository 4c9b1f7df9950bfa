use clap::Parser;

use clickup_tasks::cli::Cli;
use clickup_tasks::filter::Filter;

#[test]
fn test_no_arguments() {
    let cli = Cli::try_parse_from(["tasks"]).unwrap();
    assert!(!cli.sync);
    assert_eq!(cli.filter(), Filter::default());
}

#[test]
fn test_repeated_filters_accumulate() {
    let cli = Cli::try_parse_from([
        "tasks", "--sync", "--list", "Sprint 1", "-l", "Sprint 2", "--team", "Acme", "-n", "Fix login",
    ])
    .unwrap();

    assert!(cli.sync);
    let filter = cli.filter();
    assert_eq!(filter.lists, vec!["Sprint 1".to_string(), "Sprint 2".to_string()]);
    assert_eq!(filter.teams, vec!["Acme".to_string()]);
    assert_eq!(filter.tasks, vec!["Fix login".to_string()]);
    assert!(filter.spaces.is_empty());
    assert!(filter.folders.is_empty());
}

#[test]
fn test_filter_requires_a_value() {
    assert!(Cli::try_parse_from(["tasks", "--space"]).is_err());
}

#[test]
fn test_unknown_argument_is_rejected() {
    assert!(Cli::try_parse_from(["tasks", "--bogus"]).is_err());
}

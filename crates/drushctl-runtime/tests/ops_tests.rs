//! Ops-level tests against a scripted runner: argument construction,
//! best-effort collapse, and validation ordering.

use drushctl_runtime::ops::{cache, config, entity, status, user};
use drushctl_runtime::Error;
use drushctl_testing::ScriptedRunner;

#[test]
fn cache_clear_uses_canonical_bin_names() {
    let runner = ScriptedRunner::new();
    cache::clear_bin(&runner, "dynamic").unwrap();
    cache::clear_bin(&runner, "render").unwrap();

    let calls = runner.invocations();
    assert_eq!(calls[0], vec!["drush", "cache:clear", "dynamic_page_cache"]);
    assert_eq!(calls[1], vec!["drush", "cache:clear", "render"]);
}

#[test]
fn cache_stats_collapse_to_none_on_failure() {
    let runner = ScriptedRunner::new();
    runner.push_failure(1, "no backend info");
    assert_eq!(cache::bin_stats(&runner), None);

    let runner = ScriptedRunner::new();
    runner.push_output("Render: 0 items\n");
    assert_eq!(cache::bin_stats(&runner), Some("Render: 0 items".to_string()));
}

#[test]
fn config_list_splits_names_from_eval_output() {
    let runner = ScriptedRunner::new();
    runner.push_output("system.site\nsystem.theme\nnode.settings\n");

    let names = config::list_names(&runner).unwrap();
    assert_eq!(names, vec!["system.site", "system.theme", "node.settings"]);
    assert_eq!(runner.invocations()[0][1], "php:eval");
}

#[test]
fn config_search_failure_is_not_fatal() {
    let runner = ScriptedRunner::new();
    runner.push_failure(1, "site offline");
    assert_eq!(config::search_names(&runner, "system").unwrap(), None);
}

#[test]
fn config_search_rejects_bad_patterns_before_running() {
    let runner = ScriptedRunner::new();
    let err = config::search_names(&runner, "system\"; rm -rf /");
    assert!(matches!(err, Err(Error::InvalidIdentifier { .. })));
    assert_eq!(runner.call_count(), 0);
}

#[test]
fn config_get_passes_format_flag_only_for_export() {
    let runner = ScriptedRunner::new();
    config::get(&runner, "system.site").unwrap();
    config::export_json(&runner, "system.site").unwrap();

    let calls = runner.invocations();
    assert_eq!(calls[0], vec!["drush", "config:get", "system.site"]);
    assert_eq!(
        calls[1],
        vec!["drush", "config:get", "system.site", "--format=json"]
    );
}

#[test]
fn entity_type_is_validated_before_any_command() {
    let runner = ScriptedRunner::new();
    let err = entity::list(&runner, "node; drop table");
    assert!(matches!(err, Err(Error::InvalidIdentifier { .. })));
    assert_eq!(runner.call_count(), 0);

    assert_eq!(entity::count(&runner, "Node!"), None);
    assert_eq!(runner.call_count(), 0);
}

#[test]
fn entity_view_and_list_use_structured_commands() {
    let runner = ScriptedRunner::new();
    runner.push_output("nid: 1\ntitle: Hello\n");
    entity::view(&runner, "node", "1").unwrap();
    entity::list(&runner, "node").unwrap();

    let calls = runner.invocations();
    assert_eq!(calls[0], vec!["drush", "entity:view", "node", "1"]);
    assert_eq!(calls[1], vec!["drush", "entity:query", "node"]);
}

#[test]
fn entity_count_is_best_effort() {
    let runner = ScriptedRunner::new();
    runner.push_output(" 42 ");
    assert_eq!(entity::count(&runner, "node"), Some("42".to_string()));

    let runner = ScriptedRunner::new();
    runner.push_failure(255, "eval disabled");
    assert_eq!(entity::count(&runner, "node"), None);
}

#[test]
fn status_report_formats_map_to_drush_flags() {
    let runner = ScriptedRunner::new();
    status::report(&runner, status::StatusFormat::Plain).unwrap();
    status::report(&runner, status::StatusFormat::Json).unwrap();
    status::report(&runner, status::StatusFormat::Full).unwrap();

    let calls = runner.invocations();
    assert_eq!(calls[0], vec!["drush", "status"]);
    assert_eq!(calls[1], vec!["drush", "status", "--format=json"]);
    assert_eq!(calls[2], vec!["drush", "status", "--full"]);
}

#[test]
fn drush_version_extracts_or_falls_back_to_unknown() {
    let runner = ScriptedRunner::new();
    runner.push_output("Drush 11.2.3.0\n");
    assert_eq!(status::drush_version(&runner), Some("11.2.3.0".to_string()));

    let runner = ScriptedRunner::new();
    runner.push_output("Drush version 12.5\n");
    assert_eq!(status::drush_version(&runner), Some("unknown".to_string()));

    let runner = ScriptedRunner::new();
    runner.push_failure(127, "not found");
    assert_eq!(status::drush_version(&runner), None);
}

#[test]
fn php_version_takes_the_second_token_of_the_first_line() {
    let runner = ScriptedRunner::new();
    runner.push_output("PHP 8.2.1 (cli) (built: Jan  1 2024)\nCopyright (c) The PHP Group\n");
    assert_eq!(status::php_version(&runner), Some("8.2.1".to_string()));
    assert_eq!(runner.invocations()[0], vec!["php", "-v"]);
}

#[test]
fn user_list_parses_pipe_delimited_records() {
    let runner = ScriptedRunner::new();
    runner.push_output("1|admin|admin@example.com\n2|editor|\n");

    let users = user::list(&runner).unwrap();
    assert_eq!(users.len(), 2);
    assert_eq!(users[0].name, "admin");
    assert_eq!(users[1].email, "");
}

#[test]
fn user_view_passes_the_argument_as_argv_only() {
    let runner = ScriptedRunner::new();
    user::view(&runner, "admin (weird name)").unwrap();
    assert_eq!(
        runner.invocations()[0],
        vec!["drush", "user:information", "admin (weird name)"]
    );
}

#[test]
fn user_status_counts_are_best_effort() {
    let runner = ScriptedRunner::new();
    runner.push_output("Active: 20, Blocked: 5\n");
    assert_eq!(
        user::status_counts(&runner),
        Some("Active: 20, Blocked: 5".to_string())
    );

    let runner = ScriptedRunner::new();
    runner.push_failure(1, "query failed");
    assert_eq!(user::status_counts(&runner), None);
}

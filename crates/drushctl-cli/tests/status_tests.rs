use drushctl_testing::CliFixture;
use predicates::prelude::*;

fn status_script() -> &'static str {
    r#"case "$1" in
status) printf 'Drupal version : 10.2.1\nDB driver      : mysql\n' ;;
--version) echo 'Drush 11.2.3.0' ;;
esac
exit 0"#
}

#[test]
fn default_mode_appends_interpreter_and_tool_versions() {
    let fixture = CliFixture::new();
    fixture.install_drush(status_script()).unwrap();
    fixture
        .install_php("echo 'PHP 8.2.1 (cli) (built: Jan  1 2024 00:00:00)'")
        .unwrap();

    fixture
        .command()
        .arg("status")
        .assert()
        .success()
        .stdout(predicate::str::contains("Drupal version : 10.2.1"))
        .stdout(predicate::str::contains("PHP Version: 8.2.1"))
        .stdout(predicate::str::contains("Drush: 11.2.3.0"));

    let calls = fixture.calls();
    assert_eq!(calls[0], "drush status");
    assert!(calls.contains(&"php -v".to_string()));
    assert!(calls.contains(&"drush --version".to_string()));
}

#[test]
fn unrecognized_version_text_reads_unknown() {
    let fixture = CliFixture::new();
    fixture
        .install_drush(
            "case \"$1\" in\nstatus) echo 'ok' ;;\n--version) echo 'Drush version 12.5' ;;\nesac\nexit 0",
        )
        .unwrap();
    fixture.install_php("exit 1").unwrap();

    fixture
        .command()
        .arg("status")
        .assert()
        .success()
        .stdout(predicate::str::contains("Drush: unknown"));
}

#[test]
fn json_mode_passes_through_and_skips_extras() {
    let fixture = CliFixture::new();
    fixture
        .install_drush("case \"$1\" in status) echo '{\"drupal-version\": \"10.2.1\"}' ;; esac\nexit 0")
        .unwrap();

    fixture
        .command()
        .args(["status", "--json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("drupal-version"));

    let calls = fixture.calls();
    assert_eq!(calls[0], "drush status --format=json");
    assert_eq!(calls.len(), 1, "no version lookups in json mode");
}

#[test]
fn verbose_mode_asks_for_the_full_report() {
    let fixture = CliFixture::new();

    fixture.command().args(["status", "--verbose"]).assert().success();

    let calls = fixture.calls();
    assert_eq!(calls[0], "drush status --full");
    assert_eq!(calls.len(), 1);
}

#[test]
fn failed_version_lookups_never_affect_exit_status() {
    let fixture = CliFixture::new();
    fixture
        .install_drush(
            "case \"$1\" in\nstatus) echo 'Drupal version : 10.2.1' ;;\n--version) exit 1 ;;\nesac\nexit 0",
        )
        .unwrap();
    fixture.install_php("exit 1").unwrap();

    fixture
        .command()
        .arg("status")
        .assert()
        .success()
        .stdout(predicate::str::contains("PHP Version").not())
        .stdout(predicate::str::contains("Drush:").not());
}

#[test]
fn primary_status_failure_is_fatal() {
    let fixture = CliFixture::new();
    fixture
        .install_drush("echo 'not a drupal site' >&2\nexit 1")
        .unwrap();

    fixture
        .command()
        .arg("status")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Failed to get system status"))
        .stderr(predicate::str::contains("not a drupal site"));
}

use drushctl_testing::CliFixture;
use predicates::prelude::*;

fn listing_script() -> &'static str {
    r#"case "$1" in
php:eval)
  echo "node.settings"
  i=1
  while [ $i -le 12 ]; do echo "system.item$i"; i=$((i+1)); done
  echo "block.block.header"
  ;;
esac
exit 0"#
}

#[test]
fn listing_groups_names_alphabetically_with_truncation() {
    let fixture = CliFixture::new();
    fixture.install_drush(listing_script()).unwrap();

    let output = fixture
        .command()
        .arg("config-list")
        .output()
        .expect("Failed to run config-list");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);

    let block = stdout.find("block:").expect("block group present");
    let node = stdout.find("node:").expect("node group present");
    let system = stdout.find("system:").expect("system group present");
    assert!(block < node && node < system, "groups sorted alphabetically");

    // Truncated after the 10th member, input order preserved
    assert!(stdout.contains("  - system.item1\n"));
    assert!(stdout.contains("  - system.item10\n"));
    assert!(!stdout.contains("  - system.item11\n"));
    assert!(stdout.contains("  ... and 2 more"));
    assert!(stdout.contains("Total configuration items: 14"));
}

#[test]
fn viewing_one_name_delegates_to_config_get() {
    let fixture = CliFixture::new();
    fixture
        .install_drush("case \"$1\" in config:get) printf 'uuid: abc\\nname: Example\\n' ;; esac\nexit 0")
        .unwrap();

    fixture
        .command()
        .args(["config-list", "system.site"])
        .assert()
        .success()
        .stdout(predicate::str::contains("uuid: abc"));

    assert_eq!(fixture.calls()[0], "drush config:get system.site");
}

#[test]
fn export_asks_for_json() {
    let fixture = CliFixture::new();
    fixture
        .install_drush("case \"$1\" in config:get) echo '{\"name\": \"Example\"}' ;; esac\nexit 0")
        .unwrap();

    fixture
        .command()
        .args(["config-list", "--export", "system.site"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"name\""));

    assert_eq!(
        fixture.calls()[0],
        "drush config:get system.site --format=json"
    );
}

#[test]
fn export_without_a_name_is_an_argument_error() {
    let fixture = CliFixture::new();

    fixture
        .command()
        .args(["config-list", "--export"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("requires a configuration name"));

    assert!(fixture.calls().is_empty());
}

#[test]
fn search_prints_matches_flat() {
    let fixture = CliFixture::new();
    fixture
        .install_drush(
            "case \"$1\" in php:eval) printf 'system.site\\nsystem.theme\\n' ;; esac\nexit 0",
        )
        .unwrap();

    fixture
        .command()
        .args(["config-list", "--search", "system"])
        .assert()
        .success()
        .stdout(predicate::str::contains("system.site"))
        .stdout(predicate::str::contains("system.theme"));

    assert!(fixture.calls()[0].contains("listAll(\"system\")"));
}

#[test]
fn failed_search_reports_no_matches_and_exits_zero() {
    let fixture = CliFixture::new();
    fixture
        .install_drush("case \"$1\" in php:eval) exit 1 ;; esac\nexit 0")
        .unwrap();

    fixture
        .command()
        .args(["config-list", "--search", "nosuch"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No matching configuration found"));
}

#[test]
fn hostile_search_pattern_is_rejected_before_running() {
    let fixture = CliFixture::new();

    fixture
        .command()
        .args(["config-list", "--search", "a\"); system(\"id"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("invalid search pattern"));

    assert!(fixture.calls().is_empty());
}

//! User listing, lookup, and role grouping.

use crate::invocation::DrushInvocation;
use crate::runner::{DrushRunner, best_effort};
use crate::Result;
use serde::Serialize;

/// Pipe-delimited user listing: one `uid|name|mail` record per line.
const USER_LIST_SNIPPET: &str = r#"
$ids = \Drupal::entityQuery("user")->accessCheck(TRUE)->condition("uid", 0, ">")->execute();
foreach (\Drupal\user\Entity\User::loadMultiple($ids) as $account) {
  echo $account->id() . "|" . $account->getAccountName() . "|" . $account->getEmail() . "\n";
}
"#;

const USERS_BY_ROLE_SNIPPET: &str = r#"
$ids = \Drupal::entityQuery("user")->accessCheck(TRUE)->execute();
$by_role = [];
foreach (\Drupal\user\Entity\User::loadMultiple($ids) as $account) {
  foreach ($account->getRoles() as $role) {
    $by_role[$role][] = $account->getAccountName() . " (ID: " . $account->id() . ")";
  }
}
foreach ($by_role as $role => $members) {
  echo $role . ":\n";
  foreach ($members as $member) {
    echo "  - " . $member . "\n";
  }
  echo "\n";
}
"#;

const USER_STATUS_SNIPPET: &str = r#"
$active = \Drupal::entityQuery("user")->accessCheck(TRUE)->condition("status", 1)->count()->execute();
$blocked = \Drupal::entityQuery("user")->accessCheck(TRUE)->condition("status", 0)->count()->execute();
echo "Active: $active, Blocked: $blocked\n";
"#;

/// One parsed user record from the pipe-delimited listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UserRecord {
    pub id: u64,
    pub name: String,
    pub email: String,
}

/// All users as structured records. Primary, fatal.
pub fn list(runner: &dyn DrushRunner) -> Result<Vec<UserRecord>> {
    let output = runner.run(&DrushInvocation::eval(USER_LIST_SNIPPET.to_string()))?;
    Ok(parse_records(&output.stdout))
}

/// One user by name or uid, rendered by Drush. Primary, fatal.
pub fn view(runner: &dyn DrushRunner, name_or_id: &str) -> Result<String> {
    let output = runner.run(&DrushInvocation::drush(["user:information", name_or_id]))?;
    Ok(output.trimmed_stdout().to_string())
}

/// Users grouped by assigned role. Primary, fatal.
pub fn by_role(runner: &dyn DrushRunner) -> Result<String> {
    let output = runner.run(&DrushInvocation::eval(USERS_BY_ROLE_SNIPPET.to_string()))?;
    Ok(output.trimmed_stdout().to_string())
}

/// Active/blocked counts. Secondary, best-effort.
pub fn status_counts(runner: &dyn DrushRunner) -> Option<String> {
    best_effort(runner.run(&DrushInvocation::eval(USER_STATUS_SNIPPET.to_string())))
}

/// Parse `uid|name|mail` lines into fixed-arity records.
///
/// Lines with a non-numeric uid or fewer than two fields are skipped;
/// a missing mail field parses as an empty string.
pub fn parse_records(text: &str) -> Vec<UserRecord> {
    text.lines()
        .filter_map(|line| {
            let line = line.trim();
            if line.is_empty() {
                return None;
            }
            let mut fields = line.splitn(3, '|');
            let id = fields.next()?.trim().parse().ok()?;
            let name = fields.next()?.trim().to_string();
            let email = fields.next().unwrap_or("").trim().to_string();
            Some(UserRecord { id, name, email })
        })
        .collect()
}

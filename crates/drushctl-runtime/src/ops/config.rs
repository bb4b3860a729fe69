//! Configuration listing, lookup, and export.

use crate::invocation::{DrushInvocation, validate_config_name};
use crate::runner::{DrushRunner, best_effort};
use crate::Result;

const CONFIG_LIST_SNIPPET: &str = r#"
foreach (\Drupal::configFactory()->listAll() as $name) {
  echo $name . "\n";
}
"#;

fn search_snippet(pattern: &str) -> String {
    format!(
        r#"
foreach (\Drupal::configFactory()->listAll("{pattern}") as $name) {{
  echo $name . "\n";
}}
"#
    )
}

/// Every configuration object name on the site. Primary, fatal.
pub fn list_names(runner: &dyn DrushRunner) -> Result<Vec<String>> {
    let output = runner.run(&DrushInvocation::eval(CONFIG_LIST_SNIPPET.to_string()))?;
    Ok(split_names(&output.stdout))
}

/// Names matching a prefix pattern. Secondary: a failed or empty lookup
/// renders as "no matches" rather than failing the invocation. An empty
/// pattern matches everything, mirroring `listAll("")`.
pub fn search_names(runner: &dyn DrushRunner, pattern: &str) -> Result<Option<Vec<String>>> {
    if !pattern.is_empty() {
        validate_config_name("search pattern", pattern)?;
    }
    let names = best_effort(runner.run(&DrushInvocation::eval(search_snippet(pattern))))
        .map(|text| split_names(&text));
    Ok(names)
}

/// One configuration object, rendered by Drush. Primary, fatal.
pub fn get(runner: &dyn DrushRunner, name: &str) -> Result<String> {
    validate_config_name("config name", name)?;
    let output = runner.run(&DrushInvocation::drush(["config:get", name]))?;
    Ok(output.trimmed_stdout().to_string())
}

/// One configuration object as JSON. Primary, fatal.
pub fn export_json(runner: &dyn DrushRunner, name: &str) -> Result<String> {
    validate_config_name("config name", name)?;
    let output = runner.run(&DrushInvocation::drush(["config:get", name, "--format=json"]))?;
    Ok(output.trimmed_stdout().to_string())
}

fn split_names(text: &str) -> Vec<String> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}

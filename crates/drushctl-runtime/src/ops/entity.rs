//! Entity viewing, listing, and counting.
//!
//! Primary data always comes from the structured `entity:*` commands;
//! php:eval is used only for the count Drush has no command for. No
//! access-check bypass is requested, so listings reflect what the Drush
//! account may see.

use crate::invocation::{DrushInvocation, validate_machine_name};
use crate::runner::{DrushRunner, best_effort};
use crate::Result;

fn count_snippet(entity_type: &str) -> String {
    format!(
        "echo \\Drupal::entityQuery(\"{entity_type}\")->accessCheck(TRUE)->count()->execute();"
    )
}

/// Render one entity's fields. Primary, fatal.
pub fn view(runner: &dyn DrushRunner, entity_type: &str, entity_id: &str) -> Result<String> {
    validate_machine_name("entity type", entity_type)?;
    let output = runner.run(&DrushInvocation::drush(["entity:view", entity_type, entity_id]))?;
    Ok(output.trimmed_stdout().to_string())
}

/// List recent entities of a type. Primary, fatal.
pub fn list(runner: &dyn DrushRunner, entity_type: &str) -> Result<String> {
    validate_machine_name("entity type", entity_type)?;
    let output = runner.run(&DrushInvocation::drush(["entity:query", entity_type]))?;
    Ok(output.trimmed_stdout().to_string())
}

/// Total entity count for a type. Secondary, best-effort.
pub fn count(runner: &dyn DrushRunner, entity_type: &str) -> Option<String> {
    if validate_machine_name("entity type", entity_type).is_err() {
        return None;
    }
    best_effort(runner.run(&DrushInvocation::eval(count_snippet(entity_type))))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn count_snippet_embeds_the_validated_type() {
        let snippet = count_snippet("taxonomy_term");
        assert!(snippet.contains("entityQuery(\"taxonomy_term\")"));
        assert!(snippet.contains("accessCheck(TRUE)"));
    }
}

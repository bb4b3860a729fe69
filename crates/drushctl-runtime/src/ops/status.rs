//! System status reporting and version lookups.

use crate::invocation::DrushInvocation;
use crate::runner::{DrushRunner, best_effort};
use crate::Result;
use once_cell::sync::Lazy;
use regex::Regex;

static VERSION_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(\d+\.\d+\.\d+\.\d+)").expect("valid regex"));

/// How much status detail to request from Drush.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusFormat {
    Plain,
    Json,
    Full,
}

/// The status report itself. Primary, fatal.
pub fn report(runner: &dyn DrushRunner, format: StatusFormat) -> Result<String> {
    let invocation = match format {
        StatusFormat::Plain => DrushInvocation::drush(vec!["status"]),
        StatusFormat::Json => DrushInvocation::drush(vec!["status", "--format=json"]),
        StatusFormat::Full => DrushInvocation::drush(vec!["status", "--full"]),
    };
    let output = runner.run(&invocation)?;
    Ok(output.trimmed_stdout().to_string())
}

/// Interpreter version from `php -v`. Secondary, best-effort.
pub fn php_version(runner: &dyn DrushRunner) -> Option<String> {
    let text = best_effort(runner.run(&DrushInvocation::tool("php", ["-v"])))?;
    let first_line = text.lines().next()?;
    first_line.split_whitespace().nth(1).map(str::to_string)
}

/// Drush's own version line, reduced to a dotted version number.
///
/// `None` means the lookup itself failed; a successful lookup with no
/// recognizable version number yields `"unknown"`.
pub fn drush_version(runner: &dyn DrushRunner) -> Option<String> {
    let text = best_effort(runner.run(&DrushInvocation::drush(["--version"])))?;
    let first_line = text.lines().next().unwrap_or("");
    Some(extract_version(first_line).unwrap_or_else(|| "unknown".to_string()))
}

/// Pull a four-part version number out of free-form version text.
pub fn extract_version(text: &str) -> Option<String> {
    VERSION_RE
        .captures(text)
        .map(|caps| caps[1].to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extracts_a_four_part_version() {
        assert_eq!(
            extract_version("Drush 11.2.3.0"),
            Some("11.2.3.0".to_string())
        );
        assert_eq!(
            extract_version("Drush Commandline Tool 12.0.1.4-dev"),
            Some("12.0.1.4".to_string())
        );
    }

    #[test]
    fn no_match_means_none() {
        assert_eq!(extract_version("Drush 12.5"), None);
        assert_eq!(extract_version(""), None);
        assert_eq!(extract_version("no numbers here"), None);
    }
}

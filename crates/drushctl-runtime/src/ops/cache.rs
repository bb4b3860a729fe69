//! Cache bin clearing and post-clear statistics.

use crate::invocation::DrushInvocation;
use crate::runner::{DrushRunner, best_effort};
use crate::Result;

/// The fixed vocabulary of clearable cache bins. `all` rebuilds everything.
pub const CACHE_BINS: &[&str] = &[
    "all",
    "render",
    "bootstrap",
    "config",
    "menu",
    "page",
    "dynamic",
    "discovery",
    "static",
];

/// Item counts for a few well-known bins, shown after clearing.
const CACHE_STATS_SNIPPET: &str = r#"
$bins = ["render", "bootstrap", "config"];
foreach ($bins as $bin) {
  $backend = \Drupal::cache($bin);
  if (method_exists($backend, "getBackend")) {
    $info = $backend->getBackend()->getInfo();
    echo ucfirst($bin) . ": " . ($info["count"] ?? 0) . " items\n";
  }
}
"#;

pub fn is_valid_bin(name: &str) -> bool {
    CACHE_BINS.contains(&name)
}

/// Map the short CLI name to the bin name Drush knows.
pub fn canonical_bin(name: &str) -> &str {
    match name {
        "dynamic" => "dynamic_page_cache",
        other => other,
    }
}

/// Rebuild every cache. Primary, fatal on failure.
pub fn clear_all(runner: &dyn DrushRunner) -> Result<String> {
    let output = runner.run(&DrushInvocation::drush(["cache:clear"]))?;
    Ok(output.trimmed_stdout().to_string())
}

/// Regenerate CSS/JS aggregates after a full rebuild. Primary, fatal.
pub fn optimize_assets(runner: &dyn DrushRunner) -> Result<()> {
    runner.run(&DrushInvocation::drush(["asset:optimize"]))?;
    Ok(())
}

/// Clear a single named bin. Primary, fatal on failure.
pub fn clear_bin(runner: &dyn DrushRunner, bin: &str) -> Result<()> {
    runner.run(&DrushInvocation::drush(["cache:clear", canonical_bin(bin)]))?;
    Ok(())
}

/// Post-clear item counts. Secondary, best-effort.
pub fn bin_stats(runner: &dyn DrushRunner) -> Option<String> {
    best_effort(runner.run(&DrushInvocation::eval(CACHE_STATS_SNIPPET.to_string())))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vocabulary_is_closed() {
        assert!(is_valid_bin("all"));
        assert!(is_valid_bin("render"));
        assert!(is_valid_bin("static"));
        assert!(!is_valid_bin("bogus"));
        assert!(!is_valid_bin("Render"));
        assert!(!is_valid_bin(""));
    }

    #[test]
    fn dynamic_maps_to_its_full_bin_name() {
        assert_eq!(canonical_bin("dynamic"), "dynamic_page_cache");
        assert_eq!(canonical_bin("render"), "render");
        assert_eq!(canonical_bin("discovery"), "discovery");
    }
}

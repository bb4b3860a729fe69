use crate::presentation::formatters;
use anyhow::{Context, Result, bail};
use drushctl_runtime::DrushRunner;
use drushctl_runtime::ops::cache;

pub fn handle(runner: &dyn DrushRunner, bins: Vec<String>) -> Result<()> {
    let bins = if bins.is_empty() {
        vec!["all".to_string()]
    } else {
        bins
    };

    // Reject the whole invocation before anything external runs
    let invalid: Vec<&str> = bins
        .iter()
        .map(String::as_str)
        .filter(|bin| !cache::is_valid_bin(bin))
        .collect();
    if !invalid.is_empty() {
        bail!(
            "Invalid cache bin(s): {}\nValid bins: {}",
            invalid.join(", "),
            cache::CACHE_BINS.join(", ")
        );
    }

    if bins.iter().any(|bin| bin == "all") {
        println!("Clearing all caches...");
        let output = cache::clear_all(runner).context("Failed to clear cache")?;
        if !output.is_empty() {
            println!("{}", output);
        }

        println!("\nOptimizing CSS and JavaScript...");
        cache::optimize_assets(runner).context("Failed to optimize assets")?;
        println!("Asset optimization complete");
    } else {
        println!("Clearing caches: {}", bins.join(", "));

        // Bins clear in the supplied order; a later failure is still
        // fatal even though earlier bins are already cleared.
        for bin in &bins {
            println!("\nClearing {} cache...", bin);
            cache::clear_bin(runner, bin)
                .with_context(|| format!("Failed to clear {} cache", bin))?;
        }

        println!("\n{}", formatters::success("✓ Cache clearing complete"));
    }

    println!("\n{}", formatters::heading("--- Cache Status ---"));
    match cache::bin_stats(runner) {
        Some(stats) => println!("{}", stats),
        None => println!("Cache status not available"),
    }

    Ok(())
}

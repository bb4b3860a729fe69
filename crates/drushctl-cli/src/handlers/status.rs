use crate::presentation::view_models::StatusViewModel;
use crate::presentation::views::StatusView;
use anyhow::{Context, Result};
use drushctl_runtime::DrushRunner;
use drushctl_runtime::ops::status::{self, StatusFormat};

pub fn handle(runner: &dyn DrushRunner, json: bool, verbose: bool) -> Result<()> {
    if json {
        // Drush renders the JSON itself; pass it through untouched
        let report = status::report(runner, StatusFormat::Json)
            .context("Failed to get system status")?;
        println!("{}", report);
        return Ok(());
    }

    if verbose {
        let report = status::report(runner, StatusFormat::Full)
            .context("Failed to get system status")?;
        println!("{}", report);
        return Ok(());
    }

    let report =
        status::report(runner, StatusFormat::Plain).context("Failed to get system status")?;
    let view_model = StatusViewModel {
        report,
        php_version: status::php_version(runner),
        drush_version: status::drush_version(runner),
    };
    print!("{}", StatusView::new(&view_model));
    Ok(())
}

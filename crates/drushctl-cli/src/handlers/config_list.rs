use crate::presentation::presenters;
use crate::presentation::views::ConfigGroupsView;
use anyhow::{Context, Result};
use drushctl_runtime::DrushRunner;
use drushctl_runtime::ops::config;

pub fn handle(
    runner: &dyn DrushRunner,
    name: Option<String>,
    search: bool,
    export: bool,
) -> Result<()> {
    if search {
        let pattern = name.unwrap_or_default();
        match config::search_names(runner, &pattern)? {
            Some(names) if !names.is_empty() => {
                for name in names {
                    println!("{}", name);
                }
            }
            _ => println!("No matching configuration found"),
        }
        return Ok(());
    }

    if export {
        let name = name.context("--export requires a configuration name")?;
        let json = config::export_json(runner, &name).context("Failed to get configuration")?;
        println!("{}", json);
        return Ok(());
    }

    if let Some(name) = name {
        let output = config::get(runner, &name).context("Failed to get configuration")?;
        println!("{}", output);
        return Ok(());
    }

    let names = config::list_names(runner).context("Failed to get configuration")?;
    let view_model = presenters::present_config_groups(names);
    print!("{}", ConfigGroupsView::new(&view_model));
    Ok(())
}

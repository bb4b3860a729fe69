use crate::args::{Cli, Commands};
use crate::handlers;
use anyhow::{Context, Result};
use drushctl_runtime::{Config, SystemRunner, resolve_data_dir};

pub fn run(cli: Cli) -> Result<()> {
    let data_dir = resolve_data_dir(cli.data_dir.as_deref())?;
    let config = Config::load_from(&data_dir.join("config.toml"))
        .context("Failed to load configuration")?;
    let runner = SystemRunner::new(&config);

    match cli.command {
        Commands::CacheClear { bins } => handlers::cache_clear::handle(&runner, bins),

        Commands::ConfigList {
            name,
            search,
            export,
        } => handlers::config_list::handle(&runner, name, search, export),

        Commands::EntityInfo {
            entity_type,
            entity_id,
            json,
        } => handlers::entity_info::handle(&runner, entity_type, entity_id, json),

        Commands::Status { json, verbose } => handlers::status::handle(&runner, json, verbose),

        Commands::UserInfo { user, roles, json } => {
            handlers::user_info::handle(&runner, user, roles, json)
        }
    }
}

use clap::Subcommand;

// Cache bins are NOT a clap ValueEnum on purpose: a bad bin name must
// exit 1 with the vocabulary listed, while clap usage errors exit 2.
// The handler validates bins before anything external runs.

#[derive(Subcommand)]
pub enum Commands {
    #[command(name = "cache-clear")]
    #[command(about = "Clear one or more Drupal cache bins (default: all)")]
    CacheClear {
        /// Cache bins to clear, in order
        bins: Vec<String>,
    },

    #[command(name = "config-list")]
    #[command(about = "List, search, view, or export site configuration")]
    ConfigList {
        /// Configuration name to view/export, or search pattern with --search
        name: Option<String>,

        /// Search configuration names by prefix pattern
        #[arg(long)]
        search: bool,

        /// Export one configuration object as JSON
        #[arg(long)]
        export: bool,
    },

    #[command(name = "entity-info")]
    #[command(about = "List recent entities of a type or view a single entity")]
    EntityInfo {
        /// Entity type (node, user, taxonomy_term, comment, file, ...)
        entity_type: Option<String>,

        /// Entity id; omit to list recent entities with a total count
        entity_id: Option<String>,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    #[command(about = "Report system status")]
    Status {
        /// Ask Drush for the status report as JSON
        #[arg(long)]
        json: bool,

        /// Ask Drush for the full status report
        #[arg(long)]
        verbose: bool,
    },

    #[command(name = "user-info")]
    #[command(about = "List users, view one user, or group users by role")]
    UserInfo {
        /// Username or uid; omit to list all users
        user: Option<String>,

        /// Group users by assigned role
        #[arg(long)]
        roles: bool,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}

pub mod config;
pub mod error;
pub mod invocation;
pub mod ops;
pub mod runner;

pub use config::{Config, SiteConfig, resolve_data_dir};
pub use error::{Error, Result};
pub use invocation::DrushInvocation;
pub use runner::{CommandOutput, DrushRunner, SystemRunner, best_effort};

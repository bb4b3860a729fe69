mod args;
mod commands;
mod handlers;
mod presentation;

pub use args::{Cli, Commands};
pub use commands::run;

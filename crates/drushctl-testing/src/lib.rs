//! Testing infrastructure for drushctl tests.
//!
//! - `runner`: a scripted [`drushctl_runtime::DrushRunner`] that records
//!   invocations and replays canned outputs, for unit-level tests.
//! - `fixtures`: a CLI fixture that fakes the `drush` executable on disk
//!   and logs its argv, for end-to-end `assert_cmd` tests.

pub mod fixtures;
pub mod runner;

pub use fixtures::CliFixture;
pub use runner::ScriptedRunner;

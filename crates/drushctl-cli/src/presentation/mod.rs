//! Console output, split the usual way: view models hold raw data and
//! serialize as-is for `--json`; presenters do the grouping and count
//! math; views own layout and styling for the plain rendering.

pub mod formatters;
pub mod presenters;
pub mod renderer;
pub mod view_models;
pub mod views;

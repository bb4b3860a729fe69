//! Plain-text layout for each view model.

use crate::presentation::formatters;
use crate::presentation::view_models::{
    ConfigGroupsViewModel, EntityListViewModel, StatusViewModel, UserListViewModel,
};
use std::fmt;

/// Per-group member cap in the configuration listing.
pub const GROUP_DISPLAY_LIMIT: usize = 10;

/// Row cap in the user listing.
pub const USER_DISPLAY_LIMIT: usize = 20;

pub struct ConfigGroupsView<'a> {
    data: &'a ConfigGroupsViewModel,
}

impl<'a> ConfigGroupsView<'a> {
    pub fn new(data: &'a ConfigGroupsViewModel) -> Self {
        Self { data }
    }
}

impl fmt::Display for ConfigGroupsView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "\n{}", formatters::heading("--- Configuration Groups ---"))?;

        for group in &self.data.groups {
            writeln!(f, "\n{}:", group.name)?;
            for member in group.members.iter().take(GROUP_DISPLAY_LIMIT) {
                writeln!(f, "  - {}", member)?;
            }
            if group.members.len() > GROUP_DISPLAY_LIMIT {
                writeln!(
                    f,
                    "  ... and {} more",
                    group.members.len() - GROUP_DISPLAY_LIMIT
                )?;
            }
        }

        writeln!(f, "\n\nTotal configuration items: {}", self.data.total)
    }
}

pub struct EntityListView<'a> {
    data: &'a EntityListViewModel,
}

impl<'a> EntityListView<'a> {
    pub fn new(data: &'a EntityListViewModel) -> Self {
        Self { data }
    }
}

impl fmt::Display for EntityListView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if !self.data.listing.is_empty() {
            writeln!(f, "{}", self.data.listing)?;
        }
        if let Some(total) = &self.data.total {
            writeln!(f, "\nTotal {}s: {}", self.data.entity_type, total)?;
        }
        Ok(())
    }
}

pub struct StatusView<'a> {
    data: &'a StatusViewModel,
}

impl<'a> StatusView<'a> {
    pub fn new(data: &'a StatusViewModel) -> Self {
        Self { data }
    }
}

impl fmt::Display for StatusView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.data.report)?;

        if let Some(php) = &self.data.php_version {
            writeln!(f, "\nPHP Version: {}", php)?;
        }
        if let Some(drush) = &self.data.drush_version {
            writeln!(f, "Drush: {}", drush)?;
        }
        Ok(())
    }
}

pub struct UserListView<'a> {
    data: &'a UserListViewModel,
}

impl<'a> UserListView<'a> {
    pub fn new(data: &'a UserListViewModel) -> Self {
        Self { data }
    }
}

impl fmt::Display for UserListView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "\n{}", formatters::heading("--- Users Summary ---"))?;
        writeln!(f, "Total users: {}", self.data.total)?;

        for user in self.data.users.iter().take(USER_DISPLAY_LIMIT) {
            if user.email.is_empty() {
                writeln!(f, "  {} - {}", user.id, user.name)?;
            } else {
                writeln!(f, "  {} - {} ({})", user.id, user.name, user.email)?;
            }
        }
        if self.data.users.len() > USER_DISPLAY_LIMIT {
            writeln!(
                f,
                "\n  ... and {} more users",
                self.data.users.len() - USER_DISPLAY_LIMIT
            )?;
        }

        match &self.data.status_counts {
            Some(counts) => writeln!(f, "\n{}", counts),
            None => writeln!(f, "\nUser status counts not available"),
        }
    }
}

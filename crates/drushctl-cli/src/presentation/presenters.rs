//! Pure transformations from captured tool output into view models.

use crate::presentation::view_models::{ConfigGroup, ConfigGroupsViewModel, UserListViewModel};
use drushctl_runtime::ops::user::UserRecord;
use std::collections::BTreeMap;

/// Group configuration names by their first dot-delimited segment.
///
/// Groups come out sorted alphabetically; within a group the input order
/// is preserved.
pub fn present_config_groups(names: Vec<String>) -> ConfigGroupsViewModel {
    let total = names.len();

    let mut groups: BTreeMap<String, Vec<String>> = BTreeMap::new();
    for name in names {
        let segment = name.split('.').next().unwrap_or("");
        let key = if segment.is_empty() {
            "other".to_string()
        } else {
            segment.to_string()
        };
        groups.entry(key).or_default().push(name);
    }

    ConfigGroupsViewModel {
        groups: groups
            .into_iter()
            .map(|(name, members)| ConfigGroup { name, members })
            .collect(),
        total,
    }
}

pub fn present_user_list(
    users: Vec<UserRecord>,
    status_counts: Option<String>,
) -> UserListViewModel {
    UserListViewModel {
        total: users.len(),
        users,
        status_counts,
    }
}

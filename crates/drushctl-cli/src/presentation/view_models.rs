//! Raw-data view models. No preformatted strings beyond what the
//! external tool already rendered; JSON output is a full dump of these.

use drushctl_runtime::ops::user::UserRecord;
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct ConfigGroup {
    pub name: String,
    /// Members keep the order they arrived in; views truncate for display
    pub members: Vec<String>,
}

#[derive(Debug, Serialize)]
pub struct ConfigGroupsViewModel {
    /// Sorted alphabetically by group name
    pub groups: Vec<ConfigGroup>,
    pub total: usize,
}

#[derive(Debug, Serialize)]
pub struct EntityViewModel {
    pub entity_type: String,
    pub entity_id: String,
    pub output: String,
}

#[derive(Debug, Serialize)]
pub struct EntityListViewModel {
    pub entity_type: String,
    pub listing: String,
    /// Best-effort secondary count; absent if the count query failed
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct StatusViewModel {
    pub report: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub php_version: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub drush_version: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct UserListViewModel {
    pub total: usize,
    pub users: Vec<UserRecord>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status_counts: Option<String>,
}

pub mod cache_clear;
pub mod config_list;
pub mod entity_info;
pub mod status;
pub mod user_info;

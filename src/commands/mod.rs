pub mod add;
pub mod config;
pub mod delete;
pub mod edit;
pub mod list;
pub mod progress;

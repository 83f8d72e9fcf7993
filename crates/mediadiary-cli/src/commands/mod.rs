pub mod add;
pub mod config;
pub mod edit;
pub mod entry;
pub mod list;
pub mod prompts;
pub mod remove;
pub mod review;
pub mod search;
pub mod show;

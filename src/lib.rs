pub mod change_checker;
pub mod collection;
pub mod config;
pub mod coordinator;
pub mod github_client;
pub mod logging;
pub mod notify;
pub mod poller;
pub mod types;
pub mod ui;

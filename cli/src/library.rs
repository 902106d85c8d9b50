pub mod agent;
pub mod cli;
pub mod config;
pub mod constant;
pub mod error;
pub mod logging;
pub mod prompt;
pub mod report;
pub mod selector;
pub mod snapshot;
pub mod table;

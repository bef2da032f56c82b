pub mod app;
pub mod command;
pub mod config;
pub mod diff;
pub mod gem;
pub mod log;
pub mod prompt;
pub mod session;

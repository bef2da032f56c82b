//! Shared test utilities
#![allow(dead_code)]

mod command;
mod prompt;
mod registry;

pub use command::RecordingRunner;
pub use prompt::{Answer, ScriptedPrompt};
pub use registry::MockRegistry;

use std::path::Path;

use gemdiff::config::{Config, FileConfig, Overrides};

/// Config writing into `root`, with a diff binary that always resolves on PATH
pub fn create_test_config(root: &Path) -> Config {
    let diff_command = std::env::current_exe()
        .unwrap()
        .to_string_lossy()
        .into_owned();

    Config::resolve(
        FileConfig {
            diff_command: Some(diff_command),
            ..FileConfig::default()
        },
        Overrides {
            sources: vec!["https://rubygems.org/".to_string()],
            cache_dir: Some(root.join("cache")),
            output_dir: Some(root.join("out")),
            no_open: true,
        },
    )
    .unwrap()
}

//! Command runner test utilities

use std::cell::RefCell;

use gemdiff::command::{CommandError, CommandOutcome, CommandRunner, CommandSpec};

/// Records every command and imitates `gem fetch` and `diffoscope` output files
#[derive(Debug, Default)]
pub struct RecordingRunner {
    pub commands: RefCell<Vec<CommandSpec>>,
    /// Exit code reported for fetch commands; files are only written on success
    pub fetch_exit_code: i32,
}

impl RecordingRunner {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing_fetch(code: i32) -> Self {
        Self {
            fetch_exit_code: code,
            ..Self::default()
        }
    }

    pub fn programs(&self) -> Vec<String> {
        self.commands
            .borrow()
            .iter()
            .map(|c| c.program.clone())
            .collect()
    }

    pub fn fetches(&self) -> Vec<CommandSpec> {
        self.commands
            .borrow()
            .iter()
            .filter(|c| c.program == "gem")
            .cloned()
            .collect()
    }
}

impl CommandRunner for RecordingRunner {
    fn run(&self, command: &CommandSpec) -> Result<CommandOutcome, CommandError> {
        self.commands.borrow_mut().push(command.clone());

        if command.program == "gem" {
            if self.fetch_exit_code != 0 {
                return Ok(CommandOutcome::failure(self.fetch_exit_code));
            }
            // gem fetch <name> -v <version> -s <source>
            let name = &command.args[1];
            let version = &command.args[3];
            let dir = command.current_dir.clone().unwrap_or_default();
            std::fs::write(dir.join(format!("{name}-{version}.gem")), b"archive").unwrap();
        } else if let Some(html) = command
            .args
            .iter()
            .find_map(|arg| arg.strip_prefix("--html="))
        {
            std::fs::write(html, "<html></html>").unwrap();
        }

        Ok(CommandOutcome::success())
    }
}

//! External command execution

use std::path::PathBuf;
use std::process::{Command, Stdio};

#[cfg(test)]
use mockall::automock;
use thiserror::Error;
use tracing::{debug, info};

#[derive(Debug, Error)]
pub enum CommandError {
    #[error("Failed to run {program}: {source}")]
    Spawn {
        program: String,
        source: std::io::Error,
    },
}

#[derive(Debug, Error)]
pub enum PrerequisiteError {
    #[error("{binary} was not detected in your PATH")]
    Missing { binary: String, hint: String },
}

/// A command line to execute
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandSpec {
    pub program: String,
    pub args: Vec<String>,
    /// Working directory; inherits the current one when None
    pub current_dir: Option<PathBuf>,
    /// Discard the command's stdout/stderr instead of passing them through
    pub quiet: bool,
}

impl CommandSpec {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
            current_dir: None,
            quiet: false,
        }
    }

    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.args.extend(args.into_iter().map(Into::into));
        self
    }

    pub fn current_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.current_dir = Some(dir.into());
        self
    }

    pub fn quiet(mut self) -> Self {
        self.quiet = true;
        self
    }

    /// Shell-like rendering used in log output
    pub fn display(&self) -> String {
        std::iter::once(self.program.as_str())
            .chain(self.args.iter().map(String::as_str))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// Exit information of a finished command
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CommandOutcome {
    pub success: bool,
    pub code: Option<i32>,
}

impl CommandOutcome {
    pub fn success() -> Self {
        Self {
            success: true,
            code: Some(0),
        }
    }

    pub fn failure(code: i32) -> Self {
        Self {
            success: false,
            code: Some(code),
        }
    }
}

/// Trait for running external programs
#[cfg_attr(test, automock)]
pub trait CommandRunner {
    /// Runs the command to completion. A non-zero exit is reported through
    /// the outcome, not as an error; only a failure to start is an error.
    fn run(&self, command: &CommandSpec) -> Result<CommandOutcome, CommandError>;
}

/// Runs commands as child processes of this one, blocking until they exit
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemCommandRunner;

impl CommandRunner for SystemCommandRunner {
    fn run(&self, command: &CommandSpec) -> Result<CommandOutcome, CommandError> {
        info!("Running {}", command.display());

        let mut process = Command::new(&command.program);
        process.args(&command.args);

        if let Some(dir) = &command.current_dir {
            process.current_dir(dir);
        }

        if command.quiet {
            process.stdout(Stdio::null()).stderr(Stdio::null());
        }

        let status = process.status().map_err(|source| CommandError::Spawn {
            program: command.program.clone(),
            source,
        })?;

        debug!("{} finished with {}", command.program, status);

        Ok(CommandOutcome {
            success: status.success(),
            code: status.code(),
        })
    }
}

/// Checks that `binary` can be found on PATH
pub fn ensure_installed(binary: &str, hint: &str) -> Result<PathBuf, PrerequisiteError> {
    which::which(binary).map_err(|e| {
        debug!("Lookup of {} failed: {}", binary, e);
        PrerequisiteError::Missing {
            binary: binary.to_string(),
            hint: hint.to_string(),
        }
    })
}

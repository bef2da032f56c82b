//! HTML report generation with diffoscope

use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::warn;

use crate::command::{CommandError, CommandRunner, CommandSpec};
use crate::gem::types::DiffJob;

#[derive(Debug, Error)]
pub enum DiffError {
    #[error("Failed to create output directory {path:?}: {source}")]
    OutputDir {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error(transparent)]
    Command(#[from] CommandError),
}

/// Runs the diff binary over two archives
pub struct DiffRunner<'a, C: CommandRunner> {
    runner: &'a C,
    program: &'a str,
    output_dir: &'a Path,
    stylesheet: &'a Path,
}

impl<'a, C: CommandRunner> DiffRunner<'a, C> {
    pub fn new(
        runner: &'a C,
        program: &'a str,
        output_dir: &'a Path,
        stylesheet: &'a Path,
    ) -> Self {
        Self {
            runner,
            program,
            output_dir,
            stylesheet,
        }
    }

    /// Writes the report for `job` and returns its path.
    ///
    /// The diff binary's exit status is not treated as a failure: diffoscope
    /// exits non-zero whenever the inputs differ, so the report may or may not
    /// exist afterwards. Only a failure to start the binary is an error.
    pub fn diff(&self, job: &DiffJob) -> Result<PathBuf, DiffError> {
        std::fs::create_dir_all(self.output_dir).map_err(|source| DiffError::OutputDir {
            path: self.output_dir.to_path_buf(),
            source,
        })?;

        let outfile = self.output_dir.join(job.report_file_name());

        let spec = CommandSpec::new(self.program)
            .args([
                "--new-file".to_string(),
                format!("--html={}", outfile.display()),
                format!("--css={}", self.stylesheet.display()),
                job.path_a.display().to_string(),
                job.path_b.display().to_string(),
            ])
            .quiet();

        let outcome = self.runner.run(&spec)?;
        if !outcome.success {
            warn!("{} exited with status {:?}", self.program, outcome.code);
        }
        if !outfile.is_file() {
            warn!("{} did not write {}", self.program, outfile.display());
        }

        Ok(outfile)
    }
}

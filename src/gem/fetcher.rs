//! Archive retrieval through the external fetch command

use std::path::PathBuf;

use tracing::{error, info};

use crate::command::{CommandRunner, CommandSpec};
use crate::gem::cache::ArchiveCache;
use crate::gem::error::FetchError;
use crate::gem::types::{PackageVersion, RegistrySource};

/// Fetches archives into the cache, skipping the fetch command on a cache hit
pub struct Fetcher<'a, C: CommandRunner> {
    cache: &'a ArchiveCache,
    runner: &'a C,
    /// Program and leading arguments, e.g. `["gem", "fetch"]`
    command: &'a [String],
    /// Directory the fetch command runs in and writes its archive to
    work_dir: PathBuf,
}

impl<'a, C: CommandRunner> Fetcher<'a, C> {
    pub fn new(
        cache: &'a ArchiveCache,
        runner: &'a C,
        command: &'a [String],
        work_dir: impl Into<PathBuf>,
    ) -> Self {
        Self {
            cache,
            runner,
            command,
            work_dir: work_dir.into(),
        }
    }

    /// Returns the cached archive for `key`, fetching it from `source` first if needed.
    ///
    /// The archive is registered in the cache only after the fetch command
    /// succeeded and the expected file is present.
    pub fn fetch(
        &self,
        key: &PackageVersion,
        source: &RegistrySource,
    ) -> Result<PathBuf, FetchError> {
        if let Some(entry) = self.cache.get(key) {
            info!("Using cached gem file for {}.", key);
            return Ok(entry.path);
        }

        info!("Fetching {}...", key);

        let (program, leading) = match self.command.split_first() {
            Some((program, rest)) => (program.as_str(), rest),
            None => ("gem", &[][..]),
        };

        let spec = CommandSpec::new(program)
            .args(leading.iter().cloned())
            .args([
                key.name.clone(),
                "-v".to_string(),
                key.version.clone(),
                "-s".to_string(),
                source.fetch_url(),
            ])
            .current_dir(&self.work_dir);

        let outcome = self.runner.run(&spec)?;
        if !outcome.success {
            error!("Failed to fetch gem {}.", key);
            return Err(FetchError::CommandFailed {
                name: key.name.clone(),
                version: key.version.clone(),
                code: outcome.code,
            });
        }

        let downloaded = self
            .work_dir
            .join(key.archive_file_name(self.cache.extension()));
        if !downloaded.is_file() {
            error!("Failed to fetch gem {}.", key);
            return Err(FetchError::MissingArchive { path: downloaded });
        }

        Ok(self.cache.store(key, &downloaded)?.path)
    }
}

//! Per-run context shared by every stage

use std::path::PathBuf;

use crate::command::CommandRunner;
use crate::config::Config;
use crate::gem::cache::ArchiveCache;
use crate::gem::error::CacheError;
use crate::prompt::Prompt;

/// Everything a run needs, built once at startup and handed to the stages
pub struct Session<P: Prompt, C: CommandRunner> {
    pub config: Config,
    pub prompt: P,
    pub runner: C,
    pub cache: ArchiveCache,
    /// Directory the fetch command writes archives to before they are cached
    pub work_dir: PathBuf,
}

impl<P: Prompt, C: CommandRunner> Session<P, C> {
    /// Creates the session, creating the cache root if absent
    pub fn new(
        config: Config,
        prompt: P,
        runner: C,
        work_dir: impl Into<PathBuf>,
    ) -> Result<Self, CacheError> {
        let cache = ArchiveCache::open(&config.cache_dir, &config.archive_extension)?;

        Ok(Self {
            config,
            prompt,
            runner,
            cache,
            work_dir: work_dir.into(),
        })
    }
}

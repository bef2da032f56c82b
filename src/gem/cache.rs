//! On-disk archive cache keyed by gem name and version

use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::gem::error::CacheError;
use crate::gem::types::{CacheEntry, PackageVersion};

/// Directory of previously fetched archives.
///
/// An archive's path is a pure function of its key, so lookups only check
/// whether that file exists. Entries are never removed.
#[derive(Debug, Clone)]
pub struct ArchiveCache {
    root: PathBuf,
    extension: String,
}

impl ArchiveCache {
    /// Opens the cache, creating the root directory (and parents) if absent
    pub fn open(root: &Path, extension: &str) -> Result<Self, CacheError> {
        std::fs::create_dir_all(root).map_err(|source| CacheError::CreateDir {
            path: root.to_path_buf(),
            source,
        })?;
        debug!("Archive cache at {:?}", root);

        Ok(Self {
            root: root.to_path_buf(),
            extension: extension.to_string(),
        })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn extension(&self) -> &str {
        &self.extension
    }

    /// Path the archive for `key` lives at, whether or not it exists yet
    pub fn path_for(&self, key: &PackageVersion) -> PathBuf {
        self.root.join(key.archive_file_name(&self.extension))
    }

    pub fn has(&self, key: &PackageVersion) -> bool {
        self.path_for(key).is_file()
    }

    /// Returns the cached entry for `key`, if present
    pub fn get(&self, key: &PackageVersion) -> Option<CacheEntry> {
        let path = self.path_for(key);
        path.is_file().then(|| CacheEntry {
            key: key.clone(),
            path,
        })
    }

    /// Moves `file` into the cache under the name derived from `key`
    pub fn store(&self, key: &PackageVersion, file: &Path) -> Result<CacheEntry, CacheError> {
        let path = self.path_for(key);

        move_file(file, &path).map_err(|source| CacheError::Store {
            from: file.to_path_buf(),
            to: path.clone(),
            source,
        })?;
        info!("{} saved.", path.display());

        Ok(CacheEntry {
            key: key.clone(),
            path,
        })
    }
}

/// Renames `from` to `to`, copying when the rename crosses filesystems
fn move_file(from: &Path, to: &Path) -> std::io::Result<()> {
    if std::fs::rename(from, to).is_ok() {
        return Ok(());
    }

    std::fs::copy(from, to)?;
    std::fs::remove_file(from)
}

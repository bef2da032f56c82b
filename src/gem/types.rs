//! Value types shared by the registry, cache and diff stages

use std::fmt;
use std::path::PathBuf;

/// One published version of a gem
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PackageVersion {
    pub name: String,
    pub version: String,
}

impl PackageVersion {
    pub fn new(name: impl Into<String>, version: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            version: version.into(),
        }
    }

    /// File name of the archive for this version, e.g. `rake-13.0.6.gem`
    pub fn archive_file_name(&self, extension: &str) -> String {
        format!("{}-{}.{}", self.name, self.version, extension)
    }
}

impl fmt::Display for PackageVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} version {}", self.name, self.version)
    }
}

/// Archive stored in the cache root
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CacheEntry {
    pub key: PackageVersion,
    pub path: PathBuf,
}

/// A configured gem server
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegistrySource {
    pub host: String,
    /// Base URL without credentials or trailing slash
    pub base_url: String,
    pub username: Option<String>,
    pub password: Option<String>,
}

impl RegistrySource {
    /// Value handed to the fetch command's `-s` option
    pub fn fetch_url(&self) -> String {
        format!("https://{}", self.host)
    }
}

/// List of versions returned by a registry
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PackageVersions {
    /// Ordered newest first
    pub versions: Vec<String>,
}

impl PackageVersions {
    pub fn new(versions: Vec<String>) -> Self {
        Self { versions }
    }

    pub fn len(&self) -> usize {
        self.versions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.versions.is_empty()
    }
}

/// Inputs of a single diffoscope invocation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiffJob {
    pub name: String,
    pub version_a: String,
    pub version_b: String,
    pub path_a: PathBuf,
    pub path_b: PathBuf,
}

impl DiffJob {
    /// Report file name, e.g. `rake-13.0.0-13.0.6.html`
    pub fn report_file_name(&self) -> String {
        format!("{}-{}-{}.html", self.name, self.version_a, self.version_b)
    }
}

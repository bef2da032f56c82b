//! Registry trait for listing published gem versions

#[cfg(test)]
use mockall::automock;

use crate::gem::error::RegistryError;
use crate::gem::types::PackageVersions;

/// Trait for fetching package versions from a gem server
#[cfg_attr(test, automock)]
#[async_trait::async_trait]
pub trait Registry: Send + Sync {
    /// Fetches all versions for a package from the registry
    ///
    /// # Arguments
    /// * `package_name` - The name of the gem (e.g., "rake")
    ///
    /// # Returns
    /// * `Ok(PackageVersions)` - List of versions, ordered from newest to oldest
    /// * `Err(RegistryError)` - If the fetch fails
    async fn fetch_all_versions(
        &self,
        package_name: &str,
    ) -> Result<PackageVersions, RegistryError>;
}

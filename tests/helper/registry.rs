//! Registry test utilities

use std::collections::HashMap;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;

use gemdiff::app::RegistryConnector;
use gemdiff::gem::error::RegistryError;
use gemdiff::gem::registry::Registry;
use gemdiff::gem::types::{PackageVersions, RegistrySource};
use gemdiff::gem::version::sort_descending;

/// In-memory registry that counts lookups
#[derive(Clone, Default)]
pub struct MockRegistry {
    versions: HashMap<String, Vec<String>>,
    calls: Arc<AtomicUsize>,
}

impl MockRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_versions(mut self, package: &str, versions: Vec<&str>) -> Self {
        self.versions.insert(
            package.to_string(),
            versions.into_iter().map(|v| v.to_string()).collect(),
        );
        self
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    /// Connector handing out clones of this registry; clones share the call counter
    pub fn connector(&self) -> RegistryConnector {
        let registry = self.clone();
        Box::new(move |_source: &RegistrySource| {
            Ok(Box::new(registry.clone()) as Box<dyn Registry>)
        })
    }
}

#[async_trait]
impl Registry for MockRegistry {
    async fn fetch_all_versions(
        &self,
        package_name: &str,
    ) -> Result<PackageVersions, RegistryError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        match self.versions.get(package_name) {
            Some(versions) => Ok(PackageVersions::new(sort_descending(versions.clone()))),
            None => Err(RegistryError::NotFound(package_name.to_string())),
        }
    }
}

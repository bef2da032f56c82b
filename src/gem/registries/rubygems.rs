//! RubyGems API implementation

use serde::Deserialize;
use tracing::{debug, warn};

use crate::gem::error::RegistryError;
use crate::gem::registry::Registry;
use crate::gem::types::{PackageVersions, RegistrySource};
use crate::gem::version::sort_descending;

/// One entry of `/api/v1/versions/<name>.json`
#[derive(Debug, Deserialize)]
struct VersionRecord {
    number: String,
}

/// Registry implementation for the RubyGems versions API
pub struct RubyGemsRegistry {
    client: reqwest::Client,
    base_url: String,
    credentials: Option<(String, Option<String>)>,
}

impl RubyGemsRegistry {
    /// Creates a client for the given base URL, without authentication
    pub fn new(base_url: &str) -> Result<Self, RegistryError> {
        Ok(Self {
            client: reqwest::Client::builder()
                .user_agent(concat!("gemdiff/", env!("CARGO_PKG_VERSION")))
                .build()?,
            base_url: base_url.trim_end_matches('/').to_string(),
            credentials: None,
        })
    }

    /// Creates a client for a configured source, using basic auth when it carries credentials
    pub fn for_source(source: &RegistrySource) -> Result<Self, RegistryError> {
        let mut registry = Self::new(&source.base_url)?;
        registry.credentials = source
            .username
            .clone()
            .map(|username| (username, source.password.clone()));
        Ok(registry)
    }
}

#[async_trait::async_trait]
impl Registry for RubyGemsRegistry {
    async fn fetch_all_versions(
        &self,
        package_name: &str,
    ) -> Result<PackageVersions, RegistryError> {
        let url = format!("{}/api/v1/versions/{}.json", self.base_url, package_name);
        debug!("Fetching gem versions: {}", url);

        let mut request = self.client.get(&url);
        if let Some((username, password)) = &self.credentials {
            request = request.basic_auth(username, password.as_ref());
        }

        let response = request.send().await?;

        let status = response.status();

        if status == reqwest::StatusCode::NOT_FOUND {
            return Err(RegistryError::NotFound(package_name.to_string()));
        }

        if !status.is_success() {
            warn!("Gem server returned status {}: {}", status, url);
            return Err(RegistryError::InvalidResponse(format!(
                "Unexpected status: {}",
                status
            )));
        }

        let records: Vec<VersionRecord> = response.json().await.map_err(|e| {
            warn!("Failed to parse versions response: {}", e);
            RegistryError::InvalidResponse(e.to_string())
        })?;

        let total = records.len();
        let mut versions = sort_descending(records.into_iter().map(|r| r.number).collect());
        if versions.len() < total {
            warn!(
                "Ignored {} unparseable version(s) of {}",
                total - versions.len(),
                package_name
            );
        }

        // One record per platform; each version is listed once
        versions.dedup();

        Ok(PackageVersions::new(versions))
    }
}

//! Session orchestration
//!
//! A run walks the stages below in order. Every failure is terminal; the
//! cache is the only thing that survives, so re-running after a failure
//! picks up already fetched archives.
//!
//! ```text
//! CheckPrerequisite → ChooseSource → EnterPackageName → ListVersions
//!   → SelectTwoVersions → FetchA → FetchB → RunDiff → OfferOpen → Done
//! ```

use std::fmt;
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::{debug, error, info, warn};

use crate::command::{CommandRunner, PrerequisiteError, ensure_installed};
use crate::config::DIFF_INSTALL_HINT;
use crate::diff::{DiffError, DiffRunner};
use crate::gem::error::{FetchError, RegistryError};
use crate::gem::fetcher::Fetcher;
use crate::gem::registries::RubyGemsRegistry;
use crate::gem::registry::Registry;
use crate::gem::selector::select_two;
use crate::gem::types::{DiffJob, PackageVersion, RegistrySource};
use crate::prompt::terminal::link_to;
use crate::prompt::{Prompt, PromptError};
use crate::session::Session;

#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Prerequisite(#[from] PrerequisiteError),

    #[error(transparent)]
    Registry(#[from] RegistryError),

    #[error(transparent)]
    Fetch(#[from] FetchError),

    #[error(transparent)]
    Prompt(#[from] PromptError),

    #[error(transparent)]
    Diff(#[from] DiffError),

    #[error("No gem sources configured")]
    NoSources,
}

impl AppError {
    /// Process exit status for this error. Escape ends the run without failure.
    pub fn exit_code(&self) -> u8 {
        match self {
            AppError::Prompt(PromptError::Cancelled) => 0,
            _ => 1,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    CheckPrerequisite,
    ChooseSource,
    EnterPackageName,
    ListVersions,
    SelectTwoVersions,
    FetchA,
    FetchB,
    RunDiff,
    OfferOpen,
    Done,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

/// Builds the registry client for the chosen source
pub type RegistryConnector =
    Box<dyn Fn(&RegistrySource) -> Result<Box<dyn Registry>, RegistryError>>;

/// Hands the finished report to the desktop's default viewer
pub type Opener = Box<dyn Fn(&Path) -> std::io::Result<()>>;

/// What a successful run produced
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunReport {
    pub job: DiffJob,
    pub report_path: PathBuf,
    pub opened: bool,
}

pub struct App<P: Prompt, C: CommandRunner> {
    session: Session<P, C>,
    connect: RegistryConnector,
    opener: Opener,
}

impl<P: Prompt, C: CommandRunner> App<P, C> {
    pub fn new(session: Session<P, C>, connect: RegistryConnector) -> Self {
        Self {
            session,
            connect,
            opener: Box::new(|path: &Path| open::that(path)),
        }
    }

    /// Replaces the default viewer launcher
    pub fn with_opener(mut self, opener: Opener) -> Self {
        self.opener = opener;
        self
    }

    /// App talking to real gem servers through the RubyGems API
    pub fn with_rubygems(session: Session<P, C>) -> Self {
        Self::new(
            session,
            Box::new(|source: &RegistrySource| {
                RubyGemsRegistry::for_source(source).map(|r| Box::new(r) as Box<dyn Registry>)
            }),
        )
    }

    pub fn session(&self) -> &Session<P, C> {
        &self.session
    }

    fn enter(stage: Stage) {
        debug!("Stage: {}", stage);
    }

    pub async fn run(&mut self) -> Result<RunReport, AppError> {
        Self::enter(Stage::CheckPrerequisite);
        self.check_prerequisite()?;

        Self::enter(Stage::ChooseSource);
        let source = self.choose_source()?;

        Self::enter(Stage::EnterPackageName);
        let name = self.session.prompt.ask("Enter the gem name:")?;

        Self::enter(Stage::ListVersions);
        let versions = self.list_versions(&source, &name).await?;

        Self::enter(Stage::SelectTwoVersions);
        let (version_a, version_b) = select_two(&mut self.session.prompt, &versions)?;

        let session = &self.session;
        let fetcher = Fetcher::new(
            &session.cache,
            &session.runner,
            &session.config.fetch_command,
            &session.work_dir,
        );

        Self::enter(Stage::FetchA);
        let path_a = fetcher.fetch(&PackageVersion::new(&name, &version_a), &source)?;

        Self::enter(Stage::FetchB);
        let path_b = fetcher.fetch(&PackageVersion::new(&name, &version_b), &source)?;

        Self::enter(Stage::RunDiff);
        let job = DiffJob {
            name,
            version_a,
            version_b,
            path_a,
            path_b,
        };
        let report_path = DiffRunner::new(
            &session.runner,
            &session.config.diff_command,
            &session.config.output_dir,
            &session.config.stylesheet,
        )
        .diff(&job)?;

        let absolute = std::path::absolute(&report_path).unwrap_or_else(|_| report_path.clone());
        info!(
            "Diff generated at {}",
            link_to(
                &report_path.display().to_string(),
                &format!("file://{}", absolute.display())
            )
        );

        Self::enter(Stage::OfferOpen);
        let opened = self.offer_open(&report_path)?;

        Self::enter(Stage::Done);
        Ok(RunReport {
            job,
            report_path,
            opened,
        })
    }

    fn check_prerequisite(&self) -> Result<PathBuf, AppError> {
        let binary = &self.session.config.diff_command;

        match ensure_installed(binary, DIFF_INSTALL_HINT) {
            Ok(path) => {
                info!("{} detected.", binary);
                debug!("Using {:?}", path);
                Ok(path)
            }
            Err(e) => {
                let PrerequisiteError::Missing { hint, .. } = &e;
                error!("{} was not detected in your PATH.", binary);
                error!("{}", hint);
                Err(e.into())
            }
        }
    }

    fn choose_source(&mut self) -> Result<RegistrySource, AppError> {
        let hosts: Vec<String> = self.session.config.sources.keys().cloned().collect();
        if hosts.is_empty() {
            return Err(AppError::NoSources);
        }

        let index = self.session.prompt.select("Choose a gem source:", &hosts)?;
        self.session
            .config
            .sources
            .get_index(index)
            .map(|(_, source)| source.clone())
            .ok_or(AppError::NoSources)
    }

    async fn list_versions(
        &self,
        source: &RegistrySource,
        name: &str,
    ) -> Result<Vec<String>, AppError> {
        let result = match (self.connect)(source) {
            Ok(registry) => registry.fetch_all_versions(name).await,
            Err(e) => Err(e),
        };

        let versions = result.inspect_err(|e| {
            error!("Failed to fetch gem versions for {}.", name);
            debug!("{}", e);
        })?;

        if versions.len() < 2 {
            error!("Failed to fetch gem versions for {}.", name);
            return Err(RegistryError::NotEnoughVersions {
                package: name.to_string(),
                count: versions.len(),
            }
            .into());
        }

        Ok(versions.versions)
    }

    fn offer_open(&mut self, report_path: &Path) -> Result<bool, AppError> {
        if !self.session.config.offer_open || !self.session.prompt.confirm("Open diff?", true)? {
            return Ok(false);
        }

        match (self.opener)(report_path) {
            Ok(()) => Ok(true),
            Err(e) => {
                warn!("Failed to open {}: {}", report_path.display(), e);
                Ok(false)
            }
        }
    }
}

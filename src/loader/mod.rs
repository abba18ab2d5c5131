mod error;
mod project;


pub use error::LoaderError;
pub use project::{LoadedProject, ProjectBuilder, ProjectFile};

use crate::archive::{ArchiveExtractor, ArchiveReader, ZipReader};
use crate::config::LoaderConfig;
use crate::fetch::{Fetcher, SandboxFetcher};
use crate::manifest::load_manifest;
use crate::security::PathSanitizer;
use crate::source::{get_vm_load_config, requires_vm_loading, ProjectSource};
use futures::future::try_join_all;
use tracing::{debug, info};

/// Resolves a [`ProjectSource`] into a [`LoadedProject`].
///
/// Each call is independent; nothing is cached between loads.
pub struct ProjectLoader<F, A = ZipReader> {
    fetcher: F,
    reader: A,
    config: LoaderConfig,
}

impl<F: Fetcher> ProjectLoader<F, ZipReader> {
    pub fn new(fetcher: F) -> Self {
        Self {
            fetcher,
            reader: ZipReader,
            config: LoaderConfig::default(),
        }
    }
}

impl<F: Fetcher, A: ArchiveReader> ProjectLoader<F, A> {
    pub fn with_config(mut self, config: LoaderConfig) -> Self {
        self.config = config;
        self
    }

    /// Swap the archive parser
    pub fn with_reader<B: ArchiveReader>(self, reader: B) -> ProjectLoader<F, B> {
        ProjectLoader {
            fetcher: self.fetcher,
            reader,
            config: self.config,
        }
    }

    /// Load a source the caller can fetch directly.
    ///
    /// GitHub sources and zip sources flagged `useVm` fail with
    /// [`LoaderError::UnsupportedSource`]; use
    /// [`load_project_via_vm`](Self::load_project_via_vm) for those.
    pub async fn load_project(&self, source: &ProjectSource) -> Result<LoadedProject, LoaderError> {
        info!("Loading {}", source.description());

        match source {
            ProjectSource::Local {
                path,
                manifest_path,
            } => self.load_local(path, manifest_path.as_deref()).await,
            ProjectSource::Zip { use_vm: true, .. } => Err(LoaderError::UnsupportedSource(
                "zip source with useVm=true must be loaded via the sandbox".to_string(),
            )),
            ProjectSource::Zip {
                url, strip_prefix, ..
            } => self.load_zip(url, strip_prefix.unwrap_or(true)).await,
            ProjectSource::Github { .. } => Err(LoaderError::UnsupportedSource(
                "GitHub source must be loaded via the sandbox".to_string(),
            )),
        }
    }

    /// Load a source whose archive must be fetched inside a sandbox.
    ///
    /// Extraction runs locally with the same rules as a direct zip load.
    pub async fn load_project_via_vm<S>(
        &self,
        source: &ProjectSource,
        sandbox: &S,
    ) -> Result<LoadedProject, LoaderError>
    where
        S: SandboxFetcher + ?Sized,
    {
        let vm_config = get_vm_load_config(source).ok_or_else(|| {
            LoaderError::UnsupportedSource(format!(
                "{} does not need sandbox loading",
                source.description()
            ))
        })?;

        info!("Loading {} via sandbox", source.description());
        let bytes = sandbox.fetch_in_sandbox(&vm_config.url).await?;
        self.extract(&bytes, vm_config.strip_prefix, vm_config.sub_path.as_deref())
    }

    /// Load any source, routing through `sandbox` when required
    pub async fn load<S>(&self, source: &ProjectSource, sandbox: &S) -> Result<LoadedProject, LoaderError>
    where
        S: SandboxFetcher + ?Sized,
    {
        if requires_vm_loading(source) {
            self.load_project_via_vm(source, sandbox).await
        } else {
            self.load_project(source).await
        }
    }

    /// Extract archive bytes the caller already holds
    pub fn extract(
        &self,
        bytes: &[u8],
        strip_prefix: bool,
        sub_path: Option<&str>,
    ) -> Result<LoadedProject, LoaderError> {
        let mut extractor = ArchiveExtractor::with_reader(&self.reader)
            .strip_prefix(strip_prefix)
            .config(self.config.clone());
        if let Some(sub) = sub_path {
            extractor = extractor.sub_path(sub);
        }
        extractor.extract(bytes)
    }

    async fn load_local(
        &self,
        path: &str,
        manifest_path: Option<&str>,
    ) -> Result<LoadedProject, LoaderError> {
        let manifest = match manifest_path {
            Some(manifest) => manifest.to_string(),
            None => PathSanitizer::join(path, &self.config.manifest_name),
        };

        let file_paths = load_manifest(&self.fetcher, &manifest)
            .await?
            .iter()
            .map(|raw| PathSanitizer::sanitize(raw))
            .collect::<Result<Vec<_>, _>>()?;

        // All fetches run concurrently; the first failure drops the rest.
        let contents = try_join_all(file_paths.iter().map(|file_path| {
            let location = PathSanitizer::join(path, file_path);
            async move { self.fetcher.fetch(&location).await }
        }))
        .await?;

        let mut builder = ProjectBuilder::with_limits(&self.config);
        for (file_path, content) in file_paths.iter().zip(contents) {
            builder.add_file(file_path, content)?;
        }

        debug!("Loaded {} files from {}", builder.file_count(), manifest);
        Ok(builder.build())
    }

    async fn load_zip(&self, url: &str, strip_prefix: bool) -> Result<LoadedProject, LoaderError> {
        let bytes = self.fetcher.fetch(url).await?;
        debug!("Fetched {} archive bytes from {}", bytes.len(), url);
        self.extract(&bytes, strip_prefix, None)
    }
}

//! Config Sync Service
//!
//! Collects the monitoring mixin files named by a [`SyncPlan`] and copies them
//! from the source root into the destination root.
//!
//! The run is strictly linear: optional subpaths are walked under the
//! destination root, required subpaths under the source root, and every
//! collected relative path is then read from the source and written to the
//! destination in discovery order. The first error aborts the run; files
//! copied before it stay in place.

use async_recursion::async_recursion;
use derive_getters::Getters;
use std::path::{Path, PathBuf};
use tokio::fs;

use crate::{
    application::{FileReaderService, FileWriterService},
    config::{Config, SyncPlan},
    domain::{FileReader, FileWriter},
    errors::{BumpMonitoringError, BumpMonitoringResult},
    utils::path::{ExtensionFilter, relative_to},
};

/// Outcome of a successful [`Syncer::sync_all`]
#[derive(Debug, Clone, PartialEq, Eq, Getters)]
pub struct SyncReport {
    optional: Vec<PathBuf>,
    required: Vec<PathBuf>,
    copied: Vec<PathBuf>,
}

/// Copies allow-listed config files between two roots
pub struct Syncer {
    config: Config,
    plan: SyncPlan,
    filter: ExtensionFilter,
    reader: Box<dyn FileReader>,
    writer: Box<dyn FileWriter>,
    paths: Vec<PathBuf>,
}

impl Syncer {
    /// Create a syncer backed by the local filesystem
    pub fn new(config: Config, plan: SyncPlan) -> BumpMonitoringResult<Self> {
        Self::with_services(
            config,
            plan,
            Box::new(FileReaderService::new()),
            Box::new(FileWriterService::new()),
        )
    }

    /// Create a syncer with explicit reader and writer implementations
    pub fn with_services(
        config: Config,
        plan: SyncPlan,
        reader: Box<dyn FileReader>,
        writer: Box<dyn FileWriter>,
    ) -> BumpMonitoringResult<Self> {
        let filter = ExtensionFilter::new(plan.extensions())?;
        Ok(Self {
            config,
            plan,
            filter,
            reader,
            writer,
            paths: Vec::new(),
        })
    }

    /// Relative paths collected so far, in discovery order
    pub fn collected(&self) -> &[PathBuf] {
        &self.paths
    }

    /// Collect allow-listed files under `root/sub_path`
    ///
    /// A directory is walked recursively and every matching file is recorded
    /// relative to `root`. A file is recorded as `sub_path` itself when its
    /// extension matches.
    ///
    /// # Errors
    ///
    /// * [`BumpMonitoringError::PathResolution`] - If `root/sub_path` cannot be
    ///   stat'ed, or a directory beneath it cannot be listed
    pub async fn collect(&mut self, root: &Path, sub_path: &Path) -> BumpMonitoringResult<()> {
        let full_path = root.join(sub_path);

        let metadata =
            fs::metadata(&full_path)
                .await
                .map_err(|source| BumpMonitoringError::PathResolution {
                    path: full_path.clone(),
                    source,
                })?;

        if metadata.is_dir() {
            self.walk(root, &full_path).await
        } else {
            self.add_path(sub_path.to_path_buf());
            Ok(())
        }
    }

    fn add_path(&mut self, relative_path: PathBuf) {
        if self.filter.accepts(&relative_path) {
            tracing::debug!("Collected {}", relative_path.display());
            self.paths.push(relative_path);
        }
    }

    #[async_recursion]
    async fn walk(&mut self, root: &Path, current_path: &Path) -> BumpMonitoringResult<()> {
        let resolution_error = |path: &Path, source: std::io::Error| {
            BumpMonitoringError::PathResolution {
                path: path.to_path_buf(),
                source,
            }
        };

        let mut entries = fs::read_dir(current_path)
            .await
            .map_err(|e| resolution_error(current_path, e))?;

        let mut children = Vec::new();
        while let Some(entry) = entries
            .next_entry()
            .await
            .map_err(|e| resolution_error(current_path, e))?
        {
            let entry_path = entry.path();
            // Symlinks are not followed
            let file_type = entry
                .file_type()
                .await
                .map_err(|e| resolution_error(entry_path.as_path(), e))?;
            children.push((entry.file_name(), entry_path, file_type.is_dir()));
        }

        // Lexical order keeps discovery order stable across platforms
        children.sort_by(|a, b| a.0.cmp(&b.0));

        for (_, entry_path, is_dir) in children {
            if is_dir {
                self.walk(root, &entry_path).await?;
            } else {
                self.add_path(relative_to(root, &entry_path));
            }
        }

        Ok(())
    }

    /// Collect every configured subpath, then copy the collected files
    ///
    /// # Errors
    ///
    /// * [`BumpMonitoringError::PathResolution`] - A configured subpath is missing
    /// * [`BumpMonitoringError::Read`] - A collected file cannot be read from the source root
    /// * [`BumpMonitoringError::Write`] - A collected file cannot be written to the destination root
    pub async fn sync_all(mut self) -> BumpMonitoringResult<SyncReport> {
        let source_root = self.config.source_root().clone();
        let destination_root = self.config.destination_root().clone();
        let optional = self.plan.optional().clone();
        let required = self.plan.required().clone();

        tracing::info!(
            "Processing optional configs: {}",
            destination_root.display()
        );
        for sub_path in &optional {
            self.collect(&destination_root, sub_path).await?;
        }

        tracing::info!("Processing required configs: {}", source_root.display());
        for sub_path in &required {
            self.collect(&source_root, sub_path).await?;
        }

        tracing::info!("Files to be copied: {:?}", self.collected());
        for relative_path in &self.paths {
            let source_path = source_root.join(relative_path);
            let destination_path = destination_root.join(relative_path);

            let content = self.reader.read_bytes(&source_path).await?;
            self.writer.write_bytes(&destination_path, &content).await?;

            tracing::debug!(
                "Copied {} -> {} ({} bytes)",
                source_path.display(),
                destination_path.display(),
                content.len()
            );
        }

        Ok(SyncReport {
            optional,
            required,
            copied: self.paths,
        })
    }
}

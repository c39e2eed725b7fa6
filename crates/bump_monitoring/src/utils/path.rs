use std::path::{Path, PathBuf};

use globset::{GlobBuilder, GlobSet, GlobSetBuilder};

use crate::errors::{BumpMonitoringError, BumpMonitoringResult};

/// Extension allow-list compiled into a glob set
///
/// Each extension `.ext` becomes the pattern `*.ext`, matched against the
/// final path segment only. Matching is exact and case-sensitive.
#[derive(Debug, Clone)]
pub struct ExtensionFilter {
    globset: GlobSet,
}

impl ExtensionFilter {
    pub fn new<S: AsRef<str>>(extensions: &[S]) -> BumpMonitoringResult<Self> {
        let mut builder = GlobSetBuilder::new();

        for extension in extensions {
            let pattern = format!("*{}", globset::escape(extension.as_ref()));
            let glob = GlobBuilder::new(&pattern)
                .literal_separator(true)
                .build()
                .map_err(|e| BumpMonitoringError::InvalidExtension {
                    pattern: pattern.clone(),
                    message: e.to_string(),
                })?;
            builder.add(glob);
        }

        let globset = builder
            .build()
            .map_err(|e| BumpMonitoringError::InvalidExtension {
                pattern: extensions
                    .iter()
                    .map(|ext| ext.as_ref())
                    .collect::<Vec<_>>()
                    .join(", "),
                message: e.to_string(),
            })?;

        Ok(Self { globset })
    }

    /// Whether the last segment of `path` carries a wanted extension
    pub fn accepts(&self, path: &Path) -> bool {
        path.file_name()
            .is_some_and(|name| self.globset.is_match(Path::new(name)))
    }
}

/// Express `path` relative to `root`
///
/// Paths produced by walking `root.join(..)` always share the prefix; anything
/// else is returned unchanged.
pub fn relative_to(root: &Path, path: &Path) -> PathBuf {
    path.strip_prefix(root).unwrap_or(path).to_path_buf()
}

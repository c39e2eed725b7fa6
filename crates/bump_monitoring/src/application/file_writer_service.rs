use async_trait::async_trait;
use std::path::Path;
use tokio::fs;
use tokio::io::AsyncWriteExt;

use crate::{
    domain::FileWriter,
    errors::{BumpMonitoringError, BumpMonitoringResult},
};

/// Permission bits for newly created copies (rw-r--r--)
pub const CONFIG_FILE_MODE: u32 = 0o644;

/// Application service writing config copies with `tokio::fs`
///
/// Existing files are truncated in place and keep their permissions; new
/// files are created with [`CONFIG_FILE_MODE`]. Parent directories are never
/// created.
pub struct FileWriterService;

impl FileWriterService {
    /// Create a new FileWriterService instance
    pub fn new() -> Self {
        Self
    }

    fn open_options() -> fs::OpenOptions {
        let mut options = fs::OpenOptions::new();
        options.write(true).create(true).truncate(true);
        #[cfg(unix)]
        options.mode(CONFIG_FILE_MODE);
        options
    }
}

impl Default for FileWriterService {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl FileWriter for FileWriterService {
    async fn write_bytes(&self, path: &Path, content: &[u8]) -> BumpMonitoringResult<()> {
        let write_error = |source: std::io::Error| BumpMonitoringError::Write {
            path: path.to_path_buf(),
            source,
        };

        let mut file = Self::open_options()
            .open(path)
            .await
            .map_err(write_error)?;

        file.write_all(content).await.map_err(write_error)?;
        file.flush().await.map_err(write_error)?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_write_new_file() {
        let temp_dir = TempDir::new().unwrap();
        let service = FileWriterService::new();
        let file_path = temp_dir.path().join("alerts.jsonnet");

        let result = service.write_bytes(&file_path, b"{ groups: [] }").await;
        assert!(result.is_ok());

        let content = fs::read(&file_path).await.unwrap();
        assert_eq!(content, b"{ groups: [] }");
    }

    /// Overwriting a longer file must not leave trailing bytes behind
    #[tokio::test]
    async fn test_write_truncates_existing_file() {
        let temp_dir = TempDir::new().unwrap();
        let service = FileWriterService::new();
        let file_path = temp_dir.path().join("dashboards.libsonnet");

        fs::write(&file_path, "a much longer original body").await.unwrap();
        service.write_bytes(&file_path, b"short").await.unwrap();

        let content = fs::read_to_string(&file_path).await.unwrap();
        assert_eq!(content, "short");
    }

    #[tokio::test]
    async fn test_write_empty_content() {
        let temp_dir = TempDir::new().unwrap();
        let service = FileWriterService::new();
        let file_path = temp_dir.path().join("empty.jsonnet");

        fs::write(&file_path, "stale").await.unwrap();
        service.write_bytes(&file_path, b"").await.unwrap();

        assert_eq!(fs::metadata(&file_path).await.unwrap().len(), 0);
    }

    #[tokio::test]
    async fn test_write_missing_parent_fails() {
        let temp_dir = TempDir::new().unwrap();
        let service = FileWriterService::new();
        let file_path = temp_dir.path().join("missing/dir/alerts.jsonnet");

        let result = service.write_bytes(&file_path, b"{}").await;
        assert!(matches!(
            result.unwrap_err(),
            BumpMonitoringError::Write { path, .. } if path == file_path
        ));
        assert!(!temp_dir.path().join("missing").exists());
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn test_new_file_mode() {
        use std::os::unix::fs::PermissionsExt;

        let temp_dir = TempDir::new().unwrap();
        let service = FileWriterService::new();
        let file_path = temp_dir.path().join("mode.jsonnet");

        service.write_bytes(&file_path, b"{}").await.unwrap();

        // The process umask can only clear bits
        let mode = fs::metadata(&file_path).await.unwrap().permissions().mode() & 0o777;
        assert_eq!(mode & 0o600, 0o600);
        assert_eq!(mode & !CONFIG_FILE_MODE, 0);
    }
}

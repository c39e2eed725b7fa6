use async_trait::async_trait;
use std::path::Path;
use tokio::fs::File;
use tokio::io::AsyncReadExt;

use crate::domain::FileReader;
use crate::errors::{BumpMonitoringError, BumpMonitoringResult};

/// Concrete implementation of FileReader backed by `tokio::fs`
pub struct FileReaderService;

impl FileReaderService {
    /// Create a new instance of FileReaderService
    pub fn new() -> Self {
        Self
    }
}

impl Default for FileReaderService {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl FileReader for FileReaderService {
    async fn read_bytes(&self, path: &Path) -> BumpMonitoringResult<Vec<u8>> {
        let read_error = |source: std::io::Error| BumpMonitoringError::Read {
            path: path.to_path_buf(),
            source,
        };

        let mut file = File::open(path).await.map_err(read_error)?;

        let mut contents = Vec::new();
        file.read_to_end(&mut contents).await.map_err(read_error)?;

        Ok(contents)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::{NamedTempFile, TempDir};

    fn create_test_file(content: &[u8]) -> NamedTempFile {
        let mut temp_file = NamedTempFile::new().expect("Failed to create temp file");
        temp_file
            .write_all(content)
            .expect("Failed to write test content");
        temp_file
    }

    #[tokio::test]
    async fn test_read_bytes() {
        let service = FileReaderService::new();
        let temp_file = create_test_file(b"local utils = import 'utils.libsonnet';\n");

        let result = service.read_bytes(temp_file.path()).await;
        assert!(result.is_ok());
        assert_eq!(result.unwrap(), b"local utils = import 'utils.libsonnet';\n");
    }

    /// Non-UTF-8 content is copied as-is
    #[tokio::test]
    async fn test_read_bytes_binary() {
        let service = FileReaderService::new();
        let temp_file = create_test_file(&[0xff, 0x00, 0xfe, b'\n']);

        let result = service.read_bytes(temp_file.path()).await.unwrap();
        assert_eq!(result, vec![0xff, 0x00, 0xfe, b'\n']);
    }

    #[tokio::test]
    async fn test_read_empty_file() {
        let service = FileReaderService::new();
        let temp_file = create_test_file(b"");

        let result = service.read_bytes(temp_file.path()).await.unwrap();
        assert!(result.is_empty());
    }

    #[tokio::test]
    async fn test_read_nonexistent_file() {
        let service = FileReaderService::new();
        let nonexistent_path = Path::new("/nonexistent/file.jsonnet");

        let result = service.read_bytes(nonexistent_path).await;
        assert!(matches!(
            result.unwrap_err(),
            BumpMonitoringError::Read { path, .. } if path == nonexistent_path
        ));
    }

    /// Reading a directory is a read error, not a panic
    #[tokio::test]
    async fn test_read_directory_fails() {
        let service = FileReaderService::new();
        let temp_dir = TempDir::new().unwrap();

        let result = service.read_bytes(temp_dir.path()).await;
        assert!(matches!(result, Err(BumpMonitoringError::Read { .. })));
    }
}

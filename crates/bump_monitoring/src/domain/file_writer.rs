use async_trait::async_trait;
use std::path::Path;

use crate::errors::BumpMonitoringResult;

/// Domain trait for writing config copies
#[async_trait]
pub trait FileWriter: Send + Sync {
    /// Write `content` to `path`, creating the file or truncating it
    ///
    /// The parent directory must already exist.
    ///
    /// # Arguments
    /// * `path` - The file path to write to
    /// * `content` - The bytes to store
    ///
    /// # Returns
    /// * `Ok(())` - Once every byte has been written and flushed
    /// * `Err(BumpMonitoringError::Write)` - If the file cannot be written
    async fn write_bytes(&self, path: &Path, content: &[u8]) -> BumpMonitoringResult<()>;
}

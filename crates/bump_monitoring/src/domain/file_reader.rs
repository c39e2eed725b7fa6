use async_trait::async_trait;
use std::path::Path;

use crate::errors::BumpMonitoringResult;

/// Domain trait for reading config sources
///
/// Keeps the syncer independent of the concrete filesystem so tests can
/// substitute failing or recording readers.
#[async_trait]
pub trait FileReader: Send + Sync {
    /// Read the entire contents of a file as raw bytes
    ///
    /// # Arguments
    /// * `path` - The file path to read
    ///
    /// # Returns
    /// * `Ok(Vec<u8>)` - The complete file contents
    /// * `Err(BumpMonitoringError::Read)` - If the file cannot be read
    async fn read_bytes(&self, path: &Path) -> BumpMonitoringResult<Vec<u8>>;
}

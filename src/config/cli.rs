use crate::core::SourceStore;
use crate::utils::error::Result;
use std::path::{Path, PathBuf};

/// Local filesystem access via tokio. Cloned freely into parallel read
/// tasks; it carries no state.
#[derive(Debug, Clone, Default)]
pub struct LocalStore;

impl LocalStore {
    pub fn new() -> Self {
        Self
    }
}

impl SourceStore for LocalStore {
    async fn list_dir(&self, path: &Path) -> Result<Vec<PathBuf>> {
        let mut entries = tokio::fs::read_dir(path).await?;
        let mut paths = Vec::new();
        while let Some(entry) = entries.next_entry().await? {
            paths.push(entry.path());
        }
        Ok(paths)
    }

    async fn read_to_string(&self, path: &Path) -> Result<String> {
        let content = tokio::fs::read_to_string(path).await?;
        Ok(content)
    }
}

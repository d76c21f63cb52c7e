use crate::domain::model::OperationRecord;
use crate::utils::error::Result;
use crate::core::extract::DeclarationTable;
use async_trait::async_trait;
use std::path::{Path, PathBuf};

/// File access behind the scan. Listing a directory and reading a file are
/// the only suspension points in the whole pipeline, so this is the seam
/// mocked in tests. `Clone` because parallel read tasks each take their own
/// handle.
pub trait SourceStore: Clone + Send + Sync + 'static {
    fn list_dir(
        &self,
        path: &Path,
    ) -> impl std::future::Future<Output = Result<Vec<PathBuf>>> + Send;
    fn read_to_string(
        &self,
        path: &Path,
    ) -> impl std::future::Future<Output = Result<String>> + Send;
}

pub trait ConfigProvider: Send + Sync {
    fn types_dir(&self) -> &str;
    fn client_file(&self) -> &str;
    fn client_interface(&self) -> &str;
    fn models_subdir(&self) -> &str;
    fn model_prefix(&self) -> &str;
}

/// The three phases of a scan. `discover` and `collect` are independent;
/// `link` consumes both their outputs and is the terminal stage.
#[async_trait]
pub trait Pipeline: Send + Sync {
    async fn discover(&self) -> Result<Vec<String>>;
    async fn collect(&self) -> Result<DeclarationTable>;
    async fn link(
        &self,
        operations: Vec<String>,
        table: DeclarationTable,
    ) -> Result<Vec<OperationRecord>>;
}

use crate::core::extract::{extract_top_level_interfaces, DeclarationTable};
use crate::core::{discover, loader, matcher, parser};
use crate::domain::model::{OperationRecord, SourceModule};
use crate::domain::ports::{ConfigProvider, Pipeline, SourceStore};
use crate::utils::error::Result;
use std::path::Path;
use tokio::task::JoinSet;

/// Scans a generated `.d.ts` tree: discovers the client's operation names,
/// collects every model file's declarations into one table, and links the
/// two. File access goes through the store; paths come from the config.
pub struct ScanPipeline<S: SourceStore, C: ConfigProvider> {
    store: S,
    config: C,
}

impl<S: SourceStore, C: ConfigProvider> ScanPipeline<S, C> {
    pub fn new(store: S, config: C) -> Self {
        Self { store, config }
    }
}

#[async_trait::async_trait]
impl<S: SourceStore, C: ConfigProvider> Pipeline for ScanPipeline<S, C> {
    async fn discover(&self) -> Result<Vec<String>> {
        let path = Path::new(self.config.types_dir()).join(self.config.client_file());

        tracing::debug!("Reading client declaration file {}", path.display());
        let content = self.store.read_to_string(&path).await?;
        let module = parser::parse(&path, &content)?;

        discover::discover_operations(&module, self.config.client_interface())
    }

    async fn collect(&self) -> Result<DeclarationTable> {
        let models_dir = Path::new(self.config.types_dir()).join(self.config.models_subdir());
        let paths =
            loader::model_paths(&self.store, &models_dir, self.config.model_prefix()).await?;

        // Read and parse every model file in parallel. Each task carries its
        // listing index so completion order cannot leak into the fold order.
        let mut tasks: JoinSet<Result<(usize, SourceModule)>> = JoinSet::new();
        for (index, path) in paths.iter().cloned().enumerate() {
            let store = self.store.clone();
            tasks.spawn(async move {
                let content = store.read_to_string(&path).await?;
                let module = parser::parse(&path, &content)?;
                Ok((index, module))
            });
        }

        let mut modules: Vec<Option<SourceModule>> = (0..paths.len()).map(|_| None).collect();
        while let Some(joined) = tasks.join_next().await {
            // The first failed read or parse aborts the run; dropping the
            // set cancels any siblings still in flight.
            let (index, module) = joined??;
            modules[index] = Some(module);
        }

        // Strictly sequential fold in the committed (sorted) order.
        let mut table = DeclarationTable::default();
        for module in modules.into_iter().flatten() {
            table.merge(extract_top_level_interfaces(&module));
        }

        tracing::debug!(
            "declaration table holds {} entries from {} model files",
            table.len(),
            paths.len()
        );
        Ok(table)
    }

    async fn link(
        &self,
        operations: Vec<String>,
        table: DeclarationTable,
    ) -> Result<Vec<OperationRecord>> {
        matcher::link_operations(&operations, &table)
    }
}

use crate::domain::model::OperationRecord;
use crate::domain::ports::Pipeline;
use crate::utils::error::Result;

/// Drives the three scan phases in order. Any phase error propagates
/// unchanged; no partial record collection ever leaves this function.
pub struct ScanEngine<P: Pipeline> {
    pipeline: P,
}

impl<P: Pipeline> ScanEngine<P> {
    pub fn new(pipeline: P) -> Self {
        Self { pipeline }
    }

    pub async fn run(&self) -> Result<Vec<OperationRecord>> {
        tracing::info!("Discovering client operations...");
        let operations = self.pipeline.discover().await?;
        tracing::info!("Discovered {} operations", operations.len());

        tracing::info!("Collecting model declarations...");
        let table = self.pipeline.collect().await?;
        tracing::info!("Collected {} declarations", table.len());

        tracing::info!("Linking operations to request/response declarations...");
        let records = self.pipeline.link(operations, table).await?;
        tracing::info!("Linked {} operations", records.len());

        Ok(records)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::extract::DeclarationTable;
    use crate::domain::model::{Declaration, InterfaceDecl};
    use crate::utils::error::ScanError;
    use std::path::PathBuf;

    struct MockPipeline {
        operations: Vec<String>,
        fail_collect: bool,
    }

    fn declaration(name: &str) -> Declaration {
        Declaration {
            name: name.to_string(),
            module_path: PathBuf::from("models_0.d.ts"),
            node: InterfaceDecl {
                name: name.to_string(),
                members: Vec::new(),
                line: 1,
            },
        }
    }

    #[async_trait::async_trait]
    impl Pipeline for MockPipeline {
        async fn discover(&self) -> Result<Vec<String>> {
            Ok(self.operations.clone())
        }

        async fn collect(&self) -> Result<DeclarationTable> {
            if self.fail_collect {
                return Err(ScanError::IoError(std::io::Error::new(
                    std::io::ErrorKind::PermissionDenied,
                    "unreadable models directory",
                )));
            }
            Ok(DeclarationTable::default())
        }

        async fn link(
            &self,
            operations: Vec<String>,
            _table: DeclarationTable,
        ) -> Result<Vec<OperationRecord>> {
            Ok(operations
                .into_iter()
                .map(|name| {
                    let pascal_name = {
                        let mut chars = name.chars();
                        chars
                            .next()
                            .map(|c| c.to_uppercase().chain(chars).collect())
                            .unwrap_or_default()
                    };
                    OperationRecord {
                        request: declaration(&format!("{}Request", pascal_name)),
                        response: None,
                        name,
                        pascal_name,
                    }
                })
                .collect())
        }
    }

    #[tokio::test]
    async fn test_run_produces_records_in_discovery_order() {
        let engine = ScanEngine::new(MockPipeline {
            operations: vec!["signUp".to_string(), "signOut".to_string()],
            fail_collect: false,
        });

        let records = engine.run().await.unwrap();

        let names: Vec<_> = records.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["signUp", "signOut"]);
    }

    #[tokio::test]
    async fn test_run_stops_at_first_failing_phase() {
        let engine = ScanEngine::new(MockPipeline {
            operations: vec!["signUp".to_string()],
            fail_collect: true,
        });

        let err = engine.run().await.unwrap_err();
        assert!(matches!(err, ScanError::IoError(_)));
    }
}

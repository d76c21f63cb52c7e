use crate::domain::ports::SourceStore;
use crate::utils::error::Result;
use std::path::{Path, PathBuf};

/// Resolves the models directory to the list of model declaration files:
/// entries whose file name carries the configured prefix, sorted by name.
///
/// The underlying listing order is platform-defined; sorting pins the fold
/// order so that last-writer-wins on duplicate declarations is
/// deterministic.
pub async fn model_paths<S: SourceStore>(
    store: &S,
    models_dir: &Path,
    prefix: &str,
) -> Result<Vec<PathBuf>> {
    let mut paths: Vec<PathBuf> = store
        .list_dir(models_dir)
        .await?
        .into_iter()
        .filter(|path| {
            path.file_name()
                .and_then(|name| name.to_str())
                .is_some_and(|name| name.starts_with(prefix))
        })
        .collect();
    paths.sort();

    tracing::debug!(
        "{} model files under {} match prefix `{}`",
        paths.len(),
        models_dir.display(),
        prefix
    );
    Ok(paths)
}

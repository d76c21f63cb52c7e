use crate::domain::model::SourceModule;
use crate::utils::error::{Result, ScanError};
use std::collections::HashSet;

/// Finds the designated client interface in the parsed client file and
/// returns its member names in declaration order, deduplicated on first
/// occurrence (an overloaded operation contributes one name).
pub fn discover_operations(
    client_module: &SourceModule,
    client_interface: &str,
) -> Result<Vec<String>> {
    let client = client_module
        .tree
        .interfaces
        .iter()
        .find(|decl| decl.name == client_interface)
        .ok_or_else(|| ScanError::ClientNotFoundError {
            interface: client_interface.to_string(),
            path: client_module.path.clone(),
        })?;

    let mut seen = HashSet::new();
    let mut operations = Vec::new();
    for member in &client.members {
        if seen.insert(member.name.clone()) {
            operations.push(member.name.clone());
        }
    }

    tracing::debug!(
        "client interface `{}` exposes {} operations ({} member signatures)",
        client_interface,
        operations.len(),
        client.members.len()
    );
    Ok(operations)
}

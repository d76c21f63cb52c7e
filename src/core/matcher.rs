use crate::core::extract::DeclarationTable;
use crate::domain::model::OperationRecord;
use crate::utils::error::{Result, ScanError};

/// Matches every discovered operation against the declaration table,
/// producing one record per operation in discovery order.
///
/// A missing `{Name}Request` declaration aborts the whole phase: callers get
/// the complete sequence or a single error, never a subset. A missing
/// `{Name}Response` is tolerated; some operations genuinely have no response
/// shape.
pub fn link_operations(
    operations: &[String],
    table: &DeclarationTable,
) -> Result<Vec<OperationRecord>> {
    let mut records = Vec::with_capacity(operations.len());
    for name in operations {
        let pascal_name = pascal_case(name);
        let request = table
            .lookup(&format!("{}Request", pascal_name))
            .cloned()
            .ok_or_else(|| ScanError::MissingDefinitionError {
                operation: name.clone(),
            })?;
        let response = table.lookup(&format!("{}Response", pascal_name)).cloned();
        if response.is_none() {
            tracing::debug!("operation `{}` has no response declaration", name);
        }
        records.push(OperationRecord {
            name: name.clone(),
            pascal_name,
            request,
            response,
        });
    }
    Ok(records)
}

/// Uppercases the first character, leaving the rest untouched.
fn pascal_case(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

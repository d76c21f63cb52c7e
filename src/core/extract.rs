use crate::domain::model::{Declaration, SourceModule};
use std::collections::HashMap;

/// Collects the top-level interface declarations of one module, keyed by
/// name. If a module declares the same name twice the later declaration
/// wins; the overwrite is logged but not an error.
pub fn extract_top_level_interfaces(module: &SourceModule) -> HashMap<String, Declaration> {
    let mut declarations = HashMap::new();
    for decl in &module.tree.interfaces {
        let previous = declarations.insert(
            decl.name.clone(),
            Declaration {
                name: decl.name.clone(),
                module_path: module.path.clone(),
                node: decl.clone(),
            },
        );
        if let Some(previous) = previous {
            tracing::warn!(
                "`{}` declared twice in {} (lines {} and {}), keeping the later one",
                decl.name,
                module.path.display(),
                previous.node.line,
                decl.line
            );
        }
    }
    declarations
}

/// The merged, name-keyed registry of declarations across all model files.
///
/// Built by folding each module's extractor output in the committed
/// processing order (sorted file names); a later module's entry replaces an
/// earlier module's entry of the same name. Last-writer-wins is deliberate
/// and matches how generated model files shadow each other.
#[derive(Debug, Default)]
pub struct DeclarationTable {
    entries: HashMap<String, Declaration>,
}

impl DeclarationTable {
    pub fn merge(&mut self, declarations: HashMap<String, Declaration>) {
        for (name, decl) in declarations {
            if let Some(previous) = self.entries.insert(name, decl) {
                let current = &self.entries[&previous.name];
                tracing::warn!(
                    "`{}` redefined by {} (previously {}), keeping the later one",
                    previous.name,
                    current.module_path.display(),
                    previous.module_path.display()
                );
            }
        }
    }

    pub fn lookup(&self, name: &str) -> Option<&Declaration> {
        self.entries.get(name)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

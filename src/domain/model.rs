use serde::Serialize;
use std::path::PathBuf;

/// One declaration source file after parsing. Immutable once built.
#[derive(Debug, Clone, Serialize)]
pub struct SourceModule {
    pub path: PathBuf,
    pub raw: String,
    pub tree: Module,
}

/// The parsed shape of a declaration file: its top-level interface
/// declarations, in source order. Declarations nested inside namespaces or
/// other blocks are not represented.
#[derive(Debug, Clone, Serialize)]
pub struct Module {
    pub interfaces: Vec<InterfaceDecl>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InterfaceDecl {
    pub name: String,
    pub members: Vec<MemberSig>,
    pub line: usize,
}

/// A named member signature. Overloads contribute one entry per signature.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MemberSig {
    pub name: String,
    pub line: usize,
}

/// A top-level interface declaration keyed into the declaration table,
/// tagged with the module that produced it. When several modules declare the
/// same name, only the last one folded survives.
#[derive(Debug, Clone, Serialize)]
pub struct Declaration {
    pub name: String,
    pub module_path: PathBuf,
    pub node: InterfaceDecl,
}

/// One client operation matched against its request/response declarations.
/// A missing response declaration is normal; a missing request declaration
/// prevents this record from ever being built.
#[derive(Debug, Clone, Serialize)]
pub struct OperationRecord {
    pub name: String,
    pub pascal_name: String,
    pub request: Declaration,
    pub response: Option<Declaration>,
}

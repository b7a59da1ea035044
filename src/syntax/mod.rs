//! Minimal ES-module syntax model.
//!
//! The pipeline's static-analysis engine produces full syntax trees; this
//! crate only ever inspects the export-bearing top level of a module. The
//! types here form a closed set of tagged variants over exactly the node
//! kinds the export analysis handles — anything else collapses into an opaque
//! [`ModuleItem::Statement`] and contributes no identifiers.

mod ast;

pub use ast::{
    Declaration, ExportSpecifier, Module, ModuleItem, NamedExport, ObjectPatternProperty,
    Pattern, VariableDeclarator,
};

//! # modulizer-core
//!
//! Core library for converting HTML-import projects into ES modules:
//! export renaming and project conversion orchestration.
//!
//! ## Module Structure (dependency order)
//!
//! ```text
//! convert   → ProjectConverter orchestration, results cache, results assembly
//!   ↓
//! registry  → export name assignment, export analysis, reservation pass
//!   ↓
//! manifest  → Bundle, BundleKind, BundleManifest
//!   ↓
//! syntax    → minimal ES-module AST (closed tagged variants)
//!   ↓
//! base      → URL newtypes, file-path derivation
//! ```
//!
//! The heavy lifting — static analysis of the document graph and the actual
//! syntactic rewriting of each document — lives behind the trait seams in
//! [`convert`]. This crate owns what sits between them: deciding which unique
//! name each original export receives inside its target bundle, and driving
//! each document through conversion exactly once.

// ============================================================================
// MODULES (dependency order: base → syntax → manifest → registry → convert)
// ============================================================================

/// Foundation types: document URLs, converted file paths
pub mod base;

/// Minimal ES-module AST over the export-bearing node kinds
pub mod syntax;

/// Bundle model: member sets and per-bundle export name maps
pub mod manifest;

/// Export Name Registry: unique name assignment and reservation
pub mod registry;

/// Project Converter: per-document conversion, caching, final results
pub mod convert;

mod error;

pub use error::ConvertError;

// Re-export foundation types
pub use base::{ConvertedDocumentFilePath, OriginalDocumentUrl};
pub use convert::{
    ConversionResult, ConversionType, Document, DocumentKind, DocumentRewriter, ProjectConverter,
    ProjectScanner,
};
pub use manifest::{Bundle, BundleKind, BundleManifest};
pub use registry::ModuleGraphProvider;

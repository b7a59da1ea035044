//! Error types for the conversion core.
//!
//! The core performs no local recovery: collaborator failures (scan,
//! analysis, rewriting) propagate unchanged, and the contract/consistency
//! variants below are fatal to the conversion run that raised them.

use thiserror::Error;

use crate::base::OriginalDocumentUrl;

/// Failures surfaced by the conversion core.
#[derive(Debug, Error)]
pub enum ConvertError {
    /// `convert_document` was called on a source file that is not a
    /// top-level document. A programming error in the orchestration above
    /// this core, never retried.
    #[error("cannot convert non-document source as a top-level document: {url}")]
    NotATopLevelDocument { url: OriginalDocumentUrl },

    /// A document in the graph has no scan classification. Indicates the
    /// document graph and the scan results disagree; retrying without an
    /// external state change cannot succeed.
    #[error("no scan results found for document: {url}")]
    MissingScanResult { url: OriginalDocumentUrl },

    /// The reservation pass asked the analysis for a module it could not
    /// produce.
    #[error("module not found in analysis: {url}")]
    ModuleNotFound { url: OriginalDocumentUrl },

    /// Failure from an external collaborator (scan, analysis, rewriting),
    /// passed through unchanged.
    #[error(transparent)]
    External(#[from] Box<dyn std::error::Error + Send + Sync>),
}

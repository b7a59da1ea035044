//! Capability seams to the static-analysis engine and the AST rewriter.
//!
//! Both collaborators live outside this crate. The converter only relies on
//! the contracts below: the scanner is idempotent on re-scans, and the
//! rewriter returns every record for one document in a single call so the
//! cache can commit them atomically.

use crate::base::OriginalDocumentUrl;
use crate::error::ConvertError;

use super::document::{ConversionResult, ConversionType, Document};

/// The project scanning capability: builds the document graph, classifies
/// every file, and answers classification lookups.
pub trait ProjectScanner {
    /// Scan a package and its transitive dependencies, returning the
    /// top-level documents belonging to the matched package.
    fn scan_package(&mut self, package: &str) -> Result<Vec<Document>, ConvertError>;

    /// Ensure one document has been scanned. Scanning an already-processed
    /// document must be a no-op.
    fn scan_document(&mut self, document: &Document) -> Result<(), ConvertError>;

    /// The scan's classification for a document's canonical URL, if any.
    fn classification_of(&self, url: &OriginalDocumentUrl) -> Option<ConversionType>;
}

/// The syntax-rewriting capability: turns one analyzed document into its
/// converted form, using the aggregate export map resolved upstream.
pub trait DocumentRewriter {
    /// Convert a document's scripts into JS modules. A single HTML document
    /// may fan out into several module outputs (externalized inline scripts),
    /// each carrying its own original URL.
    fn convert_as_js_module(
        &mut self,
        document: &Document,
    ) -> Result<Vec<ConversionResult>, ConvertError>;

    /// Convert a document in place as a top-level HTML document.
    fn convert_as_top_level_html_document(
        &mut self,
        document: &Document,
    ) -> Result<ConversionResult, ConvertError>;
}

//! The project converter: one-shot conversion of every document, with a
//! write-once results cache and final results assembly.

use indexmap::IndexMap;

use crate::base::{ConvertedDocumentFilePath, OriginalDocumentUrl};
use crate::error::ConvertError;

use super::document::{ConversionResult, ConversionType, Document};
use super::traits::{DocumentRewriter, ProjectScanner};

/// Files that were already authored as ES modules. They pass through the
/// pipeline so references to them get rewritten, but their contents must
/// never be overwritten in the output set.
const PRE_CONVERTED_FILES: &[&str] = &[
    "./shadycss/apply-shim.min.js",
    "./shadycss/custom-style-interface.min.js",
];

/// Orchestrates conversion of a project's documents into module artifacts.
///
/// Each original document is converted at most once, no matter how many
/// paths reach it (explicit [`convert_document`] calls, membership in a
/// [`convert_package`] sweep, or both). Results are cached by original URL
/// and assembled into the final output map by [`get_results`].
///
/// [`convert_document`]: ProjectConverter::convert_document
/// [`convert_package`]: ProjectConverter::convert_package
/// [`get_results`]: ProjectConverter::get_results
pub struct ProjectConverter<S, R> {
    scanner: S,
    rewriter: R,
    /// Write-once per key; append-only for the lifetime of the run.
    results: IndexMap<OriginalDocumentUrl, ConversionResult>,
}

impl<S: ProjectScanner, R: DocumentRewriter> ProjectConverter<S, R> {
    pub fn new(scanner: S, rewriter: R) -> Self {
        Self {
            scanner,
            rewriter,
            results: IndexMap::new(),
        }
    }

    /// Convert every document belonging to `package` (and ensure its
    /// transitive dependencies are scanned).
    ///
    /// Order across documents carries no correctness weight; only the
    /// reservation pass in [`crate::registry`] is order-sensitive, and it
    /// runs before any conversion.
    pub fn convert_package(&mut self, package: &str) -> Result<(), ConvertError> {
        tracing::debug!(package, "converting package");
        let documents = self.scanner.scan_package(package)?;
        for document in &documents {
            self.convert_document(document)?;
        }
        Ok(())
    }

    /// Convert one top-level document.
    ///
    /// Safe to call redundantly: a document already in the results cache is
    /// left untouched. Calling this on a member of an already converted
    /// package is a no-op, not a double conversion.
    pub fn convert_document(&mut self, document: &Document) -> Result<(), ConvertError> {
        if !document.is_html_document() {
            return Err(ConvertError::NotATopLevelDocument {
                url: document.url().clone(),
            });
        }
        if self.results.contains_key(document.url()) {
            return Ok(());
        }

        self.scanner.scan_document(document)?;
        let classification = self
            .scanner
            .classification_of(document.url())
            .ok_or_else(|| ConvertError::MissingScanResult {
                url: document.url().clone(),
            })?;

        tracing::debug!(url = %document.url(), ?classification, "converting document");
        // Collect the full record set before the first cache write, so a
        // rewriter failure leaves the cache untouched for this document.
        let records = match classification {
            ConversionType::JsModule => self.rewriter.convert_as_js_module(document)?,
            ConversionType::HtmlDocument => {
                vec![self.rewriter.convert_as_top_level_html_document(document)?]
            }
            ConversionType::DeleteFile => {
                vec![ConversionResult::delete(document.url().clone())]
            }
        };
        for record in records {
            self.results
                .entry(record.original_url.clone())
                .or_insert(record);
        }
        Ok(())
    }

    /// Assemble the final mapping from output path to content.
    ///
    /// `None` is an explicit tombstone: the path must be deleted from the
    /// output set. A single conversion record can contribute up to two
    /// entries — a tombstone for its original path and a write of its
    /// converted output. Read-only and repeatable; reflects exactly the
    /// documents converted so far.
    pub fn get_results(&self) -> IndexMap<ConvertedDocumentFilePath, Option<String>> {
        let mut outputs = IndexMap::new();
        for result in self.results.values() {
            if PRE_CONVERTED_FILES.contains(&result.original_url.as_str()) {
                continue;
            }
            if result.delete_original {
                outputs.insert(
                    ConvertedDocumentFilePath::from_original(&result.original_url),
                    None,
                );
            }
            if let Some(output) = &result.output {
                outputs.insert(result.converted_file_path.clone(), Some(output.clone()));
            }
        }
        outputs
    }
}

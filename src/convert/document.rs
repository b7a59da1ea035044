//! Document handles and conversion records.

use crate::base::{ConvertedDocumentFilePath, OriginalDocumentUrl};

/// What kind of source a document handle refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DocumentKind {
    /// A top-level markup document (the only kind `convert_document` accepts).
    HtmlDocument,
    /// A script-only source file.
    JsModule,
}

/// A document as surfaced by the external analysis: its canonical URL plus
/// the kind the analyzer attributed to it. The parsed tree stays with the
/// analyzer; this core never needs it for orchestration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    url: OriginalDocumentUrl,
    kind: DocumentKind,
}

impl Document {
    pub fn new(url: OriginalDocumentUrl, kind: DocumentKind) -> Self {
        Self { url, kind }
    }

    pub fn url(&self) -> &OriginalDocumentUrl {
        &self.url
    }

    pub fn kind(&self) -> DocumentKind {
        self.kind
    }

    pub fn is_html_document(&self) -> bool {
        self.kind == DocumentKind::HtmlDocument
    }
}

/// The scan's classification of one document: how it must be converted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ConversionType {
    /// Convert to one or more JS modules (inline scripts fan out).
    JsModule,
    /// Convert in place as a top-level HTML document.
    HtmlDocument,
    /// Remove the file from the output set.
    DeleteFile,
}

/// The outcome of converting one original document.
///
/// Created exactly once per original URL; the converter's cache never
/// mutates an entry after the first write.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConversionResult {
    /// Identity of the source document this record was produced from.
    pub original_url: OriginalDocumentUrl,
    /// Where the converted artifact lands in the output set.
    pub converted_file_path: ConvertedDocumentFilePath,
    /// Converted source text; `None` means no textual change was needed.
    pub output: Option<String>,
    /// Whether the original file must be deleted from the output set.
    pub delete_original: bool,
}

impl ConversionResult {
    /// A record that only deletes the original file.
    pub fn delete(original_url: OriginalDocumentUrl) -> Self {
        let converted_file_path = ConvertedDocumentFilePath::from_original(&original_url);
        Self {
            original_url,
            converted_file_path,
            output: None,
            delete_original: true,
        }
    }
}

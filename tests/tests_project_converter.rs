//! Integration tests for `ProjectConverter` against mock collaborators.

use std::cell::RefCell;
use std::rc::Rc;

use rustc_hash::FxHashMap;

use modulizer::{
    ConversionResult, ConversionType, ConvertError, ConvertedDocumentFilePath, Document,
    DocumentKind, DocumentRewriter, OriginalDocumentUrl, ProjectConverter, ProjectScanner,
};

fn url(s: &str) -> OriginalDocumentUrl {
    OriginalDocumentUrl::new(s)
}

fn html_doc(s: &str) -> Document {
    Document::new(url(s), DocumentKind::HtmlDocument)
}

/// Scanner over a fixed classification table. Counts scans per URL so tests
/// can assert re-scan behavior.
#[derive(Default)]
struct MockScanner {
    package_documents: Vec<Document>,
    classifications: FxHashMap<OriginalDocumentUrl, ConversionType>,
    scan_counts: Rc<RefCell<FxHashMap<OriginalDocumentUrl, usize>>>,
}

impl MockScanner {
    fn classify(mut self, doc_url: &str, classification: ConversionType) -> Self {
        self.classifications.insert(url(doc_url), classification);
        self
    }

    fn with_package(mut self, documents: Vec<Document>) -> Self {
        self.package_documents = documents;
        self
    }
}

impl ProjectScanner for MockScanner {
    fn scan_package(&mut self, _package: &str) -> Result<Vec<Document>, ConvertError> {
        Ok(self.package_documents.clone())
    }

    fn scan_document(&mut self, document: &Document) -> Result<(), ConvertError> {
        *self
            .scan_counts
            .borrow_mut()
            .entry(document.url().clone())
            .or_default() += 1;
        Ok(())
    }

    fn classification_of(&self, doc_url: &OriginalDocumentUrl) -> Option<ConversionType> {
        self.classifications.get(doc_url).copied()
    }
}

/// Rewriter returning canned records. Counts conversions per URL so tests
/// can assert each document rewrites at most once.
#[derive(Default)]
struct MockRewriter {
    js_module_records: FxHashMap<OriginalDocumentUrl, Vec<ConversionResult>>,
    html_records: FxHashMap<OriginalDocumentUrl, ConversionResult>,
    convert_counts: Rc<RefCell<FxHashMap<OriginalDocumentUrl, usize>>>,
    fail: bool,
}

impl MockRewriter {
    fn with_js_module(mut self, doc_url: &str, records: Vec<ConversionResult>) -> Self {
        self.js_module_records.insert(url(doc_url), records);
        self
    }

    fn with_html(mut self, doc_url: &str, record: ConversionResult) -> Self {
        self.html_records.insert(url(doc_url), record);
        self
    }

    fn count_conversion(&self, document: &Document) {
        *self
            .convert_counts
            .borrow_mut()
            .entry(document.url().clone())
            .or_default() += 1;
    }
}

impl DocumentRewriter for MockRewriter {
    fn convert_as_js_module(
        &mut self,
        document: &Document,
    ) -> Result<Vec<ConversionResult>, ConvertError> {
        self.count_conversion(document);
        if self.fail {
            return Err(ConvertError::External("rewrite failed".into()));
        }
        Ok(self
            .js_module_records
            .get(document.url())
            .cloned()
            .unwrap_or_default())
    }

    fn convert_as_top_level_html_document(
        &mut self,
        document: &Document,
    ) -> Result<ConversionResult, ConvertError> {
        self.count_conversion(document);
        Ok(self
            .html_records
            .get(document.url())
            .cloned()
            .expect("mock has no html record for document"))
    }
}

/// A record converting `original` (deleted) into `converted` with `output`.
fn module_record(original: &str, converted: &str, output: &str) -> ConversionResult {
    ConversionResult {
        original_url: url(original),
        converted_file_path: ConvertedDocumentFilePath::new(converted),
        output: Some(output.to_string()),
        delete_original: true,
    }
}

#[test]
fn test_delete_and_module_yield_tombstone_and_content() {
    let scanner = MockScanner::default()
        .classify("./app.html", ConversionType::JsModule)
        .classify("./old.html", ConversionType::DeleteFile);
    let rewriter = MockRewriter::default().with_js_module(
        "./app.html",
        vec![ConversionResult {
            original_url: url("./app.html"),
            converted_file_path: ConvertedDocumentFilePath::new("./app.js"),
            output: Some("export const app = 1;".to_string()),
            delete_original: false,
        }],
    );
    let mut converter = ProjectConverter::new(scanner, rewriter);

    converter.convert_document(&html_doc("./app.html")).unwrap();
    converter.convert_document(&html_doc("./old.html")).unwrap();

    let results = converter.get_results();
    assert_eq!(results.len(), 2);
    assert_eq!(
        results.get(&ConvertedDocumentFilePath::new("./app.js")),
        Some(&Some("export const app = 1;".to_string()))
    );
    // Tombstone, distinguishable from "no entry for this path".
    assert_eq!(
        results.get(&ConvertedDocumentFilePath::new("./old.html")),
        Some(&None)
    );
}

#[test]
fn test_convert_document_twice_is_a_noop() {
    let counts = Rc::new(RefCell::new(FxHashMap::default()));
    let scans = Rc::new(RefCell::new(FxHashMap::default()));
    let mut scanner = MockScanner::default().classify("./app.html", ConversionType::JsModule);
    scanner.scan_counts = Rc::clone(&scans);
    let mut rewriter = MockRewriter::default().with_js_module(
        "./app.html",
        vec![module_record("./app.html", "./app.js", "one")],
    );
    rewriter.convert_counts = Rc::clone(&counts);
    let mut converter = ProjectConverter::new(scanner, rewriter);

    converter.convert_document(&html_doc("./app.html")).unwrap();
    let first = converter.get_results();
    converter.convert_document(&html_doc("./app.html")).unwrap();
    let second = converter.get_results();

    assert_eq!(first, second);
    assert_eq!(counts.borrow().get(&url("./app.html")), Some(&1));
    assert_eq!(scans.borrow().get(&url("./app.html")), Some(&1));
}

#[test]
fn test_package_then_member_document_converts_once() {
    let counts = Rc::new(RefCell::new(FxHashMap::default()));
    let scanner = MockScanner::default()
        .classify("./app.html", ConversionType::JsModule)
        .classify("./old.html", ConversionType::DeleteFile)
        .with_package(vec![html_doc("./app.html"), html_doc("./old.html")]);
    let mut rewriter = MockRewriter::default().with_js_module(
        "./app.html",
        vec![module_record("./app.html", "./app.js", "one")],
    );
    rewriter.convert_counts = Rc::clone(&counts);
    let mut converter = ProjectConverter::new(scanner, rewriter);

    converter.convert_package("my-app").unwrap();
    converter.convert_document(&html_doc("./app.html")).unwrap();

    assert_eq!(counts.borrow().get(&url("./app.html")), Some(&1));
    assert_eq!(converter.get_results().len(), 3);
}

#[test]
fn test_inline_script_fanout_commits_every_record() {
    let scanner = MockScanner::default().classify("./page.html", ConversionType::JsModule);
    let rewriter = MockRewriter::default().with_js_module(
        "./page.html",
        vec![
            module_record("./page.html", "./page.js", "import './page.inline.js';"),
            module_record("./page.inline.js", "./page.inline.js", "export const x = 1;"),
        ],
    );
    let mut converter = ProjectConverter::new(scanner, rewriter);

    converter.convert_document(&html_doc("./page.html")).unwrap();

    let results = converter.get_results();
    assert!(results.contains_key(&ConvertedDocumentFilePath::new("./page.js")));
    assert!(results.contains_key(&ConvertedDocumentFilePath::new("./page.inline.js")));
}

#[test]
fn test_html_document_replaced_by_module_emits_two_entries() {
    // One record: delete ./index.html, write ./index.js.
    let scanner = MockScanner::default().classify("./index.html", ConversionType::HtmlDocument);
    let rewriter = MockRewriter::default().with_html(
        "./index.html",
        module_record("./index.html", "./index.js", "export {};"),
    );
    let mut converter = ProjectConverter::new(scanner, rewriter);

    converter.convert_document(&html_doc("./index.html")).unwrap();

    let results = converter.get_results();
    assert_eq!(results.len(), 2);
    assert_eq!(
        results.get(&ConvertedDocumentFilePath::new("./index.html")),
        Some(&None)
    );
    assert_eq!(
        results.get(&ConvertedDocumentFilePath::new("./index.js")),
        Some(&Some("export {};".to_string()))
    );
}

#[test]
fn test_pre_converted_files_never_surface() {
    let scanner = MockScanner::default()
        .classify("./shadycss/apply-shim.min.js", ConversionType::JsModule);
    let rewriter = MockRewriter::default().with_js_module(
        "./shadycss/apply-shim.min.js",
        vec![ConversionResult {
            original_url: url("./shadycss/apply-shim.min.js"),
            converted_file_path: ConvertedDocumentFilePath::new("./shadycss/apply-shim.min.js"),
            output: Some("rewritten".to_string()),
            delete_original: false,
        }],
    );
    let mut converter = ProjectConverter::new(scanner, rewriter);

    converter
        .convert_document(&html_doc("./shadycss/apply-shim.min.js"))
        .unwrap();

    assert!(converter.get_results().is_empty());
}

#[test]
fn test_non_document_source_is_a_contract_error() {
    let scanner = MockScanner::default();
    let rewriter = MockRewriter::default();
    let mut converter = ProjectConverter::new(scanner, rewriter);

    let err = converter
        .convert_document(&Document::new(url("./util.js"), DocumentKind::JsModule))
        .unwrap_err();
    assert!(matches!(err, ConvertError::NotATopLevelDocument { .. }));
}

#[test]
fn test_missing_classification_propagates_with_url() {
    let scanner = MockScanner::default();
    let rewriter = MockRewriter::default();
    let mut converter = ProjectConverter::new(scanner, rewriter);

    let err = converter
        .convert_document(&html_doc("./mystery.html"))
        .unwrap_err();
    match err {
        ConvertError::MissingScanResult { url: offending } => {
            assert_eq!(offending.as_str(), "./mystery.html");
        }
        other => panic!("expected MissingScanResult, got {other:?}"),
    }
}

#[test]
fn test_rewriter_failure_leaves_cache_untouched() {
    let scanner = MockScanner::default().classify("./app.html", ConversionType::JsModule);
    let rewriter = MockRewriter {
        fail: true,
        ..MockRewriter::default()
    };
    let mut converter = ProjectConverter::new(scanner, rewriter);

    let err = converter.convert_document(&html_doc("./app.html"));
    assert!(err.is_err());
    assert!(converter.get_results().is_empty());
}

#[test]
fn test_results_reflect_only_converted_documents() {
    let scanner = MockScanner::default()
        .classify("./a.html", ConversionType::DeleteFile)
        .classify("./b.html", ConversionType::DeleteFile);
    let rewriter = MockRewriter::default();
    let mut converter = ProjectConverter::new(scanner, rewriter);

    converter.convert_document(&html_doc("./a.html")).unwrap();
    assert_eq!(converter.get_results().len(), 1);

    converter.convert_document(&html_doc("./b.html")).unwrap();
    assert_eq!(converter.get_results().len(), 2);
}

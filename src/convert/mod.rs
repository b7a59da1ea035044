//! Project conversion orchestration.
//!
//! [`ProjectConverter`] drives each document of a project through conversion
//! exactly once, delegating the actual syntax rewriting to an external
//! [`DocumentRewriter`] and the graph/classification work to an external
//! [`ProjectScanner`]. Its results cache is write-once per original URL;
//! [`ProjectConverter::get_results`] assembles the final output-path map.

mod converter;
mod document;
mod traits;

pub use converter::ProjectConverter;
pub use document::{ConversionResult, ConversionType, Document, DocumentKind};
pub use traits::{DocumentRewriter, ProjectScanner};

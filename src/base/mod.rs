//! Foundation types for the conversion pipeline.
//!
//! This module provides fundamental types used throughout the crate:
//! - [`OriginalDocumentUrl`] - Package-relative URL of a source document
//! - [`ConvertedDocumentFilePath`] - On-disk path of a converted artifact
//!
//! This module has NO dependencies on other modulizer modules.

mod urls;

pub use urls::{ConvertedDocumentFilePath, OriginalDocumentUrl};

//! URL newtypes for document identity.
//!
//! The conversion pipeline tracks every document by its package-relative URL
//! (e.g. `"./src/my-element.html"`). Original URLs and converted output paths
//! are kept as distinct types so the two can never be mixed up when assembling
//! the final results map.

use std::fmt;

use smol_str::SmolStr;

/// Package-relative URL of an original (pre-conversion) document.
///
/// This is the identity under which scan results and conversion results are
/// keyed. Cheap to clone.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct OriginalDocumentUrl(SmolStr);

impl OriginalDocumentUrl {
    pub fn new(url: impl Into<SmolStr>) -> Self {
        Self(url.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The file name component: everything after the last `/`.
    pub fn file_name(&self) -> &str {
        match self.0.rfind('/') {
            Some(idx) => &self.0[idx + 1..],
            None => &self.0,
        }
    }
}

impl fmt::Display for OriginalDocumentUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for OriginalDocumentUrl {
    fn from(url: &str) -> Self {
        Self::new(url)
    }
}

/// Path of a converted artifact in the output file set.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ConvertedDocumentFilePath(SmolStr);

impl ConvertedDocumentFilePath {
    pub fn new(path: impl Into<SmolStr>) -> Self {
        Self(path.into())
    }

    /// The output path an *unconverted* original occupies.
    ///
    /// Used for deletion tombstones: the original URL names the file that
    /// must disappear from the output set.
    pub fn from_original(url: &OriginalDocumentUrl) -> Self {
        Self(SmolStr::new(url.as_str()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ConvertedDocumentFilePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ConvertedDocumentFilePath {
    fn from(path: &str) -> Self {
        Self::new(path)
    }
}

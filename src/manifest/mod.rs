//! Bundle model: which original modules merge into which output artifact.
//!
//! Bundle assignment itself is computed upstream; this crate consumes it as a
//! precomputed [`BundleManifest`] and owns only the per-bundle export-name
//! maps that the registry mutates.

mod bundle;

pub use bundle::{Bundle, BundleKind, BundleManifest};

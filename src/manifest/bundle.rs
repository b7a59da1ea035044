//! Bundle state: member modules and assigned export names.

use indexmap::IndexMap;
use rustc_hash::FxHashSet;
use smol_str::SmolStr;

use crate::base::OriginalDocumentUrl;

/// How a bundle is emitted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BundleKind {
    /// Emitted as a single ES module; participates in export renaming.
    EsModule,
    /// Emitted as a top-level HTML document.
    Html,
}

/// One output unit: a set of original modules merged into a single artifact.
///
/// The export-name map is the only mutable state the registry maintains.
/// Invariant: across all member modules of one bundle, no two entries share
/// an assigned name. Uniqueness is per bundle, not per project.
#[derive(Debug, Clone)]
pub struct Bundle {
    url: OriginalDocumentUrl,
    kind: BundleKind,
    members: FxHashSet<OriginalDocumentUrl>,
    /// member module URL → (original export name → assigned unique name)
    export_names: IndexMap<OriginalDocumentUrl, IndexMap<SmolStr, SmolStr>>,
}

impl Bundle {
    pub fn new(
        url: OriginalDocumentUrl,
        kind: BundleKind,
        members: impl IntoIterator<Item = OriginalDocumentUrl>,
    ) -> Self {
        Self {
            url,
            kind,
            members: members.into_iter().collect(),
            export_names: IndexMap::new(),
        }
    }

    pub fn url(&self) -> &OriginalDocumentUrl {
        &self.url
    }

    pub fn kind(&self) -> BundleKind {
        self.kind
    }

    pub fn contains(&self, module: &OriginalDocumentUrl) -> bool {
        self.members.contains(module)
    }

    pub fn members(&self) -> impl Iterator<Item = &OriginalDocumentUrl> {
        self.members.iter()
    }

    /// The memoized name for `(module, original)`, if one was assigned.
    pub fn assigned_name(&self, module: &OriginalDocumentUrl, original: &str) -> Option<&SmolStr> {
        self.export_names.get(module)?.get(original)
    }

    /// Whether `name` is already assigned to *any* export of *any* member.
    pub fn is_name_taken(&self, name: &str) -> bool {
        self.export_names
            .values()
            .any(|names| names.values().any(|assigned| assigned == name))
    }

    /// Record an assignment. First write wins; a second write for the same
    /// `(module, original)` pair is ignored so assignments stay immutable.
    pub(crate) fn record_name(
        &mut self,
        module: &OriginalDocumentUrl,
        original: &str,
        assigned: SmolStr,
    ) {
        self.export_names
            .entry(module.clone())
            .or_default()
            .entry(SmolStr::new(original))
            .or_insert(assigned);
    }

    /// All assigned names for one member module, in assignment order.
    pub fn module_export_names(
        &self,
        module: &OriginalDocumentUrl,
    ) -> Option<&IndexMap<SmolStr, SmolStr>> {
        self.export_names.get(module)
    }
}

/// Precomputed bundle assignment for a whole project, keyed by bundle URL.
#[derive(Debug, Clone, Default)]
pub struct BundleManifest {
    bundles: IndexMap<OriginalDocumentUrl, Bundle>,
}

impl BundleManifest {
    pub fn new(bundles: impl IntoIterator<Item = Bundle>) -> Self {
        Self {
            bundles: bundles
                .into_iter()
                .map(|bundle| (bundle.url.clone(), bundle))
                .collect(),
        }
    }

    pub fn bundle(&self, url: &OriginalDocumentUrl) -> Option<&Bundle> {
        self.bundles.get(url)
    }

    pub fn bundle_mut(&mut self, url: &OriginalDocumentUrl) -> Option<&mut Bundle> {
        self.bundles.get_mut(url)
    }

    /// The bundle a given module was assigned to, if any.
    pub fn bundle_for_module(&self, module: &OriginalDocumentUrl) -> Option<&Bundle> {
        self.bundles.values().find(|bundle| bundle.contains(module))
    }

    pub fn bundles(&self) -> impl Iterator<Item = &Bundle> {
        self.bundles.values()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn url(s: &str) -> OriginalDocumentUrl {
        OriginalDocumentUrl::new(s)
    }

    #[test]
    fn test_record_name_is_write_once() {
        let mut bundle = Bundle::new(url("./a.html"), BundleKind::EsModule, [url("./a.html")]);
        bundle.record_name(&url("./a.html"), "foo", SmolStr::new("foo"));
        bundle.record_name(&url("./a.html"), "foo", SmolStr::new("bar"));
        assert_eq!(
            bundle.assigned_name(&url("./a.html"), "foo").map(|n| n.as_str()),
            Some("foo")
        );
    }

    #[test]
    fn test_is_name_taken_scans_all_members() {
        let mut bundle = Bundle::new(
            url("./out.html"),
            BundleKind::EsModule,
            [url("./a.html"), url("./b.html")],
        );
        bundle.record_name(&url("./a.html"), "x", SmolStr::new("x"));
        bundle.record_name(&url("./b.html"), "y", SmolStr::new("y"));
        assert!(bundle.is_name_taken("x"));
        assert!(bundle.is_name_taken("y"));
        assert!(!bundle.is_name_taken("z"));
    }

    #[test]
    fn test_bundle_for_module() {
        let bundle = Bundle::new(
            url("./out.html"),
            BundleKind::EsModule,
            [url("./a.html"), url("./b.html")],
        );
        let manifest = BundleManifest::new([bundle]);
        assert!(manifest.bundle_for_module(&url("./b.html")).is_some());
        assert!(manifest.bundle_for_module(&url("./c.html")).is_none());
    }
}

//! Batch pre-registration of export names for bundled modules.

use crate::base::OriginalDocumentUrl;
use crate::error::ConvertError;
use crate::manifest::{BundleKind, BundleManifest};
use crate::syntax::Module;

use super::exports::get_module_export_names;
use super::names::get_or_set_bundle_module_export_name;

/// Analysis access needed by the reservation pass: load a set of module URLs
/// and hand back their parsed top levels. Re-analyzing an already-processed
/// URL must be a no-op.
pub trait ModuleGraphProvider {
    fn analyze(&mut self, urls: &[OriginalDocumentUrl]) -> Result<(), ConvertError>;

    fn module(&self, url: &OriginalDocumentUrl) -> Option<&Module>;
}

/// Reserve preferred export names for every module that *is* its own bundle.
///
/// When a bundle's URL coincides with one of its members, that module is the
/// bundle (no siblings were merged in, or it is the bundle's entry). Its
/// exports are resolved eagerly here so they claim their unsuffixed trial
/// names before any sibling module added later can collide with them. This
/// only affects output readability, never correctness, but it must run to
/// completion before the main conversion sweep or the ordering is lost.
pub fn reserve_bundle_module_export_names<G: ModuleGraphProvider>(
    graph: &mut G,
    manifest: &mut BundleManifest,
) -> Result<(), ConvertError> {
    let entry_modules: Vec<OriginalDocumentUrl> = manifest
        .bundles()
        .filter(|bundle| bundle.kind() == BundleKind::EsModule)
        .filter(|bundle| bundle.contains(bundle.url()))
        .map(|bundle| bundle.url().clone())
        .collect();

    graph.analyze(&entry_modules)?;

    for url in entry_modules {
        let names = {
            let module = graph
                .module(&url)
                .ok_or_else(|| ConvertError::ModuleNotFound { url: url.clone() })?;
            get_module_export_names(module)
        };
        let bundle = manifest
            .bundle_mut(&url)
            .ok_or_else(|| ConvertError::ModuleNotFound { url: url.clone() })?;
        tracing::debug!(bundle = %url, count = names.len(), "reserving bundle export names");
        for name in &names {
            get_or_set_bundle_module_export_name(bundle, &url, name);
        }
    }
    Ok(())
}

//! Export analysis over a module's top level.

use indexmap::IndexSet;
use smol_str::SmolStr;

use crate::syntax::{Declaration, Module, ModuleItem, Pattern};

/// Whether a module's top level contains a default-export declaration.
///
/// Stops at the first match. Known gap, kept for compatibility with the
/// wider pipeline: `export {x as default};` is not detected.
pub fn has_default_module_export(module: &Module) -> bool {
    module
        .items
        .iter()
        .any(|item| matches!(item, ModuleItem::ExportDefault))
}

/// Every exported identifier bound by a module's named exports.
///
/// Collects identifiers bound via declarations (function, class, variable,
/// including destructured array/object patterns) and names from explicit
/// specifier lists, honoring `as` renaming — the *exported* name is
/// collected, not the local one. Wildcard re-exports (`export * from ...`)
/// are not expanded; names that only arrive transitively are absent.
pub fn get_module_export_names(module: &Module) -> IndexSet<SmolStr> {
    let mut names = IndexSet::new();
    for item in &module.items {
        let ModuleItem::ExportNamed(export) = item else {
            continue;
        };
        if let Some(declaration) = &export.declaration {
            collect_declaration_names(declaration, &mut names);
        }
        for specifier in &export.specifiers {
            names.insert(specifier.exported.clone());
        }
    }
    names
}

fn collect_declaration_names(declaration: &Declaration, names: &mut IndexSet<SmolStr>) {
    match declaration {
        Declaration::Function { name } | Declaration::Class { name } => {
            names.insert(name.clone());
        }
        Declaration::Variable { declarators } => {
            for declarator in declarators {
                collect_pattern_names(&declarator.id, names);
            }
        }
    }
}

fn collect_pattern_names(pattern: &Pattern, names: &mut IndexSet<SmolStr>) {
    match pattern {
        Pattern::Identifier(name) => {
            names.insert(name.clone());
        }
        Pattern::Object { properties } => {
            // The bound name is the property *value*: `{c: d}` binds `d`.
            for property in properties {
                collect_pattern_names(&property.value, names);
            }
        }
        Pattern::Array { elements } => {
            for element in elements.iter().flatten() {
                collect_pattern_names(element, names);
            }
        }
    }
}

//! Tagged-variant AST for the export surface of an ES module.

use smol_str::SmolStr;

/// The parsed top level of one ES module.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Module {
    pub items: Vec<ModuleItem>,
}

impl Module {
    pub fn new(items: Vec<ModuleItem>) -> Self {
        Self { items }
    }
}

/// One top-level item of a module.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ModuleItem {
    /// `export default <expression or declaration>`
    ExportDefault,
    /// `export { ... }`, `export const ...`, `export {a} from 'mod'`
    ExportNamed(NamedExport),
    /// `export * from 'mod'` — never expanded by export analysis
    ExportAll { source: SmolStr },
    /// Any other top-level statement; contributes no export identifiers.
    Statement,
}

/// A named-export declaration.
///
/// Either `declaration` or `specifiers` is populated; ES syntax does not
/// allow both on one statement, but the analysis tolerates it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NamedExport {
    pub declaration: Option<Declaration>,
    pub specifiers: Vec<ExportSpecifier>,
    /// Present for re-exports: `export {a} from './other.js'`.
    pub source: Option<SmolStr>,
}

impl NamedExport {
    /// `export function f() {}` / `export class C {}` / `export const ...`
    pub fn declaration(declaration: Declaration) -> Self {
        Self {
            declaration: Some(declaration),
            ..Self::default()
        }
    }

    /// `export {a, b as c};`
    pub fn specifiers(specifiers: Vec<ExportSpecifier>) -> Self {
        Self {
            specifiers,
            ..Self::default()
        }
    }
}

/// A declaration attached to an export statement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Declaration {
    Function { name: SmolStr },
    Class { name: SmolStr },
    Variable { declarators: Vec<VariableDeclarator> },
}

/// One `name = init` slot of a variable declaration. The initializer is
/// irrelevant to export analysis and is not modeled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VariableDeclarator {
    pub id: Pattern,
}

impl VariableDeclarator {
    pub fn new(id: Pattern) -> Self {
        Self { id }
    }
}

/// A binding pattern on the left-hand side of a declarator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Pattern {
    Identifier(SmolStr),
    /// `{a, b: c}` — each property may rebind under a different name.
    Object { properties: Vec<ObjectPatternProperty> },
    /// `[a, , b]` — holes are `None`.
    Array { elements: Vec<Option<Pattern>> },
}

impl Pattern {
    pub fn identifier(name: &str) -> Self {
        Self::Identifier(SmolStr::new(name))
    }
}

/// One property of an object pattern. For `{b}` the key and value coincide;
/// for `{c: d}` the bound name lives in `value`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ObjectPatternProperty {
    pub key: SmolStr,
    pub value: Pattern,
}

impl ObjectPatternProperty {
    /// Shorthand `{b}` property.
    pub fn shorthand(name: &str) -> Self {
        Self {
            key: SmolStr::new(name),
            value: Pattern::identifier(name),
        }
    }

    /// Renaming `{key: value}` property.
    pub fn renamed(key: &str, value: Pattern) -> Self {
        Self {
            key: SmolStr::new(key),
            value,
        }
    }
}

/// One entry of an `export {local as exported}` specifier list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportSpecifier {
    pub local: SmolStr,
    pub exported: SmolStr,
}

impl ExportSpecifier {
    /// `export {x};`
    pub fn named(name: &str) -> Self {
        Self {
            local: SmolStr::new(name),
            exported: SmolStr::new(name),
        }
    }

    /// `export {local as exported};`
    pub fn aliased(local: &str, exported: &str) -> Self {
        Self {
            local: SmolStr::new(local),
            exported: SmolStr::new(exported),
        }
    }
}

//! Export Name Registry.
//!
//! When several modules merge into one bundle their exports can collide by
//! name. The registry assigns each `(module, original export name)` pair a
//! unique identifier within its bundle, deterministically and exactly once,
//! so every import site across the project can be rewritten consistently.

mod exports;
mod names;
mod reserve;

pub use exports::{get_module_export_names, has_default_module_export};
pub use names::get_or_set_bundle_module_export_name;
pub use reserve::{ModuleGraphProvider, reserve_bundle_module_export_names};

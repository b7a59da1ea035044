//! Unique export name assignment within a bundle.

use smol_str::SmolStr;

use crate::base::OriginalDocumentUrl;
use crate::manifest::Bundle;

/// Resolve the unique name for one export of one module inside a bundle,
/// assigning it on first request.
///
/// Resolution is memoized: repeated calls with the same inputs return the
/// same name, so an export referenced from many import sites renames
/// identically everywhere. A freshly assigned name is guaranteed distinct
/// from every name already assigned to any other export in the bundle.
///
/// `original` is the export's name in the source module, or one of the
/// sentinels `"default"` (the module's default export) and `"*"` (the
/// module's namespace object).
pub fn get_or_set_bundle_module_export_name(
    bundle: &mut Bundle,
    module_url: &OriginalDocumentUrl,
    original: &str,
) -> SmolStr {
    if let Some(existing) = bundle.assigned_name(module_url, original) {
        return existing.clone();
    }

    let mut trial = trial_name(module_url, original);
    while bundle.is_name_taken(&trial) {
        trial = increment_suffix(&trial);
    }

    tracing::debug!(
        module = %module_url,
        original,
        assigned = %trial,
        "assigned bundle export name"
    );
    let assigned = SmolStr::new(&trial);
    bundle.record_name(module_url, original, assigned.clone());
    assigned
}

/// The deterministic candidate name, before collision checking.
fn trial_name(module_url: &OriginalDocumentUrl, original: &str) -> String {
    match original {
        "default" => format!("{}Default", module_name_prefix(module_url)),
        "*" => module_name_prefix(module_url),
        name => sanitize_identifier(name),
    }
}

/// A module-scoped prefix derived from the module's file name.
///
/// `"./src/my-element.html"` → `"$myElement"`. The leading `$` keeps
/// synthesized prefixes out of the space of ordinary export names.
fn module_name_prefix(module_url: &OriginalDocumentUrl) -> String {
    let file_name = module_url.file_name();
    let stem = match file_name.rfind('.') {
        Some(idx) if idx > 0 => &file_name[..idx],
        _ => file_name,
    };

    let mut prefix = String::with_capacity(stem.len() + 1);
    prefix.push('$');
    let mut boundary = false;
    for ch in stem.chars() {
        if ch.is_ascii_alphanumeric() || ch == '_' {
            if boundary {
                prefix.extend(ch.to_uppercase());
            } else {
                prefix.push(ch);
            }
            boundary = false;
        } else {
            // Any non-identifier run becomes a camel boundary.
            boundary = true;
        }
    }
    prefix
}

/// Replace every character outside `[A-Za-z0-9_]` with `$` so the result is
/// always a valid bare identifier.
fn sanitize_identifier(name: &str) -> String {
    name.chars()
        .map(|ch| {
            if ch.is_ascii_alphanumeric() || ch == '_' {
                ch
            } else {
                '$'
            }
        })
        .collect()
}

/// Advance a colliding trial name to its next candidate.
///
/// A trailing `$<integer>` counts as a collision counter and increments;
/// anything else gets `$1` appended. A name that merely ends in bare digits
/// (`foo2`) is not treated as suffixed — its first collision yields `foo2$1`,
/// never `foo3`.
fn increment_suffix(name: &str) -> String {
    if let Some(idx) = name.rfind('$') {
        let digits = &name[idx + 1..];
        if !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit()) {
            if let Ok(counter) = digits.parse::<u64>() {
                return format!("{}${}", &name[..idx], counter + 1);
            }
        }
    }
    format!("{name}$1")
}

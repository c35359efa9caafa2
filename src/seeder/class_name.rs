use crate::*;
use std::path::{Component, Path};

/// Model class name derived from a table name: capitalized (first letter
/// upper, the rest lower), then singularized with two rules only, a trailing
/// `ies` becomes `y`, otherwise one trailing `s` is dropped.
pub fn default_class_name(table: &str) -> String {
    let mut chars = table.chars();
    let capitalized: String = match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    };

    if let Some(stem) = capitalized.strip_suffix("ies") {
        format!("{stem}y")
    } else if let Some(stem) = capitalized.strip_suffix('s') {
        stem.to_string()
    } else {
        capitalized
    }
}

/// Reject class names that cannot safely become `<name>.php` inside the
/// output directory.
pub fn validate_class_name(name: &str) -> Result {
    let invalid = |reason| Err(Error::InvalidClassName(name.to_string(), reason));

    if name.trim().is_empty() {
        return invalid("must not be empty");
    }
    if name.contains('/') || name.contains('\\') {
        return invalid("path separators are not allowed");
    }
    let candidate = Path::new(name);
    if candidate.is_absolute()
        || candidate.components().any(|component| {
            matches!(
                component,
                Component::ParentDir | Component::RootDir | Component::Prefix(_)
            )
        })
    {
        return invalid("traversal segments are not allowed");
    }
    Ok(())
}

//! Canonical path policy.
//!
//! Categories live at paths ending in `/`, links at paths without one.
//! Names never contain `/` (the compiler rejects them), so joining is plain
//! concatenation around a single separator.

/// Path of the root item.
pub const ROOT_PATH: &str = "/";

/// Path separator.
pub const SEPARATOR: char = '/';

/// Compute the canonical path of a child item.
pub fn child_path(parent: &str, name: &str, is_category: bool) -> String {
    let parent = parent.trim_end_matches(SEPARATOR);
    let name = name.trim_matches(SEPARATOR);

    let mut path = String::with_capacity(parent.len() + name.len() + 2);
    path.push_str(parent);
    path.push(SEPARATOR);
    path.push_str(name);
    if is_category && !path.ends_with(SEPARATOR) {
        path.push(SEPARATOR);
    }
    path
}

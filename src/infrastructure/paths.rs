//! Path helpers for configured file locations.
//!
//! Catalog and trace file paths come from host settings as plain strings and
//! may start with `~` to refer to the user's home directory.

use std::path::PathBuf;

/// Expands a leading `~` to the home directory.
///
/// The home directory is read from `HOME`. Paths are returned unchanged when
/// they do not start with `~` or when `HOME` is unset.
///
/// # Examples
///
/// ```
/// use recipe_shelf::infrastructure::expand_tilde;
/// use std::path::PathBuf;
///
/// assert_eq!(expand_tilde("/srv/catalog.json"), PathBuf::from("/srv/catalog.json"));
/// ```
#[must_use]
pub fn expand_tilde(path: &str) -> PathBuf {
    let home = std::env::var_os("HOME").map(PathBuf::from);
    expand_tilde_with(path, home)
}

fn expand_tilde_with(path: &str, home: Option<PathBuf>) -> PathBuf {
    match (path.strip_prefix("~/"), home) {
        (Some(rest), Some(home)) => home.join(rest),
        (None, Some(home)) if path == "~" => home,
        _ => PathBuf::from(path),
    }
}

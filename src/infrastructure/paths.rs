//! Path manipulation utilities.
//!
//! Functions for resolving filesystem paths: tilde expansion against the
//! user's home directory and the default storage location for listing data.

use std::path::PathBuf;

/// Returns the data directory for hostelfinder storage.
///
/// Resolves to `~/.local/share/hostelfinder`, falling back to a relative
/// `.hostelfinder` directory when `$HOME` is not set. The JSON storage file
/// `listings.json` is located within this directory.
#[must_use]
pub fn get_data_dir() -> PathBuf {
    match std::env::var("HOME") {
        Ok(home) => PathBuf::from(home)
            .join(".local")
            .join("share")
            .join("hostelfinder"),
        Err(_) => PathBuf::from(".hostelfinder"),
    }
}

/// Expands a leading tilde to the user's home directory.
///
/// Paths without a tilde prefix are returned unchanged, as is the input when
/// `$HOME` is not set.
///
/// # Examples
///
/// ```
/// use hostelfinder::infrastructure::expand_tilde;
///
/// std::env::set_var("HOME", "/home/priya");
/// assert_eq!(expand_tilde("~/hostels.json"), "/home/priya/hostels.json");
/// assert_eq!(expand_tilde("~"), "/home/priya");
/// assert_eq!(expand_tilde("/absolute/path"), "/absolute/path");
/// ```
#[must_use]
pub fn expand_tilde(path: &str) -> String {
    let Ok(home) = std::env::var("HOME") else {
        return path.to_string();
    };

    if let Some(rest) = path.strip_prefix("~/") {
        format!("{home}/{rest}")
    } else if path == "~" {
        home
    } else {
        path.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn expands_tilde_prefix() {
        std::env::set_var("HOME", "/home/test");
        assert_eq!(expand_tilde("~/data/listings.json"), "/home/test/data/listings.json");
        assert_eq!(expand_tilde("~"), "/home/test");
        assert_eq!(expand_tilde("/var/tmp/x"), "/var/tmp/x");
        assert_eq!(expand_tilde("relative/path"), "relative/path");
    }
}

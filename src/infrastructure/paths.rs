//! Filesystem path utilities.
//!
//! This module resolves where the application keeps its on-disk state (log
//! files) and handles tilde expansion for user-supplied paths such as custom
//! theme files.

use std::env;
use std::path::PathBuf;

/// Returns the data directory for application storage.
///
/// Resolution order:
/// 1. `$XDG_DATA_HOME/cinescout` when `XDG_DATA_HOME` is set
/// 2. `$HOME/.local/share/cinescout` otherwise
/// 3. `./.cinescout` as a last resort when neither variable is set
///
/// The trace log `cinescout.log` is written inside this directory.
#[must_use]
pub fn get_data_dir() -> PathBuf {
    if let Ok(xdg) = env::var("XDG_DATA_HOME") {
        if !xdg.is_empty() {
            return PathBuf::from(xdg).join("cinescout");
        }
    }
    if let Ok(home) = env::var("HOME") {
        if !home.is_empty() {
            return PathBuf::from(home).join(".local/share/cinescout");
        }
    }
    PathBuf::from(".cinescout")
}

/// Expands a leading tilde to the user's home directory.
///
/// Paths without a tilde prefix are returned unchanged, as is everything when
/// `HOME` is unset.
///
/// # Examples
///
/// ```
/// use cinescout::infrastructure::expand_tilde;
///
/// std::env::set_var("HOME", "/home/user");
/// assert_eq!(expand_tilde("~/themes/x.toml"), "/home/user/themes/x.toml");
/// assert_eq!(expand_tilde("/absolute/path"), "/absolute/path");
/// ```
#[must_use]
pub fn expand_tilde(path: &str) -> String {
    let Ok(home) = env::var("HOME") else {
        return path.to_string();
    };
    if path == "~" {
        home
    } else if let Some(rest) = path.strip_prefix("~/") {
        format!("{home}/{rest}")
    } else {
        path.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tilde_expansion_uses_home() {
        std::env::set_var("HOME", "/home/viewer");
        assert_eq!(expand_tilde("~"), "/home/viewer");
        assert_eq!(expand_tilde("~/t.toml"), "/home/viewer/t.toml");
        assert_eq!(expand_tilde("/etc/t.toml"), "/etc/t.toml");
        assert_eq!(expand_tilde("relative/t.toml"), "relative/t.toml");
    }
}

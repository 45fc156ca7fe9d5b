//! Path resolution for local data, logs, and configuration.
//!
//! The data directory defaults to `~/.local/share/whispr` and can be moved
//! with the `WHISPR_DATA_DIR` environment variable.

use std::path::PathBuf;

/// Environment variable overriding the data directory.
pub const DATA_DIR_ENV: &str = "WHISPR_DATA_DIR";

/// Returns the directory holding the whispr export and log files.
///
/// Resolution order:
/// 1. `$WHISPR_DATA_DIR` if set and non-empty
/// 2. `$HOME/.local/share/whispr`
/// 3. `.whispr` relative to the working directory
#[must_use]
pub fn get_data_dir() -> PathBuf {
    resolve_data_dir(
        std::env::var(DATA_DIR_ENV).ok().as_deref(),
        std::env::var("HOME").ok().as_deref(),
    )
}

fn resolve_data_dir(override_dir: Option<&str>, home: Option<&str>) -> PathBuf {
    if let Some(dir) = override_dir.filter(|d| !d.trim().is_empty()) {
        return PathBuf::from(expand_tilde_with(dir, home));
    }

    match home.filter(|h| !h.is_empty()) {
        Some(home) => PathBuf::from(home).join(".local").join("share").join("whispr"),
        None => PathBuf::from(".whispr"),
    }
}

/// Expands a leading `~` to the user's home directory.
///
/// Paths without a leading tilde, and all paths when `HOME` is unset, are
/// returned unchanged.
///
/// # Examples
///
/// ```
/// use whispr_dash::infrastructure::expand_tilde;
///
/// assert_eq!(expand_tilde("/absolute/path"), "/absolute/path");
/// ```
#[must_use]
pub fn expand_tilde(path: &str) -> String {
    expand_tilde_with(path, std::env::var("HOME").ok().as_deref())
}

fn expand_tilde_with(path: &str, home: Option<&str>) -> String {
    let Some(home) = home.filter(|h| !h.is_empty()) else {
        return path.to_string();
    };

    if path == "~" {
        home.to_string()
    } else if let Some(rest) = path.strip_prefix("~/") {
        format!("{}/{rest}", home.trim_end_matches('/'))
    } else {
        path.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tilde_expands_against_home() {
        assert_eq!(expand_tilde_with("~/notes", Some("/home/ana")), "/home/ana/notes");
        assert_eq!(expand_tilde_with("~", Some("/home/ana/")), "/home/ana/");
        assert_eq!(expand_tilde_with("~/x", Some("/home/ana/")), "/home/ana/x");
        assert_eq!(expand_tilde_with("/abs/~/x", Some("/home/ana")), "/abs/~/x");
        assert_eq!(expand_tilde_with("~other", Some("/home/ana")), "~other");
    }

    #[test]
    fn tilde_left_alone_without_home() {
        assert_eq!(expand_tilde_with("~/notes", None), "~/notes");
        assert_eq!(expand_tilde_with("~/notes", Some("")), "~/notes");
    }

    #[test]
    fn data_dir_prefers_override() {
        assert_eq!(
            resolve_data_dir(Some("/srv/whispr"), Some("/home/ana")),
            PathBuf::from("/srv/whispr")
        );
        assert_eq!(
            resolve_data_dir(Some("~/w"), Some("/home/ana")),
            PathBuf::from("/home/ana/w")
        );
    }

    #[test]
    fn data_dir_falls_back_to_home_then_local() {
        assert_eq!(
            resolve_data_dir(Some("  "), Some("/home/ana")),
            PathBuf::from("/home/ana/.local/share/whispr")
        );
        assert_eq!(resolve_data_dir(None, None), PathBuf::from(".whispr"));
    }
}

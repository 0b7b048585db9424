//! File name matching against component identifiers.
//!
//! Two modes are supported:
//!
//! | Mode     | `button` matches                          | `button` skips        |
//! |----------|-------------------------------------------|-----------------------|
//! | `exact`  | `button.css`, `button.min.js`, `button--dark.css` | `button-group.css` |
//! | `prefix` | anything starting with `button`           | -                     |
//!
//! `prefix` is the historical `{id}*` glob. It also picks up unrelated
//! components sharing a name prefix, which is why `exact` is the default.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use glob::{MatchOptions, Pattern};
use serde::{Deserialize, Serialize};

use crate::debug;
use crate::error::AssetError;

/// Explicit delimiter allowed after the identifier in `exact` mode.
pub(crate) const VARIANT_DELIMITER: &str = "--";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchMode {
    #[default]
    Exact,
    Prefix,
}

/// Compiled matcher for a single component identifier.
#[derive(Debug, Clone)]
pub(crate) struct ComponentMatcher {
    mode: MatchMode,
    id: String,
    pattern: Pattern,
}

impl ComponentMatcher {
    pub fn new(mode: MatchMode, id: &str) -> Result<Self, AssetError> {
        let pattern = Pattern::new(&format!("{}*", Pattern::escape(id)))?;
        Ok(Self {
            mode,
            id: id.to_string(),
            pattern,
        })
    }

    pub fn matches(&self, file_name: &str) -> bool {
        match self.mode {
            MatchMode::Prefix => self.pattern.matches_with(
                file_name,
                MatchOptions {
                    case_sensitive: true,
                    require_literal_separator: true,
                    require_literal_leading_dot: false,
                },
            ),
            MatchMode::Exact => {
                let stem = file_name.split('.').next().unwrap_or_default();
                stem == self.id
                    || stem
                        .strip_prefix(self.id.as_str())
                        .is_some_and(|rest| rest.starts_with(VARIANT_DELIMITER))
            }
        }
    }

    /// Matching non-directory entries directly inside `dir`, sorted by name.
    ///
    /// A root that is missing, not a directory or not listable yields no matches.
    pub fn find_in(&self, dir: &Path) -> Vec<PathBuf> {
        let entries = match fs::read_dir(dir) {
            Ok(entries) => entries,
            Err(err) => {
                if err.kind() != ErrorKind::NotFound {
                    debug!("resolve"; "skipping search root {}: {}", dir.display(), err);
                }
                return Vec::new();
            }
        };

        let mut found = Vec::new();
        for entry in entries {
            let entry = match entry {
                Ok(entry) => entry,
                Err(err) => {
                    debug!("resolve"; "skipping entry in {}: {}", dir.display(), err);
                    continue;
                }
            };
            let path = entry.path();
            if !path.is_dir() && self.matches(&entry.file_name().to_string_lossy()) {
                found.push(path);
            }
        }
        found.sort();
        found
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_exact_mode() {
        let m = ComponentMatcher::new(MatchMode::Exact, "button").unwrap();
        assert!(m.matches("button.css"));
        assert!(m.matches("button.min.js"));
        assert!(m.matches("button--dark.css"));
        assert!(!m.matches("button-group.css"));
        assert!(!m.matches("buttons.css"));
        assert!(!m.matches("Button.css"));
    }

    #[test]
    fn test_prefix_mode_overmatches() {
        let m = ComponentMatcher::new(MatchMode::Prefix, "button").unwrap();
        assert!(m.matches("button.css"));
        assert!(m.matches("button-group.css"));
        assert!(!m.matches("icon-button.css"));
    }

    #[test]
    fn test_glob_metacharacters_escaped() {
        let m = ComponentMatcher::new(MatchMode::Prefix, "a[b]").unwrap();
        assert!(m.matches("a[b].css"));
        assert!(!m.matches("ab.css"));
    }

    #[test]
    fn test_find_in_sorted_files_only() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("card.js"), "").unwrap();
        fs::write(dir.path().join("card.css"), "").unwrap();
        fs::write(dir.path().join("other.css"), "").unwrap();
        fs::create_dir(dir.path().join("card.d")).unwrap();

        let m = ComponentMatcher::new(MatchMode::Exact, "card").unwrap();
        let found = m.find_in(dir.path());
        assert_eq!(
            found,
            vec![dir.path().join("card.css"), dir.path().join("card.js")]
        );
    }

    #[test]
    fn test_find_in_missing_dir() {
        let dir = TempDir::new().unwrap();
        let m = ComponentMatcher::new(MatchMode::Exact, "card").unwrap();
        assert!(m.find_in(&dir.path().join("nope")).is_empty());
    }

    #[test]
    fn test_find_in_file_root() {
        let dir = TempDir::new().unwrap();
        let file = dir.path().join("card.css");
        fs::write(&file, "").unwrap();

        let m = ComponentMatcher::new(MatchMode::Exact, "card").unwrap();
        assert!(m.find_in(&file).is_empty());
    }
}

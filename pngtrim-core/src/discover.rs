//! PNG discovery under a directory tree

use std::path::{Path, PathBuf};

use glob::{glob_with, MatchOptions, Pattern};

use crate::error::TrimError;

const PNG_PATTERN: &str = "**/*.png";

/// Build the recursive search pattern for `root`.
///
/// Trailing separators are dropped so `assets` and `assets/` behave the
/// same, and glob metacharacters in the root itself are escaped.
pub fn search_pattern(root: &Path) -> String {
    let root = root.to_string_lossy();
    let trimmed = root.trim_end_matches(&['/', '\\'][..]);

    let base = if trimmed.is_empty() {
        // "/" trims to nothing; an empty argument means the working directory
        if root.is_empty() {
            ".".to_string()
        } else {
            String::new()
        }
    } else {
        Pattern::escape(trimmed)
    };

    format!("{}/{}", base, PNG_PATTERN)
}

/// Recursively find every `.png` file below `root`, including `root` itself.
///
/// Matching is case-sensitive and skips hidden entries. Directories whose
/// name happens to end in `.png` are not returned. A root that does not
/// exist yields an empty list.
pub fn find_pngs(root: impl AsRef<Path>) -> Result<Vec<PathBuf>, TrimError> {
    let pattern = search_pattern(root.as_ref());
    let options = MatchOptions {
        case_sensitive: true,
        require_literal_separator: false,
        require_literal_leading_dot: true,
    };

    let mut paths = Vec::new();
    for entry in glob_with(&pattern, options)? {
        let path = entry?;
        if path.is_file() {
            paths.push(path);
        }
    }

    log::debug!("Found {} PNG file(s) matching {}", paths.len(), pattern);
    Ok(paths)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeSet;
    use std::fs;

    #[test]
    fn test_pattern_ignores_trailing_separator() {
        assert_eq!(search_pattern(Path::new("assets")), "assets/**/*.png");
        assert_eq!(search_pattern(Path::new("assets/")), "assets/**/*.png");
        assert_eq!(search_pattern(Path::new("assets//")), "assets/**/*.png");
    }

    #[test]
    fn test_pattern_special_roots() {
        assert_eq!(search_pattern(Path::new("")), "./**/*.png");
        assert_eq!(search_pattern(Path::new("/")), "/**/*.png");
    }

    #[test]
    fn test_pattern_escapes_metacharacters() {
        assert_eq!(search_pattern(Path::new("sprites[1]")), "sprites[[]1[]]/**/*.png");
    }

    #[test]
    fn test_find_at_all_depths() {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path();
        fs::create_dir_all(root.join("a/b/c")).unwrap();
        for rel in ["top.png", "a/one.png", "a/b/c/deep.png"] {
            fs::write(root.join(rel), b"").unwrap();
        }

        let found: BTreeSet<PathBuf> = find_pngs(root).unwrap().into_iter().collect();
        let expected: BTreeSet<PathBuf> = ["top.png", "a/one.png", "a/b/c/deep.png"]
            .iter()
            .map(|rel| root.join(rel))
            .collect();
        assert_eq!(found, expected);
    }

    #[test]
    fn test_skips_other_files() {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path();
        fs::create_dir_all(root.join("folder.png")).unwrap();
        fs::write(root.join("photo.jpg"), b"").unwrap();
        fs::write(root.join("notes.txt"), b"").unwrap();
        fs::write(root.join("LOUD.PNG"), b"").unwrap();
        fs::write(root.join(".hidden.png"), b"").unwrap();
        fs::write(root.join("real.png"), b"").unwrap();

        let found = find_pngs(root).unwrap();
        assert_eq!(found, vec![root.join("real.png")]);
    }

    #[test]
    fn test_missing_root_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        let found = find_pngs(dir.path().join("does-not-exist")).unwrap();
        assert!(found.is_empty());
    }
}

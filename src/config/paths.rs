//! Fallback location for the default data folder.

use std::ffi::OsString;
use std::path::{Path, PathBuf};

use crate::error::ConfigError;

/// Name of the folder created under the user's home directory.
pub const FALLBACK_FOLDER_NAME: &str = "ladybug";

/// Environment variables consulted for the home directory, in order.
pub const HOME_VARS: [&str; 2] = ["USERPROFILE", "HOME"];

/// Looks up the user's home directory from the process environment.
pub fn home_from_env() -> Option<PathBuf> {
    home_from(|key| std::env::var_os(key))
}

/// Looks up the home directory with the given variable lookup.
///
/// The Windows variable is tried first. Empty values count as unset.
pub fn home_from<F>(lookup: F) -> Option<PathBuf>
where
    F: Fn(&str) -> Option<OsString>,
{
    HOME_VARS
        .iter()
        .filter_map(|key| lookup(key))
        .find(|value| !value.is_empty())
        .map(PathBuf::from)
}

/// Returns `<home>/ladybug`, creating it and any parents if missing.
pub fn ensure_fallback_folder(home: &Path) -> Result<PathBuf, ConfigError> {
    let folder = home.join(FALLBACK_FOLDER_NAME);

    if !folder.is_dir() {
        std::fs::create_dir_all(&folder).map_err(|e| ConfigError::DirectoryCreation {
            path: folder.clone(),
            source: e,
        })?;
        tracing::debug!(path = %folder.display(), "Created default data folder");
    }

    Ok(folder)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<OsString> {
        let vars: HashMap<String, OsString> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), OsString::from(v)))
            .collect();
        move |key: &str| vars.get(key).cloned()
    }

    #[test]
    fn test_userprofile_preferred_over_home() {
        let home = home_from(lookup(&[("USERPROFILE", "C:/Users/me"), ("HOME", "/home/me")]));
        assert_eq!(home, Some(PathBuf::from("C:/Users/me")));
    }

    #[test]
    fn test_home_used_without_userprofile() {
        let home = home_from(lookup(&[("HOME", "/home/me")]));
        assert_eq!(home, Some(PathBuf::from("/home/me")));
    }

    #[test]
    fn test_empty_userprofile_skipped() {
        let home = home_from(lookup(&[("USERPROFILE", ""), ("HOME", "/home/me")]));
        assert_eq!(home, Some(PathBuf::from("/home/me")));
    }

    #[test]
    fn test_no_home_vars() {
        assert_eq!(home_from(lookup(&[])), None);
    }

    #[test]
    fn test_fallback_folder_created_with_parents() {
        let dir = tempfile::tempdir().unwrap();
        let home = dir.path().join("nested").join("user");

        let folder = ensure_fallback_folder(&home).unwrap();

        assert_eq!(folder, home.join("ladybug"));
        assert!(folder.is_dir());
    }

    #[test]
    fn test_existing_fallback_folder_kept() {
        let dir = tempfile::tempdir().unwrap();
        let existing = dir.path().join("ladybug");
        std::fs::create_dir(&existing).unwrap();
        std::fs::write(existing.join("weather.epw"), "data").unwrap();

        let folder = ensure_fallback_folder(dir.path()).unwrap();

        assert_eq!(folder, existing);
        assert!(folder.join("weather.epw").exists());
    }

    #[test]
    fn test_creation_failure_reports_path() {
        let dir = tempfile::tempdir().unwrap();
        let blocker = dir.path().join("home");
        std::fs::write(&blocker, "not a directory").unwrap();

        match ensure_fallback_folder(&blocker) {
            Err(ConfigError::DirectoryCreation { path, .. }) => {
                assert_eq!(path, blocker.join("ladybug"));
            }
            other => panic!("expected DirectoryCreation, got {other:?}"),
        }
    }
}

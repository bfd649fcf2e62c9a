use std::env;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// Environment variable that overrides the default store location.
pub const FILE_ENV_VAR: &str = "JOTTER_FILE";

/// Store file used when nothing else is configured.
pub const DEFAULT_FILE: &str = "notes.json";

/// Where the note store lives.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoreConfig {
    pub path: PathBuf,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from(DEFAULT_FILE),
        }
    }
}

impl StoreConfig {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Resolve the store path: explicit flag, then `JOTTER_FILE`, then the default.
    pub fn resolve(flag: Option<PathBuf>) -> Self {
        Self::resolve_with(flag, env::var_os(FILE_ENV_VAR).map(PathBuf::from))
    }

    fn resolve_with(flag: Option<PathBuf>, from_env: Option<PathBuf>) -> Self {
        flag.or(from_env.filter(|p| !p.as_os_str().is_empty()))
            .map(Self::new)
            .unwrap_or_default()
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = StoreConfig::default();
        assert_eq!(config.path(), Path::new("notes.json"));
    }

    #[test]
    fn test_flag_wins_over_env() {
        let config = StoreConfig::resolve_with(
            Some(PathBuf::from("flag.json")),
            Some(PathBuf::from("env.json")),
        );
        assert_eq!(config.path(), Path::new("flag.json"));
    }

    #[test]
    fn test_env_used_without_flag() {
        let config = StoreConfig::resolve_with(None, Some(PathBuf::from("env.json")));
        assert_eq!(config.path(), Path::new("env.json"));
    }

    #[test]
    fn test_empty_env_falls_back_to_default() {
        let config = StoreConfig::resolve_with(None, Some(PathBuf::new()));
        assert_eq!(config, StoreConfig::default());
    }

    #[test]
    fn test_serialization() {
        let config = StoreConfig::new("/data/notes.json");
        let json = serde_json::to_string(&config).unwrap();
        let parsed: StoreConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, config);
    }
}

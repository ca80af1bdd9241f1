use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Workspace configuration, stored as `config.toml` under the data dir.
///
/// A missing file yields defaults; the archive root defaults to
/// `<data-dir>/sessions`.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub sessions_root: Option<PathBuf>,
}

impl Config {
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }

    /// Effective archive root for a given data dir.
    pub fn sessions_root(&self, data_dir: &Path) -> PathBuf {
        self.sessions_root
            .clone()
            .unwrap_or_else(|| data_dir.join("sessions"))
    }
}

/// Expand tilde (~) in paths to the user's home directory.
pub fn expand_tilde(path: &str) -> PathBuf {
    if let Some(stripped) = path.strip_prefix("~/") {
        if let Some(home) = dirs::home_dir() {
            return home.join(stripped);
        }
    }
    PathBuf::from(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_load_nonexistent_returns_default() {
        let temp = TempDir::new().unwrap();
        let config = Config::load_from(&temp.path().join("config.toml")).unwrap();
        assert!(config.sessions_root.is_none());
    }

    #[test]
    fn test_sessions_root_override() {
        let temp = TempDir::new().unwrap();
        let config_path = temp.path().join("config.toml");
        std::fs::write(&config_path, "sessions_root = \"/srv/telemetry\"\n").unwrap();

        let config = Config::load_from(&config_path).unwrap();
        assert_eq!(
            config.sessions_root(temp.path()),
            PathBuf::from("/srv/telemetry")
        );
    }

    #[test]
    fn test_sessions_root_default() {
        let config = Config::default();
        assert_eq!(
            config.sessions_root(Path::new("/home/x/.pitwall")),
            PathBuf::from("/home/x/.pitwall/sessions")
        );
    }
}

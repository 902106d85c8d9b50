use std::path::{Path, PathBuf};

use crate::library::constant::{
    AGENT_INFO_EXTENSION, DEFAULT_AGENTS_ROOT, DEFAULT_CONFIG_ROOT, KEYS_DIR, SNAPSHOT_DIR,
};

/// Filesystem roots the selector and reporter read from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub agents_root: PathBuf,
    pub config_root: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Config::new(DEFAULT_AGENTS_ROOT, DEFAULT_CONFIG_ROOT)
    }
}

impl Config {
    pub fn new(agents_root: impl Into<PathBuf>, config_root: impl Into<PathBuf>) -> Self {
        Config {
            agents_root: agents_root.into(),
            config_root: config_root.into(),
        }
    }

    pub fn agent_dir(&self, agent_id: &str) -> PathBuf {
        self.agents_root.join(agent_id)
    }

    pub fn agent_info_path(&self, agent_id: &str) -> PathBuf {
        self.config_root
            .join(KEYS_DIR)
            .join(format!("{}.{}", agent_id, AGENT_INFO_EXTENSION))
    }

    pub fn snapshot_dir(&self, agent_id: &str) -> PathBuf {
        self.agent_dir(agent_id).join(Path::new(SNAPSHOT_DIR))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paths_are_derived_from_roots() {
        let config = Config::new("/agents", "/config");

        assert_eq!(config.agent_dir("abc"), PathBuf::from("/agents/abc"));
        assert_eq!(
            config.agent_info_path("abc"),
            PathBuf::from("/config/keys/abc.agentInfo")
        );
        assert_eq!(
            config.snapshot_dir("abc"),
            PathBuf::from("/agents/abc/.zfs/snapshot")
        );
    }

    #[test]
    fn test_default_roots() {
        let config = Config::default();

        assert_eq!(config.agents_root, PathBuf::from(DEFAULT_AGENTS_ROOT));
        assert_eq!(config.config_root, PathBuf::from(DEFAULT_CONFIG_ROOT));
    }
}

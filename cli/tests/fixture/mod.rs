#![allow(dead_code)]

use std::{fs, path::PathBuf};

use agentsnap::library::config::Config;
use anyhow::Result;
use tempfile::{TempDir, tempdir};

/// Agents and config roots laid out under a temporary directory.
pub struct Fixture {
    _dir: TempDir,
    pub config: Config,
}

impl Fixture {
    pub fn new() -> Result<Self> {
        let dir = tempdir()?;
        let config = Config::new(dir.path().join("agents"), dir.path().join("config"));

        fs::create_dir_all(&config.agents_root)?;
        fs::create_dir_all(config.config_root.join("keys"))?;

        Ok(Fixture { _dir: dir, config })
    }

    pub fn add_agent(&self, agent_id: &str) -> Result<PathBuf> {
        let path = self.config.agent_dir(agent_id);
        fs::create_dir_all(&path)?;

        Ok(path)
    }

    pub fn add_agent_info(&self, agent_id: &str, host_name: &str) -> Result<()> {
        let contents = format!(
            r#"a:2:{{s:4:"uuid";s:{}:"{}";s:8:"hostName";s:{}:"{}";}}"#,
            agent_id.len(),
            agent_id,
            host_name.len(),
            host_name
        );
        fs::write(self.config.agent_info_path(agent_id), contents)?;

        Ok(())
    }

    pub fn add_snapshot(&self, agent_id: &str, name: &str) -> Result<PathBuf> {
        let path = self.config.snapshot_dir(agent_id).join(name);
        fs::create_dir_all(&path)?;

        Ok(path)
    }

    pub fn add_voltab(&self, agent_id: &str, name: &str, letters: &[char]) -> Result<()> {
        let volumes = letters
            .iter()
            .enumerate()
            .map(|(i, letter)| {
                format!(
                    r#""vol{}":{{"guid":"{}","mountpoint":"{}:\\","filesystem":"NTFS"}}"#,
                    i, i, letter
                )
            })
            .collect::<Vec<_>>()
            .join(",");

        let path = self.add_snapshot(agent_id, name)?;
        fs::write(path.join("voltab"), format!("{{{}}}", volumes))?;

        Ok(())
    }

    pub fn agents_root_arg(&self) -> String {
        self.config.agents_root.to_string_lossy().into_owned()
    }

    pub fn config_root_arg(&self) -> String {
        self.config.config_root.to_string_lossy().into_owned()
    }
}

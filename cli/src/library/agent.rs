use std::{
    fs, io,
    path::{Component, Path},
};

use agentsnap_library::agent_info::extract_host_name;
use tracing::{debug, warn};

use crate::library::{
    config::Config,
    error::{Error, Result},
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Agent {
    pub id: String,
    pub host_name: String,
}

/// Every immediate subdirectory of the agents root, in directory-listing order.
pub fn list_agents(config: &Config) -> Result<Vec<Agent>> {
    let entries = match fs::read_dir(&config.agents_root) {
        Ok(entries) => entries,
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            debug!(root = %config.agents_root.display(), "agents root does not exist");
            return Ok(vec![]);
        }
        Err(e) => return Err(Error::io(&config.agents_root, e)),
    };

    let mut agents = vec![];

    for entry in entries {
        let entry = entry.map_err(|e| Error::io(&config.agents_root, e))?;

        if !entry.path().is_dir() {
            continue;
        }

        let id = entry.file_name().to_string_lossy().into_owned();
        let host_name = read_host_name(config, &id);

        agents.push(Agent { id, host_name });
    }

    debug!(count = agents.len(), "listed agents");

    Ok(agents)
}

/// Host name from the agent's agentInfo file, or empty when it can't be found.
pub fn read_host_name(config: &Config, agent_id: &str) -> String {
    let path = config.agent_info_path(agent_id);

    let contents = match fs::read(&path) {
        Ok(bytes) => String::from_utf8_lossy(&bytes).into_owned(),
        Err(e) => {
            if e.kind() != io::ErrorKind::NotFound {
                warn!(path = %path.display(), error = %e, "unreadable agentInfo");
            }
            return String::new();
        }
    };

    extract_host_name(&contents).unwrap_or_default()
}

/// Whether `agent_id` names an existing subdirectory of the agents root.
pub fn agent_exists(config: &Config, agent_id: &str) -> bool {
    is_single_component(agent_id) && config.agent_dir(agent_id).is_dir()
}

fn is_single_component(agent_id: &str) -> bool {
    let mut components = Path::new(agent_id).components();

    matches!(
        (components.next(), components.next()),
        (Some(Component::Normal(name)), None) if name == agent_id
    )
}

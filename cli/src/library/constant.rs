pub const DEFAULT_AGENTS_ROOT: &str = "/homePool/home/agents";
pub const DEFAULT_CONFIG_ROOT: &str = "/datto/config";

pub const KEYS_DIR: &str = "keys";
pub const AGENT_INFO_EXTENSION: &str = "agentInfo";

pub const SNAPSHOT_DIR: &str = ".zfs/snapshot";
pub const VOLTAB: &str = "voltab";

pub const NO_SNAPSHOTS: &str = "No snapshots";
pub const NO_VOLTAB: &str = "voltab doesn't exist";
pub const UNREADABLE_VOLTAB: &str = "voltab unreadable";
pub const NO_VOLUMES: &str = "* No volumes included in voltab";

pub const PROMPT: &str = "Agent identifier:";

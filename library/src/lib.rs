//! Text extraction for agent and snapshot metadata files.

pub mod agent_info;
pub mod pattern;
pub mod timestamp;
pub mod voltab;

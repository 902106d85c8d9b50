use std::io::Write;

use console::style;
use tracing::debug;

use crate::library::{
    agent::{agent_exists, list_agents},
    config::Config,
    error::{Error, Result},
    prompt::IdentifierSource,
    table::print_agent_table,
};

/// Shows the agent table on `diag` and asks `source` until it names an agent.
///
/// Invalid answers are reported and asked for again without limit.
pub fn select_agent<S, W>(config: &Config, source: &mut S, diag: &mut W) -> Result<String>
where
    S: IdentifierSource + ?Sized,
    W: Write,
{
    let agents = list_agents(config)?;

    if agents.is_empty() {
        return Err(Error::NoAgents(config.agents_root.clone()));
    }

    print_agent_table(&agents, diag)?;

    loop {
        let answer = source.next_identifier()?;
        let agent_id = answer.trim();

        if agent_exists(config, agent_id) {
            debug!(agent = agent_id, "agent selected");
            return Ok(agent_id.to_string());
        }

        writeln!(
            diag,
            "{}",
            style(format!("Invalid agent identifier: {}", answer))
                .red()
                .for_stderr()
        )?;
    }
}

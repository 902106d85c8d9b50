use std::{
    io::{self, IsTerminal},
    path::PathBuf,
};

use clap::{Parser, Subcommand};
use indoc::indoc;

use crate::library::{
    config::Config,
    constant::{DEFAULT_AGENTS_ROOT, DEFAULT_CONFIG_ROOT},
    prompt::{IdentifierSource, InquirePrompt, LinePrompt},
    report::report_snapshots,
    selector::select_agent,
};

/// Inspect ZFS snapshots of per-agent backup volumes.
#[derive(Parser, Debug)]
#[command(name = "agentsnap", version)]
#[command(about = "Agent Snapshot Inspector", long_about = None)]
#[command(after_help = indoc!("
    Without a subcommand the known agents are listed on stderr and an agent
    identifier is asked for. The snapshot report is written to stdout.
"))]
pub struct Cli {
    /// Directory holding one subdirectory per agent.
    #[arg(long, global = true, default_value = DEFAULT_AGENTS_ROOT)]
    pub agents_root: PathBuf,

    /// Directory holding the `keys` metadata directory.
    #[arg(long, global = true, default_value = DEFAULT_CONFIG_ROOT)]
    pub config_root: PathBuf,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Report the snapshots of one agent.
    Report {
        /// Identifier of the agent.
        agent_id: String,
    },
}

impl Cli {
    pub fn config(&self) -> Config {
        Config::new(&self.agents_root, &self.config_root)
    }
}

pub fn run() -> anyhow::Result<()> {
    let args = Cli::parse();
    let config = args.config();

    let agent_id = match args.command {
        Some(Commands::Report { agent_id }) => agent_id,
        None => {
            let mut source: Box<dyn IdentifierSource> = if io::stdin().is_terminal() {
                Box::new(InquirePrompt)
            } else {
                Box::new(LinePrompt::new(io::stdin().lock(), io::stderr()))
            };

            select_agent(&config, source.as_mut(), &mut io::stderr().lock())?
        }
    };

    report_snapshots(&config, &agent_id, &mut io::stdout().lock())?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_to_documented_roots() {
        let cli = Cli::try_parse_from(["agentsnap"]).unwrap();

        assert!(cli.command.is_none());
        assert_eq!(cli.config(), Config::default());
    }

    #[test]
    fn test_report_takes_exactly_one_agent() {
        let cli = Cli::try_parse_from(["agentsnap", "report", "abc"]).unwrap();
        assert!(matches!(cli.command, Some(Commands::Report { agent_id }) if agent_id == "abc"));

        assert!(Cli::try_parse_from(["agentsnap", "report"]).is_err());
        assert!(Cli::try_parse_from(["agentsnap", "report", "a", "b"]).is_err());
    }

    #[test]
    fn test_roots_can_be_overridden() {
        let cli = Cli::try_parse_from([
            "agentsnap",
            "report",
            "abc",
            "--agents-root",
            "/tmp/agents",
            "--config-root",
            "/tmp/config",
        ])
        .unwrap();

        assert_eq!(cli.config(), Config::new("/tmp/agents", "/tmp/config"));
    }
}

use std::io::Write;

use console::style;
use tabled::{builder::Builder, settings::Style};

use crate::library::agent::Agent;

pub fn print_agent_table<W: Write>(agents: &[Agent], out: &mut W) -> std::io::Result<()> {
    let header = ["Agent", "Host Name"]
        .iter()
        .map(|s| style(s).green().bold().for_stderr().to_string())
        .collect::<Vec<String>>();

    let mut builder = Builder::default();
    builder.push_record(header);

    for agent in agents {
        builder.push_record(vec![agent.id.clone(), agent.host_name.clone()]);
    }

    let mut table = builder.build();
    table.with(Style::blank());

    writeln!(out, "{}", table)
}

use std::io::Write;

use agentsnap_library::{timestamp::format_local, voltab::format_volume_list};
use tracing::{debug, warn};

use crate::library::{
    agent::agent_exists,
    config::Config,
    constant::{NO_SNAPSHOTS, NO_VOLTAB, NO_VOLUMES, UNREADABLE_VOLTAB},
    error::{Error, Result},
    snapshot::{SnapshotEntry, list_snapshots},
};

/// Writes the timestamp and included volumes of every snapshot of `agent_id`.
///
/// The identifier is checked again here since the report can be run on its
/// own. Per-snapshot problems become sentinel lines; nothing is written when
/// the agent is unknown.
pub fn report_snapshots<W: Write>(config: &Config, agent_id: &str, out: &mut W) -> Result<()> {
    if !agent_exists(config, agent_id) {
        return Err(Error::UnknownAgent(agent_id.to_string()));
    }

    let snapshots = list_snapshots(config, agent_id)?;
    debug!(agent = agent_id, count = snapshots.len(), "reporting snapshots");

    for snapshot in &snapshots {
        write_snapshot(snapshot, out)?;
    }

    out.flush()?;

    Ok(())
}

fn write_snapshot<W: Write>(snapshot: &SnapshotEntry, out: &mut W) -> Result<()> {
    let Some(datetime) = snapshot.timestamp().and_then(format_local) else {
        writeln!(out, "{}", NO_SNAPSHOTS)?;
        return Ok(());
    };

    write!(out, "{}: ", datetime)?;

    match snapshot.volumes() {
        Ok(None) => writeln!(out, "{}", NO_VOLTAB)?,
        Ok(Some(letters)) if letters.is_empty() => writeln!(out, "{}", NO_VOLUMES)?,
        Ok(Some(letters)) => writeln!(out, "{}", format_volume_list(&letters))?,
        Err(e) => {
            warn!(error = %e, "skipping voltab");
            writeln!(out, "{}", UNREADABLE_VOLTAB)?;
        }
    }

    Ok(())
}

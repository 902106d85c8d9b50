use std::{
    fs, io,
    path::{Path, PathBuf},
};

use agentsnap_library::{timestamp::extract_trailing_epoch, voltab::mountpoint_letters};
use tracing::debug;

use crate::library::{
    config::Config,
    constant::VOLTAB,
    error::{Error, Result},
};

pub struct SnapshotEntry {
    pub path: PathBuf,
}

impl SnapshotEntry {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        SnapshotEntry { path: path.into() }
    }

    /// Epoch seconds taken from the trailing digits of the full path.
    pub fn timestamp(&self) -> Option<i64> {
        extract_trailing_epoch(&self.path.to_string_lossy())
    }

    pub fn voltab_path(&self) -> PathBuf {
        self.path.join(VOLTAB)
    }

    /// Volume letters listed in the voltab, or `None` when there is no voltab.
    pub fn volumes(&self) -> Result<Option<Vec<char>>> {
        let path = self.voltab_path();

        if !path.is_file() {
            return Ok(None);
        }

        let bytes = fs::read(&path).map_err(|e| Error::io(&path, e))?;

        Ok(Some(mountpoint_letters(&String::from_utf8_lossy(&bytes))))
    }
}

/// Snapshot entries of an agent in filesystem order.
///
/// Hidden entries are skipped and a missing snapshot directory yields nothing.
pub fn list_snapshots(config: &Config, agent_id: &str) -> Result<Vec<SnapshotEntry>> {
    let dir = config.snapshot_dir(agent_id);

    let entries = match fs::read_dir(&dir) {
        Ok(entries) => entries,
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            debug!(dir = %dir.display(), "no snapshot directory");
            return Ok(vec![]);
        }
        Err(e) => return Err(Error::io(&dir, e)),
    };

    let mut snapshots = vec![];

    for entry in entries {
        let entry = entry.map_err(|e| Error::io(&dir, e))?;

        if is_hidden(&entry.path()) {
            debug!(path = %entry.path().display(), "skipping hidden entry");
            continue;
        }

        snapshots.push(SnapshotEntry::new(entry.path()));
    }

    Ok(snapshots)
}

fn is_hidden(path: &Path) -> bool {
    path.file_name()
        .map(|name| name.to_string_lossy().starts_with('.'))
        .unwrap_or(false)
}

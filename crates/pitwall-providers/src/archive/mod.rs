//! CSV session archive: one file per session under a root directory,
//! named `<year>_<event_slug>_<KIND>.csv`.

mod discovery;
mod parser;

use crate::{Error, Result, SessionDataProvider, SessionIndex};
use pitwall_types::{DriverCode, RawLap, SessionId, SessionLaps};
use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// Session provider backed by a directory of per-session CSV exports.
pub struct ArchiveProvider {
    root: PathBuf,
}

impl ArchiveProvider {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn session_path(&self, id: &SessionId) -> PathBuf {
        self.root.join(format!("{}.csv", id.file_stem()))
    }
}

impl SessionDataProvider for ArchiveProvider {
    fn scan_sessions(&self) -> Result<Vec<SessionIndex>> {
        discovery::scan(&self.root)
    }

    fn load(&self, id: &SessionId) -> Result<Box<dyn SessionLaps>> {
        let path = self.session_path(id);
        if !path.exists() {
            return Err(Error::SessionNotFound(id.clone()));
        }
        let laps = parser::parse_file(&path)?;
        Ok(Box::new(ArchiveSession { laps }))
    }
}

/// Loaded session snapshot: raw laps grouped per driver.
#[derive(Debug)]
struct ArchiveSession {
    laps: HashMap<DriverCode, Vec<RawLap>>,
}

impl SessionLaps for ArchiveSession {
    fn laps_for_driver(&self, driver: &DriverCode) -> Vec<RawLap> {
        self.laps.get(driver).cloned().unwrap_or_default()
    }

    fn drivers(&self) -> Vec<DriverCode> {
        let mut drivers: Vec<DriverCode> = self.laps.keys().cloned().collect();
        drivers.sort();
        drivers
    }
}

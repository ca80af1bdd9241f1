use crate::Result;
use chrono::{DateTime, Utc};
use pitwall_types::{SessionId, SessionLaps};
use std::path::PathBuf;

/// Source of loadable telemetry sessions.
///
/// Responsibilities:
/// - Locate session data (filesystem, cache, network)
/// - Load one session into a read-only lap query handle
///
/// All I/O, caching, and failure modes live behind this trait; the
/// analytics engine only ever sees the returned [`SessionLaps`] handle.
pub trait SessionDataProvider {
    /// List sessions this provider can load.
    fn scan_sessions(&self) -> Result<Vec<SessionIndex>>;

    /// Load one session. Missing sessions are an error here — a loaded
    /// handle with no laps for a driver is not.
    fn load(&self, id: &SessionId) -> Result<Box<dyn SessionLaps>>;
}

/// Index entry for a discoverable session.
#[derive(Debug, Clone)]
pub struct SessionIndex {
    pub id: SessionId,
    pub path: PathBuf,
    pub modified: Option<DateTime<Utc>>,
}

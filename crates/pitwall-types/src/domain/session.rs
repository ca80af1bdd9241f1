use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::lap::RawLap;
use crate::error::Error;

/// Driver identifier, conventionally a three-letter abbreviation ("VER", "LEC").
///
/// Free-form, but canonicalized to upper case on construction so lookups
/// are case-insensitive at every boundary.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DriverCode(String);

impl DriverCode {
    pub fn new(code: impl AsRef<str>) -> Self {
        Self(code.as_ref().trim().to_ascii_uppercase())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for DriverCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for DriverCode {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(Self::new(s))
    }
}

/// Kind of timed session within a race event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum SessionKind {
    Fp1,
    Fp2,
    Fp3,
    Q,
    Sq,
    R,
}

impl SessionKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            SessionKind::Fp1 => "FP1",
            SessionKind::Fp2 => "FP2",
            SessionKind::Fp3 => "FP3",
            SessionKind::Q => "Q",
            SessionKind::Sq => "SQ",
            SessionKind::R => "R",
        }
    }
}

impl fmt::Display for SessionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for SessionKind {
    type Err = Error;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "FP1" => Ok(SessionKind::Fp1),
            "FP2" => Ok(SessionKind::Fp2),
            "FP3" => Ok(SessionKind::Fp3),
            "Q" => Ok(SessionKind::Q),
            "SQ" => Ok(SessionKind::Sq),
            "R" => Ok(SessionKind::R),
            other => Err(Error::Parse(format!("unknown session kind: {}", other))),
        }
    }
}

/// Identifies one session of one race event (e.g. 2024 Bahrain R).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SessionId {
    pub year: u16,
    pub event: String,
    pub kind: SessionKind,
}

impl SessionId {
    pub fn new(year: u16, event: impl Into<String>, kind: SessionKind) -> Self {
        Self {
            year,
            event: event.into(),
            kind,
        }
    }

    /// Event name normalized for use in file names ("Abu Dhabi" -> "abu_dhabi").
    pub fn event_slug(&self) -> String {
        self.event
            .split_whitespace()
            .map(|w| w.to_ascii_lowercase())
            .collect::<Vec<_>>()
            .join("_")
    }

    /// File-name stem for this session: `<year>_<event_slug>_<KIND>`.
    pub fn file_stem(&self) -> String {
        format!("{}_{}_{}", self.year, self.event_slug(), self.kind)
    }

    /// Parse a file-name stem back into a session id.
    ///
    /// The event slug may itself contain underscores, so the year is taken
    /// from the front and the kind from the back.
    pub fn from_file_stem(stem: &str) -> crate::Result<Self> {
        let parts: Vec<&str> = stem.split('_').collect();
        if parts.len() < 3 {
            return Err(Error::Parse(format!("invalid session file stem: {}", stem)));
        }
        let year: u16 = parts[0]
            .parse()
            .map_err(|_| Error::Parse(format!("invalid year in session file stem: {}", stem)))?;
        let kind: SessionKind = parts[parts.len() - 1].parse()?;
        let event = parts[1..parts.len() - 1].join("_");
        if event.is_empty() {
            return Err(Error::Parse(format!("missing event in session file stem: {}", stem)));
        }
        Ok(Self { year, event, kind })
    }
}

impl fmt::Display for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.year, self.event, self.kind)
    }
}

/// Read-only lap query surface of a loaded session.
///
/// This is the seam between the analytics engine and whatever loaded the
/// telemetry. Implementations own all I/O and caching; the engine treats
/// the handle as an immutable, externally populated snapshot.
pub trait SessionLaps: std::fmt::Debug {
    /// All raw lap rows recorded for a driver, in source order.
    /// Unknown drivers yield an empty vec, not an error.
    fn laps_for_driver(&self, driver: &DriverCode) -> Vec<RawLap>;

    /// Drivers present in this session.
    fn drivers(&self) -> Vec<DriverCode>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_driver_code_canonicalizes() {
        assert_eq!(DriverCode::new(" ver ").as_str(), "VER");
        assert_eq!(DriverCode::new("Lec"), DriverCode::new("LEC"));
    }

    #[test]
    fn test_session_kind_round_trip() {
        for kind in ["FP1", "FP2", "FP3", "Q", "SQ", "R"] {
            let parsed: SessionKind = kind.parse().unwrap();
            assert_eq!(parsed.to_string(), kind);
        }
        assert!("FP4".parse::<SessionKind>().is_err());
    }

    #[test]
    fn test_session_kind_case_insensitive() {
        assert_eq!("r".parse::<SessionKind>().unwrap(), SessionKind::R);
        assert_eq!("sq".parse::<SessionKind>().unwrap(), SessionKind::Sq);
    }

    #[test]
    fn test_file_stem_round_trip() {
        let id = SessionId::new(2024, "Abu Dhabi", SessionKind::R);
        assert_eq!(id.file_stem(), "2024_abu_dhabi_R");

        let parsed = SessionId::from_file_stem("2024_abu_dhabi_R").unwrap();
        assert_eq!(parsed.year, 2024);
        assert_eq!(parsed.event, "abu_dhabi");
        assert_eq!(parsed.kind, SessionKind::R);
    }

    #[test]
    fn test_file_stem_rejects_garbage() {
        assert!(SessionId::from_file_stem("notes").is_err());
        assert!(SessionId::from_file_stem("bahrain_2024_R").is_err());
        assert!(SessionId::from_file_stem("2024_bahrain_FP9").is_err());
    }
}

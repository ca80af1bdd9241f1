use serde::{Deserialize, Serialize};

use super::session::DriverCode;

/// Compound shown when the source did not record one.
pub const UNKNOWN_COMPOUND: &str = "?";

/// One lap row as delivered by a session source, before cleaning.
///
/// All durations are already normalized to floating-point seconds; `None`
/// marks telemetry the source never recorded. Partial rows are routine in
/// motorsport data and are not an error condition.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawLap {
    pub lap_number: u32,
    pub lap_time: Option<f64>,
    pub sector1_time: Option<f64>,
    pub sector2_time: Option<f64>,
    pub sector3_time: Option<f64>,
    pub compound: Option<String>,
    pub stint: Option<u32>,
}

/// One cleaned lap: the lap time is always present and finite.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LapRecord {
    pub lap_number: u32,
    /// Lap time in seconds.
    pub lap_time: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sector1_time: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sector2_time: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sector3_time: Option<f64>,
    /// Tyre compound, `"?"` when the source did not record one.
    pub compound: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stint: Option<u32>,
}

/// Cleaned per-lap table for a single driver within a single session.
///
/// Sorted ascending by lap number and guaranteed to contain no record
/// without a valid lap time. Built fresh for every query and never mutated
/// in place.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LapTable {
    pub driver: DriverCode,
    pub records: Vec<LapRecord>,
}

impl LapTable {
    pub fn new(driver: DriverCode, records: Vec<LapRecord>) -> Self {
        Self { driver, records }
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Fastest lap time in the table, if any.
    pub fn best_lap_time(&self) -> Option<f64> {
        self.records
            .iter()
            .map(|r| r.lap_time)
            .fold(None, |best, t| match best {
                Some(b) if b <= t => Some(b),
                _ => Some(t),
            })
    }

    /// Arithmetic mean of lap times, if any laps are present.
    pub fn avg_lap_time(&self) -> Option<f64> {
        if self.records.is_empty() {
            return None;
        }
        let sum: f64 = self.records.iter().map(|r| r.lap_time).sum();
        Some(sum / self.records.len() as f64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(lap_number: u32, lap_time: f64) -> LapRecord {
        LapRecord {
            lap_number,
            lap_time,
            sector1_time: None,
            sector2_time: None,
            sector3_time: None,
            compound: UNKNOWN_COMPOUND.to_string(),
            stint: None,
        }
    }

    #[test]
    fn test_best_and_avg_lap_time() {
        let table = LapTable::new(
            DriverCode::new("VER"),
            vec![record(1, 90.0), record(2, 89.0), record(3, 91.0)],
        );
        assert_eq!(table.best_lap_time(), Some(89.0));
        assert_eq!(table.avg_lap_time(), Some(90.0));
    }

    #[test]
    fn test_empty_table_has_no_stats() {
        let table = LapTable::new(DriverCode::new("VER"), vec![]);
        assert!(table.is_empty());
        assert_eq!(table.best_lap_time(), None);
        assert_eq!(table.avg_lap_time(), None);
    }
}

use pitwall_types::{DriverCode, LapRecord, LapTable, RawLap, SessionLaps, UNKNOWN_COMPOUND};
use std::collections::HashMap;

/// Session handle backed by a plain map, for exercising the analytics
/// engine without any I/O.
#[derive(Debug, Default)]
pub struct InMemorySession {
    laps: HashMap<DriverCode, Vec<RawLap>>,
}

impl InMemorySession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_laps(mut self, driver: &str, laps: Vec<RawLap>) -> Self {
        self.laps.insert(DriverCode::new(driver), laps);
        self
    }
}

impl SessionLaps for InMemorySession {
    fn laps_for_driver(&self, driver: &DriverCode) -> Vec<RawLap> {
        self.laps.get(driver).cloned().unwrap_or_default()
    }

    fn drivers(&self) -> Vec<DriverCode> {
        let mut drivers: Vec<DriverCode> = self.laps.keys().cloned().collect();
        drivers.sort();
        drivers
    }
}

/// Raw lap with only the fields that matter to most tests.
pub fn lap(lap_number: u32, lap_time: Option<f64>) -> RawLap {
    RawLap {
        lap_number,
        lap_time,
        sector1_time: None,
        sector2_time: None,
        sector3_time: None,
        compound: None,
        stint: None,
    }
}

/// Cleaned lap table from `(lap_number, lap_time)` pairs.
pub fn lap_table(driver: &str, rows: &[(u32, f64)]) -> LapTable {
    let records = rows
        .iter()
        .map(|&(lap_number, lap_time)| LapRecord {
            lap_number,
            lap_time,
            sector1_time: None,
            sector2_time: None,
            sector3_time: None,
            compound: UNKNOWN_COMPOUND.to_string(),
            stint: None,
        })
        .collect();
    LapTable::new(DriverCode::new(driver), records)
}

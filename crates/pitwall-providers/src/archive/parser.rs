use crate::Result;
use pitwall_types::{parse_duration_secs, DriverCode, RawLap};
use serde::Deserialize;
use std::collections::HashMap;
use std::io::Read;
use std::path::Path;

/// One CSV row as written by telemetry exports. Everything except the
/// driver is optional; cells are kept as text so one malformed field never
/// poisons the rest of the row.
#[derive(Debug, Deserialize)]
struct ArchiveRow {
    driver: String,
    #[serde(default)]
    lap_number: String,
    #[serde(default)]
    lap_time: String,
    #[serde(default)]
    sector1_time: String,
    #[serde(default)]
    sector2_time: String,
    #[serde(default)]
    sector3_time: String,
    #[serde(default)]
    compound: String,
    #[serde(default)]
    stint: String,
}

/// Parse a session CSV into raw laps grouped per driver.
///
/// Rows without a usable driver or lap number are skipped silently —
/// telemetry gaps are routine. Structural CSV errors (bad header, broken
/// quoting) fail the whole file.
pub fn parse_file(path: &Path) -> Result<HashMap<DriverCode, Vec<RawLap>>> {
    let file = std::fs::File::open(path)?;
    parse_reader(file)
}

pub fn parse_reader<R: Read>(reader: R) -> Result<HashMap<DriverCode, Vec<RawLap>>> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);

    let mut laps: HashMap<DriverCode, Vec<RawLap>> = HashMap::new();
    for row in csv_reader.deserialize::<ArchiveRow>() {
        let row = row?;
        if row.driver.trim().is_empty() {
            continue;
        }
        let Ok(lap_number) = row.lap_number.trim().parse::<u32>() else {
            continue;
        };

        let compound = {
            let trimmed = row.compound.trim();
            (!trimmed.is_empty()).then(|| trimmed.to_string())
        };

        laps.entry(DriverCode::new(&row.driver))
            .or_default()
            .push(RawLap {
                lap_number,
                lap_time: parse_duration_secs(&row.lap_time),
                sector1_time: parse_duration_secs(&row.sector1_time),
                sector2_time: parse_duration_secs(&row.sector2_time),
                sector3_time: parse_duration_secs(&row.sector3_time),
                compound,
                stint: row.stint.trim().parse().ok(),
            });
    }

    Ok(laps)
}

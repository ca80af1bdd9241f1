use pitwall_types::{DriverCode, LapRecord, LapTable, SessionLaps, UNKNOWN_COMPOUND};

/// Build the cleaned per-lap table for one driver of a session.
///
/// The driver code is canonicalized to upper case before lookup. Rows whose
/// lap time is absent or non-finite are dropped — partial telemetry is a
/// routine condition. Output is sorted ascending by lap number. A driver
/// with no laps yields an empty table, not an error.
pub fn build_lap_table(session: &dyn SessionLaps, driver: &str) -> LapTable {
    let driver = DriverCode::new(driver);

    let mut records: Vec<LapRecord> = session
        .laps_for_driver(&driver)
        .into_iter()
        .filter_map(|raw| {
            let lap_time = raw.lap_time.filter(|t| t.is_finite())?;
            Some(LapRecord {
                lap_number: raw.lap_number,
                lap_time,
                sector1_time: raw.sector1_time,
                sector2_time: raw.sector2_time,
                sector3_time: raw.sector3_time,
                compound: raw
                    .compound
                    .unwrap_or_else(|| UNKNOWN_COMPOUND.to_string()),
                stint: raw.stint,
            })
        })
        .collect();

    records.sort_by_key(|r| r.lap_number);

    LapTable::new(driver, records)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pitwall_testing::{lap, InMemorySession};

    #[test]
    fn test_drops_laps_without_lap_time() {
        let session = InMemorySession::new().with_laps(
            "VER",
            vec![lap(1, Some(90.0)), lap(2, None), lap(3, Some(f64::NAN))],
        );

        let table = build_lap_table(&session, "VER");
        assert_eq!(table.len(), 1);
        assert_eq!(table.records[0].lap_number, 1);
    }

    #[test]
    fn test_sorts_by_lap_number() {
        let session = InMemorySession::new().with_laps(
            "VER",
            vec![lap(3, Some(91.0)), lap(1, Some(90.0)), lap(2, Some(90.5))],
        );

        let table = build_lap_table(&session, "VER");
        let numbers: Vec<u32> = table.records.iter().map(|r| r.lap_number).collect();
        assert_eq!(numbers, vec![1, 2, 3]);
    }

    #[test]
    fn test_driver_lookup_is_case_insensitive() {
        let session = InMemorySession::new().with_laps("VER", vec![lap(1, Some(90.0))]);

        let table = build_lap_table(&session, "ver");
        assert_eq!(table.driver, DriverCode::new("VER"));
        assert_eq!(table.len(), 1);
    }

    #[test]
    fn test_unknown_driver_yields_empty_table() {
        let session = InMemorySession::new().with_laps("VER", vec![lap(1, Some(90.0))]);

        let table = build_lap_table(&session, "LEC");
        assert!(table.is_empty());
    }

    #[test]
    fn test_missing_compound_defaults_to_unknown() {
        let session = InMemorySession::new().with_laps("VER", vec![lap(1, Some(90.0))]);

        let table = build_lap_table(&session, "VER");
        assert_eq!(table.records[0].compound, "?");
    }
}

use pitwall_types::{LapTable, StintSummary};
use std::collections::BTreeMap;

/// Aggregate a lap table into per-(stint, compound) summaries.
///
/// Laps without a recorded stint are grouped together as their own group
/// rather than discarded. Output is sorted ascending by (stint, compound);
/// the stint-less group sorts first (`Option` ordering).
pub fn summarize_stints(table: &LapTable) -> Vec<StintSummary> {
    let mut groups: BTreeMap<(Option<u32>, String), Vec<f64>> = BTreeMap::new();

    for record in &table.records {
        groups
            .entry((record.stint, record.compound.clone()))
            .or_default()
            .push(record.lap_time);
    }

    groups
        .into_iter()
        .map(|((stint, compound), times)| {
            let laps = times.len();
            let sum: f64 = times.iter().sum();
            let best = times.iter().copied().fold(f64::INFINITY, f64::min);
            StintSummary {
                stint,
                compound,
                laps,
                avg_lap_time: sum / laps as f64,
                best_lap_time: best,
            }
        })
        .collect()
}

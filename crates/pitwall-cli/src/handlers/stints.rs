use crate::args::OutputFormat;
use anyhow::Result;
use owo_colors::OwoColorize;
use pitwall_engine::{build_lap_table, summarize_stints};
use pitwall_types::SessionLaps;

pub fn handle(session: &dyn SessionLaps, driver: &str, format: &OutputFormat) -> Result<()> {
    let table = build_lap_table(session, driver);
    let stints = summarize_stints(&table);

    if format.is_json() {
        println!("{}", serde_json::to_string_pretty(&stints)?);
        return Ok(());
    }

    if stints.is_empty() {
        println!("No stints for {} in this session.", table.driver);
        return Ok(());
    }

    println!(
        "{:<7} {:<10} {:<6} {:<10} {}",
        "STINT".bold(),
        "COMPOUND".bold(),
        "LAPS".bold(),
        "AVG".bold(),
        "BEST".bold()
    );
    for row in &stints {
        println!(
            "{:<7} {:<10} {:<6} {:<10.3} {:.3}",
            row.stint
                .map(|s| s.to_string())
                .unwrap_or_else(|| "-".to_string()),
            row.compound,
            row.laps,
            row.avg_lap_time,
            row.best_lap_time,
        );
    }

    Ok(())
}

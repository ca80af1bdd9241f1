use crate::args::OutputFormat;
use anyhow::Result;
use owo_colors::OwoColorize;
use pitwall_engine::build_lap_table;
use pitwall_types::{format_lap_time, SessionLaps};

pub fn handle(session: &dyn SessionLaps, driver: &str, format: &OutputFormat) -> Result<()> {
    let table = build_lap_table(session, driver);

    if format.is_json() {
        println!("{}", serde_json::to_string_pretty(&table)?);
        return Ok(());
    }

    if table.is_empty() {
        println!("No laps for {} in this session.", table.driver);
        return Ok(());
    }

    println!(
        "{:<5} {:<10} {:<8} {:<8} {:<8} {:<10} {}",
        "LAP".bold(),
        "TIME".bold(),
        "S1".bold(),
        "S2".bold(),
        "S3".bold(),
        "COMPOUND".bold(),
        "STINT".bold()
    );
    for record in &table.records {
        println!(
            "{:<5} {:<10} {:<8} {:<8} {:<8} {:<10} {}",
            record.lap_number,
            format_lap_time(record.lap_time),
            sector(record.sector1_time),
            sector(record.sector2_time),
            sector(record.sector3_time),
            record.compound,
            record
                .stint
                .map(|s| s.to_string())
                .unwrap_or_else(|| "-".to_string()),
        );
    }

    // Same one-line summary the chat router answers with
    if let (Some(best), Some(avg)) = (table.best_lap_time(), table.avg_lap_time()) {
        println!(
            "\nDriver {}: best={:.3}s avg={:.3}s over {} laps",
            table.driver,
            best,
            avg,
            table.len()
        );
    }

    Ok(())
}

fn sector(time: Option<f64>) -> String {
    time.map(|t| format!("{:.3}", t))
        .unwrap_or_else(|| "-".to_string())
}

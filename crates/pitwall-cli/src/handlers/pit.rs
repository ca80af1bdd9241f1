use crate::args::OutputFormat;
use anyhow::Result;
use pitwall_engine::{build_lap_table, suggest_pit_lap};
use pitwall_types::SessionLaps;

pub fn handle(
    session: &dyn SessionLaps,
    driver: &str,
    pit_loss: f64,
    format: &OutputFormat,
) -> Result<()> {
    let table = build_lap_table(session, driver);
    let rec = suggest_pit_lap(&table, pit_loss);

    if format.is_json() {
        println!("{}", serde_json::to_string_pretty(&rec)?);
        return Ok(());
    }

    match rec.recommended_lap {
        Some(lap) => println!("Recommend pit on lap ~{} | {}", lap, rec.reason),
        None => println!("No recommendation | {}", rec.reason),
    }

    Ok(())
}

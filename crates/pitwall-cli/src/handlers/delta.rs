use crate::args::OutputFormat;
use anyhow::Result;
use owo_colors::OwoColorize;
use pitwall_engine::{build_delta, build_lap_table};
use pitwall_types::SessionLaps;

pub fn handle(
    session: &dyn SessionLaps,
    driver_a: &str,
    driver_b: &str,
    format: &OutputFormat,
) -> Result<()> {
    let a = build_lap_table(session, driver_a);
    let b = build_lap_table(session, driver_b);
    let rows = build_delta(&a, &b);

    if format.is_json() {
        println!("{}", serde_json::to_string_pretty(&rows)?);
        return Ok(());
    }

    if rows.is_empty() {
        println!("No aligned laps for {} vs {}.", a.driver, b.driver);
        return Ok(());
    }

    println!(
        "{:<5} {}",
        "LAP".bold(),
        format!("DELTA ({}-{}, s)", a.driver, b.driver).bold()
    );
    for row in &rows {
        println!("{:<5} {:+.3}", row.lap_number, row.delta);
    }

    let mean = rows.iter().map(|r| r.delta).sum::<f64>() / rows.len() as f64;
    println!(
        "\nMean delta {:+.3}s over {} shared laps (negative: {} faster)",
        mean,
        rows.len(),
        a.driver
    );

    Ok(())
}

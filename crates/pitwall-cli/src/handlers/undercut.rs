use crate::args::OutputFormat;
use anyhow::Result;
use pitwall_engine::{build_lap_table, evaluate_undercut};
use pitwall_types::SessionLaps;

pub fn handle(
    session: &dyn SessionLaps,
    attacker: &str,
    defender: &str,
    pit_loss: f64,
    format: &OutputFormat,
) -> Result<()> {
    let attacker = build_lap_table(session, attacker);
    let defender = build_lap_table(session, defender);
    let assessment = evaluate_undercut(&attacker, &defender, pit_loss);

    if format.is_json() {
        println!("{}", serde_json::to_string_pretty(&assessment)?);
        return Ok(());
    }

    let verdict = match assessment.viable {
        Some(true) => "VIABLE",
        Some(false) => "NOT VIABLE",
        None => "INCONCLUSIVE",
    };
    println!(
        "Undercut {} vs {}: {} | {}",
        attacker.driver, defender.driver, verdict, assessment.reason
    );

    Ok(())
}

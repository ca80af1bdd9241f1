use crate::args::OutputFormat;
use crate::presentation::formatters::time::format_relative_time;
use anyhow::Result;
use owo_colors::OwoColorize;
use pitwall_providers::SessionDataProvider;
use serde::Serialize;

#[derive(Serialize)]
struct SessionRow {
    year: u16,
    event: String,
    kind: String,
    path: String,
}

pub fn handle(provider: &dyn SessionDataProvider, format: &OutputFormat) -> Result<()> {
    let sessions = provider.scan_sessions()?;

    if format.is_json() {
        let rows: Vec<SessionRow> = sessions
            .iter()
            .map(|s| SessionRow {
                year: s.id.year,
                event: s.id.event.clone(),
                kind: s.id.kind.to_string(),
                path: s.path.display().to_string(),
            })
            .collect();
        println!("{}", serde_json::to_string_pretty(&rows)?);
        return Ok(());
    }

    if sessions.is_empty() {
        println!("No sessions in the archive. Drop CSV exports into the sessions directory.");
        return Ok(());
    }

    println!(
        "{:<6} {:<20} {:<8} {:<14} {}",
        "YEAR".bold(),
        "EVENT".bold(),
        "SESSION".bold(),
        "MODIFIED".bold(),
        "FILE".bold()
    );
    for session in &sessions {
        let modified = session
            .modified
            .map(format_relative_time)
            .unwrap_or_else(|| "unknown".to_string());
        println!(
            "{:<6} {:<20} {:<8} {:<14} {}",
            session.id.year,
            session.id.event,
            session.id.kind.to_string(),
            modified,
            session.path.display()
        );
    }

    Ok(())
}

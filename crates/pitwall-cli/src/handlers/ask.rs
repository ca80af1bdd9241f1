use anyhow::Result;
use pitwall_engine::{
    build_delta, build_lap_table, evaluate_undercut, suggest_pit_lap, summarize_stints,
    DEFAULT_PIT_LOSS_SECS,
};
use pitwall_types::SessionLaps;

/// Words of the phrasebook itself, never driver codes.
const KEYWORDS: &[&str] = &[
    "lap", "laps", "summary", "stint", "stints", "pit", "loss", "plan", "undercut", "vs", "for",
    "compare", "delta",
];

/// Route a free-text question to one of the analytics calls.
///
/// This is deliberately a recognized-phrase router, not language
/// understanding: it mirrors the phrasebook of the original race-engineer
/// chat tools ("lap summary VER", "VER vs LEC", "undercut VER vs LEC pit
/// loss 20"). Anything else gets the list of recognized forms.
pub fn handle(session: &dyn SessionLaps, prompt: &str) -> Result<()> {
    println!("{}", answer(session, prompt));
    Ok(())
}

fn answer(session: &dyn SessionLaps, prompt: &str) -> String {
    let lowered = prompt.to_ascii_lowercase();
    let pit_loss = last_number(prompt).unwrap_or(DEFAULT_PIT_LOSS_SECS);

    if lowered.contains("undercut") {
        if let Some((a, b)) = split_vs(prompt) {
            let attacker = build_lap_table(session, &a);
            let defender = build_lap_table(session, &b);
            let out = evaluate_undercut(&attacker, &defender, pit_loss);
            let verdict = match out.viable {
                Some(true) => "viable",
                Some(false) => "not viable",
                None => "inconclusive",
            };
            return format!("Undercut {} vs {}: {} | {}", a, b, verdict, out.reason);
        }
        return "Format: 'undercut AAA vs BBB [pit loss N]'".to_string();
    }

    if let Some((a, b)) = split_vs(prompt) {
        let table_a = build_lap_table(session, &a);
        let table_b = build_lap_table(session, &b);
        let rows = build_delta(&table_a, &table_b);
        if rows.is_empty() {
            return format!("No aligned laps for {} vs {}", a, b);
        }
        let mean = rows.iter().map(|r| r.delta).sum::<f64>() / rows.len() as f64;
        return format!(
            "Delta({}-{}) mean={:+.3}s, samples={}",
            a,
            b,
            mean,
            rows.len()
        );
    }

    if lowered.contains("stint") {
        let Some(driver) = driver_token(prompt) else {
            return "Format: 'stint summary AAA'".to_string();
        };
        let table = build_lap_table(session, &driver);
        let stints = summarize_stints(&table);
        if stints.is_empty() {
            return format!("No stints for {}", table.driver);
        }
        return stints
            .iter()
            .map(|s| {
                format!(
                    "stint {} {}: {} laps, avg={:.3}s best={:.3}s",
                    s.stint.map(|n| n.to_string()).unwrap_or_else(|| "-".into()),
                    s.compound,
                    s.laps,
                    s.avg_lap_time,
                    s.best_lap_time
                )
            })
            .collect::<Vec<_>>()
            .join("\n");
    }

    if lowered.contains("pit") {
        let Some(driver) = driver_token(prompt) else {
            return "Format: 'AAA pit loss N'".to_string();
        };
        let table = build_lap_table(session, &driver);
        let rec = suggest_pit_lap(&table, pit_loss);
        return match rec.recommended_lap {
            Some(lap) => format!("Recommend pit on lap ~{} | {}", lap, rec.reason),
            None => format!("No recommendation | {}", rec.reason),
        };
    }

    if lowered.contains("lap") {
        let Some(driver) = driver_token(prompt) else {
            return "Format: 'lap summary AAA'".to_string();
        };
        let table = build_lap_table(session, &driver);
        if table.is_empty() {
            return format!("No laps for {}", table.driver);
        }
        let best = table.best_lap_time().unwrap_or(0.0);
        let avg = table.avg_lap_time().unwrap_or(0.0);
        return format!("Driver {}: best={:.3}s avg={:.3}s", table.driver, best, avg);
    }

    [
        "I can answer:",
        "  lap summary <DRV>",
        "  stint summary <DRV>",
        "  <DRV> vs <DRV>",
        "  undercut <DRV> vs <DRV> pit loss <N>",
        "  <DRV> pit loss <N>",
    ]
    .join("\n")
}

/// Split on a standalone "vs", returning the driver token on each side.
fn split_vs(prompt: &str) -> Option<(String, String)> {
    let tokens: Vec<&str> = prompt.split_whitespace().collect();
    let pos = tokens.iter().position(|t| t.eq_ignore_ascii_case("vs"))?;

    let left = tokens[..pos]
        .iter()
        .rev()
        .find(|t| is_driver_token(t))?
        .to_ascii_uppercase();
    let right = tokens[pos + 1..]
        .iter()
        .find(|t| is_driver_token(t))?
        .to_ascii_uppercase();
    Some((left, right))
}

/// First token that looks like a driver code rather than phrasebook filler.
fn driver_token(prompt: &str) -> Option<String> {
    prompt
        .split_whitespace()
        .find(|t| is_driver_token(t))
        .map(|t| t.to_ascii_uppercase())
}

fn is_driver_token(token: &str) -> bool {
    token.chars().all(|c| c.is_ascii_alphabetic())
        && !KEYWORDS.contains(&token.to_ascii_lowercase().as_str())
}

/// Last numeric token, used as an explicit pit loss.
fn last_number(prompt: &str) -> Option<f64> {
    prompt
        .split_whitespace()
        .rev()
        .find_map(|t| t.parse::<f64>().ok())
}

/// Parse a duration cell into floating-point seconds.
///
/// Accepts plain seconds (`"92.451"`), minutes (`"1:32.451"`) and hours
/// (`"1:02:03.5"`). Blank or malformed input yields `None` — missing
/// durations are a routine telemetry condition, not an error.
pub fn parse_duration_secs(raw: &str) -> Option<f64> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }

    let parts: Vec<&str> = trimmed.split(':').collect();
    if parts.len() > 3 {
        return None;
    }

    let mut total = 0.0;
    for part in &parts {
        let value: f64 = part.parse().ok()?;
        if value < 0.0 {
            return None;
        }
        total = total * 60.0 + value;
    }

    total.is_finite().then_some(total)
}

/// Render seconds as `M:SS.mmm` (or plain `SS.mmm` under a minute).
pub fn format_lap_time(secs: f64) -> String {
    if !secs.is_finite() || secs < 0.0 {
        return "-".to_string();
    }
    let minutes = (secs / 60.0).floor() as u64;
    let remainder = secs - minutes as f64 * 60.0;
    if minutes == 0 {
        format!("{:.3}", remainder)
    } else {
        format!("{}:{:06.3}", minutes, remainder)
    }
}

use chrono::{DateTime, Utc};

/// Format a timestamp as relative time ("2 min ago", "yesterday").
pub fn format_relative_time(ts: DateTime<Utc>) -> String {
    let now = Utc::now();
    let duration = now.signed_duration_since(ts);

    let seconds = duration.num_seconds();
    let minutes = duration.num_minutes();
    let hours = duration.num_hours();
    let days = duration.num_days();

    if seconds < 60 {
        "just now".to_string()
    } else if minutes < 60 {
        format!("{} min ago", minutes)
    } else if hours < 24 {
        format!("{} hours ago", hours)
    } else if days == 1 {
        "yesterday".to_string()
    } else if days < 7 {
        format!("{} days ago", days)
    } else if days < 30 {
        format!("{} weeks ago", days / 7)
    } else if days < 365 {
        format!("{} months ago", days / 30)
    } else {
        format!("{} years ago", days / 365)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    #[test]
    fn test_recent_is_just_now() {
        assert_eq!(format_relative_time(Utc::now()), "just now");
    }

    #[test]
    fn test_minutes_ago() {
        let ts = Utc::now() - Duration::minutes(5);
        assert_eq!(format_relative_time(ts), "5 min ago");
    }

    #[test]
    fn test_yesterday() {
        let ts = Utc::now() - Duration::days(1);
        assert_eq!(format_relative_time(ts), "yesterday");
    }
}

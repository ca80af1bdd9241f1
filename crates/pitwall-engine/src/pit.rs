use pitwall_types::{LapTable, PitRecommendation};

/// Lap-over-lap slowdown that signals the onset of tyre drop-off, seconds.
pub const PACE_DROP_THRESHOLD_SECS: f64 = 0.25;

/// Conventional time cost of a pit stop, seconds.
pub const DEFAULT_PIT_LOSS_SECS: f64 = 20.0;

/// Recommend a lap to pit on, from a degradation heuristic.
///
/// Scans laps in ascending order for the first lap-over-lap slowdown above
/// [`PACE_DROP_THRESHOLD_SECS`]. When the pace is stable the fallback is
/// the median lap number — lower median for even-length tables, so the
/// recommendation is always a lap that was actually driven.
///
/// `pit_loss_secs` is accepted but currently inert: it is reserved for
/// cost-aware logic and does not affect the decision.
pub fn suggest_pit_lap(table: &LapTable, pit_loss_secs: f64) -> PitRecommendation {
    let _ = pit_loss_secs;

    if table.is_empty() {
        return PitRecommendation {
            recommended_lap: None,
            reason: format!("No data for {}", table.driver),
        };
    }

    // Table is sorted ascending, so consecutive records give lap-over-lap deltas.
    for pair in table.records.windows(2) {
        let delta = pair[1].lap_time - pair[0].lap_time;
        if delta > PACE_DROP_THRESHOLD_SECS {
            let lap = pair[1].lap_number;
            return PitRecommendation {
                recommended_lap: Some(lap),
                reason: format!(
                    "Pace drop detected (delta > {:.2}s/lap) around lap {}",
                    PACE_DROP_THRESHOLD_SECS, lap
                ),
            };
        }
    }

    let best = table.best_lap_time().unwrap_or(0.0);
    let avg = table.avg_lap_time().unwrap_or(0.0);
    let median_lap = table.records[(table.len() - 1) / 2].lap_number;

    PitRecommendation {
        recommended_lap: Some(median_lap),
        reason: format!(
            "Stable pace (best={:.2}, avg={:.2}), no urgent pit need",
            best, avg
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pitwall_testing::lap_table;

    #[test]
    fn test_empty_table_has_no_recommendation() {
        let table = lap_table("VER", &[]);
        let rec = suggest_pit_lap(&table, DEFAULT_PIT_LOSS_SECS);
        assert_eq!(rec.recommended_lap, None);
        assert_eq!(rec.reason, "No data for VER");
    }

    #[test]
    fn test_detects_first_pace_drop() {
        // Delta at lap 3 is 0.5s, over the 0.25s threshold
        let table = lap_table("VER", &[(1, 90.0), (2, 90.0), (3, 90.5)]);
        let rec = suggest_pit_lap(&table, DEFAULT_PIT_LOSS_SECS);
        assert_eq!(rec.recommended_lap, Some(3));
        assert!(rec.reason.contains("Pace drop"));
        assert!(rec.reason.contains("lap 3"));
    }

    #[test]
    fn test_threshold_is_strictly_exceeded() {
        // Exactly 0.25s does not trigger; stable-pace fallback applies
        let table = lap_table("VER", &[(1, 90.0), (2, 90.25), (3, 90.5)]);
        let rec = suggest_pit_lap(&table, DEFAULT_PIT_LOSS_SECS);
        assert!(rec.reason.contains("Stable pace"));
        assert_eq!(rec.recommended_lap, Some(2));
    }

    #[test]
    fn test_stable_pace_recommends_median_lap() {
        let table = lap_table("VER", &[(1, 90.0), (2, 90.1), (3, 90.0), (4, 90.1), (5, 90.0)]);
        let rec = suggest_pit_lap(&table, DEFAULT_PIT_LOSS_SECS);
        assert_eq!(rec.recommended_lap, Some(3));
        assert!(rec.reason.contains("Stable pace"));
        assert!(rec.reason.contains("no urgent pit need"));
    }

    #[test]
    fn test_even_count_takes_lower_median() {
        let table = lap_table("VER", &[(1, 90.0), (2, 90.1), (3, 90.0), (4, 90.1)]);
        let rec = suggest_pit_lap(&table, DEFAULT_PIT_LOSS_SECS);
        assert_eq!(rec.recommended_lap, Some(2));
    }

    #[test]
    fn test_pit_loss_parameter_is_inert() {
        let table = lap_table("VER", &[(1, 90.0), (2, 90.0), (3, 90.5)]);
        let a = suggest_pit_lap(&table, 5.0);
        let b = suggest_pit_lap(&table, 40.0);
        assert_eq!(a, b);
    }
}

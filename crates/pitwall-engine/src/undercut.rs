use linfa::prelude::*;
use linfa_linear::LinearRegression;
use ndarray::{Array1, Array2};
use pitwall_types::{LapTable, UndercutAssessment};

/// Number of future laps the attacker is assumed to gain over.
pub const UNDERCUT_HORIZON_LAPS: u32 = 2;

/// How many of the defender's most recent laps the trend is fitted on.
pub const DEFENDER_TAIL_LAPS: usize = 8;

/// Minimum tail length for a meaningful fit.
pub const MIN_DEFENDER_TAIL_LAPS: usize = 3;

/// Estimate whether pitting now gains the attacker enough time to justify
/// the stop.
///
/// Fits an OLS line of lap time vs lap number over the defender's last
/// `min(8, len)` laps; the slope is the defender's degradation rate in
/// seconds per lap, clamped at zero (a defender getting faster is no bonus
/// for the attacker). Expected gain is that rate over a fixed two-lap
/// horizon, compared against the pit loss.
///
/// The attacker's table only feeds the emptiness check — a deliberate
/// simplification of the heuristic.
pub fn evaluate_undercut(
    attacker: &LapTable,
    defender: &LapTable,
    pit_loss_secs: f64,
) -> UndercutAssessment {
    if attacker.is_empty() || defender.is_empty() {
        return UndercutAssessment::inconclusive(pit_loss_secs, "missing laps");
    }

    let tail_len = defender.len().min(DEFENDER_TAIL_LAPS);
    let tail = &defender.records[defender.len() - tail_len..];
    if tail.len() < MIN_DEFENDER_TAIL_LAPS {
        return UndercutAssessment::inconclusive(pit_loss_secs, "too few laps for defender");
    }

    let slope = match fit_degradation_slope(tail) {
        Some(slope) => slope,
        None => {
            return UndercutAssessment::inconclusive(pit_loss_secs, "degradation fit failed")
        }
    };

    let degradation = slope.max(0.0);
    let expected_gain = degradation * UNDERCUT_HORIZON_LAPS as f64;
    let viable = expected_gain > pit_loss_secs;

    UndercutAssessment {
        viable: Some(viable),
        expected_gain,
        pit_loss: pit_loss_secs,
        reason: format!(
            "defender degradation ~{:.3}s/lap, horizon={} laps, gain ~{:.1}s vs pit loss {:.1}s",
            degradation, UNDERCUT_HORIZON_LAPS, expected_gain, pit_loss_secs
        ),
    }
}

/// OLS slope of lap time against lap number, seconds per lap.
fn fit_degradation_slope(tail: &[pitwall_types::LapRecord]) -> Option<f64> {
    let x: Vec<f64> = tail.iter().map(|r| r.lap_number as f64).collect();
    let y: Vec<f64> = tail.iter().map(|r| r.lap_time).collect();

    let records = Array2::from_shape_vec((x.len(), 1), x).ok()?;
    let targets = Array1::from_vec(y);
    let dataset = Dataset::new(records, targets);

    let fitted = LinearRegression::new().fit(&dataset).ok()?;
    let slope = fitted.params()[0];
    slope.is_finite().then_some(slope)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pitwall_testing::lap_table;

    /// Defender lap times rising linearly by `per_lap` seconds each lap.
    fn degrading_table(driver: &str, laps: u32, base: f64, per_lap: f64) -> LapTable {
        let rows: Vec<(u32, f64)> = (1..=laps)
            .map(|n| (n, base + per_lap * (n - 1) as f64))
            .collect();
        lap_table(driver, &rows)
    }

    #[test]
    fn test_missing_laps_is_inconclusive() {
        let some = lap_table("VER", &[(1, 90.0), (2, 90.1), (3, 90.2)]);
        let empty = lap_table("LEC", &[]);

        let out = evaluate_undercut(&some, &empty, 20.0);
        assert_eq!(out.viable, None);
        assert_eq!(out.reason, "missing laps");

        let out = evaluate_undercut(&empty, &some, 20.0);
        assert_eq!(out.viable, None);
    }

    #[test]
    fn test_short_defender_tail_is_inconclusive() {
        let attacker = degrading_table("VER", 8, 90.0, 0.1);
        let defender = lap_table("LEC", &[(1, 90.0), (2, 90.3)]);

        let out = evaluate_undercut(&attacker, &defender, 20.0);
        assert_eq!(out.viable, None);
        assert!(out.reason.contains("too few laps"));
    }

    #[test]
    fn test_linear_degradation_makes_undercut_viable() {
        // 0.3s/lap over 8 laps, horizon 2 -> gain ~0.6s > 0.5s pit loss
        let attacker = degrading_table("VER", 8, 90.0, 0.0);
        let defender = degrading_table("LEC", 8, 90.0, 0.3);

        let out = evaluate_undercut(&attacker, &defender, 0.5);
        assert_eq!(out.viable, Some(true));
        assert!((out.expected_gain - 0.6).abs() < 1e-6);
    }

    #[test]
    fn test_realistic_pit_loss_is_not_viable() {
        let attacker = degrading_table("VER", 8, 90.0, 0.0);
        let defender = degrading_table("LEC", 8, 90.0, 0.3);

        let out = evaluate_undercut(&attacker, &defender, 20.0);
        assert_eq!(out.viable, Some(false));
        assert_eq!(out.pit_loss, 20.0);
    }

    #[test]
    fn test_improving_defender_clamps_to_zero_gain() {
        let attacker = degrading_table("VER", 8, 90.0, 0.0);
        // Defender getting faster: negative slope must not reward the attacker
        let defender = degrading_table("LEC", 8, 92.0, -0.2);

        let out = evaluate_undercut(&attacker, &defender, 1.0);
        assert_eq!(out.viable, Some(false));
        assert_eq!(out.expected_gain, 0.0);
    }

    #[test]
    fn test_fit_uses_only_last_eight_laps() {
        // First 10 laps flat, last 8 degrading at 0.4s/lap: the tail slope wins
        let mut rows: Vec<(u32, f64)> = (1..=10).map(|n| (n, 90.0)).collect();
        rows.extend((11..=18).map(|n| (n, 90.0 + 0.4 * (n - 10) as f64)));
        let defender = lap_table("LEC", &rows);
        let attacker = lap_table("VER", &[(1, 90.0)]);

        let out = evaluate_undercut(&attacker, &defender, 0.5);
        assert_eq!(out.viable, Some(true));
        assert!((out.expected_gain - 0.8).abs() < 1e-6);
    }
}

use serde::{Deserialize, Serialize};

/// Aggregated view of one (stint, compound) group of a lap table.
///
/// `stint` is `None` when the source never recorded stint numbers; such
/// laps are aggregated as their own group rather than discarded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StintSummary {
    pub stint: Option<u32>,
    pub compound: String,
    pub laps: usize,
    /// Mean lap time over the group, seconds.
    pub avg_lap_time: f64,
    /// Fastest lap time in the group, seconds.
    pub best_lap_time: f64,
}

/// Per-lap time difference between two drivers on a shared lap number.
///
/// Negative delta means the first driver (A) was faster on that lap.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LapDelta {
    pub lap_number: u32,
    /// `lap_time_a - lap_time_b`, seconds.
    pub delta: f64,
}

/// One-shot result of the pit-lap heuristic. Never persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PitRecommendation {
    /// Lap on which to pit, or `None` when there is no data to judge from.
    pub recommended_lap: Option<u32>,
    pub reason: String,
}

/// Outcome of an undercut viability check.
///
/// `viable` is `None` when the question cannot be answered from the
/// available laps; absence of data is a first-class outcome, not an error.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UndercutAssessment {
    pub viable: Option<bool>,
    /// Time the attacker is expected to gain over the horizon, seconds.
    pub expected_gain: f64,
    /// Time cost of the extra stop, seconds.
    pub pit_loss: f64,
    pub reason: String,
}

impl UndercutAssessment {
    /// Assessment for the cases where no verdict can be reached.
    pub fn inconclusive(pit_loss: f64, reason: impl Into<String>) -> Self {
        Self {
            viable: None,
            expected_gain: 0.0,
            pit_loss,
            reason: reason.into(),
        }
    }
}

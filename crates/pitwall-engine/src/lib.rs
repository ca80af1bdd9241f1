// Engine module - pure lap telemetry analytics
// This layer sits between loaded session data (providers) and CLI presentation.
//
// Every function here is a total, stateless transform: for any well-typed
// input it returns a result value. Empty or missing telemetry is a normal
// outcome carried in the result, never an error or a panic.

mod delta;
mod laps;
mod pit;
mod stints;
mod undercut;

pub use delta::build_delta;
pub use laps::build_lap_table;
pub use pit::{suggest_pit_lap, DEFAULT_PIT_LOSS_SECS, PACE_DROP_THRESHOLD_SECS};
pub use stints::summarize_stints;
pub use undercut::{evaluate_undercut, DEFENDER_TAIL_LAPS, MIN_DEFENDER_TAIL_LAPS, UNDERCUT_HORIZON_LAPS};

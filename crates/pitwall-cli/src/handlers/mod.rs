pub mod ask;
pub mod delta;
pub mod laps;
pub mod pit;
pub mod session_list;
pub mod stints;
pub mod undercut;

mod analysis;
mod lap;
mod session;

pub use analysis::*;
pub use lap::*;
pub use session::*;

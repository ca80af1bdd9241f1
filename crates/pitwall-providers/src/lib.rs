pub mod archive;
pub mod error;
mod traits;

pub use archive::ArchiveProvider;
pub use error::{Error, Result};
pub use traits::{SessionDataProvider, SessionIndex};

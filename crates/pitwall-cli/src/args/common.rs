use clap::Args;
use pitwall_types::{SessionId, SessionKind};

/// Selects the session every analytics command operates on.
#[derive(Args, Debug, Clone)]
pub struct SessionArgs {
    #[arg(long, help = "Championship year, e.g. 2024")]
    pub year: u16,

    #[arg(long, help = "Event name, e.g. Bahrain or \"Abu Dhabi\"")]
    pub event: String,

    #[arg(long, default_value = "R", help = "Session kind: FP1, FP2, FP3, Q, SQ, R")]
    pub session: SessionKind,
}

impl SessionArgs {
    pub fn session_id(&self) -> SessionId {
        SessionId::new(self.year, self.event.clone(), self.session)
    }
}

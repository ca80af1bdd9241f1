use super::args::{Cli, Commands, SessionCommand};
use super::handlers;
use crate::config::{expand_tilde, Config};
use anyhow::{Context, Result};
use pitwall_providers::{ArchiveProvider, SessionDataProvider};
use pitwall_types::SessionId;

pub fn run(cli: Cli) -> Result<()> {
    let data_dir = expand_tilde(&cli.data_dir);
    let config = Config::load_from(&data_dir.join("config.toml"))?;
    let provider = ArchiveProvider::new(config.sessions_root(&data_dir));

    match cli.command {
        Commands::Session { command } => match command {
            SessionCommand::List => handlers::session_list::handle(&provider, &cli.format),
        },

        Commands::Laps { session, driver } => {
            let session = load_session(&provider, &session.session_id())?;
            handlers::laps::handle(session.as_ref(), &driver, &cli.format)
        }

        Commands::Stints { session, driver } => {
            let session = load_session(&provider, &session.session_id())?;
            handlers::stints::handle(session.as_ref(), &driver, &cli.format)
        }

        Commands::Delta {
            session,
            driver_a,
            driver_b,
        } => {
            let session = load_session(&provider, &session.session_id())?;
            handlers::delta::handle(session.as_ref(), &driver_a, &driver_b, &cli.format)
        }

        Commands::Pit {
            session,
            driver,
            pit_loss,
        } => {
            let session = load_session(&provider, &session.session_id())?;
            handlers::pit::handle(session.as_ref(), &driver, pit_loss, &cli.format)
        }

        Commands::Undercut {
            session,
            attacker,
            defender,
            pit_loss,
        } => {
            let session = load_session(&provider, &session.session_id())?;
            handlers::undercut::handle(session.as_ref(), &attacker, &defender, pit_loss, &cli.format)
        }

        Commands::Ask { session, prompt } => {
            let session = load_session(&provider, &session.session_id())?;
            handlers::ask::handle(session.as_ref(), &prompt)
        }
    }
}

fn load_session(
    provider: &ArchiveProvider,
    id: &SessionId,
) -> Result<Box<dyn pitwall_types::SessionLaps>> {
    provider
        .load(id)
        .with_context(|| format!("failed to load session {}", id))
}

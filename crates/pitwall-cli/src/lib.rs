// NOTE: pitwall Architecture Rationale
//
// Why a provider seam (not analytics over files directly)?
// - Session telemetry arrives from interchangeable sources (CSV archives
//   today, a live timing cache tomorrow); analytics must not care
// - The engine stays pure and testable: it only ever sees a read-only
//   SessionLaps handle, never a path or a network socket
//
// Why build lap tables fresh on every query (not cache them)?
// - Tables are tens to low hundreds of rows; rebuilding is microseconds
// - No cache means no invalidation and no shared mutable state, so
//   concurrent queries over one session are safe by construction
//
// Why keep phrase routing in the CLI layer?
// - `ask` is a thin dispatcher over the same five analytics calls the
//   subcommands use; parsing quality is explicitly out of engine scope

mod args;
mod commands;
pub mod config;
mod handlers;
mod presentation;

pub use args::{Cli, Commands, SessionCommand};
pub use commands::run;

use super::common::SessionArgs;
use clap::Subcommand;

#[derive(Subcommand)]
pub enum Commands {
    #[command(about = "Manage and list archived sessions")]
    Session {
        #[command(subcommand)]
        command: SessionCommand,
    },

    #[command(about = "Per-lap table for one driver")]
    Laps {
        #[command(flatten)]
        session: SessionArgs,

        #[arg(help = "Driver code, e.g. VER (case-insensitive)")]
        driver: String,
    },

    #[command(about = "Stint summary (laps, average and best time per tyre set)")]
    Stints {
        #[command(flatten)]
        session: SessionArgs,

        driver: String,
    },

    #[command(about = "Per-lap time delta between two drivers")]
    Delta {
        #[command(flatten)]
        session: SessionArgs,

        driver_a: String,
        driver_b: String,
    },

    #[command(about = "Recommend a pit lap from degradation")]
    Pit {
        #[command(flatten)]
        session: SessionArgs,

        driver: String,

        #[arg(long, default_value_t = pitwall_engine::DEFAULT_PIT_LOSS_SECS)]
        pit_loss: f64,
    },

    #[command(about = "Evaluate undercut viability of attacker vs defender")]
    Undercut {
        #[command(flatten)]
        session: SessionArgs,

        attacker: String,
        defender: String,

        #[arg(long, default_value_t = pitwall_engine::DEFAULT_PIT_LOSS_SECS)]
        pit_loss: f64,
    },

    #[command(about = "Chat-style query routed to the analytics commands")]
    Ask {
        #[command(flatten)]
        session: SessionArgs,

        #[arg(help = "Free-text question, e.g. \"lap summary VER\" or \"VER vs LEC\"")]
        prompt: String,
    },
}

#[derive(Subcommand)]
pub enum SessionCommand {
    #[command(about = "List sessions found in the archive")]
    List,
}

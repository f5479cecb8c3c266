//! CLI entry point for taskpad.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing_subscriber::{EnvFilter, fmt::format::FmtSpan};

use taskpad_app::{AppConfig, Session};
use taskpad_core::StatusFilter;
use taskpad_store::JsonSlot;

mod commands;
mod tui;

/// Local to-do lists with filtering, search and a terminal UI.
#[derive(Parser, Debug)]
#[command(
    name = "taskpad",
    version,
    about = "taskpad: local to-do lists with filtering, search and a terminal UI"
)]
struct Cli {
    /// Path of the task slot (defaults to the platform data directory).
    #[arg(long)]
    data: Option<PathBuf>,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Append a new task. Blank text is ignored.
    Add {
        /// Task text.
        text: String,
    },

    /// Print tasks. Positions shown are stable across filters and are
    /// the ones `toggle`, `edit` and `rm` accept.
    Ls {
        /// Status filter: all, completed or pending.
        #[arg(long, default_value = "all")]
        filter: StatusFilter,
        /// Case-insensitive substring search.
        #[arg(long)]
        search: Option<String>,
        /// Show one page of the result instead of everything.
        #[arg(long)]
        page: Option<usize>,
    },

    /// Flip the completion flag of a task by its list position.
    Toggle {
        /// 1-based position as printed by `ls`.
        position: usize,
    },

    /// Replace the text of a task by its list position. Blank text is
    /// ignored.
    Edit {
        /// 1-based position as printed by `ls`.
        position: usize,
        /// Replacement text.
        text: String,
    },

    /// Delete a task by its list position.
    Rm {
        /// 1-based position as printed by `ls`.
        position: usize,
    },

    /// Launch interactive terminal UI.
    Tui,
}

fn main() -> Result<()> {
    let Cli { data, cmd } = Cli::parse();

    if should_install_tracing(&cmd) {
        install_tracing();
    }

    let config = AppConfig::load().context("failed to load configuration")?;
    let slot = open_slot(data, &config)?;
    let session = Session::open(slot, config.page_size);

    match cmd {
        Command::Tui => tui::run(session),
        other => commands::run(other, session),
    }
}

fn open_slot(cli_path: Option<PathBuf>, config: &AppConfig) -> Result<JsonSlot> {
    if let Some(path) = cli_path.or_else(|| config.data_path.clone()) {
        return Ok(JsonSlot::at(path));
    }
    JsonSlot::default_location().context("failed to resolve the default slot location")
}

const fn should_install_tracing(cmd: &Command) -> bool {
    // The TUI owns the terminal; log lines would corrupt the screen.
    !matches!(cmd, Command::Tui)
}

fn install_tracing() {
    let filter = EnvFilter::from_default_env().add_directive(tracing::Level::WARN.into());
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_span_events(FmtSpan::NONE)
        .compact()
        .try_init();
}

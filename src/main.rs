//! Entry point for the **hyprlocal** CLI.
//!
//! One invocation performs exactly one action — `goto`, `move`, `cycle` or
//! `init` — against the running Hyprland instance and exits with a
//! shell-style code: 0 success, 1 failure, 2 bad arguments, 124 IPC
//! timeout, 127 compositor not reachable.

use clap::{Parser, Subcommand, ValueEnum};
use hyprlocal::actions::{Actions, CycleDirection};
use hyprlocal::config::Config;
use hyprlocal::hyprland::HyprlandClient;
use log::{error, info};

#[derive(Parser)]
#[command(
    name = "hyprlocal",
    version,
    about = "Per-monitor local workspaces for Hyprland"
)]
struct Cli {
    /// Disable the gap-closing compaction pass for this invocation.
    #[arg(long, global = true)]
    no_compact: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Focus a local workspace slot on the focused monitor.
    Goto {
        /// 1-based slot number.
        #[arg(value_parser = clap::value_parser!(u8).range(1..=9))]
        slot: u8,
    },

    /// Move the focused window to a local workspace slot.
    Move {
        /// 1-based slot number.
        #[arg(value_parser = clap::value_parser!(u8).range(1..=9))]
        slot: u8,

        /// Move every window on the current workspace, not just the
        /// focused one.
        #[arg(long)]
        all: bool,
    },

    /// Focus the next or previous local slot.
    Cycle {
        #[arg(value_enum)]
        direction: DirectionArg,
    },

    /// Renumber every monitor's workspaces into the canonical contiguous
    /// scheme, absorbing arbitrary pre-existing names.
    Init,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum DirectionArg {
    Next,
    Prev,
}

impl From<DirectionArg> for CycleDirection {
    fn from(direction: DirectionArg) -> Self {
        match direction {
            DirectionArg::Next => CycleDirection::Next,
            DirectionArg::Prev => CycleDirection::Prev,
        }
    }
}

/// Resolve the config directory (`$XDG_CONFIG_HOME/hyprlocal`).
fn config_dir() -> std::path::PathBuf {
    let base = std::env::var("XDG_CONFIG_HOME").unwrap_or_else(|_| {
        let home = std::env::var("HOME").unwrap_or_else(|_| "/tmp".into());
        format!("{}/.config", home)
    });
    std::path::PathBuf::from(base).join("hyprlocal")
}

/// Try to load `$XDG_CONFIG_HOME/hyprlocal/config.json`, falling back to
/// compiled-in defaults.
fn load_config() -> Config {
    let path = config_dir().join("config.json");
    match Config::load(&path) {
        Ok(cfg) => {
            info!("loaded config from {}", path.display());
            cfg
        }
        Err(e) => {
            info!("no config file ({}), using defaults", e);
            Config::default()
        }
    }
}

fn main() {
    env_logger::init();

    let cli = Cli::parse();
    let config = load_config();
    let compact = config.compact && !cli.no_compact;

    let client = HyprlandClient::new(config.timeout());
    let actions = Actions::new(&client, &client);

    let result = match cli.command {
        Command::Goto { slot } => actions.goto(slot, compact),
        Command::Move { slot, all } => actions.move_to(slot, all, compact),
        Command::Cycle { direction } => actions.cycle(direction.into(), compact),
        Command::Init => actions.init(),
    };

    if let Err(e) = result {
        error!("{}", e);
        std::process::exit(e.exit_code());
    }
}

//  Tests

//! Command-line interface.

use clap::Parser;
use std::path::PathBuf;

use crate::config::Config;
use crate::ui::game::MoveOrder;

/// Tic-tac-toe in the terminal, with a move history you can jump around in.
#[derive(Parser, Debug)]
#[command(name = "tictactoe")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Path to the config file (default: ~/.config/tictactoe/config.toml)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Start with the move list in descending order
    #[arg(long)]
    pub descending: bool,

    /// Do not capture the mouse; keyboard only
    #[arg(long)]
    pub no_mouse: bool,
}

impl Cli {
    /// Config file to load.
    pub fn config_path(&self) -> PathBuf {
        self.config.clone().unwrap_or_else(Config::config_path)
    }

    /// Applies command-line overrides on top of the loaded config.
    pub fn apply(&self, config: &mut Config) {
        if self.descending {
            config.moves.order = MoveOrder::Descending;
        }
        if self.no_mouse {
            config.ui.mouse = false;
        }
    }
}

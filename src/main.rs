use anyhow::{Context, Result};
use clap::Parser;
use tictactoe::cli::Cli;
use tictactoe::config::Config;
use tictactoe::logging::init_tracing;

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing();

    let path = cli.config_path();
    let mut config = Config::load_from(&path)
        .with_context(|| format!("loading configuration from {}", path.display()))?;
    cli.apply(&mut config);

    tictactoe::ui::run(&config).context("terminal UI failed")?;
    Ok(())
}

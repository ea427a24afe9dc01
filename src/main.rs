use std::io;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use connect_four::config::AppConfig;
use connect_four::logging;
use connect_four::ui::{App, TerminalGuard};
use ratatui::{backend::CrosstermBackend, Terminal};

/// Two-player Connect Four in the terminal.
#[derive(Parser)]
#[command(name = "connect_four", about = "Two-player Connect Four")]
struct Cli {
    /// Path to TOML configuration file
    #[arg(long, default_value = "connect_four.toml")]
    config: PathBuf,

    /// Write logs to this file (overrides [logging] file)
    #[arg(long)]
    log_file: Option<PathBuf>,

    /// Print the default configuration as TOML and exit
    #[arg(long)]
    print_default_config: bool,
}

fn main() {
    if let Err(err) = run() {
        eprintln!("Error: {err:#}");
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    if cli.print_default_config {
        print!("{}", AppConfig::default_toml());
        return Ok(());
    }

    let mut config = AppConfig::load_or_default(&cli.config)
        .with_context(|| format!("loading config from {}", cli.config.display()))?;
    if let Some(path) = cli.log_file {
        config.logging.file = Some(path);
    }
    logging::init(&config.logging).context("setting up logging")?;

    play(&config).context("running terminal UI")
}

fn play(config: &AppConfig) -> io::Result<()> {
    // Restores the terminal on every exit path, including failed setup
    let _guard = TerminalGuard::enter(config.ui.mouse)?;
    let mut terminal = Terminal::new(CrosstermBackend::new(io::stdout()))?;

    let mut app = App::new(config);
    app.run(&mut terminal)
}

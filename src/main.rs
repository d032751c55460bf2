//! Lumberjack CLI: drive the game service over newline-delimited JSON.

use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use log::info;

use lumberjack_idle::{GameConfig, GameRegistry, GameService, SystemClock};

/// Lumberjack - an incremental tree-chopping game
#[derive(Parser, Debug)]
#[command(name = "lumberjack")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Game tuning file (TOML); missing keys keep their defaults
    #[arg(short, long, env = "LUMBERJACK_CONFIG", global = true)]
    config: Option<PathBuf>,

    /// Default log filter, overridden by RUST_LOG
    #[arg(long, default_value = "info", global = true)]
    log_level: String,

    #[command(subcommand)]
    command: Commands,
}

/// Available commands
#[derive(Subcommand, Debug)]
enum Commands {
    /// Serve requests: one JSON request per stdin line, one response per stdout line
    Session,

    /// Print the effective game tuning as TOML
    Config,
}

fn main() -> ExitCode {
    let args = Args::parse();

    let env = env_logger::Env::default().default_filter_or(&args.log_level);
    let _ = env_logger::Builder::from_env(env)
        .format_timestamp_secs()
        .try_init();

    let result = load_config(args.config.as_deref()).and_then(|config| match args.command {
        Commands::Session => run_session(config),
        Commands::Config => print_config(&config),
    });

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

fn load_config(path: Option<&Path>) -> Result<GameConfig> {
    let Some(path) = path else {
        return Ok(GameConfig::default());
    };
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("reading config {}", path.display()))?;
    let config = GameConfig::from_toml_str(&text)
        .with_context(|| format!("loading config {}", path.display()))?;
    info!("loaded game config from {}", path.display());
    Ok(config)
}

fn print_config(config: &GameConfig) -> Result<()> {
    let text = toml::to_string_pretty(config).context("serializing config")?;
    print!("{text}");
    Ok(())
}

fn run_session(config: GameConfig) -> Result<()> {
    let registry = GameRegistry::with_config(config, SystemClock).context("invalid game config")?;
    let service = GameService::with_registry(registry);
    info!("session started");

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut out = stdout.lock();

    for line in stdin.lock().lines() {
        let line = line.context("reading request")?;
        if line.trim().is_empty() {
            continue;
        }
        let response = service.handle_line(&line);
        serde_json::to_writer(&mut out, &response).context("writing response")?;
        writeln!(out).context("writing response")?;
        out.flush().context("flushing response")?;
    }

    info!(
        "session ended with {} active games",
        service.registry().len()
    );
    Ok(())
}

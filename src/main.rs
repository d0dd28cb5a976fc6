//! linebar - Entry Point

use clap::Parser;
use linebar::config::ResolvedConfig;
use linebar::instance::{self, InstancePaths, Role, UiRequest};
use linebar::state::AppState;
use linebar::store::{Positions, SourceRegistry};
use std::path::PathBuf;
use std::sync::mpsc;
use std::time::Duration;
use tracing::{error, info, warn};

/// linebar - a one-line reader bar for text files
#[derive(Parser, Debug)]
#[command(name = "linebar")]
#[command(version)]
#[command(about = "Single-line terminal reader bar that remembers where you stopped")]
pub struct Args {
    /// Text file to read (defaults to the configured source)
    pub file: Option<PathBuf>,

    /// Path to configuration file
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Instance name; launches sharing a name collapse into one reader
    #[arg(long)]
    pub instance: Option<String>,
}

fn resolve_config(args: &Args) -> Result<ResolvedConfig, linebar::config::ConfigError> {
    // Defaults → Config File → Env Vars → CLI Args
    let config_file = linebar::config::load_config_with_precedence(args.config.clone())?;
    let merged = linebar::config::merge_config(config_file);
    let with_env = linebar::config::apply_env_overrides(merged);
    Ok(linebar::config::apply_cli_overrides(
        with_env,
        args.file.clone(),
        args.instance.clone(),
    ))
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    let config = resolve_config(&args)?;

    if let Err(err) = linebar::logging::init(&config.log_file_path) {
        eprintln!("linebar: logging disabled: {err}");
    }

    info!(config = ?config, "Configuration loaded and resolved");

    let paths = InstancePaths::new(&config.runtime_dir, &config.instance_name);
    let role = match instance::acquire(&paths) {
        Ok(role) => role,
        Err(err) => {
            warn!(error = %err, "Instance lock unavailable, running standalone");
            return run_reader(&config, None);
        }
    };

    match role {
        Role::Secondary => {
            info!(instance = %config.instance_name, "Reader already running, asking it to show");
            let timeout = Duration::from_millis(config.connect_timeout_ms);
            if let Err(err) = instance::send_request(&paths.socket, UiRequest::ShowWindow, timeout)
            {
                error!(error = %err, "Could not reach the running reader");
            }
            Ok(())
        }
        Role::Owner(guard) => {
            let (sender, receiver) = mpsc::channel();
            let requests = match instance::spawn_listener(&paths.socket, sender) {
                Ok(_) => Some(receiver),
                Err(err) => {
                    warn!(
                        error = %err,
                        "Instance listener unavailable; later launches will exit without reaching this reader"
                    );
                    None
                }
            };
            let result = run_reader(&config, requests);
            drop(guard);
            result
        }
    }
}

/// Open the start source and run the bar until the reader quits.
fn run_reader(
    config: &ResolvedConfig,
    requests: Option<mpsc::Receiver<UiRequest>>,
) -> Result<(), Box<dyn std::error::Error>> {
    let source = std::path::absolute(&config.source).unwrap_or_else(|_| config.source.clone());

    let mut registry = SourceRegistry::load(&config.registry_path);
    if let Err(err) = registry.register(&source) {
        warn!(source = %source.display(), error = %err, "Failed to register start source");
    }

    let app_state = AppState::open(&source, Positions::new(registry), config.text_margin);
    linebar::view::run_with_state(app_state, requests)?;

    info!("linebar exited");
    Ok(())
}

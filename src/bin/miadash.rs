use anyhow::{Context, Result};
use clap::Parser;
use miadash::{Config, logging};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "miadash", version, about = "Warehouse SLA dashboard", long_about = None)]
struct Cli {
    /// Run in the terminal instead of a desktop window
    #[arg(long)]
    tui: bool,
    /// Start in light mode
    #[arg(long)]
    light: bool,
    /// Config file (defaults to the platform config directory)
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,
    /// Module shown at startup: overview, orders, picking, warehouse,
    /// analytics, alerts, staff or settings
    #[arg(long, value_name = "ID")]
    module: Option<String>,
    /// Verbose logging; RUST_LOG is honored
    #[arg(long)]
    debug: bool,
    /// Write a default config file (if none exists) and exit
    #[arg(long)]
    init_config: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let path = cli.config.clone().unwrap_or_else(Config::config_path);

    if cli.init_config {
        Config::write_default(&path)
            .with_context(|| format!("failed to write config to {}", path.display()))?;
        println!("Config: {}", path.display());
        return Ok(());
    }

    // Peek at the file so its debug flag can raise the log level
    let debug = cli.debug || Config::load_from(&path).is_ok_and(|c| c.debug);
    if cli.tui {
        let log_file = logging::default_log_file();
        logging::init_to_file(debug, &log_file)
            .with_context(|| format!("failed to open log file {}", log_file.display()))?;
    } else {
        logging::init(debug);
    }

    let mut config = Config::load_or_default(&path);
    config.debug = debug;
    if cli.light {
        config.dark_mode = false;
    }
    if let Some(module) = cli.module {
        config.start_module = module;
    }

    if cli.tui {
        miadash::tui::launch(&config)?;
        return Ok(());
    }
    run_gui(config)
}

#[cfg(feature = "gui")]
fn run_gui(config: Config) -> Result<()> {
    miadash::gui::run(config).map_err(|e| anyhow::anyhow!("GUI failed: {e}"))
}

#[cfg(not(feature = "gui"))]
fn run_gui(_config: Config) -> Result<()> {
    anyhow::bail!("built without the `gui` feature; run with --tui")
}

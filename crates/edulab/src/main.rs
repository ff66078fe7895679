use clap::Parser;
use edulab::{App, AppConfig, init_logging};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "edulab")]
#[command(about = "Lotto number draws and quadratic function lessons in the terminal")]
struct Args {
    /// Path to the data directory (default: ~/.edulab/)
    #[arg(short, long)]
    data_dir: Option<PathBuf>,

    /// Log level (debug, info, warn, error)
    #[arg(short, long, default_value = "info")]
    log_level: String,

    /// Seed for reproducible lotto draws and statistics
    #[arg(short, long)]
    seed: Option<u64>,
}

fn default_data_dir() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".edulab")
}

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    let args = Args::parse();
    let data_dir = args.data_dir.unwrap_or_else(default_data_dir);

    init_logging(&data_dir, &args.log_level)?;

    let mut config = AppConfig::load_or_init(&data_dir);
    if let Some(seed) = args.seed {
        config.seed = Some(seed);
    }
    tracing::info!(seed = ?config.seed, sets = config.lotto_sets, "Configuration loaded");

    let mut app = App::new(&config, &data_dir);

    ratatui::run(|terminal| app.run(terminal))?;

    tracing::info!("Application shutting down");

    if let Err(err) = ratatui::try_restore() {
        tracing::error!("Failed to restore terminal: {err}");
    }

    Ok(())
}

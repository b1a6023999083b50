use anyhow::{Context, Result};
use clap::Parser;
use coursebuilder::config::Config;
use coursebuilder::logger::Logger;
use coursebuilder::ui;
use log::LevelFilter;
use std::path::PathBuf;

/// coursebuilder - organize course modules, files and links in the terminal
#[derive(Parser, Debug)]
#[command(name = "coursebuilder", version)]
#[command(about = "A terminal course-content organizer", long_about = None)]
struct Args {
    /// Path to a configuration file
    #[arg(long, short = 'c')]
    config: Option<PathBuf>,

    /// Write a default configuration file and exit
    #[arg(long)]
    generate_config: bool,

    /// Enable debug logging
    #[arg(long, short = 'd')]
    debug: bool,

    /// Files to add as uploads on startup
    files: Vec<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    if args.generate_config {
        let path = match args.config {
            Some(path) => path,
            None => Config::get_default_config_path()?,
        };
        Config::generate_default_config(&path)?;
        return Ok(());
    }

    let config = match &args.config {
        Some(path) => Config::load_from_file(path)
            .with_context(|| format!("Failed to load configuration from {}", path.display()))?,
        None => Config::load()?,
    };

    let mut logger = Logger::from_config(&config.logging)?;
    if args.debug {
        logger = logger.with_level(LevelFilter::Debug);
    }
    let logger = logger.install()?;
    if let Some(path) = logger.log_file() {
        log::info!("Logging to {}", path.display());
    }

    // Run the TUI application
    ui::run_app(config, args.files).await?;

    Ok(())
}

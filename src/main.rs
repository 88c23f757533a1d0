use anyhow::{Context, Result};
use statedeck::config::Config;
use statedeck::logger::Logger;
use statedeck::state::PostSource;
use statedeck::ui;
use std::path::PathBuf;

const USAGE: &str = "\
Usage: statedeck [OPTIONS]

Options:
  --generate-config [PATH]  Write a default configuration file and exit
  -h, --help                Print this help and exit";

#[tokio::main]
async fn main() -> Result<()> {
    let args: Vec<String> = std::env::args().skip(1).collect();

    match args.first().map(String::as_str) {
        Some("-h") | Some("--help") => {
            println!("{}", USAGE);
            return Ok(());
        }
        Some("--generate-config") => {
            let path = match args.get(1) {
                Some(path) => PathBuf::from(path),
                None => Config::get_default_config_path()?,
            };
            return Config::generate_default_config(path);
        }
        Some(other) => {
            eprintln!("❌ Unknown argument: {}\n\n{}", other, USAGE);
            std::process::exit(2);
        }
        None => {}
    }

    let config = Config::load().context("Failed to load configuration")?;
    let logger = Logger::from_config(config.logging.enabled)?;
    log::info!("Starting statedeck {}", env!("CARGO_PKG_VERSION"));

    let posts = PostSource::load(config.posts.file.as_deref()).context("Failed to load posts")?;

    // Run the TUI application
    ui::run_app(&config, posts, logger).await?;

    Ok(())
}

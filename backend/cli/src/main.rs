mod repl;

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

use repricer_config::{config_file_path, load_config};
use repricer_extract::{ContentKind, Ingestor};
use repricer_logging::init_logger;

#[derive(Parser)]
#[command(name = "repricer")]
#[command(about = "Repricer — price-list extraction and command-driven repricing")]
#[command(version)]
struct Cli {
    /// Path to a config file (default: user config dir).
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start an interactive repricing session
    Repl {
        /// File to load on startup (pdf, xlsx/xls/csv, png/jpg/jpeg)
        file: Option<PathBuf>,
    },
    /// Extract prices from a document and print them, one per line
    Extract {
        /// Input file
        file: PathBuf,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config_path = cli.config.clone().unwrap_or_else(config_file_path);
    let config = load_config(&config_path)?;
    init_logger(
        &config.logging.level,
        config.logging.dir.as_deref().map(std::path::Path::new),
    );

    match cli.command {
        Commands::Repl { file } => repl::run(&config, file.as_deref()),
        Commands::Extract { file } => run_extract(&file),
    }
}

fn run_extract(file: &PathBuf) -> Result<()> {
    let kind = ContentKind::from_extension(file)
        .ok_or_else(|| anyhow::anyhow!("unsupported file type: {}", file.display()))?;
    let bytes = std::fs::read(file)?;
    let table = Ingestor::builtin().ingest(&bytes, kind)?;
    for row in 0..table.row_count() {
        if let Some(price) = table.price(row) {
            println!("{}", price);
        }
    }
    Ok(())
}

//! One-shot jurisdiction lookup from the command line.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use bluebonnet::{Config, JurisdictionService};

#[derive(Parser, Debug)]
#[command(name = "lookup")]
#[command(about = "Find the law-enforcement agency covering a Texas coordinate")]
struct Args {
    /// Latitude (WGS84)
    #[arg(long, allow_hyphen_values = true)]
    lat: f64,

    /// Longitude (WGS84)
    #[arg(long, allow_hyphen_values = true)]
    lon: f64,

    /// TOML config file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Pretty-print the JSON result
    #[arg(long)]
    pretty: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Logs go to stderr so stdout stays clean JSON
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let args = Args::parse();
    let config = Config::load_or_default(args.config.as_ref())?;

    let service = JurisdictionService::new(&config).context("Failed to create HTTP client")?;
    let result = service
        .get_jurisdiction_by_coordinates(args.lat, args.lon)
        .await?;

    let json = if args.pretty {
        serde_json::to_string_pretty(&result)?
    } else {
        serde_json::to_string(&result)?
    };
    println!("{}", json);

    Ok(())
}

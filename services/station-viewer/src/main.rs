//! Headless station map viewer.
//!
//! Runs one render pass against a station endpoint, drawing onto an
//! in-memory map, and writes the resulting markers as GeoJSON.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use station_common::Metric;
use station_map::{
    FilterInputs, HttpStationSource, InMemoryMap, PassOutcome, RenderController, ViewerConfig,
};
use tracing::{info, warn, Level};
use tracing_subscriber::FmtSubscriber;

#[derive(Parser, Debug)]
#[command(name = "station-viewer")]
#[command(about = "Render color-coded station markers and export them as GeoJSON")]
struct Args {
    /// YAML configuration file (defaults apply when omitted)
    #[arg(short, long, env = "STATION_VIEWER_CONFIG")]
    config: Option<PathBuf>,

    /// Station endpoint base URL, overrides the config file
    #[arg(long, env = "STATION_API_URL")]
    base_url: Option<String>,

    /// Metric that colors the markers: price or commute_time
    #[arg(short, long, default_value = "price")]
    metric: Metric,

    /// Minimum rent (10k JPY); unparseable input means 0
    #[arg(long)]
    price_min: Option<String>,

    /// Maximum rent (10k JPY); unparseable input means 9999
    #[arg(long)]
    price_max: Option<String>,

    /// Minimum commute time in minutes; unparseable input means 0
    #[arg(long)]
    time_min: Option<String>,

    /// Maximum commute time in minutes; unparseable input means 9999
    #[arg(long)]
    time_max: Option<String>,

    /// Write GeoJSON here instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Log level
    #[arg(long, default_value = "info")]
    log_level: String,

    /// Emit logs as JSON
    #[arg(long)]
    json_logs: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment from .env file if present
    dotenvy::dotenv().ok();

    let args = Args::parse();
    init_tracing(&args.log_level, args.json_logs)?;

    let mut config = match &args.config {
        Some(path) => ViewerConfig::from_file(path)
            .with_context(|| format!("Failed to load config {}", path.display()))?,
        None => ViewerConfig::default(),
    };
    if let Some(base_url) = &args.base_url {
        config.endpoint.base_url = base_url.clone();
    }

    let source =
        HttpStationSource::new(config.endpoint.base_url.clone(), config.endpoint.request_timeout())?;
    let mut controller = RenderController::new(InMemoryMap::new(), source, &config)?;
    controller.initialize();

    info!(base_url = %config.endpoint.base_url, metric = %args.metric, "Starting render pass");

    controller.filter_mut().set_metric(args.metric);
    let inputs = FilterInputs {
        price_min: args.price_min,
        price_max: args.price_max,
        time_min: args.time_min,
        time_max: args.time_max,
    };
    let outcome = controller.apply_filter(&inputs).await;

    match &outcome {
        PassOutcome::Rendered {
            fetched,
            rendered,
            min,
            max,
        } => info!(fetched, rendered, min, max, "Markers rendered"),
        PassOutcome::Empty => info!("No stations matched; writing an empty collection"),
        PassOutcome::Failed(e) => warn!(error = %e, "Render pass failed; writing an empty collection"),
        PassOutcome::Superseded { .. } => {}
    }

    let geojson = serde_json::to_string_pretty(&controller.map().to_geojson())?;
    match &args.output {
        Some(path) => {
            std::fs::write(path, geojson)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            info!(path = %path.display(), "GeoJSON written");
        }
        None => println!("{}", geojson),
    }

    Ok(())
}

fn init_tracing(log_level: &str, json: bool) -> Result<()> {
    let level = match log_level.to_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    };

    // Logs go to stderr so stdout stays clean GeoJSON
    let builder = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(true)
        .with_writer(std::io::stderr);

    if json {
        tracing::subscriber::set_global_default(builder.json().finish())?;
    } else {
        tracing::subscriber::set_global_default(builder.finish())?;
    }
    Ok(())
}

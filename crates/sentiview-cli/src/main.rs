//! Command-line interface for sentiview

mod render;

use clap::{Parser, Subcommand};
use sentiview_client::{ApiClient, ClientConfig, Orchestrator};
use std::time::Duration;
use tracing::info;

#[derive(Parser, Debug)]
#[command(name = "sentiview")]
#[command(about = "Multi-source financial sentiment analysis", long_about = None)]
struct Args {
    /// Base URL of the analysis service (overrides SENTIVIEW_API_URL)
    #[arg(long)]
    api_url: Option<String>,

    /// Per-request timeout in seconds
    #[arg(long, default_value_t = 60)]
    timeout: u64,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Analyze a ticker symbol across all sentiment sources
    Symbol {
        /// Ticker symbol, e.g. AAPL
        symbol: String,
    },
    /// Analyze the transcript sentiment of a YouTube video
    Video {
        /// Video URL (watch, short, or embed form)
        url: String,
    },
    /// Analyze an ad-hoc piece of financial text
    Text {
        /// Text to analyze
        text: String,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    sentiview_utils::init_tracing();

    let args = Args::parse();

    let mut builder = ClientConfig::builder()
        .with_env_base_url()
        .request_timeout(Duration::from_secs(args.timeout));
    if let Some(url) = args.api_url {
        builder = builder.base_url(url);
    }
    let config = builder.build();

    info!("Using analysis service at {}", config.base_url);
    let orchestrator = Orchestrator::new(ApiClient::new(config));

    match args.command {
        Command::Symbol { symbol } => {
            let report = orchestrator.analyze(&symbol).await?;
            print!("{}", render::render_symbol_report(&report));
        }
        Command::Video { url } => {
            let analysis = orchestrator.analyze_video(&url).await?;
            print!("{}", render::render_video_analysis(&analysis));
        }
        Command::Text { text } => {
            let score = orchestrator.analyze_text(&text).await?;
            print!("{}", render::render_sentiment_score(&score));
        }
    }

    Ok(())
}

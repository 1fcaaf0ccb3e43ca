use anyhow::Result;
use chrono::Utc;
use clap::Parser;
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use pvr_guide::{
    config::Config,
    epg::{demo_guide, load_guide_file},
    pvr::PvrScheduler,
    web::WebServer,
};

#[derive(Parser)]
#[command(name = "pvr-guide")]
#[command(version)]
#[command(about = "HTML program guide and recording log for a personal video recorder")]
#[command(long_about = None)]
struct Cli {
    /// Configuration file path
    #[arg(short, long, default_value = "config.toml")]
    config: PathBuf,

    /// Listening IP address
    #[arg(short = 'H', long, value_name = "IP")]
    host: Option<String>,

    /// Listening port
    #[arg(short, long, value_name = "PORT")]
    port: Option<u16>,

    /// Guide data file (overrides config file)
    #[arg(short = 'g', long, value_name = "FILE")]
    guide: Option<PathBuf>,

    /// Log level
    #[arg(short = 'v', long, default_value = "info")]
    log_level: String,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging with specified level
    let log_filter = if cli.log_level == "trace" {
        format!("pvr_guide={},tower_http=trace", cli.log_level)
    } else {
        format!("pvr_guide={}", cli.log_level)
    };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| log_filter.into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting PVR Guide v{}", env!("CARGO_PKG_VERSION"));

    let mut config = Config::load_from(&cli.config)?;
    info!("Configuration loaded from: {}", cli.config.display());

    // Override config with CLI arguments
    if let Some(host) = cli.host {
        config.web.host = host;
    }
    if let Some(port) = cli.port {
        config.web.port = port;
    }
    if let Some(guide) = cli.guide {
        config.guide.data_path = Some(guide);
    }

    let data = match &config.guide.data_path {
        Some(path) => load_guide_file(path)?,
        None => {
            info!("No guide file configured, generating demo guide");
            demo_guide(Utc::now())
        }
    };
    let (guide, recordings) = data.into_parts();
    info!(
        "Guide ready: {} channels, {} events, {} recordings",
        guide.channels.len(),
        guide.epg.event_count(),
        recordings.len()
    );

    let web_server = WebServer::new(
        config,
        guide.into_shared(),
        PvrScheduler::new(recordings).into_shared(),
    )?;

    info!(
        "Starting web server on {}:{} (display timezone {})",
        web_server.host(),
        web_server.port(),
        web_server.timezone()
    );
    web_server.serve().await?;

    Ok(())
}

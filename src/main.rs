//! Comic Server
//!
//! Serves xkcd comics as HTML. Request `/614.1.2` to get several comics
//! fetched in parallel and shown in that order.

use clap::Parser;
use comic_server::{ClientConfig, XkcdClient};
use std::sync::Arc;
use std::time::Duration;

/// Concurrent xkcd comic server with an in-memory cache
#[derive(Parser, Debug)]
#[command(name = "comic_server")]
#[command(version, about, long_about = None)]
struct Args {
    /// Port to listen on
    #[arg(short, long, default_value_t = 7776)]
    port: u16,

    /// Base URL of the comic origin
    #[arg(long, default_value = "http://xkcd.com")]
    base_url: String,

    /// Timeout for each comic fetch in seconds
    #[arg(long, default_value_t = 10)]
    timeout_secs: u64,
}

#[tokio::main]
async fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();

    log::info!("Starting comic_server...");
    log::info!("Comic origin: {}", args.base_url);

    let client = match XkcdClient::new(ClientConfig {
        base_url: args.base_url,
        timeout: Duration::from_secs(args.timeout_secs),
    }) {
        Ok(client) => Arc::new(client),
        Err(e) => {
            log::error!("Failed to create comic client: {}", e);
            std::process::exit(1);
        }
    };

    if let Err(e) = comic_server::web::serve(client, args.port).await {
        log::error!("Web server error: {}", e);
        std::process::exit(1);
    }
}

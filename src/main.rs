use clap::Parser;
use shelf_scrape::config::{self, MAX_ITEMS_REQUESTED, MIN_ITEMS_REQUESTED};

mod args;
use args::Args;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize logging, info unless RUST_LOG says otherwise
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = Args::parse().into_config();

    if !config::items_requested_in_range(config.items_requested) {
        ::log::error!(
            "Invalid amount of items requested: {} (expected {}..={}), continuing anyway",
            config.items_requested,
            MIN_ITEMS_REQUESTED,
            MAX_ITEMS_REQUESTED
        );
    }

    ::log::info!(
        "Website: {}, Query: {}, Items requested: {}",
        config.website,
        config.query,
        config.items_requested
    );
    ::log::debug!("Run configuration: {}", serde_json::to_string(&config)?);

    let start_time = std::time::Instant::now();
    let items = shelf_scrape::collect_and_write(&config).await?;

    ::log::info!(
        "Collected {}/{} items in {:.2} seconds. Saved to {}",
        items.len(),
        config.items_requested,
        start_time.elapsed().as_secs_f64(),
        config.output_path
    );
    Ok(())
}

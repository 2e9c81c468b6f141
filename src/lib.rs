// Re-export modules
pub mod browser;
pub mod config;
pub mod error;
pub mod extractor;
pub mod pagination;
pub mod results;
pub mod session;
pub mod utils;
pub mod writer;

#[cfg(test)]
mod tests;

// Re-export commonly used types for convenience
pub use config::RunConfig;
pub use error::ScrapeError;
pub use results::ItemRecord;

/// Runs a search with the given configuration and writes the collected items.
///
/// Returns the collected items. Nothing is written if the search fails.
pub async fn collect_and_write(config: &RunConfig) -> Result<Vec<ItemRecord>, ScrapeError> {
    let items = session::run(config).await?;
    writer::write_items(&items, &config.output_path)?;
    Ok(items)
}

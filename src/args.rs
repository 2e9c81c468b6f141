use clap::{ArgAction, Parser};
use clap::builder::BoolishValueParser;
use shelf_scrape::RunConfig;
use shelf_scrape::config;

#[derive(Parser, Debug)]
#[command(name = "shelf-scrape")]
#[command(about = "Collects product titles and prices from a shop's search results")]
#[command(version)]
pub struct Args {
    /// Website URL
    #[arg(long, default_value_t = config::default_website())]
    pub website: String,

    /// Search query for the goods
    #[arg(long, default_value_t = config::default_query())]
    pub query: String,

    /// Number of items to collect [1, 100]
    #[arg(long, default_value_t = config::default_items_requested(), allow_negative_numbers = true)]
    pub n: i64,

    /// Output JSON file name
    #[arg(long, default_value_t = config::default_output_path())]
    pub out: String,

    /// Run the browser without showing a window [true/false]
    #[arg(
        long = "silent_mode",
        default_value = "true",
        action = ArgAction::Set,
        value_parser = BoolishValueParser::new()
    )]
    pub silent_mode: bool,

    /// WebDriver server URL (falls back to WEBDRIVER_URL, then http://localhost:4444)
    #[arg(long)]
    pub webdriver_url: Option<String>,
}

impl Args {
    /// Build the run configuration, reading `WEBDRIVER_URL` from the environment
    pub fn into_config(self) -> RunConfig {
        let env_url = std::env::var(config::WEBDRIVER_URL_ENV).ok();
        self.into_config_with_env(env_url.as_deref())
    }

    fn into_config_with_env(self, env_webdriver_url: Option<&str>) -> RunConfig {
        RunConfig {
            website: self.website,
            query: self.query,
            items_requested: self.n,
            output_path: self.out,
            headless: self.silent_mode,
            webdriver_url: config::resolve_webdriver_url(
                self.webdriver_url.as_deref(),
                env_webdriver_url,
            ),
            ..RunConfig::new()
        }
    }
}

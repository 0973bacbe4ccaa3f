mod scrape;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "lzscrape-cli")]
#[command(about = "Scrape Lazada keyword listings into CSV")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Scrape the listing pages for a keyword and export them as CSV
    Scrape {
        /// Search keyword; multiple words are joined with spaces
        #[arg(required = true, num_args = 1..)]
        keyword: Vec<String>,

        /// Number of listing pages to visit, starting from page 1
        #[arg(
            long,
            short = 'p',
            default_value_t = 1,
            value_parser = clap::value_parser!(u32).range(1..)
        )]
        pages: u32,

        /// CSV output path (overrides LZSCRAPE_OUTPUT_PATH)
        #[arg(long, short = 'o')]
        output: Option<PathBuf>,

        /// Leave the browser window open after the run (overrides LZSCRAPE_DETACH)
        #[arg(long)]
        detach: bool,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    dotenvy::dotenv().ok();
    let config = lzscrape_core::load_app_config()?;
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.log_level.clone()))?;
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Some(Commands::Scrape {
            keyword,
            pages,
            output,
            detach,
        }) => {
            let config = scrape::apply_overrides(config, output, detach);
            scrape::run_scrape(&config, &keyword.join(" "), pages).await?;
        }
        None => println!("lzscrape-cli: run `lzscrape-cli scrape --help` for usage"),
    }

    Ok(())
}

#[cfg(test)]
mod tests;

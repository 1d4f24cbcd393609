use anyhow::Result;
use books_page::cli::Cli;
use books_page::utils::logging;
use books_page::{App, Config};
use clap::Parser;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // config: defaults < books.toml < env < command line
    let config = cli.apply(Config::load(cli.config.as_deref()).await?);

    logging::init(config.verbose_logging);

    App::initialize(config).await?.run().await?;

    Ok(())
}

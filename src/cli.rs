use clap::Parser;

use crate::config::Config;

/// Build a static "books read" page from a library export
#[derive(Debug, Parser, Default)]
#[command(name = "books_page", version)]
pub struct Cli {
    /// Library export CSV
    #[arg(short, long)]
    pub input: Option<String>,

    /// HTML file to write
    #[arg(short, long)]
    pub output: Option<String>,

    /// Page title
    #[arg(short, long)]
    pub title: Option<String>,

    /// TOML config file (defaults to ./books.toml when present)
    #[arg(short, long)]
    pub config: Option<String>,

    /// Debug logging
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    /// Command-line values take precedence over everything else
    pub fn apply(&self, mut config: Config) -> Config {
        if let Some(input) = &self.input {
            config.input_csv = input.clone();
        }
        if let Some(output) = &self.output {
            config.output_html = output.clone();
        }
        if let Some(title) = &self.title {
            config.page.title = title.clone();
        }
        if self.verbose {
            config.verbose_logging = true;
        }
        config
    }
}

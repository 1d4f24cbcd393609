//! Page build run - orchestration layer
//!
//! Owns the configuration and drives one run end to end:
//! load export → build catalog → render → write page.
//! No per-row logic lives here.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::{info, warn};

use crate::config::Config;
use crate::error::AppError;
use crate::models::load_library_export;
use crate::render::page::{render_page, validate_settings};
use crate::utils::logging::{log_startup, print_final_stats};
use crate::workflow::{build_catalog, CatalogStats};

/// Outcome of a finished run
#[derive(Debug, Clone)]
pub struct RunReport {
    pub output_path: PathBuf,
    pub stats: CatalogStats,
    pub bytes_written: usize,
}

/// Application entry
pub struct App {
    config: Config,
}

impl App {
    /// Initialise the application
    ///
    /// Page settings are checked up front so a bad config fails before any
    /// file is touched.
    pub async fn initialize(config: Config) -> Result<Self> {
        validate_settings(&config.page).context("invalid page settings")?;

        log_startup(&config.input_csv, &config.output_html);

        Ok(Self { config })
    }

    /// Run the pipeline and write the page
    ///
    /// # Returns
    /// Output path, row statistics and page size
    pub async fn run(&self) -> Result<RunReport> {
        let input = Path::new(&self.config.input_csv);
        let rows = load_library_export(input)
            .await
            .with_context(|| format!("failed to load library export {}", input.display()))?;

        let catalog = build_catalog(&rows);
        if catalog.books.is_empty() {
            warn!("⚠️ No reviewed books on the read shelf, the page will have no entries");
        }

        let html = render_page(&catalog.books, &self.config.page)?;

        let output_path = PathBuf::from(&self.config.output_html);
        write_page(&output_path, &html).await?;
        info!("💾 Wrote {} bytes", html.len());

        print_final_stats(&catalog.stats, &self.config.output_html);

        Ok(RunReport {
            output_path,
            stats: catalog.stats,
            bytes_written: html.len(),
        })
    }
}

/// Write the page, creating missing parent directories
async fn write_page(path: &Path, html: &str) -> Result<(), AppError> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        tokio::fs::create_dir_all(parent)
            .await
            .map_err(|e| AppError::create_dir_failed(parent.display().to_string(), e))?;
    }

    tokio::fs::write(path, html)
        .await
        .map_err(|e| AppError::file_write_failed(path.display().to_string(), e))
}

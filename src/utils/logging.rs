//! Logging helpers
//!
//! Subscriber setup plus the banner-style progress lines printed by a run

use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::workflow::CatalogStats;

/// Install the global subscriber
///
/// `RUST_LOG` wins when set; otherwise `info`, or `debug` when `verbose`.
/// Calling this more than once is harmless.
pub fn init(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .try_init();
}

/// Log startup information
///
/// # Arguments
/// - `input`: library export being read
/// - `output`: page being written
pub fn log_startup(input: &str, output: &str) {
    info!("{}", "=".repeat(60));
    info!("📚 Building books page");
    info!("📥 Library export: {}", input);
    info!("📤 Output page: {}", output);
    info!("{}", "=".repeat(60));
}

/// Print final statistics
pub fn print_final_stats(stats: &CatalogStats, output: &str) {
    info!("\n{}", "=".repeat(60));
    info!("📊 Summary");
    info!(
        "Finished at: {}",
        chrono::Local::now().format("%Y-%m-%d %H:%M:%S")
    );
    info!("{}", "=".repeat(60));
    info!("✅ Published: {}/{}", stats.published, stats.total_rows);
    info!("⏭️ Not on the read shelf: {}", stats.not_read);
    info!("📝 Read but not reviewed: {}", stats.no_review);
    if stats.undated > 0 {
        info!("📅 Without a usable read date: {}", stats.undated);
    }
    info!("{}", "=".repeat(60));
    info!("HTML page generated successfully: {}", output);
}

/// Truncate long text for log lines
///
/// # Arguments
/// - `text`: original text
/// - `max_len`: maximum number of characters kept
pub fn truncate_text(text: &str, max_len: usize) -> String {
    if text.chars().count() > max_len {
        text.chars().take(max_len).collect::<String>() + "..."
    } else {
        text.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_text_short() {
        assert_eq!(truncate_text("Dune", 10), "Dune");
    }

    #[test]
    fn test_truncate_text_counts_chars_not_bytes() {
        assert_eq!(truncate_text("★★★☆☆", 3), "★★★...");
    }
}

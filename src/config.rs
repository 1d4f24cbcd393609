use crate::error::{AppError, AppResult, ConfigError};
use serde::Deserialize;
use std::path::Path;

/// Config file picked up from the working directory when none is given
pub const DEFAULT_CONFIG_FILE: &str = "books.toml";

/// Program configuration
#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(default)]
pub struct Config {
    /// Exported library CSV
    pub input_csv: String,
    /// Generated HTML page
    pub output_html: String,
    /// Verbose logging
    pub verbose_logging: bool,
    /// Page chrome
    pub page: PageSettings,
}

/// Everything in the page template that is not a book
#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(default)]
pub struct PageSettings {
    /// `<title>` of the page
    pub title: String,
    /// `<h1>` in the header
    pub heading: String,
    pub favicon_href: String,
    pub stylesheet_href: String,
    pub home_href: String,
    pub blog_href: String,
    pub books_href: String,
    /// Full shelf on the tracking site, linked from the footer
    pub library_url: String,
    pub library_link_text: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            input_csv: "goodreads_library_export.csv".to_string(),
            output_html: "index.html".to_string(),
            verbose_logging: false,
            page: PageSettings::default(),
        }
    }
}

impl Default for PageSettings {
    fn default() -> Self {
        Self {
            title: "Charlie's Books".to_string(),
            heading: "Recent Book Reviews".to_string(),
            favicon_href: "../../favicon.ico".to_string(),
            stylesheet_href: "../blog/blogstyles.css".to_string(),
            home_href: "/".to_string(),
            blog_href: "/blog/".to_string(),
            books_href: "/books/".to_string(),
            library_url: "https://www.goodreads.com/review/list/".to_string(),
            library_link_text: "View all my books".to_string(),
        }
    }
}

impl Config {
    /// Defaults overridden by environment variables
    pub fn from_env() -> AppResult<Self> {
        Self::default().with_overrides(|key| std::env::var(key).ok())
    }

    /// Load configuration
    ///
    /// Precedence: defaults < TOML file < environment. An explicitly given
    /// config file must exist; the implicit `books.toml` is optional.
    ///
    /// # Arguments
    /// - `config_path`: `--config` value, if any
    pub async fn load(config_path: Option<&str>) -> AppResult<Self> {
        let toml_path = match config_path {
            Some(path) => path,
            None if Path::new(DEFAULT_CONFIG_FILE).exists() => DEFAULT_CONFIG_FILE,
            None => return Self::from_env(),
        };

        Self::from_toml_file(toml_path)
            .await?
            .with_overrides(|key| std::env::var(key).ok())
    }

    /// Read a TOML config file
    pub async fn from_toml_file(path: &str) -> AppResult<Self> {
        if !Path::new(path).exists() {
            return Err(AppError::file_not_found(path));
        }

        let content = tokio::fs::read_to_string(path)
            .await
            .map_err(|e| AppError::file_read_failed(path, e))?;

        Self::from_toml_str(&content, path)
    }

    /// Parse TOML text; `origin` only labels errors
    pub fn from_toml_str(content: &str, origin: &str) -> AppResult<Self> {
        toml::from_str(content).map_err(|source| {
            AppError::Config(ConfigError::TomlParseFailed {
                path: origin.to_string(),
                source,
            })
        })
    }

    /// Apply `BOOKS_*` overrides
    ///
    /// # Arguments
    /// - `lookup`: variable name to value, `std::env::var` in production
    ///
    /// # Returns
    /// The updated config, or an error for a value of the wrong type
    pub fn with_overrides<F>(mut self, lookup: F) -> AppResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(v) = lookup("BOOKS_INPUT_CSV") {
            self.input_csv = v;
        }
        if let Some(v) = lookup("BOOKS_OUTPUT_HTML") {
            self.output_html = v;
        }
        if let Some(v) = lookup("BOOKS_PAGE_TITLE") {
            self.page.title = v;
        }
        if let Some(v) = lookup("BOOKS_LIBRARY_URL") {
            self.page.library_url = v;
        }
        if let Some(v) = lookup("BOOKS_VERBOSE_LOGGING") {
            self.verbose_logging = v
                .parse()
                .map_err(|_| AppError::env_var_parse_failed("BOOKS_VERBOSE_LOGGING", v, "bool"))?;
        }

        Ok(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn test_defaults_match_original_page() {
        let config = Config::default();
        assert_eq!(config.input_csv, "goodreads_library_export.csv");
        assert_eq!(config.output_html, "index.html");
        assert_eq!(config.page.title, "Charlie's Books");
        assert!(!config.verbose_logging);
    }

    #[test]
    fn test_env_overrides() {
        let config = Config::default()
            .with_overrides(lookup_from(&[
                ("BOOKS_INPUT_CSV", "export.csv"),
                ("BOOKS_PAGE_TITLE", "Reading Log"),
                ("BOOKS_VERBOSE_LOGGING", "true"),
            ]))
            .unwrap();

        assert_eq!(config.input_csv, "export.csv");
        assert_eq!(config.output_html, "index.html");
        assert_eq!(config.page.title, "Reading Log");
        assert!(config.verbose_logging);
    }

    #[test]
    fn test_bad_bool_is_rejected() {
        let err = Config::default()
            .with_overrides(lookup_from(&[("BOOKS_VERBOSE_LOGGING", "yes please")]))
            .unwrap_err();
        assert!(matches!(
            err,
            AppError::Config(ConfigError::EnvVarParseFailed { .. })
        ));
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let toml = r#"
            output_html = "site/books/index.html"

            [page]
            title = "Shelf"
        "#;
        let config = Config::from_toml_str(toml, "inline").unwrap();

        assert_eq!(config.output_html, "site/books/index.html");
        assert_eq!(config.input_csv, "goodreads_library_export.csv");
        assert_eq!(config.page.title, "Shelf");
        assert_eq!(config.page.heading, "Recent Book Reviews");
    }

    #[test]
    fn test_invalid_toml_reports_origin() {
        let err = Config::from_toml_str("input_csv = [", "broken.toml").unwrap_err();
        assert!(err.to_string().contains("broken.toml"));
    }

    #[tokio::test]
    async fn test_load_without_toml_matches_from_env() {
        // the crate root carries no books.toml
        assert!(!Path::new(DEFAULT_CONFIG_FILE).exists());

        let loaded = Config::load(None).await.unwrap();
        assert_eq!(loaded, Config::from_env().unwrap());
    }

    #[tokio::test]
    async fn test_explicit_missing_file_is_an_error() {
        let err = Config::from_toml_file("/nonexistent/books.toml")
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::File(_)));
    }
}

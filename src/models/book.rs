use chrono::NaiveDate;

pub const UNKNOWN_TITLE: &str = "Unknown Title";
pub const UNKNOWN_AUTHOR: &str = "Unknown Author";

/// A reviewed book as it appears on the page
///
/// Built once per qualifying row and never changed afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Book {
    pub title: String,
    pub author: String,
    /// Trimmed review, never empty
    pub review_text: String,
    /// Five-glyph rating bar
    pub stars: String,
    /// Read date, or the sentinel when the export had none
    pub date_read: NaiveDate,
}

impl std::fmt::Display for Book {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} by {} [{}] ({})",
            self.title, self.author, self.stars, self.date_read
        )
    }
}

//! Catalog building - workflow layer
//!
//! Turns raw export rows into the ordered list of books the page shows:
//! 1. filter (read shelf + non-blank review)
//! 2. field transforms (stars, read date, placeholders)
//! 3. newest read date first

use tracing::debug;

use crate::models::book::{UNKNOWN_AUTHOR, UNKNOWN_TITLE};
use crate::models::{columns, Book, LibraryRow};
use crate::services::date_read::{is_sentinel, parse_date_read};
use crate::services::rating::rating_to_stars;
use crate::services::shelf_filter::{classify, FilterOutcome};
use crate::utils::truncate_text;

/// Row counts for one catalog build
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct CatalogStats {
    pub total_rows: usize,
    pub not_read: usize,
    pub no_review: usize,
    pub published: usize,
    /// Published books that fell back to the sentinel date
    pub undated: usize,
}

/// Books ready for rendering, newest first
#[derive(Debug, Default, Clone)]
pub struct Catalog {
    pub books: Vec<Book>,
    pub stats: CatalogStats,
}

/// Build a book from a row that passed the filter
///
/// # Arguments
/// - `row`: one record of the export
///
/// # Returns
/// `None` for rows the filter drops
pub fn book_from_row(row: &LibraryRow) -> Option<Book> {
    if classify(row) != FilterOutcome::Accepted {
        return None;
    }

    Some(Book {
        title: row.get_or(columns::TITLE, UNKNOWN_TITLE).to_string(),
        author: row.get_or(columns::AUTHOR, UNKNOWN_AUTHOR).to_string(),
        review_text: row.get_or(columns::MY_REVIEW, "").trim().to_string(),
        stars: rating_to_stars(row.get_or(columns::MY_RATING, "0")),
        date_read: parse_date_read(row.get_or(columns::DATE_READ, "")),
    })
}

/// Newest first; books read on the same day keep their export order
pub fn sort_by_date_read_desc(books: &mut [Book]) {
    books.sort_by(|a, b| b.date_read.cmp(&a.date_read));
}

/// Filter, transform and sort the export
pub fn build_catalog(rows: &[LibraryRow]) -> Catalog {
    let mut catalog = Catalog::default();
    catalog.stats.total_rows = rows.len();

    for row in rows {
        match classify(row) {
            FilterOutcome::NotRead => catalog.stats.not_read += 1,
            FilterOutcome::NoReview => catalog.stats.no_review += 1,
            FilterOutcome::Accepted => {
                if let Some(book) = book_from_row(row) {
                    debug!(
                        "line {}: {}",
                        row.line,
                        truncate_text(&book.to_string(), 80)
                    );
                    if is_sentinel(book.date_read) {
                        catalog.stats.undated += 1;
                    }
                    catalog.books.push(book);
                }
            }
        }
    }

    sort_by_date_read_desc(&mut catalog.books);
    catalog.stats.published = catalog.books.len();

    catalog
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::SENTINEL_DATE;
    use chrono::NaiveDate;

    fn read_row<'a>(title: &'a str, date: &'a str, review: &'a str) -> LibraryRow {
        LibraryRow::from_pairs([
            (columns::TITLE, title),
            (columns::AUTHOR, "Someone"),
            (columns::MY_RATING, "4"),
            (columns::EXCLUSIVE_SHELF, "read"),
            (columns::DATE_READ, date),
            (columns::MY_REVIEW, review),
        ])
    }

    fn titles(catalog: &Catalog) -> Vec<&str> {
        catalog.books.iter().map(|b| b.title.as_str()).collect()
    }

    #[test]
    fn test_book_from_row_maps_fields() {
        let book = book_from_row(&read_row("Dune", "2023/04/01", "  Spice.\n ")).unwrap();

        assert_eq!(book.title, "Dune");
        assert_eq!(book.author, "Someone");
        assert_eq!(book.review_text, "Spice.");
        assert_eq!(book.stars, "★★★★☆");
        assert_eq!(book.date_read, NaiveDate::from_ymd_opt(2023, 4, 1).unwrap());
    }

    #[test]
    fn test_book_from_row_placeholders() {
        let row = LibraryRow::from_pairs([
            (columns::EXCLUSIVE_SHELF, "read"),
            (columns::MY_REVIEW, "Good"),
        ]);
        let book = book_from_row(&row).unwrap();

        assert_eq!(book.title, UNKNOWN_TITLE);
        assert_eq!(book.author, UNKNOWN_AUTHOR);
        assert_eq!(book.stars, "☆☆☆☆☆");
        assert_eq!(book.date_read, SENTINEL_DATE);
    }

    #[test]
    fn test_book_from_row_rejects_unreviewed() {
        assert!(book_from_row(&read_row("Dune", "2023/04/01", "")).is_none());
    }

    #[test]
    fn test_build_catalog_sorts_newest_first() {
        let rows = vec![
            read_row("Old", "2015/06/01", "ok"),
            read_row("New", "2024/01/15", "ok"),
            read_row("Middle", "2020/03/10", "ok"),
        ];
        let catalog = build_catalog(&rows);

        assert_eq!(titles(&catalog), vec!["New", "Middle", "Old"]);
    }

    #[test]
    fn test_undated_books_sort_last() {
        let rows = vec![
            read_row("Undated", "", "ok"),
            read_row("Garbled", "last spring", "ok"),
            read_row("Dated", "2001/01/01", "ok"),
            read_row("ShortYear", "99/01/01", "ok"),
        ];
        let catalog = build_catalog(&rows);

        assert_eq!(
            titles(&catalog),
            vec!["Dated", "Undated", "Garbled", "ShortYear"]
        );
        assert_eq!(catalog.stats.undated, 3);
    }

    #[test]
    fn test_same_day_keeps_export_order() {
        let rows = vec![
            read_row("First", "2022/05/05", "ok"),
            read_row("Second", "2022/05/05", "ok"),
            read_row("Third", "2022/05/05", "ok"),
        ];
        let catalog = build_catalog(&rows);

        assert_eq!(titles(&catalog), vec!["First", "Second", "Third"]);
    }

    #[test]
    fn test_build_catalog_stats() {
        let to_read = LibraryRow::from_pairs([
            (columns::TITLE, "Later"),
            (columns::EXCLUSIVE_SHELF, "to-read"),
        ]);
        let rows = vec![
            read_row("Dune", "2023/04/01", "Spice."),
            read_row("Emma", "2022/01/01", "   "),
            to_read,
        ];
        let catalog = build_catalog(&rows);

        assert_eq!(
            catalog.stats,
            CatalogStats {
                total_rows: 3,
                not_read: 1,
                no_review: 1,
                published: 1,
                undated: 0,
            }
        );
    }

    #[test]
    fn test_empty_export() {
        let catalog = build_catalog(&[]);
        assert!(catalog.books.is_empty());
        assert_eq!(catalog.stats, CatalogStats::default());
    }
}

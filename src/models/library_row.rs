use std::collections::HashMap;

/// Column names in the library export
pub mod columns {
    pub const TITLE: &str = "Title";
    pub const AUTHOR: &str = "Author";
    pub const MY_RATING: &str = "My Rating";
    pub const DATE_READ: &str = "Date Read";
    pub const EXCLUSIVE_SHELF: &str = "Exclusive Shelf";
    pub const MY_REVIEW: &str = "My Review";
}

/// One record of the library export, keyed by header name
///
/// Columns the header does not name, and cells missing from a short record,
/// read as absent.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LibraryRow {
    fields: HashMap<String, String>,
    /// 1-based line of the record in the source file, 0 when unknown
    pub line: u64,
}

impl LibraryRow {
    /// Pair a record with the header row
    ///
    /// With duplicate header names the rightmost column wins.
    pub fn from_record(headers: &csv::StringRecord, record: &csv::StringRecord) -> Self {
        let fields = headers
            .iter()
            .zip(record.iter())
            .map(|(name, value)| (name.to_string(), value.to_string()))
            .collect();

        Self {
            fields,
            line: record.position().map(|p| p.line()).unwrap_or(0),
        }
    }

    /// Build a row from `(column, value)` pairs
    pub fn from_pairs<'a, I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        Self {
            fields: pairs
                .into_iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
            line: 0,
        }
    }

    /// Cell value, `None` when the column is absent
    pub fn get(&self, column: &str) -> Option<&str> {
        self.fields.get(column).map(String::as_str)
    }

    /// Cell value or `default` when the column is absent
    pub fn get_or<'a>(&'a self, column: &str, default: &'a str) -> &'a str {
        self.get(column).unwrap_or(default)
    }

    /// Number of named cells present
    pub fn cell_count(&self) -> usize {
        self.fields.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_record_leaves_trailing_columns_absent() {
        let headers = csv::StringRecord::from(vec!["Title", "Author", "My Review"]);
        let record = csv::StringRecord::from(vec!["Dune", "Frank Herbert"]);
        let row = LibraryRow::from_record(&headers, &record);

        assert_eq!(row.get(columns::TITLE), Some("Dune"));
        assert_eq!(row.get(columns::MY_REVIEW), None);
        assert_eq!(row.cell_count(), 2);
    }

    #[test]
    fn test_duplicate_header_rightmost_wins() {
        let headers = csv::StringRecord::from(vec!["Title", "Title"]);
        let record = csv::StringRecord::from(vec!["first", "second"]);
        let row = LibraryRow::from_record(&headers, &record);

        assert_eq!(row.get("Title"), Some("second"));
    }

    #[test]
    fn test_get_or_only_defaults_absent_columns() {
        let row = LibraryRow::from_pairs([("Title", "")]);
        assert_eq!(row.get_or("Title", "Unknown Title"), "");
        assert_eq!(row.get_or("Author", "Unknown Author"), "Unknown Author");
    }
}

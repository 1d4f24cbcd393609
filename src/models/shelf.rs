/// Exclusive shelf of a book in the library export
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Shelf {
    /// read
    Read,
    /// to-read
    ToRead,
    /// currently-reading
    CurrentlyReading,
    /// any custom exclusive shelf, lowercased
    Other(String),
}

impl Shelf {
    /// Shelf name as it appears in the export
    pub fn name(&self) -> &str {
        match self {
            Shelf::Read => "read",
            Shelf::ToRead => "to-read",
            Shelf::CurrentlyReading => "currently-reading",
            Shelf::Other(name) => name,
        }
    }
}

impl From<&str> for Shelf {
    /// Case-insensitive; surrounding whitespace is significant
    fn from(raw: &str) -> Self {
        let lower = raw.to_lowercase();
        match lower.as_str() {
            "read" => Shelf::Read,
            "to-read" => Shelf::ToRead,
            "currently-reading" => Shelf::CurrentlyReading,
            _ => Shelf::Other(lower),
        }
    }
}

impl std::fmt::Display for Shelf {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

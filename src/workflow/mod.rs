pub mod catalog;

pub use catalog::{book_from_row, build_catalog, sort_by_date_read_desc, Catalog, CatalogStats};

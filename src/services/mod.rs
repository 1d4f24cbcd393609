pub mod date_read;
pub mod rating;
pub mod review;
pub mod shelf_filter;

pub use date_read::{parse_date_read, SENTINEL_DATE};
pub use rating::rating_to_stars;
pub use review::{escape_html, review_to_html};
pub use shelf_filter::{classify, FilterOutcome};

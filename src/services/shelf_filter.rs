//! Row filter
//!
//! Only books on the `read` shelf that carry a written review are published.

use crate::models::{columns, LibraryRow, Shelf};

/// Why a row was kept or dropped
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterOutcome {
    Accepted,
    NotRead,
    NoReview,
}

/// Row is on the `read` shelf
pub fn is_read(row: &LibraryRow) -> bool {
    Shelf::from(row.get_or(columns::EXCLUSIVE_SHELF, "")) == Shelf::Read
}

/// Row has a non-blank review
pub fn has_review(row: &LibraryRow) -> bool {
    !row.get_or(columns::MY_REVIEW, "").trim().is_empty()
}

/// Apply both predicates; the shelf is checked first
pub fn classify(row: &LibraryRow) -> FilterOutcome {
    if !is_read(row) {
        FilterOutcome::NotRead
    } else if !has_review(row) {
        FilterOutcome::NoReview
    } else {
        FilterOutcome::Accepted
    }
}

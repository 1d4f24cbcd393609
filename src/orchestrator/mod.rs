//! Orchestration layer
//!
//! ```text
//! orchestrator::App      (one run: read → build → render → write)
//!     ↓
//! render::page           (books → HTML)
//! workflow::catalog      (rows → ordered books)
//!     ↓
//! services               (filter / rating / date / review)
//!     ↓
//! models                 (LibraryRow, Book, csv loader)
//! ```
//!
//! Only this layer touches the output file.

pub mod app;

pub use app::{App, RunReport};

//! # Books Page
//!
//! Turns a Goodreads-style library export into a static "books read" page.
//!
//! ## Layers
//!
//! ### Models
//! - `models/` - `LibraryRow` (header-keyed CSV record), `Book`, `Shelf`
//! - `models/loaders` - reads the export
//!
//! ### Services
//! - `services/` - one field rule each: shelf filter, rating glyphs,
//!   read date with sentinel fallback, review line breaks
//!
//! ### Workflow
//! - `workflow/catalog` - filter + transform + newest-first sort
//!
//! ### Rendering
//! - `render/page` - head, one fragment per book, footer
//!
//! ### Orchestration
//! - `orchestrator/app` - one run from export to written page

pub mod cli;
pub mod config;
pub mod error;
pub mod models;
pub mod orchestrator;
pub mod render;
pub mod services;
pub mod utils;
pub mod workflow;

pub use config::{Config, PageSettings};
pub use error::{AppError, AppResult};
pub use models::{Book, LibraryRow, Shelf};
pub use orchestrator::{App, RunReport};
pub use workflow::{build_catalog, Catalog, CatalogStats};

pub mod csv_loader;

pub use csv_loader::{load_library_export, parse_library_export};

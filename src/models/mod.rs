pub mod book;
pub mod library_row;
pub mod loaders;
pub mod shelf;

pub use book::Book;
pub use library_row::{columns, LibraryRow};
pub use loaders::{load_library_export, parse_library_export};
pub use shelf::Shelf;

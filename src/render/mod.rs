pub mod page;

pub use page::{render_book, render_page};

//! PDF manipulation module

pub mod lines;
pub mod split;

// Re-export commonly used items
pub use lines::create_lines_pdf;
pub use split::{count_pages, slide_file_name, split_pdf};

//! Slide Handouts Library
//!
//! Turns a slide deck PDF into a printable handout with room for notes.
//! This library provides functionality to:
//! - Split a PDF into one file per page
//! - Lay out pages as thumbnails, normal or large slides
//! - Assemble the layout into a LaTeX document
//! - Compile that document with pdflatex and Ghostscript
//!
//! # Example
//!
//! ```no_run
//! use slide_handouts::config::HandoutConfig;
//! use slide_handouts::pipeline::generate_handouts;
//! use std::path::Path;
//!
//! let config = HandoutConfig::load(Path::new("lecture.json")).expect("Failed to read config");
//! let output = generate_handouts(&config).expect("Failed to generate handouts");
//! println!("{}", output.display());
//! ```

pub mod error;
pub mod config;
pub mod layout;
pub mod latex;
pub mod compile;
pub mod pdf;
pub mod pipeline;

// Re-export commonly used items
pub use error::{Error, Result};
pub use layout::{layout, LayoutInstruction, SizeClass, SlideAssignment};

//! Handout configuration record
//!
//! A JSON file naming the source PDF, the output folder and which
//! (1-indexed) pages go into the handout at which size:
//!
//! ```json
//! {
//!     "pdf": "lecture.pdf",
//!     "folder": "lecture-handouts",
//!     "thumbnail": [1, 2, 3, 5],
//!     "normal": [4],
//!     "large": [6]
//! }
//! ```

use std::collections::BTreeSet;
use std::fs;
use std::path::{Path, PathBuf};

use log::warn;
use serde::Deserialize;

use crate::error::{Error, Result};
use crate::layout::{SizeClass, SlideAssignment};

/// Directory under the output folder holding the per-page PDFs
pub const PAGES_DIR: &str = "pdf_pages";

/// Handout generation settings, as read from the configuration file
#[derive(Debug, Clone, Deserialize)]
pub struct HandoutConfig {
    /// Source PDF
    pub pdf: PathBuf,
    /// Output folder; must not exist yet
    pub folder: PathBuf,
    /// Pages rendered two per row
    #[serde(default)]
    pub thumbnail: BTreeSet<u32>,
    /// Pages rendered half width next to ruled lines
    #[serde(default)]
    pub normal: BTreeSet<u32>,
    /// Pages rendered nearly full width
    #[serde(default)]
    pub large: BTreeSet<u32>,
    /// Ruled-lines PDF to copy into the output folder
    #[serde(default)]
    pub lines: Option<PathBuf>,
    #[serde(default)]
    pub tools: Toolchain,
}

/// External programs used to build the final PDF
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Toolchain {
    /// LaTeX engine
    pub latex: String,
    /// PDF post-processor (Ghostscript)
    pub postprocessor: String,
}

impl Default for Toolchain {
    fn default() -> Self {
        Self {
            latex: "pdflatex".to_string(),
            postprocessor: "gs".to_string(),
        }
    }
}

impl HandoutConfig {
    /// Read and parse a configuration file
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(Error::FileNotFound(path.to_path_buf()));
        }

        let text = fs::read_to_string(path)?;
        Self::from_json(&text).map_err(|source| Error::Config {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Parse a configuration record from JSON text
    pub fn from_json(text: &str) -> std::result::Result<Self, serde_json::Error> {
        serde_json::from_str(text)
    }

    /// Size class for a 1-indexed page, if the page is in the handout
    ///
    /// A page listed in more than one set resolves as
    /// thumbnail, then normal, then large.
    pub fn size_class(&self, page: u32) -> Option<SizeClass> {
        if self.thumbnail.contains(&page) {
            Some(SizeClass::Thumbnail)
        } else if self.normal.contains(&page) {
            Some(SizeClass::Normal)
        } else if self.large.contains(&page) {
            Some(SizeClass::Large)
        } else {
            None
        }
    }

    /// Page numbers that appear in more than one size set
    pub fn overlapping_pages(&self) -> BTreeSet<u32> {
        let thumb_normal = self.thumbnail.intersection(&self.normal);
        let thumb_large = self.thumbnail.intersection(&self.large);
        let normal_large = self.normal.intersection(&self.large);

        thumb_normal.chain(thumb_large).chain(normal_large).copied().collect()
    }

    /// Build the ordered slide assignments for a document of `page_count` pages
    ///
    /// Page files are numbered from 0 while the configuration counts from 1,
    /// so `slide_<i>.pdf` is configuration page `i + 1`. Pages not listed in
    /// any set are left out.
    pub fn assignments(&self, page_count: usize) -> Vec<SlideAssignment> {
        for page in self.overlapping_pages() {
            warn!(
                "Page {} is listed under more than one size; using {}",
                page,
                self.size_class(page).map_or("none", |c| c.as_str())
            );
        }

        (0..page_count)
            .filter_map(|index| {
                let page = u32::try_from(index + 1).ok()?;
                let size_class = self.size_class(page)?;
                Some(SlideAssignment::new(page_file_name(index), size_class))
            })
            .collect()
    }
}

/// Path of the `index`-th page PDF, relative to the output folder
pub fn page_file_name(index: usize) -> String {
    format!("{}/slide_{}.pdf", PAGES_DIR, index)
}

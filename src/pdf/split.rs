//! Page splitting using lopdf

use std::path::Path;

use lopdf::{Document, Object};
use log::debug;

use crate::error::{Error, Result};

/// Count pages by reading the Count field from the Pages dictionary
fn count_pages_from_catalog(doc: &Document) -> Result<usize> {
    let catalog = doc.catalog()?;

    let pages_id = catalog
        .get(b"Pages")
        .and_then(Object::as_reference)
        .map_err(|_| Error::General("No Pages reference in catalog".to_string()))?;

    let count = doc
        .get_dictionary(pages_id)?
        .get(b"Count")
        .and_then(Object::as_i64)
        .map_err(|_| Error::General("No Count in Pages".to_string()))?;

    usize::try_from(count).map_err(|_| Error::General(format!("Invalid page count: {}", count)))
}

/// Count the number of pages in a PDF file
pub fn count_pages(path: &Path) -> Result<usize> {
    if !path.exists() {
        return Err(Error::FileNotFound(path.to_path_buf()));
    }

    let doc = Document::load(path)?;
    count_pages_from_catalog(&doc)
}

/// File name of the page PDF for a 0-based page index
pub fn slide_file_name(index: usize) -> String {
    format!("slide_{}.pdf", index)
}

/// Split a PDF into one file per page
///
/// Page `i` (0-based, in document order) is written to
/// `<out_dir>/slide_<i>.pdf`. Returns the number of pages written.
///
/// # Example
///
/// ```no_run
/// use slide_handouts::pdf::split_pdf;
/// use std::path::Path;
///
/// let pages = split_pdf(Path::new("lecture.pdf"), Path::new("out/pdf_pages"))
///     .expect("Failed to split");
/// println!("{} pages", pages);
/// ```
pub fn split_pdf(source: &Path, out_dir: &Path) -> Result<usize> {
    if !source.exists() {
        return Err(Error::FileNotFound(source.to_path_buf()));
    }

    let doc = Document::load(source)?;
    let page_numbers: Vec<u32> = doc.get_pages().keys().copied().collect();

    for (index, &keep) in page_numbers.iter().enumerate() {
        let path = out_dir.join(slide_file_name(index));
        extract_page(&doc, &page_numbers, keep, &path)?;
        debug!("Wrote page {} to {}", keep, path.display());
    }

    Ok(page_numbers.len())
}

/// Write a copy of `doc` holding only page `keep` (1-based)
fn extract_page(doc: &Document, page_numbers: &[u32], keep: u32, path: &Path) -> Result<()> {
    let mut page_doc = doc.clone();

    let others: Vec<u32> = page_numbers.iter().copied().filter(|&n| n != keep).collect();
    page_doc.delete_pages(&others);

    // Drop fonts, images and streams only the deleted pages used
    page_doc.prune_objects();
    page_doc.compress();
    page_doc.save(path)?;

    Ok(())
}

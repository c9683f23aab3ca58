//! End-to-end handout generation
//!
//! Creates the output folder, splits the source PDF, lays out the selected
//! pages, writes `handouts.tex` and compiles it.

use std::fs;
use std::path::{Path, PathBuf};

use log::info;

use crate::compile::Compiler;
use crate::config::{HandoutConfig, PAGES_DIR};
use crate::error::{Error, Result};
use crate::latex::write_document;
use crate::layout::{layout, LINES_FILE};
use crate::pdf::{create_lines_pdf, split_pdf};

/// Everything up to the compile step, ready for the external tools
#[derive(Debug, Clone)]
pub struct PreparedHandout {
    /// Output folder
    pub folder: PathBuf,
    /// Pages in the source document
    pub page_count: usize,
    /// Pages that made it into the handout
    pub slide_count: usize,
    /// Assembled LaTeX document
    pub tex_path: PathBuf,
}

/// Run the whole pipeline and return the path of the final PDF
pub fn generate_handouts(config: &HandoutConfig) -> Result<PathBuf> {
    let prepared = prepare_handout(config)?;

    let compiler = Compiler::new(&prepared.folder, config.tools.clone());
    let output = compiler.compile(&prepared.tex_path)?;

    info!("Handouts written to {}", output.display());
    Ok(output)
}

/// Build the output folder and the LaTeX document without compiling it
pub fn prepare_handout(config: &HandoutConfig) -> Result<PreparedHandout> {
    let folder = config.folder.clone();
    create_output_folder(&folder)?;

    let pages_dir = folder.join(PAGES_DIR);
    fs::create_dir(&pages_dir)?;

    install_lines_asset(config.lines.as_deref(), &folder.join(LINES_FILE))?;

    info!("Splitting {} into {}", config.pdf.display(), pages_dir.display());
    let page_count = split_pdf(&config.pdf, &pages_dir)?;

    let slides = config.assignments(page_count);
    info!("{} of {} pages selected for the handout", slides.len(), page_count);

    let instructions = layout(&slides);
    let tex_path = write_document(&folder, &instructions)?;

    Ok(PreparedHandout {
        folder,
        page_count,
        slide_count: slides.len(),
        tex_path,
    })
}

/// Create the output folder, refusing to reuse an existing one
fn create_output_folder(folder: &Path) -> Result<()> {
    if folder.exists() {
        return Err(Error::OutputExists(folder.to_path_buf()));
    }

    fs::create_dir(folder).map_err(|e| match e.kind() {
        std::io::ErrorKind::AlreadyExists => Error::OutputExists(folder.to_path_buf()),
        _ => Error::Io(e),
    })
}

/// Put the ruled-lines image at `dest`
///
/// An explicitly configured file is copied as is; otherwise `lines.pdf` in
/// the current directory is used when present, and a plain ruled page is
/// generated when it is not.
fn install_lines_asset(configured: Option<&Path>, dest: &Path) -> Result<()> {
    match configured {
        Some(source) => {
            if !source.exists() {
                return Err(Error::FileNotFound(source.to_path_buf()));
            }
            fs::copy(source, dest)?;
        }
        None if Path::new(LINES_FILE).exists() => {
            fs::copy(LINES_FILE, dest)?;
        }
        None => {
            info!("No {} found, generating one", LINES_FILE);
            create_lines_pdf(dest)?;
        }
    }

    Ok(())
}

//! LaTeX document assembly

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use log::debug;

use crate::error::Result;
use crate::layout::{LayoutInstruction, Margins};

/// File name of the assembled document inside the output folder
pub const TEX_FILE: &str = "handouts.tex";

/// Closing marker of the document
pub const END_DOCUMENT: &str = "\\end{document}\n";

/// Document preamble, up to and including `\begin{document}`
pub fn preamble() -> String {
    format!(
        "\\documentclass[12pt]{{article}}\n\
         \\usepackage[{}]{{geometry}}\n\
         \\usepackage{{graphicx}}\n\
         \\usepackage{{palatino}}\n\
         \n\
         \\pagestyle{{plain}}\n\
         \\begin{{document}}\n\
         \\noindent\n",
        Margins::handout().geometry_options()
    )
}

/// Wrap the layout instructions in the handout preamble and closing marker
pub fn assemble(instructions: &[LayoutInstruction]) -> String {
    let mut text = preamble();
    for instruction in instructions {
        text.push_str(&instruction.to_string());
    }
    text.push_str(END_DOCUMENT);
    text
}

/// Write the assembled document to `<folder>/handouts.tex`
///
/// The file is flushed and closed before this returns, so the LaTeX engine
/// can read it straight away.
pub fn write_document(folder: &Path, instructions: &[LayoutInstruction]) -> Result<PathBuf> {
    let path = folder.join(TEX_FILE);
    let text = assemble(instructions);

    let mut writer = BufWriter::new(File::create(&path)?);
    writer.write_all(text.as_bytes())?;
    writer.flush()?;
    drop(writer);

    debug!("Wrote {} ({} bytes)", path.display(), text.len());
    Ok(path)
}

//! Typesetting and post-processing through external tools
//!
//! `pdflatex` turns `handouts.tex` into `handouts.pdf`, which is moved to
//! `handouts.orig.pdf` and rewritten by Ghostscript as a print-quality
//! PDF 1.4 at `handouts.pdf`. Every tool runs with the output folder as its
//! working directory; the process's own working directory is never changed.

use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};

use log::{debug, info};

use crate::config::Toolchain;
use crate::error::{Error, Result};

/// Final handout file name
pub const OUTPUT_FILE: &str = "handouts.pdf";
/// Typesetter output, kept next to the final file
pub const ORIGINAL_FILE: &str = "handouts.orig.pdf";

/// Lines of tool output kept in a failure message
const OUTPUT_TAIL_LINES: usize = 20;

/// Runs the external toolchain inside one output folder
#[derive(Debug, Clone)]
pub struct Compiler {
    folder: PathBuf,
    tools: Toolchain,
}

impl Compiler {
    pub fn new(folder: impl Into<PathBuf>, tools: Toolchain) -> Self {
        Self {
            folder: folder.into(),
            tools,
        }
    }

    /// Typeset `tex_path` and post-process the result
    ///
    /// Returns the path of the final PDF.
    pub fn compile(&self, tex_path: &Path) -> Result<PathBuf> {
        let tex_name = tex_path
            .file_name()
            .and_then(|name| name.to_str())
            .ok_or_else(|| Error::General(format!("Not a usable file name: {}", tex_path.display())))?;

        info!("Typesetting {} with {}", tex_path.display(), self.tools.latex);
        self.run(
            &self.tools.latex,
            &["-interaction=nonstopmode", "-halt-on-error", tex_name],
        )?;

        let typeset = self.folder.join(Path::new(tex_name).with_extension("pdf"));
        if !typeset.exists() {
            return Err(Error::FileNotFound(typeset));
        }
        let original = self.folder.join(ORIGINAL_FILE);
        fs::rename(&typeset, &original)?;

        info!("Post-processing with {}", self.tools.postprocessor);
        let output_arg = format!("-sOutputFile={}", OUTPUT_FILE);
        self.run(
            &self.tools.postprocessor,
            &[
                "-sDEVICE=pdfwrite",
                "-dCompatibilityLevel=1.4",
                "-dPDFSETTINGS=/printer",
                "-dNOPAUSE",
                "-dQUIET",
                "-dBATCH",
                &output_arg,
                ORIGINAL_FILE,
            ],
        )?;

        let output = self.folder.join(OUTPUT_FILE);
        if !output.exists() {
            return Err(Error::FileNotFound(output));
        }

        Ok(output)
    }

    /// Run one tool to completion inside the output folder
    fn run(&self, tool: &str, args: &[&str]) -> Result<Output> {
        debug!("Running {} {:?} in {}", tool, args, self.folder.display());

        let output = Command::new(tool)
            .args(args)
            .current_dir(&self.folder)
            .output()
            .map_err(|source| Error::ToolNotFound {
                tool: tool.to_string(),
                source,
            })?;

        if !output.status.success() {
            return Err(Error::ToolFailed {
                tool: tool.to_string(),
                status: output.status,
                output: output_tail(&output),
            });
        }

        Ok(output)
    }
}

/// Last lines of a tool's stdout and stderr
fn output_tail(output: &Output) -> String {
    let stdout = String::from_utf8_lossy(&output.stdout);
    let stderr = String::from_utf8_lossy(&output.stderr);
    let lines: Vec<&str> = stdout
        .lines()
        .chain(stderr.lines())
        .filter(|line| !line.trim().is_empty())
        .collect();

    let start = lines.len().saturating_sub(OUTPUT_TAIL_LINES);
    lines[start..].join("\n")
}

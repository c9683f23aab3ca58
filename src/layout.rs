//! Handout layout sequencing
//!
//! Turns an ordered list of slide assignments into the LaTeX fragments that
//! arrange them on the page. Consecutive thumbnails are paired side by side;
//! an unpaired thumbnail at the end of a run is balanced with ruled lines.

use std::fmt;
use std::str::FromStr;

use crate::error::{Error, Result};

/// Simple length type, rendered in the unit it was built with
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Length {
    value: f64,
    unit: Unit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Unit {
    Cm,
    Inch,
}

impl Length {
    /// Create a length from centimeters
    pub const fn from_cm(cm: f64) -> Self {
        Length { value: cm, unit: Unit::Cm }
    }

    /// Create a length from inches
    pub const fn from_inches(inches: f64) -> Self {
        Length { value: inches, unit: Unit::Inch }
    }

    /// Get the value in millimeters
    pub fn mm(&self) -> f64 {
        match self.unit {
            Unit::Cm => self.value * 10.0,
            Unit::Inch => self.value * 25.4,
        }
    }

    /// Get the value in points (1/72 inch)
    pub fn pt(&self) -> f64 {
        self.mm() * 72.0 / 25.4
    }
}

/// LaTeX dimension, e.g. `3.5in` or `1cm`
impl fmt::Display for Length {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let unit = match self.unit {
            Unit::Cm => "cm",
            Unit::Inch => "in",
        };
        write!(f, "{}{}", self.value, unit)
    }
}

/// Margins for page content
#[derive(Debug, Clone, Copy)]
pub struct Margins {
    pub top: Length,
    pub bottom: Length,
    pub left: Length,
    pub right: Length,
}

impl Margins {
    /// Handout margins: 1cm all round, 2cm at the bottom for the page number
    pub const fn handout() -> Self {
        Self {
            top: Length::from_cm(1.0),
            bottom: Length::from_cm(2.0),
            left: Length::from_cm(1.0),
            right: Length::from_cm(1.0),
        }
    }

    /// Options string for the `geometry` package
    pub fn geometry_options(&self) -> String {
        format!(
            "left={}, right={}, top={}, bottom={}",
            self.left, self.right, self.top, self.bottom
        )
    }
}

/// Width of a thumbnail, a normal page and the ruled-lines image
pub const HALF_WIDTH: Length = Length::from_inches(3.5);
/// Width of a large page
pub const FULL_WIDTH: Length = Length::from_inches(6.5);
/// Gap after a row of thumbnails or a normal page
pub const ROW_GAP: Length = Length::from_inches(0.5);
/// Gap after a large page
pub const LARGE_GAP: Length = Length::from_inches(1.0);

/// File name of the ruled-lines image inside the output folder
pub const LINES_FILE: &str = "lines.pdf";

/// How large a source page is rendered in the handout
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SizeClass {
    Thumbnail,
    Normal,
    Large,
}

impl SizeClass {
    pub fn as_str(&self) -> &'static str {
        match self {
            SizeClass::Thumbnail => "thumbnail",
            SizeClass::Normal => "normal",
            SizeClass::Large => "large",
        }
    }
}

impl FromStr for SizeClass {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "thumbnail" => Ok(SizeClass::Thumbnail),
            "normal" => Ok(SizeClass::Normal),
            "large" => Ok(SizeClass::Large),
            other => Err(Error::UnknownSizeClass(other.to_string())),
        }
    }
}

impl fmt::Display for SizeClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One source page and the size it should be rendered at
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SlideAssignment {
    /// Page PDF, relative to the output folder
    pub page_file: String,
    pub size_class: SizeClass,
}

impl SlideAssignment {
    pub fn new(page_file: impl Into<String>, size_class: SizeClass) -> Self {
        Self {
            page_file: page_file.into(),
            size_class,
        }
    }
}

/// A markup fragment appended to the handout body
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LayoutInstruction {
    /// Boxed half-width page
    Thumbnail(String),
    /// `\hfill` between two thumbnails
    HorizontalFill,
    /// Row gap
    VerticalSpace,
    /// Ruled lines standing in for the missing partner of an unpaired thumbnail
    Filler,
    /// Boxed half-width page with ruled lines beside it
    Normal(String),
    /// Centered, nearly full-width boxed page
    Large(String),
}

impl fmt::Display for LayoutInstruction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LayoutInstruction::Thumbnail(page) => {
                writeln!(f, "\\fbox{{\\includegraphics[width={HALF_WIDTH}]{{{page}}}}}")
            }
            LayoutInstruction::HorizontalFill => writeln!(f, "\\hfill"),
            LayoutInstruction::VerticalSpace => writeln!(f, "\\vspace{{{ROW_GAP}}}"),
            LayoutInstruction::Filler => {
                writeln!(f, "\\includegraphics[width={HALF_WIDTH}]{{{LINES_FILE}}}")
            }
            LayoutInstruction::Normal(page) => {
                writeln!(f, "\\fbox{{\\includegraphics[width={HALF_WIDTH}]{{{page}}}}}")?;
                writeln!(f, "\\hfill")?;
                writeln!(f, "\\includegraphics[width={HALF_WIDTH}]{{{LINES_FILE}}}")?;
                writeln!(f, "\\vspace{{{ROW_GAP}}} \\\\")
            }
            LayoutInstruction::Large(page) => {
                writeln!(f, "{{\\centering")?;
                writeln!(f, "\\hspace*{{\\fill}}")?;
                writeln!(f, "\\fbox{{\\includegraphics[width={FULL_WIDTH}]{{{page}}}}}")?;
                writeln!(f, "\\hspace*{{\\fill}}")?;
                writeln!(f, "\\vspace{{{LARGE_GAP}}} \\\\")?;
                writeln!(f, "}}")
            }
        }
    }
}

/// Sequence the handout layout for the given assignments
///
/// Each maximal run of consecutive thumbnails is laid out two per row:
/// even positions in the run are followed by `\hfill`, odd positions by a
/// row gap. An odd-length run gets one filler for its last thumbnail, and
/// every run is closed by one more row gap. Normal and large pages break
/// a run.
pub fn layout(assignments: &[SlideAssignment]) -> Vec<LayoutInstruction> {
    let mut instructions = Vec::new();
    let mut i = 0;

    while i < assignments.len() {
        match assignments[i].size_class {
            SizeClass::Thumbnail => {
                let mut run = 0;
                while i < assignments.len() && assignments[i].size_class == SizeClass::Thumbnail {
                    instructions.push(LayoutInstruction::Thumbnail(assignments[i].page_file.clone()));
                    if run % 2 == 0 {
                        instructions.push(LayoutInstruction::HorizontalFill);
                    } else {
                        instructions.push(LayoutInstruction::VerticalSpace);
                    }
                    run += 1;
                    i += 1;
                }

                if run % 2 == 1 {
                    instructions.push(LayoutInstruction::Filler);
                }
                instructions.push(LayoutInstruction::VerticalSpace);
            }
            SizeClass::Normal => {
                instructions.push(LayoutInstruction::Normal(assignments[i].page_file.clone()));
                i += 1;
            }
            SizeClass::Large => {
                instructions.push(LayoutInstruction::Large(assignments[i].page_file.clone()));
                i += 1;
            }
        }
    }

    instructions
}

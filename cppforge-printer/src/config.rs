//! Printer configuration and the settings file it is loaded from.

use std::{path::Path, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::{Error, Result};

/// Indentation style for one nesting level.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Indent {
    /// The given number of spaces per level.
    Spaces(u8),
    /// The given number of tab characters per level.
    Tabs(u8),
}

impl Indent {
    /// 4-space indentation.
    pub const FOUR_SPACES: Self = Self::Spaces(4);

    /// One tab per level.
    pub const TAB: Self = Self::Tabs(1);

    /// The character repeated for each level.
    pub fn unit(&self) -> char {
        match self {
            Self::Spaces(_) => ' ',
            Self::Tabs(_) => '\t',
        }
    }

    /// How many times `unit` repeats per level.
    pub fn width(&self) -> usize {
        match self {
            Self::Spaces(n) | Self::Tabs(n) => *n as usize,
        }
    }

    /// The string for `depth` levels.
    pub fn at(&self, depth: usize) -> String {
        self.unit().to_string().repeat(self.width() * depth)
    }
}

impl Default for Indent {
    fn default() -> Self {
        Self::FOUR_SPACES
    }
}

/// Newline convention of the generated text.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LineEnding {
    #[default]
    Lf,
    CrLf,
    Cr,
}

impl LineEnding {
    pub fn as_str(&self) -> &'static str {
        match self {
            LineEnding::Lf => "\n",
            LineEnding::CrLf => "\r\n",
            LineEnding::Cr => "\r",
        }
    }
}

impl FromStr for LineEnding {
    type Err = Box<Error>;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "\n" => Ok(LineEnding::Lf),
            "\r\n" => Ok(LineEnding::CrLf),
            "\r" => Ok(LineEnding::Cr),
            other => Err(Error::invalid_configuration(format!(
                "newline must be \"\\n\", \"\\r\\n\" or \"\\r\", got {other:?}"
            ))),
        }
    }
}

/// Formatting rules shared by every renderer in one print call.
///
/// The value is never mutated during a render pass. A renderer that nests
/// content hands its children [`PrinterConfiguration::nested`], a copy one
/// indentation level deeper.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PrinterConfiguration {
    indent: Indent,
    line_ending: LineEnding,
    depth: usize,
}

impl PrinterConfiguration {
    pub fn new(indent: Indent, line_ending: LineEnding) -> Self {
        Self {
            indent,
            line_ending,
            depth: 0,
        }
    }

    pub fn indent(&self) -> Indent {
        self.indent
    }

    pub fn line_ending(&self) -> LineEnding {
        self.line_ending
    }

    pub fn newline(&self) -> &'static str {
        self.line_ending.as_str()
    }

    /// Current nesting depth, 0 at top level.
    pub fn depth(&self) -> usize {
        self.depth
    }

    /// A copy one level deeper.
    pub fn nested(&self) -> Self {
        Self {
            depth: self.depth + 1,
            ..*self
        }
    }

    /// A copy one level shallower, stopping at top level.
    pub fn outer(&self) -> Self {
        Self {
            depth: self.depth.saturating_sub(1),
            ..*self
        }
    }

    /// Indentation prefix for the current depth.
    pub fn indentation(&self) -> String {
        self.indent.at(self.depth)
    }

    /// Format `text` as one complete line. Blank lines carry no indentation.
    pub fn format_line(&self, text: &str) -> String {
        if text.is_empty() {
            return self.newline().to_string();
        }
        format!("{}{}{}", self.indentation(), text, self.newline())
    }
}

/// The `[printer]` table of a settings file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PrinterSettings {
    /// `" "` or `"\t"`.
    pub indent_unit: String,
    pub indent_width: u8,
    pub newline: String,
    /// Allow renderers registered for a supertype to handle its subtypes.
    pub fallback: bool,
}

impl Default for PrinterSettings {
    fn default() -> Self {
        Self {
            indent_unit: " ".to_string(),
            indent_width: 4,
            newline: "\n".to_string(),
            fallback: false,
        }
    }
}

impl PrinterSettings {
    /// Validate the raw values and build a configuration at depth 0.
    pub fn configuration(&self) -> Result<PrinterConfiguration> {
        PrinterConfiguration::try_from(self)
    }
}

impl TryFrom<&PrinterSettings> for PrinterConfiguration {
    type Error = Box<Error>;

    fn try_from(settings: &PrinterSettings) -> Result<Self> {
        if settings.indent_width == 0 {
            return Err(Error::invalid_configuration(
                "indent_width must be greater than 0",
            ));
        }
        let indent = match settings.indent_unit.as_str() {
            " " => Indent::Spaces(settings.indent_width),
            "\t" => Indent::Tabs(settings.indent_width),
            other => {
                return Err(Error::invalid_configuration(format!(
                    "indent_unit must be a single space or tab, got {other:?}"
                )));
            }
        };
        let line_ending = settings.newline.parse()?;
        Ok(PrinterConfiguration::new(indent, line_ending))
    }
}

/// Root of a `cppforge.toml` settings file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    pub printer: PrinterSettings,
}

impl FromStr for Settings {
    type Err = Box<Error>;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_str_with_filename(s, "cppforge.toml")
    }
}

impl Settings {
    /// Parse a settings file from the given path
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
        Self::from_str_with_filename(&content, &path.display().to_string())
    }

    /// Parse settings from a string with a custom filename for error reporting
    pub fn from_str_with_filename(content: &str, filename: &str) -> Result<Self> {
        let settings: Self =
            toml::from_str(content).map_err(|e| Error::parse(e, content, filename))?;
        settings.printer.configuration()?;
        Ok(settings)
    }
}

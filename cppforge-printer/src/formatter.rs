//! Stateful line accumulator used by renderers.

use crate::{Indent, PrinterConfiguration};

/// Builds indented, newline-terminated text for one render call.
///
/// Text is accumulated in two places: the finished `text`, and a staged
/// `line` that can be assembled piecewise before it is flushed with
/// [`Formatter::next_line`] (formatted) or [`Formatter::accumulate_line`]
/// (verbatim).
///
/// # Example
///
/// ```
/// use cppforge_printer::{Formatter, PrinterConfiguration};
///
/// let mut fmt = Formatter::new(PrinterConfiguration::default());
/// fmt.print_line("struct A")
///     .print_line("{")
///     .push_indent()
///     .print_line("int x;")
///     .push_dedent()
///     .print_line("};");
///
/// assert_eq!(fmt.text(), "struct A\n{\n    int x;\n};\n");
/// ```
#[derive(Debug, Clone)]
pub struct Formatter {
    configuration: PrinterConfiguration,
    text: String,
    line: String,
}

impl Formatter {
    pub fn new(configuration: PrinterConfiguration) -> Self {
        Self {
            configuration,
            text: String::new(),
            line: String::new(),
        }
    }

    /// Configuration at the current depth; pass it to child renders that
    /// should line up with this formatter's next line.
    pub fn configuration(&self) -> PrinterConfiguration {
        self.configuration
    }

    pub fn indent(&self) -> Indent {
        self.configuration.indent()
    }

    /// Format `text` as a complete line and append it. The staged line is
    /// left untouched.
    pub fn print_line(&mut self, text: &str) -> &mut Self {
        self.text.push_str(&self.configuration.format_line(text));
        self
    }

    /// Append an empty line.
    pub fn print_blank(&mut self) -> &mut Self {
        self.text.push_str(self.configuration.newline());
        self
    }

    /// Append already formatted text, such as a child render.
    pub fn push_raw(&mut self, text: &str) -> &mut Self {
        self.text.push_str(text);
        self
    }

    pub fn line(&self) -> &str {
        &self.line
    }

    pub fn set_line(&mut self, line: impl Into<String>) -> &mut Self {
        self.line = line.into();
        self
    }

    /// Extend the staged line.
    pub fn append(&mut self, text: &str) -> &mut Self {
        self.line.push_str(text);
        self
    }

    /// Format the staged line, append it, and clear the stage.
    pub fn next_line(&mut self) -> &mut Self {
        let line = std::mem::take(&mut self.line);
        self.print_line(&line)
    }

    /// Append the staged line verbatim and clear the stage.
    pub fn accumulate_line(&mut self) -> &mut Self {
        let line = std::mem::take(&mut self.line);
        self.text.push_str(&line);
        self
    }

    pub fn push_indent(&mut self) -> &mut Self {
        self.configuration = self.configuration.nested();
        self
    }

    pub fn push_dedent(&mut self) -> &mut Self {
        self.configuration = self.configuration.outer();
        self
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn into_text(self) -> String {
        self.text
    }

    /// Reset both the accumulated text and the staged line.
    pub fn clear(&mut self) {
        self.text.clear();
        self.line.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::LineEnding;

    #[test]
    fn test_staged_line_is_separate_from_text() {
        let mut fmt = Formatter::new(PrinterConfiguration::default());
        fmt.append("class Foo");
        fmt.print_line("// comment");
        fmt.append(" : public Bar");
        assert_eq!(fmt.text(), "// comment\n");
        assert_eq!(fmt.line(), "class Foo : public Bar");

        fmt.next_line();
        assert_eq!(fmt.text(), "// comment\nclass Foo : public Bar\n");
        assert_eq!(fmt.line(), "");
    }

    #[test]
    fn test_accumulate_line_skips_formatting() {
        let mut fmt = Formatter::new(PrinterConfiguration::default().nested());
        fmt.set_line("{");
        fmt.accumulate_line();
        fmt.next_line();
        assert_eq!(fmt.text(), "{\n");
    }

    #[test]
    fn test_indent_levels() {
        let config = PrinterConfiguration::new(Indent::Spaces(2), LineEnding::Lf);
        let mut fmt = Formatter::new(config);
        fmt.push_indent().push_indent().print_line("x");
        fmt.push_dedent().print_line("y");
        fmt.push_dedent().push_dedent().print_line("z");
        assert_eq!(fmt.text(), "    x\n  y\nz\n");
        assert_eq!(fmt.indent(), Indent::Spaces(2));
    }

    #[test]
    fn test_clear() {
        let mut fmt = Formatter::new(PrinterConfiguration::default());
        fmt.print_line("a").append("b");
        fmt.clear();
        assert_eq!(fmt.text(), "");
        assert_eq!(fmt.line(), "");
    }
}

//! Whole files and include directives.

use cppforge_ast::NodeRef;

use crate::{Dispatch, Error, Formatter, PrinterConfiguration, Render, Result};

/// `#include "path"` or `#include <path>` as a full line.
pub struct IncludeRenderer;

impl Render for IncludeRenderer {
    fn render(
        &self,
        _printer: &dyn Dispatch,
        node: NodeRef<'_>,
        configuration: &PrinterConfiguration,
        _context: Option<NodeRef<'_>>,
    ) -> Result<String> {
        let include = node
            .as_include()
            .ok_or_else(|| Error::node_mismatch(self.name(), node.kind()))?;
        let line = if include.is_standard {
            format!("#include <{}>", include.value)
        } else {
            format!("#include \"{}\"", include.value)
        };
        Ok(configuration.format_line(&line))
    }
}

/// Includes, a blank separator line when content follows, the content, and
/// a closing blank line; optionally wrapped in an include guard.
pub struct SourceFileRenderer;

impl Render for SourceFileRenderer {
    fn render(
        &self,
        printer: &dyn Dispatch,
        node: NodeRef<'_>,
        configuration: &PrinterConfiguration,
        _context: Option<NodeRef<'_>>,
    ) -> Result<String> {
        let file = node
            .as_source_file()
            .ok_or_else(|| Error::node_mismatch(self.name(), node.kind()))?;
        let mut fmt = Formatter::new(*configuration);
        if let Some(guard) = &file.header_guard {
            fmt.print_line(&format!("#ifndef {guard}"))
                .print_line(&format!("#define {guard}"))
                .print_blank();
        }

        for include in &file.includes {
            fmt.append(&printer.render(include.into(), configuration, Some(node))?);
        }
        if !file.includes.is_empty() && !file.content.is_empty() {
            fmt.next_line();
        }
        for item in &file.content {
            fmt.append(&printer.render(item.as_node_ref(), configuration, Some(node))?);
        }
        fmt.next_line();

        if let Some(guard) = &file.header_guard {
            fmt.print_line(&format!("#endif //{guard}"));
        }
        Ok(fmt.into_text())
    }
}

//! Variables, data members and function arguments.

use cppforge_ast::NodeRef;

use super::print_preamble;
use crate::{Dispatch, Error, Formatter, PrinterConfiguration, Render, Result};

/// `T name = value;` as a full line, preceded by comment and attributes.
///
/// Reads any variable-like node, so it also serves fields.
pub struct VariableRenderer;

impl Render for VariableRenderer {
    fn render(
        &self,
        printer: &dyn Dispatch,
        node: NodeRef<'_>,
        configuration: &PrinterConfiguration,
        _context: Option<NodeRef<'_>>,
    ) -> Result<String> {
        let variable = node
            .as_variable()
            .ok_or_else(|| Error::node_mismatch(self.name(), node.kind()))?;
        let mut fmt = Formatter::new(*configuration);
        print_preamble(
            printer,
            &mut fmt,
            variable.comment.as_ref(),
            &variable.attributes,
            node,
        )?;
        let mut line = printer.render((&variable.ty).into(), configuration, Some(node))?;
        if let Some(value) = &variable.default_value {
            line.push_str(" = ");
            line.push_str(value);
        }
        line.push(';');
        fmt.print_line(&line);
        Ok(fmt.into_text())
    }

    fn is_fallback_handler(&self) -> bool {
        true
    }
}

/// `T name = default`, inline inside a parameter list.
pub struct ArgumentRenderer;

impl Render for ArgumentRenderer {
    fn render(
        &self,
        printer: &dyn Dispatch,
        node: NodeRef<'_>,
        configuration: &PrinterConfiguration,
        _context: Option<NodeRef<'_>>,
    ) -> Result<String> {
        let argument = node
            .as_variable()
            .ok_or_else(|| Error::node_mismatch(self.name(), node.kind()))?;
        let mut text = printer.render((&argument.ty).into(), configuration, Some(node))?;
        if let Some(value) = &argument.default_value {
            text.push_str(" = ");
            text.push_str(value);
        }
        Ok(text)
    }
}

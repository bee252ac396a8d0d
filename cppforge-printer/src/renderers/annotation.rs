//! Comments and `[[...]]` attributes.

use cppforge_ast::{CommentMarker, NodeRef};

use crate::{Dispatch, Error, Formatter, PrinterConfiguration, Render, Result};

/// A single attribute: `gnu::always_inline`, `deprecated("use bar")`.
pub struct AttributeRenderer;

impl Render for AttributeRenderer {
    fn render(
        &self,
        _printer: &dyn Dispatch,
        node: NodeRef<'_>,
        _configuration: &PrinterConfiguration,
        context: Option<NodeRef<'_>>,
    ) -> Result<String> {
        let attribute = node
            .as_attribute()
            .ok_or_else(|| Error::node_mismatch(self.name(), node.kind()))?;

        // `[[using gnu : ...]]` already supplies the namespace.
        let using = context
            .and_then(|c| c.as_attribute_declaration())
            .and_then(|d| d.using_namespace.as_deref());
        let mut text = String::new();
        if let Some(namespace) = attribute
            .namespace
            .as_deref()
            .filter(|ns| using != Some(*ns))
        {
            text.push_str(namespace);
            text.push_str("::");
        }
        text.push_str(&attribute.name);
        if let Some(arguments) = &attribute.arguments {
            text.push('(');
            text.push_str(&arguments.join(","));
            text.push(')');
        }
        Ok(text)
    }
}

/// `[[nodiscard, gnu::cold]]` or `[[using gnu : cold, hot]]`.
pub struct AttributeDeclarationRenderer;

impl Render for AttributeDeclarationRenderer {
    fn render(
        &self,
        printer: &dyn Dispatch,
        node: NodeRef<'_>,
        configuration: &PrinterConfiguration,
        _context: Option<NodeRef<'_>>,
    ) -> Result<String> {
        let declaration = node
            .as_attribute_declaration()
            .ok_or_else(|| Error::node_mismatch(self.name(), node.kind()))?;
        let attributes = declaration
            .attributes
            .iter()
            .map(|a| printer.render(a.into(), configuration, Some(node)))
            .collect::<Result<Vec<_>>>()?;
        let using = declaration
            .using_namespace
            .as_ref()
            .map(|ns| format!("using {ns} : "))
            .unwrap_or_default();
        Ok(format!("[[{using}{}]]", attributes.join(", ")))
    }
}

/// Comment block as complete, indented lines.
pub struct CommentRenderer;

impl Render for CommentRenderer {
    fn render(
        &self,
        _printer: &dyn Dispatch,
        node: NodeRef<'_>,
        configuration: &PrinterConfiguration,
        _context: Option<NodeRef<'_>>,
    ) -> Result<String> {
        let comment = node
            .as_comment()
            .ok_or_else(|| Error::node_mismatch(self.name(), node.kind()))?;
        let mut fmt = Formatter::new(*configuration);
        match (comment.marker, comment.lines.as_slice()) {
            (_, []) => {}
            (CommentMarker::OneLine, lines) => {
                for line in lines {
                    fmt.print_line(&format!("//{line}"));
                }
            }
            (CommentMarker::MultiLine, [line]) => {
                fmt.print_line(&format!("/*{line}*/"));
            }
            (CommentMarker::MultiLine, lines) => {
                fmt.print_line("/*");
                for line in lines {
                    fmt.print_line(line);
                }
                fmt.print_line("*/");
            }
        }
        Ok(fmt.into_text())
    }
}

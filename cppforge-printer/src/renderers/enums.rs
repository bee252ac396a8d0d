//! Enumerations.

use cppforge_ast::NodeRef;

use super::print_preamble;
use crate::{Dispatch, Error, Formatter, PrinterConfiguration, Render, Result};

/// Enum definition or forward declaration.
///
/// Each enumerator prints bare or with `= value` according to its own
/// `is_default` flag.
pub struct EnumRenderer;

impl Render for EnumRenderer {
    fn render(
        &self,
        printer: &dyn Dispatch,
        node: NodeRef<'_>,
        configuration: &PrinterConfiguration,
        _context: Option<NodeRef<'_>>,
    ) -> Result<String> {
        let enumeration = node
            .as_enum()
            .ok_or_else(|| Error::node_mismatch(self.name(), node.kind()))?;
        let mut fmt = Formatter::new(*configuration);
        print_preamble(
            printer,
            &mut fmt,
            enumeration.comment.as_ref(),
            &enumeration.attributes,
            node,
        )?;

        fmt.append("enum ");
        if let Some(scope) = enumeration.scope {
            fmt.append(scope.keyword()).append(" ");
        }
        fmt.append(&enumeration.name);
        if let Some(underlying) = &enumeration.underlying {
            let ty = printer.render(underlying.into(), configuration, Some(node))?;
            fmt.append(" : ").append(&ty);
        }
        if enumeration.is_declaration {
            fmt.append(";").next_line();
            return Ok(fmt.into_text());
        }
        fmt.next_line();
        fmt.print_line("{");
        fmt.push_indent();
        let count = enumeration.values.len();
        for (i, value) in enumeration.values.iter().enumerate() {
            if let Some(comment) = &value.comment {
                let text = printer.render(comment.into(), &fmt.configuration(), Some(node))?;
                fmt.push_raw(&text);
            }
            let separator = if i + 1 == count { "" } else { "," };
            if value.is_default {
                fmt.print_line(&format!("{}{separator}", value.name));
            } else {
                fmt.print_line(&format!("{} = {}{separator}", value.name, value.value));
            }
        }
        fmt.push_dedent();
        fmt.print_line("};");
        Ok(fmt.into_text())
    }
}

use cppforge_ast::NodeRef;

use crate::{Dispatch, Error, PrinterConfiguration, Render, Result};

/// Prints only the name of a named type, for use where it is referred to
/// rather than defined: `Color` in `const Color c`, `Base` in `: public Base`.
pub struct UsageRenderer;

impl Render for UsageRenderer {
    fn render(
        &self,
        _printer: &dyn Dispatch,
        node: NodeRef<'_>,
        _configuration: &PrinterConfiguration,
        _context: Option<NodeRef<'_>>,
    ) -> Result<String> {
        node.name()
            .map(str::to_string)
            .ok_or_else(|| Error::node_mismatch(self.name(), node.kind()))
    }
}

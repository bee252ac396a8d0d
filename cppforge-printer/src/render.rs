//! Renderer contract and the dispatch capability renderers recurse through.

use cppforge_ast::NodeRef;

use crate::{PrinterConfiguration, Result};

/// Renders any node by looking up the renderer registered for it.
///
/// Renderers receive this capability on every call and use it for children,
/// so no renderer depends on another renderer's concrete type.
pub trait Dispatch {
    /// Render `node` as seen from `context`, its usage site.
    fn render(
        &self,
        node: NodeRef<'_>,
        configuration: &PrinterConfiguration,
        context: Option<NodeRef<'_>>,
    ) -> Result<String>;
}

/// Turns one node kind into text.
///
/// Implement this trait to add or replace the output for a node kind; then
/// register the renderer with [`CodePrinter::register`](crate::CodePrinter::register).
pub trait Render {
    /// Render `node` at the depth carried by `configuration`.
    ///
    /// Declaration-like output ends with a newline; inline fragments such as
    /// type expressions do not.
    fn render(
        &self,
        printer: &dyn Dispatch,
        node: NodeRef<'_>,
        configuration: &PrinterConfiguration,
        context: Option<NodeRef<'_>>,
    ) -> Result<String>;

    /// Whether this renderer may stand in for subtypes of its registered kind.
    fn is_fallback_handler(&self) -> bool {
        false
    }

    /// Short type name, used in logs and diagnostics.
    fn name(&self) -> &'static str {
        let full = std::any::type_name::<Self>();
        full.rsplit("::").next().unwrap_or(full)
    }
}

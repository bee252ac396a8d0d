//! Concept definitions and concept requirements.

use cppforge_ast::{Concept, NodeRef};

use super::{print_preamble, template_parameters};
use crate::{Dispatch, Error, Formatter, PrinterConfiguration, Render, Result};

/// `template<typename T>` followed by `concept Name = body;`.
///
/// A concept flagged as a requirement prints its usage form instead, which is
/// what a `requires` clause needs.
pub struct ConceptRenderer;

impl Render for ConceptRenderer {
    fn render(
        &self,
        printer: &dyn Dispatch,
        node: NodeRef<'_>,
        configuration: &PrinterConfiguration,
        _context: Option<NodeRef<'_>>,
    ) -> Result<String> {
        let concept = node
            .as_concept()
            .ok_or_else(|| Error::node_mismatch(self.name(), node.kind()))?;
        if concept.is_requirement {
            return requirement(printer, concept, node, configuration);
        }
        let mut fmt = Formatter::new(*configuration);
        print_preamble(printer, &mut fmt, concept.comment.as_ref(), &[], node)?;
        fmt.print_line(&template_parameters(
            printer,
            &concept.template,
            configuration,
            node,
        )?);
        fmt.print_line(&format!("concept {} = {};", concept.name, concept.body));
        Ok(fmt.into_text())
    }
}

/// `Name<A, B>` as the specifier of a constrained template parameter.
pub struct ConceptRequirementRenderer;

impl Render for ConceptRequirementRenderer {
    fn render(
        &self,
        printer: &dyn Dispatch,
        node: NodeRef<'_>,
        configuration: &PrinterConfiguration,
        _context: Option<NodeRef<'_>>,
    ) -> Result<String> {
        let concept = node
            .as_concept()
            .ok_or_else(|| Error::node_mismatch(self.name(), node.kind()))?;
        requirement(printer, concept, node, configuration)
    }
}

fn requirement(
    printer: &dyn Dispatch,
    concept: &Concept,
    node: NodeRef<'_>,
    configuration: &PrinterConfiguration,
) -> Result<String> {
    let mut text = String::new();
    for namespace in &concept.namespaces {
        text.push_str(namespace);
        text.push_str("::");
    }
    text.push_str(&concept.name);
    if !concept.arguments.is_empty() {
        let arguments = concept
            .arguments
            .iter()
            .map(|arg| printer.render(arg.into(), configuration, Some(node)))
            .collect::<Result<Vec<_>>>()?;
        text.push('<');
        text.push_str(&arguments.join(", "));
        text.push('>');
    }
    Ok(text)
}

//! Classes, structs, unions and their access labels.

use cppforge_ast::{AccessSpecifier, Node, NodeRef, Section};

use super::{print_nested, print_preamble, specialisation_suffix, template_header};
use crate::{Dispatch, Error, Formatter, PrinterConfiguration, Render, Result};

/// Access a member declares for itself, if any.
fn member_access(member: &Node) -> Option<AccessSpecifier> {
    match member {
        Node::Function(f) | Node::Method(f) | Node::Destructor(f) => f.access,
        Node::Constructor(c) => c.function.access,
        Node::Field(f) => f.access,
        _ => None,
    }
}

/// Class or struct definition, or a forward declaration.
pub struct ClassRenderer;

impl Render for ClassRenderer {
    fn render(
        &self,
        printer: &dyn Dispatch,
        node: NodeRef<'_>,
        configuration: &PrinterConfiguration,
        _context: Option<NodeRef<'_>>,
    ) -> Result<String> {
        let class = node
            .as_class()
            .ok_or_else(|| Error::node_mismatch(self.name(), node.kind()))?;
        let mut fmt = Formatter::new(*configuration);
        print_preamble(
            printer,
            &mut fmt,
            class.comment.as_ref(),
            &class.attributes,
            node,
        )?;
        if let Some(template) = &class.template {
            fmt.print_line(&template_header(printer, template, configuration, node)?);
        }

        fmt.append(class.kind.keyword())
            .append(" ")
            .append(&class.name)
            .append(&specialisation_suffix(
                printer,
                class.template.as_ref(),
                configuration,
                node,
            )?);
        if class.is_declaration {
            fmt.append(";").next_line();
            return Ok(fmt.into_text());
        }
        if !class.bases.is_empty() {
            let bases = class
                .bases
                .iter()
                .map(|base| printer.render(base.into(), configuration, Some(node)))
                .collect::<Result<Vec<_>>>()?;
            fmt.append(" : ").append(&bases.join(", "));
        }
        fmt.next_line();
        fmt.print_line("{");

        let inner = configuration.nested();
        let mut access = class.kind.default_access();
        for member in &class.content {
            match member {
                Node::Section(section) => access = section.access,
                _ => {
                    if let Some(own) = member_access(member).filter(|own| *own != access) {
                        access = own;
                        let label = Section::new(own);
                        fmt.push_raw(&printer.render((&label).into(), &inner, Some(node))?);
                    }
                }
            }
            fmt.push_raw(&printer.render(member.as_node_ref(), &inner, Some(node))?);
        }

        fmt.print_line("};");
        Ok(fmt.into_text())
    }
}

/// `public:` label, one indentation level out from the members it heads.
pub struct SectionRenderer;

impl Render for SectionRenderer {
    fn render(
        &self,
        _printer: &dyn Dispatch,
        node: NodeRef<'_>,
        configuration: &PrinterConfiguration,
        _context: Option<NodeRef<'_>>,
    ) -> Result<String> {
        let section = node
            .as_section()
            .ok_or_else(|| Error::node_mismatch(self.name(), node.kind()))?;
        Ok(configuration
            .outer()
            .format_line(&format!("{}:", section.access.as_str())))
    }
}

/// One inheritance list entry: `public virtual Base`.
pub struct BaseClassRenderer;

impl Render for BaseClassRenderer {
    fn render(
        &self,
        printer: &dyn Dispatch,
        node: NodeRef<'_>,
        configuration: &PrinterConfiguration,
        _context: Option<NodeRef<'_>>,
    ) -> Result<String> {
        let base = node
            .as_base_class()
            .ok_or_else(|| Error::node_mismatch(self.name(), node.kind()))?;
        let mut text = format!("{} ", base.access.as_str());
        if base.is_virtual {
            text.push_str("virtual ");
        }
        for namespace in &base.namespaces {
            text.push_str(namespace);
            text.push_str("::");
        }
        text.push_str(&printer.render(base.base.as_node_ref(), configuration, Some(node))?);
        Ok(text)
    }
}

/// Union definition or forward declaration.
pub struct UnionRenderer;

impl Render for UnionRenderer {
    fn render(
        &self,
        printer: &dyn Dispatch,
        node: NodeRef<'_>,
        configuration: &PrinterConfiguration,
        _context: Option<NodeRef<'_>>,
    ) -> Result<String> {
        let union = node
            .as_union()
            .ok_or_else(|| Error::node_mismatch(self.name(), node.kind()))?;
        let mut fmt = Formatter::new(*configuration);
        print_preamble(
            printer,
            &mut fmt,
            union.comment.as_ref(),
            &union.attributes,
            node,
        )?;
        if union.is_declaration {
            fmt.print_line(&format!("union {};", union.name));
            return Ok(fmt.into_text());
        }
        fmt.print_line(&format!("union {}", union.name));
        fmt.print_line("{");
        print_nested(printer, &mut fmt, &union.content, node)?;
        fmt.print_line("};");
        Ok(fmt.into_text())
    }
}
